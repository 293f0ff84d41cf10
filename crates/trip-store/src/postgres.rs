use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{
    PgPool, Postgres, Row, Transaction,
    postgres::{PgPoolOptions, PgRow},
};

use crate::{
    MarkerId, MarkerRecord, NewMarker, NewTrip, Result, StoreError, TripId, TripRecord,
    TripUpdate, record::marker_order, store::TripStore,
};

/// Marker columns in presentation order. `COLLATE "C"` compares time labels
/// byte-wise, matching [`marker_order`].
const MARKER_ORDER_BY: &str = r#"day_number ASC, time_label COLLATE "C" ASC NULLS FIRST, id ASC"#;

/// PostgreSQL-backed trip store implementation.
#[derive(Clone)]
pub struct PostgresTripStore {
    pool: PgPool,
}

impl PostgresTripStore {
    /// Creates a new PostgreSQL trip store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a new pool to the given database URL.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_marker(row: PgRow) -> Result<MarkerRecord> {
        Ok(MarkerRecord {
            id: MarkerId::new(row.try_get("id")?),
            trip_id: TripId::new(row.try_get("trip_id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            time: row.try_get("time_label")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            day: row.try_get("day_number")?,
        })
    }

    fn row_to_trip(row: PgRow, markers: Vec<MarkerRecord>) -> Result<TripRecord> {
        Ok(TripRecord {
            id: TripId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            created_at: row.try_get("created_at")?,
            markers,
        })
    }

    /// Inserts markers for a trip inside an open transaction.
    async fn insert_markers(
        tx: &mut Transaction<'_, Postgres>,
        trip_id: TripId,
        markers: Vec<NewMarker>,
    ) -> Result<Vec<MarkerRecord>> {
        let mut records = Vec::with_capacity(markers.len());

        for marker in markers {
            let id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO markers (trip_id, name, description, time_label, latitude, longitude, day_number)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id
                "#,
            )
            .bind(trip_id.as_i64())
            .bind(&marker.name)
            .bind(&marker.description)
            .bind(&marker.time)
            .bind(marker.latitude)
            .bind(marker.longitude)
            .bind(marker.day)
            .fetch_one(&mut **tx)
            .await?;

            records.push(marker.into_record(MarkerId::new(id), trip_id));
        }

        records.sort_by(marker_order);
        Ok(records)
    }
}

#[async_trait]
impl TripStore for PostgresTripStore {
    async fn insert(&self, trip: NewTrip) -> Result<TripRecord> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO trips (name, start_date, end_date, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&trip.name)
        .bind(trip.start_date)
        .bind(trip.end_date)
        .bind(trip.created_at)
        .fetch_one(&mut *tx)
        .await?;
        let id = TripId::new(id);

        let markers = Self::insert_markers(&mut tx, id, trip.markers).await?;

        tx.commit().await?;
        tracing::debug!(trip_id = %id, markers = markers.len(), "inserted trip");

        Ok(TripRecord {
            id,
            name: trip.name,
            start_date: trip.start_date,
            end_date: trip.end_date,
            created_at: trip.created_at,
            markers,
        })
    }

    async fn find(&self, id: TripId) -> Result<Option<TripRecord>> {
        let row: Option<PgRow> = sqlx::query(
            r#"
            SELECT id, name, start_date, end_date, created_at
            FROM trips
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let sql = format!(
            "SELECT id, trip_id, name, description, time_label, latitude, longitude, day_number \
             FROM markers WHERE trip_id = $1 ORDER BY {MARKER_ORDER_BY}"
        );
        let markers = sqlx::query(&sql)
            .bind(id.as_i64())
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Self::row_to_marker)
            .collect::<Result<Vec<_>>>()?;

        Self::row_to_trip(row, markers).map(Some)
    }

    async fn replace(&self, id: TripId, update: TripUpdate) -> Result<TripRecord> {
        let mut tx = self.pool.begin().await?;

        // Dropping the transaction on early return rolls it back.
        let created_at: Option<NaiveDate> = sqlx::query_scalar(
            r#"
            UPDATE trips
            SET name = $2, start_date = $3, end_date = $4
            WHERE id = $1
            RETURNING created_at
            "#,
        )
        .bind(id.as_i64())
        .bind(&update.name)
        .bind(update.start_date)
        .bind(update.end_date)
        .fetch_optional(&mut *tx)
        .await?;
        let created_at = created_at.ok_or(StoreError::TripNotFound(id))?;

        sqlx::query("DELETE FROM markers WHERE trip_id = $1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await?;

        let markers = Self::insert_markers(&mut tx, id, update.markers).await?;

        tx.commit().await?;
        tracing::debug!(trip_id = %id, markers = markers.len(), "replaced trip");

        Ok(TripRecord {
            id,
            name: update.name,
            start_date: update.start_date,
            end_date: update.end_date,
            created_at,
            markers,
        })
    }

    async fn delete(&self, id: TripId) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM markers WHERE trip_id = $1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        Ok(deleted > 0)
    }

    async fn list(&self) -> Result<Vec<TripRecord>> {
        let trip_rows = sqlx::query(
            r#"
            SELECT id, name, start_date, end_date, created_at
            FROM trips
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let sql = format!(
            "SELECT id, trip_id, name, description, time_label, latitude, longitude, day_number \
             FROM markers ORDER BY trip_id ASC, {MARKER_ORDER_BY}"
        );
        let mut markers_by_trip: HashMap<TripId, Vec<MarkerRecord>> = HashMap::new();
        for row in sqlx::query(&sql).fetch_all(&self.pool).await? {
            let marker = Self::row_to_marker(row)?;
            markers_by_trip
                .entry(marker.trip_id)
                .or_default()
                .push(marker);
        }

        trip_rows
            .into_iter()
            .map(|row| {
                let id = TripId::new(row.try_get("id")?);
                let markers = markers_by_trip.remove(&id).unwrap_or_default();
                Self::row_to_trip(row, markers)
            })
            .collect()
    }
}
