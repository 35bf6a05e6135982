use sqlx::{QueryBuilder, SqlitePool};

use super::{ReadingStore, StoreError};
use crate::{
    dto::{DetailQuery, Reading},
    util::{timestamp::to_nanos, DB},
};

#[derive(Clone, Copy)]
enum GroupFilter {
    Station,
    Channel,
}

impl GroupFilter {
    fn column(self) -> &'static str {
        match self {
            GroupFilter::Station => "gnss_id",
            GroupFilter::Channel => "sensor_id",
        }
    }
}

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteStore { pool }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn latest_where(
        &self,
        filter: GroupFilter,
        values: &[&str],
    ) -> Result<Vec<Reading>, StoreError> {
        if values.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<DB>::new(
            r#"
            SELECT gnss_id, sensor_id, value, timestamp
            FROM
                (
                    SELECT
                        gnss_id,
                        sensor_id,
                        value,
                        timestamp,
                        row_number() over (partition by gnss_id, sensor_id
                    ORDER BY
                        timestamp DESC, rowid ASC) AS row_number
                    FROM
                        gnss
                    WHERE "#,
        );
        builder.push(filter.column());
        builder.push(" IN (");

        let mut separated = builder.separated(", ");
        for value in values {
            separated.push_bind(*value);
        }
        separated.push_unseparated(
            r#")
                )
                a
            WHERE
                row_number = 1
            ORDER BY gnss_id, sensor_id"#,
        );

        Ok(builder
            .build_query_as::<Reading>()
            .fetch_all(&self.pool)
            .await?)
    }
}

impl ReadingStore for SqliteStore {
    async fn latest_for_stations(&self, station_ids: &[&str]) -> Result<Vec<Reading>, StoreError> {
        self.latest_where(GroupFilter::Station, station_ids).await
    }

    async fn latest_for_channels(&self, channel_ids: &[&str]) -> Result<Vec<Reading>, StoreError> {
        self.latest_where(GroupFilter::Channel, channel_ids).await
    }

    async fn station_ids(&self) -> Result<Vec<String>, StoreError> {
        Ok(
            sqlx::query_scalar::<_, String>("SELECT DISTINCT gnss_id FROM gnss ORDER BY gnss_id")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn channel_ids(&self, station_id: &str) -> Result<Vec<String>, StoreError> {
        Ok(sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT sensor_id FROM gnss WHERE gnss_id = ? ORDER BY sensor_id",
        )
        .bind(station_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn readings(&self, query: &DetailQuery) -> Result<Vec<Reading>, StoreError> {
        let mut builder = QueryBuilder::<DB>::new(
            "SELECT gnss_id, sensor_id, value, timestamp FROM gnss WHERE gnss_id = ",
        );
        builder.push_bind(query.station_id());
        builder.push(" AND sensor_id = ");
        builder.push_bind(query.channel_id());

        if let Some(start) = query.start() {
            builder.push(" AND timestamp >= ");
            builder.push_bind(to_nanos(start));
        }
        if let Some(end) = query.end() {
            builder.push(" AND timestamp <= ");
            builder.push_bind(to_nanos(end));
        }

        builder.push(" ORDER BY timestamp ASC, rowid ASC");

        Ok(builder
            .build_query_as::<Reading>()
            .fetch_all(&self.pool)
            .await?)
    }
}
