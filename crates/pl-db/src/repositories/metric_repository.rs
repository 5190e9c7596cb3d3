use crate::Result as DbErrorResult;

use pl_core::{MetricKind, MetricQuery, PerformanceMetric};

use std::str::FromStr;

use chrono::DateTime;
use serde_json::{Map, Value};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct MetricRepository;

impl MetricRepository {
    pub async fn create<'e, E>(executor: E, metric: &PerformanceMetric) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id = metric.id.to_string();
        let timestamp = metric.timestamp.timestamp_millis();
        let metadata = match &metric.metadata {
            Some(metadata) => Some(serde_json::to_string(metadata)?),
            None => None,
        };

        sqlx::query(
            r#"
              INSERT INTO performance_metrics (
                  id, kind, name, duration_ms, timestamp,
                  user_id, path, status, success, size, metadata
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(id)
        .bind(metric.kind.as_str())
        .bind(&metric.name)
        .bind(metric.duration_ms)
        .bind(timestamp)
        .bind(&metric.user_id)
        .bind(&metric.path)
        .bind(metric.status.map(|s| s as i64))
        .bind(metric.success)
        .bind(metric.size)
        .bind(metadata)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Filtered, time-ranged, limited, most-recent-first
    pub async fn find_filtered<'e, E>(
        executor: E,
        query: &MetricQuery,
    ) -> DbErrorResult<Vec<PerformanceMetric>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let mut builder = sqlx::QueryBuilder::<sqlx::Sqlite>::new(
            r#"
              SELECT id, kind, name, duration_ms, timestamp,
                     user_id, path, status, success, size, metadata
              FROM performance_metrics
              WHERE 1 = 1
              "#,
        );

        if let Some(kind) = query.kind {
            builder.push(" AND kind = ").push_bind(kind.as_str());
        }
        if let Some(start) = query.start {
            builder
                .push(" AND timestamp >= ")
                .push_bind(start.timestamp_millis());
        }
        if let Some(end) = query.end {
            builder
                .push(" AND timestamp <= ")
                .push_bind(end.timestamp_millis());
        }
        builder
            .push(" ORDER BY timestamp DESC LIMIT ")
            .push_bind(query.limit as i64);

        let rows = builder.build().fetch_all(executor).await?;

        Ok(rows.into_iter().map(row_to_metric).collect())
    }
}

fn row_to_metric(row: SqliteRow) -> PerformanceMetric {
    let metadata: Option<Map<String, Value>> = row
        .get::<Option<String>, _>("metadata")
        .and_then(|m| serde_json::from_str(&m).ok());

    PerformanceMetric {
        id: Uuid::parse_str(&row.get::<String, _>("id")).unwrap(),
        kind: MetricKind::from_str(&row.get::<String, _>("kind")).unwrap(),
        name: row.get("name"),
        duration_ms: row.get("duration_ms"),
        timestamp: DateTime::from_timestamp_millis(row.get("timestamp")).unwrap(),
        user_id: row.get("user_id"),
        path: row.get("path"),
        status: row.get::<Option<i64>, _>("status").map(|s| s as u16),
        success: row.get("success"),
        size: row.get("size"),
        metadata,
    }
}
