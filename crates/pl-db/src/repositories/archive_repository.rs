use crate::Result as DbErrorResult;

use pl_core::{ArchiveBundle, LogEntry};

use chrono::DateTime;
use sqlx::Row;
use uuid::Uuid;

pub struct ArchiveRepository;

impl ArchiveRepository {
    pub async fn create<'e, E>(executor: E, bundle: &ArchiveBundle) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id = bundle.id.to_string();
        let created_at = bundle.created_at.timestamp_millis();
        let entries = serde_json::to_string(&bundle.entries)?;

        sqlx::query(
            r#"
              INSERT INTO log_archives (id, created_at, created_by, logs_count, entries)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(id)
        .bind(created_at)
        .bind(&bundle.created_by)
        .bind(bundle.logs_count as i64)
        .bind(entries)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<ArchiveBundle>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
              SELECT id, created_at, created_by, logs_count, entries
              FROM log_archives
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        match row {
            Some(row) => {
                let entries: Vec<LogEntry> =
                    serde_json::from_str(&row.get::<String, _>("entries"))?;
                Ok(Some(ArchiveBundle {
                    id: Uuid::parse_str(&row.get::<String, _>("id")).unwrap(),
                    created_at: DateTime::from_timestamp_millis(row.get("created_at")).unwrap(),
                    created_by: row.get("created_by"),
                    logs_count: row.get::<i64, _>("logs_count") as u32,
                    entries,
                }))
            }
            None => Ok(None),
        }
    }
}
