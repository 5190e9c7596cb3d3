use crate::Result as DbErrorResult;

use pl_core::{Notification, NotificationKind, NotificationPriority};

use std::str::FromStr;

use chrono::DateTime;
use serde_json::{Map, Value};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct NotificationRepository;

impl NotificationRepository {
    pub async fn create<'e, E>(executor: E, notification: &Notification) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id = notification.id.to_string();
        let timestamp = notification.timestamp.timestamp_millis();
        let data = match &notification.data {
            Some(data) => Some(serde_json::to_string(data)?),
            None => None,
        };

        sqlx::query(
            r#"
              INSERT INTO system_notifications (
                  id, kind, title, message, priority, timestamp, seen, data
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(id)
        .bind(notification.kind.as_str())
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(notification.priority.as_str())
        .bind(timestamp)
        .bind(notification.seen)
        .bind(data)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_recent<'e, E>(
        executor: E,
        limit: i64,
        unseen_only: bool,
    ) -> DbErrorResult<Vec<Notification>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = if unseen_only {
            sqlx::query(
                r#"
                  SELECT id, kind, title, message, priority, timestamp, seen, data
                  FROM system_notifications
                  WHERE seen = 0
                  ORDER BY timestamp DESC
                  LIMIT ?
                  "#,
            )
            .bind(limit)
            .fetch_all(executor)
            .await?
        } else {
            sqlx::query(
                r#"
                  SELECT id, kind, title, message, priority, timestamp, seen, data
                  FROM system_notifications
                  ORDER BY timestamp DESC
                  LIMIT ?
                  "#,
            )
            .bind(limit)
            .fetch_all(executor)
            .await?
        };

        Ok(rows.into_iter().map(row_to_notification).collect())
    }

    pub async fn mark_seen<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("UPDATE system_notifications SET seen = 1 WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Flip up to `limit` unseen notifications in one statement
    pub async fn mark_all_seen<'e, E>(executor: E, limit: i64) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
              UPDATE system_notifications SET seen = 1
              WHERE id IN (
                  SELECT id FROM system_notifications
                  WHERE seen = 0
                  ORDER BY timestamp DESC
                  LIMIT ?
              )
              "#,
        )
        .bind(limit)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }
}

fn row_to_notification(row: SqliteRow) -> Notification {
    let data: Option<Map<String, Value>> = row
        .get::<Option<String>, _>("data")
        .and_then(|d| serde_json::from_str(&d).ok());

    Notification {
        id: Uuid::parse_str(&row.get::<String, _>("id")).unwrap(),
        kind: NotificationKind::from_str(&row.get::<String, _>("kind")).unwrap(),
        title: row.get("title"),
        message: row.get("message"),
        priority: NotificationPriority::from_str(&row.get::<String, _>("priority")).unwrap(),
        timestamp: DateTime::from_timestamp_millis(row.get("timestamp")).unwrap(),
        seen: row.get("seen"),
        data,
    }
}
