use crate::Result as DbErrorResult;

use pl_core::{LogEntry, LogLevel};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct LogRepository;

impl LogRepository {
    pub async fn create<'e, E>(executor: E, entry: &LogEntry) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id = entry.id.to_string();
        let level = entry.level.as_str();
        let timestamp = entry.timestamp.timestamp_millis();
        let metadata = match &entry.metadata {
            Some(metadata) => Some(serde_json::to_string(metadata)?),
            None => None,
        };

        sqlx::query(
            r#"
              INSERT INTO system_logs (
                  id, level, message, timestamp,
                  user_id, user_email, path, ip, user_agent,
                  metadata, stack
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(id)
        .bind(level)
        .bind(&entry.message)
        .bind(timestamp)
        .bind(&entry.user_id)
        .bind(&entry.user_email)
        .bind(&entry.path)
        .bind(&entry.ip)
        .bind(&entry.user_agent)
        .bind(metadata)
        .bind(&entry.stack)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Most recent entries first, optionally restricted to one level
    pub async fn find_recent<'e, E>(
        executor: E,
        level: Option<LogLevel>,
        limit: i64,
    ) -> DbErrorResult<Vec<LogEntry>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = match level {
            Some(level) => {
                sqlx::query(
                    r#"
                      SELECT id, level, message, timestamp,
                             user_id, user_email, path, ip, user_agent,
                             metadata, stack
                      FROM system_logs
                      WHERE level = ?
                      ORDER BY timestamp DESC
                      LIMIT ?
                      "#,
                )
                .bind(level.as_str())
                .bind(limit)
                .fetch_all(executor)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                      SELECT id, level, message, timestamp,
                             user_id, user_email, path, ip, user_agent,
                             metadata, stack
                      FROM system_logs
                      ORDER BY timestamp DESC
                      LIMIT ?
                      "#,
                )
                .bind(limit)
                .fetch_all(executor)
                .await?
            }
        };

        Ok(rows.into_iter().map(row_to_entry).collect())
    }

    /// Entries with `timestamp <= cutoff`, oldest first
    pub async fn find_older_than<'e, E>(
        executor: E,
        level: Option<LogLevel>,
        cutoff: DateTime<Utc>,
        limit: i64,
    ) -> DbErrorResult<Vec<LogEntry>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let cutoff = cutoff.timestamp_millis();

        let rows = match level {
            Some(level) => {
                sqlx::query(
                    r#"
                      SELECT id, level, message, timestamp,
                             user_id, user_email, path, ip, user_agent,
                             metadata, stack
                      FROM system_logs
                      WHERE level = ? AND timestamp <= ?
                      ORDER BY timestamp ASC
                      LIMIT ?
                      "#,
                )
                .bind(level.as_str())
                .bind(cutoff)
                .bind(limit)
                .fetch_all(executor)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                      SELECT id, level, message, timestamp,
                             user_id, user_email, path, ip, user_agent,
                             metadata, stack
                      FROM system_logs
                      WHERE timestamp <= ?
                      ORDER BY timestamp ASC
                      LIMIT ?
                      "#,
                )
                .bind(cutoff)
                .bind(limit)
                .fetch_all(executor)
                .await?
            }
        };

        Ok(rows.into_iter().map(row_to_entry).collect())
    }

    /// Ids of entries with `timestamp <= cutoff`, oldest first
    pub async fn find_expired_ids<'e, E>(
        executor: E,
        level: Option<LogLevel>,
        cutoff: DateTime<Utc>,
        limit: i64,
    ) -> DbErrorResult<Vec<Uuid>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let cutoff = cutoff.timestamp_millis();

        let rows = match level {
            Some(level) => {
                sqlx::query(
                    r#"
                      SELECT id FROM system_logs
                      WHERE level = ? AND timestamp <= ?
                      ORDER BY timestamp ASC
                      LIMIT ?
                      "#,
                )
                .bind(level.as_str())
                .bind(cutoff)
                .bind(limit)
                .fetch_all(executor)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                      SELECT id FROM system_logs
                      WHERE timestamp <= ?
                      ORDER BY timestamp ASC
                      LIMIT ?
                      "#,
                )
                .bind(cutoff)
                .bind(limit)
                .fetch_all(executor)
                .await?
            }
        };

        Ok(rows
            .into_iter()
            .map(|r| Uuid::parse_str(&r.get::<String, _>("id")).unwrap())
            .collect())
    }

    /// Delete the given entries in one statement (atomic in SQLite)
    pub async fn delete_by_ids<'e, E>(executor: E, ids: &[Uuid]) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut builder =
            sqlx::QueryBuilder::<sqlx::Sqlite>::new("DELETE FROM system_logs WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id.to_string());
        }
        builder.push(")");

        let result = builder.build().execute(executor).await?;
        Ok(result.rows_affected())
    }
}

fn row_to_entry(row: SqliteRow) -> LogEntry {
    let metadata: Option<Map<String, Value>> = row
        .get::<Option<String>, _>("metadata")
        .and_then(|m| serde_json::from_str(&m).ok());

    LogEntry {
        id: Uuid::parse_str(&row.get::<String, _>("id")).unwrap(),
        level: LogLevel::from_str(&row.get::<String, _>("level")).unwrap(),
        message: row.get("message"),
        timestamp: DateTime::from_timestamp_millis(row.get("timestamp")).unwrap(),
        user_id: row.get("user_id"),
        user_email: row.get("user_email"),
        path: row.get("path"),
        ip: row.get("ip"),
        user_agent: row.get("user_agent"),
        metadata,
        stack: row.get("stack"),
    }
}
