use crate::Result as DbErrorResult;

use pl_core::SettingKind;

use chrono::Utc;
use serde_json::Value;
use sqlx::Row;

pub struct SettingsRepository;

impl SettingsRepository {
    /// `None` when the singleton record has never been written
    pub async fn load<'e, E>(executor: E, kind: SettingKind) -> DbErrorResult<Option<Value>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query("SELECT value FROM system_settings WHERE setting_type = ?")
            .bind(kind.as_str())
            .fetch_optional(executor)
            .await?;

        match row {
            Some(row) => {
                let text: String = row.get("value");
                Ok(Some(serde_json::from_str(&text)?))
            }
            None => Ok(None),
        }
    }

    pub async fn save<'e, E>(
        executor: E,
        kind: SettingKind,
        value: &Value,
        updated_by: Option<&str>,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let text = serde_json::to_string(value)?;
        let updated_at = Utc::now().timestamp_millis();

        sqlx::query(
            r#"
              INSERT INTO system_settings (setting_type, value, updated_at, updated_by)
              VALUES (?, ?, ?, ?)
              ON CONFLICT (setting_type) DO UPDATE SET
                  value = excluded.value,
                  updated_at = excluded.updated_at,
                  updated_by = excluded.updated_by
              "#,
        )
        .bind(kind.as_str())
        .bind(text)
        .bind(updated_at)
        .bind(updated_by)
        .execute(executor)
        .await?;

        Ok(())
    }
}
