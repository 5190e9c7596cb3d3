use crate::models::log_level::LogLevel;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Retention period for one log level.
///
/// Serialized as a plain number of days, or the string `"forever"` for
/// levels that are never auto-deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retention {
    Days(u32),
    Forever,
}

impl Serialize for Retention {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Retention::Days(days) => serializer.serialize_u32(*days),
            Retention::Forever => serializer.serialize_str("forever"),
        }
    }
}

struct RetentionVisitor;

impl<'de> Visitor<'de> for RetentionVisitor {
    type Value = Retention;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a number of days or the string \"forever\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Retention, E> {
        u32::try_from(v)
            .map(Retention::Days)
            .map_err(|_| E::custom(format!("retention days out of range: {v}")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Retention, E> {
        u32::try_from(v)
            .map(Retention::Days)
            .map_err(|_| E::custom(format!("retention days out of range: {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Retention, E> {
        if v == "forever" {
            Ok(Retention::Forever)
        } else {
            Err(E::custom(format!("unknown retention value: {v}")))
        }
    }
}

impl<'de> Deserialize<'de> for Retention {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RetentionVisitor)
    }
}

/// Per-level retention configuration.
///
/// Singleton settings record, lazily loaded and cached for the process
/// lifetime; other instances observe an update only on their own reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionPolicy {
    pub info: Retention,
    pub warning: Retention,
    pub error: Retention,
    pub security: Retention,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            info: Retention::Days(30),
            warning: Retention::Days(60),
            error: Retention::Days(90),
            security: Retention::Forever,
        }
    }
}

impl RetentionPolicy {
    pub fn for_level(&self, level: LogLevel) -> Retention {
        match level {
            LogLevel::Info => self.info,
            LogLevel::Warning => self.warning,
            LogLevel::Error => self.error,
            LogLevel::Security => self.security,
        }
    }

    /// Merge a partial update into this policy; unset fields keep their
    /// current value.
    pub fn merge(&mut self, update: RetentionPolicyUpdate) {
        if let Some(info) = update.info {
            self.info = info;
        }
        if let Some(warning) = update.warning {
            self.warning = warning;
        }
        if let Some(error) = update.error {
            self.error = error;
        }
        if let Some(security) = update.security {
            self.security = security;
        }
    }
}

/// Partial retention update from the admin surface
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionPolicyUpdate {
    pub info: Option<Retention>,
    pub warning: Option<Retention>,
    pub error: Option<Retention>,
    pub security: Option<Retention>,
}
