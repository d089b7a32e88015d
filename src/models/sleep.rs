use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::forms::empty_string_as_none;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SleepLog {
    pub id: i64,
    pub user_id: i64,
    pub sleep_date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub quality: Option<i64>,
}

/// Create and edit take the same field set; date/time strings are parsed in
/// the handler.
#[derive(Debug, Deserialize)]
pub struct SleepRequest {
    pub sleep_date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub quality: Option<i64>,
}
