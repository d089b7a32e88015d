use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::forms::empty_string_as_none;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MealLog {
    pub id: i64,
    pub user_id: i64,
    pub meal_type: String,
    pub calories: Option<i64>,
    pub note: Option<String>,
    pub eaten_at: DateTime<Utc>,
}

/// Create and edit take the same field set; `eaten_at` is an explicit form
/// input so past meals can be logged.
#[derive(Debug, Deserialize)]
pub struct MealRequest {
    pub meal_type: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub calories: Option<i64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub note: Option<String>,
    pub eaten_at: String,
}
