use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::forms::empty_string_as_none;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExerciseLog {
    pub id: i64,
    pub user_id: i64,
    pub activity: String,
    pub duration_min: i64,
    /// NULL means "not recorded", which is distinct from burning zero calories.
    pub calories_burned: Option<i64>,
    pub logged_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateExerciseRequest {
    pub activity: String,
    pub duration_min: i64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub calories_burned: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct EditExerciseRequest {
    pub activity: String,
    pub duration_min: i64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub calories_burned: Option<i64>,
    pub logged_at: String,
}
