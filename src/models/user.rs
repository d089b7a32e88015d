use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub height_cm: Option<i64>,
    pub weight_kg: Option<f64>,
    pub created_at: DateTime<Utc>,
}
