use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WaterLog {
    pub id: i64,
    pub user_id: i64,
    pub amount_ml: i64,
    pub logged_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateWaterRequest {
    pub amount_ml: i64,
}

#[derive(Debug, Deserialize)]
pub struct EditWaterRequest {
    pub amount_ml: i64,
    pub logged_at: String,
}
