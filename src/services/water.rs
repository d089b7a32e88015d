use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::user::User;
use crate::models::water::WaterLog;

pub async fn list_for_user(db: &SqlitePool, user: &User) -> AppResult<Vec<WaterLog>> {
    let logs = sqlx::query_as::<_, WaterLog>(
        "SELECT * FROM water_logs WHERE user_id = ?1 ORDER BY logged_at DESC",
    )
    .bind(user.id)
    .fetch_all(db)
    .await?;

    Ok(logs)
}

pub async fn list_recent(db: &SqlitePool, user: &User, limit: i64) -> AppResult<Vec<WaterLog>> {
    let logs = sqlx::query_as::<_, WaterLog>(
        "SELECT * FROM water_logs WHERE user_id = ?1 ORDER BY logged_at DESC LIMIT ?2",
    )
    .bind(user.id)
    .bind(limit)
    .fetch_all(db)
    .await?;

    Ok(logs)
}

pub async fn create(db: &SqlitePool, user: &User, amount_ml: i64) -> AppResult<WaterLog> {
    let log = sqlx::query_as::<_, WaterLog>(
        "INSERT INTO water_logs (user_id, amount_ml, logged_at) VALUES (?1, ?2, ?3) RETURNING *",
    )
    .bind(user.id)
    .bind(amount_ml)
    .bind(Utc::now())
    .fetch_one(db)
    .await?;

    Ok(log)
}

/// Overwrite the editable fields of a log owned by `user`. Returns whether a
/// row was found; an id owned by someone else counts as not found.
pub async fn update(
    db: &SqlitePool,
    user: &User,
    id: i64,
    amount_ml: i64,
    logged_at: DateTime<Utc>,
) -> AppResult<bool> {
    let result = sqlx::query(
        "UPDATE water_logs SET amount_ml = ?1, logged_at = ?2 WHERE id = ?3 AND user_id = ?4",
    )
    .bind(amount_ml)
    .bind(logged_at)
    .bind(id)
    .bind(user.id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete(db: &SqlitePool, user: &User, id: i64) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM water_logs WHERE id = ?1 AND user_id = ?2")
        .bind(id)
        .bind(user.id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
