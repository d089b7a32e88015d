use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::meal::MealLog;
use crate::models::user::User;

pub async fn list_for_user(db: &SqlitePool, user: &User) -> AppResult<Vec<MealLog>> {
    let logs = sqlx::query_as::<_, MealLog>(
        "SELECT * FROM meal_logs WHERE user_id = ?1 ORDER BY eaten_at DESC",
    )
    .bind(user.id)
    .fetch_all(db)
    .await?;

    Ok(logs)
}

pub async fn list_recent(db: &SqlitePool, user: &User, limit: i64) -> AppResult<Vec<MealLog>> {
    let logs = sqlx::query_as::<_, MealLog>(
        "SELECT * FROM meal_logs WHERE user_id = ?1 ORDER BY eaten_at DESC LIMIT ?2",
    )
    .bind(user.id)
    .bind(limit)
    .fetch_all(db)
    .await?;

    Ok(logs)
}

pub async fn create(
    db: &SqlitePool,
    user: &User,
    meal_type: &str,
    calories: Option<i64>,
    note: Option<&str>,
    eaten_at: DateTime<Utc>,
) -> AppResult<MealLog> {
    let log = sqlx::query_as::<_, MealLog>(
        "INSERT INTO meal_logs (user_id, meal_type, calories, note, eaten_at) \
         VALUES (?1, ?2, ?3, ?4, ?5) RETURNING *",
    )
    .bind(user.id)
    .bind(meal_type)
    .bind(calories)
    .bind(note)
    .bind(eaten_at)
    .fetch_one(db)
    .await?;

    Ok(log)
}

pub async fn update(
    db: &SqlitePool,
    user: &User,
    id: i64,
    meal_type: &str,
    calories: Option<i64>,
    note: Option<&str>,
    eaten_at: DateTime<Utc>,
) -> AppResult<bool> {
    let result = sqlx::query(
        "UPDATE meal_logs SET meal_type = ?1, calories = ?2, note = ?3, eaten_at = ?4 \
         WHERE id = ?5 AND user_id = ?6",
    )
    .bind(meal_type)
    .bind(calories)
    .bind(note)
    .bind(eaten_at)
    .bind(id)
    .bind(user.id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete(db: &SqlitePool, user: &User, id: i64) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM meal_logs WHERE id = ?1 AND user_id = ?2")
        .bind(id)
        .bind(user.id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
