use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::exercise::ExerciseLog;
use crate::models::user::User;

pub async fn list_for_user(db: &SqlitePool, user: &User) -> AppResult<Vec<ExerciseLog>> {
    let logs = sqlx::query_as::<_, ExerciseLog>(
        "SELECT * FROM exercise_logs WHERE user_id = ?1 ORDER BY logged_at DESC",
    )
    .bind(user.id)
    .fetch_all(db)
    .await?;

    Ok(logs)
}

pub async fn list_recent(db: &SqlitePool, user: &User, limit: i64) -> AppResult<Vec<ExerciseLog>> {
    let logs = sqlx::query_as::<_, ExerciseLog>(
        "SELECT * FROM exercise_logs WHERE user_id = ?1 ORDER BY logged_at DESC LIMIT ?2",
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
    activity: &str,
    duration_min: i64,
    calories_burned: Option<i64>,
) -> AppResult<ExerciseLog> {
    let log = sqlx::query_as::<_, ExerciseLog>(
        "INSERT INTO exercise_logs (user_id, activity, duration_min, calories_burned, logged_at) \
         VALUES (?1, ?2, ?3, ?4, ?5) RETURNING *",
    )
    .bind(user.id)
    .bind(activity)
    .bind(duration_min)
    .bind(calories_burned)
    .bind(Utc::now())
    .fetch_one(db)
    .await?;

    Ok(log)
}

pub async fn update(
    db: &SqlitePool,
    user: &User,
    id: i64,
    activity: &str,
    duration_min: i64,
    calories_burned: Option<i64>,
    logged_at: DateTime<Utc>,
) -> AppResult<bool> {
    let result = sqlx::query(
        "UPDATE exercise_logs SET activity = ?1, duration_min = ?2, calories_burned = ?3, \
         logged_at = ?4 WHERE id = ?5 AND user_id = ?6",
    )
    .bind(activity)
    .bind(duration_min)
    .bind(calories_burned)
    .bind(logged_at)
    .bind(id)
    .bind(user.id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete(db: &SqlitePool, user: &User, id: i64) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM exercise_logs WHERE id = ?1 AND user_id = ?2")
        .bind(id)
        .bind(user.id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
