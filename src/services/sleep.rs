use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::sleep::SleepLog;
use crate::models::user::User;

pub async fn list_for_user(db: &SqlitePool, user: &User) -> AppResult<Vec<SleepLog>> {
    let logs = sqlx::query_as::<_, SleepLog>(
        "SELECT * FROM sleep_logs WHERE user_id = ?1 ORDER BY sleep_date DESC, start_time DESC",
    )
    .bind(user.id)
    .fetch_all(db)
    .await?;

    Ok(logs)
}

pub async fn list_recent(db: &SqlitePool, user: &User, limit: i64) -> AppResult<Vec<SleepLog>> {
    let logs = sqlx::query_as::<_, SleepLog>(
        "SELECT * FROM sleep_logs WHERE user_id = ?1 \
         ORDER BY sleep_date DESC, start_time DESC LIMIT ?2",
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
    sleep_date: NaiveDate,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    quality: Option<i64>,
) -> AppResult<SleepLog> {
    let log = sqlx::query_as::<_, SleepLog>(
        "INSERT INTO sleep_logs (user_id, sleep_date, start_time, end_time, quality) \
         VALUES (?1, ?2, ?3, ?4, ?5) RETURNING *",
    )
    .bind(user.id)
    .bind(sleep_date)
    .bind(start_time)
    .bind(end_time)
    .bind(quality)
    .fetch_one(db)
    .await?;

    Ok(log)
}

pub async fn update(
    db: &SqlitePool,
    user: &User,
    id: i64,
    sleep_date: NaiveDate,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    quality: Option<i64>,
) -> AppResult<bool> {
    let result = sqlx::query(
        "UPDATE sleep_logs SET sleep_date = ?1, start_time = ?2, end_time = ?3, quality = ?4 \
         WHERE id = ?5 AND user_id = ?6",
    )
    .bind(sleep_date)
    .bind(start_time)
    .bind(end_time)
    .bind(quality)
    .bind(id)
    .bind(user.id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete(db: &SqlitePool, user: &User, id: i64) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM sleep_logs WHERE id = ?1 AND user_id = ?2")
        .bind(id)
        .bind(user.id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
