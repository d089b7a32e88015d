use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::user::User;

const DEFAULT_USER_NAME: &str = "Default User";

/// Resolve the single account every request operates as. Returns the lowest-id
/// user row, inserting a placeholder on first access.
///
/// Two concurrent first requests can race the check-then-insert and create a
/// duplicate row; subsequent calls settle on the lowest id. Accepted for a
/// single-user tool.
pub async fn get_or_create_default_user(db: &SqlitePool) -> AppResult<User> {
    if let Some(user) = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id ASC LIMIT 1")
        .fetch_optional(db)
        .await?
    {
        return Ok(user);
    }

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (name, height_cm, weight_kg, created_at) VALUES (?1, NULL, NULL, ?2) RETURNING *",
    )
    .bind(DEFAULT_USER_NAME)
    .bind(Utc::now())
    .fetch_one(db)
    .await?;

    tracing::info!(user_id = user.id, "Created default user");
    Ok(user)
}
