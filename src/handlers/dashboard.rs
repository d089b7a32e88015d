use axum::extract::State;
use axum::response::Html;

use crate::error::AppResult;
use crate::{services, views, AppState};

/// Number of entries shown per log type on the dashboard.
const RECENT_LIMIT: i64 = 5;

pub async fn dashboard(State(state): State<AppState>) -> AppResult<Html<String>> {
    let user = services::users::get_or_create_default_user(&state.db).await?;

    let water_logs = services::water::list_recent(&state.db, &user, RECENT_LIMIT).await?;
    let exercise_logs = services::exercise::list_recent(&state.db, &user, RECENT_LIMIT).await?;
    let sleep_logs = services::sleep::list_recent(&state.db, &user, RECENT_LIMIT).await?;
    let meal_logs = services::meal::list_recent(&state.db, &user, RECENT_LIMIT).await?;

    Ok(Html(views::dashboard::render(
        &user,
        &water_logs,
        &exercise_logs,
        &sleep_logs,
        &meal_logs,
    )))
}
