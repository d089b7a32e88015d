use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;

use crate::error::AppResult;
use crate::forms;
use crate::models::sleep::SleepRequest;
use crate::{services, views, AppState};

pub async fn sleep_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let user = services::users::get_or_create_default_user(&state.db).await?;
    let logs = services::sleep::list_for_user(&state.db, &user).await?;
    Ok(Html(views::sleep::render(&user, &logs)))
}

pub async fn add_sleep(
    State(state): State<AppState>,
    Form(body): Form<SleepRequest>,
) -> AppResult<Redirect> {
    let user = services::users::get_or_create_default_user(&state.db).await?;
    let sleep_date = forms::parse_date(&body.sleep_date)?;
    let start_time = forms::parse_timestamp(&body.start_time)?;
    let end_time = forms::parse_timestamp(&body.end_time)?;

    services::sleep::create(
        &state.db,
        &user,
        sleep_date,
        start_time,
        end_time,
        body.quality,
    )
    .await?;
    Ok(Redirect::to("/sleep"))
}

pub async fn edit_sleep(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(body): Form<SleepRequest>,
) -> AppResult<Redirect> {
    let user = services::users::get_or_create_default_user(&state.db).await?;
    let sleep_date = forms::parse_date(&body.sleep_date)?;
    let start_time = forms::parse_timestamp(&body.start_time)?;
    let end_time = forms::parse_timestamp(&body.end_time)?;

    let found = services::sleep::update(
        &state.db,
        &user,
        id,
        sleep_date,
        start_time,
        end_time,
        body.quality,
    )
    .await?;
    if !found {
        tracing::debug!(log_id = id, "Sleep log missing on edit, ignoring");
    }
    Ok(Redirect::to("/sleep"))
}

pub async fn delete_sleep(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    let user = services::users::get_or_create_default_user(&state.db).await?;

    let found = services::sleep::delete(&state.db, &user, id).await?;
    if !found {
        tracing::debug!(log_id = id, "Sleep log missing on delete, ignoring");
    }
    Ok(Redirect::to("/sleep"))
}
