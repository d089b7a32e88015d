use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;

use crate::error::AppResult;
use crate::forms;
use crate::models::exercise::{CreateExerciseRequest, EditExerciseRequest};
use crate::{services, views, AppState};

pub async fn exercise_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let user = services::users::get_or_create_default_user(&state.db).await?;
    let logs = services::exercise::list_for_user(&state.db, &user).await?;
    Ok(Html(views::exercise::render(&user, &logs)))
}

pub async fn add_exercise(
    State(state): State<AppState>,
    Form(body): Form<CreateExerciseRequest>,
) -> AppResult<Redirect> {
    let user = services::users::get_or_create_default_user(&state.db).await?;
    services::exercise::create(
        &state.db,
        &user,
        &body.activity,
        body.duration_min,
        body.calories_burned,
    )
    .await?;
    Ok(Redirect::to("/exercise"))
}

pub async fn edit_exercise(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(body): Form<EditExerciseRequest>,
) -> AppResult<Redirect> {
    let user = services::users::get_or_create_default_user(&state.db).await?;
    let logged_at = forms::parse_timestamp(&body.logged_at)?;

    let found = services::exercise::update(
        &state.db,
        &user,
        id,
        &body.activity,
        body.duration_min,
        body.calories_burned,
        logged_at,
    )
    .await?;
    if !found {
        tracing::debug!(log_id = id, "Exercise log missing on edit, ignoring");
    }
    Ok(Redirect::to("/exercise"))
}

pub async fn delete_exercise(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    let user = services::users::get_or_create_default_user(&state.db).await?;

    let found = services::exercise::delete(&state.db, &user, id).await?;
    if !found {
        tracing::debug!(log_id = id, "Exercise log missing on delete, ignoring");
    }
    Ok(Redirect::to("/exercise"))
}
