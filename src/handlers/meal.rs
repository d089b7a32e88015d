use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;

use crate::error::AppResult;
use crate::forms;
use crate::models::meal::MealRequest;
use crate::{services, views, AppState};

pub async fn meal_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let user = services::users::get_or_create_default_user(&state.db).await?;
    let logs = services::meal::list_for_user(&state.db, &user).await?;
    Ok(Html(views::meal::render(&user, &logs)))
}

pub async fn add_meal(
    State(state): State<AppState>,
    Form(body): Form<MealRequest>,
) -> AppResult<Redirect> {
    let user = services::users::get_or_create_default_user(&state.db).await?;
    let eaten_at = forms::parse_timestamp(&body.eaten_at)?;

    services::meal::create(
        &state.db,
        &user,
        &body.meal_type,
        body.calories,
        body.note.as_deref(),
        eaten_at,
    )
    .await?;
    Ok(Redirect::to("/meal"))
}

pub async fn edit_meal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(body): Form<MealRequest>,
) -> AppResult<Redirect> {
    let user = services::users::get_or_create_default_user(&state.db).await?;
    let eaten_at = forms::parse_timestamp(&body.eaten_at)?;

    let found = services::meal::update(
        &state.db,
        &user,
        id,
        &body.meal_type,
        body.calories,
        body.note.as_deref(),
        eaten_at,
    )
    .await?;
    if !found {
        tracing::debug!(log_id = id, "Meal log missing on edit, ignoring");
    }
    Ok(Redirect::to("/meal"))
}

pub async fn delete_meal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    let user = services::users::get_or_create_default_user(&state.db).await?;

    let found = services::meal::delete(&state.db, &user, id).await?;
    if !found {
        tracing::debug!(log_id = id, "Meal log missing on delete, ignoring");
    }
    Ok(Redirect::to("/meal"))
}
