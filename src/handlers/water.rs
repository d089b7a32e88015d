use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;

use crate::error::AppResult;
use crate::forms;
use crate::models::water::{CreateWaterRequest, EditWaterRequest};
use crate::{services, views, AppState};

pub async fn water_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let user = services::users::get_or_create_default_user(&state.db).await?;
    let logs = services::water::list_for_user(&state.db, &user).await?;
    Ok(Html(views::water::render(&user, &logs)))
}

pub async fn add_water(
    State(state): State<AppState>,
    Form(body): Form<CreateWaterRequest>,
) -> AppResult<Redirect> {
    let user = services::users::get_or_create_default_user(&state.db).await?;
    services::water::create(&state.db, &user, body.amount_ml).await?;
    Ok(Redirect::to("/water"))
}

pub async fn edit_water(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(body): Form<EditWaterRequest>,
) -> AppResult<Redirect> {
    let user = services::users::get_or_create_default_user(&state.db).await?;
    let logged_at = forms::parse_timestamp(&body.logged_at)?;

    let found = services::water::update(&state.db, &user, id, body.amount_ml, logged_at).await?;
    if !found {
        tracing::debug!(log_id = id, "Water log missing on edit, ignoring");
    }
    Ok(Redirect::to("/water"))
}

pub async fn delete_water(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    let user = services::users::get_or_create_default_user(&state.db).await?;

    let found = services::water::delete(&state.db, &user, id).await?;
    if !found {
        tracing::debug!(log_id = id, "Water log missing on delete, ignoring");
    }
    Ok(Redirect::to("/water"))
}
