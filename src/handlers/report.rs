use axum::extract::State;
use axum::response::Html;

use crate::config::CHART_URL;
use crate::error::AppResult;
use crate::{services, views, AppState};

/// Water report: totals plus the chart artifact, regenerated on every view.
pub async fn report_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let user = services::users::get_or_create_default_user(&state.db).await?;
    let logs = services::water::list_for_user(&state.db, &user).await?;

    let report = services::report::build_report(&logs);
    services::report::write_chart(&report, &state.config.chart_path())?;

    Ok(Html(views::report::render(&user, &report, CHART_URL)))
}
