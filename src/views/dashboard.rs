use crate::models::exercise::ExerciseLog;
use crate::models::meal::MealLog;
use crate::models::sleep::SleepLog;
use crate::models::user::User;
use crate::models::water::WaterLog;

use super::{escape, fmt_opt, fmt_timestamp, page};

pub fn render(
    user: &User,
    water_logs: &[WaterLog],
    exercise_logs: &[ExerciseLog],
    sleep_logs: &[SleepLog],
    meal_logs: &[MealLog],
) -> String {
    let mut body = String::new();
    body.push_str("<h1>Dashboard</h1>");
    body.push_str(&format!(
        "<p>Latest entries for {name}</p>",
        name = escape(&user.name)
    ));

    body.push_str("<section class=\"panel\"><h2><a href=\"/water\">Water</a></h2>");
    if water_logs.is_empty() {
        body.push_str("<p class=\"empty\">No water logged yet.</p>");
    } else {
        body.push_str("<table><tbody>");
        for log in water_logs {
            body.push_str(&format!(
                "<tr><td>{logged}</td><td>{amount} ml</td></tr>",
                logged = fmt_timestamp(&log.logged_at),
                amount = log.amount_ml,
            ));
        }
        body.push_str("</tbody></table>");
    }
    body.push_str("</section>");

    body.push_str("<section class=\"panel\"><h2><a href=\"/exercise\">Exercise</a></h2>");
    if exercise_logs.is_empty() {
        body.push_str("<p class=\"empty\">No exercise logged yet.</p>");
    } else {
        body.push_str("<table><tbody>");
        for log in exercise_logs {
            body.push_str(&format!(
                "<tr><td>{logged}</td><td>{activity}</td><td>{duration} min</td><td>{calories} kcal</td></tr>",
                logged = fmt_timestamp(&log.logged_at),
                activity = escape(&log.activity),
                duration = log.duration_min,
                calories = fmt_opt(log.calories_burned),
            ));
        }
        body.push_str("</tbody></table>");
    }
    body.push_str("</section>");

    body.push_str("<section class=\"panel\"><h2><a href=\"/sleep\">Sleep</a></h2>");
    if sleep_logs.is_empty() {
        body.push_str("<p class=\"empty\">No sleep logged yet.</p>");
    } else {
        body.push_str("<table><tbody>");
        for log in sleep_logs {
            body.push_str(&format!(
                "<tr><td>{date}</td><td>{start} to {end}</td><td>quality {quality}</td></tr>",
                date = log.sleep_date,
                start = fmt_timestamp(&log.start_time),
                end = fmt_timestamp(&log.end_time),
                quality = fmt_opt(log.quality),
            ));
        }
        body.push_str("</tbody></table>");
    }
    body.push_str("</section>");

    body.push_str("<section class=\"panel\"><h2><a href=\"/meal\">Meals</a></h2>");
    if meal_logs.is_empty() {
        body.push_str("<p class=\"empty\">No meals logged yet.</p>");
    } else {
        body.push_str("<table><tbody>");
        for log in meal_logs {
            body.push_str(&format!(
                "<tr><td>{eaten}</td><td>{meal}</td><td>{calories} kcal</td></tr>",
                eaten = fmt_timestamp(&log.eaten_at),
                meal = escape(&log.meal_type),
                calories = fmt_opt(log.calories),
            ));
        }
        body.push_str("</tbody></table>");
    }
    body.push_str("</section>");

    page("Dashboard", &body)
}
