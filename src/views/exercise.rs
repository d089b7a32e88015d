use crate::models::exercise::ExerciseLog;
use crate::models::user::User;

use super::{escape, fmt_opt, fmt_timestamp, input_opt, input_timestamp, page};

pub fn render(user: &User, logs: &[ExerciseLog]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Exercise</h1>");
    body.push_str(&format!(
        "<p>Tracking for {name}</p>",
        name = escape(&user.name)
    ));

    body.push_str(
        "<form method=\"post\" action=\"/exercise\" class=\"create\">\
         <label>Activity<input type=\"text\" name=\"activity\" maxlength=\"100\" required></label>\
         <label>Duration (min)<input type=\"number\" name=\"duration_min\" required></label>\
         <label>Calories burned<input type=\"number\" name=\"calories_burned\"></label>\
         <button type=\"submit\">Add</button>\
         </form>",
    );

    if logs.is_empty() {
        body.push_str("<p class=\"empty\">No exercise logged yet.</p>");
        return page("Exercise", &body);
    }

    body.push_str(
        "<table><thead><tr><th>Logged at</th><th>Activity</th><th>Duration</th>\
         <th>Calories</th><th>Actions</th></tr></thead><tbody>",
    );
    for log in logs {
        body.push_str(&format!(
            "<tr><td>{logged}</td><td>{activity}</td><td>{duration} min</td><td>{calories}</td><td>\
             <form method=\"post\" action=\"/exercise/{id}/edit\" class=\"inline\">\
             <input type=\"text\" name=\"activity\" value=\"{activity}\" maxlength=\"100\" required>\
             <input type=\"number\" name=\"duration_min\" value=\"{duration}\" required>\
             <input type=\"number\" name=\"calories_burned\" value=\"{calories_input}\">\
             <input type=\"datetime-local\" name=\"logged_at\" value=\"{logged_input}\" required>\
             <button type=\"submit\">Save</button>\
             </form>\
             <form method=\"post\" action=\"/exercise/{id}/delete\" class=\"inline\">\
             <button type=\"submit\">Delete</button>\
             </form>\
             </td></tr>",
            id = log.id,
            activity = escape(&log.activity),
            duration = log.duration_min,
            calories = fmt_opt(log.calories_burned),
            calories_input = input_opt(log.calories_burned),
            logged = fmt_timestamp(&log.logged_at),
            logged_input = input_timestamp(&log.logged_at),
        ));
    }
    body.push_str("</tbody></table>");

    page("Exercise", &body)
}
