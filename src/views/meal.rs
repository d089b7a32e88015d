use crate::models::meal::MealLog;
use crate::models::user::User;

use super::{escape, fmt_opt, fmt_timestamp, input_opt, input_timestamp, page};

pub fn render(user: &User, logs: &[MealLog]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Meals</h1>");
    body.push_str(&format!(
        "<p>Tracking for {name}</p>",
        name = escape(&user.name)
    ));

    body.push_str(
        "<form method=\"post\" action=\"/meal\" class=\"create\">\
         <label>Meal<input type=\"text\" name=\"meal_type\" maxlength=\"100\" required></label>\
         <label>Calories<input type=\"number\" name=\"calories\"></label>\
         <label>Note<input type=\"text\" name=\"note\" maxlength=\"200\"></label>\
         <label>Eaten at<input type=\"datetime-local\" name=\"eaten_at\" required></label>\
         <button type=\"submit\">Add</button>\
         </form>",
    );

    if logs.is_empty() {
        body.push_str("<p class=\"empty\">No meals logged yet.</p>");
        return page("Meals", &body);
    }

    body.push_str(
        "<table><thead><tr><th>Eaten at</th><th>Meal</th><th>Calories</th>\
         <th>Note</th><th>Actions</th></tr></thead><tbody>",
    );
    for log in logs {
        body.push_str(&format!(
            "<tr><td>{eaten}</td><td>{meal}</td><td>{calories}</td><td>{note}</td><td>\
             <form method=\"post\" action=\"/meal/{id}/edit\" class=\"inline\">\
             <input type=\"text\" name=\"meal_type\" value=\"{meal}\" maxlength=\"100\" required>\
             <input type=\"number\" name=\"calories\" value=\"{calories_input}\">\
             <input type=\"text\" name=\"note\" value=\"{note}\" maxlength=\"200\">\
             <input type=\"datetime-local\" name=\"eaten_at\" value=\"{eaten_input}\" required>\
             <button type=\"submit\">Save</button>\
             </form>\
             <form method=\"post\" action=\"/meal/{id}/delete\" class=\"inline\">\
             <button type=\"submit\">Delete</button>\
             </form>\
             </td></tr>",
            id = log.id,
            meal = escape(&log.meal_type),
            calories = fmt_opt(log.calories),
            calories_input = input_opt(log.calories),
            note = escape(log.note.as_deref().unwrap_or("")),
            eaten = fmt_timestamp(&log.eaten_at),
            eaten_input = input_timestamp(&log.eaten_at),
        ));
    }
    body.push_str("</tbody></table>");

    page("Meals", &body)
}
