use crate::models::user::User;
use crate::models::water::WaterLog;

use super::{escape, fmt_timestamp, input_timestamp, page};

pub fn render(user: &User, logs: &[WaterLog]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Water</h1>");
    body.push_str(&format!(
        "<p>Tracking for {name}</p>",
        name = escape(&user.name)
    ));

    body.push_str(
        "<form method=\"post\" action=\"/water\" class=\"create\">\
         <label>Amount (ml)<input type=\"number\" name=\"amount_ml\" required></label>\
         <button type=\"submit\">Add</button>\
         </form>",
    );

    if logs.is_empty() {
        body.push_str("<p class=\"empty\">No water logged yet.</p>");
        return page("Water", &body);
    }

    body.push_str(
        "<table><thead><tr><th>Logged at</th><th>Amount</th><th>Actions</th></tr></thead><tbody>",
    );
    for log in logs {
        body.push_str(&format!(
            "<tr><td>{logged}</td><td>{amount} ml</td><td>\
             <form method=\"post\" action=\"/water/{id}/edit\" class=\"inline\">\
             <input type=\"number\" name=\"amount_ml\" value=\"{amount}\" required>\
             <input type=\"datetime-local\" name=\"logged_at\" value=\"{logged_input}\" required>\
             <button type=\"submit\">Save</button>\
             </form>\
             <form method=\"post\" action=\"/water/{id}/delete\" class=\"inline\">\
             <button type=\"submit\">Delete</button>\
             </form>\
             </td></tr>",
            id = log.id,
            amount = log.amount_ml,
            logged = fmt_timestamp(&log.logged_at),
            logged_input = input_timestamp(&log.logged_at),
        ));
    }
    body.push_str("</tbody></table>");

    page("Water", &body)
}
