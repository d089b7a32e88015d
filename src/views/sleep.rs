use crate::models::sleep::SleepLog;
use crate::models::user::User;

use super::{escape, fmt_opt, fmt_timestamp, input_opt, input_timestamp, page};

pub fn render(user: &User, logs: &[SleepLog]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Sleep</h1>");
    body.push_str(&format!(
        "<p>Tracking for {name}</p>",
        name = escape(&user.name)
    ));

    body.push_str(
        "<form method=\"post\" action=\"/sleep\" class=\"create\">\
         <label>Date<input type=\"date\" name=\"sleep_date\" required></label>\
         <label>Fell asleep<input type=\"datetime-local\" name=\"start_time\" required></label>\
         <label>Woke up<input type=\"datetime-local\" name=\"end_time\" required></label>\
         <label>Quality (1-5)<input type=\"number\" name=\"quality\"></label>\
         <button type=\"submit\">Add</button>\
         </form>",
    );

    if logs.is_empty() {
        body.push_str("<p class=\"empty\">No sleep logged yet.</p>");
        return page("Sleep", &body);
    }

    body.push_str(
        "<table><thead><tr><th>Date</th><th>Fell asleep</th><th>Woke up</th>\
         <th>Quality</th><th>Actions</th></tr></thead><tbody>",
    );
    for log in logs {
        body.push_str(&format!(
            "<tr><td>{date}</td><td>{start}</td><td>{end}</td><td>{quality}</td><td>\
             <form method=\"post\" action=\"/sleep/{id}/edit\" class=\"inline\">\
             <input type=\"date\" name=\"sleep_date\" value=\"{date}\" required>\
             <input type=\"datetime-local\" name=\"start_time\" value=\"{start_input}\" required>\
             <input type=\"datetime-local\" name=\"end_time\" value=\"{end_input}\" required>\
             <input type=\"number\" name=\"quality\" value=\"{quality_input}\">\
             <button type=\"submit\">Save</button>\
             </form>\
             <form method=\"post\" action=\"/sleep/{id}/delete\" class=\"inline\">\
             <button type=\"submit\">Delete</button>\
             </form>\
             </td></tr>",
            id = log.id,
            date = log.sleep_date,
            start = fmt_timestamp(&log.start_time),
            end = fmt_timestamp(&log.end_time),
            quality = fmt_opt(log.quality),
            quality_input = input_opt(log.quality),
            start_input = input_timestamp(&log.start_time),
            end_input = input_timestamp(&log.end_time),
        ));
    }
    body.push_str("</tbody></table>");

    page("Sleep", &body)
}
