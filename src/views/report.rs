use crate::models::user::User;
use crate::services::report::WaterReport;

use super::{escape, page};

pub fn render(user: &User, report: &WaterReport, chart_url: &str) -> String {
    let mut body = String::new();
    body.push_str("<h1>Water report</h1>");
    body.push_str(&format!(
        "<p>All recorded intake for {name}</p>",
        name = escape(&user.name)
    ));

    body.push_str(&format!(
        "<ul class=\"stats\">\
         <li>Total: <strong>{total} ml</strong></li>\
         <li>Days: <strong>{days}</strong></li>\
         <li>Average: <strong>{avg:.1} ml/day</strong></li>\
         </ul>",
        total = report.total_ml,
        days = report.days,
        avg = report.avg_per_day,
    ));

    body.push_str(&format!(
        "<img src=\"{chart_url}\" alt=\"Daily water intake chart\" width=\"700\" height=\"350\">",
    ));

    page("Report", &body)
}
