//! Daily water-intake aggregation and the report chart artifact.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::AppResult;
use crate::models::water::WaterLog;

const CHART_WIDTH: f64 = 700.0;
const CHART_HEIGHT: f64 = 350.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 80.0;
const BAR_COLOR: &str = "#6e7bff";

#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub amount_ml: i64,
}

#[derive(Debug, Clone)]
pub struct WaterReport {
    pub total_ml: i64,
    pub days: i64,
    /// Average intake per distinct day, rounded to one decimal; 0 when there
    /// are no days.
    pub avg_per_day: f64,
    /// One entry per distinct calendar date, ascending.
    pub daily: Vec<DailyTotal>,
}

/// Group a user's water logs by calendar day and compute the report totals.
pub fn build_report(logs: &[WaterLog]) -> WaterReport {
    let mut by_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for log in logs {
        *by_day.entry(log.logged_at.date_naive()).or_insert(0) += log.amount_ml;
    }

    let total_ml: i64 = logs.iter().map(|log| log.amount_ml).sum();
    let days = by_day.len() as i64;
    let avg_per_day = if days > 0 {
        (total_ml as f64 / days as f64 * 10.0).round() / 10.0
    } else {
        0.0
    };

    WaterReport {
        total_ml,
        days,
        avg_per_day,
        daily: by_day
            .into_iter()
            .map(|(date, amount_ml)| DailyTotal { date, amount_ml })
            .collect(),
    }
}

/// Render the daily totals as an SVG bar chart and overwrite the artifact at
/// `path`. An empty dataset produces a "No data" placeholder rather than a
/// blank chart.
pub fn write_chart(report: &WaterReport, path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_chart(&report.daily))?;
    Ok(())
}

fn render_chart(daily: &[DailyTotal]) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"##,
        w = CHART_WIDTH,
        h = CHART_HEIGHT,
    );
    let _ = write!(
        svg,
        r##"<rect width="{w}" height="{h}" fill="white"/>"##,
        w = CHART_WIDTH,
        h = CHART_HEIGHT,
    );
    let _ = write!(
        svg,
        r##"<text x="{x}" y="24" text-anchor="middle" font-size="16">Daily water intake</text>"##,
        x = CHART_WIDTH / 2.0,
    );

    if daily.is_empty() {
        let _ = write!(
            svg,
            r##"<text x="{x}" y="{y}" text-anchor="middle" font-size="14" fill="#666666">No data</text>"##,
            x = CHART_WIDTH / 2.0,
            y = CHART_HEIGHT / 2.0,
        );
        svg.push_str("</svg>");
        return svg;
    }

    let plot_width = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = CHART_HEIGHT - MARGIN_BOTTOM;
    let max_amount = daily.iter().map(|d| d.amount_ml).max().unwrap_or(0).max(1);

    // Axes and the y-axis scale labels
    let _ = write!(
        svg,
        r##"<line x1="{left}" y1="{top}" x2="{left}" y2="{base}" stroke="#333333"/>"##,
        left = MARGIN_LEFT,
        top = MARGIN_TOP,
        base = baseline,
    );
    let _ = write!(
        svg,
        r##"<line x1="{left}" y1="{base}" x2="{right}" y2="{base}" stroke="#333333"/>"##,
        left = MARGIN_LEFT,
        base = baseline,
        right = CHART_WIDTH - MARGIN_RIGHT,
    );
    let _ = write!(
        svg,
        r##"<text x="{x}" y="{y}" text-anchor="end" font-size="11">{max} ml</text>"##,
        x = MARGIN_LEFT - 6.0,
        y = MARGIN_TOP + 4.0,
        max = max_amount,
    );
    let _ = write!(
        svg,
        r##"<text x="{x}" y="{y}" text-anchor="end" font-size="11">0</text>"##,
        x = MARGIN_LEFT - 6.0,
        y = baseline + 4.0,
    );

    // Bars, date-ascending, with ISO date labels rotated for readability
    let slot = plot_width / daily.len() as f64;
    let bar_width = slot * 0.6;
    for (i, day) in daily.iter().enumerate() {
        let height = day.amount_ml as f64 / max_amount as f64 * plot_height;
        let x = MARGIN_LEFT + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = baseline - height;
        let _ = write!(
            svg,
            r##"<rect class="bar" x="{x:.1}" y="{y:.1}" width="{bw:.1}" height="{bh:.1}" fill="{color}"><title>{date}: {amount} ml</title></rect>"##,
            bw = bar_width,
            bh = height,
            color = BAR_COLOR,
            date = day.date,
            amount = day.amount_ml,
        );
        let label_x = MARGIN_LEFT + i as f64 * slot + slot / 2.0;
        let label_y = baseline + 14.0;
        let _ = write!(
            svg,
            r##"<text x="{x:.1}" y="{y:.1}" transform="rotate(-45 {x:.1} {y:.1})" text-anchor="end" font-size="11">{date}</text>"##,
            x = label_x,
            y = label_y,
            date = day.date,
        );
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn log(id: i64, ts: &str, amount_ml: i64) -> WaterLog {
        WaterLog {
            id,
            user_id: 1,
            amount_ml,
            logged_at: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S")
                .unwrap()
                .and_utc(),
        }
    }

    #[test]
    fn groups_by_day_and_averages() {
        let logs = vec![
            log(1, "2024-01-01 08:00:00", 500),
            log(2, "2024-01-01 20:00:00", 300),
            log(3, "2024-01-02 09:00:00", 700),
        ];
        let report = build_report(&logs);

        assert_eq!(report.total_ml, 1500);
        assert_eq!(report.days, 2);
        assert_eq!(report.avg_per_day, 750.0);
        assert_eq!(
            report.daily,
            vec![
                DailyTotal {
                    date: "2024-01-01".parse().unwrap(),
                    amount_ml: 800,
                },
                DailyTotal {
                    date: "2024-01-02".parse().unwrap(),
                    amount_ml: 700,
                },
            ]
        );
    }

    #[test]
    fn empty_report_avoids_division_by_zero() {
        let report = build_report(&[]);
        assert_eq!(report.total_ml, 0);
        assert_eq!(report.days, 0);
        assert_eq!(report.avg_per_day, 0.0);
        assert!(report.daily.is_empty());
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        let logs = vec![
            log(1, "2024-01-01 08:00:00", 500),
            log(2, "2024-01-02 08:00:00", 250),
            log(3, "2024-01-03 08:00:00", 250),
        ];
        // 1000 / 3 = 333.33…
        assert_eq!(build_report(&logs).avg_per_day, 333.3);
    }

    #[test]
    fn chart_has_one_bar_per_day_in_date_order() {
        let report = build_report(&[
            log(1, "2024-01-02 09:00:00", 700),
            log(2, "2024-01-01 08:00:00", 800),
        ]);
        let svg = render_chart(&report.daily);

        assert_eq!(svg.matches(r#"class="bar""#).count(), 2);
        let first = svg.find("2024-01-01").unwrap();
        let second = svg.find("2024-01-02").unwrap();
        assert!(first < second);
    }

    #[test]
    fn empty_chart_is_a_placeholder() {
        let svg = render_chart(&[]);
        assert!(svg.contains("No data"));
        assert!(!svg.contains(r#"class="bar""#));
    }

    #[test]
    fn chart_file_is_overwritten_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img").join("water_report.svg");

        let empty = build_report(&[]);
        write_chart(&empty, &path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("No data"));

        let full = build_report(&[log(1, "2024-01-01 08:00:00", 500)]);
        write_chart(&full, &path).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains(r#"class="bar""#));
        assert!(!svg.contains("No data"));
    }
}
