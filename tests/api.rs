use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use healthdiary::config::Config;
use healthdiary::{app, db, AppState};

struct TestApp {
    router: Router,
    db: SqlitePool,
    static_dir: PathBuf,
    _tmp: TempDir,
}

async fn spawn_app() -> TestApp {
    let db = db::create_memory_pool().await;
    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .expect("Failed to run database migrations");

    let tmp = TempDir::new().expect("Failed to create temp static dir");
    let config = Config {
        database_path: ":memory:".into(),
        host: "127.0.0.1".into(),
        port: 0,
        static_dir: tmp.path().to_path_buf(),
    };

    let state = AppState {
        db: db.clone(),
        config: Arc::new(config),
    };

    TestApp {
        router: app(state),
        db,
        static_dir: tmp.path().to_path_buf(),
        _tmp: tmp,
    }
}

async fn get(router: &Router, path: &str) -> Response {
    router
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(router: &Router, path: &str, form: &str) -> Response {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

fn ts(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
}

#[tokio::test]
async fn water_log_round_trips_through_create_and_list() {
    let t = spawn_app().await;

    let response = post_form(&t.router, "/water", "amount_ml=500").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/water"));

    let page = body_text(get(&t.router, "/water").await).await;
    assert!(page.contains("500 ml"));

    let rows: Vec<(i64,)> = sqlx::query_as("SELECT amount_ml FROM water_logs")
        .fetch_all(&t.db)
        .await
        .unwrap();
    assert_eq!(rows, vec![(500,)]);
}

#[tokio::test]
async fn water_list_is_descending_by_logged_at() {
    let t = spawn_app().await;

    for amount in [111, 222, 333] {
        post_form(&t.router, "/water", &format!("amount_ml={amount}")).await;
    }

    // Rewrite timestamps through the edit endpoint so the insertion order and
    // the chronological order disagree.
    let rows: Vec<(i64, i64)> = sqlx::query_as("SELECT id, amount_ml FROM water_logs ORDER BY id")
        .fetch_all(&t.db)
        .await
        .unwrap();
    for (id, amount) in &rows {
        let day = match amount {
            111 => "2024-01-01",
            222 => "2024-01-03",
            _ => "2024-01-02",
        };
        let response = post_form(
            &t.router,
            &format!("/water/{id}/edit"),
            &format!("amount_ml={amount}&logged_at={day}T08%3A00"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let listed: Vec<(i64,)> =
        sqlx::query_as("SELECT amount_ml FROM water_logs ORDER BY logged_at DESC")
            .fetch_all(&t.db)
            .await
            .unwrap();
    assert_eq!(listed, vec![(222,), (333,), (111,)]);

    let page = body_text(get(&t.router, "/water").await).await;
    let pos = |needle: &str| page.find(needle).unwrap();
    assert!(pos("222 ml") < pos("333 ml"));
    assert!(pos("333 ml") < pos("111 ml"));
}

#[tokio::test]
async fn editing_a_foreign_log_is_a_silent_no_op() {
    let t = spawn_app().await;
    post_form(&t.router, "/water", "amount_ml=100").await;

    let other_user: i64 = sqlx::query_scalar(
        "INSERT INTO users (name, height_cm, weight_kg, created_at) VALUES ('someone-else', NULL, NULL, ?1) RETURNING id",
    )
    .bind(Utc::now())
    .fetch_one(&t.db)
    .await
    .unwrap();
    let foreign_log: i64 = sqlx::query_scalar(
        "INSERT INTO water_logs (user_id, amount_ml, logged_at) VALUES (?1, 123, ?2) RETURNING id",
    )
    .bind(other_user)
    .bind(Utc::now())
    .fetch_one(&t.db)
    .await
    .unwrap();

    let response = post_form(
        &t.router,
        &format!("/water/{foreign_log}/edit"),
        "amount_ml=999&logged_at=2024-01-01T00%3A00",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let amount: i64 = sqlx::query_scalar("SELECT amount_ml FROM water_logs WHERE id = ?1")
        .bind(foreign_log)
        .fetch_one(&t.db)
        .await
        .unwrap();
    assert_eq!(amount, 123);

    let response = post_form(&t.router, &format!("/water/{foreign_log}/delete"), "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM water_logs WHERE id = ?1")
        .bind(foreign_log)
        .fetch_one(&t.db)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn deleting_a_missing_id_is_a_no_op() {
    let t = spawn_app().await;
    post_form(&t.router, "/water", "amount_ml=100").await;

    let response = post_form(&t.router, "/water/9999/delete", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM water_logs")
        .fetch_one(&t.db)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn malformed_timestamp_is_rejected_without_mutation() {
    let t = spawn_app().await;
    post_form(&t.router, "/water", "amount_ml=100").await;
    let id: i64 = sqlx::query_scalar("SELECT id FROM water_logs")
        .fetch_one(&t.db)
        .await
        .unwrap();

    let response = post_form(
        &t.router,
        &format!("/water/{id}/edit"),
        "amount_ml=999&logged_at=yesterday-ish",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let amount: i64 = sqlx::query_scalar("SELECT amount_ml FROM water_logs WHERE id = ?1")
        .bind(id)
        .fetch_one(&t.db)
        .await
        .unwrap();
    assert_eq!(amount, 100);
}

#[tokio::test]
async fn optional_fields_distinguish_absent_from_zero() {
    let t = spawn_app().await;

    post_form(
        &t.router,
        "/exercise",
        "activity=yoga&duration_min=45&calories_burned=",
    )
    .await;
    post_form(
        &t.router,
        "/exercise",
        "activity=plank&duration_min=5&calories_burned=0",
    )
    .await;

    let yoga: Option<i64> =
        sqlx::query_scalar("SELECT calories_burned FROM exercise_logs WHERE activity = 'yoga'")
            .fetch_one(&t.db)
            .await
            .unwrap();
    assert_eq!(yoga, None);

    let plank: Option<i64> =
        sqlx::query_scalar("SELECT calories_burned FROM exercise_logs WHERE activity = 'plank'")
            .fetch_one(&t.db)
            .await
            .unwrap();
    assert_eq!(plank, Some(0));
}

#[tokio::test]
async fn sleep_log_round_trips_with_absent_quality() {
    let t = spawn_app().await;

    let response = post_form(
        &t.router,
        "/sleep",
        "sleep_date=2024-01-05&start_time=2024-01-04T23%3A30&end_time=2024-01-05T07%3A10&quality=",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/sleep"));

    let (date, quality): (String, Option<i64>) =
        sqlx::query_as("SELECT sleep_date, quality FROM sleep_logs")
            .fetch_one(&t.db)
            .await
            .unwrap();
    assert_eq!(date, "2024-01-05");
    assert_eq!(quality, None);

    let page = body_text(get(&t.router, "/sleep").await).await;
    assert!(page.contains("2024-01-05"));
}

#[tokio::test]
async fn meal_log_round_trips_and_can_be_edited() {
    let t = spawn_app().await;

    let response = post_form(
        &t.router,
        "/meal",
        "meal_type=breakfast&calories=&note=&eaten_at=2024-01-03T08%3A00",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let (meal_type, calories, note): (String, Option<i64>, Option<String>) =
        sqlx::query_as("SELECT meal_type, calories, note FROM meal_logs")
            .fetch_one(&t.db)
            .await
            .unwrap();
    assert_eq!(meal_type, "breakfast");
    assert_eq!(calories, None);
    assert_eq!(note, None);

    let id: i64 = sqlx::query_scalar("SELECT id FROM meal_logs")
        .fetch_one(&t.db)
        .await
        .unwrap();
    let response = post_form(
        &t.router,
        &format!("/meal/{id}/edit"),
        "meal_type=brunch&calories=420&note=greek+yogurt&eaten_at=2024-01-03T11%3A00",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let (meal_type, calories, note): (String, Option<i64>, Option<String>) =
        sqlx::query_as("SELECT meal_type, calories, note FROM meal_logs WHERE id = ?1")
            .bind(id)
            .fetch_one(&t.db)
            .await
            .unwrap();
    assert_eq!(meal_type, "brunch");
    assert_eq!(calories, Some(420));
    assert_eq!(note.as_deref(), Some("greek yogurt"));
}

#[tokio::test]
async fn default_user_is_provisioned_once() {
    let t = spawn_app().await;

    assert_eq!(get(&t.router, "/").await.status(), StatusCode::OK);
    assert_eq!(get(&t.router, "/").await.status(), StatusCode::OK);

    let users: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM users")
        .fetch_all(&t.db)
        .await
        .unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].1, "Default User");
}

#[tokio::test]
async fn dashboard_shows_only_the_latest_five() {
    let t = spawn_app().await;

    for (i, amount) in (101..=106).enumerate() {
        post_form(&t.router, "/water", &format!("amount_ml={amount}")).await;
        let id: i64 = sqlx::query_scalar("SELECT MAX(id) FROM water_logs")
            .fetch_one(&t.db)
            .await
            .unwrap();
        post_form(
            &t.router,
            &format!("/water/{id}/edit"),
            &format!("amount_ml={amount}&logged_at=2024-01-0{day}T08%3A00", day = i + 1),
        )
        .await;
    }

    let page = body_text(get(&t.router, "/").await).await;
    assert!(page.contains("106 ml"));
    assert!(!page.contains("101 ml"));
}

#[tokio::test]
async fn report_aggregates_water_by_day() {
    let t = spawn_app().await;
    assert_eq!(get(&t.router, "/").await.status(), StatusCode::OK);
    let user_id: i64 = sqlx::query_scalar("SELECT id FROM users")
        .fetch_one(&t.db)
        .await
        .unwrap();

    for (when, amount) in [
        ("2024-01-01T09:00:00Z", 500),
        ("2024-01-01T18:00:00Z", 300),
        ("2024-01-02T09:00:00Z", 700),
    ] {
        sqlx::query("INSERT INTO water_logs (user_id, amount_ml, logged_at) VALUES (?1, ?2, ?3)")
            .bind(user_id)
            .bind(amount)
            .bind(ts(when))
            .execute(&t.db)
            .await
            .unwrap();
    }

    let response = get(&t.router, "/report").await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("1500 ml"));
    assert!(page.contains("Days: <strong>2</strong>"));
    assert!(page.contains("750.0 ml/day"));

    let svg =
        std::fs::read_to_string(t.static_dir.join("img/water_report.svg")).unwrap();
    assert_eq!(svg.matches("class=\"bar\"").count(), 2);
    assert!(svg.contains("2024-01-01: 800 ml"));
    assert!(svg.contains("2024-01-02: 700 ml"));
}

#[tokio::test]
async fn empty_report_renders_a_placeholder_chart() {
    let t = spawn_app().await;

    let response = get(&t.router, "/report").await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("Total: <strong>0 ml</strong>"));
    assert!(page.contains("Days: <strong>0</strong>"));
    assert!(page.contains("0.0 ml/day"));

    let svg =
        std::fs::read_to_string(t.static_dir.join("img/water_report.svg")).unwrap();
    assert!(svg.contains("No data"));
    assert!(!svg.contains("class=\"bar\""));
}

#[tokio::test]
async fn health_probes_respond() {
    let t = spawn_app().await;

    assert_eq!(get(&t.router, "/health").await.status(), StatusCode::OK);
    assert_eq!(get(&t.router, "/readyz").await.status(), StatusCode::OK);
}
