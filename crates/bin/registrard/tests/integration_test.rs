//! End-to-end tests for the full registrard stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real JWT verifier, real services, real axum router) and exercises the HTTP
//! layer via `tower::ServiceExt::oneshot`. No TCP port is bound.

use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode, header};
use chrono::TimeZone;
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use registrar_adapter_auth_jwt::JwtVerifier;
use registrar_adapter_http_axum::router;
use registrar_adapter_http_axum::state::AppState;
use registrar_adapter_storage_sqlite_sqlx::{
    Config, Database, SqlitePaymentRepository, SqliteSemesterRepository,
};
use registrar_app::services::payment_service::PaymentService;
use registrar_app::services::semester_service::SemesterService;
use registrar_domain::id::StudentId;
use registrar_domain::payment::Payment;
use registrar_domain::semester::Semester;
use tower::ServiceExt;

const SECRET: &str = "integration-secret";

/// A fully-wired router plus handles for seeding the store behind it.
struct TestApp {
    router: axum::Router,
    db: Database,
    semesters: SqliteSemesterRepository,
    payments: SqlitePaymentRepository,
}

async fn app() -> TestApp {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let state = AppState::new(
        SemesterService::new(SqliteSemesterRepository::new(pool.clone())),
        PaymentService::new(
            SqlitePaymentRepository::new(pool.clone()),
            JwtVerifier::new(SECRET.as_bytes(), None),
        ),
    );

    TestApp {
        router: router::build(state),
        semesters: SqliteSemesterRepository::new(pool.clone()),
        payments: SqlitePaymentRepository::new(pool),
        db,
    }
}

fn token_for(student_id: Option<&str>) -> String {
    let exp = chrono::Utc::now().timestamp() + 3600;
    let claims = match student_id {
        Some(id) => serde_json::json!({ "studentId": id, "exp": exp }),
        None => serde_json::json!({ "exp": exp }),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

async fn get(app: &TestApp, uri: &str, token: Option<&str>) -> (StatusCode, Bytes) {
    let mut request = Request::builder().uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let resp = app
        .router
        .clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    (status, resp.into_body().collect().await.unwrap().to_bytes())
}

fn json(bytes: &Bytes) -> serde_json::Value {
    serde_json::from_slice(bytes).unwrap()
}

fn semester(name: &str, active: bool, year: i32, month: u32) -> Semester {
    Semester::builder()
        .name(name)
        .active(active)
        .start_date(chrono::Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap())
        .build()
        .unwrap()
}

fn payment(student: StudentId, day: u32, amount: i64) -> Payment {
    Payment::builder(student)
        .amount(amount)
        .currency("USD")
        .created_at(chrono::Utc.with_ymd_and_hms(2024, 8, day, 10, 0, 0).unwrap())
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let app = app().await;
    let (status, body) = get(&app, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"OK");
}

// ---------------------------------------------------------------------------
// Semesters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_active_semesters_latest_first() {
    let app = app().await;
    for s in [
        semester("Spring 2024", true, 2024, 2),
        semester("Summer 2024", false, 2024, 6),
        semester("Fall 2024", true, 2024, 9),
        semester("Fall 2023", true, 2023, 9),
    ] {
        app.semesters.insert(&s).await.unwrap();
    }

    let (status, body) = get(&app, "/api/semesters", None).await;

    assert_eq!(status, StatusCode::OK);
    let body = json(&body);
    assert_eq!(body["success"], true);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Fall 2024", "Spring 2024", "Fall 2023"]);
}

#[tokio::test]
async fn should_return_identical_semester_bytes_on_repeat() {
    let app = app().await;
    app.semesters
        .insert(&semester("A", true, 2024, 9))
        .await
        .unwrap();
    app.semesters
        .insert(&semester("B", true, 2024, 9))
        .await
        .unwrap();

    let (_, first) = get(&app, "/api/semesters", None).await;
    let (_, second) = get(&app, "/api/semesters", None).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn should_report_store_failure_detail_for_semesters() {
    let app = app().await;
    app.db.close().await;

    let (status, body) = get(&app, "/api/semesters", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = json(&body);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Failed to fetch semesters");
    assert!(!body["error"].as_str().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Student payments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_only_callers_payments_newest_first() {
    let app = app().await;
    let alice = StudentId::new();
    let bob = StudentId::new();
    app.payments.insert(&payment(alice, 1, 100)).await.unwrap();
    app.payments.insert(&payment(bob, 2, 200)).await.unwrap();
    app.payments.insert(&payment(alice, 3, 300)).await.unwrap();

    let token = token_for(Some(&alice.to_string()));
    let (status, body) = get(&app, "/api/student/payments", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    let body = json(&body);
    assert_eq!(body["success"], true);
    let amounts: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| {
            assert_eq!(p["studentId"], alice.to_string());
            p["amount"].as_i64().unwrap()
        })
        .collect();
    assert_eq!(amounts, vec![300, 100]);
}

#[tokio::test]
async fn should_return_identical_payment_bytes_on_repeat() {
    let app = app().await;
    let alice = StudentId::new();
    for amount in [100, 200, 300] {
        app.payments
            .insert(&payment(alice, 5, amount))
            .await
            .unwrap();
    }
    let token = token_for(Some(&alice.to_string()));

    let (status, first) = get(&app, "/api/student/payments", Some(&token)).await;
    let (_, second) = get(&app, "/api/student/payments", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&first)["data"].as_array().unwrap().len(), 3);
    assert_eq!(first, second);
}

#[tokio::test]
async fn should_refuse_payments_without_token() {
    let app = app().await;
    let (status, body) = get(&app, "/api/student/payments", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        json(&body),
        serde_json::json!({ "success": false, "message": "Unauthorized" })
    );
}

#[tokio::test]
async fn should_refuse_payments_for_token_without_student_id() {
    let app = app().await;
    let token = token_for(None);

    let (status, _) = get(&app, "/api/student/payments", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_refuse_payments_for_malformed_student_id() {
    let app = app().await;
    let token = token_for(Some("not-a-student-key"));

    let (status, _) = get(&app, "/api/student/payments", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_refuse_payments_for_forged_token() {
    let app = app().await;
    let forged = encode(
        &Header::default(),
        &serde_json::json!({
            "studentId": StudentId::new().to_string(),
            "exp": chrono::Utc::now().timestamp() + 3600,
        }),
        &EncodingKey::from_secret(b"wrong-secret"),
    )
    .unwrap();

    let (status, _) = get(&app, "/api/student/payments", Some(&forged)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_hide_store_failure_detail_for_payments() {
    let app = app().await;
    let token = token_for(Some(&StudentId::new().to_string()));
    app.db.close().await;

    let (status, body) = get(&app, "/api/student/payments", Some(&token)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json(&body),
        serde_json::json!({ "success": false, "message": "Internal server error" })
    );
}

// ---------------------------------------------------------------------------
// Unknown routes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_not_found_for_course_registration() {
    let app = app().await;
    let (status, _) = get(&app, "/api/student/course-registration", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
