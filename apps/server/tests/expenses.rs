use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::json;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

use centime_server::{api::app_router, build_state, config::Config};

async fn build_test_router() -> (axum::Router, TempDir) {
    let tmp = tempdir().unwrap();
    std::env::set_var("CENTIME_DB_PATH", tmp.path());
    std::env::set_var("CENTIME_SECRET_KEY", BASE64.encode([7u8; 32]));
    std::env::remove_var("DATABASE_URL");

    let config = Config::from_env();
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

async fn request(
    app: &axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn sign_up(app: &axum::Router, email: &str, display_name: &str) -> String {
    let payload = json!({
        "displayName": display_name,
        "email": email,
        "password": "correct horse"
    });
    let (status, session) =
        request(app, Method::POST, "/api/v1/auth/signup", None, Some(payload)).await;
    assert_eq!(status, 201);
    session["accessToken"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn expense_and_income_crud() {
    let (app, _tmp) = build_test_router().await;
    let token = sign_up(&app, "mina@example.com", "Mina").await;

    // Three expenses spread across March
    let (status, groceries) = request(
        &app,
        Method::POST,
        "/api/v1/expenses",
        Some(&token),
        Some(json!({
            "category": "Food & Dining",
            "description": "Groceries",
            "amount": 54.25,
            "date": "2025-03-08"
        })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(groceries["amount"].as_f64(), Some(54.25));
    assert_eq!(groceries["category"], "Food & Dining");

    let (status, metro) = request(
        &app,
        Method::POST,
        "/api/v1/expenses",
        Some(&token),
        Some(json!({
            "category": "Transportation",
            "description": "Metro pass",
            "amount": 30.0,
            "date": "2025-03-17"
        })),
    )
    .await;
    assert_eq!(status, 200);

    let (status, market) = request(
        &app,
        Method::POST,
        "/api/v1/expenses",
        Some(&token),
        Some(json!({
            "category": "Food & Dining",
            "description": "Farmers market",
            "amount": 12.5,
            "date": "2025-03-03"
        })),
    )
    .await;
    assert_eq!(status, 200);

    // Full list comes back newest first
    let (status, list) = request(&app, Method::GET, "/api/v1/expenses", Some(&token), None).await;
    assert_eq!(status, 200);
    let dates: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, ["2025-03-17", "2025-03-08", "2025-03-03"]);

    // Category filter
    let (status, filtered) = request(
        &app,
        Method::GET,
        "/api/v1/expenses?category=Transportation",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(filtered.as_array().unwrap().len(), 1);
    assert_eq!(filtered[0]["description"], "Metro pass");

    // Inclusive date range
    let (status, ranged) = request(
        &app,
        Method::GET,
        "/api/v1/expenses?startDate=2025-03-03&endDate=2025-03-08",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(ranged.as_array().unwrap().len(), 2);

    // Mixing both filters is rejected
    let (status, _) = request(
        &app,
        Method::GET,
        "/api/v1/expenses?category=Transportation&startDate=2025-03-01&endDate=2025-03-31",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 400);

    // Full-record update; the body may omit the id, the path supplies it
    let metro_id = metro["id"].as_str().unwrap();
    let (status, updated) = request(
        &app,
        Method::PUT,
        &format!("/api/v1/expenses/{metro_id}"),
        Some(&token),
        Some(json!({
            "category": "Transportation",
            "description": "Monthly metro pass",
            "amount": 35.5,
            "date": "2025-03-17"
        })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(updated["id"].as_str(), Some(metro_id));
    assert_eq!(updated["description"], "Monthly metro pass");
    assert_eq!(updated["amount"].as_f64(), Some(35.5));

    let (status, fetched) = request(
        &app,
        Method::GET,
        &format!("/api/v1/expenses/{metro_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(fetched["description"], "Monthly metro pass");

    // Delete, then the record is really gone
    let market_id = market["id"].as_str().unwrap();
    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/v1/expenses/{market_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 204);
    let (status, _) = request(
        &app,
        Method::GET,
        &format!("/api/v1/expenses/{market_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 404);
    let (status, list) = request(&app, Method::GET, "/api/v1/expenses", Some(&token), None).await;
    assert_eq!(status, 200);
    assert_eq!(list.as_array().unwrap().len(), 2);

    // A second account sees none of it
    let other_token = sign_up(&app, "sam@example.com", "Sam").await;
    let (status, list) = request(
        &app,
        Method::GET,
        "/api/v1/expenses",
        Some(&other_token),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(list.as_array().unwrap().len(), 0);
    let (status, _) = request(
        &app,
        Method::GET,
        &format!("/api/v1/expenses/{metro_id}"),
        Some(&other_token),
        None,
    )
    .await;
    assert_eq!(status, 404);
    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/v1/expenses/{metro_id}"),
        Some(&other_token),
        None,
    )
    .await;
    assert_eq!(status, 404);

    // Income entries carry a source and a recurrence
    let (status, salary) = request(
        &app,
        Method::POST,
        "/api/v1/incomes",
        Some(&token),
        Some(json!({
            "source": "Salary",
            "description": "March salary",
            "amount": 2500.0,
            "date": "2025-03-01",
            "frequency": "monthly"
        })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(salary["frequency"], "monthly");

    // Frequency defaults to one-time when omitted
    let (status, gift) = request(
        &app,
        Method::POST,
        "/api/v1/incomes",
        Some(&token),
        Some(json!({
            "source": "Gifts",
            "description": "Birthday",
            "amount": 75.0,
            "date": "2025-03-15"
        })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(gift["frequency"], "one-time");

    let (status, by_source) = request(
        &app,
        Method::GET,
        "/api/v1/incomes?source=Salary",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(by_source.as_array().unwrap().len(), 1);

    let salary_id = salary["id"].as_str().unwrap();
    let (status, updated) = request(
        &app,
        Method::PUT,
        &format!("/api/v1/incomes/{salary_id}"),
        Some(&token),
        Some(json!({
            "source": "Salary",
            "description": "March salary, corrected",
            "amount": 2600.0,
            "date": "2025-03-01",
            "frequency": "bi-weekly"
        })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(updated["frequency"], "bi-weekly");
    assert_eq!(updated["amount"].as_f64(), Some(2600.0));

    let gift_id = gift["id"].as_str().unwrap();
    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/v1/incomes/{gift_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 204);
    let (status, _) = request(
        &app,
        Method::GET,
        &format!("/api/v1/incomes/{gift_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 404);

    for key in ["CENTIME_DB_PATH", "CENTIME_SECRET_KEY"] {
        std::env::remove_var(key);
    }
}
