use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use bustrack_api::{app, AppState};
use bustrack_store::app_config::{InventoryConfig, LatencyConfig, ServerConfig};
use bustrack_store::Config;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app_with(inventory: InventoryConfig) -> Router {
    let config = Config {
        server: ServerConfig { port: 0 },
        latency: LatencyConfig::default(),
        inventory,
    };
    app(AppState::from_config(&config))
}

/// No latency, nothing booked, and a pinned seed.
fn test_app() -> Router {
    app_with(InventoryConfig { booked_probability: 0.0, seed: Some(7) })
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_json(app: Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn location(body: &Value) -> &str {
    body["location"].as_str().unwrap()
}

#[tokio::test]
async fn test_search_navigates_to_results() {
    let (status, body) = post_json(
        test_app(),
        "/search",
        json!({"from": "new-york", "to": "boston", "date": "2099-07-15"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(location(&body), "/available-buses?from=new-york&to=boston&date=2099-07-15");
}

#[tokio::test]
async fn test_search_rejects_incomplete_form() {
    let (status, body) = post_json(test_app(), "/search", json!({"from": "new-york", "to": "boston"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_results_list_all_buses() {
    let (status, body) = get_json(test_app(), "/available-buses?from=new-york&to=boston&date=2025-07-15").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["heading"], "New York to Boston");
    assert_eq!(body["busCount"], 4);
    let ids: Vec<&str> = body["buses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["bus1", "bus2", "bus3", "bus4"]);
    assert_eq!(
        body["buses"][0]["viewSeats"]["location"],
        "/seat-selection?busId=bus1&from=new-york&to=boston&date=2025-07-15"
    );
}

#[tokio::test]
async fn test_seat_page_uses_pinned_seed() {
    let (status, body) =
        get_json(test_app(), "/seat-selection?busId=bus1&from=new-york&to=boston&date=2025-07-15").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["heading"], "Select Your Seats");
    assert_eq!(body["seed"], 7);
    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert!(rows.iter().all(|row| row.as_array().unwrap().len() == 4));
    assert_eq!(rows[2][1]["number"], "3B");
    assert_eq!(body["availableCount"], 40);
    assert_eq!(body["summary"]["canProceed"], false);
}

#[tokio::test]
async fn test_select_seats_and_book() {
    let route = json!({"busId": "bus1", "from": "new-york", "to": "boston", "date": "2025-07-15", "seed": 7});

    let mut toggle = route.clone();
    toggle["selected"] = json!(["seat-9"]);
    toggle["seatId"] = json!("seat-10");
    let (status, summary) = post_json(test_app(), "/seat-selection/toggle", toggle).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["seatNumbers"], json!(["3A", "3B"]));
    assert_eq!(summary["totalPrice"], 70);
    assert_eq!(summary["proceedLabel"], "Proceed to Payment ($70)");

    let mut proceed = route.clone();
    proceed["selected"] = summary["selected"].clone();
    let (status, body) = post_json(test_app(), "/seat-selection/proceed", proceed).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        location(&body),
        "/booking?busId=bus1&from=new-york&to=boston&date=2025-07-15&seats=3A%2C3B&price=70"
    );

    let booking_uri = location(&body).to_string();
    let (status, booking) = get_json(test_app(), &booking_uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(booking["payLabel"], "Confirm Booking & Pay $70");
    assert_eq!(booking["perSeatPrice"], 35);

    let (status, body) = post_json(
        test_app(),
        "/booking",
        json!({
            "draft": {"busId": "bus1", "from": "new-york", "to": "boston", "date": "2025-07-15", "seats": "3A,3B", "price": 70},
            "passenger": {"fullName": "Ada Lovelace", "email": "ada@example.com", "phone": "555-0100", "address": "1 Main St"},
            "agreedToTerms": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let confirmation_uri = location(&body).to_string();
    assert!(confirmation_uri.starts_with("/booking-confirmation?reference=BT-"));

    let (status, ticket) = get_json(test_app(), &confirmation_uri).await;
    assert_eq!(status, StatusCode::OK);
    let reference = ticket["reference"].as_str().unwrap();
    let digits = reference.strip_prefix("BT-").unwrap();
    assert_eq!(digits.len(), 6);
    assert!(digits.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(ticket["seatsLabel"], "3A, 3B");
    assert_eq!(ticket["priceLabel"], "$70");
    assert_eq!(ticket["passengerName"], "Ada Lovelace");
    assert_eq!(ticket["barcode"]["bars"].as_array().unwrap().len(), 30);
}

#[tokio::test]
async fn test_random_seed_round_trips() {
    let app = app_with(InventoryConfig { booked_probability: 0.3, seed: None });
    let (status, page) =
        get_json(app.clone(), "/seat-selection?busId=bus1&from=new-york&to=boston&date=2025-07-15").await;
    assert_eq!(status, StatusCode::OK);

    // The client holds the seed as a double.
    let seed = page["seed"].as_u64().unwrap();
    assert_eq!(seed as f64 as u64, seed);

    let seats: Vec<&Value> = page["rows"].as_array().unwrap().iter().flat_map(|r| r.as_array().unwrap()).collect();
    let route = json!({"busId": "bus1", "from": "new-york", "to": "boston", "date": "2025-07-15", "seed": seed as f64 as u64});

    for seat in seats {
        let mut toggle = route.clone();
        toggle["seatId"] = seat["id"].clone();
        let (status, summary) = post_json(app.clone(), "/seat-selection/toggle", toggle).await;
        assert_eq!(status, StatusCode::OK);

        let selected = summary["selected"].as_array().unwrap();
        if seat["isBooked"] == true {
            assert!(selected.is_empty());
        } else {
            assert_eq!(selected, &vec![seat["id"].clone()]);
        }
    }
}

#[tokio::test]
async fn test_malformed_bodies_get_json_errors() {
    let (status, body) = post_json(
        test_app(),
        "/seat-selection/proceed",
        json!({"busId": "bus1", "selected": ["seat-1"]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("seed"));
    assert_eq!(body["notification"]["level"], "error");

    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert!(body["error"].is_string());

    let (status, body) = get_json(test_app(), "/my-tickets?status=archived").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_booking_accepts_seat_list() {
    let (status, body) = post_json(
        test_app(),
        "/booking",
        json!({
            "draft": {"busId": "bus1", "from": "new-york", "to": "boston", "date": "2025-07-15", "seats": ["3A", "3B"], "price": 70},
            "passenger": {"fullName": "Ada Lovelace", "email": "ada@example.com", "phone": "555-0100", "address": "1 Main St"},
            "agreedToTerms": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(location(&body).contains("seats=3A%2C3B&price=70"));
}

#[tokio::test]
async fn test_proceed_without_seats_is_rejected() {
    let (status, body) = post_json(
        test_app(),
        "/seat-selection/proceed",
        json!({"busId": "bus1", "from": "new-york", "to": "boston", "date": "2025-07-15", "seed": 7}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Select at least one seat");
}

#[tokio::test]
async fn test_booking_without_terms_is_rejected() {
    let (status, body) = post_json(
        test_app(),
        "/booking",
        json!({
            "draft": {"busId": "bus1", "seats": "3A", "price": 35},
            "passenger": {"fullName": "Ada Lovelace", "email": "ada@example.com", "phone": "555-0100", "address": "1 Main St"},
            "agreedToTerms": false
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please agree to the terms and conditions");
}

#[tokio::test]
async fn test_booking_page_rejects_bad_price() {
    let (status, _) = get_json(test_app(), "/booking?busId=bus1&seats=3A&price=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_print_ticket_is_plain_text() {
    let request = Request::builder()
        .uri("/booking-confirmation/print?reference=BT-123456&seats=3A&price=35")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(test_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("Booking reference: BT-123456"));
    assert!(text.contains("Total paid: $35"));
}

#[tokio::test]
async fn test_download_ticket() {
    let (status, body) =
        post_json(test_app(), "/booking-confirmation/download", json!({"reference": "BT-123456"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["level"], "success");
    assert_eq!(body["message"], "Ticket downloaded successfully!");
}

#[tokio::test]
async fn test_my_tickets_filters_by_status() {
    let (status, body) = get_json(test_app(), "/my-tickets?status=upcoming").await;

    assert_eq!(status, StatusCode::OK);
    let tickets = body["tickets"].as_array().unwrap();
    assert!(!tickets.is_empty());
    assert!(tickets.iter().all(|t| t["status"] == "upcoming"));

    let tabs = body["tabs"].as_array().unwrap();
    assert_eq!(tabs.len(), 4);
    assert_eq!(tabs[0]["filter"], "all");
    assert_eq!(tabs[0]["count"], 5);
    assert_eq!(tabs[1]["active"], true);
}

#[tokio::test]
async fn test_header_reflects_session() {
    let (_, guest) = get_json(test_app(), "/header").await;
    let (_, member) = get_json(test_app(), "/header?loggedIn=true").await;

    assert_eq!(guest["loggedIn"], false);
    assert_eq!(member["loggedIn"], true);
}

#[tokio::test]
async fn test_register_password_mismatch() {
    let (status, body) = post_json(
        test_app(),
        "/register",
        json!({
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "555-0100",
            "password": "secret",
            "confirmPassword": "secret2",
            "agreedToTerms": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Passwords don't match!");
    assert_eq!(body["notification"], json!({"level": "error", "message": "Passwords don't match!"}));
}

#[tokio::test]
async fn test_login_goes_home() {
    let (status, body) =
        post_json(test_app(), "/login", json!({"email": "ada@example.com", "password": "secret"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(location(&body), "/");
    assert_eq!(body["session"]["loggedIn"], true);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (status, body) = get_json(test_app(), "/routes").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Page not found: /routes");
}
