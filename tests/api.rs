use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{web, App};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde_json::{json, Value};

use student_lodge::error::AppError;
use student_lodge::models::payment::PaymentIntent;
use student_lodge::routes;
use student_lodge::services::memory_store::MemoryStore;
use student_lodge::services::payment_service::PaymentGateway;
use student_lodge::state::AppState;

/// Records every amount it is asked to charge.
#[derive(Default)]
struct RecordingGateway {
    amounts: Mutex<Vec<i64>>,
    fail: bool,
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn create_intent(&self, amount: i64) -> Result<PaymentIntent, AppError> {
        self.amounts.lock().unwrap().push(amount);
        if self.fail {
            return Err(AppError::Gateway("card_declined".into()));
        }
        Ok(PaymentIntent {
            id: "pi_test".into(),
            client_secret: format!("pi_test_secret_{}", amount),
        })
    }
}

fn state_with(gateway: Option<Arc<RecordingGateway>>) -> AppState {
    AppState {
        store: Arc::new(MemoryStore::new()),
        payments: gateway.map(|g| g as Arc<dyn PaymentGateway>),
    }
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(routes::init),
        )
        .await
    };
}

macro_rules! send {
    ($app:expr, $req:expr $(,)?) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, parse_body(&body))
    }};
}

/// JSON when the body parses, the raw text otherwise, `Null` when empty.
fn parse_body(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

fn get(uri: &str) -> TestRequest {
    TestRequest::get().uri(uri)
}

fn post(uri: &str, body: Value) -> TestRequest {
    TestRequest::post().uri(uri).set_json(body)
}

fn put(uri: &str) -> TestRequest {
    TestRequest::put().uri(uri)
}

fn patch(uri: &str) -> TestRequest {
    TestRequest::patch().uri(uri)
}

fn delete(uri: &str) -> TestRequest {
    TestRequest::delete().uri(uri)
}

fn inserted_id(ack: &Value) -> String {
    ack["insertedId"].as_str().expect("insertedId").to_string()
}

#[actix_web::test]
async fn root_reports_liveness() {
    let app = app!(state_with(None));
    let (status, body) = send!(app, get("/"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("StudentLodge server is running..."));
}

#[actix_web::test]
async fn inserts_return_fresh_ids() {
    let app = app!(state_with(None));
    let mut seen = Vec::new();
    for uri in [
        "/add-meal",
        "/users",
        "/reviews",
        "/requested-meals",
        "/upcoming-meals",
        "/add-meal",
    ] {
        let (status, ack) = send!(app, post(uri, json!({ "name": "x" })));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ack["acknowledged"], true);
        let id = inserted_id(&ack);
        assert_eq!(id.len(), 24);
        assert!(!seen.contains(&id));
        seen.push(id);
    }
}

#[actix_web::test]
async fn likes_accumulate_on_a_meal() {
    let app = app!(state_with(None));
    let (_, ack) = send!(app, post("/add-meal", json!({ "category": "breakfast" })));
    let id = inserted_id(&ack);

    for _ in 0..3 {
        let (status, ack) = send!(app, put(&format!("/likes-count/{}", id)));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ack["matchedCount"], 1);
        assert_eq!(ack["modifiedCount"], 1);
    }

    let (status, meal) = send!(app, get(&format!("/meal/{}", id)));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(meal["_id"], id);
    assert_eq!(meal["category"], "breakfast");
    assert_eq!(meal["likes"], 3);
}

#[actix_web::test]
async fn legacy_like_path_keeps_its_own_counter() {
    let app = app!(state_with(None));
    let (_, ack) = send!(app, post("/add-meal", json!({ "category": "lunch" })));
    let id = inserted_id(&ack);

    send!(app, put(&format!("/likes-count/{}", id)));
    let (status, _) = send!(app, put(&format!("/like-count/{}", id)));
    assert_eq!(status, StatusCode::OK);

    let (_, meal) = send!(app, get(&format!("/meal/{}", id)));
    assert_eq!(meal["likes"], 1);
    assert_eq!(meal["like"], 1);
}

#[actix_web::test]
async fn counters_upsert_missing_meals() {
    let app = app!(state_with(None));
    let id = ObjectId::new().to_hex();

    let (status, ack) = send!(app, put(&format!("/reviews-count/{}", id)));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack["matchedCount"], 0);
    assert_eq!(ack["upsertedCount"], 1);
    assert_eq!(ack["upsertedId"], id);

    send!(app, put(&format!("/reviews-count/{}", id)));
    let (_, meal) = send!(app, get(&format!("/meal/{}", id)));
    assert_eq!(meal["reviews_count"], 2);
}

#[actix_web::test]
async fn counter_overflow_is_a_bad_request() {
    let app = app!(state_with(None));
    let (_, ack) = send!(app, post("/add-meal", json!({ "likes": i64::MAX })));
    let id = inserted_id(&ack);

    let (status, body) = send!(app, put(&format!("/likes-count/{}", id)));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("overflows"));

    let (_, meal) = send!(app, get(&format!("/meal/{}", id)));
    assert_eq!(meal["likes"], i64::MAX);
}

#[actix_web::test]
async fn missing_meal_is_an_empty_ok() {
    let app = app!(state_with(None));
    let uri = format!("/meal/{}", ObjectId::new().to_hex());
    let resp = test::call_service(&app, get(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(test::read_body(resp).await.is_empty());
}

#[actix_web::test]
async fn malformed_ids_are_bad_requests() {
    let app = app!(state_with(None));
    for req in [
        get("/meal/not-an-id"),
        put("/likes-count/123"),
        patch("/user-make-admin/zzzzzzzzzzzzzzzzzzzzzzzz"),
        delete("/meal/delete/abc"),
    ] {
        let (status, body) = send!(app, req);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().starts_with("Invalid id"));
    }
}

#[actix_web::test]
async fn category_filter_is_exact() {
    let app = app!(state_with(None));
    for category in ["breakfast", "Breakfast", "breakfast-special", "dinner", "breakfast"] {
        send!(app, post("/add-meal", json!({ "category": category })));
    }

    let (status, meals) = send!(app, get("/meals/breakfast"));
    assert_eq!(status, StatusCode::OK);
    let meals = meals.as_array().unwrap();
    assert_eq!(meals.len(), 2);
    assert!(meals.iter().all(|m| m["category"] == "breakfast"));

    let (_, none) = send!(app, get("/meals/brunch"));
    assert_eq!(none, json!([]));

    let (_, all) = send!(app, get("/meals"));
    assert_eq!(all.as_array().unwrap().len(), 5);
}

#[actix_web::test]
async fn promoting_a_user_shows_on_lookup() {
    let app = app!(state_with(None));
    let (_, ack) = send!(app, post("/users", json!({ "email": "a@x.com", "role": "user" })));
    let id = inserted_id(&ack);
    send!(app, post("/users", json!({ "email": "A@x.com", "role": "user" })));

    let (status, ack) = send!(app, patch(&format!("/user-make-admin/{}", id)));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack["modifiedCount"], 1);

    let (_, user) = send!(app, get("/user?email=a@x.com"));
    assert_eq!(user["_id"], id);
    assert_eq!(user["role"], "admin");

    let (_, other) = send!(app, get("/user?email=A@x.com"));
    assert_eq!(other["role"], "user");

    send!(app, patch(&format!("/admin-make-user/{}", id)));
    let (_, user) = send!(app, get("/user?email=a@x.com"));
    assert_eq!(user["role"], "user");

    let (_, users) = send!(app, get("/users"));
    assert_eq!(users.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn unknown_user_email_is_empty_and_missing_email_is_rejected() {
    let app = app!(state_with(None));
    let (status, body) = send!(app, get("/user?email=nobody@x.com"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, _) = send!(app, get("/user"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn role_change_on_unknown_user_matches_nothing() {
    let app = app!(state_with(None));
    let (status, ack) =
        send!(app, patch(&format!("/user-make-admin/{}", ObjectId::new().to_hex())));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack["matchedCount"], 0);
    assert_eq!(ack["upsertedCount"], 0);

    let (_, users) = send!(app, get("/users"));
    assert_eq!(users, json!([]));
}

#[actix_web::test]
async fn reviews_ignore_the_email_filter() {
    let app = app!(state_with(None));
    send!(app, post("/reviews", json!({ "userEmail": "a@x.com", "rating": 5 })));
    send!(app, post("/reviews", json!({ "userEmail": "b@x.com", "rating": 3 })));

    let (_, all) = send!(app, get("/reviews"));
    let (_, filtered) = send!(app, get("/reviews?email=a@x.com"));
    assert_eq!(all.as_array().unwrap().len(), 2);
    assert_eq!(filtered, all);
}

#[actix_web::test]
async fn deleting_twice_counts_once() {
    let app = app!(state_with(None));
    let cases = [
        ("/add-meal", "/meal/delete"),
        ("/reviews", "/review-delete"),
        ("/requested-meals", "/requested-meals/delete"),
        ("/upcoming-meals", "/upcoming-meal/delete"),
    ];
    for (insert, remove) in cases {
        let (_, ack) = send!(app, post(insert, json!({ "title": "soup" })));
        let uri = format!("{}/{}", remove, inserted_id(&ack));

        let (status, first) = send!(app, delete(&uri));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["deletedCount"], 1);

        let (_, second) = send!(app, delete(&uri));
        assert_eq!(second["deletedCount"], 0);
    }
}

#[actix_web::test]
async fn requested_meals_filter_and_serve() {
    let app = app!(state_with(None));
    let (_, ack) = send!(app,
        post("/requested-meals", json!({ "user_email": "a@x.com", "status": "pending" })),
    );
    let id = inserted_id(&ack);
    send!(app,
        post("/requested-meals", json!({ "user_email": "b@x.com", "status": "pending" })),
    );

    let (status, ack) = send!(app, patch(&format!("/requested-meal/serve/{}", id)));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack["modifiedCount"], 1);

    let (_, mine) = send!(app, get("/requested-meals/a@x.com"));
    let mine = mine.as_array().unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["status"], "delivered");

    let (_, all) = send!(app, get("/requested-meals"));
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, nobody) = send!(app, get("/requested-meals/A@x.com"));
    assert_eq!(nobody, json!([]));
}

#[actix_web::test]
async fn upcoming_meals_round_trip() {
    let app = app!(state_with(None));
    send!(app, post("/upcoming-meals", json!({ "title": "Ramen", "likes": 0 })));

    let (status, meals) = send!(app, get("/upcoming-meals"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(meals.as_array().unwrap().len(), 1);
    assert_eq!(meals[0]["title"], "Ramen");
}

#[actix_web::test]
async fn non_object_bodies_are_rejected() {
    let app = app!(state_with(None));
    let (status, _) = send!(app, post("/add-meal", json!(["not", "an", "object"])));
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn bodies_up_to_the_json_limit_are_accepted() {
    let app = app!(state_with(None));
    let description = "x".repeat(64 * 1024);
    let (status, ack) = send!(app, post("/add-meal", json!({ "description": description })));
    assert_eq!(status, StatusCode::OK);

    let (_, meal) = send!(app, get(&format!("/meal/{}", inserted_id(&ack))));
    assert_eq!(meal["description"].as_str().unwrap().len(), 64 * 1024);

    let oversized = "x".repeat(routes::JSON_LIMIT + 1);
    let (status, _) = send!(app, post("/add-meal", json!({ "description": oversized })));
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[actix_web::test]
async fn payment_intent_returns_client_secret() {
    let gateway = Arc::new(RecordingGateway::default());
    let app = app!(state_with(Some(gateway.clone())));

    let (status, body) = send!(app, post("/create-payment-intent", json!({ "price": 19.99 })));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "clientSecret": "pi_test_secret_1998" }));

    send!(app, post("/create-payment-intent", json!({ "price": -5 })));
    assert_eq!(*gateway.amounts.lock().unwrap(), vec![1998, -500]);
}

#[actix_web::test]
async fn payment_failures_are_reported() {
    let declined = Arc::new(RecordingGateway {
        fail: true,
        ..Default::default()
    });
    let app = app!(state_with(Some(declined)));
    let (status, body) = send!(app, post("/create-payment-intent", json!({ "price": 10 })));
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["detail"].as_str().unwrap().contains("card_declined"));

    let app = app!(state_with(None));
    let (status, _) = send!(app, post("/create-payment-intent", json!({ "price": 10 })));
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = send!(app, post("/create-payment-intent", json!({ "price": "ten" })));
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
