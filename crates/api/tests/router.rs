//! End-to-end browser flows through the router against a fake directory

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use petmatch_domain::{Config, UpstreamConfig};
use petmatch_lib::{build_router, AppContext};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn upstream() -> MockServer {
    let server = MockServer::start().await;
    let grant = json!({ "token_type": "Bearer", "access_token": "tok", "expires_in": 3600 });
    Mock::given(method("POST"))
        .and(path("/v2/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(grant))
        .mount(&server)
        .await;
    server
}

fn animal(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": "Dog",
        "status": "adoptable",
        "breeds": { "primary": "Beagle", "secondary": null, "mixed": false, "unknown": false },
        "contact": { "address": { "city": "New York", "state": "NY" } }
    })
}

fn app(server: &MockServer, with_credentials: bool) -> Router {
    let upstream = UpstreamConfig {
        base_url: format!("{}/v2", server.uri()),
        api_key: with_credentials.then(|| "key".to_string()),
        api_secret: with_credentials.then(|| "secret".to_string()),
        timeout_seconds: Some(5),
    };
    let config = Config { upstream, ..Config::default() };
    build_router(Arc::new(AppContext::new(config).unwrap()))
}

fn session_cookie(response: &Response) -> String {
    let header = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    header.split(';').next().unwrap().to_string()
}

async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(COOKIE, cookie);
    }
    app.clone().oneshot(request.body(Body::empty()).unwrap()).await.unwrap()
}

async fn post(app: &Router, uri: &str, cookie: &str, form: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(COOKIE, cookie)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// First visit: returns the page and the new session cookie.
async fn open(app: &Router) -> (String, String) {
    let response = get(app, "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response);
    (cookie, text(response).await)
}

#[tokio::test]
async fn health_reports_ok() {
    let server = upstream().await;

    let response = get(&app(&server, true), "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(text(response).await, "ok");
}

#[tokio::test]
async fn first_visit_shows_default_form() {
    let server = upstream().await;
    let (cookie, html) = open(&app(&server, true)).await;

    assert!(cookie.starts_with("petmatch_session="));
    assert!(html.contains("<title>PetMatch - Find Your Perfect Pet</title>"));
    assert!(html.contains(r#"<a class="tab active" href="/?tab=search">Search</a>"#));
    assert!(html.contains(r#"<option value="Dog" selected>Dog</option>"#));
    assert!(!html.contains("Search Results"));
}

#[tokio::test]
async fn search_then_favorite_flow() {
    let server = upstream().await;
    Mock::given(method("GET"))
        .and(path("/v2/animals"))
        .and(query_param("type", "Dog"))
        .and(query_param("location", "10001"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "animals": [animal(1, "Rex"), animal(2, "Biscuit")] })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let app = app(&server, true);
    let (cookie, _) = open(&app).await;

    let form = "animal_type=Dog&location=10001&distance_miles=50";
    let response = post(&app, "/search", &cookie, form).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/?tab=search");

    let html = text(get(&app, "/?tab=search", Some(&cookie)).await).await;
    assert!(html.contains(r#"<div class="notice notice-success">Found 2 pets!</div>"#));
    assert!(html.contains("Search Results"));
    assert!(html.contains(r#"<div class="pet-name">Rex</div>"#));
    assert!(html.contains(r#"value="10001""#));

    // The notice is shown once.
    let html = text(get(&app, "/?tab=search", Some(&cookie)).await).await;
    assert!(!html.contains("Found 2 pets!"));

    let response = post(&app, "/favorites/add", &cookie, "pet_id=2&tab=search").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let html = text(get(&app, "/?tab=favorites", Some(&cookie)).await).await;
    assert!(html.contains("Added Biscuit to favorites!"));
    assert!(html.contains("Favorites (1)"));
    assert!(html.contains(r#"id="unfav_favorites_2""#));
    assert!(!html.contains(r#"<div class="pet-name">Rex</div>"#));

    let response = post(&app, "/favorites/remove", &cookie, "pet_id=2&tab=favorites").await;
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/?tab=favorites");

    let html = text(get(&app, "/?tab=favorites", Some(&cookie)).await).await;
    assert!(html.contains("Removed Biscuit from favorites!"));
    assert!(html.contains("You haven&#39;t added any pets to your favorites yet."));
}

#[tokio::test]
async fn sessions_do_not_share_state() {
    let server = upstream().await;
    Mock::given(method("GET"))
        .and(path("/v2/animals"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "animals": [animal(1, "Rex")] })),
        )
        .mount(&server)
        .await;
    let app = app(&server, true);
    let (first, _) = open(&app).await;
    let (second, _) = open(&app).await;
    assert_ne!(first, second);

    post(&app, "/search", &first, "animal_type=Dog&location=10001").await;

    let html = text(get(&app, "/", Some(&second)).await).await;
    assert!(!html.contains("Search Results"));
}

#[tokio::test]
async fn detail_is_fetched_live_and_back_returns_to_list() {
    let server = upstream().await;
    Mock::given(method("GET"))
        .and(path("/v2/animals"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "animals": [animal(7, "Mia")] })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/animals/7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "animal": animal(7, "Mia") })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let app = app(&server, true);
    let (cookie, _) = open(&app).await;
    post(&app, "/search", &cookie, "location=10001").await;

    post(&app, "/select", &cookie, "pet_id=7&tab=search").await;
    let html = text(get(&app, "/?tab=search", Some(&cookie)).await).await;
    assert!(html.contains(r#"<h1 class="main-header">Mia</h1>"#));
    assert!(html.contains("Back to Search Results"));
    assert!(html.contains("Adoption Information"));

    post(&app, "/back", &cookie, "tab=search").await;
    let html = text(get(&app, "/?tab=search", Some(&cookie)).await).await;
    assert!(html.contains("Search Results"));
    assert!(html.contains(r#"id="details_search_7""#));
}

#[tokio::test]
async fn unavailable_detail_shows_error_with_back() {
    let server = upstream().await;
    Mock::given(method("GET"))
        .and(path("/v2/animals/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let app = app(&server, true);
    let (cookie, _) = open(&app).await;

    post(&app, "/select", &cookie, "pet_id=99&tab=search").await;
    let html = text(get(&app, "/?tab=search", Some(&cookie)).await).await;

    assert!(html.contains("Unable to retrieve pet details. Please try again."));
    assert!(html.contains(r#"id="back_search_99""#));
}

#[tokio::test]
async fn missing_credentials_surface_as_notice() {
    let server = upstream().await;
    let app = app(&server, false);
    let (cookie, _) = open(&app).await;

    post(&app, "/search", &cookie, "animal_type=Cat").await;
    let html = text(get(&app, "/", Some(&cookie)).await).await;

    assert!(html.contains("Petfinder API credentials are missing."));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_search_is_informational() {
    let server = upstream().await;
    Mock::given(method("GET"))
        .and(path("/v2/animals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "animals": [] })))
        .mount(&server)
        .await;
    let app = app(&server, true);
    let (cookie, _) = open(&app).await;

    post(&app, "/search", &cookie, "animal_type=Horse&location=10001").await;
    let html = text(get(&app, "/", Some(&cookie)).await).await;

    assert!(html.contains(r#"<div class="notice notice-info">No pets found with those criteria."#));
    assert!(!html.contains("notice-error"));
    assert!(!html.contains("Search Results"));
}

#[tokio::test]
async fn invalid_form_sets_error_notice() {
    let server = upstream().await;
    let app = app(&server, true);
    let (cookie, _) = open(&app).await;

    let response = post(&app, "/search", &cookie, "animal_type=Dragon").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let html = text(get(&app, "/", Some(&cookie)).await).await;
    assert!(html.contains("notice-error"));
    assert!(html.contains("Dragon"));
}

#[tokio::test]
async fn breeds_lookup_returns_names() {
    let server = upstream().await;
    let body = json!({ "breeds": [{ "name": "Beagle" }, { "name": "Boxer" }] });
    Mock::given(method("GET"))
        .and(path("/v2/types/Dog/breeds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let response = get(&app(&server, true), "/api/breeds/Dog", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&text(response).await).unwrap();
    assert_eq!(body, json!(["Beagle", "Boxer"]));
}

#[tokio::test]
async fn lookups_reject_bad_input() {
    let server = upstream().await;
    let app = app(&server, true);

    let response = get(&app, "/api/breeds/Dragon", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(&app, "/api/organizations?location=%20", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_str(&text(response).await).unwrap();
    assert_eq!(body["type"], "InvalidInput");
}
