// tests/api_client_tests.rs - ProductApi against a mock HTTP server
//
// Each test stands up its own wiremock server, so no real network traffic is
// made. Covers both endpoints, the listing query string and each error variant.

use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vegan_catalog::web_app::api::{ProductApi, ProductQuery};
use vegan_catalog::web_app::config::CatalogConfig;
use vegan_catalog::web_app::error::CatalogError;
use vegan_catalog::web_app::model::VeganStatus;

fn test_api(server: &MockServer) -> ProductApi {
    let config = CatalogConfig::new(format!("{}/api/products/", server.uri()));
    ProductApi::new(&config).expect("failed to build test ProductApi")
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[tokio::test]
async fn categories_returns_names_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/categories/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!(["Snacks", "Beverages", "Pantry"])))
        .expect(1)
        .mount(&server)
        .await;

    let categories = test_api(&server).categories().await.unwrap();
    assert_eq!(categories, vec!["Snacks", "Beverages", "Pantry"]);
}

#[tokio::test]
async fn categories_non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/categories/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_api(&server).categories().await.unwrap_err();
    assert!(
        matches!(err, CatalogError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus, got: {err:?}"
    );
}

#[tokio::test]
async fn categories_wrong_shape_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/categories/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"categories": []})))
        .mount(&server)
        .await;

    let err = test_api(&server).categories().await.unwrap_err();
    assert!(
        matches!(err, CatalogError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

// ---------------------------------------------------------------------------
// Product listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn products_first_page_sends_only_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/"))
        .and(query_param("page", "1"))
        .and(query_param_is_missing("vendor"))
        .and(query_param_is_missing("category"))
        .and(query_param_is_missing("status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "results": [
                {"name": "Oat Milk", "price": "189.00", "vegan_status": "VEGAN"},
                {"name": "Ghee", "price": 420, "vegan_status": "NON_VEGAN", "vendor": "Blinkit"}
            ],
            "has_next": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = test_api(&server)
        .products(&ProductQuery::default())
        .await
        .unwrap();

    assert!(page.has_next);
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].status(), Some(VeganStatus::Vegan));
    assert_eq!(page.results[1].vendor.as_deref(), Some("Blinkit"));
}

#[tokio::test]
async fn products_sends_all_set_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/"))
        .and(query_param("page", "3"))
        .and(query_param("vendor", "Zepto"))
        .and(query_param("category", "Snacks & Sweets"))
        .and(query_param("status", "UNSURE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "results": [],
            "has_next": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = ProductQuery {
        page: 3,
        vendor: Some("Zepto".to_string()),
        category: Some("Snacks & Sweets".to_string()),
        status: Some(VeganStatus::Unsure),
    };
    let page = test_api(&server).products(&query).await.unwrap();

    assert!(page.results.is_empty());
    assert!(!page.has_next);
}

#[tokio::test]
async fn products_query_string_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"results": [], "has_next": false})))
        .mount(&server)
        .await;

    let query = ProductQuery {
        page: 2,
        vendor: Some("Zepto".to_string()),
        category: None,
        status: Some(VeganStatus::Vegan),
    };
    test_api(&server).products(&query).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("page=2&vendor=Zepto&status=VEGAN"));
}

#[tokio::test]
async fn products_server_error_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<h1>Server Error</h1>"))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_api(&server)
        .products(&ProductQuery::default())
        .await
        .unwrap_err();
    assert!(
        matches!(err, CatalogError::UnexpectedStatus { status: 500, .. }),
        "expected UnexpectedStatus, got: {err:?}"
    );
}

#[tokio::test]
async fn products_malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = test_api(&server)
        .products(&ProductQuery::default())
        .await
        .unwrap_err();
    match err {
        CatalogError::Deserialize { context, .. } => assert_eq!(context, "product listing"),
        other => panic!("expected Deserialize, got: {other:?}"),
    }
}

#[tokio::test]
async fn products_unreachable_server_is_http_error() {
    // Reserve a free port, then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = CatalogConfig::new(format!("http://127.0.0.1:{port}/api/products/"));
    let api = ProductApi::new(&config).unwrap();

    let err = api.products(&ProductQuery::default()).await.unwrap_err();
    assert!(
        matches!(err, CatalogError::Http(_)),
        "expected Http, got: {err:?}"
    );
}

// ---------------------------------------------------------------------------
// End to end through the controller
// ---------------------------------------------------------------------------

#[tokio::test]
async fn controller_round_trip_against_mock_api() {
    use vegan_catalog::web_app::controller::{CatalogController, CatalogEvent};
    use vegan_catalog::web_app::render::CardLocale;

    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "results": [{"name": "Tofu", "category": "Protein", "vegan_status": "vegan"}],
            "has_next": true
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/products/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "results": [{"name": "Tempeh"}],
            "has_next": false
        })))
        .mount(&server)
        .await;

    let api = test_api(&server);
    let mut controller = CatalogController::new(Some("Zepto".to_string()), CardLocale::default());

    let first = controller.fetch_products().unwrap();
    let result = api.products(&first).await;
    assert!(controller.receive(&first, result).is_none());
    assert!(controller.view().load_more.visible);

    let second = controller.dispatch(CatalogEvent::LoadMore).unwrap();
    let result = api.products(&second).await;
    assert!(controller.receive(&second, result).is_none());

    let names: Vec<&str> = controller
        .view()
        .cards
        .iter()
        .map(|c| c.card.name.as_str())
        .collect();
    assert_eq!(names, vec!["Tofu", "Tempeh"]);
    assert!(!controller.view().load_more.visible);
    assert_eq!(controller.view().cards[1].card.category, "Pantry");

    let requests = server.received_requests().await.unwrap();
    assert!(requests
        .iter()
        .all(|r| r.url.query().unwrap_or_default().contains("vendor=Zepto")));
}
