//! HTTP repository tests against a mock backend.

use serde_json::json;
use shopdesk_api::{
    ApiClient, AuthRepository, Category, ClientConfig, PageQuery, ProductInput,
    ProductRepository, SortDirection, SortField,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientConfig::new(format!("{}/api", server.uri()))).unwrap()
}

fn product_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "productName": name,
        "price": 9999.0,
        "quantity": 10,
        "description": "flagship",
        "category": "SMARTPHONE"
    })
}

#[tokio::test]
async fn test_list_sends_page_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "5"))
        .and(query_param("sortBy", "productName"))
        .and(query_param("sortDir", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [product_json(6, "iPhone 99")],
            "totalPages": 2,
            "totalElements": 6,
            "number": 1,
            "size": 5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .products()
        .list(PageQuery {
            page: 1,
            limit: 5,
            sort_by: SortField::ProductName,
            sort_dir: SortDirection::Desc,
        })
        .await
        .unwrap();

    assert_eq!(page.total_pages, 2);
    assert_eq!(page.content[0].product_name, "iPhone 99");
}

#[tokio::test]
async fn test_create_posts_wire_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/products"))
        .and(body_json(json!({
            "productName": "iPhone 99",
            "price": 9999.0,
            "quantity": 10,
            "description": "flagship",
            "category": "SMARTPHONE"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(product_json(7, "iPhone 99")))
        .mount(&server)
        .await;

    let input = ProductInput {
        product_name: "iPhone 99".to_string(),
        price: 9999.0,
        quantity: 10,
        description: "flagship".to_string(),
        category: Category::Smartphone,
    };
    let created = client(&server).products().create(&input).await.unwrap();
    assert_eq!(created.id, 7);
}

#[tokio::test]
async fn test_delete_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/products/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).products().delete(3).await.unwrap();
}

#[tokio::test]
async fn test_error_status_carries_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/42"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Product not found"))
        .mount(&server)
        .await;

    let err = client(&server).products().get(42).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.backend_message(), Some("Product not found"));
}

#[tokio::test]
async fn test_login_cookie_is_sent_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"username": "alice", "password": "secret1"})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "token=abc; Path=/")
                .set_body_json(json!({"id": "u-1", "username": "alice"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/current"))
        .and(wiremock::matchers::header("cookie", "token=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "u-1", "username": "alice"})))
        .expect(1)
        .mount(&server)
        .await;

    let auth = client(&server).auth();
    let user = auth.login("alice", "secret1").await.unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(auth.current_user().await.unwrap(), user);
}

#[tokio::test]
async fn test_register_maps_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "username": "alice",
            "password": "secret1",
            "verifyPassword": "secret1"
        })))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let err = client(&server)
        .auth()
        .register("alice", "secret1", "secret1")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(409));
    assert_eq!(err.backend_message(), None);
}

#[tokio::test]
async fn test_register_created() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let account = client(&server)
        .auth()
        .register("bob", "secret1", "secret1")
        .await
        .unwrap();
    assert_eq!(account.username, "bob");
}
