//! HTTP-level integration tests for the `/api/products` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json, put_json, total_count};
use serde_json::json;
use sqlx::PgPool;

fn product_json() -> serde_json::Value {
    json!({
        "productSize": "M",
        "color": "red",
        "price": 12.5,
        "fragile": false,
        "lote": "lote_1",
        "containerType": "Cardboard"
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_returns_201_with_location(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/products", product_json()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get("location")
        .expect("Location header should be set")
        .to_str()
        .unwrap()
        .to_string();

    let json = body_json(response).await;
    let id = json["id"].as_i64().expect("id should be assigned");
    assert_eq!(location, format!("/api/products/{id}"));
    assert_eq!(json["color"], "red");
    assert_eq!(json["productSize"], "M");
    assert_eq!(json["containerType"], "Cardboard");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_then_read_round_trips(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/products", product_json()).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/products/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let mut found = body_json(response).await;
    // Identical except the server-assigned id, which both carry.
    assert_eq!(found["id"].as_i64(), Some(id));
    found.as_object_mut().unwrap().remove("id");
    assert_eq!(found, product_json());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_preset_id_is_rejected(pool: PgPool) {
    let mut body = product_json();
    body["id"] = json!(1);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/products", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "ID_EXISTS");

    let app = common::build_test_app(pool);
    let list = get(app, "/api/products").await;
    assert_eq!(total_count(&list), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_null_required_field_is_rejected(pool: PgPool) {
    let mut body = product_json();
    body["color"] = json!(null);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/products", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fieldViolations"][0]["field"], "color");

    let app = common::build_test_app(pool);
    assert_eq!(total_count(&get(app, "/api/products").await), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_bad_lote_pattern_is_rejected(pool: PgPool) {
    let mut body = product_json();
    body["lote"] = json!("lote 1!");

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/products", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    assert_eq!(total_count(&get(app, "/api/products").await), 0);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/products/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_sorted_desc_returns_newest_first(pool: PgPool) {
    for i in 0..3 {
        let mut body = product_json();
        body["lote"] = json!(format!("lote_{i}"));
        let app = common::build_test_app(pool.clone());
        post_json(app, "/api/products", body).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/products?page=0&size=20&sort=id,desc").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(total_count(&response), 3);

    let link = response
        .headers()
        .get("link")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(link.contains("rel=\"first\""));
    assert!(link.contains("rel=\"last\""));

    let json = body_json(response).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.windows(2).all(|w| w[0] > w[1]));
    // Newest entity (lote_2) leads the page.
    assert_eq!(json[0]["lote"], "lote_2");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_rejects_unknown_sort_property(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/products?sort=nope,desc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Full update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn put_replaces_all_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/products", product_json()).await).await;
    let id = created["id"].as_i64().unwrap();

    let updated_body = json!({
        "id": id,
        "productSize": "XL",
        "color": "blue",
        "price": 20.0,
        "fragile": true,
        "lote": "lote_2",
        "containerType": "Glass"
    });
    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/api/products/{id}"), updated_body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["color"], "blue");
    assert_eq!(json["productSize"], "XL");
    assert_eq!(json["fragile"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn put_with_mismatched_ids_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/products", product_json()).await).await;
    let id = created["id"].as_i64().unwrap();

    let mut body = product_json();
    body["id"] = json!(id + 1);
    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/products/{id}"), body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "ID_MISMATCH");

    // Stored entity unchanged.
    let app = common::build_test_app(pool);
    let found = body_json(get(app, &format!("/api/products/{id}")).await).await;
    assert_eq!(found["color"], "red");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn put_with_null_id_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/products/1", product_json()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "ID_NULL");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn put_on_unknown_id_is_a_business_error(pool: PgPool) {
    let mut body = product_json();
    body["id"] = json!(424242);

    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/products/424242", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "ID_NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn put_without_id_segment_is_method_not_allowed(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/products", product_json()).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_without_id_segment_is_method_not_allowed(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(app, "/api/products", json!({"color": "red"})).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Merge-patch
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_with_only_id_changes_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/products", product_json()).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(app, &format!("/api/products/{id}"), json!({"id": id})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, created);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_updates_only_the_supplied_field(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/products", product_json()).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/products/{id}"),
        json!({"id": id, "color": "green"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["color"], "green");
    assert_eq!(json["productSize"], "M");
    assert_eq!(json["lote"], "lote_1");
    assert_eq!(json["price"], 12.5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_on_unknown_id_is_a_business_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(app, "/api/products/424242", json!({"id": 424242})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "ID_NOT_FOUND");
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn cors_preflight_allows_json_writes_without_credentials(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::preflight(app, "/api/products", "POST").await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
    let allowed = headers
        .get("access-control-allow-headers")
        .unwrap()
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed.contains("content-type"));
    assert!(!allowed.contains("authorization"));
    // No auth surface, so credentialed requests are not offered.
    assert!(headers.get("access-control-allow-credentials").is_none());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_is_204_and_decrements_count(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/products", product_json()).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    assert_eq!(total_count(&get(app, "/api/products").await), 1);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/products/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    assert_eq!(total_count(&get(app, "/api/products").await), 0);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/products/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting a nonexistent id still answers 204.
    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/products/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
