use super::*;
use crate::state::test_helpers::test_app_state;

/// Serve `service` on an ephemeral port and return its base URL.
async fn spawn(service: ServiceKind) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(test_app_state(), service);
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn add_body(template_id: &str) -> serde_json::Value {
    serde_json::json!({
        "template_id": template_id,
        "student_id": "S-1001",
        "name": "Grace Hopper",
        "institute": "Naval Computing",
        "phone": "555-0199",
        "email": "grace@example.edu",
        "room": "C-3"
    })
}

#[tokio::test]
async fn healthz_is_served_by_every_service() {
    for service in [ServiceKind::All, ServiceKind::Catalog, ServiceKind::Orders] {
        let base = spawn(service).await;
        let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
        assert!(resp.status().is_success());
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["status"], "ok");
    }
}

#[tokio::test]
async fn single_service_exposes_only_its_routes() {
    let base = spawn(ServiceKind::Catalog).await;
    let catalog = reqwest::get(format!("{base}/api/catalog")).await.unwrap();
    assert_eq!(catalog.status().as_u16(), 200);
    let cart = reqwest::get(format!("{base}/api/cart")).await.unwrap();
    assert_eq!(cart.status().as_u16(), 404);
}

#[tokio::test]
async fn combined_origin_runs_the_ordering_flow() {
    let base = spawn(ServiceKind::All).await;
    let client = reqwest::Client::new();

    let catalog: serde_json::Value = client.get(format!("{base}/api/catalog")).send().await.unwrap().json().await.unwrap();
    assert_eq!(catalog["templates"].as_array().unwrap().len(), 5);

    let added = client.post(format!("{base}/api/cart")).json(&add_body("modern-red")).send().await.unwrap();
    assert_eq!(added.status().as_u16(), 201);
    let keep: serde_json::Value = added.json().await.unwrap();
    let dropped: serde_json::Value = client
        .post(format!("{base}/api/cart"))
        .json(&add_body("classic-blue"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let drop_id = dropped["item"]["item_id"].as_u64().unwrap();
    let removed = client.delete(format!("{base}/api/cart/{drop_id}")).send().await.unwrap();
    assert_eq!(removed.status().as_u16(), 200);
    let missing = client.delete(format!("{base}/api/cart/{drop_id}")).send().await.unwrap();
    assert_eq!(missing.status().as_u16(), 404);

    let cart: serde_json::Value = client.get(format!("{base}/api/cart")).send().await.unwrap().json().await.unwrap();
    assert_eq!(cart["items"].as_array().unwrap().len(), 1);

    let payload = serde_json::json!({
        "customer": {
            "id": "S-1001",
            "name": "Grace Hopper",
            "institute": "Naval Computing",
            "phone": "555-0199",
            "email": "grace@example.edu",
            "room": "C-3"
        },
        "items": cart["items"].clone()
    });
    let checkout = client.post(format!("{base}/api/checkout")).json(&payload).send().await.unwrap();
    assert_eq!(checkout.status().as_u16(), 200);
    let checkout: serde_json::Value = checkout.json().await.unwrap();
    assert_eq!(checkout["status"], "success");
    assert_eq!(checkout["order_id"], 1);

    let cart: serde_json::Value = client.get(format!("{base}/api/cart")).send().await.unwrap().json().await.unwrap();
    assert!(cart["items"].as_array().unwrap().is_empty());

    let orders: serde_json::Value = client.get(format!("{base}/api/orders")).send().await.unwrap().json().await.unwrap();
    let orders = orders["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["items"][0]["item_id"], keep["item"]["item_id"]);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let base = spawn(ServiceKind::Cart).await;
    let resp = reqwest::Client::new()
        .get(format!("{base}/api/cart"))
        .header("Origin", "http://storefront.example")
        .send()
        .await
        .unwrap();
    let allow = resp.headers().get("access-control-allow-origin").unwrap();
    assert_eq!(allow, "*");
}
