// Service tests against an in-process fake backend

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use waconsole_api::{DeleteOutcome, Services, customers, subscriptions};
use waconsole_core::{
    ConsoleConfig, Customer, CustomerInput, DeleteResolution, EntityId, ListQuery, ListSync, Notice,
    NoticeLevel, Notifier, PeriodType, SubscriptionInput,
};

#[derive(Default)]
struct Recorder(Mutex<Vec<Notice>>);

impl Notifier for Recorder {
    fn notify(&self, notice: Notice) {
        self.0.lock().unwrap().push(notice);
    }
}

impl Recorder {
    fn texts(&self) -> Vec<(NoticeLevel, String)> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .map(|n| (n.level, n.text.clone()))
            .collect()
    }
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api", addr)
}

fn services(base_url: &str) -> (Services, Arc<Recorder>) {
    let config = ConsoleConfig {
        api_base_url: base_url.to_string(),
        api_token: "test-token".to_string(),
        timeout_secs: 5,
        ..Default::default()
    };
    let recorder = Arc::new(Recorder::default());
    let services = Services::new(&config, recorder.clone()).unwrap();
    (services, recorder)
}

fn customer_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "fullName": name,
        "companyName": null,
        "mobileNumber": "967700000001",
        "masterMobileNumber": "",
        "creationTime": "2025-07-24T10:15:30.123"
    })
}

// ============================================================================
// Customers
// ============================================================================

#[tokio::test]
async fn test_list_sends_credential_and_query() {
    async fn list(headers: HeaderMap, Query(q): Query<HashMap<String, String>>) -> Json<Value> {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        Json(json!({
            "items": [{
                "id": 1,
                "fullName": q.get("Sorting").cloned().unwrap_or_default(),
                "companyName": auth,
                "mobileNumber": q.get("MaxResultCount").cloned().unwrap_or_default(),
                "masterMobileNumber": q.get("Filter").cloned().unwrap_or_default(),
            }],
            "totalCount": 41
        }))
    }

    let base = serve(Router::new().route("/api/customer", get(list))).await;
    let (services, recorder) = services(&base);

    let mut query = ListQuery::customers(100);
    query.set_filter("ada");
    let page = services.customers.list(&query).await.unwrap();

    assert_eq!(page.total_count, 41);
    let echoed = &page.items[0];
    assert_eq!(echoed.full_name, "creationTime DESC");
    assert_eq!(echoed.company_name, "Bearer test-token");
    assert_eq!(echoed.mobile_number, "100");
    assert_eq!(echoed.master_mobile_number, "ada");
    assert!(recorder.texts().is_empty());
}

#[tokio::test]
async fn test_list_failure_notifies_and_returns_error() {
    let router = Router::new().route(
        "/api/customer",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = serve(router).await;
    let (services, recorder) = services(&base);

    let err = services
        .customers
        .list(&ListQuery::customers(100))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(
        recorder.texts(),
        vec![(NoticeLevel::Error, customers::LIST_FAILED.to_string())]
    );
}

#[tokio::test]
async fn test_unrecognized_list_shape_is_empty() {
    let router = Router::new().route(
        "/api/customer",
        get(|| async { Json(json!({"result": "maintenance"})) }),
    );
    let base = serve(router).await;
    let (services, _) = services(&base);

    let page = services
        .customers
        .list(&ListQuery::customers(100))
        .await
        .unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total_count, 0);
}

#[tokio::test]
async fn test_get_with_blank_id_never_hits_network() {
    // Nothing listens here; a request would fail as a transport error.
    let (services, recorder) = services("http://127.0.0.1:9/api");

    let err = services.customers.get(&EntityId::new("")).await.unwrap_err();
    assert!(err.is_local_validation());
    assert!(!err.is_transport());
    assert!(recorder.texts().is_empty());
}

#[tokio::test]
async fn test_get_not_found_notifies() {
    let router = Router::new().route(
        "/api/customer/{id}",
        get(|| async { StatusCode::NOT_FOUND }),
    );
    let base = serve(router).await;
    let (services, recorder) = services(&base);

    let err = services
        .customers
        .get(&EntityId::new("missing"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(recorder.texts()[0].1, customers::GET_FAILED);
}

#[tokio::test]
async fn test_create_returns_server_entity() {
    async fn create(Json(body): Json<Value>) -> Json<Value> {
        let name = body["fullName"].as_str().unwrap_or_default().to_string();
        Json(customer_json("generated-7", &name))
    }

    let base = serve(Router::new().route("/api/customer", axum::routing::post(create))).await;
    let (services, _) = services(&base);

    let input = CustomerInput {
        full_name: Some("Grace Hopper".to_string()),
        mobile_number: Some("967700000001".to_string()),
        ..Default::default()
    };
    let created = services.customers.create(&input).await.unwrap();
    assert_eq!(created.id, EntityId::new("generated-7"));
    assert_eq!(created.full_name, "Grace Hopper");
    assert!(created.creation_time.is_some());

    // The created record goes to the top of the list
    let mut list: ListSync<Customer> = ListSync::new();
    let ticket = list.begin_fetch();
    list.complete_fetch(ticket, vec![created.clone()]);
    list.prepend(waconsole_core::Customer {
        id: EntityId::new("newer"),
        ..Default::default()
    });
    assert_eq!(list.items()[0].id.as_str(), "newer");
}

#[tokio::test]
async fn test_create_failure_notifies() {
    let router = Router::new().route(
        "/api/customer",
        axum::routing::post(|| async { (StatusCode::BAD_REQUEST, Json(json!({"error": {"message": "Mobile taken"}}))) }),
    );
    let base = serve(router).await;
    let (services, recorder) = services(&base);

    let err = services
        .customers
        .create(&CustomerInput::default())
        .await
        .unwrap_err();
    assert_eq!(err.server_message().as_deref(), Some("Mobile taken"));
    assert_eq!(recorder.texts()[0].1, customers::CREATE_FAILED);
}

#[tokio::test]
async fn test_update_forbidden_leaves_list_untouched() {
    let router = Router::new().route(
        "/api/customer/{id}",
        axum::routing::put(|| async { StatusCode::FORBIDDEN }),
    );
    let base = serve(router).await;
    let (services, recorder) = services(&base);

    let original: waconsole_core::Customer =
        serde_json::from_value(customer_json("1", "Ada")).unwrap();
    let mut list: ListSync<Customer> = ListSync::new();
    let ticket = list.begin_fetch();
    list.complete_fetch(ticket, vec![original.clone()]);

    let mut input = original.to_input();
    input.full_name = Some("Changed".to_string());
    let result = services.customers.update(&original.id, &input).await;

    assert!(result.unwrap_err().is_forbidden());
    assert_eq!(list.items()[0].full_name, "Ada");
    assert_eq!(
        recorder.texts(),
        vec![(
            NoticeLevel::Error,
            "You are not authorized to edit this customer.".to_string()
        )]
    );
}

#[tokio::test]
async fn test_update_success_notifies() {
    async fn update(Path(id): Path<String>, Json(body): Json<Value>) -> Json<Value> {
        let name = body["fullName"].as_str().unwrap_or_default().to_string();
        Json(customer_json(&id, &name))
    }

    let base = serve(Router::new().route("/api/customer/{id}", axum::routing::put(update))).await;
    let (services, recorder) = services(&base);

    let input = CustomerInput {
        full_name: Some("Renamed".to_string()),
        ..Default::default()
    };
    let updated = services
        .customers
        .update(&EntityId::new("5"), &input)
        .await
        .unwrap();
    assert_eq!(updated.id.as_str(), "5");
    assert_eq!(updated.full_name, "Renamed");
    assert_eq!(
        recorder.texts(),
        vec![(NoticeLevel::Success, customers::UPDATED.to_string())]
    );
}

#[tokio::test]
async fn test_delete_synthesises_acknowledgement() {
    let router = Router::new()
        .route(
            "/api/customer/{id}",
            axum::routing::delete(|Path(id): Path<String>| async move {
                if id == "with-body" {
                    Json(json!({"deleted": true})).into_response()
                } else {
                    StatusCode::NO_CONTENT.into_response()
                }
            }),
        );
    let base = serve(router).await;
    let (services, _) = services(&base);

    let outcome = services.customers.delete(&EntityId::new("3")).await.unwrap();
    assert_eq!(
        outcome,
        DeleteOutcome::Acknowledged {
            id: EntityId::new("3")
        }
    );

    let outcome = services
        .customers
        .delete(&EntityId::new("with-body"))
        .await
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::Body(json!({"deleted": true})));
}

#[tokio::test]
async fn test_delete_not_found_is_reconciled() {
    let router = Router::new().route(
        "/api/customer/{id}",
        axum::routing::delete(|| async { StatusCode::NOT_FOUND }),
    );
    let base = serve(router).await;
    let (services, _) = services(&base);

    let mut list: ListSync<Customer> = ListSync::new();
    let ticket = list.begin_fetch();
    list.complete_fetch(
        ticket,
        vec![
            serde_json::from_value(customer_json("1", "Ada")).unwrap(),
            serde_json::from_value(customer_json("2", "Bob")).unwrap(),
        ],
    );

    let id = EntityId::new("2");
    let result = services.customers.delete(&id).await;
    let resolution = list.resolve_delete(&id, &result);

    assert_eq!(resolution, DeleteResolution::AlreadyGone);
    assert!(list.get(&id).is_none());
    assert_eq!(list.len(), 1);
}

#[tokio::test]
async fn test_delete_forbidden_keeps_record() {
    let router = Router::new().route(
        "/api/customer/{id}",
        axum::routing::delete(|| async { StatusCode::FORBIDDEN }),
    );
    let base = serve(router).await;
    let (services, _) = services(&base);

    let mut list: ListSync<Customer> = ListSync::new();
    let ticket = list.begin_fetch();
    list.complete_fetch(
        ticket,
        vec![serde_json::from_value(customer_json("1", "Ada")).unwrap()],
    );

    let id = EntityId::new("1");
    let result = services.customers.delete(&id).await;
    let resolution = list.resolve_delete(&id, &result);

    assert_eq!(
        customers::delete_failure_message(&resolution).as_deref(),
        Some("You are not authorized to delete this customer.")
    );
    assert_eq!(list.len(), 1);
}

// ============================================================================
// Subscriptions
// ============================================================================

#[tokio::test]
async fn test_subscription_list_accepts_bare_array() {
    async fn list(Query(q): Query<HashMap<String, String>>) -> Json<Value> {
        assert!(!q.contains_key("Filter"));
        Json(json!([
            {"id": 1, "customerId": "c1", "packageId": "p1", "periodType": 1, "packagePrice": 10.5},
            {"id": 2, "customerId": "c2", "packageId": "p1", "periodType": 4, "packagePrice": 99}
        ]))
    }

    let base = serve(Router::new().route("/api/customer-subscription", get(list))).await;
    let (services, _) = services(&base);

    let page = services
        .subscriptions
        .list(&ListQuery::subscriptions(10))
        .await
        .unwrap();
    assert_eq!(page.total_count, 2);
    assert_eq!(page.items[1].period_type, PeriodType::Yearly);
}

#[tokio::test]
async fn test_subscription_forbidden_message() {
    let router = Router::new().route(
        "/api/customer-subscription",
        get(|| async { StatusCode::FORBIDDEN }),
    );
    let base = serve(router).await;
    let (services, _) = services(&base);

    let err = services
        .subscriptions
        .list(&ListQuery::subscriptions(10))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), subscriptions::UNAUTHORIZED);
}

#[tokio::test]
async fn test_subscription_get_not_found_message() {
    let router = Router::new().route(
        "/api/customer-subscription/{id}",
        get(|| async { StatusCode::NOT_FOUND }),
    );
    let base = serve(router).await;
    let (services, _) = services(&base);

    let err = services
        .subscriptions
        .get(&EntityId::new("77"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), subscriptions::NOT_FOUND);
}

#[tokio::test]
async fn test_subscription_create_sends_wire_shape() {
    async fn create(Json(body): Json<Value>) -> impl IntoResponse {
        if body["periodType"] != json!(4) || body["packagePrice"].as_f64() != Some(120.0) {
            return (StatusCode::BAD_REQUEST, Json(json!({"message": "bad body"})));
        }
        let mut stored = body.clone();
        stored["id"] = json!("s-1");
        (StatusCode::OK, Json(stored))
    }

    let base = serve(Router::new().route(
        "/api/customer-subscription",
        axum::routing::post(create),
    ))
    .await;
    let (services, recorder) = services(&base);

    let input = SubscriptionInput {
        customer_id: "c-1".to_string(),
        package_id: "p-2".to_string(),
        period_type: PeriodType::Yearly,
        package_price: 120.into(),
    };
    let created = services.subscriptions.create(&input).await.unwrap();
    assert_eq!(created.id.as_str(), "s-1");
    assert_eq!(recorder.texts()[0].1, subscriptions::CREATED);
}

#[tokio::test]
async fn test_subscription_delete_messages() {
    let router = Router::new().route(
        "/api/customer-subscription/{id}",
        axum::routing::delete(|Path(id): Path<String>| async move {
            if id == "crash" {
                StatusCode::INTERNAL_SERVER_ERROR
            } else {
                StatusCode::CONFLICT
            }
        }),
    );
    let base = serve(router).await;
    let (services, _) = services(&base);

    let err = services
        .subscriptions
        .delete(&EntityId::new("crash"))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), subscriptions::DELETE_SERVER_ERROR);

    let err = services
        .subscriptions
        .delete(&EntityId::new("busy"))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), subscriptions::DELETE_FAILED);
    assert_eq!(err.status(), Some(409));
}
