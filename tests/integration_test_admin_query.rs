mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{days_ahead, TestApp};
use serde_json::Value;
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn admin_list(app: &TestApp, cookie: &str, query: &str) -> Value {
    let uri = if query.is_empty() {
        "/api/v1/admin/bookings".to_string()
    } else {
        format!("/api/v1/admin/bookings?{}", query)
    };
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await
}

/// Four bookings: two on the 138 prefix, one confirmed, one cancelled.
async fn seed_bookings(app: &TestApp, cookie: &str) {
    let service = app.any_service().await;

    let res = app.submit_booking(&service.id, &days_ahead(1), "10:00", "13800000001").await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.submit_booking(&service.id, &days_ahead(2), "09:30", "13800000002").await;
    let id = parse_body(res).await["id"].as_str().unwrap().to_string();
    app.set_status(cookie, &id, "confirmed").await;

    let res = app.submit_booking(&service.id, &days_ahead(3), "15:00", "13911111111").await;
    let id = parse_body(res).await["id"].as_str().unwrap().to_string();
    app.set_status(cookie, &id, "confirmed").await;

    let res = app.submit_booking(&service.id, &days_ahead(4), "16:30", "15022223333").await;
    let id = parse_body(res).await["id"].as_str().unwrap().to_string();
    app.set_status(cookie, &id, "cancelled").await;
}

#[tokio::test]
async fn test_default_listing_is_newest_appointment_first() {
    let app = TestApp::new().await;
    let cookie = app.login().await;
    seed_bookings(&app, &cookie).await;

    let list = admin_list(&app, &cookie, "").await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(list[0]["appointment_date"], days_ahead(4));
    assert_eq!(list[3]["appointment_date"], days_ahead(1));
    // the joined service columns are present in the admin view
    assert!(list[0]["service_name"].is_string());
}

#[tokio::test]
async fn test_phone_substring_filter() {
    let app = TestApp::new().await;
    let cookie = app.login().await;
    seed_bookings(&app, &cookie).await;

    let list = admin_list(&app, &cookie, "phone=138").await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    for booking in list {
        assert!(booking["customer_phone"].as_str().unwrap().contains("138"));
    }
}

#[tokio::test]
async fn test_status_filter_and_conjunction_with_phone() {
    let app = TestApp::new().await;
    let cookie = app.login().await;
    seed_bookings(&app, &cookie).await;

    let list = admin_list(&app, &cookie, "status=confirmed").await;
    assert_eq!(list.as_array().unwrap().len(), 2);

    let list = admin_list(&app, &cookie, "status=all").await;
    assert_eq!(list.as_array().unwrap().len(), 4);

    // conjunction: phone AND status
    let list = admin_list(&app, &cookie, "phone=138&status=confirmed").await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["customer_phone"], "13800000002");
}

#[tokio::test]
async fn test_sort_variants() {
    let app = TestApp::new().await;
    let cookie = app.login().await;
    seed_bookings(&app, &cookie).await;

    let list = admin_list(&app, &cookie, "sort_by=date&order=asc").await;
    let list = list.as_array().unwrap();
    assert_eq!(list[0]["appointment_date"], days_ahead(1));
    assert_eq!(list[3]["appointment_date"], days_ahead(4));

    let list = admin_list(&app, &cookie, "sort_by=status&order=asc").await;
    let statuses: Vec<&str> = list.as_array().unwrap()
        .iter().map(|b| b["status"].as_str().unwrap()).collect();
    assert_eq!(statuses, vec!["cancelled", "confirmed", "confirmed", "pending"]);

    let list = admin_list(&app, &cookie, "sort_by=created&order=asc").await;
    let list = list.as_array().unwrap();
    // insertion order: day1 booking went in first
    assert_eq!(list[0]["appointment_date"], days_ahead(1));
}

#[tokio::test]
async fn test_unknown_query_values_are_rejected() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    for query in ["status=archived", "sort_by=price", "order=sideways"] {
        let res = app.router.clone().oneshot(
            Request::builder().method("GET")
                .uri(format!("/api/v1/admin/bookings?{}", query))
                .header(header::COOKIE, &cookie)
                .body(Body::empty()).unwrap()
        ).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "query {:?} should be rejected", query);
    }
}

#[tokio::test]
async fn test_stats_count_every_status() {
    let app = TestApp::new().await;
    let cookie = app.login().await;
    seed_bookings(&app, &cookie).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/admin/bookings/stats")
            .header(header::COOKIE, &cookie)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["total"], 4);
    assert_eq!(body["pending"], 1);
    assert_eq!(body["confirmed"], 2);
    assert_eq!(body["completed"], 0);
    assert_eq!(body["cancelled"], 1);
}

#[tokio::test]
async fn test_admin_listing_requires_session() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/admin/bookings")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
