// HTTP API tests for FoodBridge

use actix_web::{http::StatusCode, test, web, App};
use foodbridge::config::Settings;
use foodbridge::models::{Dispatch, DispatchHistoryResponse, FindMatchesResponse, FoodPosting, HealthResponse, RecipientOrg, RegistrationResponse};
use foodbridge::routes::{self, AppState};
use serde_json::json;

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::from_settings(&Settings::default()).unwrap()))
                .app_data(routes::json_config())
                .configure(routes::configure_routes),
        )
        .await
    };
}

fn posting_body(location: Option<serde_json::Value>) -> serde_json::Value {
    let mut body = json!({
        "collegeId": "college1",
        "description": "Paneer rice, packed at noon",
        "packets": 40,
        "pickupAddress": "123 University Blvd, Campus Town",
        "freshnessHours": 4
    });
    if let Some(location) = location {
        body["location"] = location;
    }
    body
}

#[actix_web::test]
async fn test_health() {
    let app = test_app!();
    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let health: HealthResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(health.status, "healthy");
    assert_eq!(health.recipients, 4);
    assert_eq!(health.cache.ttl_secs, 300);
    assert_eq!(health.cache.generation, 0);
}

#[actix_web::test]
async fn test_find_matches_against_registered_recipients() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({ "origin": { "lat": 40.7128, "lng": -74.0060 } }))
        .to_request();
    let resp: FindMatchesResponse = test::call_and_read_body_json(&app, req).await;

    let ids: Vec<&str> = resp.matches.iter().map(|m| m.ngo.id.as_str()).collect();
    assert_eq!(ids, vec!["ngo3", "ngo1", "ngo2"]);
    assert_eq!(resp.best_match.map(|m| m.ngo.id), Some("ngo3".to_string()));
    assert_eq!(resp.radius_km, 5.0);
}

#[actix_web::test]
async fn test_find_matches_with_explicit_candidates() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({
            "origin": { "lat": 40.7128, "lng": -74.0060 },
            "candidates": [
                {
                    "id": "x1",
                    "name": "Corner Pantry",
                    "address": "1 Corner",
                    "location": { "lat": 40.7130, "lng": -74.0055 },
                    "totalCapacity": 80,
                    "currentFoodStock": 20
                }
            ]
        }))
        .to_request();
    let resp: FindMatchesResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.matches.len(), 1);
    assert_eq!(resp.matches[0].need_score, 60);
    assert_eq!(resp.total_candidates, 1);
}

#[actix_web::test]
async fn test_no_match_is_ok_and_empty() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({ "origin": { "lat": 34.0522, "lng": -118.2437 } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: FindMatchesResponse = test::read_body_json(resp).await;
    assert!(body.matches.is_empty());
    assert!(body.best_match.is_none());
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{ "origin": { "lat": "north" } }"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_posting_flow_and_dispatch() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/postings")
        .set_json(posting_body(None))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let posting: FoodPosting = test::read_body_json(resp).await;
    assert_eq!(posting.college_name, "Green Valley University");
    assert_eq!(posting.location.lat, 40.7128);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/postings/{}/matches", posting.id))
        .to_request();
    let matches: FindMatchesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(matches.matches.len(), 3);
    let best = matches.best_match.unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/dispatch")
        .set_json(json!({ "postingId": posting.id, "ngoId": best.ngo.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let dispatch: Dispatch = test::read_body_json(resp).await;
    assert_eq!(dispatch.packets, 40);
    assert_eq!(dispatch.ngo_id, "ngo3");

    // Stock is not reconciled after a dispatch
    let req = test::TestRequest::get().uri("/api/v1/recipients").to_request();
    let recipients: Vec<RecipientOrg> = test::call_and_read_body_json(&app, req).await;
    let ngo3 = recipients.iter().find(|n| n.id == "ngo3").unwrap();
    assert_eq!(ngo3.current_food_stock, 100);

    let req = test::TestRequest::get().uri("/api/v1/donors/college1/dispatches").to_request();
    let history: DispatchHistoryResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(history.dispatches.len(), 1);
    assert_eq!(history.total_packets, 40);
}

#[actix_web::test]
async fn test_dispatch_out_of_range_rejected() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/postings")
        .set_json(posting_body(None))
        .to_request();
    let posting: FoodPosting = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/dispatch")
        .set_json(json!({ "postingId": posting.id, "ngoId": "ngo4" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_posting_validation_and_unknown_donor() {
    let app = test_app!();

    let mut body = posting_body(None);
    body["packets"] = json!(0);
    let req = test::TestRequest::post().uri("/api/v1/postings").set_json(body).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let mut body = posting_body(None);
    body["collegeId"] = json!("college404");
    let req = test::TestRequest::post().uri("/api/v1/postings").set_json(body).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/v1/postings/missing/matches").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_registering_recipient_refreshes_posting_matches() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/postings")
        .set_json(posting_body(Some(json!({ "lat": 40.7128, "lng": -74.0060 }))))
        .to_request();
    let posting: FoodPosting = test::call_and_read_body_json(&app, req).await;

    let uri = format!("/api/v1/postings/{}/matches", posting.id);
    let req = test::TestRequest::get().uri(&uri).to_request();
    let before: FindMatchesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(before.matches.len(), 3);

    let req = test::TestRequest::post()
        .uri("/api/v1/recipients")
        .set_json(json!({
            "name": "Night Shelter",
            "address": "12 Late Street, Campus Town",
            "location": { "lat": 40.7140, "lng": -74.0070 },
            "totalCapacity": 500,
            "currentFoodStock": 0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let registered: RegistrationResponse = test::read_body_json(resp).await;

    let req = test::TestRequest::get().uri(&uri).to_request();
    let after: FindMatchesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(after.matches.len(), 4);
    assert_eq!(after.best_match.map(|m| m.ngo.id), Some(registered.id));
}

#[actix_web::test]
async fn test_recipient_registered_with_wrapped_longitude_is_matched() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/recipients")
        .set_json(json!({
            "name": "Dateline Pantry",
            "address": "360 Wrap Avenue, Campus Town",
            "location": { "lat": 40.7140, "lng": -74.0070 + 360.0 },
            "totalCapacity": 500,
            "currentFoodStock": 0
        }))
        .to_request();
    let registered: RegistrationResponse = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({ "origin": { "lat": 40.7128, "lng": -74.0060 } }))
        .to_request();
    let resp: FindMatchesResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.matches.len(), 4);
    assert_eq!(resp.best_match.map(|m| m.ngo.id), Some(registered.id));
}

#[actix_web::test]
async fn test_register_donor_returns_college_role() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/donors")
        .set_json(json!({
            "name": "Hillside Institute",
            "address": "9 Hill Road",
            "location": { "lat": 40.70, "lng": -74.02 },
            "email": "kitchen@hillside.edu",
            "kitchenCapacity": 250
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["role"], "college");
}
