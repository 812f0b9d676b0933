use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use crate::core::validate_coordinate;
use crate::models::{CreatePostingRequest, FoodPosting};
use crate::routes::{error_response, store_failed, validation_failed, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/postings", web::post().to(create_posting))
        .route("/postings/{id}", web::get().to(get_posting));
}

/// Create a food posting
///
/// POST /api/v1/postings
///
/// Request body:
/// ```json
/// {
///   "collegeId": "college1",
///   "description": "Veg biryani, 40 boxes",
///   "packets": 40,
///   "pickupAddress": "123 University Blvd",
///   "freshnessHours": 4,
///   "imageUrl": "optional",
///   "location": { "lat": 40.7128, "lng": -74.0060 }
/// }
/// ```
async fn create_posting(
    state: web::Data<AppState>,
    req: web::Json<CreatePostingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for posting from {}: {:?}", req.college_id, errors);
        return validation_failed(errors);
    }

    let req = req.into_inner();

    let donor = match state.store.get_donor(&req.college_id) {
        Ok(donor) => donor,
        Err(e) => return store_failed("Failed to fetch donor", e),
    };

    let location = req.location.unwrap_or(donor.location);
    if let Err(e) = validate_coordinate("location", location) {
        return error_response(StatusCode::BAD_REQUEST, "Invalid input", e.to_string());
    }

    let posting = FoodPosting {
        id: uuid::Uuid::new_v4().to_string(),
        college_id: donor.id,
        college_name: donor.name,
        description: req.description,
        packets: req.packets,
        pickup_address: req.pickup_address,
        freshness_hours: req.freshness_hours,
        image_url: req.image_url,
        timestamp: chrono::Utc::now(),
        location,
    };

    if let Err(e) = state.store.insert_posting(posting.clone()) {
        return store_failed("Failed to store posting", e);
    }

    tracing::info!("Created posting {} ({} packets) for {}", posting.id, posting.packets, posting.college_id);

    HttpResponse::Created().json(posting)
}

/// GET /api/v1/postings/{id}
async fn get_posting(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match state.store.get_posting(&path) {
        Ok(posting) => HttpResponse::Ok().json(posting),
        Err(e) => store_failed("Failed to fetch posting", e),
    }
}
