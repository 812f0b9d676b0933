use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use crate::core::validate_coordinate;
use crate::models::{
    DispatchHistoryResponse, DonorOrg, OrgRole, RecipientOrg, RegisterDonorRequest,
    RegisterRecipientRequest, RegistrationResponse,
};
use crate::routes::{error_response, store_failed, validation_failed, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/recipients", web::get().to(list_recipients))
        .route("/recipients", web::post().to(register_recipient))
        .route("/donors", web::post().to(register_donor))
        .route("/donors/{id}/dispatches", web::get().to(donor_dispatches));
}

/// GET /api/v1/recipients
async fn list_recipients(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_recipients() {
        Ok(recipients) => HttpResponse::Ok().json(recipients),
        Err(e) => store_failed("Failed to list recipients", e),
    }
}

/// Register a recipient organization (NGO)
///
/// POST /api/v1/recipients
async fn register_recipient(
    state: web::Data<AppState>,
    req: web::Json<RegisterRecipientRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }
    if let Err(e) = validate_coordinate("location", req.location) {
        return error_response(StatusCode::BAD_REQUEST, "Invalid input", e.to_string());
    }

    let req = req.into_inner();
    if req.current_food_stock > req.total_capacity {
        // Accepted: the recipient ranks with a negative need score
        tracing::warn!(
            "Registering {} with stock {} above capacity {}",
            req.name,
            req.current_food_stock,
            req.total_capacity
        );
    }

    let ngo = RecipientOrg {
        id: uuid::Uuid::new_v4().to_string(),
        name: req.name,
        address: req.address,
        location: req.location,
        total_capacity: req.total_capacity,
        current_food_stock: req.current_food_stock,
        contact_info: req.contact_info,
        students_count: req.students_count,
        staff_count: req.staff_count,
    };
    let id = ngo.id.clone();

    if let Err(e) = state.store.insert_recipient(ngo) {
        return store_failed("Failed to register recipient", e);
    }

    // A new recipient can change any posting's ranking; must follow the insert
    state.cache.invalidate_all();

    tracing::info!("Registered recipient {}", id);

    HttpResponse::Created().json(RegistrationResponse { id, role: OrgRole::Ngo })
}

/// Register a donor organization (college)
///
/// POST /api/v1/donors
async fn register_donor(
    state: web::Data<AppState>,
    req: web::Json<RegisterDonorRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }
    if let Err(e) = validate_coordinate("location", req.location) {
        return error_response(StatusCode::BAD_REQUEST, "Invalid input", e.to_string());
    }

    let req = req.into_inner();
    let donor = DonorOrg {
        id: uuid::Uuid::new_v4().to_string(),
        name: req.name,
        address: req.address,
        location: req.location,
        email: req.email,
        kitchen_capacity: req.kitchen_capacity,
    };
    let id = donor.id.clone();

    if let Err(e) = state.store.insert_donor(donor) {
        return store_failed("Failed to register donor", e);
    }

    tracing::info!("Registered donor {}", id);

    HttpResponse::Created().json(RegistrationResponse { id, role: OrgRole::College })
}

/// Dispatch history for a donor
///
/// GET /api/v1/donors/{id}/dispatches
async fn donor_dispatches(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let college_id = path.into_inner();

    if let Err(e) = state.store.get_donor(&college_id) {
        return store_failed("Failed to fetch donor", e);
    }

    match state.store.dispatches_for_college(&college_id) {
        Ok(dispatches) => {
            let total_packets = dispatches.iter().map(|d| u64::from(d.packets)).sum::<u64>();
            HttpResponse::Ok().json(DispatchHistoryResponse {
                college_id,
                dispatches,
                total_packets,
            })
        }
        Err(e) => store_failed("Failed to fetch dispatches", e),
    }
}
