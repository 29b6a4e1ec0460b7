use actix_web::{HttpResponse, Responder, get, web};
use launchtrace_common::{db::Database, error::ErrorInformation};
use serde_json::json;
use utoipa_actix_web::service_config::ServiceConfig;

pub fn configure(svc: &mut ServiceConfig, db: Database) {
    svc.app_data(web::Data::new(db)).service(ready);
}

#[utoipa::path(
    tag = "health",
    operation_id = "ready",
    responses(
        (status = 200, description = "The service is ready to serve requests"),
        (status = 503, description = "The database is not reachable", body = ErrorInformation),
    ),
)]
#[get("/health/ready")]
/// Check if the service is ready
pub async fn ready(db: web::Data<Database>) -> impl Responder {
    match db.ping().await {
        Ok(()) => HttpResponse::Ok().json(json!({ "database": "ok" })),
        Err(err) => {
            log::warn!("database is not ready: {err}");
            HttpResponse::ServiceUnavailable().json(ErrorInformation::new("Unavailable", err))
        }
    }
}
