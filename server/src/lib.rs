pub mod health;
pub mod openapi;
pub mod profile;

use launchtrace_common::db;
use utoipa_actix_web::service_config::ServiceConfig;

/// Mount all services of the API server.
pub fn configure(svc: &mut ServiceConfig, db: db::Database) {
    health::configure(svc, db.clone());
    svc.service(
        utoipa_actix_web::scope("/api")
            .configure(|svc| launchtrace_module_fundamental::endpoints::configure(svc, db)),
    );
}

#[cfg(test)]
mod test;
