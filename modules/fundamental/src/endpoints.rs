use launchtrace_common::db::Database;

/// Mount all endpoints of this module.
pub fn configure(svc: &mut utoipa_actix_web::service_config::ServiceConfig, db: Database) {
    crate::part::endpoints::configure(svc, db.clone());
    crate::build::endpoints::configure(svc, db);
}
