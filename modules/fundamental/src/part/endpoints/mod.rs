
use crate::{
    Error,
    db::DatabaseExt,
    part::{model::PartSummary, service::PartService},
};
use actix_web::{HttpResponse, Responder, get, post, web};
use launchtrace_common::{
    db::Database,
    model::{Paginated, PaginatedResults},
};
use sea_orm::TransactionTrait;

pub fn configure(config: &mut utoipa_actix_web::service_config::ServiceConfig, db: Database) {
    let service = PartService::new();

    config
        .app_data(web::Data::new(db))
        .app_data(web::Data::new(service))
        .service(all)
        .service(flag_faulty);
}

#[utoipa::path(
    tag = "part",
    operation_id = "listParts",
    params(
        Paginated,
    ),
    responses(
        (status = 200, description = "Matching parts", body = PaginatedResults<PartSummary>),
        (status = 400, description = "The pagination parameters were invalid"),
    ),
)]
#[get("/parts")]
/// List all parts, with their supplier
pub async fn all(
    service: web::Data<PartService>,
    db: web::Data<Database>,
    web::Query(paginated): web::Query<Paginated>,
) -> actix_web::Result<impl Responder> {
    let tx = db.begin_read().await?;
    Ok(HttpResponse::Ok().json(service.fetch_parts(paginated, &tx).await?))
}

#[utoipa::path(
    tag = "part",
    operation_id = "flagPartFaulty",
    params(
        ("id", Path, description = "ID of the part to flag"),
    ),
    responses(
        (status = 200, description = "The part is flagged as faulty"),
        (status = 404, description = "The part could not be found"),
    ),
)]
#[post("/parts/{id}/flagFaulty")]
/// Flag a part as faulty
pub async fn flag_faulty(
    service: web::Data<PartService>,
    db: web::Data<Database>,
    id: web::Path<i32>,
) -> Result<impl Responder, Error> {
    let tx = db.begin().await?;
    service.flag_faulty(id.into_inner(), &tx).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().finish())
}
