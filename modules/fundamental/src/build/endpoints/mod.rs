
use crate::{
    Error,
    build::{
        model::{BuildDetails, BuildHead, BuildSummary, CreateBuildRequest},
        service::BuildService,
    },
    db::DatabaseExt,
};
use actix_http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use launchtrace_common::{
    db::Database,
    model::{Paginated, PaginatedResults},
};
use sea_orm::TransactionTrait;

pub fn configure(config: &mut utoipa_actix_web::service_config::ServiceConfig, db: Database) {
    let service = BuildService::new();

    config
        .app_data(web::Data::new(db))
        .app_data(web::Data::new(service))
        .service(all)
        .service(get)
        .service(create)
        .service(impacted);
}

#[utoipa::path(
    tag = "build",
    operation_id = "listBuilds",
    params(
        Paginated,
    ),
    responses(
        (status = 200, description = "Matching builds", body = PaginatedResults<BuildSummary>),
        (status = 400, description = "The pagination parameters were invalid"),
    ),
)]
#[get("/builds")]
/// List all builds, with the number of (faulty) parts
pub async fn all(
    service: web::Data<BuildService>,
    db: web::Data<Database>,
    web::Query(paginated): web::Query<Paginated>,
) -> actix_web::Result<impl Responder> {
    let tx = db.begin_read().await?;
    Ok(HttpResponse::Ok().json(service.fetch_builds(paginated, &tx).await?))
}

#[utoipa::path(
    tag = "build",
    operation_id = "getBuild",
    params(
        ("id", Path, description = "ID of the build"),
    ),
    responses(
        (status = 200, description = "The build, with its parts", body = BuildDetails),
        (status = 404, description = "The build could not be found"),
    ),
)]
#[get("/builds/{id}")]
/// Get a build, with the parts it uses
pub async fn get(
    service: web::Data<BuildService>,
    db: web::Data<Database>,
    id: web::Path<i32>,
) -> Result<impl Responder, Error> {
    let id = id.into_inner();
    let tx = db.begin_read().await?;

    match service.fetch_build(id, &tx).await? {
        Some(build) => Ok(HttpResponse::Ok().json(build)),
        None => Err(Error::NotFound(format!("Build with ID {id} not found"))),
    }
}

#[utoipa::path(
    tag = "build",
    operation_id = "createBuild",
    request_body = CreateBuildRequest,
    responses(
        (status = 201, description = "Created the build", body = BuildHead),
        (status = 400, description = "The request was not valid, or referenced unknown parts"),
    ),
)]
#[post("/builds")]
/// Create a new build
pub async fn create(
    req: HttpRequest,
    service: web::Data<BuildService>,
    db: web::Data<Database>,
    web::Json(request): web::Json<CreateBuildRequest>,
) -> Result<impl Responder, Error> {
    let tx = db.begin().await?;
    let build = service.create_build(request, &tx).await?;
    tx.commit().await?;

    Ok(HttpResponse::Created()
        .append_header((header::LOCATION, format!("{}/{}", req.path(), build.build_id)))
        .json(build))
}

#[utoipa::path(
    tag = "build",
    operation_id = "listImpactedBuilds",
    params(
        ("part_id", Path, description = "ID of the part"),
    ),
    responses(
        (status = 200, description = "Builds using the part", body = Vec<BuildHead>),
    ),
)]
#[get("/impacted-builds/{part_id}")]
/// List all builds using a part
pub async fn impacted(
    service: web::Data<BuildService>,
    db: web::Data<Database>,
    part_id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    let tx = db.begin_read().await?;
    Ok(HttpResponse::Ok().json(
        service
            .fetch_impacted_builds(part_id.into_inner(), &tx)
            .await?,
    ))
}
