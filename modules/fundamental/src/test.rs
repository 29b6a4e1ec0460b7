use actix_web::{
    App,
    body::BoxBody,
    dev::{Service, ServiceResponse},
};
use launchtrace_test_context::LaunchTraceTestContext;
use utoipa_actix_web::AppExt;

/// An initialized service, serving all endpoints of this module under `/api`.
pub async fn caller(
    ctx: &LaunchTraceTestContext,
) -> anyhow::Result<
    impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
> {
    let db = ctx.db.clone();

    Ok(actix_web::test::init_service(
        App::new()
            .into_utoipa_app()
            .service(
                utoipa_actix_web::scope("/api")
                    .configure(|svc| crate::endpoints::configure(svc, db)),
            )
            .into_app(),
    )
    .await)
}
