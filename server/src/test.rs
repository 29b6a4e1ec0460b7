use actix_web::{
    http::StatusCode,
    test::{self, TestRequest},
};
use launchtrace_infrastructure::app::http::{OPENAPI_PATH, new_app};
use launchtrace_test_context::LaunchTraceContext;
use serde_json::Value;
use test_context::test_context;
use test_log::test;

#[test_context(LaunchTraceContext)]
#[test(actix_web::test)]
async fn openapi_lists_all_operations(ctx: &LaunchTraceContext) -> anyhow::Result<()> {
    let db = ctx.db.clone();
    let app = test::init_service(new_app(crate::openapi::info(), |svc| {
        crate::configure(svc, db)
    }))
    .await;

    let request = TestRequest::get().uri(OPENAPI_PATH).to_request();
    let document: Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(document["info"]["title"], "LaunchTrace");

    for (path, method) in [
        ("/api/parts", "get"),
        ("/api/parts/{id}/flagFaulty", "post"),
        ("/api/builds", "get"),
        ("/api/builds", "post"),
        ("/api/builds/{id}", "get"),
        ("/api/impacted-builds/{part_id}", "get"),
        ("/health/ready", "get"),
    ] {
        assert!(
            document["paths"][path][method].is_object(),
            "missing {method} {path}"
        );
    }

    Ok(())
}

#[test_context(LaunchTraceContext)]
#[test(actix_web::test)]
async fn serve_api(ctx: &LaunchTraceContext) -> anyhow::Result<()> {
    ctx.seed_document("seed/acme.json").await?;

    let db = ctx.db.clone();
    let app = test::init_service(new_app(crate::openapi::info(), |svc| {
        crate::configure(svc, db)
    }))
    .await;

    let request = TestRequest::get().uri("/health/ready").to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let request = TestRequest::get().uri("/api/builds?take=1").to_request();
    let response: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(response["total"], 3);
    assert_eq!(response["items"][0]["serialNumber"], "B001");

    Ok(())
}
