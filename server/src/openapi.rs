use utoipa::openapi::{Info, InfoBuilder, License};

/// The information block of the OpenAPI document.
pub fn info() -> Info {
    InfoBuilder::new()
        .title("LaunchTrace")
        .description(Some(
            "Traceability of suppliers, parts and builds, and the builds impacted by faulty parts",
        ))
        .version(env!("CARGO_PKG_VERSION"))
        .license(Some(License::new(env!("CARGO_PKG_LICENSE"))))
        .build()
}
