use crate::LaunchTraceTestContext;
use std::ops::Deref;
use test_context::AsyncTestContext;
use tracing::instrument;

/// A test context with a freshly created, empty database.
pub struct LaunchTraceContext(pub(crate) LaunchTraceTestContext);

impl From<LaunchTraceTestContext> for LaunchTraceContext {
    fn from(value: LaunchTraceTestContext) -> Self {
        Self(value)
    }
}

impl Deref for LaunchTraceContext {
    type Target = LaunchTraceTestContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsyncTestContext for LaunchTraceContext {
    #[instrument]
    #[allow(clippy::expect_used)]
    async fn setup() -> Self {
        let tmp = tempfile::tempdir().expect("creating a temporary directory");

        LaunchTraceTestContext::new(tmp)
            .await
            .expect("creating the test database")
            .into()
    }

    async fn teardown(self) {
        self.0.teardown();
    }
}
