use super::LaunchTraceContext;
use std::ops::{Deref, DerefMut};
use test_context::AsyncTestContext;

/// A context whose database rejects all writes.
///
/// The seed data is stored before the database is switched to read-only mode.
pub struct ReadOnly<T>(pub T);

impl AsyncTestContext for ReadOnly<LaunchTraceContext> {
    #[allow(clippy::expect_used)]
    async fn setup() -> Self {
        let ctx = <LaunchTraceContext as AsyncTestContext>::setup().await;
        ctx.seed_document("seed/acme.json")
            .await
            .expect("must be able to seed");

        Self(
            ctx.0
                .read_only()
                .await
                .expect("must be able to make read-only")
                .into(),
        )
    }

    async fn teardown(self) {
        AsyncTestContext::teardown(self.0).await;
    }
}

impl<T> Deref for ReadOnly<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ReadOnly<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
