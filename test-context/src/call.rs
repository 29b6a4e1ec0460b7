use actix_http::Request;
use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{Service, ServiceResponse},
    test,
};
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// Calls into an initialized actix service, as created by [`actix_web::test::init_service`].
#[allow(async_fn_in_trait)]
pub trait CallService {
    async fn call_service(&self, req: Request) -> ServiceResponse<BoxBody>;

    async fn call_and_read_body(&self, req: Request) -> Bytes;

    async fn call_and_read_body_json<T: DeserializeOwned>(&self, req: Request) -> T;
}

impl<S, B> CallService for S
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody + 'static,
{
    async fn call_service(&self, req: Request) -> ServiceResponse<BoxBody> {
        test::call_service(self, req).await.map_into_boxed_body()
    }

    async fn call_and_read_body(&self, req: Request) -> Bytes {
        test::call_and_read_body(self, req).await
    }

    async fn call_and_read_body_json<T: DeserializeOwned>(&self, req: Request) -> T {
        test::call_and_read_body_json(self, req).await
    }
}
