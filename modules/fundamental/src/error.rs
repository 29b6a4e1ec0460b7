use actix_web::{HttpResponse, ResponseError, body::BoxBody};
use launchtrace_common::{db::DatabaseErrors, error::ErrorInformation};
use sea_orm::DbErr;
use std::borrow::Cow;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Database(DbErr),
    #[error("Bad request: {0}: {1:?}")]
    BadRequest(Cow<'static, str>, Option<Cow<'static, str>>),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data model {0}")]
    Data(String),
    #[error("unavailable")]
    Unavailable,
}

impl Error {
    pub fn bad_request(
        message: impl Into<Cow<'static, str>>,
        details: Option<impl Into<Cow<'static, str>>>,
    ) -> Self {
        Self::BadRequest(message.into(), details.map(|d| d.into()))
    }
}

impl From<DbErr> for Error {
    fn from(value: DbErr) -> Self {
        if value.is_read_only() {
            Self::Unavailable
        } else {
            Self::Database(value)
        }
    }
}

impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::BadRequest(message, details) => {
                HttpResponse::BadRequest().json(ErrorInformation {
                    error: "BadRequest".into(),
                    message: message.to_string(),
                    details: details.as_ref().map(|d| d.to_string()),
                })
            }
            Self::NotFound(msg) => {
                HttpResponse::NotFound().json(ErrorInformation::new("NotFound", msg))
            }
            Self::Unavailable => {
                HttpResponse::ServiceUnavailable().json(ErrorInformation::new("Unavailable", self))
            }

            // All other cases are internal system errors that are not expected to occur.
            // They are logged and a generic error response is returned to avoid leaking
            // internal state to end users.
            err => {
                log::warn!("{err}");
                HttpResponse::InternalServerError().json(ErrorInformation::new("Internal", ""))
            }
        }
    }
}
