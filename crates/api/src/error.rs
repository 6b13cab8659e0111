use actix_web::{
    body::EitherBody,
    dev::ServiceResponse,
    http::StatusCode,
    middleware::{ErrorHandlerResponse, ErrorHandlers},
    HttpRequest, HttpResponse,
};
use campus_api_structs::ErrorResponse;
use campus_domain::ID;
use campus_infra::RunMode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Internal server error")]
    InternalError,
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("A {kind} with id: {id}, was not found.")]
    RecordNotFound { kind: &'static str, id: ID },
    /// No route matched. Carries the original url
    #[error("Not found - {0}")]
    NotFound(String),
}

impl actix_web::error::ResponseError for CampusError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::RecordNotFound { .. } | Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Never carries the stack. `error_formatter` adds it outside production
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            message: self.to_string(),
            stack: None,
        })
    }
}

/// Last stage of every request: the app's default service.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, CampusError> {
    Err(CampusError::NotFound(req.uri().to_string()))
}

/// Terminal formatter. Rewrites every response that carries a propagated
/// error, whatever produced it, into `{ message, stack }`. Responses a handler
/// built by itself pass through untouched.
pub fn error_formatter<B: 'static>(mode: RunMode) -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler(move |res| format_error(res, mode))
}

fn format_error<B>(
    res: ServiceResponse<B>,
    mode: RunMode,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let (message, stack) = match res.response().error() {
        Some(err) => (err.to_string(), format!("{:?}", err)),
        None => return Ok(ErrorHandlerResponse::Response(res.map_into_left_body())),
    };
    let status = match res.status() {
        StatusCode::OK => StatusCode::INTERNAL_SERVER_ERROR,
        status => status,
    };
    let body = ErrorResponse {
        message,
        stack: if mode.is_production() { None } else { Some(stack) },
    };

    let (req, _) = res.into_parts();
    let response = HttpResponse::build(status).json(body);
    let res: ServiceResponse<EitherBody<B>> =
        ServiceResponse::new(req, response).map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}
