use actix_web::{
    Error, HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析失败时返回 400 信封
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    let message = format!("Invalid JSON payload: {err}");
    debug!("{} {}: {}", req.method(), req.path(), message);
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(err, response).into()
}

/// 查询参数解析失败时返回 400 信封
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    let message = format!("Invalid query parameters: {err}");
    debug!("{} {}: {}", req.method(), req.path(), message);
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(err, response).into()
}
