//! API 에러 응답 타입.
//!
//! 모든 실패는 요청 경계에서 `{"error": "..."}` 본문과 HTTP 상태 코드로 변환됩니다.

use axum::{http::StatusCode, Json};
use nifty_core::DataError;
use serde::{Deserialize, Serialize};

/// API 에러 응답.
///
/// # 예시
///
/// ```json
/// { "error": "Symbol ZZZZ not found in dataset" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// 사람이 읽을 수 있는 에러 메시지
    pub error: String,
}

impl ApiErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// 데이터셋에 없는 심볼 (404).
    pub fn symbol_not_found(symbol: &str) -> (StatusCode, Json<Self>) {
        (
            StatusCode::NOT_FOUND,
            Json(Self::new(format!("Symbol {} not found in dataset", symbol))),
        )
    }

    /// 추출기 거절 (상태 코드는 거절 사유를 따름).
    pub fn rejection(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Self>) {
        (status, Json(Self::new(message)))
    }

    /// 데이터 소스 실패 (500). 원인 메시지를 그대로 노출합니다.
    pub fn data_source(err: &DataError) -> (StatusCode, Json<Self>) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(Self::new(err.to_string())),
        )
    }
}

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiErrorResponse>)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_not_found() {
        let (status, Json(body)) = ApiErrorResponse::symbol_not_found("ZZZZ");
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Symbol ZZZZ not found in dataset");
    }

    #[test]
    fn test_json_has_single_error_key() {
        let json = serde_json::to_value(ApiErrorResponse::new("boom")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "boom" }));
    }

    #[test]
    fn test_rejection_keeps_status() {
        let (status, Json(body)) =
            ApiErrorResponse::rejection(StatusCode::BAD_REQUEST, "Failed to deserialize query string");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Failed to deserialize query string");
    }

    #[test]
    fn test_data_source_error_is_500() {
        let err = DataError::Task("cancelled".to_string());
        let (status, Json(body)) = ApiErrorResponse::data_source(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Scan task failed: cancelled");
    }
}
