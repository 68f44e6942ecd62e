//! 과거 시세 조회 endpoint.
//!
//! # 엔드포인트
//!
//! - `GET /nifty/stocks/{symbol}?year=YYYY` - 심볼의 일별 시세 (최신순)

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::{debug, error, warn};

use nifty_core::{PriceBar, PriceQuery};

use crate::error::{ApiErrorResponse, ApiResult};
use crate::state::AppState;

/// 쿼리 파라미터.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PriceHistoryParams {
    /// 연도 필터 (형식 검증 없음)
    pub year: Option<String>,
}

impl PriceHistoryParams {
    /// 쿼리 쌍에서 생성. `year`가 여러 번 오면 마지막 값을 사용합니다.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let year = pairs
            .into_iter()
            .filter(|(key, _)| key == "year")
            .last()
            .map(|(_, value)| value);
        Self { year }
    }
}

/// UTF-8이 아닌 경로 세그먼트를 손실 디코딩하여 심볼로 사용합니다.
fn lossy_symbol(uri: &Uri) -> String {
    let segment = uri.path().rsplit('/').next().unwrap_or_default();
    let decoded = urlencoding::decode_binary(segment.as_bytes());
    String::from_utf8_lossy(&decoded).into_owned()
}

/// 심볼별 과거 시세 조회.
///
/// GET /nifty/stocks/{symbol}
///
/// - 200: `[{Date, Open, High, Low, Close}, ...]` 최신순. 연도 필터에 맞는 행이 없으면 빈 배열
/// - 404: 인덱스에 없는 심볼 (디코딩할 수 없는 심볼 포함)
/// - 500: 데이터 소스 읽기 실패
///
/// 추출기 거절도 `{"error": ...}` JSON 본문으로 반환합니다.
pub async fn get_price_history(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<Vec<PriceBar>>> {
    let symbol = match path {
        Ok(Path(symbol)) => symbol,
        Err(rejection) if rejection.status() == StatusCode::BAD_REQUEST => {
            debug!(error = %rejection, "Undecodable symbol, matching lossily");
            lossy_symbol(&uri)
        }
        Err(rejection) => {
            warn!(error = %rejection, "Path rejected");
            return Err(ApiErrorResponse::rejection(
                rejection.status(),
                rejection.body_text(),
            ));
        }
    };

    let params = match query {
        Ok(Query(pairs)) => PriceHistoryParams::from_pairs(pairs),
        Err(rejection) => {
            warn!(error = %rejection, "Query string rejected");
            return Err(ApiErrorResponse::rejection(
                rejection.status(),
                rejection.body_text(),
            ));
        }
    };

    let query = PriceQuery::new(&symbol, params.year.as_deref());

    if !state.symbols.contains(&query.symbol) {
        debug!(symbol = %query.symbol, "Unknown symbol requested");
        return Err(ApiErrorResponse::symbol_not_found(&query.symbol));
    }

    let bars = state.scan_prices(query.clone()).await.map_err(|e| {
        error!(
            symbol = %query.symbol,
            year = ?query.year,
            error = %e,
            "Price history scan failed"
        );
        ApiErrorResponse::data_source(&e)
    })?;

    Ok(Json(bars))
}

/// 시세 조회 라우터 생성.
pub fn stocks_router() -> Router<Arc<AppState>> {
    Router::new().route("/{symbol}", get(get_price_history))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use nifty_core::{PriceDataset, SymbolIndex};
    use tower::ServiceExt;

    fn app(state: AppState) -> Router {
        Router::new()
            .nest("/nifty/stocks", stocks_router())
            .with_state(Arc::new(state))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_unknown_symbol_does_not_touch_dataset() {
        // 존재하지 않는 파일이어도 인덱스에서 먼저 걸러짐
        let state = AppState::new(
            PriceDataset::new("/nonexistent/nifty.csv"),
            SymbolIndex::default(),
        );

        let (status, body) = get_json(app(state), "/nifty/stocks/zzzz").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Symbol ZZZZ not found in dataset");
    }

    #[test]
    fn test_params_use_last_year() {
        let params = PriceHistoryParams::from_pairs(vec![
            ("year".to_string(), "2021".to_string()),
            ("page".to_string(), "2".to_string()),
            ("year".to_string(), "2020".to_string()),
        ]);
        assert_eq!(params.year.as_deref(), Some("2020"));

        let params = PriceHistoryParams::from_pairs(vec![]);
        assert!(params.year.is_none());
    }

    #[tokio::test]
    async fn test_invalid_utf8_symbol_returns_json_404() {
        let state = AppState::new(
            PriceDataset::new("/nonexistent/nifty.csv"),
            ["INFY".to_string()].into_iter().collect(),
        );

        let (status, body) = get_json(app(state), "/nifty/stocks/%FF").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Symbol \u{FFFD} not found in dataset");
    }

    #[tokio::test]
    async fn test_unreadable_dataset_returns_500() {
        let state = AppState::new(
            PriceDataset::new("/nonexistent/nifty.csv"),
            ["INFY".to_string()].into_iter().collect(),
        );

        let (status, body) = get_json(app(state), "/nifty/stocks/INFY").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("/nonexistent/nifty.csv"));
    }

    #[tokio::test]
    async fn test_malformed_date_returns_500() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nifty.csv");
        std::fs::write(
            &path,
            "Symbol,Date,Open,High,Low,Close\nINFY,04-01-2021,100,105,99,103\n",
        )
        .unwrap();
        let state = AppState::load(PriceDataset::new(path)).unwrap();

        let (status, body) = get_json(app(state), "/nifty/stocks/INFY").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Invalid date '04-01-2021' for symbol INFY");
    }
}
