//! API 라우트.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 데이터 소스 상태 확인 (readiness)
//! - `/nifty/stocks/{symbol}` - 심볼별 과거 시세 조회

pub mod health;
pub mod stocks;

pub use health::{health_router, ComponentHealth, ComponentStatus, HealthResponse};
pub use stocks::{stocks_router, PriceHistoryParams};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/health", health_router())
        .nest("/nifty/stocks", stocks_router())
}
