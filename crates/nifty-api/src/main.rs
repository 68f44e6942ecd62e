//! NIFTY 50 시세 API 서버.
//!
//! 시작 시 데이터 파일을 한 번 읽어 심볼 인덱스를 만든 뒤 Axum 서버를 시작합니다.
//! 데이터 파일을 읽을 수 없으면 요청을 받기 전에 0이 아닌 코드로 종료합니다.

use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use nifty_api::routes::create_api_router;
use nifty_api::state::AppState;
use nifty_core::{init_logging, AppConfig, LogConfig, PriceDataset, ServerConfig};

/// CORS 미들웨어 구성 (읽기 전용 API이므로 모든 origin의 GET 허용).
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600))
}

/// 전체 라우터 생성.
fn create_router(state: Arc<AppState>, server: &ServerConfig) -> Router {
    create_api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            server.request_timeout(),
        ))
        .layer(cors_layer())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 파일 로드 (있는 경우)
    let _ = dotenvy::dotenv();

    let config = match AppConfig::load_default() {
        Ok(config) => config,
        Err(e) => {
            let _ = init_logging(LogConfig::default());
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    init_logging(LogConfig::from_settings(&config.logging))?;

    info!("Starting Nifty API server...");

    let addr = config.server.socket_addr().map_err(|e| {
        error!(
            host = %config.server.host,
            port = config.server.port,
            error = %e,
            "Invalid listen address, check NIFTY__SERVER__HOST and NIFTY__SERVER__PORT"
        );
        e
    })?;

    // 심볼 인덱스 구축 (데이터 파일을 읽을 수 없으면 시작하지 않음)
    let dataset = PriceDataset::new(config.data.csv_path.clone());
    let state = match AppState::load(dataset) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!(
                path = %config.data.csv_path.display(),
                error = %e,
                "Failed to read data source"
            );
            std::process::exit(1);
        }
    };

    info!(
        version = %state.version,
        data_source = %state.dataset.path().display(),
        symbols = state.symbols.len(),
        "Application state initialized"
    );

    let app = create_router(state, &config.server);

    info!(%addr, "API server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

/// Graceful shutdown 시그널 대기.
///
/// Ctrl+C 또는 SIGTERM 시그널을 수신하면 반환합니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
