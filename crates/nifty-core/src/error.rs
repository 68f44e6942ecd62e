//! 오류 타입.

use std::path::PathBuf;

use thiserror::Error;

/// 데이터 소스 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 데이터 파일을 열 수 없음
    #[error("Failed to open data source {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV 레코드 읽기/파싱 오류 (필수 컬럼 누락 포함)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// 날짜 형식이 `YYYY-MM-DD`가 아님
    #[error("Invalid date '{date}' for symbol {symbol}")]
    InvalidDate { date: String, symbol: String },

    /// 블로킹 스캔 태스크 실패
    #[error("Scan task failed: {0}")]
    Task(String),
}

/// 설정 오류.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 설정 소스 로드/역직렬화 오류
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    /// `host:port` 형식이 유효하지 않음
    #[error("Invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// 데이터 소스 결과 타입.
pub type DataResult<T> = Result<T, DataError>;
