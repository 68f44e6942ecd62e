//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! 시작 시 구축된 심볼 인덱스와 데이터 소스 핸들을 담으며, 이후 변경되지 않습니다.
//! Arc로 래핑되어 여러 요청 간에 잠금 없이 공유됩니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use nifty_core::{DataError, DataResult, PriceBar, PriceDataset, PriceQuery, SymbolIndex};

/// 애플리케이션 공유 상태.
#[derive(Debug, Clone)]
pub struct AppState {
    /// 시세 CSV 데이터 소스
    pub dataset: PriceDataset,

    /// 시작 시 구축된 읽기 전용 심볼 인덱스
    pub symbols: Arc<SymbolIndex>,

    /// API 버전
    pub version: String,

    /// 서버 시작 시각
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// 이미 구축된 인덱스로 상태 생성.
    pub fn new(dataset: PriceDataset, symbols: SymbolIndex) -> Self {
        Self {
            dataset,
            symbols: Arc::new(symbols),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: Utc::now(),
        }
    }

    /// 데이터 소스를 읽어 심볼 인덱스를 구축한 뒤 상태를 생성합니다.
    ///
    /// # Errors
    /// 데이터 파일을 열거나 읽을 수 없으면 오류를 반환합니다.
    pub fn load(dataset: PriceDataset) -> DataResult<Self> {
        let symbols = SymbolIndex::build(&dataset)?;
        Ok(Self::new(dataset, symbols))
    }

    /// 서버 업타임(초).
    pub fn uptime_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }

    /// 블로킹 풀에서 데이터 소스를 스캔합니다.
    pub async fn scan_prices(&self, query: PriceQuery) -> DataResult<Vec<PriceBar>> {
        let dataset = self.dataset.clone();
        tokio::task::spawn_blocking(move || dataset.scan(&query))
            .await
            .map_err(|e| DataError::Task(e.to_string()))?
    }

    /// 데이터 파일을 지금 열 수 있는지 확인.
    pub async fn is_dataset_readable(&self) -> bool {
        tokio::fs::File::open(self.dataset.path()).await.is_ok()
    }
}
