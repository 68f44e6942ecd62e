//! CSV 기반 시세 데이터 소스.
//!
//! 외부에서 관리되는 단일 CSV 파일(`Symbol,Date,Open,High,Low,Close,...`)을
//! 읽기 전용으로 다룹니다. 요청마다 파일을 새로 열어 선형 스캔합니다.
//!
//! ## 사용법
//!
//! ```rust,ignore
//! use nifty_core::{PriceDataset, PriceQuery, SymbolIndex};
//!
//! let dataset = PriceDataset::new("data/nifty50_all.csv");
//! let index = SymbolIndex::build(&dataset)?;
//!
//! let query = PriceQuery::new("infy", Some("2021"));
//! if index.contains(&query.symbol) {
//!     let bars = dataset.scan(&query)?;
//! }
//! ```

mod symbol_index;

pub use symbol_index::SymbolIndex;

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{parse_trade_date, PriceBar, PriceQuery, PriceRow};
use crate::error::{DataError, DataResult};

/// 시세 CSV 파일 핸들.
///
/// 경로만 보관하므로 복제 비용이 작고 여러 요청에서 동시에 사용해도 안전합니다.
#[derive(Debug, Clone)]
pub struct PriceDataset {
    path: PathBuf,
}

impl PriceDataset {
    /// 데이터 소스 생성 (파일은 아직 열지 않음).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 데이터 파일 경로.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 헤더 행을 포함한 CSV 리더를 엽니다.
    pub fn reader(&self) -> DataResult<csv::Reader<File>> {
        let file = File::open(&self.path).map_err(|source| DataError::Open {
            path: self.path.clone(),
            source,
        })?;

        Ok(csv::ReaderBuilder::new().has_headers(true).from_reader(file))
    }

    /// 모든 행을 순서대로 읽는 반복자.
    pub fn rows(&self) -> DataResult<impl Iterator<Item = DataResult<PriceRow>>> {
        let reader = self.reader()?;
        Ok(reader
            .into_deserialize::<PriceRow>()
            .map(|row| row.map_err(DataError::from)))
    }

    /// 조건에 맞는 행을 투영하고 최신 날짜 순으로 정렬합니다.
    ///
    /// 같은 날짜의 행은 파일 내 순서를 유지합니다.
    ///
    /// # Errors
    /// - 파일 열기/읽기 실패 시 [`DataError::Open`], [`DataError::Csv`]
    /// - 일치한 행의 날짜가 `YYYY-MM-DD`가 아니면 [`DataError::InvalidDate`]
    pub fn scan(&self, query: &PriceQuery) -> DataResult<Vec<PriceBar>> {
        let mut matched = Vec::new();

        for row in self.rows()? {
            let row = row?;
            if !query.matches(&row) {
                continue;
            }
            let trade_date = parse_trade_date(&row.date, &row.symbol)?;
            matched.push((trade_date, row.into_bar()));
        }

        // sort_by는 안정 정렬
        matched.sort_by(|a, b| b.0.cmp(&a.0));

        debug!(
            symbol = %query.symbol,
            year = ?query.year,
            rows = matched.len(),
            "Price scan completed"
        );

        Ok(matched.into_iter().map(|(_, bar)| bar).collect())
    }
}
