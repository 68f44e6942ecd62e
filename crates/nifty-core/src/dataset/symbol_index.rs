//! 데이터 소스에 존재하는 심볼 집합.

use std::collections::HashSet;

use tracing::info;

use super::PriceDataset;
use crate::error::DataResult;

/// 시작 시 한 번 구축되는 읽기 전용 심볼 인덱스.
///
/// 알 수 없는 심볼 요청을 파일을 열지 않고 거절하는 데 사용합니다.
#[derive(Debug, Clone, Default)]
pub struct SymbolIndex {
    symbols: HashSet<String>,
}

impl SymbolIndex {
    /// 데이터 소스 전체를 한 번 읽어 인덱스를 구축합니다.
    ///
    /// # Errors
    /// 파일을 열거나 읽을 수 없으면 오류를 반환합니다. 호출자는 이를 시작 실패로 처리해야 합니다.
    pub fn build(dataset: &PriceDataset) -> DataResult<Self> {
        let mut symbols = HashSet::new();
        let mut rows = 0usize;

        for row in dataset.rows()? {
            let row = row?;
            rows += 1;
            symbols.insert(row.symbol);
        }

        info!(
            path = %dataset.path().display(),
            rows,
            symbols = symbols.len(),
            "Symbol index built"
        );

        Ok(Self { symbols })
    }

    /// 심볼 존재 여부 (입력은 대문자로 변환 후 정확히 비교).
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(&symbol.to_uppercase())
    }

    /// 인덱스된 심볼 수.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// 인덱스가 비어 있는지 여부.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// 심볼을 사전순으로 순회합니다.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let mut symbols: Vec<&str> = self.symbols.iter().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols.into_iter()
    }
}

impl FromIterator<String> for SymbolIndex {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}
