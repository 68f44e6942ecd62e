//! 요청 단위 조회 조건.

use super::PriceRow;

/// 시세 조회 조건.
///
/// 요청마다 생성되고 응답 후 버려집니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuery {
    /// 대문자로 정규화된 심볼
    pub symbol: String,
    /// 연도 필터 (검증하지 않음, 빈 문자열은 필터 없음으로 처리)
    pub year: Option<String>,
}

impl PriceQuery {
    /// 조회 조건 생성.
    pub fn new(symbol: &str, year: Option<&str>) -> Self {
        Self {
            symbol: symbol.to_uppercase(),
            year: year.filter(|y| !y.is_empty()).map(str::to_string),
        }
    }

    /// 행이 조건에 맞는지 확인.
    pub fn matches(&self, row: &PriceRow) -> bool {
        if row.symbol != self.symbol {
            return false;
        }
        match &self.year {
            Some(year) => row.year() == year,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(symbol: &str, date: &str) -> PriceRow {
        PriceRow {
            symbol: symbol.to_string(),
            date: date.to_string(),
            open: "1".to_string(),
            high: "1".to_string(),
            low: "1".to_string(),
            close: "1".to_string(),
        }
    }

    #[test]
    fn test_symbol_is_uppercased() {
        let query = PriceQuery::new("infy", None);
        assert_eq!(query.symbol, "INFY");
        assert!(query.matches(&row("INFY", "2021-01-04")));
        assert!(!query.matches(&row("infy", "2021-01-04")));
    }

    #[test]
    fn test_empty_year_means_no_filter() {
        let query = PriceQuery::new("INFY", Some(""));
        assert!(query.year.is_none());
        assert!(query.matches(&row("INFY", "1999-12-31")));
    }

    #[test]
    fn test_year_filter() {
        let query = PriceQuery::new("INFY", Some("2021"));
        assert!(query.matches(&row("INFY", "2021-06-10")));
        assert!(!query.matches(&row("INFY", "2020-06-10")));
        assert!(!query.matches(&row("TCS", "2021-06-10")));
    }

    #[test]
    fn test_malformed_year_matches_nothing() {
        let query = PriceQuery::new("INFY", Some("21"));
        assert!(!query.matches(&row("INFY", "2021-06-10")));
    }
}
