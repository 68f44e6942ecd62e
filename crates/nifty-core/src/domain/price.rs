//! 일별 시세 레코드.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// 데이터 파일의 날짜 형식.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 데이터 파일의 한 행.
///
/// 필요한 컬럼만 역직렬화하며, 그 외 컬럼(Series, Volume 등)은 무시됩니다.
/// 가격 필드는 원본 문자열 그대로 보관합니다.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceRow {
    /// 종목 심볼
    pub symbol: String,
    /// 거래일 (`YYYY-MM-DD`)
    pub date: String,
    /// 시가
    pub open: String,
    /// 고가
    pub high: String,
    /// 저가
    pub low: String,
    /// 종가
    pub close: String,
}

impl PriceRow {
    /// 연도 부분 (`-` 앞의 첫 구간).
    ///
    /// 달력 파싱 없이 문자열 접두만 봅니다.
    pub fn year(&self) -> &str {
        self.date.split('-').next().unwrap_or_default()
    }

    /// 응답용 필드만 남깁니다.
    pub fn into_bar(self) -> PriceBar {
        PriceBar {
            date: self.date,
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
        }
    }
}

/// 응답에 담기는 투영 레코드.
///
/// JSON 키는 정확히 `Date`, `Open`, `High`, `Low`, `Close`입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceBar {
    pub date: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
}

/// 거래일 문자열을 달력 날짜로 파싱합니다.
///
/// # Errors
/// 형식이 맞지 않으면 [`DataError::InvalidDate`]를 반환합니다.
pub fn parse_trade_date(date: &str, symbol: &str) -> Result<NaiveDate, DataError> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| DataError::InvalidDate {
        date: date.to_string(),
        symbol: symbol.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str) -> PriceRow {
        PriceRow {
            symbol: "INFY".to_string(),
            date: date.to_string(),
            open: "100".to_string(),
            high: "105".to_string(),
            low: "99".to_string(),
            close: "103.50".to_string(),
        }
    }

    #[test]
    fn test_year_is_literal_prefix() {
        assert_eq!(row("2021-01-04").year(), "2021");
        assert_eq!(row("20210104").year(), "20210104");
    }

    #[test]
    fn test_bar_serializes_exact_keys() {
        let bar = row("2021-01-04").into_bar();
        let value = serde_json::to_value(&bar).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["Close", "Date", "High", "Low", "Open"]);
        assert_eq!(object["Close"], "103.50");
    }

    #[test]
    fn test_parse_trade_date() {
        let date = parse_trade_date("2021-06-10", "INFY").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 6, 10).unwrap());

        let err = parse_trade_date("10/06/2021", "INFY").unwrap_err();
        assert!(matches!(err, DataError::InvalidDate { .. }));
    }
}
