//! # Nifty Core
//!
//! NIFTY 50 종목의 과거 시세 조회에 필요한 핵심 타입과 데이터 소스를 제공합니다.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 시세 레코드 및 응답 투영 타입 ([`PriceRow`], [`PriceBar`])
//! - CSV 기반 데이터 소스 ([`PriceDataset`])
//! - 시작 시 한 번 구축되는 심볼 인덱스 ([`SymbolIndex`])
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod logging;

pub use self::config::*;
pub use dataset::{PriceDataset, SymbolIndex};
pub use domain::*;
pub use error::*;
pub use logging::*;
