//! 시세 조회를 위한 도메인 모델.

mod price;
mod query;

pub use price::*;
pub use query::*;
