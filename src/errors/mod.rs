//! 에러 타입 모듈
//!
//! - [`errors`] - `AppError`, `AppResult`, MongoDB 에러 분류

pub mod errors;

pub use errors::{AppError, AppResult};
