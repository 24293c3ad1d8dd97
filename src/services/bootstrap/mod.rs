//! 데이터베이스 초기화 서비스 모듈
//!
//! - [`bootstrap_service`] - 4단계 초기화 절차
//! - [`verification`] - 초기화 이후 서버 상태 검증

pub mod bootstrap_service;
pub mod verification;

pub use bootstrap_service::{BootstrapReport, BootstrapService, BootstrapStep};
pub use verification::{StateReport, UserInfo};
