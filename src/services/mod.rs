//! 서비스 계층 모듈
//!
//! # Modules
//!
//! - [`bootstrap`] - 데이터베이스 초기화 절차와 결과 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::bootstrap::{BootstrapService, StateReport};
//!
//! let report = BootstrapService::new(database.clone(), config.app_user.clone()).run().await?;
//! let state = StateReport::inspect(&database.get_database(), &report.user).await?;
//! state.ensure_matches(&report.user)?;
//! ```

pub mod bootstrap;
