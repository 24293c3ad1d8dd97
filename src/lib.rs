//! Starter Kit 데이터베이스 초기화
//!
//! 환경 부트스트랩 시점에 한 번 실행되어 `starter_kit` MongoDB 데이터베이스를 준비합니다.
//!
//! # Features
//!
//! - **애플리케이션 사용자**: `readWrite`, `dbAdmin` 역할이 대상 데이터베이스로 제한된 사용자
//! - **검증 컬렉션**: `$jsonSchema` 검증기가 붙은 `users` 컬렉션
//! - **인덱스**: `{ email: 1 }` 유니크, `{ is_active: 1 }`
//! - **상태 검증**: 초기화 결과를 서버 메타데이터로 확인
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │      main       │ ← 환경 로드, 로깅, 실행
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← BootstrapService, StateReport
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     Domain      │ ← 검증 스키마, 역할, 인덱스, UserDocument
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use starter_kit_init::config::BootstrapConfig;
//! use starter_kit_init::db::Database;
//! use starter_kit_init::services::bootstrap::BootstrapService;
//!
//! let config = BootstrapConfig::from_env()?;
//! let database = Arc::new(Database::connect(&config.database).await?);
//! let report = BootstrapService::new(database, config.app_user).run().await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod errors;
