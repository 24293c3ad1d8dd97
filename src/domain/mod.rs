//! # Domain Layer Module
//!
//! 초기화 절차가 서버에 기록하는 정의와, 그 정의를 따르는 문서 모델을 담습니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── schema     - 검증 스키마, 역할 부여, 인덱스 정의
//! └── entities   - users 컬렉션 문서 모델
//!      │
//!      ▼
//! Services (BootstrapService)
//!      │
//!      ▼
//! Infrastructure (Repositories, DB)
//! ```

pub mod schema;
pub mod entities;

pub use schema::*;
pub use entities::*;
