//! # Schema Definitions Module
//!
//! 초기화 절차가 서버에 기록하는 모든 정의를 한곳에 모은 모듈입니다.
//! 검증 스키마, 역할 부여, 인덱스 정의는 기존 배포와 호환되어야 하므로
//! 키 이름과 옵션 조합을 임의로 바꾸면 안 됩니다.
//!
//! - [`users_validator`] - `users` 컬렉션의 `$jsonSchema` 검증기
//! - [`roles`] - 애플리케이션 사용자 역할과 `createUser` 명령
//! - [`indexes`] - `users` 컬렉션 인덱스 정의

pub mod users_validator;
pub mod roles;
pub mod indexes;

pub use users_validator::*;
pub use roles::*;
pub use indexes::*;
