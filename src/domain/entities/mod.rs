//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 데이터 구조체를 정의합니다.
//!
//! ```text
//! entities/
//! └── users/
//!     └── user.rs     ← UserDocument (users 컬렉션)
//! ```
//!
//! 엔티티의 필드와 타입은 [`crate::domain::schema`]의 검증 스키마와 일치해야 합니다.
//! 스키마를 바꾸면 엔티티도 함께 바꿔야 합니다.

pub mod users;
