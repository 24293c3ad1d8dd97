//! Users Entity Module
//!
//! `users` 컬렉션 문서를 표현하는 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use starter_kit_init::domain::entities::users::UserDocument;
//! use validator::Validate;
//!
//! let user = UserDocument::new("a@b.co".to_string(), hashed_password)
//!     .with_full_name("Alice");
//! user.validate()?;
//! ```

pub mod user;

pub use user::*;
