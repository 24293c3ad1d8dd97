//! 부트스트랩 전역에서 사용하는 에러 시스템
//!
//! `thiserror` 기반의 단일 에러 타입으로 초기화 절차의 모든 실패를 표현합니다.
//! MongoDB 드라이버 에러는 서버 에러 코드와 에러 종류에 따라 분류되며,
//! 서버가 돌려준 원본 메시지는 그대로 보존됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppError, AppResult};
//!
//! async fn create_app_user(db: &mongodb::Database) -> AppResult<()> {
//!     db.run_command(doc! { "createUser": "app_user", "pwd": "app_password", "roles": [] })
//!         .await?; // mongodb::error::Error -> AppError 자동 분류
//!     Ok(())
//! }
//! ```

use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

/// 부트스트랩 에러 타입
///
/// 절차는 fail-fast 이므로 어떤 변형이든 발생 즉시 남은 단계를 중단합니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 이미 존재하는 사용자 또는 컬렉션
    #[error("Duplicate entity: {0}")]
    DuplicateEntityError(String),

    /// 서버가 검증 스키마를 거부했거나, 검증 스키마가 문서를 거부함
    #[error("Schema validation error: {0}")]
    SchemaValidationError(String),

    /// 유니크 제약 위반 (중복 키)
    #[error("Constraint violation: {0}")]
    ConstraintViolationError(String),

    /// 연결, 서버 선택, 인증 실패
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// 분류되지 않은 데이터베이스 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 잘못된 환경 설정
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 초기화 이후 서버 상태가 기대와 다름
    #[error("Verification failed: {0}")]
    VerificationError(String),
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// MongoDB 서버 에러 코드
pub mod codes {
    pub const BAD_VALUE: i32 = 2;
    pub const FAILED_TO_PARSE: i32 = 9;
    pub const NAMESPACE_EXISTS: i32 = 48;
    pub const DOCUMENT_VALIDATION_FAILURE: i32 = 121;
    pub const DUPLICATE_KEY: i32 = 11000;
    pub const DUPLICATE_KEY_LEGACY: i32 = 11001;
    /// `createUser` 가 이미 존재하는 사용자에 대해 반환하는 location 코드
    pub const USER_ALREADY_EXISTS: i32 = 51003;
}

/// 서버 에러 코드의 분류 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    DuplicateEntity,
    SchemaValidation,
    ConstraintViolation,
    Other,
}

impl ErrorCategory {
    /// 서버 에러 코드를 분류합니다.
    pub fn from_code(code: i32) -> Self {
        match code {
            codes::NAMESPACE_EXISTS | codes::USER_ALREADY_EXISTS => ErrorCategory::DuplicateEntity,
            codes::DUPLICATE_KEY | codes::DUPLICATE_KEY_LEGACY => ErrorCategory::ConstraintViolation,
            codes::DOCUMENT_VALIDATION_FAILURE | codes::BAD_VALUE | codes::FAILED_TO_PARSE => {
                ErrorCategory::SchemaValidation
            }
            _ => ErrorCategory::Other,
        }
    }

    /// 분류 결과와 원본 메시지로 `AppError`를 만듭니다.
    pub fn into_error(self, message: String) -> AppError {
        match self {
            ErrorCategory::DuplicateEntity => AppError::DuplicateEntityError(message),
            ErrorCategory::SchemaValidation => AppError::SchemaValidationError(message),
            ErrorCategory::ConstraintViolation => AppError::ConstraintViolationError(message),
            ErrorCategory::Other => AppError::DatabaseError(message),
        }
    }
}

/// 드라이버 에러에서 서버 에러 코드를 추출합니다.
fn server_code(err: &mongodb::error::Error) -> Option<i32> {
    match err.kind.as_ref() {
        ErrorKind::Command(command_error) => Some(command_error.code),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => Some(write_error.code),
        ErrorKind::Write(WriteFailure::WriteConcernError(concern_error)) => Some(concern_error.code),
        _ => None,
    }
}

fn is_connection_failure(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Io(_)
            | ErrorKind::ServerSelection { .. }
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::Authentication { .. }
            | ErrorKind::ConnectionPoolCleared { .. }
    )
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        let message = err.to_string();

        if is_connection_failure(&err) {
            return AppError::ConnectionError(message);
        }

        match server_code(&err) {
            Some(code) => ErrorCategory::from_code(code).into_error(message),
            None => AppError::DatabaseError(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_entity_codes() {
        assert_eq!(ErrorCategory::from_code(48), ErrorCategory::DuplicateEntity);
        assert_eq!(ErrorCategory::from_code(51003), ErrorCategory::DuplicateEntity);
    }

    #[test]
    fn test_duplicate_key_is_constraint_violation() {
        assert_eq!(ErrorCategory::from_code(11000), ErrorCategory::ConstraintViolation);
        assert_eq!(ErrorCategory::from_code(11001), ErrorCategory::ConstraintViolation);
    }

    #[test]
    fn test_schema_codes() {
        for code in [2, 9, 121] {
            assert_eq!(ErrorCategory::from_code(code), ErrorCategory::SchemaValidation);
        }
    }

    #[test]
    fn test_unknown_code_is_database_error() {
        let error = ErrorCategory::from_code(13).into_error("not authorized".to_string());
        assert_eq!(error, AppError::DatabaseError("not authorized".to_string()));
    }

    #[test]
    fn test_message_is_preserved() {
        let raw = "User \"app_user@starter_kit\" already exists".to_string();
        let error = ErrorCategory::from_code(51003).into_error(raw.clone());

        assert!(error.to_string().ends_with(&raw));
    }

    #[test]
    fn test_custom_driver_error_is_database_error() {
        let driver_error = mongodb::error::Error::custom("boom");
        assert!(matches!(AppError::from(driver_error), AppError::DatabaseError(_)));
    }
}
