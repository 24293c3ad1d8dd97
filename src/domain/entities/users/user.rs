//! User Document Entity
//!
//! `users` 컬렉션에 저장되는 문서 구조입니다.
//! 필드와 타입은 컬렉션 검증 스키마와 1:1로 대응합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::schema::EMAIL_PATTERN;

/// 서버 검증기와 동일한 이메일 정규식
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN은 유효한 정규식이어야 합니다")
});

/// 이메일이 검증 스키마의 패턴과 일치하는지 확인합니다.
///
/// 서버(PCRE)의 `$`는 문자열 끝의 개행 하나 앞에서도 일치하므로,
/// 마지막 `\n` 하나를 떼고 검사해 서버 판단과 맞춥니다.
pub fn is_valid_email(email: &str) -> bool {
    let candidate = email.strip_suffix('\n').unwrap_or(email);
    EMAIL_REGEX.is_match(candidate)
}

fn validate_email_shape(email: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::new("invalid_email")
            .with_message("이메일 형식이 올바르지 않습니다".into()));
    }
    Ok(())
}

/// 사용자 문서
///
/// `email`, `hashed_password`, `is_active`는 서버 검증기의 필수 필드이며,
/// 나머지 필드는 존재할 경우 타입만 검사되므로 없는 문서도 읽을 수 있어야 합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    #[validate(custom(function = "validate_email_shape"))]
    pub email: String,
    /// 해시된 비밀번호
    pub hashed_password: String,
    /// 표시 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 관리자 여부 (없으면 false)
    #[serde(default)]
    pub is_superuser: bool,
    /// 생성 시간
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    /// 수정 시간
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl UserDocument {
    /// 활성 상태의 일반 사용자 문서를 생성합니다.
    pub fn new(email: String, hashed_password: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            hashed_password,
            full_name: None,
            is_active: true,
            is_superuser: false,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern_examples() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_single_trailing_newline_matches_server() {
        assert!(is_valid_email("a@b.co\n"));
        assert!(!is_valid_email("a@b.co\n\n"));
        assert!(!is_valid_email("\n"));
    }

    #[test]
    fn test_minimal_server_document_deserializes() {
        let id = ObjectId::new();
        let document = mongodb::bson::doc! {
            "_id": id,
            "email": "a@b.co",
            "hashed_password": "h",
            "is_active": true
        };

        let user: UserDocument = mongodb::bson::from_document(document).unwrap();

        assert_eq!(user.id, Some(id));
        assert!(user.is_active);
        assert!(!user.is_superuser);
        assert!(user.full_name.is_none());
        assert!(user.created_at.is_none());
        assert!(user.updated_at.is_none());
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_new_document_defaults() {
        let user = UserDocument::new("a@b.co".to_string(), "$2b$12$hash".to_string());

        assert!(user.is_active);
        assert!(!user.is_superuser);
        assert!(user.full_name.is_none());
        assert_eq!(user.created_at, user.updated_at);
        assert!(user.id_string().is_none());
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let user = UserDocument::new("not-an-email".to_string(), "hash".to_string());
        let errors = user.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_validate_accepts_good_email() {
        let user = UserDocument::new("a@b.co".to_string(), "hash".to_string())
            .with_full_name("Alice");

        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_serialized_shape_matches_validator() {
        let user = UserDocument::new("a@b.co".to_string(), "hash".to_string());
        let document = mongodb::bson::to_document(&user).unwrap();

        assert!(!document.contains_key("_id"));
        assert!(!document.contains_key("full_name"));
        assert_eq!(document.get_str("email").unwrap(), "a@b.co");
        assert!(document.get_bool("is_active").unwrap());
        assert!(document.get_datetime("created_at").is_ok());
        assert!(document.get_datetime("updated_at").is_ok());
    }
}
