//! `users` 컬렉션 검증 스키마
//!
//! 삽입/수정 시 서버가 평가하는 문서 형태 규칙입니다.

use mongodb::bson::{doc, Document};

/// 문서 형태 규칙이 적용되는 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// 이메일 주소의 기본 형태를 검사하는 정규식
///
/// 서버 검증기와 로컬 검증이 같은 패턴을 공유합니다.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// 반드시 존재해야 하는 필드
pub const REQUIRED_FIELDS: [&str; 3] = ["email", "hashed_password", "is_active"];

/// `$jsonSchema` 본문을 생성합니다.
///
/// ```text
/// required:   email, hashed_password, is_active
/// string:     email (pattern), hashed_password, full_name
/// bool:       is_active, is_superuser
/// date:       created_at, updated_at
/// ```
pub fn users_json_schema() -> Document {
    doc! {
        "bsonType": "object",
        "required": REQUIRED_FIELDS.to_vec(),
        "properties": {
            "email": {
                "bsonType": "string",
                "pattern": EMAIL_PATTERN
            },
            "hashed_password": {
                "bsonType": "string"
            },
            "full_name": {
                "bsonType": "string"
            },
            "is_active": {
                "bsonType": "bool"
            },
            "is_superuser": {
                "bsonType": "bool"
            },
            "created_at": {
                "bsonType": "date"
            },
            "updated_at": {
                "bsonType": "date"
            }
        }
    }
}

/// `createCollection`의 `validator` 옵션으로 전달되는 문서
pub fn users_validator() -> Document {
    doc! { "$jsonSchema": users_json_schema() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validator_wraps_json_schema() {
        let validator = users_validator();

        assert_eq!(validator.len(), 1);
        assert_eq!(validator.get_document("$jsonSchema").unwrap(), &users_json_schema());
    }

    #[test]
    fn test_required_fields() {
        let schema = users_json_schema();
        let required: Vec<&str> = schema
            .get_array("required")
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();

        assert_eq!(required, vec!["email", "hashed_password", "is_active"]);
    }

    #[test]
    fn test_property_types() {
        let schema = users_json_schema();
        let properties = schema.get_document("properties").unwrap();
        let expected = [
            ("email", "string"),
            ("hashed_password", "string"),
            ("full_name", "string"),
            ("is_active", "bool"),
            ("is_superuser", "bool"),
            ("created_at", "date"),
            ("updated_at", "date"),
        ];

        assert_eq!(properties.len(), expected.len());
        for (field, bson_type) in expected {
            let property = properties.get_document(field).unwrap();
            assert_eq!(property.get_str("bsonType").unwrap(), bson_type, "{}", field);
        }
    }

    #[test]
    fn test_email_pattern_is_exact() {
        let schema = users_json_schema();
        let email = schema
            .get_document("properties")
            .and_then(|p| p.get_document("email"))
            .unwrap();

        assert_eq!(
            email.get_str("pattern").unwrap(),
            "^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\\.[a-zA-Z]{2,}$"
        );
    }
}
