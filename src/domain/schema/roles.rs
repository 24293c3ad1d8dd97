//! 애플리케이션 사용자 역할 정의

use mongodb::bson::{doc, Bson, Document};
use serde::{Deserialize, Serialize};

use crate::config::AppUserConfig;

/// 읽기/쓰기 역할
pub const READ_WRITE_ROLE: &str = "readWrite";
/// 인덱스, 통계 등 데이터베이스 관리 역할
pub const DB_ADMIN_ROLE: &str = "dbAdmin";

/// (역할, 데이터베이스) 쌍
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoleGrant {
    pub role: String,
    pub db: String,
}

impl RoleGrant {
    pub fn new(role: &str, db: &str) -> Self {
        Self {
            role: role.to_string(),
            db: db.to_string(),
        }
    }

    pub fn to_document(&self) -> Document {
        doc! { "role": self.role.as_str(), "db": self.db.as_str() }
    }
}

/// 애플리케이션 사용자에게 부여하는 역할 목록
///
/// 두 역할 모두 대상 데이터베이스로 범위가 제한됩니다.
pub fn app_user_roles(database_name: &str) -> Vec<RoleGrant> {
    vec![
        RoleGrant::new(READ_WRITE_ROLE, database_name),
        RoleGrant::new(DB_ADMIN_ROLE, database_name),
    ]
}

/// 대상 데이터베이스에서 실행할 `createUser` 명령을 생성합니다.
///
/// ```text
/// { createUser: "app_user", pwd: "...",
///   roles: [ { role: "readWrite", db: "starter_kit" },
///            { role: "dbAdmin",   db: "starter_kit" } ] }
/// ```
pub fn create_user_command(user: &AppUserConfig, database_name: &str) -> Document {
    let roles: Vec<Bson> = app_user_roles(database_name)
        .iter()
        .map(|grant| Bson::Document(grant.to_document()))
        .collect();

    doc! {
        "createUser": user.username.as_str(),
        "pwd": user.password.as_str(),
        "roles": roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BootstrapConfig;

    #[test]
    fn test_roles_are_scoped_to_target_database() {
        let roles = app_user_roles("starter_kit");

        assert_eq!(
            roles,
            vec![
                RoleGrant::new("readWrite", "starter_kit"),
                RoleGrant::new("dbAdmin", "starter_kit"),
            ]
        );
    }

    #[test]
    fn test_create_user_command_shape() {
        let config = BootstrapConfig::defaults();
        let command = create_user_command(&config.app_user, "starter_kit");

        // 명령 이름이 첫 번째 키여야 함
        assert_eq!(command.keys().next().map(String::as_str), Some("createUser"));
        assert_eq!(command.get_str("createUser").unwrap(), "app_user");
        assert_eq!(command.get_str("pwd").unwrap(), "app_password");

        let roles = command.get_array("roles").unwrap();
        assert_eq!(roles.len(), 2);
        assert_eq!(
            roles[0].as_document().unwrap(),
            &doc! { "role": "readWrite", "db": "starter_kit" }
        );
        assert_eq!(
            roles[1].as_document().unwrap(),
            &doc! { "role": "dbAdmin", "db": "starter_kit" }
        );
    }
}
