//! # 데이터베이스 초기화 서비스
//!
//! 환경 부트스트랩 시점에 한 번 실행되는 초기화 절차를 구현합니다.
//!
//! ## 절차
//!
//! ```text
//! Step 1  데이터베이스 선택     (부수 효과 없음)
//! Step 2  애플리케이션 사용자   createUser + readWrite/dbAdmin
//! Step 3  users 컬렉션          $jsonSchema 검증기
//! Step 4  인덱스                { email: 1 } unique, { is_active: 1 }
//! ```
//!
//! 각 단계는 독립된 호출이며 순서대로 실행됩니다. 첫 에러에서 즉시 중단하고,
//! 이미 완료된 단계는 되돌리지 않습니다. 재실행 시의 중복 검사는 서버에 맡깁니다.

use std::sync::Arc;

use log::{error, info, warn};
use mongodb::bson::Document;
use serde::Serialize;

use crate::{
    config::{AppUserConfig, Environment},
    db::Database,
    domain::schema::{
        app_user_roles, create_user_command, users_index_specs, users_validator, RoleGrant,
        USERS_COLLECTION,
    },
    errors::AppResult,
    utils::display_terminal::{
        print_boxed_title, print_final_summary, print_step_complete, print_step_failed,
        print_step_start, print_sub_task,
    },
};

/// 초기화 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStep {
    SelectDatabase,
    CreateAppUser,
    CreateUsersCollection,
    CreateIndexes,
}

impl BootstrapStep {
    /// 실행 순서
    pub const ALL: [BootstrapStep; 4] = [
        BootstrapStep::SelectDatabase,
        BootstrapStep::CreateAppUser,
        BootstrapStep::CreateUsersCollection,
        BootstrapStep::CreateIndexes,
    ];

    /// 1부터 시작하는 단계 번호
    pub fn number(&self) -> u8 {
        match self {
            BootstrapStep::SelectDatabase => 1,
            BootstrapStep::CreateAppUser => 2,
            BootstrapStep::CreateUsersCollection => 3,
            BootstrapStep::CreateIndexes => 4,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BootstrapStep::SelectDatabase => "Select target database",
            BootstrapStep::CreateAppUser => "Create application user",
            BootstrapStep::CreateUsersCollection => "Create users collection with validator",
            BootstrapStep::CreateIndexes => "Create users indexes",
        }
    }
}

/// 초기화 결과 요약
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BootstrapReport {
    pub database: String,
    pub user: String,
    pub roles: Vec<RoleGrant>,
    pub collection: String,
    /// 서버가 부여한 인덱스 이름 (생성 순서)
    pub indexes: Vec<String>,
}

/// 데이터베이스 초기화 서비스
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let config = BootstrapConfig::from_env()?;
/// let database = Arc::new(Database::connect(&config.database).await?);
///
/// let service = BootstrapService::new(database, config.app_user);
/// let report = service.run().await?;
/// ```
pub struct BootstrapService {
    db: Arc<Database>,
    app_user: AppUserConfig,
}

impl BootstrapService {
    pub fn new(db: Arc<Database>, app_user: AppUserConfig) -> Self {
        Self { db, app_user }
    }

    /// 플레이스홀더 비밀번호 사용 여부를 경고합니다.
    ///
    /// 실행을 막지는 않으며, 프로덕션에서는 에러 레벨로 기록합니다.
    pub fn warn_if_placeholder_password(&self, environment: &Environment) {
        if !self.app_user.uses_placeholder_password() {
            return;
        }

        if *environment == Environment::Production {
            error!(
                "🚨 '{}' 사용자가 기본 비밀번호로 생성됩니다. APP_DB_PASSWORD를 비밀 저장소에서 주입하세요",
                self.app_user.username
            );
        } else {
            warn!(
                "⚠️ '{}' 사용자가 기본 비밀번호로 생성됩니다 (APP_DB_PASSWORD 미설정)",
                self.app_user.username
            );
        }
    }

    /// 초기화 절차 전체를 순서대로 실행합니다.
    ///
    /// # Errors
    ///
    /// * `DuplicateEntityError` - 사용자 또는 컬렉션이 이미 존재
    /// * `SchemaValidationError` - 서버가 검증 스키마를 거부
    /// * `ConstraintViolationError` - 기존 데이터가 유니크 인덱스를 위반
    /// * `ConnectionError` - 서버 연결 실패
    pub async fn run(&self) -> AppResult<BootstrapReport> {
        print_boxed_title("STARTER KIT DATABASE INIT");

        let step = BootstrapStep::SelectDatabase;
        print_step_start(step.number(), step.description());
        let database = self.select_database();
        print_step_complete(step.number(), step.description(), 1);

        let step = BootstrapStep::CreateAppUser;
        print_step_start(step.number(), step.description());
        let roles = Self::report_failure(step, self.create_app_user(&database).await)?;
        for grant in &roles {
            print_sub_task(&grant.role, &grant.db);
        }
        print_step_complete(step.number(), step.description(), roles.len());

        let step = BootstrapStep::CreateUsersCollection;
        print_step_start(step.number(), step.description());
        Self::report_failure(step, self.create_users_collection(&database).await)?;
        print_step_complete(step.number(), step.description(), 1);

        let step = BootstrapStep::CreateIndexes;
        print_step_start(step.number(), step.description());
        let indexes = Self::report_failure(step, self.create_users_indexes(&database).await)?;
        print_step_complete(step.number(), step.description(), indexes.len());

        let report = BootstrapReport {
            database: database.name().to_string(),
            user: self.app_user.username.clone(),
            roles,
            collection: USERS_COLLECTION.to_string(),
            indexes,
        };

        print_final_summary(
            &report.database,
            &report.user,
            report.roles.len(),
            &report.collection,
            &report.indexes,
        );
        info!("✅ 데이터베이스 초기화 완료: {}", report.database);

        Ok(report)
    }

    /// Step 1: 대상 데이터베이스 핸들을 얻습니다.
    ///
    /// 서버에는 아무 요청도 보내지 않습니다.
    pub fn select_database(&self) -> mongodb::Database {
        let database = self.db.get_database();
        info!("🗄️ 대상 데이터베이스: {}", database.name());
        database
    }

    /// Step 2: 애플리케이션 사용자를 생성합니다.
    ///
    /// 사용자는 대상 데이터베이스를 인증 데이터베이스로 하여 생성됩니다.
    pub async fn create_app_user(&self, database: &mongodb::Database) -> AppResult<Vec<RoleGrant>> {
        info!("👤 사용자 생성 중: {}", self.app_user.username);

        database
            .run_command(create_user_command(&self.app_user, database.name()))
            .await?;

        Ok(app_user_roles(database.name()))
    }

    /// Step 3: 검증기가 붙은 `users` 컬렉션을 생성합니다.
    pub async fn create_users_collection(&self, database: &mongodb::Database) -> AppResult<()> {
        info!("📁 컬렉션 생성 중: {}", USERS_COLLECTION);

        database
            .create_collection(USERS_COLLECTION)
            .validator(users_validator())
            .await?;

        Ok(())
    }

    /// Step 4: `users` 인덱스를 하나씩 생성합니다.
    ///
    /// 첫 번째 인덱스 생성이 실패하면 두 번째는 시도하지 않습니다.
    pub async fn create_users_indexes(&self, database: &mongodb::Database) -> AppResult<Vec<String>> {
        let collection = database.collection::<Document>(USERS_COLLECTION);
        let mut names = Vec::new();

        for spec in users_index_specs() {
            let result = collection.create_index(spec.to_model()).await?;
            let kind = if spec.unique { "unique" } else { "non-unique" };

            info!("🔑 인덱스 생성: {} ({})", result.index_name, kind);
            print_sub_task(&result.index_name, kind);
            names.push(result.index_name);
        }

        Ok(names)
    }

    fn report_failure<T>(step: BootstrapStep, result: AppResult<T>) -> AppResult<T> {
        if let Err(ref e) = result {
            error!("❌ Step {} 실패 ({}): {}", step.number(), step.description(), e);
            print_step_failed(step.number(), step.description(), &e.to_string());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_numbered_in_order() {
        let numbers: Vec<u8> = BootstrapStep::ALL.iter().map(|s| s.number()).collect();

        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_report_serializes_role_grants() {
        let report = BootstrapReport {
            database: "starter_kit".to_string(),
            user: "app_user".to_string(),
            roles: app_user_roles("starter_kit"),
            collection: "users".to_string(),
            indexes: vec!["email_1".to_string(), "is_active_1".to_string()],
        };

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["roles"][0]["role"], "readWrite");
        assert_eq!(json["roles"][1]["role"], "dbAdmin");
        assert_eq!(json["roles"][1]["db"], "starter_kit");
        assert_eq!(json["indexes"][0], "email_1");
    }
}
