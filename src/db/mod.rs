//! Database Connection Management Module
//!
//! MongoDB 클라이언트 생성과 연결 확인을 담당하는 모듈입니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use starter_kit_init::config::BootstrapConfig;
//! use starter_kit_init::db::Database;
//!
//! let config = BootstrapConfig::from_env()?;
//! let database = Database::connect(&config.database).await?;
//! let handle = database.get_database();
//! ```

use log::info;
use mongodb::{bson::doc, options::ClientOptions, Client};

use crate::config::DatabaseConfig;
use crate::errors::{AppError, AppResult};

/// 모니터링 도구에 표시되는 애플리케이션 이름
const APP_NAME: &str = "starter_kit_init";

/// MongoDB 데이터베이스 연결 래퍼
///
/// 클라이언트와 대상 데이터베이스 이름을 함께 보관합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 초기화 대상 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 연결을 생성하고 `ping`으로 연결 상태를 검증합니다.
    ///
    /// 연결 URI 파싱 실패, 서버 선택 실패, 인증 실패는 모두 `AppError::ConnectionError`로 반환되며,
    /// 이 시점까지는 서버에 어떤 쓰기도 일어나지 않습니다.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::ConnectionError(e.to_string()))?;

        client_options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::ConnectionError(e.to_string()))?;

        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::ConnectionError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self::from_client(client, &config.database_name))
    }

    /// 이미 생성된 클라이언트로 래퍼를 만듭니다.
    pub fn from_client(client: Client, database_name: &str) -> Self {
        Self {
            client,
            database_name: database_name.to_string(),
        }
    }

    /// 대상 데이터베이스 핸들을 반환합니다.
    ///
    /// 핸들을 얻는 것만으로는 서버에 아무 변화가 없으며,
    /// 데이터베이스는 첫 쓰기 시점에 서버가 생성합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
