//! Starter Kit 데이터베이스 초기화 실행 파일
//!
//! 컨테이너 시작 시 한 번 실행됩니다. 설정을 로드하고 MongoDB에 연결한 뒤
//! 초기화 절차와 결과 검증을 차례로 수행합니다. 실패하면 0이 아닌 코드로 종료합니다.

use std::process::ExitCode;
use std::sync::Arc;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use starter_kit_init::config::BootstrapConfig;
use starter_kit_init::db::Database;
use starter_kit_init::errors::AppResult;
use starter_kit_init::services::bootstrap::{BootstrapService, StateReport};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    load_env_file();
    init_logging();

    info!("🚀 Starter Kit 데이터베이스 초기화 시작");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ 초기화 실패: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// 설정 로드부터 검증까지 전체 흐름을 실행합니다.
async fn run() -> AppResult<()> {
    let config = BootstrapConfig::from_env()?;
    info!(
        "설정 로드됨: environment={:?}, database={}, user={:?}",
        config.environment, config.database.database_name, config.app_user
    );

    info!("📡 데이터베이스 연결 중...");
    let database = Arc::new(Database::connect(&config.database).await?);

    let service = BootstrapService::new(database.clone(), config.app_user.clone());
    service.warn_if_placeholder_password(&config.environment);

    let report = service.run().await?;

    let state = StateReport::inspect(&database.get_database(), &report.user).await?;
    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("상태 보고서 직렬화 실패: {}", e),
    }
    state.ensure_matches(&report.user)
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 (기본값) - 기본 .env 파일 로드
///
/// 로깅 초기화 전에 호출되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,mongodb=warn")
///
/// ```bash
/// RUST_LOG=debug starter_kit_init
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,mongodb=warn"));
}
