//! 위치 기반 사용자 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MongoDB 연결을 설정하고 서비스를 조립한 뒤 REST API를 제공하며,
//! 서버가 멈추면 데이터베이스 연결을 정리합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use geo_user_service::config::{CorsConfig, PasswordConfig, ServerConfig};
use geo_user_service::core::AppState;
use geo_user_service::db::Database;
use geo_user_service::repositories::users::{MongoUserRepository, UserStore};
use geo_user_service::routes::configure_all_routes;
use geo_user_service::services::auth::TokenService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 위치 기반 사용자 서비스 시작중...");

    info!("📡 데이터베이스 연결 중...");
    let database = Database::from_env()
        .await
        .map_err(|e| startup_error("데이터베이스 연결 실패", e))?;

    let state = match build_state(&database).await {
        Ok(state) => state,
        Err(e) => {
            database.shutdown().await;
            return Err(e);
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    let result = start_http_server(state).await;

    // 진행 중 요청이 끝난 뒤 연결 종료
    database.shutdown().await;
    result
}

/// 저장소와 서비스를 조립합니다
///
/// 이메일 유니크 인덱스를 보장한 뒤 `AppState`를 구성합니다.
async fn build_state(database: &Database) -> io::Result<web::Data<AppState>> {
    let repository = MongoUserRepository::new(database);
    repository
        .create_indexes()
        .await
        .map_err(|e| startup_error("인덱스 생성 실패", e))?;

    let tokens = TokenService::from_config()
        .map_err(|e| startup_error("JWT 설정 오류", e))?;

    let store: Arc<dyn UserStore> = Arc::new(repository);

    Ok(web::Data::new(AppState::new(store, tokens, PasswordConfig::bcrypt_cost())))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: web::Data<AppState>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let allowed_origins = CorsConfig::allowed_origins();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/users", bind_address);

    HttpServer::new(move || {
        let cors = configure_cors(&allowed_origins);

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    // 로거 초기화 전이므로 결과는 표준 에러로만 알림
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
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=geo_user_service=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`가 비어 있으면 모든 Origin을 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors
        .allowed_methods(vec!["GET", "POST", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}

fn startup_error(context: &str, e: impl std::fmt::Display) -> io::Error {
    error!("{}: {}", context, e);
    io::Error::other(format!("{}: {}", context, e))
}
