//! 사용자 인증 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결과 Redis 캐시를 설정하고 JWT 인증 기반의 REST API를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_auth_service::caching::ReadThroughCache;
use user_auth_service::config::{CacheConfig, DatabaseConfig, ServerConfig};
use user_auth_service::core::AppState;
use user_auth_service::db::Database;
use user_auth_service::errors::AppResult;
use user_auth_service::repositories::users::MongoUserRepository;
use user_auth_service::routes::configure_all_routes;
use user_auth_service::services::auth::TokenService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 인증 서비스 시작중...");

    let state = build_state().await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(state).await
}

/// 저장소, 캐시, 토큰 서비스를 조립합니다
///
/// MongoDB 연결에 실패하면 에러를 반환합니다. Redis는 이 시점에 연결하지 않고
/// 첫 목록 조회 때 연결하며, 설정이 없거나 연결이 실패해도 서버는 정상 기동합니다.
async fn build_state() -> AppResult<web::Data<AppState>> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await?;
    info!("✅ MongoDB 연결 성공 ({})", database.database_name());

    let repository = MongoUserRepository::new(&database);
    repository.create_indexes().await?;

    let cache_config = CacheConfig::from_env();
    if cache_config.is_none() {
        info!("ℹ️ REDIS_HOST / REDIS_PORT 미설정, 캐시 없이 실행합니다");
    }
    let cache = ReadThroughCache::from_config(cache_config.as_ref());
    info!("🗄️ 사용자 목록 캐시: {}", if cache.is_enabled() { "활성" } else { "비활성" });
    let cache_ttl = cache_config.as_ref().and_then(|config| config.ttl);

    let state = AppState::build(
        Arc::new(repository),
        cache,
        cache_ttl,
        TokenService::from_env(),
    );

    Ok(web::Data::new(state))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: web::Data<AppState>) -> std::io::Result<()> {
    let host = ServerConfig::host();
    let port = ServerConfig::port();

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", host, port);
    info!("📍 Health check: http://{}:{}/health", host, port);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind((host.as_str(), port))?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// # 캐시 적중/미스까지 보기
/// RUST_LOG=info,user_auth_service::caching=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
