//! 사용자 디렉터리 서비스 메인 애플리케이션
//!
//! 설정에 따라 저장소(메모리 또는 MongoDB)를 선택해 `UserService`를 구성하고,
//! Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use user_directory_service::config::{Environment, ServerConfig, StorageBackend, StorageConfig};
use user_directory_service::core::errors::AppResult;
use user_directory_service::db::Database;
use user_directory_service::repositories::users::{
    InMemoryUserRepository, MongoUserRepository, UserRepository,
};
use user_directory_service::routes::configure_all_routes;
use user_directory_service::services::users::UserService;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 디렉터리 서비스 시작중... ({:?})", Environment::current());

    let repository = initialize_repository().await.map_err(|e| {
        error!("저장소 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ 저장소 준비 완료: {}", repository.name());

    let user_service = web::Data::new(UserService::new(repository));

    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate limit 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/api/users", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate limit 설정이 올바르지 않습니다 (0 값은 허용되지 않음)"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 설정에 따라 사용자 저장소를 생성합니다
///
/// | `STORAGE_BACKEND` | 저장소 | 초기 데이터 (`SEED_SAMPLE_DATA=true`) |
/// |-------------------|--------|----------------------------------------|
/// | `memory` (기본값) | `InMemoryUserRepository` | 샘플 사용자 3명 |
/// | `mongodb` | `MongoUserRepository` | 컬렉션이 비어 있으면 관리자 계정 |
async fn initialize_repository() -> AppResult<Arc<dyn UserRepository>> {
    let seed = StorageConfig::seed_sample_data();
    let backend = StorageConfig::backend();

    info!("저장소 백엔드: {}", backend.as_str());

    match backend {
        StorageBackend::Memory => {
            let repository = if seed {
                InMemoryUserRepository::with_sample_data()
            } else {
                InMemoryUserRepository::new()
            };
            let latency = StorageConfig::mock_latency();

            info!("🧪 메모리 저장소 사용 (샘플 데이터: {}, 지연: {:?})", seed, latency);
            Ok(Arc::new(repository.with_latency(latency)))
        }
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");
            let database = Database::new().await?;

            let repository = MongoUserRepository::new(&database, &StorageConfig::users_collection());
            repository.create_indexes().await?;

            if seed {
                repository.seed_default_admin().await?;
            }

            Ok(Arc::new(repository))
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            dotenv().ok();
            return;
        }
    };

    if let Err(e) = dotenv::from_filename(filename) {
        eprintln!("{} 파일 로드 실패 (profile={}): {}", filename, profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=user_directory_service::repositories=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버(`3000`)와 자체 서버(`8080`)를 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::LOCATION])
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
