//! 라우트 설정
//!
//! 헬스 체크와 `/api/users` 스코프를 등록하고,
//! JSON 본문, 경로, 쿼리 추출 실패를 `AppError::ValidationError`(400)로 통일합니다.
//!
//! `email-exists`는 `/{id}`보다 먼저 등록되어야 정수 경로 추출과 충돌하지 않습니다.

use actix_web::{error, get, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;
use crate::services::users::user_service::UserService;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .app_data(query_config());

    cfg.service(health_check);

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::list_users)
            .service(handlers::users::email_exists)
            .service(handlers::users::get_user)
            .service(handlers::users::create_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: error::PathError, _req: &HttpRequest| {
        AppError::ValidationError(format!("잘못된 경로 파라미터입니다: {}", err)).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: error::QueryPayloadError, _req: &HttpRequest| {
        AppError::ValidationError(format!("잘못된 쿼리 파라미터입니다: {}", err)).into()
    })
}

#[get("/health")]
async fn health_check(service: web::Data<UserService>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_directory_service",
        "version": env!("CARGO_PKG_VERSION"),
        "storage": service.repository_name(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
