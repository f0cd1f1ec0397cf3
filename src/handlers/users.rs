//! # User Management HTTP Handlers
//!
//! 사용자 CRUD와 이메일 중복 확인 엔드포인트입니다.
//! 모든 핸들러는 `/api/users` 스코프 아래에 등록됩니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/users` | 전체 사용자 목록 | 200 |
//! | `GET` | `/api/users/{id}` | 사용자 조회 | 200, 400, 404 |
//! | `POST` | `/api/users` | 사용자 생성 | 201, 400, 409 |
//! | `PUT` | `/api/users/{id}` | 사용자 수정 | 200, 400, 404, 409 |
//! | `DELETE` | `/api/users/{id}` | 사용자 삭제 | 204, 400, 404 |
//! | `GET` | `/api/users/email-exists?email=` | 이메일 사용 여부 | 200, 400 |
//!
//! 구조적 검증(`validator`)은 여기서 수행하고, 중복 검사 같은 비즈니스 규칙은
//! 서비스가 담당합니다. 에러는 `AppError`의 `ResponseError` 구현이
//! `{"error": "..."}` 형태로 변환합니다.
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/users \
//!   -H "Content-Type: application/json" \
//!   -d '{"firstName": "John", "lastName": "Doe", "email": "john.doe@example.com"}'
//! ```

use actix_web::{delete, get, http::header, post, put, web, HttpResponse, ResponseError};
use log::{info, warn};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{CreateUserRequest, EmailExistsQuery};
use crate::services::users::user_service::UserService;
use crate::utils::string_utils::validate_required_string;

/// 경로의 사용자 ID는 양수여야 합니다.
fn ensure_positive_id(id: i64) -> Result<i64, AppError> {
    if id <= 0 {
        return Err(AppError::ValidationError(format!(
            "사용자 ID는 양수여야 합니다: {}",
            id
        )));
    }
    Ok(id)
}

/// 4xx 결과만 warn으로 남깁니다. 5xx는 에러 응답 생성 시 기록됩니다.
fn warn_client_error(action: &str) -> impl Fn(&AppError) + '_ {
    move |error| {
        if error.status_code().is_client_error() {
            warn!("{} 실패: {}", action, error);
        }
    }
}

/// 사용자 목록 조회
///
/// 사용자가 없으면 빈 배열을 반환합니다.
#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;
    info!("사용자 목록 조회: {}명", users.len());

    Ok(HttpResponse::Ok().json(users))
}

/// 이메일 사용 여부 확인
///
/// `GET /api/users/email-exists?email=john@example.com` → `true` / `false`
///
/// 대소문자를 무시하고 정확히 일치하는지 확인합니다.
/// `email`이 없거나 공백이면 400을 반환합니다.
#[get("/email-exists")]
pub async fn email_exists(
    service: web::Data<UserService>,
    query: web::Query<EmailExistsQuery>,
) -> Result<HttpResponse, AppError> {
    let email = validate_required_string(query.email.as_deref().unwrap_or_default(), "email")?;

    let exists = service.email_exists(&email).await?;

    Ok(HttpResponse::Ok().json(exists))
}

/// 사용자 조회
///
/// ## 실패 사례
///
/// - 400: ID가 정수가 아니거나 0 이하
/// - 404: 해당 ID의 사용자가 없음
#[get("/{id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = ensure_positive_id(path.into_inner())?;

    let user = service
        .get_user(id)
        .await
        .inspect_err(warn_client_error("사용자 조회"))?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 생성
///
/// 성공 시 201과 함께 `Location: /api/users/{id}` 헤더를 반환합니다.
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "id": 4,
///   "firstName": "John",
///   "lastName": "Doe",
///   "email": "john.doe@example.com",
///   "createdAt": "2025-01-01T00:00:00Z",
///   "isActive": true,
///   "fullName": "John Doe"
/// }
/// ```
///
/// ## 실패 사례
///
/// - 400: 필수 필드 누락, 길이 초과, 이메일 형식 오류
/// - 409: 이메일이 이미 사용 중 (대소문자 무시)
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = service
        .create_user(payload.into_inner())
        .await
        .inspect_err(warn_client_error("사용자 생성"))?;

    info!("사용자 생성: id={}, email={}", user.id, user.email);

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/users/{}", user.id)))
        .json(user))
}

/// 사용자 수정
///
/// 이름, 성, 이메일을 교체합니다. 요청 본문은 생성과 같습니다.
#[put("/{id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    path: web::Path<i64>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let id = ensure_positive_id(path.into_inner())?;
    payload.validate()?;

    let user = service
        .update_user(id, payload.into_inner())
        .await
        .inspect_err(warn_client_error("사용자 수정"))?;

    info!("사용자 수정: id={}", user.id);

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제 (물리적 삭제)
///
/// 삭제할 대상이 없으면 404를 반환합니다.
#[delete("/{id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = ensure_positive_id(path.into_inner())?;

    if !service.delete_user(id).await? {
        warn!("사용자 삭제 실패: 존재하지 않는 id={}", id);
        return Err(AppError::NotFound(format!("ID {}인 사용자를 찾을 수 없습니다", id)));
    }

    info!("사용자 삭제: id={}", id);

    Ok(HttpResponse::NoContent().finish())
}
