//! # Application Error Handling System
//!
//! 사용자 디렉터리 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! 모든 계층(리포지토리, 서비스, 핸들러)은 `AppResult<T>`를 반환하며,
//! 예외를 던지는 대신 실패 경로를 타입으로 드러냅니다.
//!
//! ## 에러 분류
//!
//! | 변형 | HTTP 상태 | 의미 |
//! |------|-----------|------|
//! | `ValidationError` | 400 | 잘못된 입력 (필드 누락, 길이 초과, 이메일 형식, 0 이하 ID) |
//! | `NotFound` | 404 | 참조한 ID의 레코드가 없음 |
//! | `EmailConflict` | 409 | 다른 사용자가 이미 사용 중인 이메일 |
//! | `DatabaseError` | 500 | 저장소 장애 |
//! | `InternalError` | 500 | 예상하지 못한 시스템 오류 |
//!
//! 5xx 응답은 내부 정보를 노출하지 않습니다. 상세 내용은 서버 로그에만 남깁니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
//!     let email = normalize_email(&request.email);
//!
//!     if self.repository.find_by_email(&email).await?.is_some() {
//!         return Err(AppError::EmailConflict(email));
//!     }
//!     // ...
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;
use validator::ValidationErrors;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?`로 전파하면 그대로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연결 실패, 쿼리 실패 등. 500으로 응답됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// 서비스가 호출되기 전에 경계 계층에서 발생합니다. 400으로 응답됩니다.
    ///
    /// # 발생 시나리오
    /// - 필수 필드 누락 또는 공백
    /// - 이름 50자, 이메일 100자 초과
    /// - 이메일 형식 오류
    /// - 0 이하의 사용자 ID
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음
    ///
    /// 내부적으로는 예외 상황이 아니라 명시적인 "없음" 신호입니다.
    /// 경계 계층에서 404로 변환됩니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 이메일 중복 충돌
    ///
    /// 다른 사용자가 이미 같은 이메일(대소문자 무시)을 사용 중일 때 발생합니다.
    /// 문제의 이메일 주소를 그대로 담고 있으며 409로 응답됩니다.
    ///
    /// ```rust,ignore
    /// if self.repository.find_by_email(&email).await?.is_some() {
    ///     return Err(AppError::EmailConflict(email));
    /// }
    /// ```
    #[error("Conflict error: a user with email '{0}' already exists")]
    EmailConflict(String),

    /// 내부 서버 에러
    ///
    /// 락 오염, 변환 실패 등 예상하지 못한 오류. 500으로 응답됩니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 보낼 메시지
    ///
    /// 4xx는 원인을 그대로 전달하고, 5xx는 고정된 메시지로 대체합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "요청을 처리하는 중 오류가 발생했습니다".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::EmailConflict(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 다음 형식을 따릅니다:
    ///
    /// ```json
    /// { "error": "Human readable error message" }
    /// ```
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            error!("요청 처리 실패: {}", self);
        }

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.public_message()
        }))
    }
}

/// `validator` 검증 결과를 필드 단위 메시지로 변환합니다.
///
/// 메시지는 필드 이름 순으로 정렬되어 `field: message` 형태로 `; `로 연결됩니다.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect();
        messages.sort();

        AppError::ValidationError(messages.join("; "))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let millis = raw.parse::<i64>().context("타임스탬프 파싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
