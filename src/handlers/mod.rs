//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 검증, 상태 코드 매핑      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   UserService - 정규화, 중복 검사               ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   dyn UserRepository - 메모리 / MongoDB         ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 서비스는 `web::Data<UserService>`로 주입받습니다.
//!
//! ```rust,ignore
//! #[get("/{id}")]
//! pub async fn get_user(
//!     service: web::Data<UserService>,
//!     path: web::Path<i64>,
//! ) -> Result<HttpResponse, AppError> {
//!     let user = service.get_user(path.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(user))
//! }
//! ```

pub mod users;
