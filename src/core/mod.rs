//! # Core Module
//!
//! 서비스 전역에서 공유하는 핵심 타입을 모아 둔 모듈입니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드 자동 매핑
//! - **검증 연동**: `validator::ValidationErrors` → `AppError::ValidationError`
//!
//! ## 의존성 구성
//!
//! 리포지토리 구현체는 시작 시점에 설정으로 선택되어 `UserService::new`에 직접 전달됩니다.
//! 별도의 DI 컨테이너 없이 `web::Data`로 핸들러와 공유합니다.
//!
//! ```rust,ignore
//! let repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let user_service = web::Data::new(UserService::new(repository));
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(user_service.clone())
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod errors;

pub use errors::*;
