//! 사용자 관리 서비스 모듈
//!
//! 사용자 레코드의 CRUD와 이메일 중복 검사를 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(repository);
//! let users = user_service.list_users().await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
