//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티인 [`User`](user::User)를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new("John".to_string(), "Doe".to_string(), "john@ex.com".to_string());
//! let created = repository.create(user).await?;
//! ```

pub mod user;

pub use user::User;
