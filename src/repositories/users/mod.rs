//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`] 계약과 두 구현체를 제공합니다.
//! 어떤 구현체를 쓸지는 시작 시점에 `STORAGE_BACKEND` 설정으로 결정됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::with_sample_data());
//! let user = repository.find_by_email("john.doe@example.com").await?;
//! ```

pub mod memory_user_repo;
pub mod mongo_user_repo;
pub mod user_repo;

pub use memory_user_repo::InMemoryUserRepository;
pub use mongo_user_repo::MongoUserRepository;
pub use user_repo::UserRepository;
