//! # 사용자 관리 서비스 구현
//!
//! 사용자 레코드의 조회, 생성, 수정, 삭제를 담당하는 비즈니스 로직입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    UserService                       │
//! │                                                      │
//! │  • 입력 정규화 (이름 trim, 이메일 trim + 소문자)     │
//! │  • 이메일 중복 검사 (대소문자 무시)                  │
//! │  • 엔티티 → DTO 변환                                 │
//! └──────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌──────────────────────────────────────────────────────┐
//! │            Arc<dyn UserRepository>                   │
//! │  InMemoryUserRepository | MongoUserRepository        │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 전달
//!
//! 서비스는 "없음"과 "중복"을 삼키지 않고 `AppError::NotFound`,
//! `AppError::EmailConflict`로 명시적으로 반환합니다. 저장소 장애는 재시도하지 않습니다.
//!
//! ## 알려진 경쟁 조건
//!
//! 중복 검사(`find_by_email`)와 저장(`create`/`update`)은 하나의 원자적 연산이 아닙니다.
//! 같은 이메일로 동시에 요청이 들어오면 둘 다 검사를 통과할 수 있으며,
//! MongoDB 저장소에서는 유니크 인덱스가 두 번째 쓰기를 `EmailConflict`로 거부합니다.

use std::sync::Arc;

use log::debug;

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{request::CreateUserRequest, response::UserResponse},
        entities::users::user::User,
    },
    repositories::users::user_repo::UserRepository,
    utils::string_utils::{normalize_email, trim_string},
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 상태를 갖지 않으며, 저장소는 생성 시점에 주입됩니다.
///
/// ```rust,ignore
/// let repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
/// let service = UserService::new(repository);
///
/// let created = service.create_user(CreateUserRequest::new("  John ", "Doe", "JOHN@EX.COM ")).await?;
/// assert_eq!(created.email, "john@ex.com");
/// assert_eq!(created.full_name, "John Doe");
/// ```
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 주입된 저장소 구현 이름 (`memory` / `mongodb`)
    pub fn repository_name(&self) -> &str {
        self.user_repo.name()
    }

    /// 전체 사용자 목록
    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.user_repo.find_all().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// ID로 사용자 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 없음
    pub async fn get_user(&self, id: i64) -> AppResult<UserResponse> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(UserResponse::from(user))
    }

    /// 새 사용자 생성
    ///
    /// 구조적 검증은 호출 전에 끝났다고 가정합니다.
    /// 이름은 trim, 이메일은 trim + 소문자로 정규화한 뒤 중복을 검사합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::EmailConflict` - 대소문자 무시하고 같은 이메일이 이미 존재
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let email = normalize_email(&request.email);

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::EmailConflict(email));
        }

        let user = User::new(
            trim_string(&request.first_name),
            trim_string(&request.last_name),
            email,
        );

        let created = self.user_repo.create(user).await?;
        debug!("사용자 생성 완료: id={}", created.id);

        Ok(UserResponse::from(created))
    }

    /// 기존 사용자 수정
    ///
    /// 이름, 성, 이메일을 덮어쓰며 활성 여부는 그대로 유지합니다.
    /// 새 이메일이 현재 이메일과 (대소문자 무시하고) 같으면 중복 검사를 하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 없음 (아무것도 생성되지 않음)
    /// * `AppError::EmailConflict` - 다른 사용자가 새 이메일을 사용 중
    pub async fn update_user(&self, id: i64, request: CreateUserRequest) -> AppResult<UserResponse> {
        let mut user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let email = normalize_email(&request.email);

        if !user.has_email(&email) && self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::EmailConflict(email));
        }

        user.first_name = trim_string(&request.first_name);
        user.last_name = trim_string(&request.last_name);
        user.email = email;

        let updated = self.user_repo.update(user).await?;
        debug!("사용자 수정 완료: id={}", updated.id);

        Ok(UserResponse::from(updated))
    }

    /// 사용자 삭제
    ///
    /// 삭제되었으면 `true`, 대상이 없었으면 `false`를 반환합니다.
    pub async fn delete_user(&self, id: i64) -> AppResult<bool> {
        self.user_repo.delete(id).await
    }

    /// 이메일 사용 여부 (대소문자 무시, 정확히 일치)
    pub async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let email = normalize_email(email);

        Ok(self.user_repo.find_by_email(&email).await?.is_some())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("ID {}인 사용자를 찾을 수 없습니다", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::repositories::users::memory_user_repo::InMemoryUserRepository;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new().with_latency(Duration::ZERO)))
    }

    fn request(first: &str, last: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest::new(first, last, email)
    }

    #[actix_web::test]
    async fn test_create_then_get_returns_same_record() {
        let service = service();

        let created = service
            .create_user(request("Ada", "Lovelace", "ada@example.com"))
            .await
            .unwrap();
        let fetched = service.get_user(created.id).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created, fetched);
        assert!(fetched.is_active);
    }

    #[actix_web::test]
    async fn test_create_normalizes_input() {
        let service = service();

        let created = service
            .create_user(request("  John ", "Doe", "JOHN@EX.COM "))
            .await
            .unwrap();

        assert_eq!(created.email, "john@ex.com");
        assert_eq!(created.first_name, "John");
        assert_eq!(created.full_name, "John Doe");
    }

    #[actix_web::test]
    async fn test_create_with_email_differing_only_by_case_conflicts() {
        let service = service();
        service.create_user(request("A", "One", "A@x.com")).await.unwrap();

        let result = service.create_user(request("A", "Two", "a@x.com")).await;

        match result {
            Err(AppError::EmailConflict(email)) => assert_eq!(email, "a@x.com"),
            other => panic!("expected email conflict, got {:?}", other),
        }
        assert_eq!(service.list_users().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_get_missing_user_is_not_found() {
        let result = service().get_user(42).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_list_on_empty_store() {
        assert!(service().list_users().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_update_changes_fields_and_keeps_active_flag() {
        let service = service();
        let created = service.create_user(request("John", "Doe", "john@ex.com")).await.unwrap();

        let updated = service
            .update_user(created.id, request(" Johnny ", "Doe", "Johnny@Ex.com"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.full_name, "Johnny Doe");
        assert_eq!(updated.email, "johnny@ex.com");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.is_active);
    }

    #[actix_web::test]
    async fn test_update_preserves_inactive_flag() {
        let repository = Arc::new(InMemoryUserRepository::with_sample_data().with_latency(Duration::ZERO));
        let service = UserService::new(repository);

        let updated = service
            .update_user(3, request("Robert", "Johnson", "bob.johnson@example.com"))
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Robert");
        assert!(!updated.is_active);
    }

    #[actix_web::test]
    async fn test_update_to_own_email_in_other_case_does_not_conflict() {
        let service = service();
        let created = service.create_user(request("John", "Doe", "john@ex.com")).await.unwrap();

        let updated = service
            .update_user(created.id, request("John", "Doe", "JOHN@EX.COM"))
            .await
            .unwrap();

        assert_eq!(updated.email, "john@ex.com");
    }

    #[actix_web::test]
    async fn test_update_to_email_of_another_user_conflicts() {
        let service = service();
        service.create_user(request("John", "Doe", "john@ex.com")).await.unwrap();
        let jane = service.create_user(request("Jane", "Roe", "jane@ex.com")).await.unwrap();

        let result = service
            .update_user(jane.id, request("Jane", "Roe", "John@Ex.com"))
            .await;

        assert!(matches!(result, Err(AppError::EmailConflict(ref email)) if email == "john@ex.com"));
        assert_eq!(service.get_user(jane.id).await.unwrap().email, "jane@ex.com");
    }

    #[actix_web::test]
    async fn test_update_missing_user_creates_nothing() {
        let service = service();

        let result = service
            .update_user(999, request("Ghost", "User", "ghost@ex.com"))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(service.list_users().await.unwrap().is_empty());
        assert!(!service.email_exists("ghost@ex.com").await.unwrap());
    }

    #[actix_web::test]
    async fn test_delete_user() {
        let service = service();
        let created = service.create_user(request("John", "Doe", "john@ex.com")).await.unwrap();

        assert!(!service.delete_user(999).await.unwrap());
        assert!(service.delete_user(created.id).await.unwrap());
        assert!(matches!(service.get_user(created.id).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_deleted_ids_are_not_reassigned() {
        let service = service();
        let first = service.create_user(request("John", "Doe", "john@ex.com")).await.unwrap();
        service.delete_user(first.id).await.unwrap();

        let second = service.create_user(request("John", "Doe", "john@ex.com")).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[actix_web::test]
    async fn test_email_exists_is_case_insensitive_and_exact() {
        let service = service();
        service.create_user(request("John", "Doe", "john@ex.com")).await.unwrap();

        assert!(service.email_exists("JOHN@ex.com").await.unwrap());
        assert!(service.email_exists("  john@ex.com ").await.unwrap());
        assert!(!service.email_exists("john@ex.co").await.unwrap());
        assert!(!service.email_exists("ohn@ex.com").await.unwrap());
    }

    #[actix_web::test]
    async fn test_email_exists_follows_email_change() {
        let service = service();
        let created = service.create_user(request("John", "Doe", "john@ex.com")).await.unwrap();

        service
            .update_user(created.id, request("John", "Doe", "johnny@ex.com"))
            .await
            .unwrap();

        assert!(!service.email_exists("john@ex.com").await.unwrap());
        assert!(service.email_exists("johnny@ex.com").await.unwrap());

        // 이전 이메일은 다시 사용할 수 있어야 함
        let other = service.create_user(request("Jim", "Doe", "john@ex.com")).await.unwrap();
        assert_ne!(other.id, created.id);
    }

    #[actix_web::test]
    async fn test_email_exists_is_false_after_delete() {
        let service = service();
        let created = service.create_user(request("John", "Doe", "john@ex.com")).await.unwrap();
        assert!(service.email_exists("john@ex.com").await.unwrap());

        assert!(service.delete_user(created.id).await.unwrap());

        assert!(!service.email_exists("john@ex.com").await.unwrap());
    }

    struct FailingRepository;

    #[async_trait]
    impl UserRepository for FailingRepository {
        fn name(&self) -> &str {
            "failing"
        }

        async fn find_all(&self) -> AppResult<Vec<User>> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }

        async fn find_by_id(&self, _id: i64) -> AppResult<Option<User>> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }

        async fn find_by_email(&self, _email: &str) -> AppResult<Option<User>> {
            Ok(None)
        }

        async fn create(&self, user: User) -> AppResult<User> {
            Err(AppError::EmailConflict(user.email))
        }

        async fn update(&self, _user: User) -> AppResult<User> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }

        async fn delete(&self, _id: i64) -> AppResult<bool> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_storage_errors_are_propagated() {
        let service = UserService::new(Arc::new(FailingRepository));

        assert_eq!(service.repository_name(), "failing");
        assert!(matches!(service.list_users().await, Err(AppError::DatabaseError(_))));
        assert!(matches!(service.get_user(1).await, Err(AppError::DatabaseError(_))));
        assert!(matches!(service.delete_user(1).await, Err(AppError::DatabaseError(_))));
    }

    #[actix_web::test]
    async fn test_conflict_raised_by_store_is_not_swallowed() {
        let service = UserService::new(Arc::new(FailingRepository));

        let result = service.create_user(request("John", "Doe", "john@ex.com")).await;

        assert!(matches!(result, Err(AppError::EmailConflict(ref email)) if email == "john@ex.com"));
    }
}
