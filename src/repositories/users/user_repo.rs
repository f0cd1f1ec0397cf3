//! # 사용자 리포지토리 계약
//!
//! 사용자 레코드 저장소가 제공해야 하는 연산 집합입니다.
//! 서비스는 이 trait에만 의존하므로 구현체(메모리, MongoDB)를 바꿔도 서비스 코드는 그대로입니다.
//!
//! ## 구현체
//!
//! | 구현체 | ID 할당 | 조회 | 정렬 |
//! |--------|---------|------|------|
//! | [`InMemoryUserRepository`](super::memory_user_repo::InMemoryUserRepository) | 단조 증가 카운터 | 선형 탐색 | 삽입 순서 |
//! | [`MongoUserRepository`](super::mongo_user_repo::MongoUserRepository) | `counters` 컬렉션 `$inc` | 인덱스 쿼리 | 성, 이름 순 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//!
//! let created = repository.create(User::new(first, last, email)).await?;
//! let found = repository.find_by_email("JOHN@ex.com").await?; // 대소문자 무시
//! let deleted = repository.delete(created.id).await?;          // true
//! let again = repository.delete(created.id).await?;            // false, 에러 아님
//! ```

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::user::User;

/// 사용자 데이터 액세스 계약
///
/// 모든 메서드는 `AppResult<T>`를 반환합니다. "없음"은 에러가 아니라
/// `Ok(None)` / `Ok(false)`로 표현하며, 유일한 예외는 존재하지 않는 ID에 대한
/// `update`로 `AppError::NotFound`를 반환합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 저장소 구현 이름 (로그 및 health 응답용)
    fn name(&self) -> &str;

    /// 전체 사용자 조회
    ///
    /// 순서는 구현체마다 다르며, 구현체 문서에 명시된 경우가 아니면 의존하면 안 됩니다.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// ID로 사용자 조회
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// 이메일로 사용자 조회 (대소문자 무시, 정확히 일치)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 새 사용자 저장
    ///
    /// 새 고유 ID를 할당하고 `created_at`과 `updated_at`을 현재 시각으로 설정한 뒤
    /// 저장된 사용자를 반환합니다. 입력의 `id`와 타임스탬프는 무시됩니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 기존 사용자 갱신
    ///
    /// 이름, 성, 이메일, 활성 여부를 덮어쓰고 `updated_at`을 갱신합니다.
    /// `created_at`은 변경되지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - `user.id`에 해당하는 레코드가 없음
    async fn update(&self, user: User) -> AppResult<User>;

    /// 사용자 삭제 (물리적 삭제)
    ///
    /// 삭제가 일어났으면 `true`, 대상이 없으면 `false`를 반환합니다.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}
