//! # 메모리 사용자 리포지토리
//!
//! 개발 및 테스트용 목(mock) 저장소입니다. 프로세스 메모리의 목록과
//! 단조 증가 카운터로 사용자 레코드를 관리합니다.
//!
//! ## 특징
//!
//! - **ID 할당**: 카운터가 1부터 증가하며 삭제 후에도 재사용하지 않음
//! - **조회**: 선형 탐색 (이 규모에서는 충분)
//! - **지연 시뮬레이션**: 호출마다 고정 지연(기본 10ms)으로 I/O를 흉내냄
//! - **정렬**: `find_all`은 삽입 순서를 유지
//!
//! ## 동시성
//!
//! 개별 연산은 `RwLock`으로 원자적으로 수행되지만, 서비스의
//! "이메일 조회 후 생성" 시퀀스 전체를 묶지는 않습니다. 같은 이메일로 동시에
//! 생성 요청이 들어오면 두 요청 모두 중복 검사를 통과할 수 있습니다.
//! 이 경쟁 조건을 막는 것은 MongoDB 구현의 유니크 인덱스뿐입니다.

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use crate::repositories::users::user_repo::UserRepository;

const DEFAULT_LATENCY: Duration = Duration::from_millis(10);

struct MemoryStore {
    users: Vec<User>,
    next_id: i64,
}

/// 메모리 기반 사용자 리포지토리
pub struct InMemoryUserRepository {
    store: RwLock<MemoryStore>,
    latency: Duration,
}

impl InMemoryUserRepository {
    /// 비어 있는 저장소를 생성합니다. ID는 1부터 할당됩니다.
    pub fn new() -> Self {
        Self::from_users(Vec::new())
    }

    /// 샘플 사용자 3명이 들어 있는 저장소를 생성합니다.
    ///
    /// | ID | 이름 | 이메일 | 생성 | 수정 | 활성 |
    /// |----|------|--------|------|------|------|
    /// | 1 | John Doe | john.doe@example.com | 30일 전 | 5일 전 | ✓ |
    /// | 2 | Jane Smith | jane.smith@example.com | 20일 전 | 2일 전 | ✓ |
    /// | 3 | Bob Johnson | bob.johnson@example.com | 10일 전 | 1일 전 | ✗ |
    ///
    /// 다음 ID는 4부터 할당됩니다.
    pub fn with_sample_data() -> Self {
        let now = Utc::now();
        let sample = |id: i64, first: &str, last: &str, created_days: i64, updated_days: i64, is_active: bool| User {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            created_at: now - chrono::Duration::days(created_days),
            updated_at: now - chrono::Duration::days(updated_days),
            is_active,
        };

        Self::from_users(vec![
            sample(1, "John", "Doe", 30, 5, true),
            sample(2, "Jane", "Smith", 20, 2, true),
            sample(3, "Bob", "Johnson", 10, 1, false),
        ])
    }

    fn from_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;

        Self {
            store: RwLock::new(MemoryStore { users, next_id }),
            latency: DEFAULT_LATENCY,
        }
    }

    /// 호출당 지연 시간을 설정합니다. `Duration::ZERO`면 지연하지 않습니다.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            actix_web::rt::time::sleep(self.latency).await;
        }
    }

    fn read_store(&self) -> AppResult<std::sync::RwLockReadGuard<'_, MemoryStore>> {
        self.store
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 락이 오염되었습니다".to_string()))
    }

    fn write_store(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, MemoryStore>> {
        self.store
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 락이 오염되었습니다".to_string()))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    fn name(&self) -> &str {
        "memory"
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.simulate_latency().await;

        Ok(self.read_store()?.users.clone())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.simulate_latency().await;

        let store = self.read_store()?;
        Ok(store.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.simulate_latency().await;

        let email = email.trim();
        let store = self.read_store()?;
        Ok(store.users.iter().find(|u| u.has_email(email)).cloned())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        self.simulate_latency().await;

        let mut store = self.write_store()?;
        let now = Utc::now();

        user.id = store.next_id;
        user.created_at = now;
        user.updated_at = now;

        store.next_id += 1;
        store.users.push(user.clone());

        debug!("메모리 저장소에 사용자 추가: id={}", user.id);
        Ok(user)
    }

    async fn update(&self, user: User) -> AppResult<User> {
        self.simulate_latency().await;

        let mut store = self.write_store()?;
        let existing = store
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| AppError::NotFound(format!("ID {}인 사용자를 찾을 수 없습니다", user.id)))?;

        existing.first_name = user.first_name;
        existing.last_name = user.last_name;
        existing.email = user.email;
        existing.is_active = user.is_active;
        // updated_at은 created_at보다 앞설 수 없음
        existing.updated_at = Utc::now().max(existing.created_at);

        Ok(existing.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        self.simulate_latency().await;

        let mut store = self.write_store()?;
        match store.users.iter().position(|u| u.id == id) {
            Some(index) => {
                store.users.remove(index);
                debug!("메모리 저장소에서 사용자 삭제: id={}", id);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
