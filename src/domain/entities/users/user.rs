//! User Entity Implementation
//!
//! 저장소가 소유하는 사용자 레코드입니다. 서비스는 조회한 엔티티를
//! 한 번의 연산 동안만 유효한 임시 사본으로 다룹니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// - `id`: 저장소가 생성 시 할당하는 양의 정수. 변경되지 않으며 재사용되지 않습니다.
/// - `email`: 항상 정규화된 형태(trim + 소문자)로 저장됩니다.
/// - `updated_at >= created_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 사용자 ID (저장 전에는 0)
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// 사용자 이메일 (대소문자 무시 unique)
    pub email: String,
    /// 생성 시간 (UTC)
    pub created_at: DateTime<Utc>,
    /// 수정 시간 (UTC)
    pub updated_at: DateTime<Utc>,
    /// 계정 활성화 여부
    pub is_active: bool,
}

impl User {
    /// 아직 저장되지 않은 새 사용자를 생성합니다.
    ///
    /// ID와 타임스탬프는 리포지토리의 `create`에서 할당됩니다.
    /// 계정은 활성 상태로 시작합니다.
    pub fn new(first_name: String, last_name: String, email: String) -> Self {
        let now = Utc::now();

        Self {
            id: 0,
            first_name,
            last_name,
            email,
            created_at: now,
            updated_at: now,
            is_active: true,
        }
    }

    /// "이름 성" 형태의 표시 이름
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// 이메일 일치 여부 (대소문자 무시)
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}
