//! 사용자 응답 DTO
//!
//! 엔티티에서 API 응답으로 변환할 때 `full_name`을 파생하고,
//! `updated_at`처럼 내부에서만 쓰는 필드는 제외합니다.
//!
//! ```json
//! {
//!   "id": 1,
//!   "firstName": "John",
//!   "lastName": "Doe",
//!   "email": "john.doe@example.com",
//!   "createdAt": "2025-01-01T00:00:00Z",
//!   "isActive": true,
//!   "fullName": "John Doe"
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    /// `first_name + " " + last_name`
    pub full_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let full_name = user.full_name();

        let User {
            id,
            first_name,
            last_name,
            email,
            created_at,
            is_active,
            ..
        } = user;

        Self {
            id,
            first_name,
            last_name,
            email,
            created_at,
            is_active,
            full_name,
        }
    }
}
