//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 주고받기 위한 객체들을 정의합니다.
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/    # 클라이언트 → 서버 (validator 검증 포함)
//!     └── response/   # 서버 → 클라이언트
//! ```
//!
//! JSON 필드 이름은 camelCase를 사용합니다 (`firstName`, `isActive`, `fullName` 등).

pub mod users;

pub use users::*;
