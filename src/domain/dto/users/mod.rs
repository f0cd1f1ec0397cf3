//! # User Data Transfer Objects Module
//!
//! | 타입 | 방향 | 용도 |
//! |------|------|------|
//! | `CreateUserRequest` | 요청 | 사용자 생성 및 수정 본문 |
//! | `EmailExistsQuery` | 요청 | 이메일 존재 여부 확인 쿼리 |
//! | `UserResponse` | 응답 | 사용자 정보 |

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
