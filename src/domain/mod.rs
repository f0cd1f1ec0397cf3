//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities   - 저장소가 소유하는 사용자 레코드
//! └── DTOs       - API 경계의 요청/응답 객체
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! 엔티티는 저장소 구현과 무관한 순수 데이터 구조이며, 응답 DTO는 엔티티에서
//! 파생된 값(`full_name`)을 포함하고 내부 필드(`updated_at`)는 노출하지 않습니다.

pub mod entities;
pub mod dto;
