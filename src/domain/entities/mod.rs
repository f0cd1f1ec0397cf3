//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티를 정의합니다.
//!
//! 엔티티는 저장소 구현(메모리, MongoDB)과 독립적입니다. MongoDB 문서 형태로의 변환은
//! 리포지토리 구현 내부에서 처리됩니다.

pub mod users;
