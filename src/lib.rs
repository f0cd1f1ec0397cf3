//! 사용자 디렉터리 서비스 백엔드
//!
//! 사용자 레코드(이름, 성, 이메일, 활성 여부)를 관리하는 REST API입니다.
//! 저장소는 시작 시점에 메모리(개발/테스트)와 MongoDB(운영) 중에서 선택됩니다.
//!
//! # Features
//!
//! - **사용자 관리**: 목록, 조회, 생성, 수정, 삭제
//! - **이메일 중복 방지**: 대소문자를 무시한 유일성 검사
//! - **교체 가능한 저장소**: `Arc<dyn UserRepository>` 생성자 주입
//! - **MongoDB**: 정수 ID 시퀀스와 유니크 이메일 인덱스
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 검증, 상태 코드 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   UserService   │ ← 정규화, 중복 검사
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 메모리 / MongoDB
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_directory_service::repositories::users::InMemoryUserRepository;
//! use user_directory_service::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserRepository::with_sample_data()));
//! let users = service.list_users().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
