//! # Configuration Module
//!
//! 서비스 설정을 환경 변수 기반으로 중앙에서 관리합니다.
//! `.env` 파일은 `main`에서 `PROFILE`에 따라 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, 저장소 선택 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ServerConfig, StorageBackend, StorageConfig};
//!
//! let address = ServerConfig::bind_address();
//!
//! match StorageConfig::backend() {
//!     StorageBackend::Memory => { /* 목 저장소 */ }
//!     StorageBackend::MongoDb => { /* MongoDB 연결 */ }
//! }
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 저장소 설정
//! export STORAGE_BACKEND="mongodb"   # memory | mongodb
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_directory_dev"
//! export SEED_SAMPLE_DATA="true"
//! export MOCK_LATENCY_MS="10"
//! ```

pub mod data_config;

pub use data_config::*;
