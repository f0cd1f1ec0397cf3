//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 `Arc<dyn UserRepository>`로 저장소를 주입받으며,
//! 메모리 구현(개발/테스트)과 MongoDB 구현(운영) 중 하나가 선택됩니다.

pub mod users;
