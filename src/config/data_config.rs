//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 저장소 선택 관련 설정을 관리합니다.

use std::env;
use std::time::Duration;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Development`를 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값은 `Production`으로 취급합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n| n > 0)
            .unwrap_or(4)
    }
}

/// 사용자 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// 프로세스 메모리 (목 저장소)
    Memory,
    /// MongoDB 컬렉션
    MongoDb,
}

impl StorageBackend {
    /// 문자열에서 저장소 종류를 파싱합니다.
    ///
    /// # Returns
    ///
    /// 알 수 없는 값이면 `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mock" | "in-memory" => Some(StorageBackend::Memory),
            "mongodb" | "mongo" | "db" => Some(StorageBackend::MongoDb),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::MongoDb => "mongodb",
        }
    }
}

/// 저장소 선택 및 동작 설정
///
/// # Environment Variables
///
/// - `STORAGE_BACKEND`: `memory`(기본값) 또는 `mongodb`
/// - `MOCK_LATENCY_MS`: 메모리 저장소의 호출당 지연 (기본값: 10, 0이면 지연 없음)
/// - `SEED_SAMPLE_DATA`: 시작 시 샘플 데이터 적재 여부 (기본값: true)
/// - `USERS_COLLECTION`: MongoDB 컬렉션 이름 (기본값: "users")
pub struct StorageConfig;

impl StorageConfig {
    pub fn backend() -> StorageBackend {
        match env::var("STORAGE_BACKEND") {
            Ok(value) => StorageBackend::parse(&value).unwrap_or_else(|| {
                log::warn!("알 수 없는 STORAGE_BACKEND 값 '{}', memory 사용", value);
                StorageBackend::Memory
            }),
            Err(_) => StorageBackend::Memory,
        }
    }

    pub fn mock_latency() -> Duration {
        let millis = env::var("MOCK_LATENCY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(10);

        Duration::from_millis(millis)
    }

    pub fn seed_sample_data() -> bool {
        env::var("SEED_SAMPLE_DATA")
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or(true)
    }

    pub fn users_collection() -> String {
        env::var("USERS_COLLECTION").unwrap_or_else(|_| "users".to_string())
    }
}

/// `true/false`, `1/0`, `yes/no`, `on/off` 형태의 불리언 값을 파싱합니다.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
