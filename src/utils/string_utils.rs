//! # 문자열 유틸리티
//!
//! 입력 정규화와 관련된 공통 함수들입니다.

use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 `ValidationError`를 반환하고,
/// 그 외에는 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(validate_required_string("  Hello  ", "name").unwrap(), "Hello");
/// assert!(validate_required_string("   ", "name").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!(
            "{}은(는) 필수입니다",
            field_name
        )));
    }
    Ok(trimmed.to_string())
}

pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

/// 이메일 정규화 (trim + 소문자)
///
/// 저장, 조회, 중복 검사에 사용되는 이메일은 모두 이 형태를 거칩니다.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("Hello", "name").unwrap(), "Hello");
        assert_eq!(validate_required_string("  World  ", "name").unwrap(), "World");

        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("   ", "name").is_err());
        assert!(validate_required_string("\t\n", "name").is_err());
    }

    #[test]
    fn test_trim_string() {
        assert_eq!(trim_string("  John "), "John");
        assert_eq!(trim_string("Doe"), "Doe");
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("JOHN@EX.COM "), "john@ex.com");
        assert_eq!(normalize_email("  Jane.Smith@Example.com"), "jane.smith@example.com");
        assert_eq!(normalize_email("a@x.com"), "a@x.com");
    }
}
