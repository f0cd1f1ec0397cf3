//! 사용자 생성/수정 요청 DTO
//!
//! 사용자 생성(`POST /api/users`)과 수정(`PUT /api/users/{id}`)은 같은 본문을 사용합니다.
//! 구조적 제약(필수 여부, 길이, 이메일 형식)은 핸들러에서 `validate()`로 검사하고,
//! 서비스는 검증을 통과한 입력만 받습니다.
//!
//! ## 요청 예시
//!
//! ```json
//! {
//!   "firstName": "John",
//!   "lastName": "Doe",
//!   "email": "john.doe@example.com"
//! }
//! ```
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `firstName` | 필수(공백 불가), 최대 50자 |
//! | `lastName` | 필수(공백 불가), 최대 50자 |
//! | `email` | 필수(공백 불가), 이메일 형식, 최대 100자 |
//!
//! 누락된 필드는 빈 문자열로 역직렬화되어 "필수" 규칙에서 걸러집니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

/// 사용자 생성 및 수정 요청
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(
        custom(function = "validate_first_name_required"),
        length(max = 50, message = "이름은 50자를 넘을 수 없습니다")
    )]
    pub first_name: String,

    #[serde(default)]
    #[validate(
        custom(function = "validate_last_name_required"),
        length(max = 50, message = "성은 50자를 넘을 수 없습니다")
    )]
    pub last_name: String,

    #[serde(default)]
    #[validate(
        custom(function = "validate_email_address"),
        length(max = 100, message = "이메일은 100자를 넘을 수 없습니다")
    )]
    pub email: String,
}

impl CreateUserRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

/// 이메일 존재 여부 확인 쿼리 (`GET /api/users/email-exists?email=...`)
///
/// 빈 값 검사는 핸들러에서 수행합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailExistsQuery {
    pub email: Option<String>,
}

fn required(value: &str, code: &'static str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(code).with_message(message.into()));
    }
    Ok(())
}

fn validate_first_name_required(value: &str) -> Result<(), ValidationError> {
    required(value, "first_name_required", "이름은 필수입니다")
}

fn validate_last_name_required(value: &str) -> Result<(), ValidationError> {
    required(value, "last_name_required", "성은 필수입니다")
}

/// 앞뒤 공백은 서비스에서 정규화되므로 형식 검사는 trim한 값으로 수행합니다.
fn validate_email_address(value: &str) -> Result<(), ValidationError> {
    required(value, "email_required", "이메일은 필수입니다")?;

    if !value.trim().validate_email() {
        return Err(ValidationError::new("email")
            .with_message("유효한 이메일 주소를 입력해주세요".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_has_error(request: &CreateUserRequest, field: &str) -> bool {
        match request.validate() {
            Ok(()) => false,
            Err(errors) => errors.field_errors().contains_key(field),
        }
    }

    #[test]
    fn test_valid_request() {
        let request = CreateUserRequest::new("John", "Doe", "john.doe@example.com");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let request = CreateUserRequest::new("   ", "", "\t");

        assert!(field_has_error(&request, "first_name"));
        assert!(field_has_error(&request, "last_name"));
        assert!(field_has_error(&request, "email"));
    }

    #[test]
    fn test_length_limits() {
        let ok = CreateUserRequest::new("a".repeat(50), "b".repeat(50), "c@example.com");
        assert!(ok.validate().is_ok());

        let too_long = CreateUserRequest::new("a".repeat(51), "b".repeat(51), "c@example.com");
        assert!(field_has_error(&too_long, "first_name"));
        assert!(field_has_error(&too_long, "last_name"));

        let long_email = format!("{}@example.com", "x".repeat(95));
        let request = CreateUserRequest::new("John", "Doe", long_email);
        assert!(field_has_error(&request, "email"));
    }

    #[test]
    fn test_email_with_surrounding_whitespace_is_accepted() {
        let request = CreateUserRequest::new("  John ", "Doe", "JOHN@EX.COM ");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_syntax() {
        let request = CreateUserRequest::new("John", "Doe", "not-an-email");
        assert!(field_has_error(&request, "email"));
    }

    #[test]
    fn test_deserialize_camel_case_with_missing_fields() {
        let request: CreateUserRequest =
            serde_json::from_str(r#"{"firstName":"John","email":"john@ex.com"}"#).unwrap();

        assert_eq!(request.first_name, "John");
        assert_eq!(request.last_name, "");
        assert!(field_has_error(&request, "last_name"));
    }
}
