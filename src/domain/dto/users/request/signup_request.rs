//! # 회원가입 요청 DTO
//!
//! 회원가입 엔드포인트가 받는 요청 본문 구조를 정의합니다.
//! 모든 필드를 `Option<String>`으로 받아서, 누락 여부 판단을
//! 역직렬화 단계가 아닌 컨트롤러에서 필드 순서대로 수행할 수 있게 합니다.
//!
//! ## 필드 규칙
//!
//! | JSON 키 | Rust 필드 | 필수 |
//! |---------|-----------|------|
//! | `name` | `name` | ✅ |
//! | `email` | `email` | ✅ |
//! | `password` | `password` | ✅ |
//! | `passwordConfirmation` | `password_confirmation` | ✅ |
//!
//! 알 수 없는 키는 무시되고, `null`은 키가 없는 것과 동일하게 취급됩니다.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 회원가입 필수 필드
///
/// 선언 순서가 곧 검증 순서입니다. 두 필드가 동시에 누락된 경우
/// [`SignUpField::ALL`]에서 앞선 필드가 보고됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignUpField {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

impl SignUpField {
    /// 검증 순서대로 나열한 필수 필드 목록
    pub const ALL: [SignUpField; 4] = [
        SignUpField::Name,
        SignUpField::Email,
        SignUpField::Password,
        SignUpField::PasswordConfirmation,
    ];

    /// 요청 본문(JSON)에서 사용하는 필드 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            SignUpField::Name => "name",
            SignUpField::Email => "email",
            SignUpField::Password => "password",
            SignUpField::PasswordConfirmation => "passwordConfirmation",
        }
    }
}

impl fmt::Display for SignUpField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 회원가입 요청 본문
///
/// # JSON 예제
///
/// ```json
/// {
///   "name": "John Doe",
///   "email": "john@example.com",
///   "password": "SecurePass123",
///   "passwordConfirmation": "SecurePass123"
/// }
/// ```
///
/// # 보안
///
/// `Debug` 출력에서 비밀번호 필드는 마스킹됩니다.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
}

impl SignUpRequest {
    /// 네 필드가 모두 채워진 요청을 생성합니다.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
            password_confirmation: Some(password_confirmation.into()),
        }
    }

    /// 지정한 필드의 원본 값을 반환합니다.
    pub fn value_of(&self, field: SignUpField) -> Option<&str> {
        let value = match field {
            SignUpField::Name => &self.name,
            SignUpField::Email => &self.email,
            SignUpField::Password => &self.password,
            SignUpField::PasswordConfirmation => &self.password_confirmation,
        };
        value.as_deref()
    }
}

#[cfg(test)]
impl SignUpRequest {
    /// 지정한 필드를 비운 복사본을 반환합니다.
    pub fn without(mut self, field: SignUpField) -> Self {
        match field {
            SignUpField::Name => self.name = None,
            SignUpField::Email => self.email = None,
            SignUpField::Password => self.password = None,
            SignUpField::PasswordConfirmation => self.password_confirmation = None,
        }
        self
    }
}

impl fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |value: &Option<String>| value.as_ref().map(|_| "********");

        f.debug_struct("SignUpRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &mask(&self.password))
            .field("password_confirmation", &mask(&self.password_confirmation))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_body() {
        let json = r#"{
            "name": "any_name",
            "email": "any_email@email.com",
            "password": "any_password",
            "passwordConfirmation": "any_password"
        }"#;
        let request: SignUpRequest = serde_json::from_str(json).unwrap();

        assert_eq!(
            request,
            SignUpRequest::new("any_name", "any_email@email.com", "any_password", "any_password")
        );
    }

    #[test]
    fn test_missing_and_null_keys_become_none() {
        let json = r#"{"name": null, "password": "any_password", "unknown": 1}"#;
        let request: SignUpRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.name, None);
        assert_eq!(request.email, None);
        assert_eq!(request.password.as_deref(), Some("any_password"));
        assert_eq!(request.password_confirmation, None);
    }

    #[test]
    fn test_snake_case_key_is_not_accepted_as_confirmation() {
        let json = r#"{"password_confirmation": "any_password"}"#;
        let request: SignUpRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.password_confirmation, None);
    }

    #[test]
    fn test_non_string_value_is_rejected() {
        let json = r#"{"name": 42}"#;

        assert!(serde_json::from_str::<SignUpRequest>(json).is_err());
    }

    #[test]
    fn test_value_of_and_without() {
        let request = SignUpRequest::new("n", "e", "p", "c");

        assert_eq!(request.value_of(SignUpField::Name), Some("n"));
        assert_eq!(request.value_of(SignUpField::PasswordConfirmation), Some("c"));

        let request = request.without(SignUpField::Email);
        assert_eq!(request.value_of(SignUpField::Email), None);
        assert_eq!(request.value_of(SignUpField::Password), Some("p"));
    }

    #[test]
    fn test_field_order_and_wire_names() {
        let names: Vec<&str> = SignUpField::ALL.iter().map(SignUpField::as_str).collect();

        assert_eq!(names, ["name", "email", "password", "passwordConfirmation"]);
    }

    #[test]
    fn test_debug_masks_passwords() {
        let request = SignUpRequest::new("any_name", "any_email@email.com", "secret_pw", "secret_pw");
        let output = format!("{:?}", request);

        assert!(output.contains("any_email@email.com"));
        assert!(!output.contains("secret_pw"));
    }
}
