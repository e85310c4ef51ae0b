//! # 문자열 유틸리티
//!
//! 요청 필드의 존재 여부 판단과 관련된 공통 유틸리티 함수들입니다.

use crate::core::errors::{AppError, AppResult};

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("Hello"), true);
/// assert_eq!(is_valid_string("   "), false);
/// assert_eq!(is_valid_string(""), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 선택적 필드 값이 채워져 있는지 확인
///
/// `None`, 빈 문자열, 공백만 있는 문자열은 모두 누락으로 취급합니다.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(is_valid_string)
}

/// 필수 필드 검증
///
/// 값이 채워져 있으면 원본 값을 그대로(공백 제거 없이) 돌려주고,
/// 그렇지 않으면 `AppError::MissingParam`을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 값
/// * `field_name` - 필드명 (에러에 담겨 클라이언트에 전달됨)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::require_field;
///
/// assert_eq!(require_field(Some("john"), "name").unwrap(), "john");
/// assert!(require_field(Some("  "), "name").is_err());
/// assert!(require_field(None, "name").is_err());
/// ```
pub fn require_field<'a>(value: Option<&'a str>, field_name: &str) -> AppResult<&'a str> {
    match value {
        Some(v) if is_present(value) => Ok(v),
        _ => Err(AppError::MissingParam(field_name.to_string())),
    }
}
