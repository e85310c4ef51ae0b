/// 이메일 구문 검증기
///
/// 컨트롤러는 이 trait의 결과를 해석 없이 그대로 신뢰합니다.
///
/// # 예제
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use crate::protocols::EmailValidator;
/// use crate::utils::email_validator_adapter::EmailValidatorAdapter;
///
/// let validator: Arc<dyn EmailValidator> = Arc::new(EmailValidatorAdapter::new());
/// assert!(validator.is_valid("john@example.com"));
/// ```
pub trait EmailValidator: Send + Sync {
    /// 주어진 문자열이 구문상 유효한 이메일 주소인지 확인합니다.
    fn is_valid(&self, email: &str) -> bool;
}
