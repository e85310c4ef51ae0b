//! # 이메일 검증 어댑터
//!
//! [`EmailValidator`] 프로토콜의 운영 환경 구현입니다.
//! 구문 검증은 `validator` 크레이트의 `ValidateEmail`에 위임합니다.
//! (HTML5 이메일 규칙 기반, 로컬 파트 64자 / 도메인 255자 제한, IP 리터럴 도메인 허용)

use log::debug;
use validator::ValidateEmail;

use crate::protocols::EmailValidator;

/// `validator` 크레이트 기반 이메일 검증기
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> bool {
        let valid = email.validate_email();
        if !valid {
            debug!("이메일 형식 검증 실패");
        }
        valid
    }
}
