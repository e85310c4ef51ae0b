//! # 회원가입 컨트롤러
//!
//! 회원가입 요청 본문을 검증하고 첫 번째 실패 조건에 대해 400 응답을 돌려줍니다.
//!
//! ## 검증 순서 (첫 실패에서 즉시 종료)
//!
//! 1. 필수 필드 존재 여부: `name` → `email` → `password` → `passwordConfirmation`
//!    - 누락/빈 값이면 `400 MissingParam(field)`
//! 2. 주입된 [`EmailValidator`]로 `email` 형식 검증 (요청당 최대 1회 호출)
//!    - 실패하면 `400 InvalidParam("email")`
//! 3. 모두 통과하면 `200` 과 [`SignUpResponse`]
//!
//! 비밀번호 값은 존재 여부만 확인합니다. 계정 생성, 비밀번호 해싱은 이 컨트롤러의 책임이 아닙니다.

use std::sync::Arc;

use log::{debug, info};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::{SignUpField, SignUpRequest, SignUpResponse};
use crate::protocols::{Controller, EmailValidator, HttpRequest, HttpResponse};
use crate::utils::string_utils::require_field;

/// 필수 필드 검증을 통과한 요청 값 중 응답에 쓰이는 필드
struct RequiredFields<'a> {
    name: &'a str,
    email: &'a str,
}

/// 회원가입 요청 검증 컨트롤러
///
/// 이메일 검증기는 생성 시점에 주입되며, 컨트롤러 자체는 상태를 갖지 않아
/// actix 워커 간에 `web::Data`로 공유할 수 있습니다.
///
/// # 예제
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use crate::controllers::SignUpController;
/// use crate::utils::email_validator_adapter::EmailValidatorAdapter;
///
/// let controller = SignUpController::new(Arc::new(EmailValidatorAdapter::new()));
/// let response = controller.handle(&HttpRequest::new(request));
/// ```
#[derive(Clone)]
pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>) -> Self {
        Self { email_validator }
    }

    fn require_all(request: &SignUpRequest) -> AppResult<RequiredFields<'_>> {
        let mut values = [""; 4];
        for (slot, field) in values.iter_mut().zip(SignUpField::ALL) {
            *slot = require_field(request.value_of(field), field.as_str())?;
        }
        let [name, email, _, _] = values;

        Ok(RequiredFields { name, email })
    }

    fn validate(&self, request: &SignUpRequest) -> AppResult<SignUpResponse> {
        let fields = Self::require_all(request)?;

        if !self.email_validator.is_valid(fields.email) {
            return Err(AppError::InvalidParam(SignUpField::Email.as_str().to_string()));
        }

        Ok(SignUpResponse::accepted(fields.name, fields.email))
    }
}

impl Controller<SignUpRequest, SignUpResponse> for SignUpController {
    fn handle(&self, request: &HttpRequest<SignUpRequest>) -> HttpResponse<SignUpResponse> {
        match self.validate(&request.body) {
            Ok(accepted) => {
                info!("✅ 회원가입 요청 검증 통과");
                HttpResponse::ok(accepted)
            }
            Err(error) => {
                debug!("회원가입 요청 거부: {}", error);
                HttpResponse::bad_request(error)
            }
        }
    }
}
