//! # Application Error Handling System
//!
//! 회원가입 서비스를 위한 통합 에러 처리 시스템입니다.
//! 컨트롤러가 돌려주는 파라미터 에러와 HTTP 어댑터/부트스트랩 단계에서
//! 발생하는 에러를 하나의 열거형으로 표현합니다.
//!
//! ## 에러 분류
//!
//! ### 1. 컨트롤러 에러 (클라이언트가 고칠 수 있는 입력 오류)
//! - `MissingParam`: 필수 필드가 없거나 비어 있음
//! - `InvalidParam`: 필드는 있으나 의미/형식 검증에 실패
//!
//! ### 2. 어댑터/시스템 에러
//! - `BadRequest`: JSON 본문 자체를 해석할 수 없음
//! - `InternalError`: 설정 로드, 소켓 바인딩 등 서버 측 실패
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | `code` |
//! |----------|-------------|--------|
//! | `MissingParam` | 400 Bad Request | `MISSING_PARAM` |
//! | `InvalidParam` | 400 Bad Request | `INVALID_PARAM` |
//! | `BadRequest` | 400 Bad Request | `BAD_REQUEST` |
//! | `InternalError` | 500 Internal Server Error | `INTERNAL_ERROR` |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": "Missing param: name",
//!   "code": "MISSING_PARAM",
//!   "param": "name"
//! }
//! ```

use actix_web::http::StatusCode;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 컨트롤러는 이 값을 응답 본문에 그대로 담아 돌려주고,
/// actix 핸들러는 `ResponseError` 구현을 통해 HTTP 응답으로 변환합니다.
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::AppError;
///
/// let error = AppError::MissingParam("name".to_string());
/// assert_eq!(error.to_string(), "Missing param: name");
/// assert_eq!(error.param(), Some("name"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 필수 필드 누락 에러 (400 Bad Request)
    ///
    /// 필드가 요청 본문에 없거나, `null`이거나, 빈 문자열/공백뿐인 경우입니다.
    #[error("Missing param: {0}")]
    MissingParam(String),

    /// 필드 검증 실패 에러 (400 Bad Request)
    ///
    /// 필드는 존재하지만 형식이나 의미 검증을 통과하지 못한 경우입니다.
    /// 예: 이메일 형식 오류
    #[error("Invalid param: {0}")]
    InvalidParam(String),

    /// 요청 본문 해석 실패 에러 (400 Bad Request)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트가 분기 처리에 사용하는 고정 에러 코드를 반환합니다.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingParam(_) => "MISSING_PARAM",
            AppError::InvalidParam(_) => "INVALID_PARAM",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// 문제가 된 필드 이름을 반환합니다.
    ///
    /// 파라미터 에러가 아닌 경우 `None`입니다.
    pub fn param(&self) -> Option<&str> {
        match self {
            AppError::MissingParam(field) | AppError::InvalidParam(field) => Some(field),
            _ => None,
        }
    }

    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingParam(_) | AppError::InvalidParam(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("AppError", 3)?;
        state.serialize_field("error", &self.to_string())?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("param", &self.param())?;
        state.end()
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 남기되, 응답 형식은 다른 에러와 동일하게 유지합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if self.status().is_server_error() {
            log::error!("❌ {}", self);
        }

        actix_web::HttpResponse::build(self.status()).json(self)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let server = HttpServer::new(app)
///     .bind(&address)
///     .with_context(|| format!("{} 바인딩 실패", address))?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
