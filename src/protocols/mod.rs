//! # Presentation Protocols Module
//!
//! 프레젠테이션 계층의 의존성 주입 지점(seam)을 정의합니다.
//!
//! ## 구성
//!
//! - [`controller`] - `Controller<T, R>`: 요청 → 응답 변환 인터페이스
//! - [`email_validator`] - `EmailValidator`: 컨트롤러에 주입되는 이메일 검증기
//! - [`http`] - 프레임워크 독립적인 `HttpRequest` / `HttpResponse` 레코드
//!
//! ## 의존 방향
//!
//! ```text
//! handlers ──▶ Controller<T, R> ◀── SignUpController ──▶ EmailValidator ◀── EmailValidatorAdapter
//! ```

pub mod controller;
pub mod email_validator;
pub mod http;

pub use controller::Controller;
pub use email_validator::EmailValidator;
pub use http::{HttpRequest, HttpResponse, ResponseBody};
