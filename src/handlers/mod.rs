//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 actix 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 얇은 어댑터로, 검증 로직은 모두 컨트롤러에 있습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - actix 타입 ↔ HttpRequest/HttpResponse
//! ├─────────────────────────────────────────────┤
//!   Controllers - 필드 검증 결정 절차
//! ├─────────────────────────────────────────────┤
//!   Protocols - EmailValidator 등 주입 인터페이스
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 컨트롤러의 400 응답은 핸들러가 그대로 변환하고,
//! JSON 역직렬화 실패는 `JsonConfig` 에러 핸들러가 `AppError::BadRequest`로 변환합니다.

pub mod signup;

pub use signup::SignUpControllerData;
