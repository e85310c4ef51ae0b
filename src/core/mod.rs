//! # Core Framework Module
//!
//! 서비스 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 파라미터 누락/검증 실패와 시스템 에러를 표현하는 열거형
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 자동 응답 변환
//! - **AppResult / ErrorContext**: 외부 에러를 컨텍스트와 함께 `AppError`로 변환
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! fn require(value: Option<&str>, field: &str) -> AppResult<()> {
//!     match value {
//!         Some(v) if !v.trim().is_empty() => Ok(()),
//!         _ => Err(AppError::MissingParam(field.to_string())),
//!     }
//! }
//! ```

pub mod errors;

pub use errors::*;
