//! 공통 유틸리티 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티를 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 필수 필드 존재 여부 판단
//! - [`email_validator_adapter`] - `validator` 크레이트 기반 `EmailValidator` 구현
//! - [`display_terminal`] - 부트스트랩 터미널 출력 포맷팅
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::require_field;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let name = require_field(request.name.as_deref(), "name")?;
//! print_boxed_title("Signup Service");
//! ```

pub mod string_utils;
pub mod email_validator_adapter;
pub mod display_terminal;
