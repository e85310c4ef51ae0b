//! # User Data Transfer Objects Module
//!
//! 회원가입 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/                    # 클라이언트 → 서버 요청 DTO
//! │   └── signup_request.rs      # 회원가입 요청 + 필수 필드 목록
//! └── response/                   # 서버 → 클라이언트 응답 DTO
//!     └── signup_response.rs     # 회원가입 수락 응답
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::dto::users::{SignUpRequest, SignUpField};
//!
//! let request: SignUpRequest = serde_json::from_str(body)?;
//! for field in SignUpField::ALL {
//!     println!("{} = {:?}", field, request.value_of(field));
//! }
//! ```

pub mod request;
pub mod response;

pub use request::{SignUpField, SignUpRequest};
pub use response::SignUpResponse;
