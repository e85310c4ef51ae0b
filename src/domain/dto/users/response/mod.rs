//! # 사용자 관련 응답 DTO 모듈
//!
//! 서버 → 클라이언트 방향의 성공 응답 본문을 정의합니다.
//! 에러 응답 본문은 [`crate::core::errors::AppError`]의 직렬화 형식을 따릅니다.
//!
//! ### 회원가입 수락 응답
//! ```json
//! {
//!   "name": "John Doe",
//!   "email": "john@example.com",
//!   "message": "회원가입 요청이 접수되었습니다"
//! }
//! ```
//!
//! ## 보안 고려사항
//!
//! - **비밀번호 제외**: 응답에 비밀번호나 비밀번호 확인 값을 포함하지 않음

pub mod signup_response;

pub use signup_response::SignUpResponse;
