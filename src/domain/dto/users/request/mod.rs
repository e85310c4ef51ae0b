//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`, 실패 시 400 `BAD_REQUEST`)
//! 2. **존재 검증**: 필수 필드 누락 여부 (컨트롤러, `MISSING_PARAM`)
//! 3. **형식 검증**: 이메일 형식 (컨트롤러, `INVALID_PARAM`)

pub mod signup_request;

pub use signup_request::{SignUpField, SignUpRequest};
