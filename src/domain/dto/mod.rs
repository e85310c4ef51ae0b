//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. API 계약 우선
//! - **명시적 인터페이스**: JSON 키 이름은 `camelCase`로 고정
//! - **관대한 입력**: 필수 필드도 `Option`으로 받아 누락 판단을 컨트롤러에 위임
//!
//! ### 2. 보안
//! - **민감 정보 보호**: 비밀번호는 `Debug` 출력과 응답에서 제외

pub mod users;
