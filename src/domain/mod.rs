//! # Domain Layer Module
//!
//! 회원가입 흐름에서 주고받는 데이터 구조를 담는 도메인 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! └── DTOs         - 요청/응답 데이터 전송 객체
//!      │
//!      ▼
//! Presentation Layer (Controllers, Handlers)
//! ```

pub mod dto;
