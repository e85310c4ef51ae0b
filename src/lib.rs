//! 회원가입 서비스 백엔드
//!
//! 회원가입 요청 본문을 검증하는 HTTP 서비스입니다.
//! 필수 필드(`name`, `email`, `password`, `passwordConfirmation`)를 정해진 순서로 확인하고,
//! 주입된 이메일 검증기로 이메일 형식을 판정합니다.
//!
//! # Features
//!
//! - **필드 검증**: 첫 번째로 누락된 필드를 `MissingParam`으로 보고
//! - **이메일 검증**: 교체 가능한 [`protocols::EmailValidator`] 주입
//! - **HTTP 어댑터**: actix-web 핸들러, Rate Limiting, CORS
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← actix 요청/응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Controllers   │ ← 검증 결정 절차
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ EmailValidator  │ ← 주입된 협력자
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use signup_service_backend::controllers::SignUpController;
//! use signup_service_backend::protocols::{Controller, HttpRequest};
//! use signup_service_backend::utils::email_validator_adapter::EmailValidatorAdapter;
//!
//! let controller = SignUpController::new(Arc::new(EmailValidatorAdapter::new()));
//! let response = controller.handle(&HttpRequest::new(request));
//! assert_eq!(response.status_code, 400);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod protocols;
pub mod controllers;
pub mod utils;
pub mod routes;
pub mod handlers;
