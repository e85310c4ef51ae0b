//! # Controllers Module
//!
//! 프레임워크에 의존하지 않는 프레젠테이션 계층 컨트롤러들입니다.
//! 각 컨트롤러는 [`crate::protocols::Controller`]를 구현하며,
//! 협력 객체는 생성자를 통해 trait 객체로 주입받습니다.
//!
//! ```text
//! handlers (actix) ──▶ Controller<T, R>::handle ──▶ HttpResponse<R>
//!                              │
//!                              ▼
//!                       EmailValidator (주입)
//! ```

pub mod signup;

pub use signup::SignUpController;
