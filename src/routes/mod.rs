//! API 라우트 설정 모듈
//!
//! 회원가입 API와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Available Routes
//!
//! - `GET /health` - 서비스 상태 확인
//! - `POST /api/v1/signup` - 회원가입 요청 검증
//!
//! 컨트롤러는 이 모듈이 아니라 애플리케이션 조립 시점에 `app_data`로 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//!
//! let controller: Arc<dyn Controller<SignUpRequest, SignUpResponse>> =
//!     Arc::new(SignUpController::new(Arc::new(EmailValidatorAdapter::new())));
//!
//! let app = App::new()
//!     .app_data(web::Data::from(controller))
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_signup_routes(cfg);
}

/// 회원가입 라우트를 설정합니다
///
/// JSON 본문 해석 실패(문법 오류, 잘못된 Content-Type, 문자열이 아닌 필드 값)는
/// `AppError::BadRequest`로 변환되어 400 응답이 됩니다.
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/signup \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","password":"pw","passwordConfirmation":"pw"}'
/// # → 400 {"error":"Missing param: name","code":"MISSING_PARAM","param":"name"}
/// ```
fn configure_signup_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(json_config())
            .service(handlers::signup::signup),
    );
}

/// 회원가입 요청 본문용 JSON 추출기 설정
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| {
            log::debug!("JSON 본문 해석 실패: {}", err);
            AppError::BadRequest(err.to_string()).into()
        })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "signup_service",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "signup_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::Value;

    use crate::controllers::SignUpController;
    use crate::domain::dto::users::{SignUpRequest, SignUpResponse};
    use crate::protocols::{Controller, EmailValidator};
    use crate::utils::email_validator_adapter::EmailValidatorAdapter;

    struct RejectingEmailValidator;

    impl EmailValidator for RejectingEmailValidator {
        fn is_valid(&self, _email: &str) -> bool {
            false
        }
    }

    fn controller_with(
        validator: Arc<dyn EmailValidator>,
    ) -> web::Data<dyn Controller<SignUpRequest, SignUpResponse>> {
        let controller: Arc<dyn Controller<SignUpRequest, SignUpResponse>> =
            Arc::new(SignUpController::new(validator));
        web::Data::from(controller)
    }

    async fn post_signup(
        validator: Arc<dyn EmailValidator>,
        body: Value,
    ) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(controller_with(validator))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/signup")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;

        (status, body)
    }

    #[actix_web::test]
    async fn test_signup_missing_name_returns_400() {
        let (status, body) = post_signup(
            Arc::new(EmailValidatorAdapter::new()),
            json!({
                "email": "any_email@email.com",
                "password": "any_password",
                "passwordConfirmation": "any_password"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MISSING_PARAM");
        assert_eq!(body["param"], "name");
        assert_eq!(body["error"], "Missing param: name");
    }

    #[actix_web::test]
    async fn test_signup_missing_email_returns_400() {
        let (status, body) = post_signup(
            Arc::new(EmailValidatorAdapter::new()),
            json!({
                "name": "any_name",
                "password": "any_password",
                "passwordConfirmation": "any_password"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MISSING_PARAM");
        assert_eq!(body["param"], "email");
    }

    #[actix_web::test]
    async fn test_signup_rejected_email_returns_invalid_param() {
        let (status, body) = post_signup(
            Arc::new(RejectingEmailValidator),
            json!({
                "name": "any_name",
                "email": "any_email@email.com",
                "password": "any_password",
                "passwordConfirmation": "any_password"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_PARAM");
        assert_eq!(body["param"], "email");
    }

    #[actix_web::test]
    async fn test_signup_with_real_validator_rejects_malformed_email() {
        let (status, body) = post_signup(
            Arc::new(EmailValidatorAdapter::new()),
            json!({
                "name": "any_name",
                "email": "invalid_email",
                "password": "any_password",
                "passwordConfirmation": "any_password"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_PARAM");
        assert_eq!(body["param"], "email");
    }

    #[actix_web::test]
    async fn test_signup_valid_body_returns_200_without_passwords() {
        let (status, body) = post_signup(
            Arc::new(EmailValidatorAdapter::new()),
            json!({
                "name": "any_name",
                "email": "any_email@email.com",
                "password": "any_password",
                "passwordConfirmation": "any_password"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "any_name");
        assert_eq!(body["email"], "any_email@email.com");
        assert!(body.get("password").is_none());
        assert!(body.get("passwordConfirmation").is_none());
    }

    #[actix_web::test]
    async fn test_signup_with_differing_passwords_is_accepted() {
        let (status, body) = post_signup(
            Arc::new(EmailValidatorAdapter::new()),
            json!({
                "name": "any_name",
                "email": "any_email@email.com",
                "password": "any_password",
                "passwordConfirmation": "other_password"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.get("code").is_none());
        assert_eq!(body["email"], "any_email@email.com");
    }

    #[actix_web::test]
    async fn test_signup_non_string_field_returns_bad_request() {
        let (status, body) = post_signup(
            Arc::new(EmailValidatorAdapter::new()),
            json!({ "name": 42 }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[actix_web::test]
    async fn test_signup_malformed_json_returns_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(controller_with(Arc::new(EmailValidatorAdapter::new())))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/signup")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "BAD_REQUEST");
        assert!(body["param"].is_null());
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
