//! 프레임워크 독립적인 HTTP 요청/응답 레코드
//!
//! 컨트롤러는 actix 타입에 의존하지 않고 이 레코드만 주고받습니다.
//! actix 응답으로의 변환은 `From<HttpResponse> for actix_web::HttpResponse`가 담당합니다.

use actix_web::http::StatusCode;
use serde::Serialize;

use crate::core::errors::AppError;

/// 컨트롤러로 전달되는 요청
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest<T> {
    pub body: T,
}

impl<T> HttpRequest<T> {
    pub fn new(body: T) -> Self {
        Self { body }
    }
}

/// 응답 본문
///
/// 직렬화 시 태그 없이 내부 값의 JSON 형식을 그대로 사용합니다.
/// 성공 본문의 타입 `B`는 컨트롤러마다 다릅니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody<B> {
    Error(AppError),
    Success(B),
}

/// 컨트롤러가 돌려주는 응답
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse<B> {
    pub status_code: u16,
    pub body: ResponseBody<B>,
}

impl<B> HttpResponse<B> {
    /// 400 Bad Request 응답을 생성합니다.
    pub fn bad_request(error: AppError) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST.as_u16(),
            body: ResponseBody::Error(error),
        }
    }

    /// 200 OK 응답을 생성합니다.
    pub fn ok(body: B) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            body: ResponseBody::Success(body),
        }
    }

    /// 본문이 에러인 경우 해당 에러를 반환합니다.
    pub fn error(&self) -> Option<&AppError> {
        match &self.body {
            ResponseBody::Error(error) => Some(error),
            ResponseBody::Success(_) => None,
        }
    }
}

impl<B: Serialize> From<HttpResponse<B>> for actix_web::HttpResponse {
    fn from(response: HttpResponse<B>) -> Self {
        let status =
            StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        actix_web::HttpResponse::build(status).json(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::SignUpResponse;

    #[test]
    fn test_bad_request_carries_error() {
        let response: HttpResponse<SignUpResponse> =
            HttpResponse::bad_request(AppError::MissingParam("name".into()));

        assert_eq!(response.status_code, 400);
        assert_eq!(response.error(), Some(&AppError::MissingParam("name".into())));
    }

    #[test]
    fn test_ok_has_no_error() {
        let response = HttpResponse::ok(SignUpResponse::accepted("any_name", "any@email.com"));

        assert_eq!(response.status_code, 200);
        assert_eq!(response.error(), None);
    }

    #[test]
    fn test_untagged_body_serialization() {
        let body: ResponseBody<SignUpResponse> =
            ResponseBody::Error(AppError::InvalidParam("email".into()));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["code"], "INVALID_PARAM");
        assert_eq!(value["param"], "email");

        let body = ResponseBody::Success(SignUpResponse::accepted("any_name", "any@email.com"));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["name"], "any_name");
        assert_eq!(value["email"], "any@email.com");
    }

    #[test]
    fn test_into_actix_response_keeps_status() {
        let response: HttpResponse<SignUpResponse> =
            HttpResponse::bad_request(AppError::MissingParam("email".into()));
        let actix_response: actix_web::HttpResponse = response.into();

        assert_eq!(actix_response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_success_body_accepts_any_serializable_type() {
        let response = HttpResponse::ok(serde_json::json!({ "status": "queued" }));
        let value = serde_json::to_value(&response.body).unwrap();
        assert_eq!(value["status"], "queued");

        let actix_response: actix_web::HttpResponse = response.into();
        assert_eq!(actix_response.status(), StatusCode::OK);
    }
}
