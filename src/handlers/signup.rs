//! # Signup HTTP Handlers
//!
//! 회원가입 HTTP 엔드포인트를 처리하는 actix 핸들러입니다.
//! 요청 본문을 [`HttpRequest`]로 감싸 컨트롤러에 넘기고,
//! 돌려받은 [`crate::protocols::HttpResponse`]를 actix 응답으로 변환하는 일만 합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/signup` | 회원가입 요청 검증 | 200 OK / 400 Bad Request |

use actix_web::{HttpResponse, post, web};

use crate::domain::dto::users::{SignUpRequest, SignUpResponse};
use crate::protocols::{Controller, HttpRequest};

/// 핸들러가 주입받는 회원가입 컨트롤러 (trait 객체)
///
/// ```rust,ignore
/// let controller: Arc<dyn Controller<SignUpRequest, SignUpResponse>> =
///     Arc::new(SignUpController::new(validator));
/// App::new().app_data(web::Data::from(controller))
/// ```
pub type SignUpControllerData = web::Data<dyn Controller<SignUpRequest, SignUpResponse>>;

/// 회원가입 핸들러
///
/// # 엔드포인트
///
/// `POST /api/v1/signup`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "John Doe",
///   "email": "john@example.com",
///   "password": "SecurePass123",
///   "passwordConfirmation": "SecurePass123"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "name": "John Doe",
///   "email": "john@example.com",
///   "message": "회원가입 요청이 접수되었습니다"
/// }
/// ```
///
/// ## 필드 누락 (400 Bad Request)
/// ```json
/// {
///   "error": "Missing param: name",
///   "code": "MISSING_PARAM",
///   "param": "name"
/// }
/// ```
///
/// ## 이메일 형식 오류 (400 Bad Request)
/// ```json
/// {
///   "error": "Invalid param: email",
///   "code": "INVALID_PARAM",
///   "param": "email"
/// }
/// ```
///
/// JSON 자체를 해석할 수 없는 경우는 라우트에 등록된 `JsonConfig` 에러 핸들러가
/// `BAD_REQUEST` 응답을 만듭니다.
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/signup \
///   -H "Content-Type: application/json" \
///   -d '{"name":"John","email":"john@example.com","password":"pw","passwordConfirmation":"pw"}'
/// ```
#[post("/signup")]
pub async fn signup(
    controller: SignUpControllerData,
    payload: web::Json<SignUpRequest>,
) -> HttpResponse {
    let request = HttpRequest::new(payload.into_inner());

    controller.handle(&request).into()
}
