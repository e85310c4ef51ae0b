use super::http::{HttpRequest, HttpResponse};

/// 프레젠테이션 계층 컨트롤러의 공통 인터페이스
///
/// `T`는 요청 본문, `R`은 성공 응답 본문 타입입니다.
/// 처리는 동기적이며, 모든 실패는 반환되는 [`HttpResponse`]로 표현됩니다.
pub trait Controller<T, R>: Send + Sync {
    fn handle(&self, request: &HttpRequest<T>) -> HttpResponse<R>;
}
