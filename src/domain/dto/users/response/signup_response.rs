use serde::{Deserialize, Serialize};

/// 회원가입 요청 수락 응답 DTO
///
/// 비밀번호 관련 필드는 어떤 경우에도 응답에 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl SignUpResponse {
    pub fn accepted(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: "회원가입 요청이 접수되었습니다".to_string(),
        }
    }
}
