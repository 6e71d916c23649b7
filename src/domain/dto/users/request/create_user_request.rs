//! 사용자 등록 요청 DTO
//!
//! `POST /register` 본문을 표현합니다.
//! 식별번호는 서버에서 생성하므로 클라이언트가 보내지 않습니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 평문 비밀번호 (저장 전 해시됨)
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, email: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("alice", "alice@example.com", "secret").validate().is_ok());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let errors = request("alice", "not-an-email", "secret").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_empty_username_and_password_are_rejected() {
        let errors = request("", "alice@example.com", "").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("password"));
    }
}
