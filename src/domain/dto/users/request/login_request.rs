//! 로그인 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// 사용자명
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    /// 비밀번호
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_credentials_are_rejected() {
        let request = LoginRequest {
            username: String::new(),
            password: String::new(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
        assert!(errors.field_errors().contains_key("password"));
    }
}
