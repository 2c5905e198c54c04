//! 사용자 생성/수정 요청 DTO
//!
//! 사용자 생성(`POST /users`)과 수정(`PUT /users/{id}`)에 공통으로 사용되는
//! HTTP 요청 데이터 구조를 정의합니다. 여기서의 검증은 전송 계층의 1차
//! 방어선이며, 동일한 규칙이 도메인 엔티티에서도 강제됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 사용자 생성/수정 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserRequest {
    /// 사용자 이름 (2자 이상)
    #[validate(length(min = 2, message = "이름은 2자 이상이어야 합니다"))]
    pub name: String,

    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 사용자 나이 (0-120)
    #[validate(range(min = 0, max = 120, message = "나이는 0에서 120 사이여야 합니다"))]
    pub age: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes() {
        let request = UserRequest {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            age: 30,
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_fields_are_each_reported() {
        let request = UserRequest {
            name: "J".to_string(),
            email: "not-an-email".to_string(),
            age: 130,
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("age"));
    }
}
