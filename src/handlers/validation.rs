//! 요청 본문 검증 에러 포맷팅
//!
//! `validator` 검증 실패를 필드별 메시지로 풀어 하나의 사용자용
//! 문자열로 합칩니다.

use validator::ValidationErrors;

/// 검증 실패를 사람이 읽을 수 있는 단일 메시지로 변환합니다.
///
/// 각 필드의 실패는 DTO에 선언된 메시지(필수/형식/범위)를 사용하고,
/// 메시지가 없는 규칙은 필드 이름으로 일반 메시지를 만듭니다.
/// 모든 메시지는 "; "로 연결됩니다.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("'{}' 필드가 유효하지 않습니다", field));
            messages.push(message);
        }
    }

    format!("입력값 검증 실패: {}", messages.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::request::UserRequest;
    use validator::Validate;

    #[test]
    fn test_every_invalid_field_appears_in_message() {
        let request = UserRequest {
            name: "J".to_string(),
            email: "not-an-email".to_string(),
            age: 130,
        };

        let errors = request.validate().unwrap_err();
        let message = validation_message(&errors);

        assert!(message.starts_with("입력값 검증 실패"));
        assert!(message.contains("이름은 2자 이상이어야 합니다"));
        assert!(message.contains("유효한 이메일 주소를 입력해주세요"));
        assert!(message.contains("나이는 0에서 120 사이여야 합니다"));
    }

    #[test]
    fn test_single_failure_has_no_separator() {
        let request = UserRequest {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            age: 130,
        };

        let errors = request.validate().unwrap_err();
        let message = validation_message(&errors);

        assert!(!message.contains(';'));
        assert!(message.contains("나이는 0에서 120 사이여야 합니다"));
    }
}
