//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다. 계층별 책임은 다음과 같습니다:
//! 도메인/저장소 계층은 타입화된 `AppError`를 반환하고,
//! HTTP 상태 코드와 사용자 메시지 매핑은 이 모듈의
//! `ResponseError` 구현에서만 수행됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn create_user(name: &str) -> Result<User, AppError> {
//!     if name.is_empty() {
//!         return Err(AppError::ValidationError("이름을 입력해주세요".to_string()));
//!     }
//!     // ...
//! }
//! ```

use thiserror::Error;

use crate::domain::dto::response::ResponseModel;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 엔벨로프 형태의 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 유니크 제약 위반 에러 (400 Bad Request)
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// 저장소 계층 에러 (500 Internal Server Error, 상세는 로그에만 기록)
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::RepositoryError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 엔벨로프 응답으로 변환합니다.
    /// 500 계열 에러는 내부 상세를 로그에만 남기고 일반 메시지를 반환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let message = match self {
            AppError::RepositoryError(detail) => {
                log::error!("저장소 오류: {}", detail);
                "지금은 요청을 처리할 수 없습니다. 잠시 후 다시 시도해주세요".to_string()
            }
            AppError::InternalError(detail) => {
                log::error!("내부 서버 오류: {}", detail);
                "예상치 못한 서버 오류가 발생했습니다. 잠시 후 다시 시도해주세요".to_string()
            }
            other => other.to_string(),
        };

        actix_web::HttpResponse::build(self.status_code()).json(ResponseModel::error(message))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("이름은 2자 이상이어야 합니다".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("user with id 1 not found".to_string());
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_already_exists_maps_to_bad_request() {
        let error = AppError::AlreadyExists("john@example.com".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("invalid token".to_string());
        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_repository_error_hides_detail() {
        let error = AppError::RepositoryError("lock poisoned at line 42".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let text = String::from_utf8_lossy(&body);
        assert!(!text.contains("lock poisoned"));
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("something went wrong".to_string());
        assert_eq!(
            error.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
