//! 인증 서비스 구현
//!
//! 자격증명 검증과 토큰 발급으로 이어지는 로그인 플로우를 담당합니다.
//!
//! ## 보안 설계
//!
//! - 자격증명은 저장소에서 조회하며, 비밀번호는 bcrypt 해시 비교로 검증
//! - 존재하지 않는 사용자명과 틀린 비밀번호는 동일한 메시지로 실패
//!   (계정 존재 여부를 노출하지 않음)

use std::sync::Arc;

use singleton_macro::service;

use crate::core::errors::AppError;
use crate::domain::dto::users::response::LoginResponse;
use crate::repositories::credentials::credential_repo::CredentialRepository;
use crate::services::auth::token_service::TokenService;

/// 로그인 실패 시 공통으로 사용하는 메시지
const INVALID_CREDENTIALS: &str = "잘못된 사용자명 또는 비밀번호입니다";

/// 인증 플로우 서비스
#[service(name = "auth")]
pub struct AuthService {
    /// 자격증명 리포지토리 (자동 주입)
    credential_repo: Arc<CredentialRepository>,
    /// JWT 토큰 서비스 (자동 주입)
    token_service: Arc<TokenService>,
}

impl AuthService {
    /// 사용자를 인증하고 JWT 토큰을 발급합니다.
    ///
    /// # 인증 과정
    ///
    /// 1. 사용자명으로 자격증명 레코드 조회
    /// 2. bcrypt 해시 비교로 비밀번호 검증
    /// 3. 레코드의 주체 정보로 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 사용자명 없음 또는 비밀번호 불일치
    /// * `AppError::InternalError` - 해시 비교 또는 토큰 생성 실패
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AppError> {
        let record = self
            .credential_repo
            .find_by_username(username)?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        let is_valid = bcrypt::verify(password, &record.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            log::warn!("로그인 실패: {}", username);
            return Err(AppError::AuthenticationError(
                INVALID_CREDENTIALS.to_string(),
            ));
        }

        let token = self
            .token_service
            .generate_token(record.user_id, &record.username, record.admin)?;

        log::info!("로그인 성공: {}", record.username);
        Ok(LoginResponse { token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::credentials::credential_repo::CredentialRecord;

    fn service_with_admin() -> AuthService {
        let credential_repo = Arc::new(CredentialRepository::new());
        credential_repo
            .insert(CredentialRecord {
                user_id: 1,
                username: "admin".to_string(),
                password_hash: bcrypt::hash("password", 4).unwrap(),
                admin: true,
            })
            .unwrap();

        AuthService {
            credential_repo,
            token_service: Arc::new(TokenService {}),
        }
    }

    #[actix_web::test]
    async fn test_login_with_valid_credentials_issues_verifiable_token() {
        let service = service_with_admin();

        let response = service.login("admin", "password").await.unwrap();

        let token_service = TokenService {};
        let claims = token_service.verify_token(&response.token).unwrap();
        assert_eq!(claims.sub, 1);
        assert_eq!(claims.username, "admin");
        assert!(claims.admin);
    }

    #[actix_web::test]
    async fn test_login_with_wrong_password_fails() {
        let service = service_with_admin();

        let err = service.login("admin", "wrong-password").await.unwrap_err();
        assert!(matches!(err, AppError::AuthenticationError(_)));
    }

    #[actix_web::test]
    async fn test_login_with_unknown_username_fails_with_same_message() {
        let service = service_with_admin();

        let unknown = service.login("nobody", "password").await.unwrap_err();
        let wrong = service.login("admin", "wrong").await.unwrap_err();

        // 계정 존재 여부가 메시지로 구분되지 않아야 한다
        assert_eq!(unknown.to_string(), wrong.to_string());
    }
}
