//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 토큰 발급과 검증을 담당합니다.
//! HMAC-SHA256 서명을 사용하며, 검증 시 허용 알고리즘을 HS256으로
//! 고정하여 알고리즘 치환 공격을 차단합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use singleton_macro::service;
use thiserror::Error;

use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::token::token::TokenClaims;

/// 토큰 발급/검증 실패 종류
///
/// 만료와 그 외 구조적/서명 문제를 구분하여 표현합니다.
/// HTTP 경계에서는 둘 다 401로 매핑됩니다.
#[derive(Debug, Error)]
pub enum TokenError {
    /// 토큰이 만료됨
    #[error("authentication token has expired")]
    Expired,

    /// 서명 불일치, 형식 오류, 예상 밖 알고리즘 등 그 외 모든 문제
    #[error("invalid authentication token")]
    Invalid,

    /// 토큰 생성 실패 (서버 측 오류)
    #[error("failed to generate authentication token: {0}")]
    Creation(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Creation(msg) => AppError::InternalError(msg),
            other => AppError::AuthenticationError(other.to_string()),
        }
    }
}

/// JWT 토큰 관리 서비스
///
/// 설정된 시크릿과 만료 시간으로 토큰을 발급하고 검증합니다.
#[service(name = "token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 사용자를 위한 JWT 토큰을 생성합니다
    ///
    /// 클레임에는 주체 ID, 사용자명, 관리자 플래그와 함께
    /// 발급 시각(iat), 만료 시각(exp = iat + 설정된 시간)이 포함됩니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::Creation` - 서명 실패
    pub fn generate_token(
        &self,
        user_id: i64,
        username: &str,
        admin: bool,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: user_id,
            username: username.to_string(),
            admin,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| TokenError::Creation(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰을 검증하고 클레임을 추출합니다
    ///
    /// 허용 알고리즘을 HS256으로 고정하므로, 다른 알고리즘으로 서명된
    /// 토큰은 시크릿이 일치하더라도 거부됩니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::Expired` - 만료된 토큰
    /// * `TokenError::Invalid` - 그 외 모든 구조/서명 문제
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::new(Algorithm::HS256);

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }

    /// Authorization 헤더 값에서 Bearer 토큰 부분을 추출합니다
    ///
    /// # Errors
    ///
    /// * `TokenError::Invalid` - "Bearer {token}" 형식이 아닌 경우
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, TokenError> {
        auth_header
            .strip_prefix("Bearer ")
            .ok_or(TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    fn service() -> TokenService {
        TokenService {}
    }

    fn encode_with(claims: &TokenClaims, secret: &str, algorithm: Algorithm) -> String {
        encode(
            &Header::new(algorithm),
            claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap()
    }

    fn claims_expiring_at(exp: i64) -> TokenClaims {
        let now = Utc::now().timestamp();
        TokenClaims {
            sub: 1,
            username: "admin".to_string(),
            admin: true,
            iat: now,
            exp,
        }
    }

    #[test]
    fn test_generated_token_is_accepted_before_expiry() {
        let service = service();

        let token = service.generate_token(1, "admin", true).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, 1);
        assert_eq!(claims.username, "admin");
        assert!(claims.admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_is_rejected_as_expired() {
        let service = service();

        // 검증기의 기본 leeway(60초)를 넘도록 충분히 과거로 설정
        let expired = claims_expiring_at(Utc::now().timestamp() - 7200);
        let token = encode_with(&expired, &JwtConfig::secret(), Algorithm::HS256);

        assert!(matches!(
            service.verify_token(&token).unwrap_err(),
            TokenError::Expired
        ));
    }

    #[test]
    fn test_token_signed_with_different_key_is_rejected() {
        let service = service();

        let claims = claims_expiring_at(Utc::now().timestamp() + 3600);
        let token = encode_with(&claims, "some-other-secret", Algorithm::HS256);

        assert!(matches!(
            service.verify_token(&token).unwrap_err(),
            TokenError::Invalid
        ));
    }

    #[test]
    fn test_token_signed_with_different_algorithm_is_rejected() {
        let service = service();

        // 올바른 시크릿이라도 HS256이 아니면 거부되어야 한다
        let claims = claims_expiring_at(Utc::now().timestamp() + 3600);
        let token = encode_with(&claims, &JwtConfig::secret(), Algorithm::HS384);

        assert!(matches!(
            service.verify_token(&token).unwrap_err(),
            TokenError::Invalid
        ));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let service = service();

        assert!(matches!(
            service.verify_token("not.a.jwt").unwrap_err(),
            TokenError::Invalid
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(
            service.extract_bearer_token("Bearer abc.def.ghi").unwrap(),
            "abc.def.ghi"
        );
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
    }

    #[test]
    fn test_error_kind_mapping_sanity() {
        // jsonwebtoken 에러 종류 매핑이 의도대로인지 확인
        let err = decode::<TokenClaims>(
            "broken",
            &DecodingKey::from_secret(b"k"),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap_err();

        assert!(!matches!(err.kind(), ErrorKind::ExpiredSignature));
    }
}
