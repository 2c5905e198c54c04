//! # Authentication Configuration Module
//!
//! JWT 토큰과 관리자 자격증명 시드 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정 (프로덕션)
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export ADMIN_USERNAME="admin"
//! export ADMIN_PASSWORD="change-me"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{JwtConfig, AdminCredentialConfig};
//!
//! let secret = JwtConfig::secret();
//! let expiration = JwtConfig::expiration_hours();
//! let username = AdminCredentialConfig::username();
//! ```

use std::env;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 토큰 서명 시크릿과 만료 시간을 관리합니다.
///
/// ## JWT 보안 모범 사례
///
/// 1. **강력한 비밀키 사용**: 최소 256비트 (32바이트) 랜덤 키
/// 2. **적절한 만료 시간**: 개발은 길게, 프로덕션은 짧게
/// 3. **환경별로 다른 키 사용**
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 "mysecretkey"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    ///
    /// # Environment Variables
    ///
    /// - `JWT_SECRET`: 서명 비밀키 (기본값: "mysecretkey")
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "mysecretkey".to_string()
        })
    }

    /// JWT 토큰의 만료 시간을 시간 단위로 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `JWT_EXPIRATION_HOURS`: 토큰 수명 (기본값: 24)
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

/// 관리자 자격증명 시드 설정을 관리하는 구조체
///
/// 애플리케이션 시작 시 자격증명 저장소에 등록되는 관리자 계정의
/// 사용자명과 비밀번호를 관리합니다. 비밀번호는 저장 시점에 bcrypt로
/// 해시되며 평문으로 보관되지 않습니다.
///
/// 기본값(admin/password)은 데모 용도이며 프로덕션에서는 반드시
/// 환경 변수로 교체해야 합니다.
pub struct AdminCredentialConfig;

impl AdminCredentialConfig {
    /// 시드할 관리자 계정의 사용자명을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `ADMIN_USERNAME`: 관리자 사용자명 (기본값: "admin")
    pub fn username() -> String {
        env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string())
    }

    /// 시드할 관리자 계정의 비밀번호를 반환합니다.
    ///
    /// 이 값은 시드 시점에 해시된 후 버려지며, 로그에 출력하지 않습니다.
    ///
    /// # Environment Variables
    ///
    /// - `ADMIN_PASSWORD`: 관리자 비밀번호 (기본값: "password")
    pub fn password() -> String {
        env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
            log::warn!("ADMIN_PASSWORD not set, using default (not secure for production!)");
            "password".to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_defaults() {
        if env::var("JWT_SECRET").is_err() {
            assert_eq!(JwtConfig::secret(), "mysecretkey");
        }

        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
    }

    #[test]
    fn test_admin_credential_defaults() {
        if env::var("ADMIN_USERNAME").is_err() {
            assert_eq!(AdminCredentialConfig::username(), "admin");
        }

        if env::var("ADMIN_PASSWORD").is_err() {
            assert_eq!(AdminCredentialConfig::password(), "password");
        }
    }
}
