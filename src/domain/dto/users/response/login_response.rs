//! 로그인 응답 DTO

use serde::{Deserialize, Serialize};

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// 발급된 JWT 액세스 토큰
    pub token: String,
}
