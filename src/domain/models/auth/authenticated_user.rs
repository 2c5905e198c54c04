//! 인증된 사용자 컨텍스트 모델
//!
//! 인증 미들웨어가 토큰 검증에 성공한 뒤 요청 extension에 저장하는
//! 사용자 정보입니다. 핸들러는 이 구조체를 통해 요청 주체를 식별합니다.

/// 요청 컨텍스트에 저장되는 인증된 사용자 정보
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// 토큰 주체의 사용자 ID
    pub user_id: i64,
    /// 사용자명
    pub username: String,
    /// 관리자 권한 여부
    pub admin: bool,
}

impl AuthenticatedUser {
    /// 관리자 권한 보유 여부를 확인합니다
    pub fn is_admin(&self) -> bool {
        self.admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin() {
        let admin = AuthenticatedUser {
            user_id: 1,
            username: "admin".to_string(),
            admin: true,
        };
        let member = AuthenticatedUser {
            user_id: 2,
            username: "member".to_string(),
            admin: false,
        };

        assert!(admin.is_admin());
        assert!(!member.is_admin());
    }
}
