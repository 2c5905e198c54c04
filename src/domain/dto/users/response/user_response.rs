//! 사용자 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 도메인 엔티티의 클라이언트용 프로젝션입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            // 저장소를 거친 엔티티는 항상 ID가 할당되어 있다
            id: user.id().unwrap_or_default(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            age: user.age(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_from_entity() {
        let user = User::with_id(3, "Bob Johnson", "bob@example.com", 45).unwrap();
        let response = UserResponse::from(user);

        assert_eq!(response.id, 3);
        assert_eq!(response.name, "Bob Johnson");
        assert_eq!(response.email, "bob@example.com");
        assert_eq!(response.age, 45);
    }
}
