//! 개발 환경용 샘플 데이터
//!
//! 개발 환경에서 API를 바로 사용해볼 수 있도록 사용자 저장소에
//! 시드되는 샘플 레코드들을 제공합니다.

use crate::domain::entities::users::user::{User, UserValidationError};

/// 개발/테스트용 샘플 사용자 목록을 생성합니다.
pub fn sample_users() -> Result<Vec<User>, UserValidationError> {
    Ok(vec![
        User::with_id(1, "John Doe", "john@example.com", 30)?,
        User::with_id(2, "Jane Smith", "jane@example.com", 28)?,
        User::with_id(3, "Bob Johnson", "bob@example.com", 45)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::UserStore;
    use crate::repositories::users::user_repo::UserRepository;

    #[actix_web::test]
    async fn test_sample_users_seed_and_keep_their_ids() {
        let repo = UserRepository::new();
        repo.seed(sample_users().unwrap()).unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 3);

        // 시드된 ID 이후부터 새 ID가 발급된다
        let new_user = repo
            .save(User::new("Alice Brown", "alice@example.com", 33).unwrap())
            .await
            .unwrap();
        assert_eq!(new_user.id(), Some(4));
    }
}
