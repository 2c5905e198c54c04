//! # 인메모리 사용자 리포지토리 구현
//!
//! [`UserStore`] 계약의 인메모리 구현체입니다.
//! 애플리케이션 시작 시 `main`에서 생성되어 `ServiceLocator`에 등록되는
//! 인프라 컴포넌트이며, 프로세스 수명 동안 레코드를 보관합니다.
//!
//! ## 동시성 규율
//!
//! 레코드 맵과 다음 ID 카운터 전체를 하나의 `RwLock`으로 보호합니다.
//! 조회는 공유(read) 모드, 변경은 배타(write) 모드로 락을 잡으므로
//! 맵이 갱신 도중의 상태로 관찰되는 일이 없고 동시 쓰기는 직렬화됩니다.
//! 레코드 단위가 아닌 컬렉션 단위의 거친 락입니다 — 현재 규모(작은
//! 컬렉션, O(n) 스캔)에서는 충분하지만 확장 시의 한계 지점입니다.
//!
//! ## ID 할당 규칙
//!
//! ID는 1부터 시작하여 단조 증가하며, 삭제된 ID는 재사용되지 않습니다.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::core::errors::AppError;
use crate::domain::entities::users::user::User;
use crate::repositories::UserStore;

/// 락 내부 상태: 레코드 맵 + 다음 ID 카운터
struct Inner {
    users: HashMap<i64, User>,
    next_id: i64,
}

/// 인메모리 사용자 리포지토리
///
/// 저장소가 레코드의 유일한 원본을 소유하며, 호출자는 복사본을 받고
/// 변경 사항은 반드시 `save`를 통해 반영해야 합니다.
pub struct UserRepository {
    inner: RwLock<Inner>,
}

impl UserRepository {
    /// 비어 있는 리포지토리를 생성합니다. 첫 ID는 1입니다.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// 초기 레코드 집합으로 리포지토리를 채웁니다.
    ///
    /// ID가 이미 할당된 레코드만 받아들이며, 시드된 ID 이후부터
    /// 새 ID가 발급되도록 카운터를 조정합니다.
    pub fn seed(&self, users: Vec<User>) -> Result<(), AppError> {
        let mut inner = self.write_inner()?;

        for user in users {
            if let Some(id) = user.id() {
                if id >= inner.next_id {
                    inner.next_id = id + 1;
                }
                inner.users.insert(id, user);
            }
        }

        Ok(())
    }

    fn read_inner(&self) -> Result<RwLockReadGuard<'_, Inner>, AppError> {
        self.inner
            .read()
            .map_err(|e| AppError::RepositoryError(format!("사용자 저장소 락 손상: {}", e)))
    }

    fn write_inner(&self) -> Result<RwLockWriteGuard<'_, Inner>, AppError> {
        self.inner
            .write()
            .map_err(|e| AppError::RepositoryError(format!("사용자 저장소 락 손상: {}", e)))
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: i64) -> Result<User, AppError> {
        let inner = self.read_inner()?;

        inner
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let inner = self.read_inner()?;

        Ok(inner.users.values().cloned().collect())
    }

    async fn save(&self, user: User) -> Result<User, AppError> {
        let mut inner = self.write_inner()?;

        match user.id() {
            // 새 레코드: 다음 순번 ID를 할당하여 삽입
            None => {
                let id = inner.next_id;
                let stored = User::with_id(id, user.name(), user.email(), user.age())
                    .map_err(|e| AppError::RepositoryError(format!("레코드 재구성 실패: {}", e)))?;

                inner.users.insert(id, stored.clone());
                inner.next_id += 1;

                Ok(stored)
            }
            // 기존 레코드: 무조건 덮어쓰기 (last writer wins)
            Some(id) => {
                inner.users.insert(id, user.clone());
                Ok(user)
            }
        }
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut inner = self.write_inner()?;

        if inner.users.remove(&id).is_none() {
            return Err(AppError::NotFound("user not found".to_string()));
        }

        Ok(())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let inner = self.read_inner()?;

        Ok(inner.users.values().any(|user| user.email() == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str, age: i32) -> User {
        User::new(name, email, age).unwrap()
    }

    #[actix_web::test]
    async fn test_save_assigns_increasing_ids() {
        let repo = UserRepository::new();

        let first = repo.save(user("John Doe", "john@example.com", 30)).await.unwrap();
        let second = repo.save(user("Jane Smith", "jane@example.com", 28)).await.unwrap();

        assert_eq!(first.id(), Some(1));
        assert_eq!(second.id(), Some(2));
    }

    #[actix_web::test]
    async fn test_deleted_id_is_never_reused() {
        let repo = UserRepository::new();

        let first = repo.save(user("John Doe", "john@example.com", 30)).await.unwrap();
        let first_id = first.id().unwrap();
        repo.delete(first_id).await.unwrap();

        let second = repo.save(user("Jane Smith", "jane@example.com", 28)).await.unwrap();
        assert!(second.id().unwrap() > first_id);
    }

    #[actix_web::test]
    async fn test_find_by_id_after_delete_fails_not_found() {
        let repo = UserRepository::new();

        let stored = repo.save(user("John Doe", "john@example.com", 30)).await.unwrap();
        let id = stored.id().unwrap();

        repo.delete(id).await.unwrap();

        assert!(matches!(
            repo.find_by_id(id).await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            repo.delete(id).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[actix_web::test]
    async fn test_exists_by_email_tracks_store_contents() {
        let repo = UserRepository::new();

        assert!(!repo.exists_by_email("john@example.com").await.unwrap());

        let stored = repo.save(user("John Doe", "john@example.com", 30)).await.unwrap();
        assert!(repo.exists_by_email("john@example.com").await.unwrap());

        repo.delete(stored.id().unwrap()).await.unwrap();
        assert!(!repo.exists_by_email("john@example.com").await.unwrap());
    }

    #[actix_web::test]
    async fn test_save_with_id_overwrites_existing_record() {
        let repo = UserRepository::new();

        let stored = repo.save(user("John Doe", "john@example.com", 30)).await.unwrap();
        let id = stored.id().unwrap();

        let updated = User::with_id(id, "John Doe", "john.doe@example.com", 31).unwrap();
        repo.save(updated).await.unwrap();

        let found = repo.find_by_id(id).await.unwrap();
        assert_eq!(found.email(), "john.doe@example.com");
        assert_eq!(found.age(), 31);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[actix_web::test]
    async fn test_seed_bumps_next_id_past_seeded_records() {
        let repo = UserRepository::new();

        repo.seed(vec![
            User::with_id(1, "John Doe", "john@example.com", 30).unwrap(),
            User::with_id(3, "Bob Johnson", "bob@example.com", 45).unwrap(),
        ])
        .unwrap();

        let stored = repo.save(user("Jane Smith", "jane@example.com", 28)).await.unwrap();
        assert_eq!(stored.id(), Some(4));
    }
}
