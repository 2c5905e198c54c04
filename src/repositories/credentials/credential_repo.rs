//! # 자격증명 리포지토리 구현
//!
//! 로그인에 사용되는 자격증명 레코드의 인메모리 저장소입니다.
//! 비밀번호는 등록 시점에 bcrypt로 해시되며, 평문은 어디에도
//! 보관되지 않습니다.
//!
//! 애플리케이션 시작 시 `main`에서 생성되어 관리자 계정 하나가
//! 설정값으로부터 시드된 뒤 `ServiceLocator`에 등록됩니다.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::config::PasswordConfig;
use crate::core::errors::AppError;

/// 저장되는 자격증명 레코드
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    /// 토큰 주체가 될 사용자 ID
    pub user_id: i64,
    /// 로그인 식별자
    pub username: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 관리자 권한 여부
    pub admin: bool,
}

/// 인메모리 자격증명 리포지토리
///
/// 사용자명 → 레코드 맵을 단일 `RwLock`으로 보호합니다.
pub struct CredentialRepository {
    records: RwLock<HashMap<String, CredentialRecord>>,
}

impl CredentialRepository {
    /// 비어 있는 리포지토리를 생성합니다.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// 평문 비밀번호를 해시하여 자격증명을 등록합니다.
    ///
    /// 해시 강도는 현재 환경의 bcrypt cost 설정을 따릅니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    pub fn register(
        &self,
        username: &str,
        password: &str,
        user_id: i64,
        admin: bool,
    ) -> Result<(), AppError> {
        let cost = PasswordConfig::bcrypt_cost();
        let password_hash = bcrypt::hash(password, cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        self.insert(CredentialRecord {
            user_id,
            username: username.to_string(),
            password_hash,
            admin,
        })
    }

    /// 이미 해시된 레코드를 저장합니다.
    pub fn insert(&self, record: CredentialRecord) -> Result<(), AppError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| AppError::RepositoryError(format!("자격증명 저장소 락 손상: {}", e)))?;

        records.insert(record.username.clone(), record);
        Ok(())
    }

    /// 사용자명으로 자격증명 레코드를 조회합니다.
    pub fn find_by_username(&self, username: &str) -> Result<Option<CredentialRecord>, AppError> {
        let records = self
            .records
            .read()
            .map_err(|e| AppError::RepositoryError(format!("자격증명 저장소 락 손상: {}", e)))?;

        Ok(records.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_find_by_username() {
        let repo = CredentialRepository::new();
        repo.insert(CredentialRecord {
            user_id: 1,
            username: "admin".to_string(),
            password_hash: bcrypt::hash("password", 4).unwrap(),
            admin: true,
        })
        .unwrap();

        let record = repo.find_by_username("admin").unwrap().unwrap();
        assert_eq!(record.user_id, 1);
        assert!(record.admin);
        assert!(bcrypt::verify("password", &record.password_hash).unwrap());

        assert!(repo.find_by_username("unknown").unwrap().is_none());
    }

    #[test]
    fn test_register_never_stores_plaintext() {
        let repo = CredentialRepository::new();
        repo.register("admin", "password", 1, true).unwrap();

        let record = repo.find_by_username("admin").unwrap().unwrap();
        assert_ne!(record.password_hash, "password");
        assert!(bcrypt::verify("password", &record.password_hash).unwrap());
        assert!(!bcrypt::verify("wrong", &record.password_hash).unwrap());
    }
}
