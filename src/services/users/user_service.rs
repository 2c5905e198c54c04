//! # 사용자 도메인 서비스 구현
//!
//! 사용자 리소스에 대한 핵심 비즈니스 규칙을 구현합니다.
//! 저장소를 감싸며 다음 규칙들을 강제합니다:
//!
//! - ID는 양수여야 함 (0 이하의 ID는 조회 전에 거부)
//! - 이메일은 시스템 전체에서 유니크해야 함 (생성/수정 시 검사)
//! - 수정은 기존 레코드를 기반으로 필드 단위 재검증 후 반영
//! - 삭제는 존재 확인 후 수행
//!
//! 엔티티 수준 검증(이름/이메일/나이 형식)은 [`User`] 엔티티가 담당하고,
//! 이 서비스는 여러 레코드에 걸친 규칙만 다룹니다.
//!
//! ## 싱글톤 패턴 및 의존성 주입
//!
//! `#[service]` 매크로를 통해 자동으로 싱글톤으로 관리되며,
//! `main`에서 등록된 UserRepository가 자동으로 주입됩니다:
//!
//! ```rust,ignore
//! let user_service = UserService::instance(); // 항상 동일한 인스턴스
//! ```

use std::sync::Arc;

use singleton_macro::service;

use crate::core::errors::AppError;
use crate::domain::entities::users::user::User;
use crate::repositories::UserStore;
use crate::repositories::users::user_repo::UserRepository;

/// 사용자 도메인 규칙 서비스
///
/// 모든 메서드는 `Result<T, AppError>`를 반환하며, 실패 종류는 다음과 같이
/// 구분됩니다:
///
/// - **ValidationError**: 잘못된 ID 또는 필드 검증 실패
/// - **AlreadyExists**: 이메일 유니크 제약 위반
/// - **NotFound**: 대상 레코드 없음
/// - **RepositoryError**: 저장소 계층 오류
#[service(name = "user")]
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// ID로 사용자를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - ID가 0 이하
    /// * `AppError::NotFound` - 해당 ID의 사용자 없음
    pub async fn get_user_by_id(&self, id: i64) -> Result<User, AppError> {
        if id <= 0 {
            return Err(AppError::ValidationError(
                "유효하지 않은 ID 값입니다".to_string(),
            ));
        }

        match self.user_repo.find_by_id(id).await {
            Ok(user) => Ok(user),
            // 저장소의 단순 NotFound를 리소스 정보가 담긴 메시지로 변환
            Err(AppError::NotFound(_)) => {
                Err(AppError::NotFound(format!("user with id {} not found", id)))
            }
            Err(other) => Err(other),
        }
    }

    /// 모든 사용자를 조회합니다. 순서는 보장되지 않습니다.
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        self.user_repo
            .find_all()
            .await
            .map_err(|e| AppError::RepositoryError(e.to_string()))
    }

    /// 새 사용자를 생성합니다.
    ///
    /// # 처리 과정
    ///
    /// 1. 이메일 유니크 제약 검사
    /// 2. 엔티티 생성 (필드 검증 포함)
    /// 3. 저장소에 영속화 (ID 할당)
    ///
    /// # Errors
    ///
    /// * `AppError::AlreadyExists` - 이메일이 이미 사용 중
    /// * `AppError::ValidationError` - 필드 검증 실패
    pub async fn create_user(&self, name: &str, email: &str, age: i32) -> Result<User, AppError> {
        if self.user_repo.exists_by_email(email).await? {
            return Err(AppError::AlreadyExists(format!(
                "이미 사용 중인 이메일입니다: {}",
                email
            )));
        }

        let user = User::new(name, email, age)?;
        let stored = self.user_repo.save(user).await?;

        log::info!("사용자 생성됨: ID {:?} ({})", stored.id(), stored.email());
        Ok(stored)
    }

    /// 기존 사용자를 수정합니다.
    ///
    /// 이메일이 변경되는 경우에만 유니크 제약을 재검사하므로,
    /// 자신의 기존 이메일을 그대로 유지하는 수정은 항상 허용됩니다.
    /// 필드는 이름 → 이메일 → 나이 순서로 적용되며, 첫 검증 실패에서
    /// 중단됩니다 (저장소에는 아무것도 반영되지 않음).
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - ID가 0 이하이거나 필드 검증 실패
    /// * `AppError::NotFound` - 해당 ID의 사용자 없음
    /// * `AppError::AlreadyExists` - 변경하려는 이메일이 이미 사용 중
    pub async fn update_user(
        &self,
        id: i64,
        name: &str,
        email: &str,
        age: i32,
    ) -> Result<User, AppError> {
        if id <= 0 {
            return Err(AppError::ValidationError(
                "유효하지 않은 ID 값입니다".to_string(),
            ));
        }

        let mut user = match self.user_repo.find_by_id(id).await {
            Ok(user) => user,
            Err(AppError::NotFound(_)) => {
                return Err(AppError::NotFound(format!("user with id {} not found", id)));
            }
            Err(other) => return Err(other),
        };

        if user.email() != email {
            if self.user_repo.exists_by_email(email).await? {
                return Err(AppError::AlreadyExists(format!(
                    "이미 사용 중인 이메일입니다: {}",
                    email
                )));
            }
        }

        user.set_name(name)?;
        user.set_email(email)?;
        user.set_age(age)?;

        let stored = self.user_repo.save(user).await?;

        log::info!("사용자 수정됨: ID {}", id);
        Ok(stored)
    }

    /// 사용자를 삭제합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - ID가 0 이하
    /// * `AppError::NotFound` - 해당 ID의 사용자 없음
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        if id <= 0 {
            return Err(AppError::ValidationError(
                "유효하지 않은 ID 값입니다".to_string(),
            ));
        }

        // 존재 확인 후 삭제
        if let Err(err) = self.user_repo.find_by_id(id).await {
            return match err {
                AppError::NotFound(_) => {
                    Err(AppError::NotFound(format!("user with id {} not found", id)))
                }
                other => Err(other),
            };
        }

        self.user_repo.delete(id).await?;

        log::info!("사용자 삭제됨: ID {}", id);
        Ok(())
    }
}
