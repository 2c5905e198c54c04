//! 사용자 애플리케이션 서비스 (오케스트레이션 계층)
//!
//! 전송 계층의 요청/응답 형태와 도메인 호출 사이를 변환합니다.
//! 비즈니스 규칙은 모두 도메인 서비스에 위임하고, 이 계층은
//! DTO ↔ 엔티티 변환만 담당합니다. 실패는 변환 없이 그대로 전파되어
//! HTTP 경계에서 상태 코드로 분류됩니다.

use std::sync::Arc;

use singleton_macro::service;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::UserRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::services::users::user_service::UserService;

/// 사용자 유스케이스 오케스트레이션 서비스
#[service(name = "userapp")]
pub struct UserAppService {
    /// 사용자 도메인 규칙 서비스 (자동 주입)
    user_service: Arc<UserService>,
}

impl UserAppService {
    /// ID로 사용자를 조회하여 응답 DTO로 반환합니다.
    pub async fn get_user_by_id(&self, id: i64) -> Result<UserResponse, AppError> {
        let user = self.user_service.get_user_by_id(id).await?;
        Ok(UserResponse::from(user))
    }

    /// 모든 사용자를 조회하여 응답 DTO 목록으로 반환합니다.
    pub async fn get_all_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_service.get_all_users().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 사용자 생성 요청을 처리합니다.
    pub async fn create_user(&self, request: UserRequest) -> Result<UserResponse, AppError> {
        let user = self
            .user_service
            .create_user(&request.name, &request.email, request.age)
            .await?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 수정 요청을 처리합니다.
    pub async fn update_user(
        &self,
        id: i64,
        request: UserRequest,
    ) -> Result<UserResponse, AppError> {
        let user = self
            .user_service
            .update_user(id, &request.name, &request.email, request.age)
            .await?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 삭제 요청을 처리합니다.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.user_service.delete_user(id).await
    }
}
