//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! CRUD(Create, Read, Update, Delete) 작업과 목록 조회를 지원하며,
//! RESTful API 설계 원칙을 따릅니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 상태 코드 |
//! |--------|------|------|----------------|
//! | `GET` | `/users` | 사용자 목록 조회 | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 OK |
//! | `POST` | `/users` | 새 사용자 생성 | 201 Created |
//! | `PUT` | `/users/{id}` | 사용자 수정 | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 204 No Content |
//!
//! 모든 라우트는 인증 미들웨어 뒤에 배치되므로, 핸들러 진입 시점에는
//! 요청 extension에 인증된 사용자 정보가 존재합니다.

use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::dto::response::ResponseModel;
use crate::domain::dto::users::request::UserRequest;
use crate::handlers::validation::validation_message;
use crate::services::users::user_app_service::UserAppService;

/// 경로 파라미터의 사용자 ID를 파싱합니다.
///
/// 숫자가 아닌 값은 조회 전에 400으로 거부됩니다.
fn parse_user_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: {}", raw)))
}

/// 사용자 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users`
///
/// # 응답
///
/// 200 OK, `data`에 사용자 배열 (순서 보장 없음)
#[get("")]
pub async fn list_users() -> Result<HttpResponse, AppError> {
    let service = UserAppService::instance();
    let users = service.get_all_users().await?;

    Ok(HttpResponse::Ok().json(ResponseModel::success("사용자 목록 조회 성공", users)))
}

/// 사용자 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users/{user_id}`
///
/// # 응답
///
/// * 200 OK - 사용자 정보
/// * 400 Bad Request - 잘못된 ID 형식 또는 0 이하의 ID
/// * 404 Not Found - 사용자 없음
#[get("/{user_id}")]
pub async fn get_user(user_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let id = parse_user_id(&user_id)?;

    let service = UserAppService::instance();
    let user = service.get_user_by_id(id).await?;

    Ok(HttpResponse::Ok().json(ResponseModel::success("사용자 조회 성공", user)))
}

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "John Doe",
///   "email": "john@example.com",
///   "age": 30
/// }
/// ```
///
/// # 응답
///
/// * 201 Created - 생성된 사용자 (할당된 ID 포함)
/// * 400 Bad Request - 검증 실패 또는 이메일 중복
#[post("")]
pub async fn create_user(payload: web::Json<UserRequest>) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(validation_message(&e)))?;

    let service = UserAppService::instance();
    let user = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ResponseModel::success(
        "사용자가 성공적으로 생성되었습니다",
        user,
    )))
}

/// 사용자 수정 핸들러
///
/// # 엔드포인트
///
/// `PUT /users/{user_id}`
///
/// # 응답
///
/// * 200 OK - 수정된 사용자
/// * 400 Bad Request - 검증 실패 또는 이메일 중복
/// * 404 Not Found - 사용자 없음
#[put("/{user_id}")]
pub async fn update_user(
    user_id: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    let id = parse_user_id(&user_id)?;

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(validation_message(&e)))?;

    let service = UserAppService::instance();
    let user = service.update_user(id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ResponseModel::success(
        "사용자가 성공적으로 수정되었습니다",
        user,
    )))
}

/// 사용자 삭제 핸들러
///
/// 물리적 삭제(Hard Delete)이며 삭제된 ID는 재사용되지 않습니다.
///
/// # 엔드포인트
///
/// `DELETE /users/{user_id}`
///
/// # 응답
///
/// * 204 No Content - 삭제 성공
/// * 400 Bad Request - 잘못된 ID 형식
/// * 404 Not Found - 사용자 없음
#[delete("/{user_id}")]
pub async fn delete_user(
    user_id: web::Path<String>,
    auth: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, AppError> {
    let id = parse_user_id(&user_id)?;

    let service = UserAppService::instance();
    service.delete_user(id).await?;

    log::info!("사용자 삭제됨: ID {} (요청자: {})", id, auth.username);
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("42").unwrap(), 42);
        assert!(matches!(
            parse_user_id("abc").unwrap_err(),
            AppError::ValidationError(_)
        ));
        assert!(matches!(
            parse_user_id("1.5").unwrap_err(),
            AppError::ValidationError(_)
        ));
    }
}
