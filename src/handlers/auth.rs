//! # Authentication HTTP Handlers
//!
//! 인증 관련 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::response::ResponseModel;
use crate::domain::dto::users::request::LoginRequest;
use crate::handlers::validation::validation_message;
use crate::services::auth::AuthService;

/// 로그인 핸들러
///
/// 사용자명/비밀번호를 검증하고 JWT 토큰을 발급합니다.
///
/// # 엔드포인트
///
/// `POST /login`
///
/// # 요청 본문
///
/// ```json
/// {
///   "username": "admin",
///   "password": "password"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "success": true,
///   "message": "로그인 성공",
///   "data": { "token": "eyJhbGciOiJIUzI1NiIs..." }
/// }
/// ```
///
/// ## 실패
///
/// * 400 Bad Request - 사용자명/비밀번호 누락
/// * 401 Unauthorized - 자격증명 불일치
#[post("/login")]
pub async fn login(payload: web::Json<LoginRequest>) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(validation_message(&e)))?;

    let service = AuthService::instance();
    let response = service.login(&payload.username, &payload.password).await?;

    Ok(HttpResponse::Ok().json(ResponseModel::success("로그인 성공", response)))
}
