//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을
//! 제공합니다. 횡단 관심사(Cross-cutting concerns)를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - JWT 토큰 기반 인증 검증
//! - Bearer 토큰 추출 및 검증
//! - 인증된 사용자 정보를 request extension에 저장
//!
//! ### 2. 타임아웃 미들웨어 (TimeoutMiddleware)
//! - 요청별 처리 시간 제한
//! - 초과 시 408 엔벨로프 응답
//!
//! ### 3. 패닉 복구 미들웨어 (RecoverMiddleware)
//! - 핸들러 패닉을 포착하여 프로세스 종료 방지
//! - 일반 500 엔벨로프 응답으로 변환
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .wrap(RecoverMiddleware)
//!     .wrap(TimeoutMiddleware::from_config())
//!     .service(
//!         web::scope("/api/v1/users")
//!             .wrap(AuthMiddleware) // 보호된 라우트에만 인증 적용
//!             .route("", web::get().to(list_users))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;
pub mod timeout;
pub mod recover;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
pub use timeout::TimeoutMiddleware;
pub use recover::RecoverMiddleware;
