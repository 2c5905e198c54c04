//! 사용자 관리 서비스 백엔드
//!
//! Rust 기반의 계층형 사용자 관리 REST API 서비스입니다.
//! JWT 토큰 기반 인증, 인메모리 사용자 저장소,
//! 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성, 조회, 수정, 삭제, 목록 조회 (CRUD)
//! - **JWT 인증**: HS256 서명 기반 상태 없는 인증
//! - **도메인 규칙**: 이메일 유니크 제약, 필드별 유효성 검증
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **인메모리 저장소**: 단일 RwLock으로 보호되는 맵 기반 저장소
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 인증 게이트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 파싱/검증, 응답 포맷팅
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  App Services   │ ← DTO ↔ 엔티티 변환 (오케스트레이션)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Domain Services │ ← 비즈니스 규칙 (유니크 제약, 존재 검증)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 인메모리 데이터 액세스
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_service_backend::services::users::user_app_service::UserAppService;
//! use user_service_backend::services::auth::AuthService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let user_service = UserAppService::instance();
//! let auth_service = AuthService::instance();
//!
//! // 로그인 후 사용자 생성
//! let login = auth_service.login("admin", "password").await?;
//! let user = user_service.create_user(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
