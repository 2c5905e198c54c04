//! 사용자 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 인메모리 저장소를 구성하고 JWT 인증 기반의 REST API를 제공합니다.

use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use user_service_backend::config::{AdminCredentialConfig, Environment, ServerConfig};
use user_service_backend::core::registry::ServiceLocator;
use user_service_backend::middlewares::{RecoverMiddleware, TimeoutMiddleware};
use user_service_backend::repositories::credentials::credential_repo::CredentialRepository;
use user_service_backend::repositories::users::sample_data;
use user_service_backend::repositories::users::user_repo::UserRepository;
use user_service_backend::routes::configure_all_routes;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 관리 서비스 시작중...");

    // 인메모리 저장소 초기화
    let (user_repo, credential_repo) = initialize_data_stores();

    // ServiceLocator에 인프라 컴포넌트 등록
    ServiceLocator::set(user_repo);
    ServiceLocator::set(credential_repo);

    // 모든 서비스 초기화
    ServiceLocator::initialize_all()
        .await
        .expect("서비스 초기화 실패");

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, 요청 타임아웃, 패닉 복구, Rate Limiting
/// 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API 엔드포인트: http://{}/api/v1", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .unwrap();

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    let request_timeout = Duration::from_secs(ServerConfig::request_timeout_secs());
    info!("⏱️ 요청 타임아웃: {}초", request_timeout.as_secs());

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어
            .wrap(Governor::new(&governor_conf))
            // 공통 미들웨어들
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 요청 타임아웃 + 패닉 복구 (핸들러를 가장 가깝게 감싼다)
            .wrap(TimeoutMiddleware::new(request_timeout))
            .wrap(RecoverMiddleware)
            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4) // 워커 스레드 수
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 프로세스 전역 로거는 기동 시 한 번만 설치되며 이후 교체되지 않습니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 인메모리 저장소들을 초기화합니다
///
/// 사용자 저장소와 자격증명 저장소를 구성합니다. 개발 환경에서는
/// 사용자 저장소에 샘플 데이터를 시드하고, 모든 환경에서 설정값 기반의
/// 관리자 자격증명 하나를 등록합니다.
///
/// # Panics
///
/// * 관리자 자격증명 해싱/등록 실패 시
fn initialize_data_stores() -> (Arc<UserRepository>, Arc<CredentialRepository>) {
    info!("📦 인메모리 저장소 구성 중...");

    // 사용자 저장소 초기화
    let user_repo = Arc::new(UserRepository::new());

    if Environment::current() == Environment::Development {
        match sample_data::sample_users() {
            Ok(users) => {
                let count = users.len();
                user_repo.seed(users).expect("샘플 데이터 시드 실패");
                info!("✅ 샘플 사용자 {}명 시드 완료", count);
            }
            Err(e) => error!("샘플 데이터 초기화 실패: {}", e),
        }
    }

    // 자격증명 저장소 초기화 (관리자 계정 시드)
    let credential_repo = Arc::new(CredentialRepository::new());
    credential_repo
        .register(
            &AdminCredentialConfig::username(),
            &AdminCredentialConfig::password(),
            1,
            true,
        )
        .expect("관리자 자격증명 등록 실패");

    info!("✅ 관리자 자격증명 등록 완료: {}", AdminCredentialConfig::username());

    (user_repo, credential_repo)
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드와의 통신을 위한 CORS(Cross-Origin Resource Sharing) 설정을
/// 구성합니다. 개발환경에서 로컬호스트 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // 자격 증명(쿠키 등) 지원
        .supports_credentials()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// # Environment Variables
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
