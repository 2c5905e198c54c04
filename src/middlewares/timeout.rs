//! 요청 타임아웃 미들웨어
//!
//! 모든 요청의 처리 시간을 제한합니다. 다운스트림 처리와 타이머가
//! 경쟁하며, 타이머가 먼저 끝나면 클라이언트는 408 엔벨로프 응답을
//! 받습니다. 이미 진행 중이던 작업의 부수 효과(저장소 변경 등)는
//! 되돌리지 않습니다 — 타임아웃 응답 이후에도 저장은 완료될 수 있습니다.

use std::future::{Ready, ready};
use std::rc::Rc;
use std::time::Duration;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{Error, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::config::ServerConfig;
use crate::domain::dto::response::ResponseModel;

/// 요청 타임아웃 미들웨어
pub struct TimeoutMiddleware {
    timeout: Duration,
}

impl TimeoutMiddleware {
    /// 지정한 제한 시간으로 미들웨어를 생성합니다.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// 설정값(`REQUEST_TIMEOUT_SECONDS`, 기본 10초)으로 미들웨어를 생성합니다.
    pub fn from_config() -> Self {
        Self::new(Duration::from_secs(ServerConfig::request_timeout_secs()))
    }
}

impl<S, B> Transform<S, ServiceRequest> for TimeoutMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = TimeoutMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TimeoutMiddlewareService {
            service: Rc::new(service),
            timeout: self.timeout,
        }))
    }
}

/// 실제 타임아웃 경쟁을 수행하는 서비스
pub struct TimeoutMiddlewareService<S> {
    service: Rc<S>,
    timeout: Duration,
}

impl<S, B> Service<ServiceRequest> for TimeoutMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let timeout = self.timeout;

        // 타임아웃 응답 생성에 필요하므로 요청 핸들을 미리 복제해 둔다
        let http_req = req.request().clone();

        Box::pin(async move {
            match actix_web::rt::time::timeout(timeout, service.call(req)).await {
                Ok(result) => Ok(result?.map_into_left_body()),
                Err(_) => {
                    log::warn!("요청 시간 초과: {} {}", http_req.method(), http_req.path());

                    let response = HttpResponse::RequestTimeout().json(ResponseModel::error(
                        "요청 시간이 초과되었습니다. 잠시 후 다시 시도해주세요",
                    ));
                    Ok(ServiceResponse::new(http_req, response).map_into_right_body())
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};

    async fn slow_handler() -> HttpResponse {
        actix_web::rt::time::sleep(Duration::from_millis(300)).await;
        HttpResponse::Ok().finish()
    }

    async fn fast_handler() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn test_slow_request_times_out_with_408() {
        let app = test::init_service(
            App::new()
                .wrap(TimeoutMiddleware::new(Duration::from_millis(50)))
                .route("/slow", web::get().to(slow_handler)),
        )
        .await;

        let req = test::TestRequest::get().uri("/slow").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::REQUEST_TIMEOUT);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_fast_request_passes_through() {
        let app = test::init_service(
            App::new()
                .wrap(TimeoutMiddleware::new(Duration::from_millis(50)))
                .route("/fast", web::get().to(fast_handler)),
        )
        .await;

        let req = test::TestRequest::get().uri("/fast").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }
}
