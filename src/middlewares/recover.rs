//! 패닉 복구 미들웨어
//!
//! 요청 처리 중 발생한 패닉을 포착하여 애플리케이션이 죽는 대신
//! 일반 500 엔벨로프 응답을 반환합니다. 패닉 내용은 로그에 기록됩니다.

use std::future::{Ready, ready};
use std::panic::AssertUnwindSafe;
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{Error, HttpResponse};
use futures_util::FutureExt;
use futures_util::future::LocalBoxFuture;

use crate::domain::dto::response::ResponseModel;

/// 패닉 복구 미들웨어
pub struct RecoverMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RecoverMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RecoverMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RecoverMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

/// 실제 패닉 포착을 수행하는 서비스
pub struct RecoverMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RecoverMiddlewareService<S>
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

        // 패닉 시 응답 생성에 필요하므로 요청 핸들을 미리 복제해 둔다
        let http_req = req.request().clone();

        Box::pin(async move {
            match AssertUnwindSafe(service.call(req)).catch_unwind().await {
                Ok(result) => Ok(result?.map_into_left_body()),
                Err(panic) => {
                    let detail = panic
                        .downcast_ref::<&str>()
                        .map(|s| (*s).to_string())
                        .or_else(|| panic.downcast_ref::<String>().cloned())
                        .unwrap_or_else(|| "unknown panic".to_string());

                    log::error!("패닉 복구: {}", detail);

                    let response = HttpResponse::InternalServerError().json(ResponseModel::error(
                        "예상치 못한 서버 오류가 발생했습니다. 잠시 후 다시 시도해주세요",
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

    async fn panicking_handler() -> HttpResponse {
        panic!("handler blew up");
    }

    #[actix_web::test]
    async fn test_panic_is_converted_to_generic_500() {
        let app = test::init_service(
            App::new()
                .wrap(RecoverMiddleware)
                .route("/boom", web::get().to(panicking_handler)),
        )
        .await;

        let req = test::TestRequest::get().uri("/boom").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["success"], false);
        // 내부 패닉 메시지가 응답에 노출되지 않아야 한다
        assert!(!body["message"].as_str().unwrap().contains("blew up"));
    }
}
