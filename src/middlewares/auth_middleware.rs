//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 호출자 정보를 추출합니다.
//! 검증은 핸들러와 저장소 접근보다 먼저 수행됩니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 보호된 스코프에 적용하는 인증 미들웨어
///
/// 토큰 검증은 `web::Data<AppState>`에 등록된 `TokenService`로 수행합니다.
///
/// ```rust,ignore
/// web::scope("/user")
///     .wrap(AuthMiddleware)
///     .route("", web::get().to(list_users))
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
