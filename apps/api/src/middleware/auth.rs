use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage,
};
use std::future::{ready, Ready};
use std::task::{Context, Poll};

use crate::config::Config;
use application::auth::session;

/// Left in request extensions when a session cookie was present but failed
/// verification. Protected routes report it through the `AuthUser`
/// extractor; open routes ignore it.
pub struct SessionRejection;

pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Decode the session cookie if present. The middleware never
        // rejects on its own: a missing cookie passes through untouched
        // and a bad one only leaves a rejection marker, so sign-in,
        // sign-up and the password-reset routes stay reachable for a
        // browser holding a stale token. The AuthUser extractor turns
        // either case into an error on protected routes.
        if let Some(cookie) = req.request().cookie("token") {
            if let Some(config) = req.app_data::<web::Data<Config>>() {
                match session::verify_token(&config.jwt_secret, cookie.value()) {
                    Ok(user_id) => {
                        req.extensions_mut().insert(user_id);
                    }
                    Err(_) => {
                        req.extensions_mut().insert(SessionRejection);
                    }
                }
            }
        }

        self.service.call(req)
    }
}
