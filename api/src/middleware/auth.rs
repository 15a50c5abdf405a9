//! Bearer token middleware for protecting API endpoints.
//!
//! This middleware extracts the JWT from the Authorization header, verifies
//! it with the shared [`TokenService`], and injects the caller's identity
//! into request extensions.
//!
//! A missing or malformed header is rejected with 401 before verification
//! runs; a token that fails verification is rejected with 403. Either way
//! the protected handler never executes, so its collaborators are never
//! called.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use rc_core::errors::TokenError;
use rc_core::services::TokenService;

use crate::handlers::ApiError;

/// Caller identity injected into requests that pass authentication
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Phone number from the token's subject claim
    pub phone: String,
    /// Token ID, for request correlation
    pub jti: String,
}

/// Bearer authentication middleware factory
pub struct RequireAuth {
    tokens: Arc<TokenService>,
}

impl RequireAuth {
    /// Creates the middleware around a shared token service
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthMiddleware {
            service: Rc::new(service),
            tokens: Arc::clone(&self.tokens),
        }))
    }
}

/// Bearer authentication middleware service
pub struct RequireAuthMiddleware<S> {
    service: Rc<S>,
    tokens: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for RequireAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let tokens = Arc::clone(&self.tokens);

        Box::pin(async move {
            let token = match bearer_token(&req) {
                Ok(token) => token,
                Err(err) => {
                    return Ok(req
                        .error_response(ApiError::from(err))
                        .map_into_right_body());
                }
            };

            match tokens.verify(&token) {
                Ok(claims) => {
                    req.extensions_mut().insert(AuthContext {
                        phone: claims.sub,
                        jti: claims.jti,
                    });
                }
                Err(err) => {
                    return Ok(req
                        .error_response(ApiError::from(err))
                        .map_into_right_body());
                }
            }

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Extracts the bearer token from the Authorization header
///
/// Distinguishes a missing header from a header that does not carry
/// `Bearer <token>`; both reject with 401 but different messages.
fn bearer_token(req: &ServiceRequest) -> Result<String, TokenError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or(TokenError::MissingToken)?;
    let value = header.to_str().map_err(|_| TokenError::MalformedHeader)?;

    match value.strip_prefix("Bearer ") {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        Some(_) => Err(TokenError::MissingToken),
        None => Err(TokenError::MalformedHeader),
    }
}

/// Extractor for the authenticated caller
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::from(TokenError::MissingToken).into());

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn request_with_header(value: &str) -> ServiceRequest {
        TestRequest::default()
            .insert_header((AUTHORIZATION, value))
            .to_srv_request()
    }

    #[test]
    fn bearer_token_extracts_the_token() {
        let req = request_with_header("Bearer token-123");
        assert_eq!(bearer_token(&req).unwrap(), "token-123");
    }

    #[test]
    fn missing_header_is_distinct_from_malformed() {
        let req = TestRequest::default().to_srv_request();
        assert!(matches!(bearer_token(&req), Err(TokenError::MissingToken)));

        let req = request_with_header("token-123");
        assert!(matches!(
            bearer_token(&req),
            Err(TokenError::MalformedHeader)
        ));

        let req = request_with_header("Basic dXNlcjpwYXNz");
        assert!(matches!(
            bearer_token(&req),
            Err(TokenError::MalformedHeader)
        ));
    }

    #[test]
    fn bearer_with_empty_token_counts_as_missing() {
        let req = request_with_header("Bearer ");
        assert!(matches!(bearer_token(&req), Err(TokenError::MissingToken)));
    }
}
