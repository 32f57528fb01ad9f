//! Bearer token middleware for protecting API endpoints.
//!
//! [`BearerAuth`] is generic over the claim set, so the same middleware guards
//! the admin scope (with an [`AdminTokenScheme`](resume_core::AdminTokenScheme))
//! and the visitor scope (with a [`VisitorTokenScheme`](resume_core::VisitorTokenScheme)).
//! Verified claims are stored in the request extensions, where the
//! [`AdminContext`], [`RequireAdmin`] and [`VisitorContext`] extractors pick
//! them up.
//!
//! A rejected request never reaches the handler; the middleware answers with
//! the error envelope itself.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderMap, AUTHORIZATION},
    Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use resume_core::{
    errors::{AuthError, TokenError},
    services::{SchemeClaims, TokenScheme},
    AdminClaims, VisitorClaims,
};

use crate::handlers::error::ApiError;

/// Bearer authentication middleware factory
pub struct BearerAuth<C: SchemeClaims> {
    scheme: Arc<TokenScheme<C>>,
}

impl<C: SchemeClaims> BearerAuth<C> {
    pub fn new(scheme: Arc<TokenScheme<C>>) -> Self {
        Self { scheme }
    }
}

impl<C: SchemeClaims> Clone for BearerAuth<C> {
    fn clone(&self) -> Self {
        Self {
            scheme: Arc::clone(&self.scheme),
        }
    }
}

impl<S, B, C> Transform<S, ServiceRequest> for BearerAuth<C>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    C: SchemeClaims,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S, C>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
            scheme: Arc::clone(&self.scheme),
        }))
    }
}

/// Bearer authentication middleware service
pub struct BearerAuthMiddleware<S, C: SchemeClaims> {
    service: Rc<S>,
    scheme: Arc<TokenScheme<C>>,
}

impl<S, B, C> Service<ServiceRequest> for BearerAuthMiddleware<S, C>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    C: SchemeClaims,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let scheme = Arc::clone(&self.scheme);

        Box::pin(async move {
            let claims = match extract_bearer_token(req.headers())
                .map_err(ApiError::from)
                .and_then(|token| scheme.verify(&token).map_err(ApiError::from))
            {
                Ok(claims) => claims,
                Err(err) => {
                    log::debug!("{} auth rejected {}: {}", C::SCHEME, req.path(), err);
                    let response = err.error_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            req.extensions_mut().insert(claims);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, TokenError> {
    let value = headers.get(AUTHORIZATION).ok_or(TokenError::MissingToken)?;

    value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or(TokenError::MalformedHeader)
}

fn claims_from<C: SchemeClaims>(req: &HttpRequest) -> Result<C, ApiError> {
    req.extensions()
        .get::<C>()
        .cloned()
        .ok_or_else(|| ApiError::from(TokenError::MissingToken))
}

/// Administrator identity taken from a verified admin token
#[derive(Debug, Clone)]
pub struct AdminContext {
    pub user_id: i64,
    pub username: String,
    pub role: String,
}

impl From<AdminClaims> for AdminContext {
    fn from(claims: AdminClaims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username,
            role: claims.role,
        }
    }
}

impl FromRequest for AdminContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(claims_from::<AdminClaims>(req).map(Self::from))
    }
}

/// An [`AdminContext`] whose role is `admin`; any other role is `Forbidden`
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AdminContext);

impl FromRequest for RequireAdmin {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = claims_from::<AdminClaims>(req).and_then(|claims| {
            if claims.is_admin() {
                Ok(Self(AdminContext::from(claims)))
            } else {
                log::warn!(
                    "User {} with role '{}' denied {}",
                    claims.username,
                    claims.role,
                    req.path()
                );
                Err(ApiError::from(AuthError::InsufficientPermissions))
            }
        });
        ready(result)
    }
}

/// Access key bound into a verified visitor token
#[derive(Debug, Clone)]
pub struct VisitorContext {
    pub access_key: String,
}

impl FromRequest for VisitorContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(claims_from::<VisitorClaims>(req).map(|claims| Self {
            access_key: claims.access_key,
        }))
    }
}
