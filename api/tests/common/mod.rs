//! Shared fixtures for the API integration tests
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;

use rc_api::routes::AppState;
use rc_core::domain::entities::token::{Claims, JWT_ISSUER};
use rc_core::repositories::MockStudentStore;
use rc_core::services::{AuthService, EnrollmentService, MockSmsSender, TokenService};

/// Signing secret shared by every test app in this suite
pub const JWT_SECRET: &str = "integration-test-secret";

/// Handles onto the mocks and state backing a test app
///
/// The `Arc`s here alias the ones inside the services, so tests can
/// observe mock activity (delivered codes, store call counts) after
/// driving the app through HTTP.
pub struct TestContext {
    pub sms: Arc<MockSmsSender>,
    pub store: Arc<MockStudentStore>,
    pub tokens: Arc<TokenService>,
    pub state: web::Data<AppState<MockSmsSender, MockStudentStore>>,
}

/// Context whose mocks all succeed
pub fn test_context() -> TestContext {
    build_context(MockSmsSender::new(), MockStudentStore::new())
}

/// Context whose SMS provider rejects every send
pub fn failing_sms_context() -> TestContext {
    build_context(MockSmsSender::failing(), MockStudentStore::new())
}

/// Context whose store fails every operation
pub fn failing_store_context() -> TestContext {
    build_context(MockSmsSender::new(), MockStudentStore::failing())
}

pub fn build_context(sms: MockSmsSender, store: MockStudentStore) -> TestContext {
    let sms = Arc::new(sms);
    let store = Arc::new(store);
    let tokens = Arc::new(TokenService::new(JWT_SECRET));
    let auth = Arc::new(AuthService::new(Arc::clone(&sms), Arc::clone(&tokens)));
    let enrollment = Arc::new(EnrollmentService::new(Arc::clone(&store)));

    let state = web::Data::new(AppState {
        auth,
        enrollment,
        tokens: Arc::clone(&tokens),
    });

    TestContext {
        sms,
        store,
        tokens,
        state,
    }
}

/// Encode claims with an arbitrary secret, bypassing the token service
pub fn encode_token(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// A correctly signed token whose validity window closed two hours ago
///
/// Issued 26 hours in the past so the expiry also clears the decoder's
/// default leeway.
pub fn expired_token(phone: &str) -> String {
    let issued = Utc::now() - Duration::hours(26);
    let claims = Claims {
        sub: phone.to_string(),
        iat: issued.timestamp(),
        exp: (issued + Duration::hours(24)).timestamp(),
        iss: JWT_ISSUER.to_string(),
        jti: Uuid::new_v4().to_string(),
    };
    encode_token(&claims, JWT_SECRET)
}

/// A current token signed with the wrong secret
pub fn foreign_token(phone: &str) -> String {
    encode_token(&Claims::new(phone), "some-other-secret")
}
