//! Tests for the OTP authentication flow

use std::sync::Arc;

use crate::domain::entities::otp::{SubmittedOtp, CODE_LENGTH};
use crate::errors::{AuthError, DomainError};
use crate::services::auth::{AuthService, MockSmsSender};
use crate::services::token::TokenService;

const PHONE: &str = "+14155552671";

fn service_with(sms: Arc<MockSmsSender>) -> AuthService<MockSmsSender> {
    let tokens = Arc::new(TokenService::new("test-secret-key"));
    AuthService::new(sms, tokens)
}

fn submitted(code: &str) -> SubmittedOtp {
    SubmittedOtp::Text(code.to_string())
}

#[tokio::test]
async fn send_code_delivers_a_six_digit_code() {
    let sms = Arc::new(MockSmsSender::new());
    let service = service_with(sms.clone());

    let message_id = service.send_code(PHONE).await.unwrap();
    assert!(message_id.starts_with("mock-sms-"));

    let code = sms.sent_code(PHONE).unwrap();
    assert_eq!(code.len(), CODE_LENGTH);
    assert!(code.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(sms.send_count(), 1);
}

#[tokio::test]
async fn delivery_failure_surfaces_and_keeps_code_pending() {
    let sms = Arc::new(MockSmsSender::failing());
    let service = service_with(sms.clone());

    let result = service.send_code(PHONE).await;
    assert!(matches!(result, Err(DomainError::Delivery { .. })));

    // Exactly one attempt; there is no retry.
    assert_eq!(sms.send_count(), 1);

    // The code was registered before the delivery attempt and survives
    // the failure: it still trades for a token.
    let code = sms.sent_code(PHONE).unwrap();
    assert!(service.verify_code(PHONE, &submitted(&code)).await.is_ok());
}

#[tokio::test]
async fn correct_code_trades_for_a_token() {
    let sms = Arc::new(MockSmsSender::new());
    let service = service_with(sms.clone());

    service.send_code(PHONE).await.unwrap();
    let code = sms.sent_code(PHONE).unwrap();

    let token = service.verify_code(PHONE, &submitted(&code)).await.unwrap();

    let claims = TokenService::new("test-secret-key").verify(&token).unwrap();
    assert_eq!(claims.sub, PHONE);
}

#[tokio::test]
async fn wrong_code_is_rejected_and_correct_code_still_works() {
    let sms = Arc::new(MockSmsSender::new());
    let service = service_with(sms.clone());

    service.send_code(PHONE).await.unwrap();
    let code = sms.sent_code(PHONE).unwrap();
    let wrong = if code == "999999" { "100000" } else { "999999" };

    let result = service.verify_code(PHONE, &submitted(wrong)).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCode))
    ));

    assert!(service.verify_code(PHONE, &submitted(&code)).await.is_ok());
}

#[tokio::test]
async fn code_is_consumed_by_successful_verification() {
    let sms = Arc::new(MockSmsSender::new());
    let service = service_with(sms.clone());

    service.send_code(PHONE).await.unwrap();
    let code = sms.sent_code(PHONE).unwrap();

    assert!(service.verify_code(PHONE, &submitted(&code)).await.is_ok());

    let replay = service.verify_code(PHONE, &submitted(&code)).await;
    assert!(matches!(
        replay,
        Err(DomainError::Auth(AuthError::InvalidCode))
    ));
}

#[tokio::test]
async fn verify_without_pending_code_is_rejected() {
    let service = service_with(Arc::new(MockSmsSender::new()));

    let result = service.verify_code(PHONE, &submitted("123456")).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCode))
    ));
}

#[tokio::test]
async fn resend_invalidates_the_previous_code() {
    let sms = Arc::new(MockSmsSender::new());
    let service = service_with(sms.clone());

    service.send_code(PHONE).await.unwrap();
    let first = sms.sent_code(PHONE).unwrap();

    service.send_code(PHONE).await.unwrap();
    let second = sms.sent_code(PHONE).unwrap();

    if first != second {
        assert!(matches!(
            service.verify_code(PHONE, &submitted(&first)).await,
            Err(DomainError::Auth(AuthError::InvalidCode))
        ));
    }
    assert!(service.verify_code(PHONE, &submitted(&second)).await.is_ok());
}

#[tokio::test]
async fn numeric_submission_matches_delivered_code() {
    let sms = Arc::new(MockSmsSender::new());
    let service = service_with(sms.clone());

    service.send_code(PHONE).await.unwrap();
    let code: u64 = sms.sent_code(PHONE).unwrap().parse().unwrap();

    let token = service
        .verify_code(PHONE, &SubmittedOtp::Digits(code))
        .await;
    assert!(token.is_ok());
}
