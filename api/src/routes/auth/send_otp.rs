use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{SendOtpRequest, SendOtpResponse};
use crate::dto::first_invalid_field;
use crate::handlers::ApiError;
use crate::routes::AppState;

use rc_core::repositories::StudentStore;
use rc_core::services::SmsSender;
use rc_shared::utils::phone::mask_phone_number;

/// Handler for POST /send-otp
///
/// Generates a six-digit verification code for the phone number and
/// delivers it via SMS. Re-sending for the same phone replaces any code
/// still pending for it.
///
/// # Request Body
///
/// ```json
/// {
///     "phone": "+14155552671"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "message": "OTP sent successfully"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or empty phone
/// - 500 Internal Server Error: SMS delivery failure
pub async fn send_otp<S, R>(
    state: web::Data<AppState<S, R>>,
    request: web::Json<SendOtpRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: SmsSender + 'static,
    R: StudentStore + 'static,
{
    request
        .validate()
        .map_err(|errors| first_invalid_field(&errors))?;
    let phone = request.into_inner().into_phone()?;

    log::info!(
        "Processing send-otp request for phone: {}",
        mask_phone_number(&phone)
    );

    state.auth.send_code(&phone).await?;

    Ok(HttpResponse::Ok().json(SendOtpResponse {
        success: true,
        message: "OTP sent successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_rejects_a_missing_phone() {
        let request = SendOtpRequest { phone: None };
        assert!(request.validate().is_err());

        let request = SendOtpRequest {
            phone: Some(String::new()),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn validation_accepts_any_non_empty_phone() {
        let request = SendOtpRequest {
            phone: Some("+14155552671".to_string()),
        };
        assert!(request.validate().is_ok());
    }
}
