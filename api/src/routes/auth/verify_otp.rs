use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{VerifyOtpRequest, VerifyOtpResponse};
use crate::dto::first_invalid_field;
use crate::handlers::ApiError;
use crate::routes::AppState;

use rc_core::repositories::StudentStore;
use rc_core::services::SmsSender;
use rc_shared::utils::phone::mask_phone_number;

/// Handler for POST /verify-otp
///
/// Checks the submitted code against the one pending for the phone. A
/// match consumes the code and returns a signed bearer token good for
/// 24 hours. The code may arrive as a JSON number or a string; both
/// compare against the same generated value.
///
/// # Request Body
///
/// ```json
/// {
///     "phone": "+14155552671",
///     "otp": 123456
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "message": "OTP verified successfully",
///     "token": "eyJhbGciOiJIUzI1NiIs..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing phone or otp
/// - 401 Unauthorized: Wrong code, or no code pending for the phone
/// - 500 Internal Server Error: Token generation failure
pub async fn verify_otp<S, R>(
    state: web::Data<AppState<S, R>>,
    request: web::Json<VerifyOtpRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: SmsSender + 'static,
    R: StudentStore + 'static,
{
    request
        .validate()
        .map_err(|errors| first_invalid_field(&errors))?;
    let (phone, submitted) = request.into_inner().into_parts()?;

    log::info!(
        "Processing verify-otp request for phone: {}",
        mask_phone_number(&phone)
    );

    let token = state.auth.verify_code(&phone, &submitted).await?;

    Ok(HttpResponse::Ok().json(VerifyOtpResponse {
        success: true,
        message: "OTP verified successfully".to_string(),
        token,
    }))
}
