use actix_web::{web, HttpResponse};

use crate::dto::students::{AddStudentRequest, AddStudentResponse};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::routes::AppState;

use rc_core::repositories::StudentStore;
use rc_core::services::SmsSender;
use rc_shared::utils::phone::mask_phone_number;

/// Handler for POST /add-student
///
/// Registers a student record in the credential store. Requires a valid
/// bearer token; the auth middleware rejects the request before this
/// handler runs otherwise. Phone and email must both be unused by any
/// existing record.
///
/// Field presence is checked by [`AddStudentRequest::into_new_student`]
/// rather than a validator pass so that the reported field name matches
/// the wire spelling (`className`, not `class_name`).
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "message": "Student added successfully",
///     "data": { "id": "...", "name": "...", "phone": "...", ... }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or empty required field
/// - 409 Conflict: Phone or email already registered
/// - 500 Internal Server Error: Store failure
pub async fn add_student<S, R>(
    state: web::Data<AppState<S, R>>,
    caller: AuthContext,
    request: web::Json<AddStudentRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: SmsSender + 'static,
    R: StudentStore + 'static,
{
    let new = request.into_inner().into_new_student()?;

    log::info!(
        "Processing add-student request from {} for phone: {}",
        mask_phone_number(&caller.phone),
        mask_phone_number(&new.phone)
    );

    let student = state.enrollment.register(new).await?;

    Ok(HttpResponse::Ok().json(AddStudentResponse {
        success: true,
        message: "Student added successfully".to_string(),
        data: student,
    }))
}
