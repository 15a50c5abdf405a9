//! Application factory
//!
//! This module provides the factory for creating the Actix-web
//! application with its middleware stack, routes, and shared state.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, Error, HttpResponse};

use crate::handlers::ApiError;
use crate::middleware::{cors::create_cors, RequireAuth};
use crate::routes::auth::{send_otp::send_otp, verify_otp::verify_otp};
use crate::routes::students::add_student::add_student;
use crate::routes::AppState;

use rc_core::errors::ValidationError;
use rc_core::repositories::StudentStore;
use rc_core::services::SmsSender;

/// Create and configure the application with all dependencies
///
/// Protected routes take the token service from the shared state, so a
/// token minted by `/verify-otp` authorizes `/add-student` on the same
/// deployment and nowhere else.
pub fn create_app<S, R>(
    app_state: web::Data<AppState<S, R>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    S: SmsSender + 'static,
    R: StudentStore + 'static,
{
    let tokens = Arc::clone(&app_state.tokens);

    // Malformed JSON gets the same envelope as every other failure
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::from(ValidationError::InvalidBody {
            reason: err.to_string(),
        })
        .into()
    });

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(json_config)
        // Add middleware (logging innermost, CORS outermost)
        .wrap(Logger::default())
        .wrap(create_cors())
        // Liveness / index endpoint
        .route("/", web::get().to(index))
        // Auth routes
        .route("/send-otp", web::post().to(send_otp::<S, R>))
        .route("/verify-otp", web::post().to(verify_otp::<S, R>))
        // Student routes (bearer-protected)
        .route(
            "/add-student",
            web::post()
                .to(add_student::<S, R>)
                .wrap(RequireAuth::new(tokens)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Index endpoint handler
async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "RollCall API is running",
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "success": false,
        "error": "The requested resource was not found",
    }))
}
