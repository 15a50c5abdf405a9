//! CORS configuration

use actix_cors::Cors;
use actix_web::http::header;

/// Builds the CORS policy for the API.
///
/// The API is consumed by browser clients served from arbitrary origins,
/// so the policy is permissive: any origin, the methods the routes
/// actually expose, and the headers a JSON client sends.
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
