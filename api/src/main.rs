use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{error, info};

use rc_api::app::create_app;
use rc_api::config::AppConfig;
use rc_api::routes::AppState;

use rc_core::services::{AuthService, EnrollmentService, TokenService};
use rc_infra::sms::TwilioSmsSender;
use rc_infra::store::PostgrestStudentStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting RollCall API server");

    // Load configuration; a missing variable is fatal
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // External collaborators
    let sms = match TwilioSmsSender::new(config.sms.clone()) {
        Ok(sms) => Arc::new(sms),
        Err(e) => {
            error!("Failed to initialize SMS client: {}", e);
            std::process::exit(1);
        }
    };
    let store = match PostgrestStudentStore::new(config.store.clone()) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Failed to initialize store client: {}", e);
            std::process::exit(1);
        }
    };

    // Domain services
    let tokens = Arc::new(TokenService::new(&config.auth.jwt_secret));
    let auth = Arc::new(AuthService::new(sms, Arc::clone(&tokens)));
    let enrollment = Arc::new(EnrollmentService::new(store));

    let state = web::Data::new(AppState {
        auth,
        enrollment,
        tokens,
    });

    let bind_address = config.server.bind_address();
    info!("Server listening on {}", bind_address);

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
