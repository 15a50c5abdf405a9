//! HTTP route handlers
//!
//! Routes are grouped by resource:
//! - `auth` - OTP issuance and verification
//! - `students` - student registration (bearer-protected)

pub mod auth;
pub mod students;

use std::sync::Arc;

use rc_core::services::{AuthService, EnrollmentService, SmsSender, TokenService};
use rc_core::repositories::StudentStore;

/// Application state that holds shared services
pub struct AppState<S, R>
where
    S: SmsSender,
    R: StudentStore,
{
    pub auth: Arc<AuthService<S>>,
    pub enrollment: Arc<EnrollmentService<R>>,
    pub tokens: Arc<TokenService>,
}
