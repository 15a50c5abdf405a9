//! In-process registry of pending verification codes

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use rand::rngs::OsRng;
use rand::Rng;

use crate::domain::entities::otp::{SubmittedOtp, OTP_MAX, OTP_MIN};
use rc_shared::utils::phone::mask_phone_number;

/// Registry of pending verification codes, keyed by phone number
///
/// At most one code is pending per phone: issuing again overwrites the
/// previous entry, and a successful verification consumes it. Entries
/// never expire on their own; the registry is only suitable for a
/// single short-lived process.
///
/// The whole map sits behind one mutex. Each operation takes the lock
/// for its full read-modify-write, so an `issue` and a `verify` racing
/// on the same phone cannot lose an update.
pub struct OtpRegistry {
    pending: Mutex<HashMap<String, u32>>,
}

impl OtpRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Generate and store a code for a phone number
    ///
    /// Draws a uniformly random 6-digit code from the OS CSPRNG, stores
    /// it under `phone` (replacing any pending code for that phone), and
    /// returns it for delivery. There is no limit on how often a phone
    /// can request a code.
    pub fn issue(&self, phone: &str) -> u32 {
        let code = OsRng.gen_range(OTP_MIN..=OTP_MAX);

        let mut pending = self.lock();
        let replaced = pending.insert(phone.to_string(), code).is_some();

        tracing::info!(
            phone = %mask_phone_number(phone),
            replaced = replaced,
            event = "otp_issued",
            "Issued verification code"
        );

        code
    }

    /// Check a submitted code against the pending entry for a phone
    ///
    /// On a match the entry is removed under the same lock acquisition,
    /// so the code verifies exactly once. On a mismatch the entry is
    /// left untouched. A missing entry and a wrong code are
    /// indistinguishable to the caller; both return `false`.
    pub fn verify(&self, phone: &str, submitted: &SubmittedOtp) -> bool {
        let Some(code) = submitted.as_code() else {
            tracing::warn!(
                phone = %mask_phone_number(phone),
                event = "otp_rejected",
                reason = "not_numeric",
                "Rejected non-numeric verification code"
            );
            return false;
        };

        let mut pending = self.lock();
        match pending.get(phone) {
            Some(&expected) if expected == code => {
                pending.remove(phone);
                tracing::info!(
                    phone = %mask_phone_number(phone),
                    event = "otp_verified",
                    "Verification code accepted"
                );
                true
            }
            _ => {
                tracing::warn!(
                    phone = %mask_phone_number(phone),
                    event = "otp_rejected",
                    reason = "mismatch_or_absent",
                    "Rejected verification code"
                );
                false
            }
        }
    }

    /// Whether a code is currently pending for a phone number
    pub fn has_pending(&self, phone: &str) -> bool {
        self.lock().contains_key(phone)
    }

    // A panic elsewhere cannot leave the map half-mutated (inserts and
    // removes are single HashMap calls), so a poisoned lock is safe to
    // recover.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, u32>> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for OtpRegistry {
    fn default() -> Self {
        Self::new()
    }
}
