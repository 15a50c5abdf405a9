//! Credential Store Module
//!
//! Persists student records through a PostgREST-compatible HTTP API
//! (Supabase-style). The client implements the core
//! [`StudentStore`](rc_core::repositories::StudentStore) trait, so the
//! enrollment service never sees an HTTP detail.

pub mod postgrest;

pub use postgrest::{PostgrestStudentStore, StoreConfig};
