//! Verification orchestrator: the membership-check request pipeline.
//!
//! `received -> validated -> rate-checked -> account-resolved ->
//! phone-compared -> logged -> responded`, with an early exit (and exactly
//! one attempt record) at every terminal branch past validation.

mod service;


pub use service::VerificationService;
