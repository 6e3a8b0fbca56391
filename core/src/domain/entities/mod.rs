//! Domain entities representing core business objects.

pub mod verification_attempt;

#[cfg(test)]
mod tests;

pub use verification_attempt::{AttemptOutcome, NewVerificationAttempt, VerificationAttempt};
