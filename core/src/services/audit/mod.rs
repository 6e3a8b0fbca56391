//! Attempt logging: one append-only row per verification outcome.

mod service;

pub use service::AttemptLogger;

#[cfg(test)]
mod tests;
