pub mod membership;

pub use membership::AppState;
