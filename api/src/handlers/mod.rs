pub mod error;
pub mod request;

pub use error::{domain_error_response, report_response, status_for};
pub use request::{extract_client_ip, extract_language};
