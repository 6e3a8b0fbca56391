//! Conversion of service results into `{status, message}` responses.

use actix_web::{http::StatusCode, HttpResponse};

use mc_core::{DomainError, MessageKey, Severity, VerificationReport};

use crate::dto::MembershipCheckResponse;
use crate::i18n::{message, Language};

/// HTTP status for a report severity
pub fn status_for(severity: Severity) -> StatusCode {
    match severity {
        Severity::Ok => StatusCode::OK,
        Severity::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        Severity::Upstream => StatusCode::BAD_GATEWAY,
        Severity::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn report_response(report: &VerificationReport, lang: Language) -> HttpResponse {
    HttpResponse::build(status_for(report.severity)).json(MembershipCheckResponse::new(
        report.status.as_str(),
        message(report.message_key, lang),
    ))
}

/// Errors raised before an attempt is recorded
pub fn domain_error_response(error: &DomainError, lang: Language) -> HttpResponse {
    let (status, key) = match error {
        DomainError::Validation { .. } => (StatusCode::BAD_REQUEST, MessageKey::InvalidInput),
        DomainError::Configuration { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, MessageKey::Misconfigured)
        }
        DomainError::Repository { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, MessageKey::InternalError)
        }
    };

    HttpResponse::build(status).json(MembershipCheckResponse::error(message(key, lang)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_core::AttemptOutcome;

    #[test]
    fn test_severity_mapping() {
        assert_eq!(status_for(Severity::Ok), StatusCode::OK);
        assert_eq!(status_for(Severity::RateLimited), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(status_for(Severity::Upstream), StatusCode::BAD_GATEWAY);
        assert_eq!(status_for(Severity::Internal), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_report_response_status() {
        let response = report_response(
            &VerificationReport::upstream_failure(AttemptOutcome::ErrorFlag),
            Language::English,
        );
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response = report_response(&VerificationReport::not_found(), Language::Turkish);
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_domain_error_statuses() {
        let lang = Language::Turkish;
        assert_eq!(
            domain_error_response(&DomainError::validation("login is required"), lang).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            domain_error_response(
                &DomainError::Configuration {
                    message: "missing key".to_string()
                },
                lang
            )
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            domain_error_response(&DomainError::repository("pool timed out"), lang).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
