//! `POST /api/membership-check`

use actix_web::{web, HttpRequest, HttpResponse};

use mc_core::{AttemptRepository, BackofficeClient, MessageKey, VerificationRequest};

use crate::dto::{MembershipCheckRequest, MembershipCheckResponse};
use crate::handlers::{domain_error_response, extract_client_ip, extract_language, report_response};
use crate::i18n::message;

use super::AppState;

/// Check whether a login exists in the backoffice and owns the given phone
///
/// The body is read raw so a misconfigured server answers 500 before the
/// payload is looked at.
///
/// # Request Body
///
/// ```json
/// { "login": "player42", "phone": "0555 123 45 67" }
/// ```
///
/// # Responses
///
/// - `200 OK` - `match`, `mismatch`, `not_found` or `ambiguous`
/// - `400 Bad Request` - Empty login, unusable phone or malformed body
/// - `429 Too Many Requests` - Daily limit for the caller's address reached
/// - `500 Internal Server Error` - Misconfiguration or attempt log failure
/// - `502 Bad Gateway` - Backoffice unreachable or returned an error
pub async fn check_membership<R, B>(
    req: HttpRequest,
    state: web::Data<AppState<R, B>>,
    body: Result<web::Bytes, actix_web::Error>,
) -> HttpResponse
where
    R: AttemptRepository + 'static,
    B: BackofficeClient + 'static,
{
    let lang = extract_language(&req);
    let service = &state.verification_service;

    if let Err(e) = service.ensure_configured() {
        return domain_error_response(&e, lang);
    }

    let parsed = body
        .map_err(|e| e.to_string())
        .and_then(|bytes| MembershipCheckRequest::from_body(&bytes).map_err(|e| e.to_string()));
    let body = match parsed {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(error = %e, path = req.path(), "Rejected request body");
            return HttpResponse::BadRequest().json(MembershipCheckResponse::error(message(
                MessageKey::MalformedBody,
                lang,
            )));
        }
    };

    let request = VerificationRequest::new(body.login, body.phone, extract_client_ip(&req));

    match service.verify(request).await {
        Ok(report) => report_response(&report, lang),
        Err(e) => {
            tracing::warn!(error = %e, "Membership check rejected");
            domain_error_response(&e, lang)
        }
    }
}

/// Any non-POST method on the membership routes
pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header(("Allow", "POST"))
        .json(MembershipCheckResponse::error(message(
            MessageKey::MethodNotAllowed,
            extract_language(&req),
        )))
}
