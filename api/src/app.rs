//! Application factory

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use mc_core::{AttemptRepository, BackofficeClient};
use mc_shared::{CorsConfig, Environment};

use crate::middleware::{create_cors, SecurityMiddleware};
use crate::routes::membership::{check_membership, method_not_allowed};
use crate::routes::AppState;

/// Public path of the membership check
pub const MEMBERSHIP_CHECK_PATH: &str = "/api/membership-check";
/// Path the support-desk frontend was deployed against
pub const LEGACY_FUNCTION_PATH: &str = "/.netlify/functions/membership-check";

/// HTTP-level settings the app factory needs
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub environment: Environment,
    pub cors: CorsConfig,
    pub max_payload_size: usize,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            cors: CorsConfig::default(),
            max_payload_size: 16 * 1024,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<R, B>(
    app_state: web::Data<AppState<R, B>>,
    settings: &HttpSettings,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: AttemptRepository + 'static,
    B: BackofficeClient + 'static,
{
    let payload_config = web::PayloadConfig::new(settings.max_payload_size);

    App::new()
        .app_data(app_state)
        .app_data(payload_config)
        // Outermost last: tracing wraps CORS which wraps the security headers
        .wrap(SecurityMiddleware::new(settings.environment))
        .wrap(create_cors(&settings.cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::resource([MEMBERSHIP_CHECK_PATH, LEGACY_FUNCTION_PATH])
                .route(web::post().to(check_membership::<R, B>))
                .default_service(web::route().to(method_not_allowed)),
        )
        .default_service(web::route().to(not_found))
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "membership-check",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "status": "error",
        "message": "not_found"
    }))
}
