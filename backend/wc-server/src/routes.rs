use crate::{
    ApiError, AppState, confirm_payment, connectivity_check, create_message,
    create_payment_intent, create_private_message, create_upi_contribution, create_wedding,
    get_contribution_total, get_honeymoon_fund, get_public_wedding, get_share_qr,
    get_shared_honeymoon_fund, get_shared_wedding, get_wedding, get_wedding_by_username,
    get_wedding_section_by_username, health, list_contributions, list_messages,
    list_messages_by_shareable_id, list_private_messages, list_public_messages, list_rsvps,
    list_rsvps_by_shareable_id, login, logout, profile, register, submit_rsvp, update_faq,
    update_gallery, update_honeymoon_fund, update_party, update_schedule, update_story,
    update_theme, update_wedding,
};

use axum::{
    Router,
    http::{HeaderValue, Uri},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let settings = state.settings.clone();

    let mut router = Router::new()
        .nest("/api", api_routes())
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness));

    // Built UI for everything else, with client-side routing
    if let Some(ref dir) = settings.static_dir {
        let index = dir.join("index.html");
        router = router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    router
        .with_state(state)
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(cors_layer(&settings.cors_origins))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Accounts
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/profile", get(profile))
        // Wedding pages
        .route(
            "/wedding",
            get(get_wedding).post(create_wedding).put(update_wedding),
        )
        .route("/wedding/public/{id}", get(get_public_wedding))
        .route("/wedding/share/{shareable_id}", get(get_shared_wedding))
        .route("/wedding/share/{shareable_id}/qr", get(get_share_qr))
        .route("/wedding/user/{username}", get(get_wedding_by_username))
        .route(
            "/wedding/user/{username}/{section}",
            get(get_wedding_section_by_username),
        )
        // Section updates
        .route("/wedding/party", put(update_party))
        .route("/wedding/faq", put(update_faq))
        .route("/wedding/story", put(update_story))
        .route("/wedding/schedule", put(update_schedule))
        .route("/wedding/gallery", put(update_gallery))
        .route("/wedding/theme", put(update_theme))
        // Honeymoon fund
        .route("/wedding/registry", put(update_honeymoon_fund))
        .route("/wedding/registry/{wedding_id}", get(get_honeymoon_fund))
        .route(
            "/wedding/registry/share/{shareable_id}",
            get(get_shared_honeymoon_fund),
        )
        // RSVPs
        .route("/rsvp", post(submit_rsvp))
        .route("/rsvp/{wedding_id}", get(list_rsvps))
        .route(
            "/rsvp/shareable/{shareable_id}",
            get(list_rsvps_by_shareable_id),
        )
        // Guestbook
        .route("/guestbook", post(create_message))
        .route("/guestbook/private", post(create_private_message))
        .route("/guestbook/{wedding_id}", get(list_messages))
        .route("/guestbook/public/messages", get(list_public_messages))
        .route("/guestbook/private/{wedding_id}", get(list_private_messages))
        .route(
            "/guestbook/shareable/{shareable_id}",
            get(list_messages_by_shareable_id),
        )
        // Payments
        .route("/payment/create-intent", post(create_payment_intent))
        .route("/payment/confirm", post(confirm_payment))
        .route("/payment/upi-contribution", post(create_upi_contribution))
        .route(
            "/payment/contributions/{wedding_id}",
            get(list_contributions),
        )
        .route("/payment/total/{wedding_id}", get(get_contribution_total))
        // Connectivity probe
        .route("/test", get(connectivity_check))
        .fallback(api_not_found)
}

/// Unknown API paths get a JSON 404 instead of the UI's index page
async fn api_not_found(uri: Uri) -> Response {
    ApiError::not_found(format!("No API route for {}", uri.path())).into_response()
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}
