use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::ads::create_ad::create_ad;
use super::handlers::ads::delete_ad::delete_ad;
use super::handlers::ads::get_ad::get_ad;
use super::handlers::ads::update_ad::update_ad;
use super::handlers::delete_profile::delete_profile;
use super::handlers::get_profile::get_profile;
use super::handlers::login::login;
use super::handlers::signup::signup;
use super::handlers::status::status;
use super::handlers::update_balance::update_balance;
use super::middleware::authenticate as auth_middleware;
use crate::ad::ports::AdServicePort;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub user_service: Arc<dyn UserServicePort>,
    pub ad_service: Arc<dyn AdServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    user_service: Arc<dyn UserServicePort>,
    ad_service: Arc<dyn AdServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        auth_service,
        user_service,
        ad_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/status", get(status))
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login));

    let protected_routes = Router::new()
        .route("/user/profile", get(get_profile))
        .route("/user/profile", delete(delete_profile))
        .route("/user/balance", patch(update_balance))
        .route("/ads", post(create_ad))
        .route("/ads/:ad_id", get(get_ad))
        .route("/ads/:ad_id", patch(update_ad))
        .route("/ads/:ad_id", delete(delete_ad))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
