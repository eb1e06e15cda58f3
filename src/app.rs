use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::database::models::{Expense, IncomeSource, Loan, SavingsGoal, TuitionEntry};
use crate::handlers::protected::{
    account, dashboard, expenses, income_sources, loans, preferences, records, savings_goals,
    tuition,
};
use crate::handlers::public;
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// The full HTTP surface with state attached.
pub fn router(state: AppState) -> Router {
    let body_limit = state.config.api.max_request_size_bytes;
    let cors = cors_layer(&state.config.security);

    let router = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .merge(auth_public_routes())
        // Protected
        .merge(protected_routes(state.clone()))
        // Global middleware
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors);

    let router = if state.config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    router.with_state(state)
}

fn auth_public_routes() -> Router<AppState> {
    use public::auth;

    Router::new()
        .route("/register", post(auth::register_post))
        .route("/login", post(auth::login_post))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::dashboard))
        .route("/profile", get(dashboard::profile))
        .route("/preferences", get(preferences::get).post(preferences::set))
        // Collections
        .route("/savings-goals", post(savings_goals::create))
        .route("/savings-goals/:id", delete(records::remove::<SavingsGoal>))
        .route("/income-sources", post(income_sources::create))
        .route("/income-sources/:id", delete(records::remove::<IncomeSource>))
        .route("/expenses", post(expenses::create))
        .route("/expenses/:id", delete(records::remove::<Expense>))
        .route("/loans", get(records::list::<Loan>).post(loans::create))
        .route(
            "/loans/:id",
            put(loans::update).delete(records::remove::<Loan>),
        )
        .route(
            "/tuition",
            get(records::list::<TuitionEntry>).post(tuition::create),
        )
        .route("/tuition/:id", delete(records::remove::<TuitionEntry>))
        // Account
        .route("/change-password", post(account::change_password))
        .route("/change-email", post(account::change_email))
        .route("/delete-account", delete(account::delete_account))
        // route_layer keeps unknown paths at 404 instead of 401
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }

    // Credentials cannot be combined with a wildcard origin
    if security.cors_origins.is_empty() || security.cors_origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        tracing::warn!("No usable CORS origins configured; cross-origin requests are refused");
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
}
