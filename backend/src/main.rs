use dotenvy::dotenv;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use anyhow::Context;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;
use clearway_common::endpoints::{CHECKOUT_SESSION, CONTACT, CREATE_BOOKING, CREATE_CHECKOUT};

mod error;
mod schema;
mod config {
    pub mod settings;
}
mod handlers {
    pub mod booking_handlers;
    pub mod catalog_handlers;
    pub mod checkout_handlers;
    pub mod contact_handlers;
}
mod api {
    pub mod stripe_checkout;
    pub mod supersaas;
}
mod models {
    pub mod contact_models;
}
mod repositories {
    pub mod contact_repository;
    pub mod supabase_contacts;
}
#[cfg(test)]
mod test_support;

use config::settings::{ContactBackend, Settings};
use handlers::{booking_handlers, catalog_handlers, checkout_handlers, contact_handlers};
use api::stripe_checkout::{CheckoutProvider, StripeCheckout};
use api::supersaas::{BookingProvider, SuperSaasClient};
use repositories::contact_repository::{ContactStore, SqliteContactStore};
use repositories::supabase_contacts::SupabaseContactStore;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub struct AppState {
    settings: Settings,
    contact_store: Arc<dyn ContactStore>,
    checkout: Arc<dyn CheckoutProvider>,
    bookings: Arc<dyn BookingProvider>,
}

async fn health_check() -> &'static str {
    "OK"
}

/// Opens the SQLite pool and brings the schema up to date.
pub fn create_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .context("Failed to create pool")?;

    let mut conn = pool.get().context("Failed to get DB connection")?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

    Ok(pool)
}

fn contact_store(settings: &Settings) -> anyhow::Result<Arc<dyn ContactStore>> {
    match &settings.contact {
        ContactBackend::Supabase { url, service_key, table } => {
            tracing::info!("Storing contact messages in Supabase table '{}'", table);
            Ok(Arc::new(SupabaseContactStore::new(url, service_key, table)))
        }
        ContactBackend::Sqlite { database_url } => {
            tracing::info!("Storing contact messages in SQLite at {}", database_url);
            Ok(Arc::new(SqliteContactStore::new(create_pool(database_url)?)))
        }
    }
}

/// Any origin in development, where the frontend dev server runs on another
/// port. Otherwise only `FRONTEND_URL`.
fn cors(settings: &Settings) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .expose_headers([axum::http::header::CONTENT_TYPE]);

    if settings.is_development() {
        return layer.allow_origin(Any);
    }
    match HeaderValue::from_str(&settings.frontend_url) {
        Ok(origin) => layer.allow_origin(origin),
        Err(e) => {
            tracing::warn!("FRONTEND_URL is not a valid origin, cross-origin requests disabled: {}", e);
            layer
        }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/packages", get(catalog_handlers::list_packages))
        .route("/api/packages/{package_id}", get(catalog_handlers::get_package))
        .route("/sitemap.xml", get(catalog_handlers::sitemap))
        .route(CONTACT, post(contact_handlers::submit_contact));

    // the serverless fallback paths are served by the same handlers
    for path in CREATE_CHECKOUT.paths() {
        router = router.route(path, post(checkout_handlers::create_checkout_session));
    }
    for path in CHECKOUT_SESSION.paths() {
        router = router.route(path, get(checkout_handlers::get_checkout_session));
    }
    for path in CREATE_BOOKING.paths() {
        router = router.route(path, post(booking_handlers::create_supersaas_booking));
    }

    if let Some(dir) = &state.settings.static_dir {
        let index = std::path::Path::new(dir).join("index.html");
        router = router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors(&state.settings))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env().context("Invalid configuration")?;

    let _guard = settings.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(settings.environment.clone().into()),
            ..Default::default()
        }))
    });

    let state = Arc::new(AppState {
        contact_store: contact_store(&settings)?,
        checkout: Arc::new(StripeCheckout::new(&settings.stripe_secret_key)),
        bookings: Arc::new(SuperSaasClient::new(settings.supersaas.clone())),
        settings,
    });

    let bind_addr = state.settings.bind_addr.clone();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use repositories::contact_repository::MockContactStore;
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let mut store = MockContactStore::new();
        store.expect_insert().returning(|_| Ok(()));
        let response = app(test_support::state_with(store))
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn health_check_responds() {
        let request = Request::get("/api/health").body(Body::empty()).unwrap();
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn lists_packages() {
        let request = Request::get("/api/packages").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(clearway_common::PACKAGES.len()));
    }

    #[tokio::test]
    async fn contact_route_accepts_json() {
        let request = Request::post("/api/contact")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"name":"Ada","email":"ada@example.com","message":"Hi"}"#,
            ))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn contact_route_rejects_missing_fields() {
        let request = Request::post("/api/contact")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"Ada"}"#))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "email is required");
    }

    async fn allowed_origin(state: Arc<AppState>, origin: &str) -> Option<String> {
        let request = Request::get("/api/health")
            .header("origin", origin)
            .body(Body::empty())
            .unwrap();
        let response = app(state).oneshot(request).await.unwrap();
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn cors_only_allows_frontend_outside_development() {
        let state = test_support::state_with(MockContactStore::new());
        assert_eq!(
            allowed_origin(state.clone(), "https://clearway.test").await.as_deref(),
            Some("https://clearway.test")
        );
        assert_eq!(allowed_origin(state, "https://evil.example").await, None);
    }

    #[tokio::test]
    async fn cors_allows_any_origin_in_development() {
        let mut settings = config::settings::test_settings();
        settings.environment = "development".to_string();
        let state = Arc::new(AppState {
            settings,
            contact_store: Arc::new(MockContactStore::new()),
            checkout: Arc::new(api::stripe_checkout::MockCheckoutProvider::new()),
            bookings: Arc::new(api::supersaas::MockBookingProvider::new()),
        });
        assert_eq!(
            allowed_origin(state, "http://localhost:8080").await.as_deref(),
            Some("*")
        );
    }

    #[tokio::test]
    async fn fallback_session_path_is_routed() {
        let request = Request::get("/.netlify/functions/get-checkout-session")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "session_id is required");
    }
}
