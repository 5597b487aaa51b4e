//! JournAI Web Server
//!
//! Axum-based REST API for the JournAI journaling service.
//!
//! Security features:
//! - JWT authentication against the identity provider (use --no-auth for local dev)
//! - Restrictive CORS policy
//! - Input validation (text length, markup rejection, pagination limits)
//! - Per-user rate limiting of mood analysis
//! - Full audit logging for all API access (reads and writes)
//! - Sanitized error responses

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;
use tokio::sync::RwLock;
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tracing::{error, info, warn};

use journai_core::ai::{AIClient, MoodAnalyzer};
use journai_core::db::Database;

mod handlers;
mod rate_limit;

pub use rate_limit::{RateLimiter, ANALYSIS_MAX_REQUESTS, ANALYSIS_WINDOW};

/// Maximum request body size (journal text is capped at 10k characters)
pub const MAX_BODY_SIZE: usize = 256 * 1024;

/// Maximum pagination limit
pub const MAX_PAGE_LIMIT: i64 = 1000;

/// Header carrying the user id when authentication is disabled
const USER_ID_HEADER: &str = "x-user-id";

/// Authorization header for bearer tokens
const AUTHORIZATION_HEADER: &str = "authorization";

/// User id used when authentication is disabled and no header is sent
pub const LOCAL_DEV_USER: &str = "local-dev";

/// How long fetched signing keys are reused
const JWKS_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// JWT validation configuration for the identity provider
#[derive(Clone, Default)]
pub struct JwtConfig {
    /// Expected `iss` claim (e.g. "https://clerk.example.com")
    pub issuer: Option<String>,
    /// URL of the provider's JSON Web Key Set
    pub jwks_url: Option<String>,
    /// Expected `aud` claim, if the provider sets one
    pub audience: Option<String>,
}

impl JwtConfig {
    /// Read `JOURNAI_AUTH_ISSUER`, `JOURNAI_AUTH_JWKS_URL` and `JOURNAI_AUTH_AUDIENCE`
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            issuer: var("JOURNAI_AUTH_ISSUER"),
            jwks_url: var("JOURNAI_AUTH_JWKS_URL"),
            audience: var("JOURNAI_AUTH_AUDIENCE"),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.issuer.is_some() && self.jwks_url.is_some()
    }
}

/// Cached signing keys
#[derive(Clone)]
pub struct CachedKeys {
    pub keys: Vec<jsonwebtoken::jwk::Jwk>,
    pub fetched_at: Instant,
}

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Whether authentication is required (secure by default)
    pub require_auth: bool,
    /// Allowed CORS origins (empty = same-origin only in production)
    pub allowed_origins: Vec<String>,
    /// Identity provider JWT validation
    pub jwt: JwtConfig,
    /// Mood analysis burst allowed per user
    pub analysis_max_requests: u32,
    /// Time for a user's analysis burst to replenish
    pub analysis_window: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            require_auth: true,
            allowed_origins: vec![],
            jwt: JwtConfig::default(),
            analysis_max_requests: ANALYSIS_MAX_REQUESTS,
            analysis_window: ANALYSIS_WINDOW,
        }
    }
}

/// Parse a comma-separated list of allowed CORS origins
pub fn parse_allowed_origins(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// How the current request was authenticated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    /// Bearer JWT validated against the provider's keys
    Jwt,
    /// Authentication disabled; identity taken from `x-user-id`
    Header,
    /// Authentication disabled and no identity supplied
    None,
}

/// The authenticated user, inserted into request extensions by the auth middleware
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub method: AuthMethod,
}

/// Shared application state
pub struct AppState {
    pub db: Database,
    pub config: ServerConfig,
    pub ai: Option<AIClient>,
    /// Per-user limiter for mood analysis
    pub analysis_limiter: RateLimiter,
    /// Identity provider signing keys
    pub jwks_cache: RwLock<Option<CachedKeys>>,
}

/// Authentication middleware - resolves the calling user
///
/// With auth enabled, requires `Authorization: Bearer <jwt>` signed by the
/// configured provider; the `sub` claim becomes the user id. With auth
/// disabled, the user id comes from the `x-user-id` header, or `local-dev`.
async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    if !state.config.require_auth {
        let header_user = request
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let user = match header_user {
            Some(id) => AuthUser {
                id,
                method: AuthMethod::Header,
            },
            None => AuthUser {
                id: LOCAL_DEV_USER.to_string(),
                method: AuthMethod::None,
            },
        };
        request.extensions_mut().insert(user);
        return next.run(request).await;
    }

    if !state.config.jwt.is_configured() {
        error!("Authentication required but JOURNAI_AUTH_ISSUER / JOURNAI_AUTH_JWKS_URL not set");
        return AppError::unauthorized("Authentication required").into_response();
    }

    let token = request
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string());

    let Some(token) = token else {
        warn!(path = %request.uri().path(), "Unauthorized request - no bearer token");
        return AppError::unauthorized("Authentication required").into_response();
    };

    match validate_jwt(&token, &state).await {
        Ok(user_id) => {
            info!(user = %user_id, path = %request.uri().path(), "Authenticated via JWT");
            request.extensions_mut().insert(AuthUser {
                id: user_id,
                method: AuthMethod::Jwt,
            });
            next.run(request).await
        }
        Err(e) => {
            warn!(error = %e, path = %request.uri().path(), "Invalid JWT");
            AppError::unauthorized("Authentication required").into_response()
        }
    }
}

/// Validate a provider-issued JWT, returning its subject
///
/// Checks the signature (RS256), expiry, issuer and, when configured, audience.
async fn validate_jwt(token: &str, state: &AppState) -> Result<String, String> {
    use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};

    let config = &state.config.jwt;
    let issuer = config.issuer.as_ref().ok_or("Issuer not configured")?;

    let header = decode_header(token).map_err(|e| format!("Invalid JWT header: {}", e))?;
    let kid = header.kid.ok_or("JWT missing key ID (kid)")?;

    let keys = signing_keys(state, false).await?;
    let jwk = match keys.iter().find(|k| k.common.key_id.as_deref() == Some(&kid)) {
        Some(jwk) => jwk.clone(),
        None => {
            // Provider may have rotated keys since the last fetch
            let keys = signing_keys(state, true).await?;
            keys.into_iter()
                .find(|k| k.common.key_id.as_deref() == Some(&kid))
                .ok_or_else(|| format!("No matching key found for kid: {}", kid))?
        }
    };

    let decoding_key = DecodingKey::from_jwk(&jwk).map_err(|e| format!("Invalid JWK: {}", e))?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_issuer(&[issuer]);
    match &config.audience {
        Some(aud) => validation.set_audience(&[aud]),
        None => validation.validate_aud = false,
    }

    #[derive(serde::Deserialize)]
    struct Claims {
        sub: String,
    }

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| format!("JWT validation failed: {}", e))?;

    Ok(token_data.claims.sub)
}

/// Return cached signing keys, fetching them when stale or when `refresh` is set
async fn signing_keys(
    state: &AppState,
    refresh: bool,
) -> Result<Vec<jsonwebtoken::jwk::Jwk>, String> {
    if !refresh {
        if let Some(cached) = state.jwks_cache.read().await.as_ref() {
            if cached.fetched_at.elapsed() < JWKS_CACHE_TTL {
                return Ok(cached.keys.clone());
            }
        }
    }

    let url = state
        .config
        .jwt
        .jwks_url
        .as_ref()
        .ok_or("JWKS URL not configured")?;
    let keys = fetch_public_keys(url)
        .await
        .map_err(|e| format!("Failed to fetch signing keys: {}", e))?;

    *state.jwks_cache.write().await = Some(CachedKeys {
        keys: keys.clone(),
        fetched_at: Instant::now(),
    });

    Ok(keys)
}

/// Fetch the provider's public keys from its JWKS endpoint
async fn fetch_public_keys(url: &str) -> Result<Vec<jsonwebtoken::jwk::Jwk>, String> {
    #[derive(serde::Deserialize)]
    struct JwkSet {
        keys: Vec<jsonwebtoken::jwk::Jwk>,
    }

    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .timeout(Duration::from_secs(10))
        .send()
        .await
        .map_err(|e| format!("HTTP request failed: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let jwk_set: JwkSet = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JWK set: {}", e))?;

    Ok(jwk_set.keys)
}

/// Get the authenticated user set by the auth middleware
pub fn current_user(request: &Request) -> Result<AuthUser, AppError> {
    request
        .extensions()
        .get::<AuthUser>()
        .cloned()
        .ok_or_else(|| AppError::unauthorized("User authentication required"))
}

/// Read and decode a JSON request body
///
/// Malformed bodies and missing fields are reported as 400.
pub async fn read_json<T: serde::de::DeserializeOwned>(request: Request) -> Result<T, AppError> {
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    serde_json::from_slice(&bytes).map_err(|e| AppError::bad_request(&format!("Invalid JSON: {}", e)))
}

/// Success response
#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Create the application router
pub fn create_router(db: Database, static_dir: Option<&str>, config: ServerConfig) -> Router {
    let ai = AIClient::from_env();
    match ai {
        Some(ref client) => info!(
            "AI backend configured: {} (model: {})",
            client.host(),
            client.model()
        ),
        None => info!("AI backend not configured (set GEMINI_API_KEY to enable mood analysis)"),
    }
    create_router_with_options(db, static_dir, config, ai)
}

/// Create the application router with an explicit AI client (for testing)
pub fn create_router_with_options(
    db: Database,
    static_dir: Option<&str>,
    config: ServerConfig,
    ai: Option<AIClient>,
) -> Router {
    let state = Arc::new(AppState {
        db,
        config: config.clone(),
        ai,
        analysis_limiter: RateLimiter::new(config.analysis_max_requests, config.analysis_window),
        jwks_cache: RwLock::new(None),
    });

    let api_routes = Router::new()
        // Auth
        .route("/me", get(handlers::get_me))
        .route("/user-journals", get(handlers::get_user_journals))
        // Journals
        .route("/analyze-journal", post(handlers::analyze_journal))
        .route("/save-journal", post(handlers::save_journal))
        .route("/get-user-journal", get(handlers::list_user_journals))
        .route("/journal/:id", get(handlers::get_journal))
        .route("/update-journal/:id", put(handlers::update_journal))
        .route("/delete-journal/:id", delete(handlers::delete_journal))
        // Insights
        .route("/journals/insights", get(handlers::get_journal_insights))
        // Audit log
        .route("/audit", get(handlers::list_audit_log))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Build CORS layer
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_credentials(true)
    };

    let csp_value = HeaderValue::from_static(
        "default-src 'self'; script-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' blob: data:; font-src 'self'; connect-src 'self'; frame-ancestors 'none'"
    );

    let mut app = Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            csp_value,
        ));

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    db: Database,
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if !config.require_auth {
        warn!("Authentication disabled - do not expose to network!");
    } else if !config.jwt.is_configured() {
        warn!("Authentication required but no identity provider configured; all API calls will be rejected");
    }

    check_ai_connection().await;

    let app = create_router(db, static_dir, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Check and log AI backend connection status
async fn check_ai_connection() {
    match AIClient::from_env() {
        Some(client) => {
            if client.health_check().await {
                info!(
                    "AI backend connected: {} (model: {})",
                    client.host(),
                    client.model()
                );
            } else {
                warn!(
                    "AI backend configured but not responding: {} (model: {})",
                    client.host(),
                    client.model()
                );
            }
        }
        None => {
            info!("AI backend not configured (set GEMINI_API_KEY to enable mood analysis)");
        }
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    fn with_status(status: StatusCode, msg: &str) -> Self {
        Self {
            status,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn bad_request(msg: &str) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, msg)
    }

    pub fn unauthorized(msg: &str) -> Self {
        Self::with_status(StatusCode::UNAUTHORIZED, msg)
    }

    pub fn not_found(msg: &str) -> Self {
        Self::with_status(StatusCode::NOT_FOUND, msg)
    }

    pub fn too_many_requests(msg: &str) -> Self {
        Self::with_status(StatusCode::TOO_MANY_REQUESTS, msg)
    }

    pub fn service_unavailable(msg: &str) -> Self {
        Self::with_status(StatusCode::SERVICE_UNAVAILABLE, msg)
    }

    pub fn internal(msg: &str) -> Self {
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }

    /// Map a core error, surfacing validation and lookup failures to the client
    pub fn from_core(err: journai_core::Error) -> Self {
        match err {
            journai_core::Error::Validation(msg) => Self::bad_request(&msg),
            journai_core::Error::NotFound(msg) => Self::not_found(&msg),
            other => other.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            internal: Some(err),
        }
    }
}

#[cfg(test)]
mod tests;
