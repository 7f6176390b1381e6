use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::{hash_password, TokenService};
use crate::config::{AppConfig, SecurityConfig, StorageKind};
use crate::database::{
    DatabaseManager, InMemoryRemedioRepository, InMemoryUsuarioRepository,
    PgRemedioRepository, PgUsuarioRepository, RemedioRepository, UsuarioRepository,
};
use crate::handlers::{protected::remedios, public};
use crate::middleware::jwt_auth_middleware;

/// Shared handler state: the storage collaborators and the token service
#[derive(Clone)]
pub struct AppState {
    pub remedios: Arc<dyn RemedioRepository>,
    pub usuarios: Arc<dyn UsuarioRepository>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(
        remedios: Arc<dyn RemedioRepository>,
        usuarios: Arc<dyn UsuarioRepository>,
        tokens: TokenService,
    ) -> Self {
        Self {
            remedios,
            usuarios,
            tokens: Arc::new(tokens),
        }
    }

    /// State backed by process-local storage
    pub fn in_memory(tokens: TokenService) -> Self {
        Self::new(
            Arc::new(InMemoryRemedioRepository::new()),
            Arc::new(InMemoryUsuarioRepository::new()),
            tokens,
        )
    }

    /// Build the state the configuration asks for, connecting to Postgres if needed
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let tokens = TokenService::from_config(&config.security)?;

        let state = match config.database.storage {
            StorageKind::Postgres => {
                let pool = DatabaseManager::connect(&config.database).await?;
                Self::new(
                    Arc::new(PgRemedioRepository::new(pool.clone())),
                    Arc::new(PgUsuarioRepository::new(pool)),
                    tokens,
                )
            }
            StorageKind::Memory => {
                tracing::warn!("No database configured, records are kept in memory only");
                Self::in_memory(tokens)
            }
        };

        state.bootstrap_admin(&config.security).await?;
        Ok(state)
    }

    /// Create the configured admin user on first start
    pub async fn bootstrap_admin(&self, security: &SecurityConfig) -> anyhow::Result<()> {
        let (Some(login), Some(password)) = (&security.admin_login, &security.admin_password) else {
            return Ok(());
        };

        if self.usuarios.find_by_login(login).await?.is_some() {
            tracing::debug!(login = %login, "Admin user already exists");
            return Ok(());
        }

        let password_hash = hash_password(password, security.password_hash_cost)?;
        self.usuarios.insert(login, &password_hash).await?;
        tracing::info!(login = %login, "Created admin user");
        Ok(())
    }
}

/// The full router: public routes plus the token-protected /remedios collection
pub fn app(state: AppState) -> Router {
    let config = crate::config::config();

    let protected = Router::new()
        .route(
            "/remedios",
            get(remedios::list).post(remedios::create).put(remedios::update),
        )
        .route("/remedios/:id", get(remedios::detail).delete(remedios::delete))
        .route("/remedios/inativar/:id", delete(remedios::deactivate))
        .route("/remedios/ativar/:id", put(remedios::activate))
        .route_layer(middleware::from_fn_with_state(state.clone(), jwt_auth_middleware));

    let mut router = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .route("/login", post(public::login))
        .route("/v3/api-docs", get(public::api_docs))
        .route("/v3/api-docs.yaml", get(public::api_docs_yaml))
        // Protected
        .merge(protected)
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(cors_layer(&config.security));

    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }

    if security.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(AllowOrigin::any())
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .expose_headers([header::LOCATION]);
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .expose_headers([header::LOCATION])
}
