pub mod api;
pub mod auth;
pub mod config;
pub mod encryption;
pub mod errors;
pub mod format;
pub mod logger;
pub mod models;
pub mod routes;
pub mod validation;

use std::path::Path;
use std::sync::Arc;

use api::ApiClient;
use auth::guard::AuthGuard;
use auth::session::SessionStore;
use config::AppConfig;
use errors::AppError;
use routes::Navigator;

pub use models::user::Role;
pub use routes::Surface;

/// State aplikasi — dibangun sekali saat startup, dibagikan ke shell UI.
pub struct AppContext {
    pub config: &'static AppConfig,
    pub session: Arc<SessionStore>,
    pub api: ApiClient,
    pub guard: AuthGuard,
}

impl AppContext {
    /// Inisialisasi urutan startup: config → encryption key → logger →
    /// session store → API client → guard.
    pub fn initialize(
        app_data_dir: &Path,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, AppError> {
        let config = config::init_config();
        config.validate().map_err(AppError::Config)?;

        std::fs::create_dir_all(app_data_dir)?;

        // Sesi tetap jalan tanpa key persisten; hanya tidak survive restart
        if let Err(e) = encryption::init_encryption_key(app_data_dir) {
            eprintln!("Warning: failed to initialize encryption key: {}", e);
        }

        if let Err(e) = logger::init_global_logger(app_data_dir) {
            eprintln!("Warning: failed to initialize logger: {}", e);
        }

        crate::log_info!(
            "APP",
            "Client core starting",
            serde_json::json!({
                "version": config.version,
                "environment": config.environment.as_str(),
                "api_base_url": config.api.base_url
            })
        );

        let session = Arc::new(SessionStore::open(&config.get_session_path(app_data_dir)));
        let api = ApiClient::new(&config.api, session.clone(), navigator.clone())?;
        let guard = AuthGuard::new(session.clone(), navigator);

        Ok(Self {
            config,
            session,
            api,
            guard,
        })
    }
}
