//! Shared handler state

use std::fmt;
use std::sync::Arc;

use blog_common::{AppConfig, JwtService};
use blog_service::ServiceContext;

/// Cloned into every request; both halves are behind `Arc`
#[derive(Clone)]
pub struct AppState {
    services: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(services: ServiceContext, config: AppConfig) -> Self {
        Self {
            services: Arc::new(services),
            config: Arc::new(config),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.services
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Token validation for the auth extractors
    pub fn jwt_service(&self) -> &JwtService {
        self.services.jwt_service()
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("app", &self.config.app.name)
            .field("env", &self.config.app.env)
            .finish_non_exhaustive()
    }
}
