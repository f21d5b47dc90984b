//! Service container for dependency injection
//!
//! Wires up settings, the terminal and the API transport, and hands out
//! authenticated clients.

use std::sync::Arc;

use tracing::debug;

use crate::application::UthoClient;
use crate::config::{ConfigStore, Settings};
use crate::infrastructure::http::ReqwestTransportFactory;
use crate::infrastructure::prompt::TerminalPrompter;
use crate::infrastructure::traits::{Prompter, TransportFactory};
use crate::infrastructure::{InfraError, InfraResult};

/// Everything a command handler needs, passed explicitly.
pub struct ServiceContainer {
    /// Effective settings for this invocation
    pub settings: Arc<Settings>,

    /// Where the token is persisted
    pub store: ConfigStore,

    /// Terminal abstraction
    pub prompter: Arc<dyn Prompter>,

    transport: Arc<dyn TransportFactory>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings, store: ConfigStore) -> Self {
        Self::with_deps(
            settings,
            store,
            Arc::new(TerminalPrompter),
            Arc::new(ReqwestTransportFactory),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        store: ConfigStore,
        prompter: Arc<dyn Prompter>,
        transport: Arc<dyn TransportFactory>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            store,
            prompter,
            transport,
        }
    }

    /// Build an authenticated API client from the loaded token.
    ///
    /// Fails without touching the network when no token is configured.
    pub fn client(&self) -> InfraResult<UthoClient> {
        let token = self.settings.token.trim();
        if token.is_empty() {
            return Err(InfraError::MissingToken);
        }
        debug!("connecting to {}", self.settings.api_url);
        let transport = self.transport.connect(&self.settings.api_url, token)?;
        Ok(UthoClient::new(transport))
    }
}
