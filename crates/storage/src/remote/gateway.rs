use std::sync::{Arc, OnceLock};

use log::warn;
use planfit_domain::ConfigurationError;

use super::{
    Client,
    config::{BuildEnvironment, Environment, RemoteConfig},
    offline::Offline,
    rest::Rest,
};

/// Gateway of the browser app, configured at build time.
pub static GATEWAY: Gateway<BuildEnvironment> = Gateway::new(BuildEnvironment);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Public key, usable in the browser.
    Browser,
    /// Privileged key, only for code that never reaches the browser.
    Server,
}

/// Single point from which backend clients are obtained.
///
/// The browser client is created on first use and shared afterwards. Without configuration it
/// is the offline client. The server client is created anew for every call and requires full
/// configuration.
pub struct Gateway<E> {
    environment: E,
    browser_client: OnceLock<Arc<Client>>,
}

impl<E: Environment> Gateway<E> {
    pub const fn new(environment: E) -> Self {
        Self {
            environment,
            browser_client: OnceLock::new(),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the server role is not fully configured.
    pub fn client(&self, role: Role) -> Result<Arc<Client>, ConfigurationError> {
        match role {
            Role::Browser => Ok(self.browser_client()),
            Role::Server => self.server_client().map(Arc::new),
        }
    }

    pub fn browser_client(&self) -> Arc<Client> {
        if let Some(client) = self.browser_client.get() {
            return client.clone();
        }
        match RemoteConfig::browser(&self.environment) {
            Ok(config) => self
                .browser_client
                .get_or_init(|| Arc::new(Client::Rest(Rest::new(config))))
                .clone(),
            Err(err) => {
                warn!("using offline mode: {err}");
                Arc::new(Client::Offline(Offline))
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if the URL or the privileged key is missing.
    pub fn server_client(&self) -> Result<Client, ConfigurationError> {
        Ok(Client::Rest(Rest::new(RemoteConfig::server(
            &self.environment,
        )?)))
    }
}
