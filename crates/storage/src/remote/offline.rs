use planfit_domain::OfflineError;
use serde_json::Value;

use super::{Channel, Filter, RemoteClient, RemoteError};

/// Stand-in for the backend when no configuration is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct Offline;

impl RemoteClient for Offline {
    async fn select(
        &self,
        _table: &str,
        _filter: Option<&Filter>,
    ) -> Result<Vec<Value>, RemoteError> {
        Err(OfflineError.into())
    }

    async fn insert(&self, _table: &str, _row: Value) -> Result<Vec<Value>, RemoteError> {
        Err(OfflineError.into())
    }

    async fn delete(&self, _table: &str, _filter: &Filter) -> Result<Vec<Value>, RemoteError> {
        Err(OfflineError.into())
    }

    async fn rpc(&self, _function: &str, _params: Value) -> Result<Value, RemoteError> {
        Err(OfflineError.into())
    }

    fn channel(&self, name: &str) -> Channel {
        Channel::offline(name)
    }

    fn is_offline(&self) -> bool {
        true
    }
}
