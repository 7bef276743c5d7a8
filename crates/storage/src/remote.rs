//! Access to the hosted backend.
//!
//! Every component obtains its client through [`gateway::GATEWAY`]. Without configuration the
//! gateway hands out an [`offline::Offline`] client, so the app keeps working on local data only.

use std::sync::Arc;

use log::debug;
use planfit_domain::{
    self as domain, CreateError, DeleteError, GenerateError, OfflineError, PlanRequest, ReadError,
    StorageError, UserProfile, WorkoutID,
};
use serde_json::{Value, json};

pub mod channel;
pub mod config;
pub mod gateway;
pub mod offline;
pub mod rest;

pub use channel::{Channel, Subscription};
pub use config::{Environment, RemoteConfig};
pub use gateway::{GATEWAY, Gateway, Role};

const TABLE_WORKOUT_COMPLETIONS: &str = "workout_completions";
const COLUMN_WORKOUT_ID: &str = "workout_id";
const FUNCTION_GENERATE_PLAN: &str = "generate_plan";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error(transparent)]
    Offline(#[from] OfflineError),
    #[error("request failed with status {status}: {message}")]
    Http { status: u16, message: String },
    #[error("no connection: {0}")]
    Transport(String),
    #[error("invalid data: {0}")]
    Serialization(String),
}

impl From<RemoteError> for StorageError {
    fn from(value: RemoteError) -> Self {
        match value {
            RemoteError::Offline(err) => StorageError::Offline(err),
            err => StorageError::Other(Box::new(err)),
        }
    }
}

/// Restricts a query to rows whose column equals the given value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Query parameter in the notation of the backend's REST interface.
    #[must_use]
    pub fn to_query(&self) -> (&str, String) {
        (&self.column, format!("eq.{}", self.value))
    }
}

/// Operations offered by the backend.
///
/// Operations of an offline client complete immediately with [`RemoteError::Offline`].
#[allow(async_fn_in_trait)]
#[allow(clippy::missing_errors_doc)]
pub trait RemoteClient {
    async fn select(
        &self,
        table: &str,
        filter: Option<&Filter>,
    ) -> Result<Vec<Value>, RemoteError>;
    async fn insert(&self, table: &str, row: Value) -> Result<Vec<Value>, RemoteError>;
    async fn delete(&self, table: &str, filter: &Filter) -> Result<Vec<Value>, RemoteError>;
    async fn rpc(&self, function: &str, params: Value) -> Result<Value, RemoteError>;
    fn channel(&self, name: &str) -> Channel;
    fn is_offline(&self) -> bool;
}

#[derive(Debug, Clone)]
pub enum Client {
    Rest(rest::Rest),
    Offline(offline::Offline),
}

impl RemoteClient for Client {
    async fn select(
        &self,
        table: &str,
        filter: Option<&Filter>,
    ) -> Result<Vec<Value>, RemoteError> {
        match self {
            Client::Rest(client) => client.select(table, filter).await,
            Client::Offline(client) => client.select(table, filter).await,
        }
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Vec<Value>, RemoteError> {
        match self {
            Client::Rest(client) => client.insert(table, row).await,
            Client::Offline(client) => client.insert(table, row).await,
        }
    }

    async fn delete(&self, table: &str, filter: &Filter) -> Result<Vec<Value>, RemoteError> {
        match self {
            Client::Rest(client) => client.delete(table, filter).await,
            Client::Offline(client) => client.delete(table, filter).await,
        }
    }

    async fn rpc(&self, function: &str, params: Value) -> Result<Value, RemoteError> {
        match self {
            Client::Rest(client) => client.rpc(function, params).await,
            Client::Offline(client) => client.rpc(function, params).await,
        }
    }

    fn channel(&self, name: &str) -> Channel {
        match self {
            Client::Rest(client) => client.channel(name),
            Client::Offline(client) => client.channel(name),
        }
    }

    fn is_offline(&self) -> bool {
        match self {
            Client::Rest(client) => client.is_offline(),
            Client::Offline(client) => client.is_offline(),
        }
    }
}

/// Domain repositories backed by a shared backend client.
#[derive(Debug, Clone)]
pub struct Remote {
    client: Arc<Client>,
}

impl Remote {
    #[must_use]
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.client.is_offline()
    }

    /// Notifies `handler` about completions recorded or removed on other devices until the
    /// returned subscription is dropped. Never fires in offline mode.
    #[must_use]
    pub fn subscribe_completions(
        &self,
        handler: impl Fn(CompletionChange) + 'static,
    ) -> Subscription {
        self.client
            .channel(TABLE_WORKOUT_COMPLETIONS)
            .on(move |event, payload| {
                if let Some(change) = CompletionChange::from_event(event, payload) {
                    handler(change);
                }
            })
            .subscribe()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionChange {
    Recorded(WorkoutID),
    Removed(WorkoutID),
}

impl CompletionChange {
    /// Interprets a realtime event of the completions table. The row is taken from `record`
    /// (inserts) or `old_record` (deletes), or from the payload itself.
    fn from_event(event: &str, payload: &Value) -> Option<Self> {
        let row = |key: &str| payload.get(key).unwrap_or(payload);
        match event {
            "INSERT" => workout_id(row("record")).map(Self::Recorded),
            "DELETE" => workout_id(row("old_record")).map(Self::Removed),
            _ => None,
        }
    }
}

impl domain::PlanRepository for Remote {
    async fn generate_plan(&self, request: PlanRequest) -> Result<UserProfile, GenerateError> {
        let params = serde_json::to_value(&request)
            .map_err(|err| GenerateError::InvalidRequest(err.to_string()))?;
        let profile = self
            .client
            .rpc(FUNCTION_GENERATE_PLAN, json!({ "request": params }))
            .await
            .map_err(StorageError::from)?;
        if profile.is_null() {
            return Err(GenerateError::Other("no plan returned".into()));
        }
        Ok(UserProfile::new(profile))
    }
}

impl domain::CompletionRepository for Remote {
    async fn read_completions(&self) -> Result<Vec<WorkoutID>, ReadError> {
        let rows = self
            .client
            .select(TABLE_WORKOUT_COMPLETIONS, None)
            .await
            .map_err(StorageError::from)?;
        Ok(workout_ids(&rows))
    }

    async fn create_completion(&self, id: WorkoutID) -> Result<WorkoutID, CreateError> {
        let rows = self
            .client
            .insert(
                TABLE_WORKOUT_COMPLETIONS,
                json!({ "workout_id": id.as_str() }),
            )
            .await
            .map_err(|err| match err {
                RemoteError::Http { status: 409, .. } => CreateError::Conflict,
                err => CreateError::Storage(err.into()),
            })?;
        debug!("recorded completion of workout {id} ({} rows)", rows.len());
        Ok(id)
    }

    async fn delete_completion(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        self.client
            .delete(
                TABLE_WORKOUT_COMPLETIONS,
                &Filter::eq(COLUMN_WORKOUT_ID, id.as_str()),
            )
            .await
            .map_err(StorageError::from)?;
        Ok(id)
    }
}

fn workout_ids(rows: &[Value]) -> Vec<WorkoutID> {
    rows.iter().filter_map(workout_id).collect()
}

fn workout_id(row: &Value) -> Option<WorkoutID> {
    match row.get(COLUMN_WORKOUT_ID)? {
        Value::String(id) => Some(WorkoutID::from(id.as_str())),
        Value::Number(id) => Some(WorkoutID::from(id.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use planfit_domain::{CompletionRepository, PlanRepository};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn offline() -> Remote {
        Remote::new(Arc::new(Client::Offline(offline::Offline)))
    }

    #[rstest]
    #[case(
        "INSERT",
        json!({ "record": { "workout_id": "w1" } }),
        Some(CompletionChange::Recorded(WorkoutID::from("w1")))
    )]
    #[case(
        "INSERT",
        json!({ "workout_id": 7 }),
        Some(CompletionChange::Recorded(WorkoutID::from("7")))
    )]
    #[case(
        "DELETE",
        json!({ "old_record": { "workout_id": "w1" } }),
        Some(CompletionChange::Removed(WorkoutID::from("w1")))
    )]
    #[case("UPDATE", json!({ "record": { "workout_id": "w1" } }), None)]
    #[case("INSERT", json!({ "record": { "id": 1 } }), None)]
    fn test_completion_change_from_event(
        #[case] event: &str,
        #[case] payload: Value,
        #[case] expected: Option<CompletionChange>,
    ) {
        assert_eq!(CompletionChange::from_event(event, &payload), expected);
    }

    #[test]
    fn test_subscribe_completions_offline() {
        let subscription = offline().subscribe_completions(|change| panic!("{change:?}"));
        assert_eq!(subscription.name(), "workout_completions");
        assert_eq!(subscription.handler_count(), 1);
        assert!(subscription.is_offline());
    }

    #[test]
    fn test_filter_to_query() {
        assert_eq!(
            Filter::eq("workout_id", "w1").to_query(),
            ("workout_id", "eq.w1".to_string())
        );
    }

    #[rstest]
    #[case(RemoteError::Offline(OfflineError), true)]
    #[case(RemoteError::Transport("timeout".to_string()), false)]
    #[case(RemoteError::Http { status: 500, message: String::new() }, false)]
    fn test_storage_error_from_remote_error(#[case] error: RemoteError, #[case] offline: bool) {
        assert_eq!(StorageError::from(error).is_offline(), offline);
    }

    #[test]
    fn test_workout_ids() {
        assert_eq!(
            workout_ids(&[
                json!({ "workout_id": "a" }),
                json!({ "workout_id": 7 }),
                json!({ "workout_id": null }),
                json!({ "id": "b" }),
            ]),
            vec![WorkoutID::from("a"), WorkoutID::from("7")]
        );
    }

    #[test]
    fn test_offline_repository() {
        let remote = offline();
        assert!(remote.is_offline());
        assert!(matches!(
            block_on(remote.read_completions()),
            Err(ReadError::Storage(StorageError::Offline(_)))
        ));
        assert!(matches!(
            block_on(remote.create_completion(WorkoutID::from("w1"))),
            Err(CreateError::Storage(StorageError::Offline(_)))
        ));
        assert!(matches!(
            block_on(remote.delete_completion(WorkoutID::from("w1"))),
            Err(DeleteError::Storage(StorageError::Offline(_)))
        ));
        assert!(matches!(
            block_on(remote.generate_plan(PlanRequest {
                muscle_groups: vec!["chest".to_string()],
                equipment: vec!["bench".to_string()],
                goal: "strength".to_string(),
                difficulty: "beginner".to_string(),
            })),
            Err(GenerateError::Storage(StorageError::Offline(_)))
        ));
    }
}
