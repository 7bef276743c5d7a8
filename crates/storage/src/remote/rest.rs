use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{Channel, Filter, RemoteClient, RemoteConfig, RemoteError};

/// Client of the backend's REST interface.
#[derive(Debug, Clone)]
pub struct Rest {
    config: RemoteConfig,
}

impl Rest {
    #[must_use]
    pub fn new(config: RemoteConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.config.url)
    }

    fn rpc_url(&self, function: &str) -> String {
        format!("{}/rest/v1/rpc/{function}", self.config.url)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.config.key)
            .header("Authorization", &format!("Bearer {}", self.config.key))
    }
}

impl RemoteClient for Rest {
    async fn select(
        &self,
        table: &str,
        filter: Option<&Filter>,
    ) -> Result<Vec<Value>, RemoteError> {
        let mut builder = self
            .authorize(Request::get(&self.table_url(table)))
            .query([("select", "*")]);
        if let Some(filter) = filter {
            builder = builder.query([filter.to_query()]);
        }
        fetch(build(builder)?).await
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Vec<Value>, RemoteError> {
        let request = self
            .authorize(Request::post(&self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(&row)
            .map_err(|err| RemoteError::Serialization(err.to_string()))?;
        fetch(request).await
    }

    async fn delete(&self, table: &str, filter: &Filter) -> Result<Vec<Value>, RemoteError> {
        let builder = self
            .authorize(Request::delete(&self.table_url(table)))
            .header("Prefer", "return=representation")
            .query([filter.to_query()]);
        fetch(build(builder)?).await
    }

    async fn rpc(&self, function: &str, params: Value) -> Result<Value, RemoteError> {
        let request = self
            .authorize(Request::post(&self.rpc_url(function)))
            .json(&params)
            .map_err(|err| RemoteError::Serialization(err.to_string()))?;
        fetch(request).await
    }

    fn channel(&self, name: &str) -> Channel {
        Channel::realtime(name, &self.config)
    }

    fn is_offline(&self) -> bool {
        false
    }
}

fn build(builder: RequestBuilder) -> Result<Request, RemoteError> {
    builder
        .build()
        .map_err(|err| RemoteError::Transport(err.to_string()))
}

async fn fetch<T: DeserializeOwned>(request: Request) -> Result<T, RemoteError> {
    let response = request
        .send()
        .await
        .map_err(|err| RemoteError::Transport(err.to_string()))?;
    if !response.ok() {
        return Err(http_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|err| RemoteError::Serialization(err.to_string()))
}

async fn http_error(response: Response) -> RemoteError {
    let status = response.status();
    let message = match response.json::<Value>().await {
        Ok(body) => body
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| body.to_string(), String::from),
        Err(_) => response.status_text(),
    };
    RemoteError::Http { status, message }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rest() -> Rest {
        Rest::new(RemoteConfig {
            url: "https://example.org".to_string(),
            key: "anon".to_string(),
        })
    }

    #[test]
    fn test_urls() {
        assert_eq!(
            rest().table_url("workout_completions"),
            "https://example.org/rest/v1/workout_completions"
        );
        assert_eq!(
            rest().rpc_url("generate_plan"),
            "https://example.org/rest/v1/rpc/generate_plan"
        );
    }

    #[test]
    fn test_not_offline() {
        assert!(!rest().is_offline());
    }
}
