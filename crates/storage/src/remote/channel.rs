use std::{pin::pin, rc::Rc};

use futures_util::{
    Sink, SinkExt, StreamExt,
    future::{self, AbortHandle, Abortable},
};
use gloo_net::websocket::{Message, WebSocketError, futures::WebSocket};
use gloo_timers::future::IntervalStream;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::RemoteConfig;

const HEARTBEAT_INTERVAL_MS: u32 = 30_000;

type Handler = Rc<dyn Fn(&str, &Value)>;

/// Named pub/sub channel, configured with handlers before subscribing.
pub struct Channel {
    name: String,
    handlers: Vec<Handler>,
    endpoint: Option<String>,
}

impl Channel {
    pub(crate) fn offline(name: &str) -> Self {
        Self {
            name: name.to_string(),
            handlers: vec![],
            endpoint: None,
        }
    }

    pub(crate) fn realtime(name: &str, config: &RemoteConfig) -> Self {
        Self {
            name: name.to_string(),
            handlers: vec![],
            endpoint: Some(websocket_url(config)),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a handler receiving the event name and payload of each message.
    #[must_use]
    pub fn on(mut self, handler: impl Fn(&str, &Value) + 'static) -> Self {
        self.handlers.push(Rc::new(handler));
        self
    }

    /// Starts receiving messages until the returned subscription is dropped.
    #[must_use]
    pub fn subscribe(self) -> Subscription {
        let handlers: Rc<[Handler]> = Rc::from(self.handlers);
        let abort_handle = self.endpoint.map(|endpoint| {
            let (abort_handle, registration) = AbortHandle::new_pair();
            let listener = listen(endpoint, topic(&self.name), handlers.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let _ = Abortable::new(listener, registration).await;
            });
            abort_handle
        });
        Subscription {
            name: self.name,
            handlers,
            abort_handle,
        }
    }
}

pub struct Subscription {
    name: String,
    handlers: Rc<[Handler]>,
    abort_handle: Option<AbortHandle>,
}

impl Subscription {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.abort_handle.is_none()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(abort_handle) = &self.abort_handle {
            debug!("leaving channel {}", self.name);
            abort_handle.abort();
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct PhoenixMessage {
    topic: String,
    event: String,
    payload: Value,
    #[serde(rename = "ref")]
    reference: Option<String>,
}

impl PhoenixMessage {
    fn new(topic: &str, event: &str, payload: Value, reference: u64) -> Self {
        Self {
            topic: topic.to_string(),
            event: event.to_string(),
            payload,
            reference: Some(reference.to_string()),
        }
    }

    fn is_control(&self) -> bool {
        self.event.starts_with("phx_")
    }
}

fn topic(name: &str) -> String {
    format!("realtime:{name}")
}

fn websocket_url(config: &RemoteConfig) -> String {
    let base = if let Some(host) = config.url.strip_prefix("https://") {
        format!("wss://{host}")
    } else if let Some(host) = config.url.strip_prefix("http://") {
        format!("ws://{host}")
    } else {
        config.url.clone()
    };
    format!(
        "{base}/realtime/v1/websocket?apikey={}&vsn=1.0.0",
        config.key
    )
}

async fn listen(endpoint: String, topic: String, handlers: Rc<[Handler]>) {
    let socket = match WebSocket::open(&endpoint) {
        Ok(socket) => socket,
        Err(err) => {
            warn!("failed to open channel {topic}: {err}");
            return;
        }
    };
    let (mut sink, mut stream) = socket.split();

    let join = PhoenixMessage::new(&topic, "phx_join", json!({}), 1);
    if let Err(err) = send(&mut sink, &join).await {
        warn!("failed to join channel {topic}: {err}");
        return;
    }

    let heartbeat = async {
        let mut interval = IntervalStream::new(HEARTBEAT_INTERVAL_MS);
        let mut reference = 2;
        while interval.next().await.is_some() {
            let message = PhoenixMessage::new("phoenix", "heartbeat", json!({}), reference);
            if let Err(err) = send(&mut sink, &message).await {
                warn!("failed to send heartbeat on channel {topic}: {err}");
                break;
            }
            reference += 1;
        }
    };

    let receive = async {
        while let Some(message) = stream.next().await {
            match message {
                Ok(Message::Text(text)) => dispatch(&topic, &text, &handlers),
                Ok(Message::Bytes(_)) => {}
                Err(err) => {
                    warn!("channel {topic} closed: {err}");
                    break;
                }
            }
        }
    };

    future::select(pin!(heartbeat), pin!(receive)).await;
}

/// Forwards a received frame to the handlers unless it is a control message or belongs to
/// another topic.
fn dispatch(topic: &str, text: &str, handlers: &[Handler]) {
    match serde_json::from_str::<PhoenixMessage>(text) {
        Ok(message) if message.topic == topic && !message.is_control() => {
            for handler in handlers {
                handler(&message.event, &message.payload);
            }
        }
        Ok(_) => {}
        Err(err) => debug!("ignoring message on channel {topic}: {err}"),
    }
}

async fn send(
    sink: &mut (impl Sink<Message, Error = WebSocketError> + Unpin),
    message: &PhoenixMessage,
) -> Result<(), String> {
    let text = serde_json::to_string(message).map_err(|err| err.to_string())?;
    sink.send(Message::Text(text))
        .await
        .map_err(|err| err.to_string())
}
