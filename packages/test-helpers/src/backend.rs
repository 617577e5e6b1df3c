//! A scripted stand-in for the portal backend.
//!
//! Each endpoint path (relative to the `/api` prefix) gets a canned [`Reply`].
//! Requests to paths without a reply get a `404`. Every request is recorded so
//! tests can check what the client actually sent.
//!
//! ```text
//! let backend = Backend::start(Script::new().on("words", Reply::ok("[]"))).await;
//! let client = Client::new(backend.base_url(), None)?;
//! ```
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

/// Path prefix the portal backend mounts its resources under.
pub const API_PATH_PREFIX: &str = "/api";

/// A canned response.
#[derive(Debug, Clone)]
pub struct Reply {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

impl Reply {
    /// A `200 OK` reply with the given body.
    #[must_use]
    pub fn ok(body: &str) -> Self {
        Self::with_status(200, body)
    }

    /// # Panics
    ///
    /// Will panic if `status` is not a valid HTTP status code.
    #[must_use]
    pub fn with_status(status: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("it should be a valid HTTP status code"),
            body: body.to_owned(),
            delay: None,
        }
    }

    /// Holds the response back for `delay` before sending it.
    #[must_use]
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// The set of replies the mock backend serves.
#[derive(Debug, Clone, Default)]
pub struct Script {
    replies: HashMap<String, Reply>,
}

impl Script {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `reply` for `GET {API_PATH_PREFIX}/{path}`.
    #[must_use]
    pub fn on(mut self, path: &str, reply: Reply) -> Self {
        self.replies.insert(format!("{API_PATH_PREFIX}/{path}"), reply);
        self
    }
}

/// A request as seen by the mock backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
}

struct Shared {
    script: Script,
    received: Mutex<Vec<ReceivedRequest>>,
}

/// A running mock backend bound to an ephemeral local port.
pub struct Backend {
    addr: SocketAddr,
    shared: Arc<Shared>,
    join_handle: JoinHandle<()>,
}

impl Backend {
    /// Starts the mock backend on `127.0.0.1` with a port chosen by the OS.
    ///
    /// # Panics
    ///
    /// Will panic if it can't bind the local socket.
    pub async fn start(script: Script) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("it should bind the mock backend to an ephemeral port");

        let addr = listener.local_addr().expect("it should get the mock backend local address");

        let shared = Arc::new(Shared {
            script,
            received: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(reply_handler).with_state(shared.clone());

        let join_handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("the mock backend should keep serving until aborted");
        });

        Self {
            addr,
            shared,
            join_handle,
        }
    }

    /// The base URL of the mock API, for example `http://127.0.0.1:41235/api`.
    ///
    /// # Panics
    ///
    /// Will panic if the bound address does not make a valid URL.
    #[must_use]
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}{API_PATH_PREFIX}", self.addr)).expect("it should build a valid mock backend URL")
    }

    /// All the requests received so far, in arrival order.
    ///
    /// # Panics
    ///
    /// Will panic if the request log lock is poisoned.
    #[must_use]
    pub fn received_requests(&self) -> Vec<ReceivedRequest> {
        self.shared.received.lock().expect("it should lock the request log").clone()
    }

    pub fn stop(self) {
        self.join_handle.abort();
    }
}

async fn reply_handler(State(shared): State<Arc<Shared>>, method: Method, uri: Uri) -> Response {
    shared
        .received
        .lock()
        .expect("it should lock the request log")
        .push(ReceivedRequest {
            method,
            path: uri.path().to_owned(),
            query: uri.query().map(ToOwned::to_owned),
        });

    let Some(reply) = shared.script.replies.get(uri.path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    (reply.status, [(header::CONTENT_TYPE, "application/json")], reply.body.clone()).into_response()
}
