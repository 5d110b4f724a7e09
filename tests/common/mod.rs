#![allow(dead_code)]

use async_trait::async_trait;
use coin_dashboard::{Containers, DashboardController, DashboardError, DataSource, Endpoint, Page};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// One scripted answer: wait `delay`, then return `body` or fail with `status`.
#[derive(Clone)]
pub struct Reply {
    pub delay: Duration,
    pub body: Result<Value, u16>,
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Self {
            delay: Duration::ZERO,
            body: Ok(body),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            delay: Duration::ZERO,
            body: Err(status),
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// In-memory source answering each endpoint from a queue of replies.
/// The last reply of a queue is repeated once the queue runs dry.
#[derive(Default)]
pub struct ScriptedSource {
    replies: Mutex<HashMap<Endpoint, VecDeque<Reply>>>,
    calls: Mutex<HashMap<Endpoint, usize>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, endpoint: Endpoint, reply: Reply) -> Self {
        self.replies
            .lock()
            .unwrap()
            .entry(endpoint)
            .or_default()
            .push_back(reply);
        self
    }

    pub fn calls(&self, endpoint: Endpoint) -> usize {
        self.calls.lock().unwrap().get(&endpoint).copied().unwrap_or(0)
    }

    fn next_reply(&self, endpoint: Endpoint) -> Reply {
        *self.calls.lock().unwrap().entry(endpoint).or_insert(0) += 1;

        let mut replies = self.replies.lock().unwrap();
        let queue = replies.entry(endpoint).or_default();
        match queue.len() {
            0 => Reply::status(404),
            1 => queue[0].clone(),
            _ => queue.pop_front().unwrap(),
        }
    }
}

#[async_trait]
impl DataSource for ScriptedSource {
    async fn get_json(&self, endpoint: Endpoint) -> coin_dashboard::Result<Value> {
        let reply = self.next_reply(endpoint);
        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply.body.map_err(|status| DashboardError::Api {
            status,
            message: "scripted failure".to_string(),
        })
    }
}

pub fn dashboard(source: Arc<dyn DataSource>) -> (Arc<DashboardController>, Page) {
    let page = Page::new();
    let controller = Arc::new(DashboardController::new(source, Containers::from(&page)));
    (controller, page)
}

/// Serves fixed responses keyed by request path on an ephemeral port and
/// returns the base URL. Unknown paths get a 404.
pub async fn canned_server(routes: Vec<(&'static str, u16, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test server");
    let addr = listener.local_addr().expect("local addr");
    let routes: Arc<HashMap<&'static str, (u16, String)>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, status, body)| (path, (status, body)))
            .collect(),
    );

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let routes = Arc::clone(&routes);
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let head = String::from_utf8_lossy(&request);
                let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();
                let (status, body) = routes
                    .get(path.as_str())
                    .cloned()
                    .unwrap_or((404, r#"{"error":"not found"}"#.to_string()));

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// A base URL nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}
