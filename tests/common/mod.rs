//! Scripted coffee server for integration tests.
//!
//! Accepts one WebSocket client, greets it with a session number and then
//! answers each request with whatever the script returns. Tests can push
//! extra frames at any time and observe every request the server saw.

#![allow(dead_code)]

use std::time::Duration;

use coffee_lpu237::protocol::{ActionCode, DataField, Packet, RequestType};
use coffee_lpu237::transport::SUB_PROTOCOL;
use coffee_lpu237::{Client, DeviceIndex, Scheme, SessionNumber};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio_tungstenite::accept_hdr_async;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::handshake::server::{ErrorResponse, Request, Response};
use tokio_tungstenite::tungstenite::http::HeaderValue;

// ============================================================================
// Outgoing
// ============================================================================

/// Frame the server writes.
#[derive(Debug, Clone)]
pub enum Outgoing {
    Send(Packet),
    Close,
}

// ============================================================================
// MockServer
// ============================================================================

/// Handle on a running mock server.
pub struct MockServer {
    pub port: u16,
    /// Frames to write unprompted.
    pub push: mpsc::UnboundedSender<Outgoing>,
    /// Every request received, in order.
    pub requests: mpsc::UnboundedReceiver<Packet>,
}

impl MockServer {
    /// Starts a server that greets with `session` and answers with `script`.
    pub async fn start<F>(session: u64, mut script: F) -> Self
    where
        F: FnMut(&Packet) -> Vec<Outgoing> + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let port = listener.local_addr().expect("addr").port();
        let (push, mut push_rx) = mpsc::unbounded_channel();
        let (requests_tx, requests) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let Ok((stream, _)) = listener.accept().await else {
                return;
            };
            let callback = |_request: &Request, mut response: Response| {
                response
                    .headers_mut()
                    .insert("Sec-WebSocket-Protocol", HeaderValue::from_static(SUB_PROTOCOL));
                Ok::<Response, ErrorResponse>(response)
            };
            let Ok(ws) = accept_hdr_async(stream, callback).await else {
                return;
            };
            let (mut write, mut read) = ws.split();

            let greeting = greeting(session);
            if write.send(text(&greeting)).await.is_err() {
                return;
            }

            let mut push_open = true;
            loop {
                let outgoing = tokio::select! {
                    message = read.next() => match message {
                        Some(Ok(Message::Text(body))) => {
                            let Ok(request) = Packet::from_json(&body) else {
                                continue;
                            };
                            let _ = requests_tx.send(request.clone());
                            script(&request)
                        }
                        Some(Ok(Message::Close(_))) | None | Some(Err(_)) => break,
                        Some(Ok(_)) => continue,
                    },
                    pushed = push_rx.recv(), if push_open => match pushed {
                        Some(outgoing) => vec![outgoing],
                        None => {
                            push_open = false;
                            continue;
                        }
                    },
                };

                for frame in outgoing {
                    match frame {
                        Outgoing::Send(packet) => {
                            if write.send(text(&packet)).await.is_err() {
                                return;
                            }
                        }
                        Outgoing::Close => {
                            let _ = write.close().await;
                            return;
                        }
                    }
                }
            }
        });

        Self {
            port,
            push,
            requests,
        }
    }

    /// Client pointed at this server over plain `ws://`.
    pub fn client(&self) -> Client {
        Client::builder()
            .scheme(Scheme::Ws)
            .port(self.port)
            .build()
            .expect("client")
    }

    /// Client with a request timeout.
    pub fn client_with_timeout(&self, timeout: Duration) -> Client {
        Client::builder()
            .scheme(Scheme::Ws)
            .port(self.port)
            .request_timeout(timeout)
            .build()
            .expect("client")
    }

    /// Waits for the next request with `action`, skipping others.
    pub async fn next_request(&mut self, action: ActionCode) -> Packet {
        let wait = async {
            loop {
                let request = self.requests.recv().await.expect("server gone");
                if request.action_code == action {
                    return request;
                }
            }
        };
        tokio::time::timeout(Duration::from_secs(5), wait)
            .await
            .expect("request not seen")
    }

    /// Writes a frame unprompted.
    pub fn push(&self, outgoing: Outgoing) {
        self.push.send(outgoing).expect("server gone");
    }
}

// ============================================================================
// Packet helpers
// ============================================================================

fn text(packet: &Packet) -> Message {
    Message::Text(packet.to_json().expect("serialize").into())
}

/// First frame of a session.
pub fn greeting(session: u64) -> Packet {
    Packet {
        request_type: RequestType::Response,
        ..Packet::manager(SessionNumber::new(session), ActionCode::None)
    }
}

/// Reply to `request` carrying `field`.
pub fn reply(request: &Packet, field: impl Into<DataField>) -> Packet {
    Packet {
        request_type: RequestType::Response,
        data_field: Some(field.into()),
        ..request.clone()
    }
}

/// Reply carrying a string list.
pub fn reply_list(request: &Packet, items: &[&str]) -> Packet {
    reply(request, DataField::list(items.iter().copied()))
}

/// Open reply assigning `device_index`.
pub fn open_reply(request: &Packet, device_index: u32) -> Packet {
    Packet {
        device_index: DeviceIndex::new(device_index),
        ..reply_list(request, &["success"])
    }
}

/// Unsolicited system event.
pub fn system_event(session: u64, action: ActionCode, items: &[&str]) -> Packet {
    Packet {
        request_type: RequestType::System,
        ..Packet::manager(SessionNumber::new(session), action).with_strings(items.iter().copied())
    }
}

/// Outgoing reply.
pub fn send(packet: Packet) -> Outgoing {
    Outgoing::Send(packet)
}

/// Enables tracing output for a test run (`RUST_LOG=coffee_lpu237=trace`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
