#![allow(dead_code)]

use async_trait::async_trait;
use daily_games::controller::api::{ApiQuery, FetchPolicy, GamesApi};
use daily_games::error::AppError;
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use actix_web::web::Data;

type Reply = Result<Value, AppError>;

/// Stand-in for the remote api. Replies are queued per query; the last one
/// queued keeps being served once the earlier ones are used up.
#[derive(Default)]
pub struct FakeGamesApi {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<(ApiQuery, FetchPolicy)>>,
}

impl FakeGamesApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, query: ApiQuery, body: Value) -> Self {
        self.push(query, Ok(body))
    }

    pub fn with_failure(self, query: ApiQuery, err: AppError) -> Self {
        self.push(query, Err(err))
    }

    fn push(self, query: ApiQuery, reply: Reply) -> Self {
        self.replies
            .lock()
            .expect("replies lock")
            .entry(query.query_string())
            .or_default()
            .push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<(ApiQuery, FetchPolicy)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl GamesApi for FakeGamesApi {
    async fn fetch_json(&self, query: &ApiQuery, policy: FetchPolicy) -> Result<Value, AppError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((query.clone(), policy));

        let key = query.query_string();
        let mut replies = self.replies.lock().expect("replies lock");
        match replies.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().expect("non-empty queue"),
            Some(queue) => queue
                .front()
                .cloned()
                .expect("queues are created with one reply"),
            None => Err(AppError::Network(format!("no fake reply for {key}"))),
        }
    }
}

pub fn app_data(api: &Arc<FakeGamesApi>) -> Data<dyn GamesApi> {
    let api: Arc<dyn GamesApi> = api.clone();
    Data::from(api)
}

pub fn game_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("All about {title}."),
        "image_url": format!("https://img.example/{id}.png"),
        "release": "12/03/2021",
        "platforms": ["PC"],
        "categories": ["Action"]
    })
}

pub fn body_string(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).expect("response should be UTF-8")
}

/// Serves `body` as json for every request on a loopback port and records
/// each request target. Returns the base url to hand to the http client.
pub async fn spawn_json_server(body: Value) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_by_server = seen.clone();
    let payload = body.to_string();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let seen = seen_by_server.clone();
            let payload = payload.clone();
            tokio::spawn(async move {
                let mut request: Vec<u8> = Vec::new();
                let mut chunk = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&chunk[..n]),
                    }
                }
                let target = String::from_utf8_lossy(&request)
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or_default()
                    .to_string();
                seen.lock().expect("requests lock").push(target);

                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    payload.len(),
                    payload
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (format!("http://{addr}/next-api/"), seen)
}
