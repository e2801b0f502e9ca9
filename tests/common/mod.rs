#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use nit_backend::chat::{ChatPipeline, ChatSettings};
use nit_backend::llm::{
    Choice, Completion, CompletionRequest, FinishReason, LlmError, LlmProvider,
};

/// Credential used by tests that expect the provider to be reached
pub const TEST_API_KEY: &str = "sk-test";

type Outcome = Box<dyn Fn() -> Result<Completion, LlmError> + Send + Sync>;

/// In-process completion provider that records what it is asked
pub struct StubProvider {
    outcome: Outcome,
    calls: AtomicUsize,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl StubProvider {
    fn with_outcome(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    /// Always answers with `content` as the first choice
    pub fn replying(content: &str) -> Arc<Self> {
        let content = content.to_string();
        Self::with_outcome(Box::new(move || Ok(completion(Some(content.clone())))))
    }

    /// Answers with a choice whose content is null
    pub fn empty() -> Arc<Self> {
        Self::with_outcome(Box::new(|| Ok(completion(None))))
    }

    /// Always fails with the error built by `error`
    pub fn failing(error: fn() -> LlmError) -> Arc<Self> {
        Self::with_outcome(Box::new(move || Err(error())))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request);
        (self.outcome)()
    }
}

pub fn completion(content: Option<String>) -> Completion {
    Completion {
        id: Some("chatcmpl-test".to_string()),
        choices: vec![Choice {
            index: 0,
            content,
            finish_reason: Some(FinishReason::Stop),
        }],
        usage: None,
    }
}

/// Pipeline with a configured credential around `provider`
pub fn pipeline_with(provider: Arc<StubProvider>) -> ChatPipeline {
    ChatPipeline::with_provider(ChatSettings::new(Some(TEST_API_KEY.to_string())), provider)
}

/// Pipeline with no credential configured
pub fn unconfigured_pipeline(provider: Arc<StubProvider>) -> ChatPipeline {
    ChatPipeline::with_provider(ChatSettings::new(None), provider)
}

/// Local HTTP endpoint standing in for the completion API
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Answers every request with `status` and the JSON `body`
    pub async fn respond(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let captured = requests.clone();
        let body = body.to_string();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let request = read_request(&mut socket).await;
                captured.lock().unwrap().push(request);

                let response = format!(
                    "HTTP/1.1 {} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self { base_url, requests }
    }

    /// Accepts connections and never answers
    pub async fn silent() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        Self {
            base_url,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Raw text of every request received so far
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Reads one request: headers up to the blank line, then `content-length` bytes
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return String::from_utf8_lossy(&buf).into_owned(),
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}
