//! Localhost chat-completions stub for command tests.
//!
//! Answers every request with a fixed assistant reply, one request per
//! connection, and keeps the JSON body of each request it saw.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

const REPLY: &str = "Agents plan, act and observe.";

pub struct StubServer {
    pub base_url: String,
    bodies: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl StubServer {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        let bodies = Arc::new(Mutex::new(Vec::new()));

        let thread_bodies = bodies.clone();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                serve_one(stream, &thread_bodies);
            }
        });

        Self {
            base_url: format!("http://{addr}/v1/"),
            bodies,
        }
    }

    /// Request bodies received so far, in arrival order
    pub fn bodies(&self) -> Vec<serde_json::Value> {
        self.bodies.lock().unwrap().clone()
    }
}

/// `(system, user)` contents of a recorded request
pub fn exchange(body: &serde_json::Value) -> (String, String) {
    let content = |i: usize| body["messages"][i]["content"].as_str().unwrap_or_default().to_string();
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");
    (content(0), content(1))
}

fn serve_one(stream: TcpStream, bodies: &Mutex<Vec<serde_json::Value>>) -> Option<()> {
    let mut reader = BufReader::new(stream.try_clone().ok()?);

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).ok()?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    let mut raw = vec![0u8; content_length];
    reader.read_exact(&mut raw).ok()?;
    bodies
        .lock()
        .unwrap()
        .push(serde_json::from_slice(&raw).unwrap_or(serde_json::Value::Null));

    let body = serde_json::json!({
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": REPLY},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 12, "completion_tokens": 6}
    })
    .to_string();
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let mut stream = stream;
    stream.write_all(response.as_bytes()).ok()?;
    stream.flush().ok()
}
