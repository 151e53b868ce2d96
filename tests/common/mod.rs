//! Shared helpers for integration tests.
#![allow(dead_code, clippy::unwrap_used)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

pub const BONJOUR: &str = r#"{"responseData":{"translatedText":"Bonjour, comment ça va ?","match":1},"responseStatus":200,"responseDetails":""}"#;

/// A one-thread HTTP server that answers every request with canned replies.
///
/// The n-th request gets the n-th reply; once replies run out the last one
/// repeats. Request lines are recorded for inspection.
pub struct FakeService {
    endpoint: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeService {
    pub fn start(replies: Vec<(u16, &'static str)>) -> Self {
        assert!(!replies.is_empty());
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        thread::spawn(move || {
            for (index, stream) in listener.incoming().enumerate() {
                let Ok(mut stream) = stream else { break };
                let mut reader = BufReader::new(stream.try_clone().unwrap());

                let mut request_line = String::new();
                reader.read_line(&mut request_line).unwrap();
                loop {
                    let mut header = String::new();
                    if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                        break;
                    }
                }
                seen.lock().unwrap().push(request_line.trim_end().to_string());

                let (status, body) = replies[index.min(replies.len() - 1)];
                write!(
                    stream,
                    "HTTP/1.1 {status} Canned\r\n\
                     Content-Type: application/json\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{body}",
                    body.len()
                )
                .unwrap();
            }
        });

        Self {
            endpoint: format!("http://{addr}/get"),
            requests,
        }
    }

    pub fn ok(body: &'static str) -> Self {
        Self::start(vec![(200, body)])
    }

    pub fn endpoint(&self) -> String {
        self.endpoint.clone()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// An endpoint nothing listens on.
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:1/get";
