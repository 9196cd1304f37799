//! Minimal HTTP/1.1 server serving a fixed path→response map for integration
//! tests.
//!
//! Binds to an ephemeral port and handles each connection in its own thread.
//! Unknown paths get 404. The server runs until the process exits.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

/// Fixed set of routes served by the stub.
#[derive(Debug, Default)]
pub struct StubSite {
    routes: HashMap<String, (u16, Vec<u8>)>,
}

impl StubSite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200 at `path` (e.g. "/data/ne.csv").
    pub fn route(mut self, path: &str, body: &[u8]) -> Self {
        self.routes
            .insert(path.to_string(), (200, body.to_vec()));
        self
    }

    /// Serve an explicit status (e.g. 404, 503) at `path`.
    pub fn route_status(mut self, path: &str, status: u16, body: &[u8]) -> Self {
        self.routes
            .insert(path.to_string(), (status, body.to_vec()));
        self
    }
}

/// Starts the stub in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345").
pub fn start(site: StubSite) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let site = Arc::new(site);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let site = Arc::clone(&site);
            thread::spawn(move || handle(stream, &site));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, site: &StubSite) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, path) = parse_request_line(request);
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    let (status, body) = match site.routes.get(path) {
        Some((status, body)) => (*status, body.as_slice()),
        None => (404, &b"not found"[..]),
    };
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        503 => "Service Unavailable",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

/// Returns (method, path) from the request line.
fn parse_request_line(request: &str) -> (&str, &str) {
    let line = request.lines().next().unwrap_or("");
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");
    // Strip any query string; the stub routes on the bare path.
    let path = path.split('?').next().unwrap_or(path);
    (method, path)
}
