#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener};
use std::thread;

pub const TAG_PATH: &str = "/v2/repositories/selenium/standalone-chrome/tags/latest/";

/// Serves a single HTTP/1.1 response on a loopback port and returns the URL
/// pointing at it.
pub fn serve_once(status: &str, body: &str) -> String {
    serve_raw(format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    ))
}

/// Announces a 100 byte body, sends a few bytes of it and closes.
pub fn serve_truncated() -> String {
    serve_raw(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\nConnection: close\r\n\r\n{\"last_upd"
            .to_string(),
    )
}

/// Writes `response` as-is to the first connection after reading its
/// request headers.
pub fn serve_raw(response: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
        let _ = stream.shutdown(Shutdown::Both);
    });

    format!("http://{}{}", addr, TAG_PATH)
}

/// A loopback URL nothing is listening on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, TAG_PATH)
}
