use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::with_capacity(resp.body.len() + 128);

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    for (key, value) in &resp.headers {
        buf.extend_from_slice(format!("{}: {}\r\n", key, value).as_bytes());
    }

    // Blank line, then the body verbatim
    buf.extend_from_slice(b"\r\n");
    buf.extend_from_slice(&resp.body);

    buf
}

/// Serializes a response and sends it in a single write.
///
/// The connection is closed right after this, so a short write is not
/// retried; it is only surfaced in the logs.
pub struct ResponseWriter {
    buffer: Vec<u8>,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
        }
    }

    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        let written = stream.write(&self.buffer).await?;

        if written < self.buffer.len() {
            tracing::debug!(
                written,
                total = self.buffer.len(),
                "short write, response truncated"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::{ResponseBuilder, StatusCode};

    #[test]
    fn serialize_status_line_and_body() {
        let resp = ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "text/html")
            .body(b"<p>hi</p>".to_vec())
            .build();

        let bytes = serialize_response(&resp);
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Type: text/html\r\n"));
        assert!(text.contains("Content-Length: 9\r\n"));
        assert!(text.ends_with("\r\n\r\n<p>hi</p>"));
    }

    #[test]
    fn serialize_not_found() {
        let resp = Response::not_found();
        let text = String::from_utf8(serialize_response(&resp)).unwrap();

        assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(text.contains("Connection: close\r\n"));
        assert!(text.ends_with("\r\n\r\n<h1>404 Not Found</h1>"));
    }
}
