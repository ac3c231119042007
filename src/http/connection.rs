use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::config::Config;
use crate::content::{loader, CacheStore};
use crate::http::mime;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::http::writer::ResponseWriter;

/// One read is attempted per connection; whatever fits in this buffer is
/// treated as the complete request.
const REQUEST_BUFFER_SIZE: usize = 4096;

pub struct Connection {
    stream: TcpStream,
    store: CacheStore,
    cfg: Arc<Config>,
}

impl Connection {
    pub fn new(stream: TcpStream, store: CacheStore, cfg: Arc<Config>) -> Self {
        Self { stream, store, cfg }
    }

    /// Serves the connection: read once, respond, close.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut buf = [0u8; REQUEST_BUFFER_SIZE];

        // A failed read counts as an empty request, which parses to "/" and
        // serves the index page.
        let n = self.stream.read(&mut buf).await.unwrap_or(0);
        let request = Request::parse(&buf[..n]);

        let response = self.respond(&request).await;

        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut self.stream).await?;

        Ok(())
    }

    /// Resolves the request to content and builds the response.
    ///
    /// Textual content for a well-known path comes out of the cache; any
    /// other textual path is read fresh from disk, uncached, on every
    /// request. Non-textual content (which includes `.js`, see
    /// [`mime::is_textual`]) is always read fresh as raw bytes.
    async fn respond(&self, request: &Request) -> Response {
        let content_type = mime::resolve(&request.path);

        let body = if mime::is_textual(content_type) {
            let text = match CacheStore::lookup(&request.path) {
                Some(which) => self.store.content(which).await,
                None => loader::read_text(&self.cfg.root.join(&request.path)).await,
            };
            text.into_bytes()
        } else {
            loader::read_binary(&self.cfg.root.join(&request.path)).await
        };

        // Missing, unreadable and empty files all land here.
        if body.is_empty() {
            return Response::not_found();
        }

        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", content_type)
            .header("Connection", "close")
            .body(body)
            .build()
    }
}
