//! Local HTTP stub for exercising the real ureq clients.

use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use std::sync::{Arc, Mutex};

/// One request as the stub saw it.
#[derive(Debug, Clone)]
pub(crate) struct SeenRequest {
    pub(crate) method: Method,
    pub(crate) path_and_query: String,
    pub(crate) user_agent: Option<String>,
    pub(crate) content_type: Option<String>,
    pub(crate) body: String,
}

/// Answers every request with a fixed status and body.
pub(crate) struct StubServer {
    pub(crate) base_url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl StubServer {
    pub(crate) fn start(status: u16, body: &'static str) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let seen: Arc<Mutex<Vec<SeenRequest>>> = Arc::default();
        let recorder = Arc::clone(&seen);
        let status = StatusCode::from_u16(status).unwrap();

        let app = Router::new().fallback(
            move |method: Method, uri: Uri, headers: HeaderMap, text: String| {
                let recorder = Arc::clone(&recorder);
                async move {
                    let header_text = |name: header::HeaderName| {
                        headers
                            .get(name)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string)
                    };
                    recorder.lock().unwrap().push(SeenRequest {
                        method,
                        path_and_query: uri
                            .path_and_query()
                            .map(|pq| pq.as_str().to_string())
                            .unwrap_or_default(),
                        user_agent: header_text(header::USER_AGENT),
                        content_type: header_text(header::CONTENT_TYPE),
                        body: text,
                    });
                    (status, body)
                }
            },
        );

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });

        Self { base_url, seen }
    }

    pub(crate) fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}
