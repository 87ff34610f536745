//! Overpass interpreter client and the all-or-nothing POI fetch.

use super::types::{FetchError, OverpassResponse, PoiRecord};
use crate::config::FinderConfig;
use tracing::debug;
use ureq::{Agent, AgentBuilder};

/// Something that evaluates Overpass QL.
pub trait Interpreter {
    fn interpret(&self, query: &str) -> Result<OverpassResponse, FetchError>;
}

/// Blocking client for an Overpass `/api/interpreter` endpoint.
pub struct Overpass {
    agent: Agent,
    interpreter_url: String,
}

impl Overpass {
    pub fn new(config: &FinderConfig) -> Self {
        let agent = AgentBuilder::new()
            .timeout(config.overpass_timeout)
            .user_agent(&config.user_agent)
            .build();
        Self {
            agent,
            interpreter_url: config.overpass_interpreter_url(),
        }
    }
}

impl Interpreter for Overpass {
    fn interpret(&self, query: &str) -> Result<OverpassResponse, FetchError> {
        let response = self
            .agent
            .post(&self.interpreter_url)
            .set("Content-Type", "text/plain; charset=utf-8")
            .send_string(query)
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => FetchError::Status(code),
                ureq::Error::Transport(t) => FetchError::Request(t.to_string()),
            })?;

        response
            .into_json()
            .map_err(|e| FetchError::Request(e.to_string()))
    }
}

/// Run `query` and normalize every returned element, preserving order.
pub fn fetch(interpreter: &dyn Interpreter, query: &str) -> Result<Vec<PoiRecord>, FetchError> {
    let response = interpreter.interpret(query)?;
    debug!(elements = response.elements.len(), "overpass answered");
    Ok(response.elements.into_iter().map(PoiRecord::from).collect())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::DEFAULT_USER_AGENT;
    use crate::poi::Location;
    use crate::testing::StubServer;
    use std::sync::{Arc, Mutex};

    /// Replays a canned body (or error) and records the queries it saw.
    #[derive(Clone)]
    pub(crate) struct FakeInterpreter {
        reply: Arc<dyn Fn() -> Result<OverpassResponse, FetchError> + Send + Sync>,
        pub(crate) queries: Arc<Mutex<Vec<String>>>,
    }

    impl FakeInterpreter {
        pub(crate) fn json(body: &'static str) -> Self {
            Self::replying(move || {
                serde_json::from_str(body).map_err(|e| FetchError::Request(e.to_string()))
            })
        }

        pub(crate) fn status(code: u16) -> Self {
            Self::replying(move || Err(FetchError::Status(code)))
        }

        pub(crate) fn replying(
            reply: impl Fn() -> Result<OverpassResponse, FetchError> + Send + Sync + 'static,
        ) -> Self {
            Self {
                reply: Arc::new(reply),
                queries: Arc::default(),
            }
        }

        pub(crate) fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }
    }

    impl Interpreter for FakeInterpreter {
        fn interpret(&self, query: &str) -> Result<OverpassResponse, FetchError> {
            self.queries.lock().unwrap().push(query.to_string());
            (self.reply)()
        }
    }

    #[test]
    fn test_fetch_preserves_order() {
        let fake = FakeInterpreter::json(
            r#"{"elements": [
                {"tags": {"name": "B"}, "lat": 1.0, "lon": 2.0},
                {"tags": {"name": "A"}, "lat": 3.0, "lon": 4.0}
            ]}"#,
        );
        let records = fetch(&fake, "q").unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
        assert_eq!(fake.queries(), vec!["q"]);
    }

    #[test]
    fn test_fetch_missing_elements_is_empty() {
        let fake = FakeInterpreter::json("{}");
        assert!(fetch(&fake, "q").unwrap().is_empty());
    }

    #[test]
    fn test_fetch_status_error() {
        let fake = FakeInterpreter::status(429);
        assert!(matches!(fetch(&fake, "q"), Err(FetchError::Status(429))));
    }

    #[test]
    fn test_fetch_malformed_body_discards_everything() {
        let fake = FakeInterpreter::json(r#"{"elements": [{"tags": {"name": "A"}}, "#);
        assert!(matches!(fetch(&fake, "q"), Err(FetchError::Request(_))));
    }

    fn stub_client(stub: &StubServer) -> Overpass {
        Overpass::new(&FinderConfig {
            overpass_url: stub.base_url.clone(),
            ..FinderConfig::default()
        })
    }

    #[test]
    fn test_overpass_posts_query_text() {
        let stub = StubServer::start(200, r#"{"elements": [{"tags": {"name": "A"}, "lat": 1.5}]}"#);
        let query = "[out:json][timeout:30];\n(\nnode[\"name\"~\"فروشگاه\",i](1,2,3,4);\n);\nout body;\n";

        let records = fetch(&stub_client(&stub), query).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "A");
        assert_eq!(records[0].location, Location { lat: Some(1.5), lng: None });
        assert_eq!(records[0].address, "No address");

        let requests = stub.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path_and_query, "/api/interpreter");
        assert_eq!(requests[0].body, query);
        assert_eq!(requests[0].user_agent.as_deref(), Some(DEFAULT_USER_AGENT));
        assert!(requests[0].content_type.as_deref().unwrap().starts_with("text/plain"));
    }

    #[test]
    fn test_overpass_500_is_status_error() {
        let stub = StubServer::start(500, "Internal Server Error");
        assert!(matches!(fetch(&stub_client(&stub), "q"), Err(FetchError::Status(500))));
    }

    #[test]
    fn test_overpass_html_body_is_request_error() {
        let stub = StubServer::start(200, "<html><body>rate limited</body></html>");
        assert!(matches!(fetch(&stub_client(&stub), "q"), Err(FetchError::Request(_))));
    }
}
