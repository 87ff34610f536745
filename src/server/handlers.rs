use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::envelope::{ErrorBody, ErrorKind, ResultEnvelope};
use crate::location::{gazetteer, CityInfo};
use crate::poi::FetchError;

use super::state::AppState;

// ─── GET /api/supermarkets ───────────────────────────────────────

#[derive(Deserialize)]
pub struct SupermarketQuery {
    pub city: Option<String>,
}

pub async fn supermarkets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SupermarketQuery>,
) -> (StatusCode, Json<ResultEnvelope>) {
    let start = Instant::now();
    let city = params.city.unwrap_or_default();

    let finder = Arc::clone(&state.finder);
    let lookup = city.clone();
    let envelope = tokio::task::spawn_blocking(move || finder.run(&lookup))
        .await
        .unwrap_or_else(|e| ErrorBody::from(FetchError::Request(e.to_string())).into());

    let status = status_for(&envelope);
    info!(
        city = %city.trim(),
        status = status.as_u16(),
        elapsed_ms = %format!("{:.1}", start.elapsed().as_secs_f64() * 1000.0),
        "GET /api/supermarkets"
    );

    (status, Json(envelope))
}

fn status_for(envelope: &ResultEnvelope) -> StatusCode {
    match envelope {
        ResultEnvelope::Success(_) => StatusCode::OK,
        ResultEnvelope::Error(body) => match body.kind {
            ErrorKind::Input => StatusCode::BAD_REQUEST,
            ErrorKind::Resolution => StatusCode::NOT_FOUND,
            ErrorKind::UpstreamStatus | ErrorKind::Transport => StatusCode::BAD_GATEWAY,
        },
    }
}

// ─── GET /api/cities ─────────────────────────────────────────────

pub async fn city_list() -> Json<Vec<CityInfo>> {
    Json(gazetteer::entries())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::SupermarketFinder;
    use crate::location::providers::tests::FakeSearch;
    use crate::location::{Geocoder, LocationResolver};
    use crate::poi::overpass::tests::FakeInterpreter;

    fn state(overpass: FakeInterpreter) -> Arc<AppState> {
        let resolver = LocationResolver::with_geocoder(Geocoder::new(Box::new(FakeSearch::default())));
        Arc::new(AppState {
            finder: Arc::new(SupermarketFinder::with_parts(resolver, Box::new(overpass))),
        })
    }

    async fn call(overpass: FakeInterpreter, city: Option<&str>) -> (StatusCode, ResultEnvelope) {
        let query = SupermarketQuery {
            city: city.map(str::to_string),
        };
        let (status, Json(envelope)) = supermarkets(State(state(overpass)), Query(query)).await;
        (status, envelope)
    }

    #[tokio::test]
    async fn test_missing_city_is_bad_request() {
        let (status, envelope) = call(FakeInterpreter::json("{}"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(envelope, ResultEnvelope::from(ErrorBody::city_required()));
    }

    #[tokio::test]
    async fn test_unknown_city_is_not_found() {
        let (status, _) = call(FakeInterpreter::json("{}"), Some("Gondor")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let (status, envelope) = call(FakeInterpreter::status(504), Some("Karaj")).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(envelope, ResultEnvelope::from(ErrorBody::from(FetchError::Status(504))));
    }

    #[tokio::test]
    async fn test_success_is_ok() {
        let overpass = FakeInterpreter::json(r#"{"elements": [{"tags": {"name": "Refah"}, "lat": 1.0, "lon": 2.0}]}"#);
        let (status, envelope) = call(overpass, Some("Tabriz")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(envelope.is_success());
    }

    #[tokio::test]
    async fn test_city_list() {
        let Json(cities) = city_list().await;
        assert!(cities.iter().any(|c| c.name == "Mashhad"));
        assert!(cities.iter().any(|c| c.name == "مشهد"));
    }
}
