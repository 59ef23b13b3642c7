#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use groupie_web::cache::{CACHE_TTL, ManualClock, TtlCache};
use groupie_web::config::{Config, DEFAULT_REFERER};
use groupie_web::router;
use groupie_web::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "server-secret";

pub fn artists_json() -> Value {
    json!([
        {
            "id": 1,
            "image": "https://groupietrackers.herokuapp.com/api/images/queen.jpeg",
            "name": "Queen",
            "members": ["Freddie Mercury", "Brian May", "John Daecon", "Roger Meddows-Taylor"],
            "creationDate": 1970,
            "firstAlbum": "14-12-1973",
            "locations": "https://groupietrackers.herokuapp.com/api/locations/1",
            "concertDates": "https://groupietrackers.herokuapp.com/api/dates/1",
            "relations": "https://groupietrackers.herokuapp.com/api/relation/1"
        },
        {
            "id": 2,
            "image": "https://groupietrackers.herokuapp.com/api/images/soja.jpeg",
            "name": "SOJA",
            "members": ["Jacob Hemphill", "Bob Jefferson"],
            "creationDate": 1997,
            "firstAlbum": "05-06-2002"
        },
        {
            "id": 3,
            "image": "https://groupietrackers.herokuapp.com/api/images/pinkfloyd.jpeg",
            "name": "Pink Floyd",
            "members": ["Roger Waters", "David Gilmour"],
            "creationDate": 1965,
            "firstAlbum": "05-08-1967"
        }
    ])
}

pub fn relations_json() -> Value {
    json!({
        "index": [
            {
                "id": 1,
                "datesLocations": {
                    "north_carolina-usa": ["07-04-2019"],
                    "osaka-japan": ["28-01-2020", "30-01-2020"]
                }
            },
            {
                "id": 3,
                "datesLocations": { "paris-france": ["01-01-2020"] }
            }
        ]
    })
}

/// Mock primary upstream serving the two datasets under `/api`.
pub async fn primary_upstream() -> MockServer {
    let server = MockServer::start().await;
    mount_datasets(&server, artists_json(), relations_json()).await;
    server
}

pub async fn mount_datasets(server: &MockServer, artists: Value, relations: Value) {
    Mock::given(method("GET"))
        .and(path("/api/artists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(artists))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/relation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(relations))
        .mount(server)
        .await;
}

pub fn test_config(primary: &MockServer, youtube: Option<&MockServer>, key: Option<&str>) -> Config {
    Config {
        primary_base: format!("{}/api", primary.uri()),
        youtube_base: youtube
            .map(|server| format!("{}/youtube/v3", server.uri()))
            .unwrap_or_else(|| "http://127.0.0.1:1/youtube/v3".to_string()),
        youtube_api_key: key.map(str::to_string),
        referer: DEFAULT_REFERER.to_string(),
        port: 0,
    }
}

pub fn test_state(config: Config) -> (Arc<AppState>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let cache = Arc::new(TtlCache::with_clock(CACHE_TTL, clock.clone()));
    let state = AppState::with_cache(config, cache).unwrap();
    (Arc::new(state), clock)
}

pub fn test_app(config: Config) -> Router {
    let (state, _) = test_state(config);
    router(state)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|value| value.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    (status, content_type, body)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}
