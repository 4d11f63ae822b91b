use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;

use booking_server::config::{
    AppConfig, CorsConfig, DatabaseConfig, LoggingConfig, MEMORY_URL, ServerConfig,
};
use booking_server::state::AppState;
use booking_server::store::{EntityStore, MemoryStore};

pub mod routes {
    pub const VENUES: &str = "/api/v1/venues";
    pub const VENUE_SEARCH: &str = "/api/v1/venues/search";
    pub const ARTISTS: &str = "/api/v1/artists";
    pub const ARTIST_SEARCH: &str = "/api/v1/artists/search";
    pub const SHOWS: &str = "/api/v1/shows";
    pub const OPENAPI: &str = "/api-docs/openapi.json";

    pub fn venue(id: i32) -> String {
        format!("/api/v1/venues/{id}")
    }

    pub fn venue_edit(id: i32) -> String {
        format!("/api/v1/venues/{id}/edit")
    }

    pub fn artist(id: i32) -> String {
        format!("/api/v1/artists/{id}")
    }

    pub fn artist_edit(id: i32) -> String {
        format!("/api/v1/artists/{id}/edit")
    }
}

/// A running test server backed by a fresh in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryStore>,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors: CorsConfig {
                allow_origins: vec![],
                max_age: 3600,
            },
        },
        database: DatabaseConfig {
            url: MEMORY_URL.to_string(),
            max_connections: 1,
            sqlx_logging: false,
        },
        logging: LoggingConfig {
            filter: "warn".to_string(),
        },
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let store = Arc::new(MemoryStore::new());
        let shared: Arc<dyn EntityStore> = store.clone();
        let app = booking_server::build_router(AppState::new(shared, test_config()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            store,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    /// POST an urlencoded form. Repeated keys are sent as given.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .form(fields)
            .send()
            .await
            .expect("Failed to send form POST request");

        TestResponse::from_response(res).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send PUT request");

        TestResponse::from_response(res).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send DELETE request");

        TestResponse::from_response(res).await
    }

    /// Create a venue via the API and return its `id`.
    pub async fn create_venue(&self, name: &str, city: &str, state: &str) -> i32 {
        let res = self
            .post(
                routes::VENUES,
                &serde_json::json!({
                    "name": name,
                    "city": city,
                    "state": state,
                    "address": "1015 Folsom Street",
                    "genres": ["Jazz", "Reggae"],
                    "image_link": format!("https://img.example/{name}"),
                }),
            )
            .await;
        assert_eq!(res.status, 201, "create_venue failed: {}", res.text);
        res.id()
    }

    /// Create an artist via the API and return its `id`.
    pub async fn create_artist(&self, name: &str) -> i32 {
        let res = self
            .post(
                routes::ARTISTS,
                &serde_json::json!({
                    "name": name,
                    "city": "San Francisco",
                    "state": "CA",
                    "genres": ["Rock n Roll"],
                    "image_link": format!("https://img.example/{name}"),
                }),
            )
            .await;
        assert_eq!(res.status, 201, "create_artist failed: {}", res.text);
        res.id()
    }

    /// Create a show via the API and return its `id`.
    pub async fn create_show(&self, artist_id: i32, venue_id: i32, start_time: &str) -> i32 {
        let res = self
            .post(
                routes::SHOWS,
                &serde_json::json!({
                    "artist_id": artist_id,
                    "venue_id": venue_id,
                    "start_time": start_time,
                }),
            )
            .await;
        assert_eq!(res.status, 201, "create_show failed: {}", res.text);
        res.id()
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    pub fn id(&self) -> i32 {
        self.body["id"]
            .as_i64()
            .expect("response body should contain 'id'") as i32
    }
}

/// A start time far enough ahead to stay upcoming.
pub const FUTURE: &str = "2099-05-21T21:30:00";

/// A start time that is always past.
pub const PAST: &str = "2019-05-21T21:30:00";
