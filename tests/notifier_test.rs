use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::routing::post;
use knary_notify::config::schema::{
    DiscordConfig, LarkConfig, ProvidersConfig, PushoverConfig, SlackConfig, TeamsConfig,
    TelegramConfig,
};
use knary_notify::notify::{Notifier, sign};
use serde_json::Value;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
struct Captured {
    method: Method,
    path: String,
    content_type: Option<String>,
    body: Bytes,
}

impl Captured {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("body is valid JSON")
    }

    fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

type RequestLog = Arc<Mutex<Vec<Captured>>>;

async fn capture(
    State(log): State<RequestLog>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    log.lock().unwrap().push(Captured {
        method,
        path: uri.path().to_string(),
        content_type,
        body,
    });
    StatusCode::OK
}

struct TestServer {
    base_url: String,
    log: RequestLog,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn start() -> Self {
        let log: RequestLog = Arc::default();
        let app = Router::new()
            .route("/fail", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .fallback(capture)
            .with_state(Arc::clone(&log));
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr: SocketAddr = listener.local_addr().expect("addr");
        let server = axum::serve(listener, app).into_future();
        let handle = tokio::spawn(async move {
            let _ = server.await;
        });
        Self {
            base_url: format!("http://{}", addr),
            log,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn requests(&self) -> Vec<Captured> {
        self.log.lock().unwrap().clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn slack_only(url: String) -> ProvidersConfig {
    ProvidersConfig {
        slack: Some(SlackConfig::new(url)),
        ..ProvidersConfig::default()
    }
}

#[tokio::test]
async fn plain_message_is_embedded_unchanged() {
    let server = TestServer::start().await;

    Notifier::default()
        .notify("DNS query for abc.example from 10.0.0.1", &slack_only(server.url("/slack")))
        .await;

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/slack");
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        request.json(),
        serde_json::json!({
            "username": "knary",
            "icon_emoji": ":bird:",
            "text": "DNS query for abc.example from 10.0.0.1",
        })
    );
}

#[tokio::test]
async fn newlines_are_sent_as_escapes() {
    let server = TestServer::start().await;

    Notifier::default()
        .notify("first\r\nsecond\nthird", &slack_only(server.url("/slack")))
        .await;

    let request = &server.requests()[0];
    let text = request.text();
    assert!(text.contains(r#""text":"first\nsecond\nthird""#));
    assert!(!text.contains('\n'));
    assert!(!text.contains('\r'));
    assert_eq!(request.json()["text"], "first\nsecond\nthird");
}

#[tokio::test]
async fn quotes_are_backslash_escaped() {
    let server = TestServer::start().await;

    Notifier::default()
        .notify(r#"User-Agent: "curl/8.0""#, &slack_only(server.url("/slack")))
        .await;

    let request = &server.requests()[0];
    assert!(request.text().contains(r#"User-Agent: \"curl/8.0\""#));
    assert_eq!(request.json()["text"], r#"User-Agent: "curl/8.0""#);
}

#[tokio::test]
async fn backslashes_keep_the_body_valid() {
    let server = TestServer::start().await;

    Notifier::default()
        .notify(r"GET /..\..\windows", &slack_only(server.url("/slack")))
        .await;

    assert_eq!(server.requests()[0].json()["text"], r"GET /..\..\windows");
}

#[tokio::test]
async fn no_providers_means_no_requests() {
    let server = TestServer::start().await;

    Notifier::default()
        .notify("hello", &ProvidersConfig::default())
        .await;

    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn slack_and_discord_both_fire() {
    let server = TestServer::start().await;
    let config = ProvidersConfig {
        slack: Some(SlackConfig::new(server.url("/slack-hook"))),
        discord: Some(DiscordConfig::new(server.url("/discord-hook"))),
        ..ProvidersConfig::default()
    };

    Notifier::default().notify("ping", &config).await;

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    let slack = requests
        .iter()
        .find(|request| request.path == "/slack-hook")
        .expect("slack request");
    let discord = requests
        .iter()
        .find(|request| request.path == "/discord-hook/slack")
        .expect("discord request");
    assert_eq!(slack.json()["icon_emoji"], ":bird:");
    assert_eq!(
        discord.json(),
        serde_json::json!({"username": "knary", "text": "ping"})
    );
}

#[tokio::test]
async fn every_provider_fires_in_order() {
    let server = TestServer::start().await;
    let config = ProvidersConfig {
        slack: Some(SlackConfig::new(server.url("/slack"))),
        pushover: Some(PushoverConfig {
            api_url: server.url("/1/messages.json/"),
            ..PushoverConfig::new("app-token", "user-key")
        }),
        telegram: Some(TelegramConfig {
            api_base: server.base_url.clone(),
            ..TelegramConfig::new("-100123", "42:token")
        }),
        lark: Some(LarkConfig::new(server.url("/lark"))),
        discord: Some(DiscordConfig::new(server.url("/discord"))),
        teams: Some(TeamsConfig::new(server.url("/teams"))),
    };

    Notifier::default()
        .notify("Request:\n```GET /```From: 10.0.0.1", &config)
        .await;

    let requests = server.requests();
    let paths: Vec<&str> = requests.iter().map(|request| request.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "/slack",
            "/1/messages.json/",
            "/bot42:token/sendMessage",
            "/lark",
            "/discord/slack",
            "/teams",
        ]
    );

    assert_eq!(
        requests[1].json(),
        serde_json::json!({
            "token": "app-token",
            "user": "user-key",
            "message": "Request:\n```GET /```From: 10.0.0.1",
        })
    );
    assert_eq!(requests[2].json()["chat_id"], "-100123");
    assert_eq!(requests[2].json()["text"], "Request:\nGET /\nFrom: 10.0.0.1");
    assert_eq!(
        requests[3].json()["content"]["post"]["en_us"]["content"][0][0]["text"],
        "Request:\nGET /From: 10.0.0.1"
    );
    assert_eq!(
        requests[5].json()["text"],
        "Request:\n<pre>GET /</pre>From: 10.0.0.1"
    );
    for request in [&requests[2], &requests[3], &requests[5]] {
        assert!(!request.text().contains("```"));
    }
}

#[tokio::test]
async fn lark_requests_are_signed_when_secret_is_set() {
    let server = TestServer::start().await;
    let config = ProvidersConfig {
        lark: Some(LarkConfig::new(server.url("/lark")).with_secret("abc")),
        ..ProvidersConfig::default()
    };

    Notifier::default().notify("hit", &config).await;

    let body = server.requests()[0].json();
    let timestamp: i64 = body["timestamp"]
        .as_str()
        .expect("timestamp string")
        .parse()
        .expect("numeric timestamp");
    assert_eq!(body["sign"], sign("abc", timestamp).unwrap());
    assert_eq!(body["msg_type"], "post");
    assert_eq!(body["content"]["post"]["en_us"]["title"], "Knary Triggered 🐦");
}

#[tokio::test]
async fn unreachable_provider_does_not_block_others() {
    let server = TestServer::start().await;
    let config = ProvidersConfig {
        slack: Some(SlackConfig::new("http://127.0.0.1:1/unreachable")),
        teams: Some(TeamsConfig::new(server.url("/teams"))),
        ..ProvidersConfig::default()
    };

    Notifier::default().notify("still delivered", &config).await;

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/teams");
}

#[tokio::test]
async fn error_status_does_not_block_others() {
    let server = TestServer::start().await;
    let config = ProvidersConfig {
        slack: Some(SlackConfig::new(server.url("/fail"))),
        discord: Some(DiscordConfig::new(server.url("/discord"))),
        ..ProvidersConfig::default()
    };

    Notifier::default().notify("hello", &config).await;

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/discord/slack");
}

#[tokio::test]
async fn partially_configured_providers_stay_silent() {
    let server = TestServer::start().await;
    let config = ProvidersConfig {
        slack: Some(SlackConfig::new("")),
        pushover: Some(PushoverConfig {
            api_url: server.url("/pushover"),
            ..PushoverConfig::new("app-token", "")
        }),
        telegram: Some(TelegramConfig {
            api_base: server.base_url.clone(),
            ..TelegramConfig::new("", "42:token")
        }),
        ..ProvidersConfig::default()
    };

    Notifier::default().notify("hello", &config).await;

    assert!(server.requests().is_empty());
}
