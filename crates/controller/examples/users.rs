use bytes::Bytes;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use micro_controller::{controller_handler, Controller, ControllerConfig, ControllerError, ControllerResult, Handler};
use serde::{Deserialize, Serialize};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const CONFIG: &str = r#"
service_name = "users"
enabled_methods = ["GET", "POST", "OPTIONS"]
"#;

#[derive(Serialize, Deserialize, Debug)]
struct User {
    id: u64,
    name: String,
}

struct UsersController {
    config: ControllerConfig,
}

#[async_trait::async_trait]
impl Controller for UsersController {
    fn config(&self) -> &ControllerConfig {
        &self.config
    }

    async fn get(&self, req: Request<Bytes>) -> ControllerResult {
        match req.uri().path().trim_start_matches("/users/").parse::<u64>() {
            Ok(id) => self.config.json(&User { id, name: format!("user-{id}") }),
            Err(_) => Err(ControllerError::with_status(StatusCode::BAD_REQUEST, "user id must be a number")),
        }
    }

    async fn post(&self, req: Request<Bytes>) -> ControllerResult {
        let user: User = serde_json::from_slice(req.body())?;
        info!(?user, "creating user");
        self.config.json_with_status(&user, StatusCode::CREATED)
    }
}

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = ControllerConfig::from_toml_str(CONFIG).expect("invalid controller config");
    let handler = controller_handler(UsersController { config });

    let requests = [
        (Method::GET, "/users/7", ""),
        (Method::GET, "/users/abc", ""),
        (Method::POST, "/users", r#"{"id":8,"name":"ferris"}"#),
        (Method::POST, "/users", r#"{"id":"eight"}"#),
        (Method::DELETE, "/users/7", ""),
        (Method::OPTIONS, "/users", ""),
        (Method::HEAD, "/users/7", ""),
    ];

    for (method, uri, body) in requests {
        let request = Request::builder()
            .method(method.clone())
            .uri(uri)
            .body(Bytes::from_static(body.as_bytes()))
            .expect("invalid request");

        let response = match handler.call(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let status = response.status();
        let allow = response.headers().get(http::header::ALLOW).cloned();
        let body = match response.into_body().collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(never) => match never {},
        };

        info!(%method, uri, %status, ?allow, body = %String::from_utf8_lossy(&body), "answered");
    }
}
