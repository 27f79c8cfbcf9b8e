//! CouchDB HTTP client backing the `CouchApi` port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::app::ports::{CouchApi, CouchApiError};
use crate::domain::{ActiveTask, AllDocsResponse, ReplicationRequest, ServerOrigin, Session};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Design documents sort between these two keys.
const DESIGN_START_KEY: &str = "\"_design/\"";
const DESIGN_END_KEY: &str = "\"_design0\"";

/// CouchDB error bodies look like `{"error": "...", "reason": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    reason: Option<String>,
}

pub struct CouchHttpClient {
    client: Client,
    origin: ServerOrigin,
    session: Session,
}

impl CouchHttpClient {
    pub fn new(origin: ServerOrigin, session: Session) -> Result<Self, CouchApiError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| CouchApiError::ConnectionFailed(e.to_string()))?;
        Ok(Self {
            client,
            origin,
            session,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.origin.url_for(path));
        match &self.session.user {
            Some(user) => builder.basic_auth(user, self.session.password.as_deref()),
            None => builder,
        }
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, CouchApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| CouchApiError::ConnectionFailed(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CouchApiError::InvalidResponse(e.to_string()))?;

        if !status.is_success() {
            return Err(server_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| CouchApiError::InvalidResponse(e.to_string()))
    }
}

fn server_error(status: u16, body: &str) -> CouchApiError {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok();
    let reason = parsed
        .and_then(|b| b.reason.filter(|r| !r.is_empty()).or(b.error))
        .unwrap_or_else(|| format!("HTTP {}", status));
    CouchApiError::Server { status, reason }
}

fn design_documents_path(database: &str) -> String {
    format!(
        "{}/_all_docs?startkey={}&endkey={}&include_docs=true",
        urlencoding::encode(database),
        urlencoding::encode(DESIGN_START_KEY),
        urlencoding::encode(DESIGN_END_KEY),
    )
}

#[async_trait]
impl CouchApi for CouchHttpClient {
    async fn list_databases(&self) -> Result<Vec<String>, CouchApiError> {
        tracing::debug!(origin = %self.origin, "GET /_all_dbs");
        Self::send_json(self.request(Method::GET, "/_all_dbs")).await
    }

    async fn fetch_design_documents(
        &self,
        database: &str,
    ) -> Result<AllDocsResponse, CouchApiError> {
        let path = design_documents_path(database);
        tracing::debug!(%database, "GET design documents");
        Self::send_json(self.request(Method::GET, &path)).await
    }

    async fn start_replication(&self, request: &ReplicationRequest) -> Result<(), CouchApiError> {
        tracing::debug!(origin = %self.origin, "POST /_replicator");
        let builder = self.request(Method::POST, "/_replicator").json(request);
        let _: serde_json::Value = Self::send_json(builder).await?;
        Ok(())
    }

    async fn active_tasks(&self) -> Result<Vec<ActiveTask>, CouchApiError> {
        Self::send_json(self.request(Method::GET, "/_active_tasks")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    use crate::domain::{
        EndpointType, ReplicationJob, ReplicationSource, ReplicationTarget,
        build_replication_request,
    };

    fn origin(port: u16) -> ServerOrigin {
        ServerOrigin {
            scheme: "http".to_string(),
            host: "127.0.0.1".to_string(),
            port,
        }
    }

    fn admin() -> Session {
        Session::new(Some("admin".to_string()), Some("pw".to_string()))
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(head_end) = text.find("\r\n\r\n") {
                let content_length = text[..head_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= head_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    /// Answers one request with `status` and `body`; resolves to the raw request.
    async fn serve_once(status: &'static str, body: &'static str) -> (u16, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (port, handle)
    }

    mod list_databases {
        use super::*;

        #[tokio::test]
        async fn sends_basic_auth_and_parses_names() {
            let (port, server) = serve_once("200 OK", r#"["_replicator","orders"]"#).await;
            let client = CouchHttpClient::new(origin(port), admin()).unwrap();

            let names = client.list_databases().await.unwrap();
            let request = server.await.unwrap().to_ascii_lowercase();

            assert_eq!(names, vec!["_replicator", "orders"]);
            assert!(request.starts_with("get /_all_dbs http/1.1"));
            assert!(request.contains("authorization: basic ywrtaw46chc="));
        }

        #[tokio::test]
        async fn anonymous_session_sends_no_credentials() {
            let (port, server) = serve_once("200 OK", "[]").await;
            let client = CouchHttpClient::new(origin(port), Session::default()).unwrap();

            client.list_databases().await.unwrap();
            let request = server.await.unwrap().to_ascii_lowercase();

            assert!(!request.contains("authorization:"));
        }

        #[tokio::test]
        async fn unreachable_server_is_connection_error() {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let port = listener.local_addr().unwrap().port();
            drop(listener);
            let client = CouchHttpClient::new(origin(port), admin()).unwrap();

            let result = client.list_databases().await;

            assert!(matches!(result, Err(CouchApiError::ConnectionFailed(_))));
        }
    }

    mod fetch_design_documents {
        use super::*;

        #[test]
        fn path_encodes_database_and_key_range() {
            assert_eq!(
                design_documents_path("a/b"),
                "a%2Fb/_all_docs?startkey=%22_design%2F%22&endkey=%22_design0%22&include_docs=true"
            );
        }

        #[tokio::test]
        async fn parses_rows_with_docs() {
            let body = r#"{"total_rows":2,"offset":0,"rows":[
                {"id":"_design/app","key":"_design/app","value":{"rev":"1-a"},
                 "doc":{"_id":"_design/app","_rev":"1-a","filters":{"by_type":"function(doc){}"}}}
            ]}"#;
            let (port, server) = serve_once("200 OK", body).await;
            let client = CouchHttpClient::new(origin(port), admin()).unwrap();

            let response = client.fetch_design_documents("orders").await.unwrap();
            let request = server.await.unwrap();

            assert_eq!(response.rows.len(), 1);
            assert!(request.contains("/orders/_all_docs?startkey="));
        }

        #[tokio::test]
        async fn missing_database_reports_reason() {
            let (port, server) = serve_once(
                "404 Object Not Found",
                r#"{"error":"not_found","reason":"Database does not exist."}"#,
            )
            .await;
            let client = CouchHttpClient::new(origin(port), admin()).unwrap();

            let result = client.fetch_design_documents("nope").await;
            server.await.unwrap();

            assert_eq!(
                result.unwrap_err(),
                CouchApiError::Server {
                    status: 404,
                    reason: "Database does not exist.".to_string()
                }
            );
        }
    }

    mod start_replication {
        use super::*;

        fn request() -> ReplicationRequest {
            let job = ReplicationJob {
                source: ReplicationSource {
                    endpoint_type: EndpointType::Local,
                    database: "orders".to_string(),
                    ..Default::default()
                },
                target: ReplicationTarget {
                    endpoint_type: EndpointType::Local,
                    database: "backup".to_string(),
                    ..Default::default()
                },
            };
            build_replication_request(&job, &admin(), &ServerOrigin::default()).unwrap()
        }

        #[tokio::test]
        async fn posts_document_to_replicator() {
            let (port, server) =
                serve_once("201 Created", r#"{"ok":true,"id":"abc","rev":"1-x"}"#).await;
            let client = CouchHttpClient::new(origin(port), admin()).unwrap();

            client.start_replication(&request()).await.unwrap();
            let raw = server.await.unwrap();

            assert!(raw.starts_with("POST /_replicator HTTP/1.1"));
            assert!(raw.contains(r#""user_ctx":{"name":"admin","roles":["_admin"]}"#));
            assert!(raw.contains(r#""url":"http://127.0.0.1:5984/orders""#));
        }

        #[tokio::test]
        async fn unauthorized_carries_reason() {
            let (port, server) = serve_once(
                "401 Unauthorized",
                r#"{"error":"unauthorized","reason":"Name or password is incorrect."}"#,
            )
            .await;
            let client = CouchHttpClient::new(origin(port), admin()).unwrap();

            let err = client.start_replication(&request()).await.unwrap_err();
            server.await.unwrap();

            assert_eq!(err.to_string(), "Name or password is incorrect.");
        }

        #[tokio::test]
        async fn non_json_error_falls_back_to_status() {
            let (port, server) = serve_once("500 Internal Server Error", "oops").await;
            let client = CouchHttpClient::new(origin(port), admin()).unwrap();

            let err = client.start_replication(&request()).await.unwrap_err();
            server.await.unwrap();

            assert_eq!(err.to_string(), "HTTP 500");
        }
    }

    mod active_tasks {
        use super::*;

        #[tokio::test]
        async fn parses_task_list() {
            let body = r#"[
                {"type":"replication","source":"http://127.0.0.1:5984/orders/","target":"backup",
                 "replication_id":"abc+continuous","continuous":true,"docs_written":12,
                 "doc_write_failures":0,"started_on":1700000000,"updated_on":1700000100},
                {"type":"indexer","database":"orders"}
            ]"#;
            let (port, server) = serve_once("200 OK", body).await;
            let client = CouchHttpClient::new(origin(port), admin()).unwrap();

            let tasks = client.active_tasks().await.unwrap();
            server.await.unwrap();

            assert_eq!(tasks.len(), 2);
            assert!(tasks[0].is_replication());
            assert!(!tasks[1].is_replication());
        }
    }
}
