use pubcore::{
    error::BackendError,
    report::ErrorReporter,
};
use reqwest::{
    header::{
        HeaderMap,
        HeaderValue,
        CONTENT_TYPE,
    },
    Method,
    Url,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::error::{
    from_reqwest,
    status_error,
};

/// Where the backend listens unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Thin wrapper around the HTTP client, bound to a fixed API base URL.
///
/// All failures pass through `handle_error`, which hands them to the
/// registered reporter (if any) and returns them unchanged.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| BackendError::InvalidUrl(format!("{base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(BackendError::InvalidUrl(base_url.to_string()));
        }
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(from_reqwest)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            reporter: None,
        })
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, BackendError> {
        self.send(Method::GET, path, query, None::<&()>).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, BackendError> {
        self.send(Method::POST, path, &[], Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, BackendError> {
        self.send(Method::PUT, path, &[], Some(body)).await
    }

    /// Only the status of a delete is checked; whatever body comes back
    /// with a success is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), BackendError> {
        self.fetch(Method::DELETE, path, &[], None::<&()>)
            .await
            .map(|_| ())
            .map_err(|e| self.handle_error(e))
    }

    /// Pass an error through the central handler.
    pub(crate) fn handle_error(&self, error: BackendError) -> BackendError {
        log::debug!("request failed: {error}");
        if let Some(reporter) = &self.reporter {
            reporter.report(&error);
        }
        error
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Value, BackendError> {
        self.execute(method, path, query, body)
            .await
            .map_err(|e| self.handle_error(e))
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Value, BackendError> {
        let text = self.fetch(method, path, query, body).await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// The raw body of a successful response.
    async fn fetch<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<String, BackendError> {
        let url = self.url(path);
        log::debug!("{method} {url} {query:?}");
        let mut request = self.http.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(from_reqwest)?;
        let status = response.status();
        let text = response.text().await.map_err(from_reqwest)?;
        log::trace!("{status} from {url}: {text}");
        if !status.is_success() {
            return Err(status_error(status, &text));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use std::sync::Mutex;
    use tokio::{
        io::{
            AsyncReadExt,
            AsyncWriteExt,
        },
        net::TcpListener,
        task::JoinHandle,
    };
    use super::*;

    /// Answer one connection with `response` and hand back the request as
    /// it arrived on the wire.
    async fn serve_once(
        response: impl Into<String>,
    ) -> anyhow::Result<(String, JoinHandle<anyhow::Result<String>>)> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}/api/v1", listener.local_addr()?);
        let response: String = response.into();
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await?;
            let mut received = Vec::new();
            let mut buf = [0u8; 1024];
            let head_end = loop {
                let n = stream.read(&mut buf).await?;
                anyhow::ensure!(n > 0, "connection closed before the request ended");
                received.extend_from_slice(&buf[..n]);
                if let Some(pos) = received.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };
            let head = String::from_utf8_lossy(&received[..head_end]).to_lowercase();
            let length = head.lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            while received.len() < head_end + length {
                let n = stream.read(&mut buf).await?;
                anyhow::ensure!(n > 0, "connection closed before the body ended");
                received.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).await?;
            stream.shutdown().await?;
            Ok(String::from_utf8_lossy(&received).into_owned())
        });
        Ok((base_url, handle))
    }

    fn recording_client(
        base_url: &str,
    ) -> anyhow::Result<(ApiClient, Arc<Mutex<Vec<String>>>)> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let client = ApiClient::new(base_url)?
            .with_reporter(Arc::new(move |e: &BackendError| {
                sink.lock().unwrap().push(e.to_string());
            }));
        Ok((client, seen))
    }

    #[test]
    fn url_joining() -> anyhow::Result<()> {
        let client = ApiClient::new("http://localhost:8080/api/v1/")?;
        assert_eq!(client.base_url(), "http://localhost:8080/api/v1");
        assert_eq!(client.url("/authors"), "http://localhost:8080/api/v1/authors");
        assert_eq!(client.url("authors/3"), "http://localhost:8080/api/v1/authors/3");
        Ok(())
    }

    #[test]
    fn invalid_base_url() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(BackendError::InvalidUrl(_)),
        ));
        assert!(matches!(
            ApiClient::new("mailto:someone@example.com"),
            Err(BackendError::InvalidUrl(_)),
        ));
    }

    #[test]
    fn errors_reach_reporter() -> anyhow::Result<()> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let client = ApiClient::new("http://localhost:8080/api/v1")?
            .with_reporter(Arc::new(move |e: &BackendError| {
                sink.lock().unwrap().push(e.to_string());
            }));
        let error = client.handle_error(BackendError::Network("refused".to_string()));
        assert!(matches!(error, BackendError::Network(_)));
        assert_eq!(*seen.lock().unwrap(), vec!["network error: refused"]);
        Ok(())
    }

    #[tokio::test]
    async fn delete_ignores_success_body() -> anyhow::Result<()> {
        let (base_url, server) = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-type: text/plain\r\ncontent-length: 7\r\n\
            connection: close\r\n\r\nDeleted",
        ).await?;
        let (client, seen) = recording_client(&base_url)?;
        client.delete("/books/3").await?;
        let request = server.await??;
        assert!(request.starts_with("DELETE /api/v1/books/3 HTTP/1.1\r\n"));
        assert!(seen.lock().unwrap().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delete_still_checks_status() -> anyhow::Result<()> {
        let (base_url, server) = serve_once(
            "HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        ).await?;
        let (client, seen) = recording_client(&base_url)?;
        let error = client.delete("/books/3").await.unwrap_err();
        server.await??;
        assert_eq!(error.status_code(), Some(StatusCode::NOT_FOUND));
        assert_eq!(seen.lock().unwrap().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn status_error_carries_body_message() -> anyhow::Result<()> {
        let body = r#"{"success":false,"message":"Title must not be blank","data":null}"#;
        let response = format!(
            "HTTP/1.1 400 Bad Request\r\ncontent-type: application/json\r\n\
            content-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len(),
        );
        let (base_url, server) = serve_once(response).await?;
        let (client, seen) = recording_client(&base_url)?;
        let error = client.post("/books", &serde_json::json!({ "title": "" }))
            .await
            .unwrap_err();
        let request = server.await??;
        assert!(request.starts_with("POST /api/v1/books HTTP/1.1\r\n"));
        assert!(request.ends_with(r#"{"title":""}"#));
        match &error {
            BackendError::Status { status, message } => {
                assert_eq!(*status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Title must not be blank");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["400 Bad Request Title must not be blank"],
        );
        Ok(())
    }

    #[tokio::test]
    async fn no_content_is_null() -> anyhow::Result<()> {
        let (base_url, server) = serve_once(
            "HTTP/1.1 204 No Content\r\nconnection: close\r\n\r\n",
        ).await?;
        let (client, seen) = recording_client(&base_url)?;
        let value = client.put("/authors/2", &serde_json::json!({ "name": "Le Guin" })).await?;
        server.await??;
        assert_eq!(value, Value::Null);
        assert!(seen.lock().unwrap().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn query_and_content_type_on_the_wire() -> anyhow::Result<()> {
        let body = r#"{"data":{"content":[],"totalElements":0}}"#;
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\
            content-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len(),
        );
        let (base_url, server) = serve_once(response).await?;
        let (client, _) = recording_client(&base_url)?;
        let query = [
            ("page", "2".to_string()),
            ("size", "5".to_string()),
            ("sortDirection", "DESC".to_string()),
        ];
        let value = client.get("/magazines", &query).await?;
        let request = server.await??;
        assert!(request.starts_with(
            "GET /api/v1/magazines?page=2&size=5&sortDirection=DESC HTTP/1.1\r\n"
        ));
        assert!(request.to_lowercase().contains("content-type: application/json\r\n"));
        assert_eq!(value["data"]["totalElements"], 0);
        Ok(())
    }
}
