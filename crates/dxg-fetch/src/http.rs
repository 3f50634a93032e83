//! HTTP content source.

use std::time::Duration;

use reqwest::Url;

use crate::{ContentSource, error::FetchError};

/// Fetches documents relative to a base URL.
pub struct HttpSource {
    http: reqwest::Client,
    base: Url,
}

impl HttpSource {
    /// Create a source rooted at `base_url`.
    ///
    /// A trailing slash is added to the base so data paths resolve beneath it
    /// rather than replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] for an unparsable or non-http(s)
    /// base, or [`FetchError::Http`] if the client cannot be built.
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base = Url::parse(&normalized)
            .map_err(|e| FetchError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            let scheme = base.scheme();
            let message = format!("{base_url}: unsupported scheme '{scheme}'");
            return Err(FetchError::InvalidUrl(message));
        }

        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base,
        })
    }

    /// Resolve a data path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if the joined URL is invalid.
    pub fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        self.base
            .join(path)
            .map_err(|e| FetchError::InvalidUrl(format!("{path}: {e}")))
    }
}

impl ContentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.resolve(path)?;
        tracing::debug!(%url, "fetching content");
        let resp = check_response(self.http.get(url).send().await?).await?;
        Ok(resp.bytes().await?.to_vec())
    }

    fn describe(&self, path: &str) -> String {
        let resolved = self.resolve(path);
        resolved.map_or_else(|_| path.to_string(), |url| url.to_string())
    }
}

/// Reject non-success responses as [`FetchError::Api`] carrying the body.
///
/// # Errors
///
/// Returns [`FetchError::Api`] for any status outside 2xx.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    if !resp.status().is_success() {
        return Err(FetchError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch_quiz;
    use dxg_core::QuizAnswerPolicy;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const QUIZ_BODY: &str = r#"[{"question":"2+2?","options":["3","4"],"correctAnswer":1}]"#;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        let response = ::http::Response::builder()
            .status(status)
            .body(body)
            .unwrap();
        reqwest::Response::from(response)
    }

    /// Answer a single request on a local port with a canned response.
    ///
    /// Returns the base URL and a handle yielding the raw request head.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 512];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });
        (format!("http://{addr}/"), server)
    }

    #[test]
    fn resolves_paths_beneath_base_without_trailing_slash() {
        let source = HttpSource::new("https://dx.example.com/guide", "test", None).unwrap();
        let url = source.resolve("data/quiz.json").unwrap();
        assert_eq!(url.as_str(), "https://dx.example.com/guide/data/quiz.json");
    }

    #[test]
    fn resolves_paths_beneath_base_with_trailing_slash() {
        let source = HttpSource::new("http://localhost:8080/", "test", None).unwrap();
        assert_eq!(
            source.describe("data/checklist.json"),
            "http://localhost:8080/data/checklist.json"
        );
    }

    #[test]
    fn rejects_unparsable_base() {
        let result = HttpSource::new("not a url", "test", None);
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let result = HttpSource::new("file:///var/www", "test", None);
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_body() {
        let resp = mock_response(404, "<html>Not Found</html>");
        let err = check_response(resp).await.unwrap_err();
        let FetchError::Api { status, message } = err else {
            panic!("expected api error");
        };
        assert_eq!(status, 404);
        assert_eq!(message, "<html>Not Found</html>");
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "[]");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn fetch_decodes_document_served_over_http() {
        let (base, server) = serve_once("200 OK", QUIZ_BODY).await;
        let source = HttpSource::new(&base, "dxguide-test", None).unwrap();

        let quiz = fetch_quiz(&source, QuizAnswerPolicy::Permissive)
            .await
            .unwrap();

        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz[0].correct_answer, 1);
        let request = server.await.unwrap();
        assert!(request.starts_with("GET /data/quiz.json HTTP/1.1"));
    }

    #[tokio::test]
    async fn fetch_reports_server_error_with_body() {
        let (base, _server) = serve_once("500 Internal Server Error", "boom").await;
        let source = HttpSource::new(&base, "dxguide-test", None).unwrap();

        let err = source.fetch("data/quiz.json").await.unwrap_err();

        assert!(matches!(err, FetchError::Api { status: 500, .. }));
        assert_eq!(err.to_string(), "API error (500): boom");
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_fetch_reports_api_error_for_missing_document() {
        let source = HttpSource::new("https://example.com/", "dxguide-test", None).unwrap();
        let result = source.fetch("data/definitely-missing.json").await;
        assert!(matches!(result, Err(FetchError::Api { status: 404, .. })));
    }
}
