//! Download draft content from a URL.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

/// Timeout for the whole request, connect included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch the body of `url` as UTF-8 text.
///
/// # Errors
///
/// Returns an error if the URL is invalid, the request fails or times out,
/// the server answers with a non-success status, the body is larger than
/// `max_bytes`, or the body is not valid UTF-8.
pub async fn fetch_url_content(url: &str, timeout: Duration, max_bytes: u64) -> Result<String> {
    let parsed = reqwest::Url::parse(url).with_context(|| format!("Invalid URL: {url}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("Unsupported URL scheme '{}': {url}", parsed.scheme());
    }

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")?;

    debug!(%url, "downloading draft content");
    let response = client
        .get(parsed)
        .send()
        .await
        .with_context(|| format!("Error getting content from URL: {url}"))?
        .error_for_status()
        .with_context(|| format!("Error getting content from URL: {url}"))?;

    let text = read_body(response, url, max_bytes).await?;
    info!(%url, bytes = text.len(), "downloaded draft content");
    Ok(text)
}

/// Read the response body chunk by chunk, giving up as soon as it grows past
/// `max_bytes`. A declared `Content-Length` over the limit fails before any
/// chunk is read.
async fn read_body(mut response: reqwest::Response, url: &str, max_bytes: u64) -> Result<String> {
    if let Some(len) = response.content_length()
        && len > max_bytes
    {
        bail!("Content at {url} is {len} bytes, larger than the {max_bytes} byte limit");
    }

    let mut body = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .with_context(|| format!("Failed to read response body from {url}"))?
    {
        if (body.len() + chunk.len()) as u64 > max_bytes {
            bail!("Content at {url} is larger than the {max_bytes} byte limit");
        }
        body.extend_from_slice(&chunk);
    }

    String::from_utf8(body).with_context(|| format!("Content at {url} is not valid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one HTTP/1.1 response with a chunked body and no `Content-Length`.
    async fn serve_chunked(chunks: Vec<String>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;

            let mut response =
                "HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\nConnection: close\r\n\r\n"
                    .to_owned();
            for chunk in &chunks {
                write!(response, "{:x}\r\n{chunk}\r\n", chunk.len()).unwrap();
            }
            response.push_str("0\r\n\r\n");
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}/draft.json")
    }

    async fn get(url: &str) -> reqwest::Response {
        reqwest::Client::builder()
            .no_proxy()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap()
            .get(url)
            .send()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let err = fetch_url_content("not a url", DEFAULT_TIMEOUT, 1024)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid URL"), "got: {err}");
    }

    #[tokio::test]
    async fn test_unsupported_scheme() {
        let err = fetch_url_content("file:///etc/passwd", DEFAULT_TIMEOUT, 1024)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Unsupported URL scheme"), "got: {err}");
    }

    #[tokio::test]
    async fn test_chunked_body_within_limit() {
        let url = serve_chunked(vec!["{\"name\": ".to_owned(), "\"User\"}".to_owned()]).await;
        let response = get(&url).await;
        assert_eq!(response.content_length(), None);

        let body = read_body(response, &url, 1024).await.unwrap();
        assert_eq!(body, "{\"name\": \"User\"}");
    }

    #[tokio::test]
    async fn test_chunked_body_over_limit() {
        let url = serve_chunked(vec!["x".repeat(600); 4]).await;
        let response = get(&url).await;

        let err = read_body(response, &url, 1024).await.unwrap_err();
        assert!(err.to_string().contains("larger than the 1024 byte limit"), "got: {err}");
    }
}
