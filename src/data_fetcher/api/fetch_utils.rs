//! HTTP fetching with status-code aware error handling

use reqwest::Client;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches a URL and returns the response body as text.
///
/// Each call makes exactly one request. Failures are mapped to specific
/// `AppError` variants:
/// - timeouts and connection failures to the network variants
/// - 404, 429, 502/503, other 4xx and other 5xx to their own variants
/// - any other non-success status to `ApiUnexpectedStatus`
/// - an empty or whitespace-only body to `ApiNoData`
#[instrument(skip(client))]
pub(super) async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            500..=599 => AppError::api_server_error(status_code, reason, url),
            _ => AppError::api_unexpected_status(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    if response_text.trim().is_empty() {
        return Err(AppError::api_no_data("Response body is empty", url));
    }

    Ok(response_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    async fn fetch_with_status(status: u16) -> AppError {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/file.csv"))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/file.csv", mock_server.uri());
        fetch_text(&client, &url).await.unwrap_err()
    }

    #[tokio::test]
    async fn test_fetch_text_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/file.csv"))
            .respond_with(ResponseTemplate::new(200).set_body_string("a,b\n1,2\n"))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/file.csv", mock_server.uri());
        let body = fetch_text(&client, &url).await.unwrap();
        assert_eq!(body, "a,b\n1,2\n");
    }

    #[tokio::test]
    async fn test_fetch_text_not_found() {
        assert!(matches!(
            fetch_with_status(404).await,
            AppError::ApiNotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_text_rate_limited() {
        assert!(matches!(
            fetch_with_status(429).await,
            AppError::ApiRateLimit { .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_text_client_error() {
        assert!(matches!(
            fetch_with_status(403).await,
            AppError::ApiClientError { status: 403, .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_text_service_unavailable_is_not_retried() {
        // expect(1) fails the test if the request is repeated
        assert!(matches!(
            fetch_with_status(503).await,
            AppError::ApiServiceUnavailable { status: 503, .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_text_server_error() {
        assert!(matches!(
            fetch_with_status(500).await,
            AppError::ApiServerError { status: 500, .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_text_not_modified_is_unexpected_status() {
        assert!(matches!(
            fetch_with_status(304).await,
            AppError::ApiUnexpectedStatus { status: 304, .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_text_empty_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("  \n"))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/file.csv", mock_server.uri());
        assert!(matches!(
            fetch_text(&client, &url).await,
            Err(AppError::ApiNoData { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_text_connection_refused() {
        // Bind then drop a listener so the port is known to be closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = create_test_http_client();
        let url = format!("http://127.0.0.1:{port}/file.csv");
        assert!(matches!(
            fetch_text(&client, &url).await,
            Err(AppError::NetworkConnection { .. })
        ));
    }
}
