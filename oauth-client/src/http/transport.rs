//! Single-attempt HTTP request primitive.

use std::fmt;

use log::*;

use crate::error::{status_error, Error};

/// HTTP methods used against the provider endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// Sends one request and returns the response body on success.
#[derive(Debug, Clone)]
pub struct Transport {
    client: reqwest::Client,
}

impl Transport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Send a request and read the full response body.
    ///
    /// A form body is sent as `application/x-www-form-urlencoded`. A bearer
    /// token is sent as `Authorization: Bearer <token>`. Exactly one attempt is
    /// made. A non-success status logs the response body and returns an
    /// `HttpErrorKind::Status` error carrying it.
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        form: Option<&[(&str, &str)]>,
        bearer: Option<&str>,
    ) -> Result<String, Error> {
        let mut request = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };

        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        if let Some(params) = form {
            request = request.form(params);
        }

        debug!("{} {}", method, url);

        let response = request.send().await.map_err(|e| {
            warn!("{} {} failed: {:?}", method, url, e);
            Error::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            Ok(response.text().await?)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!("{} {} returned {}: {}", method, url, status, error_text);
            Err(status_error(status.as_u16(), error_text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, HttpErrorKind};
    use mockito::{Matcher, Server};

    fn transport() -> Transport {
        Transport::new(reqwest::Client::new())
    }

    #[tokio::test]
    async fn test_get_with_bearer_returns_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/resource")
            .match_header("authorization", "Bearer token-123")
            .match_header("content-type", Matcher::Missing)
            .with_status(200)
            .with_body("hello")
            .create_async()
            .await;

        let url = format!("{}/resource", server.url());
        let body = transport()
            .send(Method::Get, &url, None, Some("token-123"))
            .await
            .unwrap();

        assert_eq!(body, "hello");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_form_sets_content_type() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/form")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_header("authorization", Matcher::Missing)
            .match_body(Matcher::UrlEncoded("a".into(), "1 2".into()))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let url = format!("{}/form", server.url());
        let result = transport()
            .send(Method::Post, &url, Some(&[("a", "1 2")][..]), None)
            .await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_returns_error_with_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/fail")
            .with_status(500)
            .with_body("boom")
            .expect(1)
            .create_async()
            .await;

        let url = format!("{}/fail", server.url());
        let err = transport()
            .send(Method::Get, &url, None, None)
            .await
            .unwrap_err();

        assert_eq!(err.error_kind, ErrorKind::Http(HttpErrorKind::Status(500)));
        assert_eq!(err.source.unwrap().to_string(), "boom");
        // One attempt, no retries
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unreachable_host_returns_http_error() {
        let err = transport()
            .send(Method::Get, "http://127.0.0.1:1/", None, None)
            .await
            .unwrap_err();

        assert!(matches!(
            err.error_kind,
            ErrorKind::Http(HttpErrorKind::Network) | ErrorKind::Http(HttpErrorKind::RequestFailed)
        ));
    }
}
