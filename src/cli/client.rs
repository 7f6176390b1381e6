use anyhow::{anyhow, Context};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// Thin HTTP client for the Remedios API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: url::Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> anyhow::Result<Self> {
        let base_url = url::Url::parse(base_url).with_context(|| format!("invalid API URL '{}'", base_url))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        })
    }

    fn request(&self, method: Method, path: &str) -> anyhow::Result<RequestBuilder> {
        let url = self.base_url.join(path).with_context(|| format!("invalid path '{}'", path))?;
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    fn require_token(&self) -> anyhow::Result<()> {
        if self.token.is_none() {
            return Err(anyhow!("no token: run `remedios login` and set REMEDIOS_TOKEN"));
        }
        Ok(())
    }

    /// Unauthenticated POST, used for login
    pub async fn post_public<B: Serialize>(&self, path: &str, body: &B) -> anyhow::Result<Value> {
        let response = self.request(Method::POST, path)?.json(body).send().await?;
        read_json(response).await
    }

    pub async fn get(&self, path: &str) -> anyhow::Result<Value> {
        self.require_token()?;
        let response = self.request(Method::GET, path)?.send().await?;
        read_json(response).await
    }

    pub async fn send_json<B: Serialize>(&self, method: Method, path: &str, body: &B) -> anyhow::Result<Value> {
        self.require_token()?;
        let response = self.request(method, path)?.json(body).send().await?;
        read_json(response).await
    }

    /// For endpoints that answer 204 No Content
    pub async fn send_empty(&self, method: Method, path: &str) -> anyhow::Result<()> {
        self.require_token()?;
        let response = self.request(method, path)?.send().await?;
        check_status(response).await.map(|_| ())
    }
}

async fn check_status(response: Response) -> anyhow::Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body: Value = response.json().await.unwrap_or(Value::Null);
    Err(anyhow!(describe_error(status, &body)))
}

async fn read_json(response: Response) -> anyhow::Result<Value> {
    let response = check_status(response).await?;
    Ok(response.json().await?)
}

/// Human-readable form of an API error body
pub fn describe_error(status: StatusCode, body: &Value) -> String {
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed"));

    let mut text = format!("{} ({})", message, status.as_u16());
    if let Some(fields) = body.get("field_errors").and_then(Value::as_object) {
        let mut names: Vec<&String> = fields.keys().collect();
        names.sort();
        for name in names {
            let detail = fields[name.as_str()].as_str().unwrap_or_default();
            text.push_str(&format!("\n  {}: {}", name, detail));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn describes_field_errors_sorted() {
        let body = json!({
            "message": "Invalid request data",
            "field_errors": { "name": "must not be blank", "batch": "must not be null" }
        });
        let text = describe_error(StatusCode::BAD_REQUEST, &body);
        assert_eq!(text, "Invalid request data (400)\n  batch: must not be null\n  name: must not be blank");
    }

    #[test]
    fn falls_back_to_status_reason() {
        let text = describe_error(StatusCode::NOT_FOUND, &Value::Null);
        assert_eq!(text, "Not Found (404)");
    }

    #[test]
    fn rejects_bad_base_url() {
        assert!(ApiClient::new("not a url", None).is_err());
    }
}
