use worker::*;

use crate::utils::config::Settings;

pub struct SupabaseClient {
    pub base_url: String,
    pub api_key: String,
}

impl SupabaseClient {
    pub fn new(settings: &Settings) -> Self {
        Self {
            base_url: settings.db_api_url.clone(),
            api_key: settings.db_api_key.clone(),
        }
    }

    fn url(&self, table: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}/rest/v1/{}", self.base_url, table)
        } else {
            format!("{}/rest/v1/{}?{}", self.base_url, table, query)
        }
    }

    pub fn get_headers(&self) -> Result<Headers> {
        let headers = Headers::new();
        headers.set("apikey", &self.api_key)?;
        headers.set("Authorization", &format!("Bearer {}", self.api_key))?;
        headers.set("Content-Type", "application/json")?;
        Ok(headers)
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value> {
        let headers = self.get_headers()?;
        if method != Method::Get {
            // Writes echo the affected rows so callers can tell "no match" apart.
            headers.set("Prefer", "return=representation")?;
        }

        let req = Request::new_with_init(
            url,
            RequestInit::new()
                .with_method(method)
                .with_headers(headers)
                .with_body(body.map(|b| b.to_string().into())),
        )?;

        let mut resp = Fetch::Request(req).send().await?;
        let code = resp.status_code();
        if !(200..300).contains(&code) {
            let error_text = resp.text().await?;
            return Err(Error::RustError(format!(
                "Supabase error ({}): {}",
                code, error_text
            )));
        }
        resp.json().await
    }

    pub async fn get(&self, table: &str, query: &str) -> Result<serde_json::Value> {
        self.send(Method::Get, &self.url(table, query), None).await
    }

    pub async fn post(&self, table: &str, body: serde_json::Value) -> Result<serde_json::Value> {
        self.send(Method::Post, &self.url(table, ""), Some(body)).await
    }

    pub async fn patch(
        &self,
        table: &str,
        filter: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value> {
        self.send(Method::Patch, &self.url(table, filter), Some(body))
            .await
    }

    pub async fn delete(&self, table: &str, filter: &str) -> Result<serde_json::Value> {
        self.send(Method::Delete, &self.url(table, filter), None).await
    }
}
