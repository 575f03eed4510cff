use once_cell::sync::Lazy;

use crate::api::models::{Category, Mezmur};
use crate::diagnostics::PerfTimer;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

const DEFAULT_BASE_URL: &str = "https://hub.mezmurhub.org";
const DEFAULT_ANON_KEY: &str = "public-anon-key";

/// Client for the hosted backend's PostgREST endpoint.
///
/// Reads go through `/rest/v1/<table>` with the project's anon key; row-level
/// security on the backend keeps this key read-only for published content.
#[derive(Clone)]
pub struct HubClient {
    base_url: String,
    anon_key: String,
}

impl HubClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    /// Backend coordinates baked in at compile time, overridable per build.
    pub fn from_env() -> Self {
        Self::new(
            option_env!("MEZMURHUB_BACKEND_URL").unwrap_or(DEFAULT_BASE_URL),
            option_env!("MEZMURHUB_ANON_KEY").unwrap_or(DEFAULT_ANON_KEY),
        )
    }

    fn rest_url(&self, table: &str, query: &str) -> String {
        format!("{}/rest/v1/{}?{}", self.base_url, table, query)
    }

    async fn get_rows<T: serde::de::DeserializeOwned>(
        &self,
        table: &str,
        query: &str,
    ) -> Result<Vec<T>, String> {
        let url = self.rest_url(table, query);
        let timer = PerfTimer::start();

        let response = HTTP_CLIENT
            .get(&url)
            .header("apikey", self.anon_key.as_str())
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .send()
            .await
            .map_err(|e| format!("Request to {table} failed: {e}"))?;

        if !response.status().is_success() {
            return Err(format!(
                "Backend returned {} for {table}",
                response.status()
            ));
        }

        let rows: Vec<T> = response
            .json()
            .await
            .map_err(|e| format!("Failed to decode {table} rows: {e}"))?;

        timer.log("api.get_rows", table);
        Ok(rows)
    }

    /// Fetch published mezmurs, newest first, optionally narrowed by a title
    /// search and/or a category.
    pub async fn fetch_mezmurs(
        &self,
        search: Option<&str>,
        category_id: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Mezmur>, String> {
        let mut query = format!("select=*&order=created_at.desc&limit={limit}");
        if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
            let pattern = urlencoding::encode(term).into_owned();
            query.push_str(&format!("&title=ilike.*{pattern}*"));
        }
        if let Some(category) = category_id {
            let category = urlencoding::encode(category);
            query.push_str(&format!("&category_id=eq.{category}"));
        }
        self.get_rows("mezmurs", &query).await
    }

    /// Fetch the browse categories, alphabetized.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, String> {
        self.get_rows("categories", "select=id,name&order=name.asc")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_url_joins_without_duplicate_slashes() {
        let client = HubClient::new("https://hub.example.org/", "key");
        assert_eq!(
            client.rest_url("mezmurs", "select=*"),
            "https://hub.example.org/rest/v1/mezmurs?select=*"
        );
    }
}
