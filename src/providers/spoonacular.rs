use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::model::{InstructionGroup, InstructionSet, RecipeDetail, RecipeSummary};
use crate::providers::RecipeProvider;
use crate::query::{ByIngredientParams, ByNutrientParams};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct SpoonacularProvider {
    client: Client,
    api_key: String,
    base_url: String,
    search_timeout: Option<Duration>,
}

impl SpoonacularProvider {
    /// Create a new provider from configuration
    pub fn new(config: &FinderConfig) -> Result<Self, FinderError> {
        let api_key = config.resolve_api_key()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent("pantry-finder/0.1")
            .build()?;

        Ok(SpoonacularProvider {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            search_timeout: config.search_timeout(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        SpoonacularProvider {
            client: Client::new(),
            api_key,
            base_url,
            search_timeout: None,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .query(&[("apiKey", self.api_key.as_str())])
    }

    fn search(&self, path: &str) -> RequestBuilder {
        let request = self.get(path);
        match self.search_timeout {
            Some(deadline) => request.timeout(deadline),
            None => request,
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, FinderError> {
        let response = request.send().await?;
        let status = response.status();

        // Spoonacular answers 402 once the daily points are spent
        if status == StatusCode::PAYMENT_REQUIRED {
            return Err(FinderError::QuotaExceeded);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(FinderError::ProviderError { status, body });
        }

        let body = response.text().await?;
        debug!("Spoonacular response: {} bytes", body.len());
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularProvider {
    fn provider_name(&self) -> &str {
        "spoonacular"
    }

    async fn search_by_ingredients(
        &self,
        params: &ByIngredientParams,
    ) -> Result<Vec<RecipeSummary>, FinderError> {
        debug!("findByIngredients: {}", params.ingredients);
        let request = self.search("/recipes/findByIngredients").query(params);
        self.send_json(request).await
    }

    async fn search_by_nutrients(
        &self,
        params: &ByNutrientParams,
    ) -> Result<Vec<RecipeSummary>, FinderError> {
        debug!("findByNutrients: {:?}", params);
        let request = self.search("/recipes/findByNutrients").query(params);
        self.send_json(request).await
    }

    async fn instructions(&self, recipe_id: u64) -> Result<InstructionSet, FinderError> {
        let request = self.get(&format!("/recipes/{}/analyzedInstructions", recipe_id));
        let groups: Vec<InstructionGroup> = self.send_json(request).await?;
        Ok(InstructionSet::from_groups(groups))
    }

    async fn information(&self, recipe_id: u64) -> Result<RecipeDetail, FinderError> {
        let request = self
            .get(&format!("/recipes/{}/information", recipe_id))
            .query(&[("includeNutrition", "false")]);
        self.send_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_search_by_ingredients() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/findByIngredients")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("apiKey".into(), "fake_api_key".into()),
                Matcher::UrlEncoded("ingredients".into(), "Tomato,Basil".into()),
                Matcher::UrlEncoded("number".into(), "2".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"id": 1, "title": "Bruschetta", "image": "https://img/1.jpg",
                     "missedIngredients": [{"name": "bread", "original": "1 loaf bread"}]},
                    {"id": 2, "title": "Caprese", "image": "https://img/2.jpg"}
                ]"#,
            )
            .create_async()
            .await;

        let provider =
            SpoonacularProvider::with_base_url("fake_api_key".to_string(), server.url());
        let params = ByIngredientParams::new(&["Tomato", "Basil"], 2);
        let hits = provider.search_by_ingredients(&params).await.unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Bruschetta");
        assert_eq!(hits[0].missed_ingredients[0].original, "1 loaf bread");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_quota_exhausted() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/findByNutrients")
            .match_query(Matcher::Any)
            .with_status(402)
            .with_body(r#"{"status": "failure", "code": 402, "message": "Your daily points limit of 150 has been reached."}"#)
            .create_async()
            .await;

        let provider =
            SpoonacularProvider::with_base_url("fake_api_key".to_string(), server.url());
        let range = crate::nutrients::NutrientRange::default();
        let result = provider
            .search_by_nutrients(&ByNutrientParams::new(&range, 2))
            .await;

        assert!(matches!(result, Err(FinderError::QuotaExceeded)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_api_error_keeps_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/recipes/7/information")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"message": "You are not authorized."}"#)
            .create_async()
            .await;

        let provider = SpoonacularProvider::with_base_url("bad".to_string(), server.url());
        match provider.information(7).await {
            Err(FinderError::ProviderError { status, body }) => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert!(body.contains("not authorized"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_instructions_parse() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/recipes/42/analyzedInstructions")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"name": "", "steps": [{"number": 1, "step": "Chop."}]}]"#)
            .create_async()
            .await;

        let provider = SpoonacularProvider::with_base_url("k".to_string(), server.url());
        let set = provider.instructions(42).await.unwrap();
        assert_eq!(set.steps[0].step, "Chop.");
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/recipes/42/analyzedInstructions")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let provider = SpoonacularProvider::with_base_url("k".to_string(), server.url());
        let result = provider.instructions(42).await;
        assert!(matches!(result, Err(FinderError::ParseError(_))));
    }

    #[test]
    fn test_provider_name() {
        let provider = SpoonacularProvider::with_base_url(
            "k".to_string(),
            "http://localhost".to_string(),
        );
        assert_eq!(provider.provider_name(), "spoonacular");
    }

    #[test]
    fn test_new_from_config() {
        let config = FinderConfig {
            api_key: Some("cfg-key".to_string()),
            base_url: "http://localhost:9999/".to_string(),
            search_timeout: Some(3),
            ..Default::default()
        };
        let provider = SpoonacularProvider::new(&config).unwrap();
        assert_eq!(provider.base_url, "http://localhost:9999");
        assert_eq!(provider.search_timeout, Some(Duration::from_secs(3)));
    }
}
