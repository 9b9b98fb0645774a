//! `search_linkd` capability — Linkd alumni search API integration.
//!
//! Performs a bearer-token GET against the alumni search API and formats the
//! matching profiles. The `limit` parameter is declared as a *string* carrying
//! an integer because that is the shape the reasoning service was trained
//! against; it is validated here before being passed through.

use std::sync::Arc;

use async_trait::async_trait;
use figaro_core::capability::{CapabilityOutput, CapabilitySpec, ParameterKind, ParameterSpec};
use serde_json::{Map, Value, json};

use crate::arguments::required_string;
use crate::errors::CapabilityError;
use crate::traits::{Capability, CapabilityContext, HttpClient};

const SEARCH_PATH: &str = "/api/search/users";

/// The `search_linkd` capability searches an alumni database by keywords.
pub struct SearchLinkdCapability {
    http: Arc<dyn HttpClient>,
    api_key: String,
    base_url: String,
}

impl SearchLinkdCapability {
    /// Create the capability with the given HTTP client, API token, and
    /// API base URL.
    pub fn new(http: Arc<dyn HttpClient>, api_key: String, base_url: String) -> Self {
        Self {
            http,
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl Capability for SearchLinkdCapability {
    fn name(&self) -> &str {
        "search_linkd"
    }

    fn spec(&self) -> CapabilitySpec {
        CapabilitySpec::new(
            "search_linkd",
            "search through a massive database of alumni to find people who match certain keywords",
            vec![
                ParameterSpec::required(
                    "limit",
                    ParameterKind::String,
                    "string representation of integer number of query results (default to 5 \
                     unless otherwise specified). Examples could be 5, 10, 20, 30...",
                ),
                ParameterSpec::required(
                    "query",
                    ParameterKind::String,
                    "keywords to search alumni for; i.e. 'Robotics Researchers' or 'Startup Founders'",
                ),
                ParameterSpec::required(
                    "school",
                    ParameterKind::String,
                    "School of alumni to be searched for. If not specified, default to the \
                     University of California, Los Angeles (UCLA)",
                ),
            ],
        )
    }

    async fn execute(
        &self,
        arguments: Map<String, Value>,
        _ctx: &CapabilityContext,
    ) -> Result<CapabilityOutput, CapabilityError> {
        let limit = required_string(&arguments, "limit")?;
        let query = required_string(&arguments, "query")?;
        let school = required_string(&arguments, "school")?;

        if limit.parse::<u32>().is_err() {
            return Err(CapabilityError::Validation {
                message: format!("argument 'limit' must carry a whole number, got '{limit}'"),
            });
        }
        if self.api_key.is_empty() {
            return Err(CapabilityError::Unavailable {
                feature: "Alumni search".into(),
            });
        }

        let query_params: Vec<(&str, &str)> =
            vec![("limit", &limit), ("query", &query), ("school", &school)];
        let qs = query_params
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let url = format!("{}{SEARCH_PATH}?{qs}", self.base_url.trim_end_matches('/'));

        let bearer = format!("Bearer {}", self.api_key);
        let headers: Vec<(&str, &str)> = vec![
            ("Accept", "application/json"),
            ("Authorization", &bearer),
        ];

        let response = self.http.get_with_headers(&url, &headers).await?;
        if response.status != 200 {
            return Err(CapabilityError::Backend {
                status: response.status,
                message: response.body,
            });
        }

        let body: Value = serde_json::from_str(&response.body)?;
        let result_count = body
            .get("results")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);

        Ok(CapabilityOutput::with_details(
            format_profiles(&body),
            json!({
                "query": query,
                "school": school,
                "limit": limit,
                "resultCount": result_count,
            }),
        ))
    }
}

fn format_profiles(body: &Value) -> String {
    let results = body.get("results").and_then(Value::as_array);
    let Some(results) = results else {
        return "No matching alumni found.".into();
    };
    if results.is_empty() {
        return "No matching alumni found.".into();
    }

    results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            // Some deployments nest fields under "profile", some don't.
            let profile = r.get("profile").unwrap_or(r);
            let name = profile.get("name").and_then(Value::as_str).unwrap_or("(unnamed)");
            let headline = profile.get("headline").and_then(Value::as_str).unwrap_or("");
            let link = profile
                .get("linkedin_url")
                .and_then(Value::as_str)
                .unwrap_or("");
            if link.is_empty() {
                format!("{}. {} — {}", i + 1, name, headline)
            } else {
                format!("{}. {} — {} ({})", i + 1, name, headline, link)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
