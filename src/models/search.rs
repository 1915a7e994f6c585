//! Web search and answer models

use crate::schema::enums::string_enum;
use crate::schema::{model_schema, FieldKind, FieldSpec, Model};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

string_enum! {
    /// Search strategy
    pub enum SearchType {
        Auto => "auto",
        Neural => "neural",
        Keyword => "keyword",
        Fast => "fast",
    }
}

/// Parameters for `POST search/v1/search`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchParams {
    /// Query text
    pub query: String,
    /// Search strategy (optional)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub search_type: Option<SearchType>,
    /// Maximum number of results (optional)
    #[serde(rename = "numResults", skip_serializing_if = "Option::is_none")]
    pub num_results: Option<u32>,
    /// Restrict to these domains (optional)
    #[serde(rename = "includeDomains", skip_serializing_if = "Option::is_none")]
    pub include_domains: Option<Vec<String>>,
    /// Exclude these domains (optional)
    #[serde(rename = "excludeDomains", skip_serializing_if = "Option::is_none")]
    pub exclude_domains: Option<Vec<String>>,
    /// Only pages published after this time (optional)
    #[serde(rename = "startPublishedDate", skip_serializing_if = "Option::is_none")]
    pub start_published_date: Option<DateTime<Utc>>,
    /// Only pages published before this time (optional)
    #[serde(rename = "endPublishedDate", skip_serializing_if = "Option::is_none")]
    pub end_published_date: Option<DateTime<Utc>>,
    /// Include page text in results (optional)
    #[serde(rename = "includeText", skip_serializing_if = "Option::is_none")]
    pub include_text: Option<bool>,
}

impl SearchParams {
    /// Create parameters from the required query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            search_type: None,
            num_results: None,
            include_domains: None,
            exclude_domains: None,
            start_published_date: None,
            end_published_date: None,
            include_text: None,
        }
    }

    /// Replace the query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the search strategy
    pub fn with_search_type(mut self, search_type: impl Into<SearchType>) -> Self {
        self.search_type = Some(search_type.into());
        self
    }

    /// Set the result count
    pub fn with_num_results(mut self, num_results: u32) -> Self {
        self.num_results = Some(num_results);
        self
    }

    /// Restrict to domains
    pub fn with_include_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    /// Exclude domains
    pub fn with_exclude_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    /// Set the earliest publication time
    pub fn with_start_published_date(mut self, date: DateTime<Utc>) -> Self {
        self.start_published_date = Some(date);
        self
    }

    /// Set the latest publication time
    pub fn with_end_published_date(mut self, date: DateTime<Utc>) -> Self {
        self.end_published_date = Some(date);
        self
    }

    /// Include page text
    pub fn with_include_text(mut self, include_text: bool) -> Self {
        self.include_text = Some(include_text);
        self
    }
}

model_schema!(SearchParams, "SearchParams", [
    FieldSpec::required("query", FieldKind::String),
    FieldSpec::optional("type", FieldKind::Enum(SearchType::VALUES)),
    FieldSpec::optional("numResults", FieldKind::Integer),
    FieldSpec::optional("includeDomains", FieldKind::String).list(),
    FieldSpec::optional("excludeDomains", FieldKind::String).list(),
    FieldSpec::optional("startPublishedDate", FieldKind::DateTime),
    FieldSpec::optional("endPublishedDate", FieldKind::DateTime),
    FieldSpec::optional("includeText", FieldKind::Boolean),
]);

/// One search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(rename = "publishedDate", skip_serializing_if = "Option::is_none")]
    pub published_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

model_schema!(SearchResult, "SearchResult", [
    FieldSpec::required("url", FieldKind::String),
    FieldSpec::optional("title", FieldKind::String),
    FieldSpec::optional("text", FieldKind::String),
    FieldSpec::optional("score", FieldKind::Number),
    FieldSpec::optional("publishedDate", FieldKind::DateTime),
    FieldSpec::optional("author", FieldKind::String),
]);

/// Response of `POST search/v1/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    /// Query as rewritten by the service (optional)
    #[serde(rename = "resolvedQuery", skip_serializing_if = "Option::is_none")]
    pub resolved_query: Option<String>,
}

model_schema!(SearchResponse, "SearchResponse", [
    FieldSpec::required("results", FieldKind::Model(SearchResult::schema)).list(),
    FieldSpec::optional("resolvedQuery", FieldKind::String),
]);

/// Parameters for `POST search/v1/answer`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerParams {
    /// Question to answer
    pub query: String,
    /// Include source text in citations (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<bool>,
    /// Model override (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl AnswerParams {
    /// Create parameters from the required question
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), text: None, model: None }
    }

    /// Replace the question
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Include citation text
    pub fn with_text(mut self, text: bool) -> Self {
        self.text = Some(text);
        self
    }

    /// Set the model override
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

model_schema!(AnswerParams, "AnswerParams", [
    FieldSpec::required("query", FieldKind::String),
    FieldSpec::optional("text", FieldKind::Boolean),
    FieldSpec::optional("model", FieldKind::String),
]);

/// Source backing an answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

model_schema!(Citation, "Citation", [
    FieldSpec::required("url", FieldKind::String),
    FieldSpec::optional("title", FieldKind::String),
    FieldSpec::optional("text", FieldKind::String),
]);

/// Response of `POST search/v1/answer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<Citation>>,
}

model_schema!(AnswerResponse, "AnswerResponse", [
    FieldSpec::required("answer", FieldKind::String),
    FieldSpec::optional("citations", FieldKind::Model(Citation::schema)).list(),
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{hydrate_value, normalize_item, Item};
    use serde_json::json;

    #[test]
    fn test_type_keyword_field() {
        let wire = normalize_item(&Item::from(SearchParams::new("rust http clients").with_search_type(SearchType::Neural))).unwrap();
        assert_eq!(wire["type"], json!("neural"));
        assert!(!wire.contains_key("search_type"));
    }

    #[test]
    fn test_results_hydrate_with_scores() {
        let response: SearchResponse = hydrate_value(json!({
            "results": [
                {"url": "https://a.example", "score": 0.9},
                {"url": "https://b.example", "score": 1}
            ]
        })).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[1].score, Some(1.0));
    }
}
