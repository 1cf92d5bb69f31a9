//! Keyword matching of free-text queries against a [`Catalog`].
//!
//! Categories are scanned in declaration order and, within a category,
//! keywords in declaration order. The first keyword that appears anywhere in
//! the lowercased query wins, even if a later category would match more of
//! it. The tool is then chosen at random from the winning category.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::types::{Catalog, Category, Tool};
use crate::constants::{
    FALLBACK_DESCRIPTION, FALLBACK_VIDEO_URL, VIDEO_SEARCH_SUFFIX, VIDEO_SEARCH_URL,
};
use crate::random::RandomSource;

/// Answer to a chat query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_tool: Option<Tool>,
}

/// Selects a category and a tool for a query.
#[derive(Debug, Clone)]
pub struct TopicMatcher {
    catalog: Arc<Catalog>,
    random: Arc<dyn RandomSource>,
}

impl TopicMatcher {
    pub fn new(catalog: Arc<Catalog>, random: Arc<dyn RandomSource>) -> Self {
        Self { catalog, random }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// First category/keyword pair whose keyword occurs in `query`.
    pub fn classify(&self, query: &str) -> Option<(&Category, &str)> {
        let query = query.to_lowercase();
        self.catalog.categories().iter().find_map(|category| {
            category
                .keywords
                .iter()
                .find(|keyword| query.contains(keyword.as_str()))
                .map(|keyword| (category, keyword.as_str()))
        })
    }

    /// Build the response for a query. Never fails: unmatched queries get the generic answer.
    pub fn match_query(&self, query: &str) -> QueryResponse {
        match self.classify(query) {
            Some((category, keyword)) => {
                tracing::debug!("Query matched '{keyword}' in category '{}'", category.name);
                QueryResponse {
                    description: topic_description(keyword),
                    video_url: Some(video_search_url(keyword)),
                    ai_tool: self.pick_tool(category),
                }
            }
            None => {
                tracing::debug!("Query matched no keyword, picking a random category");
                let categories = self.catalog.categories();
                let category = categories.get(self.random.pick(categories.len()));
                QueryResponse {
                    description: FALLBACK_DESCRIPTION.to_string(),
                    video_url: Some(FALLBACK_VIDEO_URL.to_string()),
                    ai_tool: category.and_then(|c| self.pick_tool(c)),
                }
            }
        }
    }

    fn pick_tool(&self, category: &Category) -> Option<Tool> {
        category
            .tools
            .get(self.random.pick(category.tools.len()))
            .cloned()
    }
}

fn topic_description(keyword: &str) -> String {
    format!(
        "Great question about {keyword}! AI technology has revolutionized this field, making it more accessible and efficient. The {keyword} sector has seen tremendous growth with AI-powered tools that can assist you in various ways. These tools use machine learning and natural language processing to provide personalized recommendations and automate complex tasks."
    )
}

/// Search link for `"<keyword> AI tools tutorial"`, percent-encoded.
pub fn video_search_url(keyword: &str) -> String {
    let phrase = format!("{keyword} {VIDEO_SEARCH_SUFFIX}");
    format!("{VIDEO_SEARCH_URL}{}", encode_uri_component(&phrase))
}

/// Escapes left in place by `encodeURIComponent` but escaped by `urlencoding`.
const URI_COMPONENT_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encode with the unreserved set `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
fn encode_uri_component(input: &str) -> String {
    URI_COMPONENT_MARKS
        .iter()
        .fold(urlencoding::encode(input).into_owned(), |encoded, (escape, mark)| {
            encoded.replace(escape, mark)
        })
}
