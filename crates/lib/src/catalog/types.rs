//! Catalog data types

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::CatalogError;
use crate::Result;

/// A third-party AI tool worth recommending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tool {
    pub name: String,
    pub url: String,
    /// Step-by-step instructions for getting started.
    #[serde(rename = "description")]
    pub usage_description: String,
}

impl Tool {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        usage_description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            usage_description: usage_description.into(),
        }
    }
}

/// A topic: the keywords that select it and the tools it offers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    /// Matched as lowercase substrings, in order.
    pub keywords: Vec<String>,
    pub tools: Vec<Tool>,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
        tools: Vec<Tool>,
    ) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            tools,
        }
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
}

/// Validated, ordered list of categories.
///
/// Every catalog has at least one category, and every category at least one
/// keyword and one tool. Declaration order is significant: the first
/// matching category wins.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Validate and normalise a list of categories.
    ///
    /// Keywords are trimmed and lowercased.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.is_empty() {
            return Err(CatalogError::Empty.into());
        }

        let mut normalised = Vec::with_capacity(categories.len());
        for mut category in categories {
            if category.keywords.is_empty() {
                return Err(CatalogError::MissingKeywords {
                    category: category.name,
                }
                .into());
            }
            category.keywords = category
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .collect();
            if category.keywords.iter().any(String::is_empty) {
                return Err(CatalogError::EmptyKeyword {
                    category: category.name,
                }
                .into());
            }

            if category.tools.is_empty() {
                return Err(CatalogError::MissingTools {
                    category: category.name,
                }
                .into());
            }
            for tool in &category.tools {
                url::Url::parse(&tool.url).map_err(|e| CatalogError::InvalidToolUrl {
                    tool: tool.name.clone(),
                    reason: e.to_string(),
                })?;
            }

            normalised.push(category);
        }

        Ok(Self {
            categories: normalised,
        })
    }

    /// Parse a catalog from JSON of the form `{"categories": [...]}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        Self::new(file.categories)
    }

    /// Wrap categories already known to satisfy the catalog invariants.
    pub(crate) fn from_validated(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Read and parse a catalog file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of tools across all categories.
    pub fn tool_count(&self) -> usize {
        self.categories.iter().map(|c| c.tools.len()).sum()
    }

    /// Find a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }
}
