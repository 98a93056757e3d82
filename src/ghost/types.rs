//! Ghost Content API resource models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A post as returned by `GET /posts/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,

    #[serde(default)]
    pub uuid: Option<String>,

    pub title: String,

    pub slug: String,

    /// Rendered HTML body
    #[serde(default)]
    pub html: Option<String>,

    #[serde(default)]
    pub excerpt: Option<String>,

    #[serde(default)]
    pub custom_excerpt: Option<String>,

    #[serde(default)]
    pub feature_image: Option<String>,

    #[serde(default)]
    pub featured: bool,

    /// Canonical URL on the Ghost site
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub published_at: Option<DateTime<FixedOffset>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,

    /// Estimated reading time in minutes
    #[serde(default)]
    pub reading_time: Option<u32>,

    /// Only populated when the request includes `tags`
    #[serde(default)]
    pub tags: Vec<Tag>,

    #[serde(default)]
    pub primary_tag: Option<Tag>,

    /// Fields this crate does not model
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Post {
    /// Tag names in the order Ghost lists them
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }

    /// The custom excerpt if set, otherwise the generated one
    pub fn summary(&self) -> Option<&str> {
        self.custom_excerpt.as_deref().or(self.excerpt.as_deref())
    }
}

/// A tag attached to a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `public` or `internal`
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of a browse response
#[derive(Debug, Clone, Deserialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    pub pagination: Pagination,
}

/// Pagination block; `limit` is the string `"all"` for unbounded browses
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: serde_json::Value,
    pub pages: u32,
    pub total: u32,
    pub next: Option<u32>,
    pub prev: Option<u32>,
}

/// Page size for a browse request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    All,
    Count(u32),
}

impl Limit {
    fn as_param(&self) -> String {
        match self {
            Limit::All => "all".to_string(),
            Limit::Count(n) => n.to_string(),
        }
    }
}

/// Query options for `GET /posts/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseParams {
    pub limit: Limit,
    pub include: Vec<String>,
    pub page: Option<u32>,
    pub filter: Option<String>,
    pub order: Option<String>,
}

impl Default for BrowseParams {
    fn default() -> Self {
        Self {
            limit: Limit::Count(15),
            include: Vec::new(),
            page: None,
            filter: None,
            order: None,
        }
    }
}

impl BrowseParams {
    /// Every post with its tags, no pagination
    pub fn all_with_tags() -> Self {
        Self {
            limit: Limit::All,
            include: vec!["tags".to_string()],
            ..Self::default()
        }
    }

    /// Query parameters in the form Ghost expects
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("limit", self.limit.as_param())];

        if !self.include.is_empty() {
            pairs.push(("include", self.include.join(",")));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(ref filter) = self.filter {
            pairs.push(("filter", filter.clone()));
        }
        if let Some(ref order) = self.order {
            pairs.push(("order", order.clone()));
        }

        pairs
    }
}
