//! In-memory content source for service tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use folio_config::NotionConfig;
use folio_content::{ContentService, ContentSource};
use folio_notion::{Filter, NotionError, Page};
use serde_json::{Value, json};

pub const POSTS_DB: &str = "posts-db";
pub const PROJECTS_DB: &str = "projects-db";
pub const RESOURCES_DB: &str = "resources-db";

/// Holds rows per database and evaluates filters the way the service does.
#[derive(Debug, Default)]
pub struct FakeSource {
    rows: HashMap<String, Vec<Page>>,
    bodies: HashMap<String, String>,
    failing_bodies: HashSet<String>,
    fail_queries: bool,
    pub queries: AtomicUsize,
    pub renders: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(mut self, database_id: &str, rows: Vec<Page>) -> Self {
        self.rows.entry(database_id.to_string()).or_default().extend(rows);
        self
    }

    pub fn with_body(mut self, page_id: &str, markdown: impl Into<String>) -> Self {
        self.bodies.insert(page_id.to_string(), markdown.into());
        self
    }

    pub fn with_failing_body(mut self, page_id: &str) -> Self {
        self.failing_bodies.insert(page_id.to_string());
        self
    }

    pub fn failing() -> Self {
        Self {
            fail_queries: true,
            ..Self::default()
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn render_count(&self) -> usize {
        self.renders.load(Ordering::SeqCst)
    }
}

fn matches(page: &Page, filter: &Filter) -> bool {
    match filter {
        Filter::Checkbox { property, equals } => page.checkbox(property).unwrap_or(false) == *equals,
        Filter::RichText { property, equals } => page.text(property).unwrap_or_default() == *equals,
        Filter::And(filters) => filters.iter().all(|f| matches(page, f)),
    }
}

fn unauthorized() -> NotionError {
    NotionError::Api {
        status: 401,
        code: "unauthorized".into(),
        message: "API token is invalid.".into(),
    }
}

impl ContentSource for FakeSource {
    async fn query(&self, database_id: &str, filter: &Filter) -> Result<Vec<Page>, NotionError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.fail_queries {
            return Err(unauthorized());
        }
        Ok(self
            .rows
            .get(database_id)
            .map(|rows| rows.iter().filter(|p| matches(p, filter)).cloned().collect())
            .unwrap_or_default())
    }

    async fn page_markdown(&self, page_id: &str) -> Result<String, NotionError> {
        self.renders.fetch_add(1, Ordering::SeqCst);
        if self.fail_queries || self.failing_bodies.contains(page_id) {
            return Err(NotionError::Parse(format!("blocks/{page_id}/children: unexpected eof")));
        }
        Ok(self.bodies.get(page_id).cloned().unwrap_or_default())
    }
}

pub fn configured() -> NotionConfig {
    NotionConfig {
        token: "ntn_4f1c0b6a".into(),
        posts_database_id: POSTS_DB.into(),
        projects_database_id: PROJECTS_DB.into(),
        resources_database_id: RESOURCES_DB.into(),
        ..Default::default()
    }
}

pub fn service(source: FakeSource) -> ContentService<FakeSource> {
    ContentService::with_source(configured(), source)
}

fn text(kind: &str, value: &str) -> Value {
    json!({ "type": kind, kind: [{ "plain_text": value }] })
}

fn checkbox(value: bool) -> Value {
    json!({ "type": "checkbox", "checkbox": value })
}

/// A posts row.
pub struct PostRow<'a> {
    pub id: &'a str,
    pub slug: &'a str,
    pub title: &'a str,
    pub date: &'a str,
    pub published: bool,
    pub featured: bool,
}

impl<'a> PostRow<'a> {
    pub const fn new(id: &'a str, slug: &'a str, date: &'a str) -> Self {
        Self {
            id,
            slug,
            title: slug,
            date,
            published: true,
            featured: false,
        }
    }

    pub const fn featured(self) -> Self {
        Self {
            featured: true,
            ..self
        }
    }

    pub const fn draft(self) -> Self {
        Self {
            published: false,
            ..self
        }
    }

    pub fn page(&self) -> Page {
        serde_json::from_value(json!({
            "id": self.id,
            "properties": {
                "Title": text("title", self.title),
                "Slug": text("rich_text", self.slug),
                "Date": { "type": "date", "date": { "start": self.date } },
                "Author": text("rich_text", "Sam"),
                "Tags": { "type": "multi_select", "multi_select": [{ "name": "rust" }] },
                "Published": checkbox(self.published),
                "Featured": checkbox(self.featured)
            }
        }))
        .unwrap()
    }
}

pub fn project_row(id: &str, name: &str, category: Value, published: bool) -> Page {
    serde_json::from_value(json!({
        "id": id,
        "properties": {
            "Name": text("title", name),
            "Description": text("rich_text", "A project."),
            "URL": { "type": "url", "url": format!("https://example.com/{id}") },
            "Category": category,
            "Date": { "type": "date", "date": { "start": "2024-02-01" } },
            "Published": checkbox(published)
        }
    }))
    .unwrap()
}

pub fn resource_row(id: &str, name: &str, category: Value, published: bool) -> Page {
    serde_json::from_value(json!({
        "id": id,
        "properties": {
            "Name": text("title", name),
            "URL": { "type": "url", "url": format!("https://example.com/{id}") },
            "Category": category,
            "Description": text("rich_text", "A resource."),
            "Published": checkbox(published)
        }
    }))
    .unwrap()
}

pub fn select(name: &str) -> Value {
    json!({ "type": "select", "select": { "name": name } })
}

pub fn multi_select(names: &[&str]) -> Value {
    let options: Vec<Value> = names.iter().map(|n| json!({ "name": n })).collect();
    json!({ "type": "multi_select", "multi_select": options })
}
