// In-memory stand-ins for the search API and page fetches.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use wordsmith::fetch::traits::ContentFetcher;
use wordsmith::rate_limiter::RequestPacer;
use wordsmith::search::models::{SearchItem, SearchResponse};
use wordsmith::search::traits::SearchProvider;

/// What the fake search returns for one call.
#[derive(Clone)]
pub enum Reply {
    Items(Vec<SearchItem>),
    Empty,
    Fail,
}

/// Replies in call order; the last reply repeats once the list runs out.
pub struct FakeSearch {
    replies: Vec<Reply>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl FakeSearch {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn always(reply: Reply) -> Self {
        Self::new(vec![reply])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for FakeSearch {
    async fn search(&self, query: &str) -> Result<SearchResponse> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());

        let reply = self
            .replies
            .get(n)
            .or(self.replies.last())
            .cloned()
            .unwrap_or(Reply::Empty);

        match reply {
            Reply::Items(items) => Ok(SearchResponse {
                items,
                ..Default::default()
            }),
            Reply::Empty => Ok(SearchResponse::default()),
            Reply::Fail => anyhow::bail!("Google Custom Search returned 429 Too Many Requests"),
        }
    }

    fn public_url(&self, query: &str) -> Option<String> {
        Some(format!("https://search.example/?q={query}"))
    }
}

/// Pages by URL. Unknown URLs fail like a refused connection; known URLs
/// with empty text come back as None like a page with no readable body.
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, text)| (url.to_string(), text.to_string()))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentFetcher for FakeFetcher {
    async fn fetch_text(&self, url: &str) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.pages.get(url) {
            Some(text) if text.is_empty() => Ok(None),
            Some(text) => Ok(Some(text.clone())),
            None => anyhow::bail!("Failed to fetch {url}: connection refused"),
        }
    }
}

/// A pacer that never waits and counts how often it was asked.
#[derive(Default)]
pub struct CountingPacer {
    acquired: AtomicUsize,
}

impl CountingPacer {
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RequestPacer for CountingPacer {
    async fn acquire(&self) {
        self.acquired.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn item(url: &str, title: &str) -> SearchItem {
    SearchItem {
        title: Some(title.to_string()),
        link: Some(url.to_string()),
        snippet: None,
        display_link: None,
    }
}

/// `count` distinct words: "word0 word1 ...".
pub fn numbered_words(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("word{i}")).collect()
}
