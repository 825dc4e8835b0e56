// Custom Search JSON response model.
//
// Only the fields the tools read are modeled. Every field is optional in
// practice (Google omits `items` entirely when there are no results), so
// everything defaults instead of failing deserialization.

use serde::{Deserialize, Serialize};

/// A web search response in the Google Custom Search shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResponse {
    pub items: Vec<SearchItem>,
    pub queries: SearchQueries,
    pub search_information: SearchInformation,
}

/// One search result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub snippet: Option<String>,
    pub display_link: Option<String>,
}

/// The query metadata groups echoed back by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchQueries {
    pub request: Vec<SearchQuery>,
    pub next_page: Vec<SearchQuery>,
    pub previous_page: Vec<SearchQuery>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchQuery {
    pub search_terms: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchInformation {
    /// Google reports this as a decimal string, e.g. "1230000".
    pub total_results: Option<String>,
    pub search_time: Option<f64>,
}

impl SearchResponse {
    /// Title of the first request query, if the provider echoed one.
    pub fn request_title(&self) -> Option<&str> {
        self.queries.request.first().and_then(|q| q.title.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let json = r#"{
            "kind": "customsearch#search",
            "queries": {
                "request": [{"title": "Google Custom Search - seo tools", "searchTerms": "seo tools"}],
                "nextPage": [{"title": "Google Custom Search - seo tools", "searchTerms": "seo tools"}]
            },
            "searchInformation": {"searchTime": 0.31, "totalResults": "1230000"},
            "items": [
                {"title": "Best SEO Tools", "link": "https://example.com/a", "snippet": "Top seo tools", "displayLink": "example.com"}
            ]
        }"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.items.len(), 1);
        assert_eq!(resp.items[0].display_link.as_deref(), Some("example.com"));
        assert_eq!(
            resp.queries.request[0].search_terms.as_deref(),
            Some("seo tools")
        );
        assert_eq!(resp.queries.next_page.len(), 1);
        assert!(resp.queries.previous_page.is_empty());
        assert_eq!(
            resp.search_information.total_results.as_deref(),
            Some("1230000")
        );
    }

    #[test]
    fn test_parse_response_without_items() {
        let resp: SearchResponse = serde_json::from_str(r#"{"kind": "customsearch#search"}"#).unwrap();
        assert!(resp.items.is_empty());
        assert!(resp.request_title().is_none());
    }
}
