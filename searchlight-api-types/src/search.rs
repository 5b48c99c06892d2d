use serde::{Deserialize, Serialize};

/// One completed query as delivered by the hosted index.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub hits: Vec<Hit>,
    pub nb_hits: u64,
    /// The query string this response was computed for.
    pub query: String,
}

/// One candidate record from the index. The shape is owned by the indexing
/// pipeline, not by us, so every field is optional.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Hit {
    pub title: Option<String>,
    pub layout: Option<String>,
    pub url: Option<String>,
    pub css_selector: Option<String>,
    /// Unix timestamp in seconds.
    pub posted_at: Option<i64>,
    #[serde(rename = "_highlightResult", default)]
    pub highlight_result: Option<HighlightResult>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct HighlightResult {
    pub title: Option<HighlightedField>,
    pub text: Option<HighlightedField>,
}

/// A field value with the matched substrings wrapped in highlight markup.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct HighlightedField {
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_wire_shaped_response() {
        let json = r##"{
            "hits": [
                {
                    "title": "Choosing an editor",
                    "layout": "post",
                    "url": "/2021/03/05/choosing-an-editor.html",
                    "css_selector": "#post h2:nth-of-type(1)",
                    "posted_at": 1614902400,
                    "objectID": "42",
                    "_highlightResult": {
                        "title": { "value": "Choosing an <em>editor</em>", "matchLevel": "full" },
                        "text": { "value": "an <em>editor</em> for prose", "matchLevel": "partial" }
                    }
                }
            ],
            "nbHits": 1,
            "page": 0,
            "query": "editor",
            "params": "query=editor&distinct=true"
        }"##;
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.nb_hits, 1);
        assert_eq!(response.query, "editor");
        let hit = &response.hits[0];
        assert_eq!(hit.layout.as_deref(), Some("post"));
        assert_eq!(hit.posted_at, Some(1614902400));
        let highlight = hit.highlight_result.as_ref().unwrap();
        assert_eq!(
            highlight.title.as_ref().unwrap().value,
            "Choosing an <em>editor</em>"
        );
    }

    #[test]
    fn tolerates_missing_fields() {
        let json = r#"{
            "hits": [ { "url": "/about.html", "layout": "page" } ],
            "nbHits": 1,
            "query": "about"
        }"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        let hit = &response.hits[0];
        assert_eq!(hit.posted_at, None);
        assert_eq!(hit.css_selector, None);
        assert!(hit.highlight_result.is_none());
    }
}
