use chrono::DateTime;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use searchlight_api_types::{Hit, HighlightedField, QueryResponse};

use crate::config::SearchConfig;

pub const NO_RESULTS: &str = "No results found.";

/// Fragment prefix consumed by the host page's scroll-to-match script.
const FRAGMENT_PREFIX: &str = "searchlight:";

/// The characters JavaScript's `encodeURI` leaves intact, so fragments
/// produced here keep working with pages that decode them that way.
const ENCODE_URI_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Markup for one completed response: either the no-results message or the
/// rendered hit list. The caller has already checked the response is still
/// current.
pub fn result_markup(config: &SearchConfig, response: &QueryResponse) -> String {
    if response.nb_hits == 0 {
        NO_RESULTS.to_owned()
    } else {
        render_results(config, &response.hits)
    }
}

/// Renders article hits that carry a highlighted title, headed by a count of
/// the hits actually shown. Anything else in the hit list is skipped without
/// affecting the count.
pub fn render_results(config: &SearchConfig, hits: &[Hit]) -> String {
    let mut records = 0usize;
    let mut rendered = String::new();
    for hit in hits {
        if hit.layout.as_deref() != Some("post") {
            continue;
        }
        if let Some(title) = hit.highlight_result.as_ref().and_then(|h| h.title.as_ref()) {
            records += 1;
            rendered.push_str(&render_hit(config, hit, title));
        }
    }
    format!("<br/><h3>{records} matches found</h3>{rendered}")
}

fn render_hit(config: &SearchConfig, hit: &Hit, title: &HighlightedField) -> String {
    let date = hit.posted_at.and_then(format_posted_at).unwrap_or_default();
    let text = hit
        .highlight_result
        .as_ref()
        .and_then(|h| h.text.as_ref())
        .map(|t| t.value.as_str())
        .unwrap_or_default();
    let href = deep_link(config, hit);
    format!(
        "<div class=\"searchlight__result\">\
         <h4><a class=\"searchlight__result-link\" href=\"{href}\">{title}</a> <small>{date}</small></h4>\
         <div class=\"searchlight__result-text\">{text}</div>\
         </div>\
         <hr width=\"100%\" class=\"searchlight__divider\"/>",
        title = title.value,
    )
}

/// Absolute link to the hit, with a percent-encoded fragment pointing at the
/// matched element on the page.
fn deep_link(config: &SearchConfig, hit: &Hit) -> String {
    let url = hit.url.as_deref().unwrap_or_default();
    let selector = hit.css_selector.as_deref().unwrap_or_default();
    let fragment = utf8_percent_encode(selector, ENCODE_URI_SET);
    format!("{}{url}#{FRAGMENT_PREFIX}{fragment}", config.baseurl)
}

fn format_posted_at(posted_at: i64) -> Option<String> {
    DateTime::from_timestamp(posted_at, 0).map(|date| date.format("%-d %b %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchlight_api_types::HighlightResult;

    fn test_config() -> SearchConfig {
        SearchConfig {
            application_id: "APP123".to_string(),
            api_key: "searchonly456".to_string(),
            index_name: "blog".to_string(),
            baseurl: "https://example.org".to_string(),
        }
    }

    fn post_hit(title: &str) -> Hit {
        Hit {
            title: Some("Choosing an editor".to_string()),
            layout: Some("post".to_string()),
            url: Some("/2021/03/05/choosing-an-editor.html".to_string()),
            css_selector: Some("#post h2:nth-of-type(2)".to_string()),
            posted_at: Some(1614902400),
            highlight_result: Some(HighlightResult {
                title: Some(HighlightedField {
                    value: title.to_string(),
                }),
                text: Some(HighlightedField {
                    value: "an <em>editor</em> for prose".to_string(),
                }),
            }),
        }
    }

    #[test]
    fn no_hits_renders_the_no_results_message() {
        let response = QueryResponse {
            hits: vec![],
            nb_hits: 0,
            query: "editor".to_string(),
        };
        assert_eq!(result_markup(&test_config(), &response), "No results found.");
    }

    #[test]
    fn only_posts_with_highlighted_titles_are_counted() {
        let hits = vec![
            post_hit("<em>Foo</em>"),
            Hit {
                layout: Some("page".to_string()),
                ..Hit::default()
            },
            Hit {
                layout: Some("post".to_string()),
                ..Hit::default()
            },
        ];
        let markup = render_results(&test_config(), &hits);
        assert!(markup.contains("<h3>1 matches found</h3>"));
        assert_eq!(markup.matches("searchlight__result\"").count(), 1);
    }

    #[test]
    fn highlight_markup_is_embedded_verbatim() {
        let markup = render_results(&test_config(), &[post_hit("Choosing an <em>editor</em>")]);
        assert!(markup.contains(">Choosing an <em>editor</em></a>"));
        assert!(markup.contains("an <em>editor</em> for prose"));
    }

    #[test]
    fn posted_at_renders_as_day_month_year() {
        let markup = render_results(&test_config(), &[post_hit("Foo")]);
        assert!(markup.contains("<small>5 Mar 2021</small>"));
    }

    #[test]
    fn missing_posted_at_renders_an_empty_date() {
        let mut hit = post_hit("Foo");
        hit.posted_at = None;
        let markup = render_results(&test_config(), &[hit]);
        assert!(markup.contains("<small></small>"));
    }

    #[test]
    fn deep_links_combine_baseurl_url_and_encoded_fragment() {
        let markup = render_results(&test_config(), &[post_hit("Foo")]);
        assert!(markup.contains(
            "href=\"https://example.org/2021/03/05/choosing-an-editor.html\
             #searchlight:#post%20h2:nth-of-type(2)\""
        ));
    }

    #[test]
    fn fragment_encoding_matches_encode_uri() {
        let encoded = utf8_percent_encode("#a b/c?d&e'f\"g", ENCODE_URI_SET).to_string();
        assert_eq!(encoded, "#a%20b/c?d&e'f%22g");
    }
}
