/// Tracks the last submitted query so duplicate submissions and stale
/// responses can be dropped. The most recently submitted query wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchSession {
    last_query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// The input text matches the last submission; nothing to do.
    Unchanged,
    /// The query was cleared; hide the results panel without searching.
    Hide,
    /// Dispatch a search for this query and show the results panel.
    Search(String),
}

impl SearchSession {
    /// Records the input field's current text and decides what the
    /// submission should do.
    pub fn submit(&mut self, input: &str) -> SubmitAction {
        if self.last_query.as_deref() == Some(input) {
            return SubmitAction::Unchanged;
        }
        self.last_query = Some(input.to_owned());
        if input.is_empty() {
            SubmitAction::Hide
        } else {
            SubmitAction::Search(input.to_owned())
        }
    }

    /// Whether a response computed for `response_query` is still current.
    /// Responses can arrive out of order; anything that doesn't match the
    /// last submission is ignored.
    pub fn accepts(&self, response_query: &str) -> bool {
        self.last_query.as_deref() == Some(response_query)
    }
}
