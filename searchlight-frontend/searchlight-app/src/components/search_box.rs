use leptos::{
    ev::{MouseEvent, SubmitEvent},
    html::Input,
    prelude::*,
    task::spawn_local,
};

use crate::{
    api,
    config::SearchConfig,
    render,
    session::{SearchSession, SubmitAction},
};

/// The search widget: a query form plus a results panel fed by the hosted
/// index. The panel is shown whenever the current query is non-empty; its
/// content is replaced when a still-current response arrives.
#[component]
pub fn SearchBox(config: SearchConfig) -> impl IntoView {
    let text_input = NodeRef::<Input>::new();
    let session = RwSignal::new(SearchSession::default());
    let (shown, set_shown) = signal(false);
    let (results_html, set_results_html) = signal(String::new());

    let submit = {
        let config = config.clone();
        move || {
            let Some(input) = text_input.get() else {
                return;
            };
            let current = input.value();
            let action = session
                .try_update(|session| session.submit(&current))
                .unwrap_or(SubmitAction::Unchanged);
            match action {
                SubmitAction::Unchanged => {}
                SubmitAction::Hide => set_shown.set(false),
                SubmitAction::Search(query) => {
                    set_shown.set(true);
                    let config = config.clone();
                    spawn_local(async move {
                        match api::search_index(&config, &query).await {
                            Ok(data) => {
                                // A newer query may have been submitted while
                                // this one was in flight.
                                if session.with_untracked(|session| session.accepts(&data.query)) {
                                    set_results_html.set(render::result_markup(&config, &data));
                                }
                            }
                            Err(error) => log::error!("search failed: {error}"),
                        }
                    });
                }
            }
        }
    };

    let on_submit = {
        let submit = submit.clone();
        move |ev: SubmitEvent| {
            ev.stop_propagation();
            ev.prevent_default();
            submit();
        }
    };
    let on_click = move |ev: MouseEvent| {
        ev.stop_propagation();
        ev.prevent_default();
        submit();
    };

    view! {
        <form id="searchlight-search-form" on:submit=on_submit>
            <input
                id="searchlight-search-input"
                node_ref=text_input
                type="text"
                placeholder="Search"
            />
            <button id="searchlight-search-button" type="submit" on:click=on_click>
                "Search"
            </button>
        </form>
        <div
            id="searchlight-results"
            class:hidden=move || !shown.get()
            class:show=move || shown.get()
            inner_html=move || results_html.get()
        ></div>
    }
}
