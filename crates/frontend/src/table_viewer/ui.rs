use super::api;
use super::view_model::ViewerState;
use crate::shared::components::ui::{Button, Input};
use leptos::prelude::*;

const TABLE_ERROR: &str = "Error fetching table. Please try again.";
const SEARCH_ERROR: &str = "Error fetching search results. Please try again.";

/// Table viewer page: a table-name input, one filter input per
/// discovered column, a search button and the rendered snapshot.
///
/// All view state lives in a single [`ViewerState`] behind one signal;
/// this component only wires DOM events and network completions to its
/// transitions.
#[component]
#[allow(non_snake_case)]
pub fn TableViewer() -> impl IntoView {
    let state = RwSignal::new(ViewerState::default());

    // RwSignal bound to the table-name control.
    let table_name = RwSignal::new(String::new());

    let load_table = move || {
        let name = state.with_untracked(|s| s.table_name.clone());
        let seq = state.try_update(|s| s.begin_request()).unwrap_or_default();

        leptos::task::spawn_local(async move {
            match api::fetch_table(&name).await {
                Ok(data) => state.update(|s| s.apply_success(seq, data)),
                Err(e) => {
                    log::error!("Failed to fetch table {name:?}: {e}");
                    state.update(|s| s.apply_failure(seq, TABLE_ERROR.to_string()));
                }
            }
        });
    };

    let run_search = move || {
        let (name, body) =
            state.with_untracked(|s| (s.table_name.clone(), s.form_body()));
        let seq = state.try_update(|s| s.begin_request()).unwrap_or_default();

        leptos::task::spawn_local(async move {
            match api::search_table(&name, &body).await {
                Ok(data) => state.update(|s| s.apply_success(seq, data)),
                Err(e) => {
                    log::error!("Failed to fetch search results for {name:?}: {e}");
                    state.update(|s| s.apply_failure(seq, SEARCH_ERROR.to_string()));
                }
            }
        });
    };

    // One automatic load per committed table-name change, including the
    // initial empty value. In-flight calls are not cancelled; stale
    // completions are discarded by the view model's sequence guard.
    Effect::new(move |_| {
        let name = table_name.get();
        state.update(|s| s.set_table_name(name));
        load_table();
    });

    // Memos over the state slices, so a filter keystroke does not
    // re-render the column inputs or the table body.
    let columns = Memo::new(move |_| state.with(|s| s.table_data.columns.clone()));
    let rows = Memo::new(move |_| state.with(|s| s.table_data.rows.clone()));
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));

    view! {
        <div class="table-viewer">
            <Input
                id="table-name"
                label="Table Name:"
                value=table_name
                on_input=Callback::new(move |v: String| table_name.set(v))
            />

            {move || {
                columns
                    .get()
                    .into_iter()
                    .map(|column| {
                        let name = column.name;
                        let name_for_value = name.clone();
                        let name_for_input = name.clone();
                        let value = Signal::derive(move || {
                            state.with(|s| {
                                s.filters.get(&name_for_value).cloned().unwrap_or_default()
                            })
                        });
                        view! {
                            <Input
                                id=name.clone()
                                label=format!("{}:", name)
                                value=value
                                on_input=Callback::new(move |v: String| {
                                    state.update(|s| s.set_filter(&name_for_input, v));
                                })
                            />
                        }
                    })
                    .collect_view()
            }}

            <Button
                variant="secondary"
                disabled=Signal::derive(move || loading.get())
                on_click=Callback::new(move |_| run_search())
            >
                "Search"
            </Button>

            {move || {
                loading.get().then(|| view! {
                    <div class="spinner">"Loading..."</div>
                })
            }}

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {move || {
                                columns
                                    .get()
                                    .into_iter()
                                    .map(|column| view! {
                                        <th class="table__header-cell">{column.name}</th>
                                    })
                                    .collect_view()
                            }}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows
                                .get()
                                .into_iter()
                                .map(|row| view! {
                                    <tr class="table__row">
                                        {row
                                            .into_iter()
                                            .map(|cell| view! {
                                                <td class="table__cell">{cell}</td>
                                            })
                                            .collect_view()}
                                    </tr>
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
