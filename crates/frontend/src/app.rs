use crate::table_viewer::TableViewer;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-container">
            <h1 class="header__title">"Table Viewer"</h1>
            <TableViewer />
        </div>
    }
}
