use contracts::system::permissions::can_view;
use leptos::prelude::*;

use super::context::use_session;

/// Component that requires view access to one admin module.
/// Any of read/write/delete opens the view; no flags at all shows fallback.
#[component]
pub fn RequireModule(module: &'static str, children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || can_view(&session.permissions(), module)
            fallback=|| view! { <div class="access-denied">"Access denied."</div> }
        >
            {children()}
        </Show>
    }
}
