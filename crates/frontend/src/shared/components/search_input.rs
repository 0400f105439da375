use contracts::shared::list::debounce::{
    DebouncePolicy, DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_SEARCH_LENGTH,
};
use leptos::prelude::*;

use crate::shared::debounce::Debouncer;

/// Debounced search box with a clear button.
///
/// Terms shorter than the minimum length are suppressed; clearing the input
/// applies immediately so the full list comes back without waiting.
#[component]
pub fn SearchInput(
    /// Currently applied search term (for display sync).
    #[prop(into)]
    value: Signal<String>,
    /// Callback receiving the settled search term.
    #[prop(into)]
    on_apply: Callback<String>,
    /// Placeholder text.
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search (min. 3 characters)...".to_string()
    } else {
        placeholder
    };

    // Local state for the input, ahead of the debounce.
    let (input_value, set_input_value) = signal(String::new());
    let debouncer = Debouncer::new(DEFAULT_DEBOUNCE_MS as i32);
    let policy = DebouncePolicy::new(DEFAULT_MIN_SEARCH_LENGTH);

    // An external reset (Clear) empties the box as well.
    Effect::new(move |_| {
        if value.get().is_empty() {
            set_input_value.set(String::new());
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        debouncer.dispatch(&policy, None, &new_value, on_apply);
    };

    let clear = move |_| {
        set_input_value.set(String::new());
        debouncer.cancel();
        on_apply.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input_change(event_target_value(&ev));
                }
            />
            {move || {
                if !input_value.get().is_empty() {
                    view! {
                        <button class="search-clear" on:click=clear title="Clear">
                            "x"
                        </button>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
