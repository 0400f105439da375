use std::collections::BTreeMap;

use contracts::shared::list::debounce::{
    DebouncePolicy, DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_SEARCH_LENGTH,
};
use leptos::prelude::*;

use crate::shared::debounce::Debouncer;

/// One filter input of a module's list toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    /// Query-string key the value is sent under.
    pub key: &'static str,
    pub label: &'static str,
    /// Numeric-identifier fields (phone numbers) bypass the debounce and
    /// apply on every keystroke with non-digits stripped.
    pub numeric: bool,
}

/// Row of filter inputs. Each keystroke merges its key into the current
/// filter map and hands the whole map to `on_apply`; empty values drop the
/// key so it is omitted from the outgoing request.
#[component]
pub fn FilterBar(
    specs: &'static [FilterSpec],
    #[prop(into)] filters: Signal<BTreeMap<String, String>>,
    #[prop(into)] on_apply: Callback<BTreeMap<String, String>>,
) -> impl IntoView {
    let policy = specs
        .iter()
        .filter(|s| s.numeric)
        .fold(DebouncePolicy::new(DEFAULT_MIN_SEARCH_LENGTH), |p, s| {
            p.with_bypass_key(s.key)
        });
    let policy = StoredValue::new(policy);

    view! {
        <div class="filter-bar">
            {specs
                .iter()
                .map(|spec| {
                    let key = spec.key;
                    let (input_value, set_input_value) = signal(String::new());
                    let debouncer = Debouncer::new(DEFAULT_DEBOUNCE_MS as i32);

                    let apply = Callback::new(move |normalized: String| {
                        let mut next = filters.get_untracked();
                        if normalized.is_empty() {
                            next.remove(key);
                        } else {
                            next.insert(key.to_string(), normalized);
                        }
                        on_apply.run(next);
                    });

                    // An external reset (Clear) empties the box as well.
                    Effect::new(move |_| {
                        let applied = filters.with(|f| f.get(key).cloned().unwrap_or_default());
                        if applied.is_empty() {
                            set_input_value.set(String::new());
                        }
                    });

                    view! {
                        <label class="filter-field">
                            <span>{spec.label}</span>
                            <input
                                type="text"
                                prop:value=move || input_value.get()
                                on:input=move |ev| {
                                    let val = event_target_value(&ev);
                                    set_input_value.set(val.clone());
                                    policy
                                        .with_value(|p| {
                                            debouncer.dispatch(p, Some(key), &val, apply)
                                        });
                                }
                            />
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}
