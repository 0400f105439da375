use std::collections::HashSet;

use contracts::shared::list::envelope::{record_id, record_is_active};
use contracts::system::permissions::UiPermissions;
use leptos::prelude::*;
use serde_json::Value;

use super::confirm;
use crate::shared::list_query::ListQueryHandle;

/// One column of the generic list table.
#[derive(Clone, Copy)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub render: fn(&Value) -> String,
}

/// Plain-text cell fallback: stringify the field at `key`.
pub fn text_cell(record: &Value, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => if *b { "yes" } else { "no" }.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Null) | None => "-".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Generic list table over opaque JSON records.
///
/// Action affordances follow the capability descriptor: the selection column
/// and the delete icon need `can_delete`, the active toggle `can_edit`.
/// Deletes go through an explicit confirmation first.
#[component]
pub fn DataTable(
    columns: &'static [ColumnSpec],
    handle: ListQueryHandle,
    #[prop(into)] perms: Signal<UiPermissions>,
) -> impl IntoView {
    let page_ids = move || -> Vec<String> {
        handle.data.get().iter().filter_map(record_id).collect()
    };

    let all_selected = move || {
        let ids = page_ids();
        !ids.is_empty()
            && handle
                .state
                .with(|s| ids.iter().all(|id| s.selected_ids.contains(id)))
    };

    let toggle_all = move |_| {
        if all_selected() {
            handle.on_selection_change(HashSet::new());
        } else {
            handle.on_selection_change(page_ids().into_iter().collect());
        }
    };

    let toggle_row = move |id: String| {
        let mut ids = handle.state.with_untracked(|s| s.selected_ids.clone());
        if !ids.insert(id.clone()) {
            ids.remove(&id);
        }
        handle.on_selection_change(ids);
    };

    let render_row = move |record: Value| {
        let id = record_id(&record);
        let is_active = record_is_active(&record);

        let cells = columns
            .iter()
            .map(|col| {
                view! {
                    <td class=format!("col-{}", col.key)>{(col.render)(&record)}</td>
                }
            })
            .collect_view();

        let select_cell = {
            let id = id.clone();
            move || -> AnyView {
                if !perms.get().can_delete {
                    return view! { <></> }.into_any();
                }
                match id.clone() {
                    Some(row_id) => {
                        let checked = {
                            let row_id = row_id.clone();
                            move || handle.state.with(|s| s.selected_ids.contains(&row_id))
                        };
                        view! {
                            <td class="col-select">
                                <input
                                    type="checkbox"
                                    prop:checked=checked
                                    on:change=move |_| toggle_row(row_id.clone())
                                />
                            </td>
                        }
                        .into_any()
                    }
                    None => view! { <td class="col-select"></td> }.into_any(),
                }
            }
        };

        let toggle_cell = {
            let record = record.clone();
            move || -> AnyView {
                let Some(active) = is_active else {
                    return view! { <></> }.into_any();
                };
                if !perms.get().can_edit {
                    return view! { <></> }.into_any();
                }
                let record = record.clone();
                let label = if active { "Deactivate" } else { "Activate" };
                view! {
                    <button
                        class="action-toggle"
                        class:is-active=active
                        title={label}
                        on:click=move |_| handle.on_active(&record)
                    >
                        {if active { "on" } else { "off" }}
                    </button>
                }
                .into_any()
            }
        };

        let delete_cell = {
            let record = record.clone();
            move || -> AnyView {
                if !perms.get().can_delete {
                    return view! { <></> }.into_any();
                }
                let record = record.clone();
                view! {
                    <button
                        class="action-delete"
                        title="Delete"
                        on:click=move |_| {
                            if confirm("Delete this record?") {
                                handle.on_delete(&record);
                            }
                        }
                    >
                        "Delete"
                    </button>
                }
                .into_any()
            }
        };

        view! {
            <tr>
                {select_cell}
                {cells}
                <td class="col-actions">{toggle_cell}{delete_cell}</td>
            </tr>
        }
    };

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <Show when=move || perms.get().can_delete>
                        <th class="col-select">
                            <input type="checkbox" prop:checked=all_selected on:change=toggle_all />
                        </th>
                    </Show>
                    {columns
                        .iter()
                        .map(|col| view! { <th>{col.title}</th> })
                        .collect_view()}
                    <th class="col-actions">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let records = handle.data.get();
                    if records.is_empty() {
                        let span = (columns.len() + 2).to_string();
                        view! {
                            <tr>
                                <td colspan={span} class="empty-state">
                                    {move || {
                                        if handle.loading.get() {
                                            "Loading..."
                                        } else {
                                            "No records found"
                                        }
                                    }}
                                </td>
                            </tr>
                        }
                        .into_any()
                    } else {
                        records.into_iter().map(render_row).collect_view().into_any()
                    }
                }}
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_cell_renders_scalars() {
        let record = json!({
            "name": "Acme",
            "isActive": true,
            "count": 7,
            "missing": null
        });
        assert_eq!(text_cell(&record, "name"), "Acme");
        assert_eq!(text_cell(&record, "isActive"), "yes");
        assert_eq!(text_cell(&record, "count"), "7");
        assert_eq!(text_cell(&record, "missing"), "-");
        assert_eq!(text_cell(&record, "absent"), "-");
    }
}
