use contracts::shared::list::query::DEFAULT_PAGE_SIZE;
use contracts::system::permissions::{ui_permissions, UiPermissions};
use leptos::prelude::*;

use super::registry::ModuleDescriptor;
use crate::shared::components::confirm;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::filter_bar::FilterBar;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::list_query::{total_pages, use_list_query};
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireModule;

/// The bulk-delete button needs both the capability and a non-empty
/// selection.
fn bulk_delete_visible(perms: &UiPermissions, selected: usize) -> bool {
    perms.can_delete && selected != 0
}

/// Generic list page: one orchestrator instance per mount, affordances wired
/// up only as far as the capability descriptor allows.
#[component]
pub fn ModulePage(descriptor: &'static ModuleDescriptor) -> impl IntoView {
    let session = use_session();
    let perms = Memo::new(move |_| ui_permissions(&session.permissions(), descriptor.key));

    let handle = use_list_query(descriptor.endpoints, DEFAULT_PAGE_SIZE);

    let filters = Signal::derive(move || handle.state.with(|s| s.filters.clone()));
    let search_term = Signal::derive(move || handle.state.with(|s| s.search_term.clone()));
    let current_page = Signal::derive(move || handle.state.with(|s| s.page));
    let page_size = Signal::derive(move || handle.state.with(|s| s.page_size));
    let pages = Signal::derive(move || {
        total_pages(handle.total.get(), handle.state.with(|s| s.page_size))
    });
    let selected_count = Signal::derive(move || handle.state.with(|s| s.selected_ids.len()));

    view! {
        <RequireModule module=descriptor.key>
            <div class="module-page">
                <header class="module-header">
                    <h1>{descriptor.title}</h1>
                    <span class="permission-badge">
                        {move || perms.get().level.label()}
                    </span>
                </header>

                <div class="list-toolbar">
                    <SearchInput
                        value=search_term
                        on_apply=Callback::new(move |term| handle.on_search(term))
                    />
                    <FilterBar
                        specs=descriptor.filters
                        filters=filters
                        on_apply=Callback::new(move |f| handle.on_filter_change(f))
                    />
                    <button class="btn-clear" on:click=move |_| handle.clear_all()>
                        "Clear"
                    </button>
                    <Show when=move || bulk_delete_visible(&perms.get(), selected_count.get())>
                        <button
                            class="btn-danger"
                            on:click=move |_| {
                                let count = selected_count.get_untracked();
                                if confirm(&format!("Delete {} selected records?", count)) {
                                    handle.on_bulk_delete();
                                }
                            }
                        >
                            {move || format!("Delete selected ({})", selected_count.get())}
                        </button>
                    </Show>
                </div>

                <DataTable columns=descriptor.columns handle=handle perms=perms />

                <PaginationControls
                    current_page=current_page
                    total_pages=pages
                    total_count=handle.total
                    page_size=page_size
                    on_page_change=Callback::new(move |page| {
                        let size = handle.state.with_untracked(|s| s.page_size);
                        handle.on_page_change(page, size);
                    })
                    on_page_size_change=Callback::new(move |size| {
                        handle.on_page_change(1, size);
                    })
                />
            </div>
        </RequireModule>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::permissions::PermissionLevel;

    fn perms(can_delete: bool) -> UiPermissions {
        UiPermissions {
            can_view: true,
            can_create: false,
            can_edit: false,
            can_delete,
            level: PermissionLevel::DeleteOnly,
        }
    }

    #[test]
    fn bulk_delete_needs_permission_and_selection() {
        assert!(bulk_delete_visible(&perms(true), 2));
        assert!(!bulk_delete_visible(&perms(true), 0));
        assert!(!bulk_delete_visible(&perms(false), 2));
        assert!(!bulk_delete_visible(&perms(false), 0));
    }
}
