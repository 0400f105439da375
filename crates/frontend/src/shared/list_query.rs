//! Query orchestrator for the admin list views.
//!
//! One `ListQueryHandle` per mounted list page owns paging, search, filter
//! and selection state, issues at most one list fetch at a time, and exposes
//! the mutation helpers (toggle-active, delete, bulk delete). Records are
//! opaque JSON; only `id`/`_id` and the active flag are interpreted.

use std::collections::{BTreeMap, HashSet};

use contracts::shared::list::envelope::{self, ListPage};
use contracts::shared::list::gate::FetchGate;
use contracts::shared::list::query::ListQueryState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{json, Value};

use super::api_client;
use super::notifications::{use_notifications, NotificationService};

/// Endpoint set of one admin module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleEndpoints {
    /// GET list endpoint, e.g. "/api/admin/vendors".
    pub list: &'static str,
    /// PATCH `{active}/{id}` flips the record's active flag.
    pub active: &'static str,
    /// DELETE `{delete}/{id}`.
    pub delete: &'static str,
    /// Pluralized resource property probed first during normalization.
    pub resource: &'static str,
}

/// Copyable bundle of signals and actions handed to the list page.
#[derive(Clone, Copy)]
pub struct ListQueryHandle {
    endpoints: ModuleEndpoints,
    pub state: RwSignal<ListQueryState>,
    /// Current page of records, replaced wholesale on every successful fetch.
    pub data: RwSignal<Vec<Value>>,
    pub total: RwSignal<usize>,
    pub loading: RwSignal<bool>,
    revision: RwSignal<u64>,
    gate: StoredValue<FetchGate>,
    notifications: NotificationService,
}

/// Create the orchestrator for one list view. The fetch effect runs once on
/// mount and again whenever a setter bumps the revision.
pub fn use_list_query(endpoints: ModuleEndpoints, page_size: usize) -> ListQueryHandle {
    let handle = ListQueryHandle {
        endpoints,
        state: RwSignal::new(ListQueryState::new(page_size)),
        data: RwSignal::new(Vec::new()),
        total: RwSignal::new(0),
        loading: RwSignal::new(false),
        revision: RwSignal::new(0),
        gate: StoredValue::new(FetchGate::new()),
        notifications: use_notifications(),
    };

    Effect::new(move |_| {
        handle.revision.get();
        handle.spawn_fetch();
    });

    handle
}

impl ListQueryHandle {
    fn bump(&self) {
        self.revision.update(|r| *r += 1);
    }

    /// Re-issue the fetch with the current state unchanged.
    pub fn refresh(&self) {
        self.bump();
    }

    pub fn on_search(&self, term: String) {
        self.state.update(|s| s.set_search(term));
        self.bump();
    }

    pub fn on_filter_change(&self, filters: BTreeMap<String, String>) {
        self.state.update(|s| s.set_filters(filters));
        self.bump();
    }

    pub fn on_page_change(&self, page: usize, page_size: usize) {
        self.state.update(|s| s.set_page(page, page_size));
        self.bump();
    }

    pub fn clear_all(&self) {
        self.state.update(|s| s.clear_all());
        self.bump();
    }

    /// Selection changes do not touch the network.
    pub fn on_selection_change(&self, ids: HashSet<String>) {
        self.state.update(|s| s.selected_ids = ids);
    }

    fn spawn_fetch(self) {
        let started = self
            .gate
            .try_update_value(|g| g.try_begin())
            .unwrap_or(false);
        if !started {
            // Busy: this trigger is dropped, not queued. The next trigger
            // after the in-flight fetch settles picks up the current state.
            return;
        }
        self.loading.set(true);

        spawn_local(async move {
            let query = self.state.with_untracked(|s| s.query_string());
            let path = format!("{}?{}", self.endpoints.list, query);
            match api_client::get_json(&path).await {
                Ok(body) => {
                    let ListPage {
                        records,
                        total_count,
                    } = envelope::normalize(self.endpoints.resource, &body);
                    self.data.set(records);
                    self.total.set(total_count);
                }
                Err(e) => {
                    // Previous data stays in place; no automatic retry.
                    log::warn!("list fetch failed for {}: {}", self.endpoints.list, e);
                    self.notifications
                        .error(format!("Failed to load records: {}", e));
                }
            }
            self.loading.set(false);
            self.gate.update_value(|g| g.finish());
        });
    }

    /// Flip the record's active flag on the server. The UI keeps showing the
    /// pre-toggle value until the refreshed fetch confirms the change; a
    /// failed toggle changes nothing.
    pub fn on_active(&self, record: &Value) {
        let Some(id) = envelope::record_id(record) else {
            self.notifications.error("Record has no identifier");
            return;
        };
        let current = envelope::record_is_active(record).unwrap_or(false);

        let handle = *self;
        spawn_local(async move {
            let path = format!("{}/{}", handle.endpoints.active, id);
            match api_client::patch_json(&path, &json!({ "isActive": !current })).await {
                Ok(()) => {
                    handle.notifications.success(if current {
                        "Record deactivated"
                    } else {
                        "Record activated"
                    });
                    handle.refresh();
                }
                Err(e) => {
                    log::warn!("toggle active failed for {}: {}", path, e);
                    handle
                        .notifications
                        .error(format!("Failed to update status: {}", e));
                }
            }
        });
    }

    pub fn on_delete(&self, record: &Value) {
        let Some(id) = envelope::record_id(record) else {
            self.notifications.error("Record has no identifier");
            return;
        };
        self.delete_ids(vec![id]);
    }

    pub fn on_bulk_delete(&self) {
        let ids: Vec<String> = self
            .state
            .with_untracked(|s| s.selected_ids.iter().cloned().collect());
        if ids.is_empty() {
            self.notifications.error("No records selected");
            return;
        }
        self.delete_ids(ids);
    }

    /// Deletes run one by one; partial failure is reported in aggregate.
    /// Selection is cleared and the list refreshed regardless of failures.
    fn delete_ids(&self, ids: Vec<String>) {
        let handle = *self;
        spawn_local(async move {
            let total = ids.len();
            let mut failed = 0usize;
            for id in ids {
                let path = format!("{}/{}", handle.endpoints.delete, id);
                if let Err(e) = api_client::delete(&path).await {
                    log::warn!("delete failed for {}: {}", path, e);
                    failed += 1;
                }
            }
            match delete_outcome(total, failed) {
                Ok(message) => handle.notifications.success(message),
                Err(message) => handle.notifications.error(message),
            }
            handle.state.update(|s| s.selected_ids.clear());
            handle.refresh();
        });
    }
}

/// 1-based page count for the pagination controls.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    if total_count == 0 {
        1
    } else {
        (total_count + page_size - 1) / page_size
    }
}

/// Aggregate outcome message for a (bulk) delete. Failures are not itemized.
pub fn delete_outcome(total: usize, failed: usize) -> Result<String, String> {
    if failed == 0 {
        if total == 1 {
            Ok("Record deleted".to_string())
        } else {
            Ok(format!("{} records deleted", total))
        }
    } else if failed == total {
        Err("Records could not be deleted".to_string())
    } else {
        Err("Some records could not be deleted".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 10), 10);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn delete_outcome_is_aggregate() {
        assert_eq!(delete_outcome(1, 0).unwrap(), "Record deleted");
        assert_eq!(delete_outcome(3, 0).unwrap(), "3 records deleted");
        assert_eq!(
            delete_outcome(3, 1).unwrap_err(),
            "Some records could not be deleted"
        );
        assert_eq!(
            delete_outcome(2, 2).unwrap_err(),
            "Records could not be deleted"
        );
    }
}
