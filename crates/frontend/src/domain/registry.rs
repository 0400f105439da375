use crate::shared::components::data_table::ColumnSpec;
use crate::shared::components::filter_bar::FilterSpec;
use crate::shared::list_query::ModuleEndpoints;

/// Everything a list page needs to know about one admin module. The module
/// key doubles as the key into the session's permission matrix.
pub struct ModuleDescriptor {
    pub key: &'static str,
    pub title: &'static str,
    pub endpoints: ModuleEndpoints,
    pub columns: &'static [ColumnSpec],
    pub filters: &'static [FilterSpec],
}

/// Sidebar order.
pub static MODULES: &[&ModuleDescriptor] = &[
    &super::users::MODULE,
    &super::roles::MODULE,
    &super::vendors::MODULE,
    &super::categories::MODULE,
    &super::advisors::MODULE,
    &super::subscriptions::MODULE,
];

pub fn find(key: &str) -> Option<&'static ModuleDescriptor> {
    MODULES.iter().copied().find(|m| m.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_keys_are_unique() {
        for (i, a) in MODULES.iter().enumerate() {
            for b in &MODULES[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn find_resolves_every_registered_key() {
        for module in MODULES {
            assert!(find(module.key).is_some());
        }
        assert!(find("nope").is_none());
    }
}
