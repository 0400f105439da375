use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-module permission flags as stored in the session.
///
/// Every field defaults to `false` so a partial or malformed matrix entry
/// fails closed rather than granting access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePermissions {
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub write: bool,
    #[serde(default)]
    pub delete: bool,
}

/// Module key (e.g. "vendor_management") -> permission flags.
/// A module absent from the map carries no permissions at all.
pub type PermissionMatrix = HashMap<String, ModulePermissions>;

/// Descriptive label for a module's permission triple, shown as a UI badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionLevel {
    None,
    ReadOnly,
    WriteOnly,
    DeleteOnly,
    ReadWrite,
    ReadDelete,
    Full,
}

impl PermissionLevel {
    pub fn label(&self) -> &'static str {
        match self {
            PermissionLevel::None => "none",
            PermissionLevel::ReadOnly => "read-only",
            PermissionLevel::WriteOnly => "write-only",
            PermissionLevel::DeleteOnly => "delete-only",
            PermissionLevel::ReadWrite => "read-write",
            PermissionLevel::ReadDelete => "read-delete",
            PermissionLevel::Full => "full",
        }
    }
}

/// Capability bundle for one module, derived once per render instead of
/// re-querying the matrix from every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiPermissions {
    pub can_view: bool,
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub level: PermissionLevel,
}

fn flags(matrix: &PermissionMatrix, module: &str) -> ModulePermissions {
    matrix.get(module).copied().unwrap_or_default()
}

pub fn can_read(matrix: &PermissionMatrix, module: &str) -> bool {
    flags(matrix, module).read
}

pub fn can_write(matrix: &PermissionMatrix, module: &str) -> bool {
    flags(matrix, module).write
}

pub fn can_delete(matrix: &PermissionMatrix, module: &str) -> bool {
    flags(matrix, module).delete
}

/// View access is the superset gate: any of the three flags opens the list.
/// A delete-only user still has to see the rows it is allowed to delete.
pub fn can_view(matrix: &PermissionMatrix, module: &str) -> bool {
    let p = flags(matrix, module);
    p.read || p.write || p.delete
}

/// Creation and editing share the single write flag.
pub fn can_create(matrix: &PermissionMatrix, module: &str) -> bool {
    can_write(matrix, module)
}

pub fn can_edit(matrix: &PermissionMatrix, module: &str) -> bool {
    can_write(matrix, module)
}

/// Whether the module shows up in navigation at all.
pub fn has_any_permission(matrix: &PermissionMatrix, module: &str) -> bool {
    can_view(matrix, module)
}

/// Derive the badge label from the flag triple. First matching rule wins,
/// so write+delete without read reads as write-only.
pub fn permission_level(matrix: &PermissionMatrix, module: &str) -> PermissionLevel {
    let p = flags(matrix, module);
    match (p.read, p.write, p.delete) {
        (true, true, true) => PermissionLevel::Full,
        (true, true, false) => PermissionLevel::ReadWrite,
        (true, false, true) => PermissionLevel::ReadDelete,
        (true, false, false) => PermissionLevel::ReadOnly,
        (false, true, _) => PermissionLevel::WriteOnly,
        (false, false, true) => PermissionLevel::DeleteOnly,
        (false, false, false) => PermissionLevel::None,
    }
}

pub fn ui_permissions(matrix: &PermissionMatrix, module: &str) -> UiPermissions {
    UiPermissions {
        can_view: can_view(matrix, module),
        can_create: can_create(matrix, module),
        can_edit: can_edit(matrix, module),
        can_delete: can_delete(matrix, module),
        level: permission_level(matrix, module),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(read: bool, write: bool, delete: bool) -> PermissionMatrix {
        let mut m = PermissionMatrix::new();
        m.insert("vendor_management".to_string(), ModulePermissions { read, write, delete });
        m
    }

    #[test]
    fn absent_module_fails_closed() {
        let m = matrix(true, true, true);
        for module in ["user_management", "unknown", ""] {
            assert!(!can_read(&m, module));
            assert!(!can_write(&m, module));
            assert!(!can_delete(&m, module));
            assert!(!can_view(&m, module));
            assert!(!can_create(&m, module));
            assert!(!can_edit(&m, module));
            assert!(!has_any_permission(&m, module));
            assert_eq!(permission_level(&m, module), PermissionLevel::None);
        }
    }

    #[test]
    fn partial_matrix_entry_fails_closed() {
        let raw = r#"{"vendor_management": {"read": true}}"#;
        let m: PermissionMatrix = serde_json::from_str(raw).unwrap();
        assert!(can_read(&m, "vendor_management"));
        assert!(!can_write(&m, "vendor_management"));
        assert!(!can_delete(&m, "vendor_management"));
    }

    #[test]
    fn view_implies_any() {
        for read in [false, true] {
            for write in [false, true] {
                for delete in [false, true] {
                    let m = matrix(read, write, delete);
                    assert_eq!(
                        can_view(&m, "vendor_management"),
                        read || write || delete
                    );
                }
            }
        }
    }

    #[test]
    fn delete_only_user_can_still_view() {
        let m = matrix(false, false, true);
        assert!(can_view(&m, "vendor_management"));
        assert!(!can_read(&m, "vendor_management"));
    }

    #[test]
    fn create_and_edit_share_the_write_flag() {
        let m = matrix(false, true, false);
        assert!(can_create(&m, "vendor_management"));
        assert!(can_edit(&m, "vendor_management"));
        let m = matrix(true, false, true);
        assert!(!can_create(&m, "vendor_management"));
        assert!(!can_edit(&m, "vendor_management"));
    }

    #[test]
    fn level_derivation_is_total() {
        let expected = [
            ((false, false, false), PermissionLevel::None),
            ((true, false, false), PermissionLevel::ReadOnly),
            ((false, true, false), PermissionLevel::WriteOnly),
            ((false, false, true), PermissionLevel::DeleteOnly),
            ((true, true, false), PermissionLevel::ReadWrite),
            ((true, false, true), PermissionLevel::ReadDelete),
            ((false, true, true), PermissionLevel::WriteOnly),
            ((true, true, true), PermissionLevel::Full),
        ];
        for ((read, write, delete), level) in expected {
            let m = matrix(read, write, delete);
            assert_eq!(permission_level(&m, "vendor_management"), level);
        }
    }

    #[test]
    fn ui_permissions_bundles_everything() {
        let m = matrix(true, true, false);
        let ui = ui_permissions(&m, "vendor_management");
        assert!(ui.can_view && ui.can_create && ui.can_edit);
        assert!(!ui.can_delete);
        assert_eq!(ui.level, PermissionLevel::ReadWrite);
        assert_eq!(ui.level.label(), "read-write");
    }
}
