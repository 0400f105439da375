use crate::shared::components::data_table::{text_cell, ColumnSpec};
use crate::shared::components::filter_bar::FilterSpec;
use crate::shared::date_utils::datetime_cell;
use crate::shared::list_query::ModuleEndpoints;

use super::registry::ModuleDescriptor;

pub static MODULE: ModuleDescriptor = ModuleDescriptor {
    key: "user_management",
    title: "Users",
    endpoints: ModuleEndpoints {
        list: "/api/admin/users",
        active: "/api/admin/users",
        delete: "/api/admin/users",
        resource: "users",
    },
    columns: &[
        ColumnSpec {
            key: "username",
            title: "Username",
            render: |r| text_cell(r, "username"),
        },
        ColumnSpec {
            key: "fullName",
            title: "Full name",
            render: |r| text_cell(r, "fullName"),
        },
        ColumnSpec {
            key: "email",
            title: "Email",
            render: |r| text_cell(r, "email"),
        },
        ColumnSpec {
            key: "role",
            title: "Role",
            render: |r| text_cell(r, "role"),
        },
        ColumnSpec {
            key: "createdAt",
            title: "Created",
            render: |r| datetime_cell(r, "createdAt"),
        },
    ],
    filters: &[FilterSpec {
        key: "role",
        label: "Role",
        numeric: false,
    }],
};
