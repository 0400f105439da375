use crate::shared::components::data_table::{text_cell, ColumnSpec};
use crate::shared::date_utils::datetime_cell;
use crate::shared::list_query::ModuleEndpoints;

use super::registry::ModuleDescriptor;

pub static MODULE: ModuleDescriptor = ModuleDescriptor {
    key: "role_management",
    title: "Roles",
    endpoints: ModuleEndpoints {
        list: "/api/admin/roles",
        active: "/api/admin/roles",
        delete: "/api/admin/roles",
        resource: "roles",
    },
    columns: &[
        ColumnSpec {
            key: "name",
            title: "Name",
            render: |r| text_cell(r, "name"),
        },
        ColumnSpec {
            key: "description",
            title: "Description",
            render: |r| text_cell(r, "description"),
        },
        ColumnSpec {
            key: "updatedAt",
            title: "Updated",
            render: |r| datetime_cell(r, "updatedAt"),
        },
    ],
    filters: &[],
};
