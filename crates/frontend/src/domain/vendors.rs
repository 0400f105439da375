use crate::shared::components::data_table::{text_cell, ColumnSpec};
use crate::shared::components::filter_bar::FilterSpec;
use crate::shared::date_utils::datetime_cell;
use crate::shared::list_query::ModuleEndpoints;

use super::registry::ModuleDescriptor;

pub static MODULE: ModuleDescriptor = ModuleDescriptor {
    key: "vendor_management",
    title: "Vendors",
    endpoints: ModuleEndpoints {
        list: "/api/admin/vendors",
        active: "/api/admin/vendors",
        delete: "/api/admin/vendors",
        resource: "vendors",
    },
    columns: &[
        ColumnSpec {
            key: "name",
            title: "Name",
            render: |r| text_cell(r, "name"),
        },
        ColumnSpec {
            key: "email",
            title: "Email",
            render: |r| text_cell(r, "email"),
        },
        ColumnSpec {
            key: "city",
            title: "City",
            render: |r| text_cell(r, "city"),
        },
        ColumnSpec {
            key: "createdAt",
            title: "Created",
            render: |r| datetime_cell(r, "createdAt"),
        },
    ],
    filters: &[
        FilterSpec {
            key: "city",
            label: "City",
            numeric: false,
        },
        FilterSpec {
            key: "phone",
            label: "Phone",
            numeric: true,
        },
    ],
};
