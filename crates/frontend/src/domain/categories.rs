use crate::shared::components::data_table::{text_cell, ColumnSpec};
use crate::shared::components::filter_bar::FilterSpec;
use crate::shared::list_query::ModuleEndpoints;

use super::registry::ModuleDescriptor;

pub static MODULE: ModuleDescriptor = ModuleDescriptor {
    key: "category_management",
    title: "Categories",
    endpoints: ModuleEndpoints {
        list: "/api/admin/categories",
        active: "/api/admin/categories",
        delete: "/api/admin/categories",
        resource: "categories",
    },
    columns: &[
        ColumnSpec {
            key: "name",
            title: "Name",
            render: |r| text_cell(r, "name"),
        },
        ColumnSpec {
            key: "parent",
            title: "Parent",
            render: |r| text_cell(r, "parent"),
        },
        ColumnSpec {
            key: "sortOrder",
            title: "Order",
            render: |r| text_cell(r, "sortOrder"),
        },
    ],
    filters: &[FilterSpec {
        key: "parent",
        label: "Parent",
        numeric: false,
    }],
};
