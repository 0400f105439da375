use crate::shared::components::data_table::{text_cell, ColumnSpec};
use crate::shared::components::filter_bar::FilterSpec;
use crate::shared::date_utils::datetime_cell;
use crate::shared::list_query::ModuleEndpoints;

use super::registry::ModuleDescriptor;

pub static MODULE: ModuleDescriptor = ModuleDescriptor {
    key: "advisor_management",
    title: "Advisors",
    endpoints: ModuleEndpoints {
        list: "/api/admin/advisors",
        active: "/api/admin/advisors",
        delete: "/api/admin/advisors",
        resource: "advisors",
    },
    columns: &[
        ColumnSpec {
            key: "name",
            title: "Name",
            render: |r| text_cell(r, "name"),
        },
        ColumnSpec {
            key: "phone",
            title: "Phone",
            render: |r| text_cell(r, "phone"),
        },
        ColumnSpec {
            key: "specialty",
            title: "Specialty",
            render: |r| text_cell(r, "specialty"),
        },
        ColumnSpec {
            key: "rating",
            title: "Rating",
            render: |r| text_cell(r, "rating"),
        },
        ColumnSpec {
            key: "createdAt",
            title: "Created",
            render: |r| datetime_cell(r, "createdAt"),
        },
    ],
    // The phone filter applies on every keystroke, digits only.
    filters: &[
        FilterSpec {
            key: "phone",
            label: "Phone",
            numeric: true,
        },
        FilterSpec {
            key: "specialty",
            label: "Specialty",
            numeric: false,
        },
    ],
};
