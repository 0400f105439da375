use crate::shared::components::data_table::{text_cell, ColumnSpec};
use crate::shared::components::filter_bar::FilterSpec;
use crate::shared::date_utils::datetime_cell;
use crate::shared::list_query::ModuleEndpoints;

use super::registry::ModuleDescriptor;

pub static MODULE: ModuleDescriptor = ModuleDescriptor {
    key: "subscription_management",
    title: "Subscriptions",
    endpoints: ModuleEndpoints {
        list: "/api/admin/subscriptions",
        active: "/api/admin/subscriptions",
        delete: "/api/admin/subscriptions",
        resource: "subscriptions",
    },
    columns: &[
        ColumnSpec {
            key: "name",
            title: "Plan",
            render: |r| text_cell(r, "name"),
        },
        ColumnSpec {
            key: "price",
            title: "Price",
            render: |r| text_cell(r, "price"),
        },
        ColumnSpec {
            key: "durationDays",
            title: "Duration (days)",
            render: |r| text_cell(r, "durationDays"),
        },
        ColumnSpec {
            key: "createdAt",
            title: "Created",
            render: |r| datetime_cell(r, "createdAt"),
        },
    ],
    filters: &[FilterSpec {
        key: "status",
        label: "Status",
        numeric: false,
    }],
};
