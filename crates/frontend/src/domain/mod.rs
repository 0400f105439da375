pub mod advisors;
pub mod categories;
pub mod module_page;
pub mod registry;
pub mod roles;
pub mod subscriptions;
pub mod users;
pub mod vendors;
