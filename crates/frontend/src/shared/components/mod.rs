pub mod data_table;
pub mod filter_bar;
pub mod pagination_controls;
pub mod search_input;

/// Blocking confirmation for destructive actions. Anything but an explicit
/// "yes" counts as a refusal.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
