use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::notifications::{NotificationHost, NotificationService};
use crate::system::auth::context::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the toast service to the whole app via context.
    provide_context(NotificationService::new());

    view! {
        <SessionProvider>
            <NotificationHost />
            <AppRoutes />
        </SessionProvider>
    }
}
