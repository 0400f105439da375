use contracts::system::permissions::has_any_permission;
use leptos::prelude::*;

use crate::domain::module_page::ModulePage;
use crate::domain::registry::{self, MODULES};
use crate::layout::sidebar::Sidebar;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;

#[component]
fn MainLayout() -> impl IntoView {
    let session = use_session();
    let selected: RwSignal<&'static str> = RwSignal::new("");

    // Land on the first module the user may see; follow along if the
    // current selection loses its permissions on a session reload.
    Effect::new(move |_| {
        let matrix = session.permissions();
        let current = selected.get();
        let visible = !current.is_empty() && has_any_permission(&matrix, current);
        if !visible {
            if let Some(first) = MODULES
                .iter()
                .copied()
                .find(|m| has_any_permission(&matrix, m.key))
            {
                selected.set(first.key);
            }
        }
    });

    view! {
        <div class="app-shell">
            <Sidebar selected=selected />
            <main class="app-main">
                <header class="app-header">
                    <span class="current-user">{move || session.username()}</span>
                    <button class="btn-logout" on:click=move |_| session.logout()>
                        "Log out"
                    </button>
                </header>
                {move || {
                    // The page remounts on every module switch, so each list
                    // view gets a fresh orchestrator instance.
                    match registry::find(selected.get()) {
                        Some(descriptor) => {
                            view! { <ModulePage descriptor=descriptor /> }.into_any()
                        }
                        None => {
                            view! { <div class="no-modules">"No modules available."</div> }
                                .into_any()
                        }
                    }
                }}
            </main>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
