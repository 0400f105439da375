use contracts::system::permissions::has_any_permission;
use leptos::prelude::*;

use crate::domain::registry::MODULES;
use crate::system::auth::context::use_session;

/// Navigation over the module registry. A module with no permission flags at
/// all does not appear.
#[component]
pub fn Sidebar(selected: RwSignal<&'static str>) -> impl IntoView {
    let session = use_session();

    view! {
        <nav class="sidebar">
            <div class="sidebar-brand">"Admin Console"</div>
            <ul>
                {move || {
                    let matrix = session.permissions();
                    MODULES
                        .iter()
                        .copied()
                        .filter(|m| has_any_permission(&matrix, m.key))
                        .map(|m| {
                            let key = m.key;
                            view! {
                                <li class:active=move || selected.get() == key>
                                    <a
                                        href="#"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            selected.set(key);
                                        }
                                    >
                                        {m.title}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}
