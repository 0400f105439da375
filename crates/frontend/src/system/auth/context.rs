use contracts::system::auth::{LoginResponse, UserInfo};
use contracts::system::permissions::PermissionMatrix;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub access_token: Option<String>,
    /// Unix seconds; zero means unknown, which reads as expired.
    pub expires_at: i64,
    pub user: Option<UserInfo>,
    pub permissions: PermissionMatrix,
}

/// Explicitly injected session handle. The persisted storage is the source
/// of truth; the signal is a wholesale snapshot of it, replaced only through
/// `reload`, `establish` and `logout`.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let ctx = Self {
            state: RwSignal::new(SessionState::default()),
        };
        ctx.reload();
        ctx
    }

    /// Re-read the persisted session wholesale.
    pub fn reload(&self) {
        self.state.set(SessionState {
            access_token: storage::get_access_token(),
            expires_at: storage::get_expires_at().unwrap_or(0),
            user: storage::get_user(),
            permissions: storage::get_permissions().unwrap_or_default(),
        });
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.access_token.is_some())
    }

    pub fn username(&self) -> String {
        self.state
            .with(|s| s.user.as_ref().map(|u| u.username.clone()))
            .unwrap_or_default()
    }

    /// Read-only snapshot of the permission matrix for evaluator calls.
    pub fn permissions(&self) -> PermissionMatrix {
        self.state.with(|s| s.permissions.clone())
    }

    pub fn establish(&self, response: &LoginResponse) {
        storage::save_session(response);
        self.reload();
    }

    pub fn logout(&self) {
        storage::clear_session();
        self.state.set(SessionState::default());
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = SessionContext::new();
    provide_context(session);

    // Validate a restored token against the backend once on mount; a dead
    // token comes back as 401 and the client wrapper tears the session down.
    Effect::new(move |_| {
        if session.is_authenticated() {
            spawn_local(async move {
                if let Ok(user) = api::fetch_profile().await {
                    log::debug!("session restored for {}", user.username);
                }
            });
        }
    });

    children()
}

/// Hook to access the session context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
