use leptos::*;

pub mod access_denied;
pub mod panel;

pub use access_denied::AccessDenied;
pub use panel::AdminPanel;

use crate::{api::AdminSession, state::session::AdminView};

/// Admin screen for a session that may or may not carry the admin role.
#[component]
pub fn AdminPage(current: AdminView) -> impl IntoView {
    view! { <AdminPanel current=current /> }
}

#[component]
pub fn AccessDeniedPage(session: AdminSession) -> impl IntoView {
    view! { <AccessDenied session=session /> }
}
