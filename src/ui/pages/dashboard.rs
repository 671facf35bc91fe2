//! Dashboard page component
//!
//! Renders the dashboard for the signed-in user; sends everyone else back
//! to the auth page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::use_auth_context;
use crate::ui::dashboard::Dashboard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth_context();

    Effect::new(move |_| {
        if !auth.is_authenticated() {
            let navigate = use_navigate();
            navigate("/", Default::default());
        }
    });

    let on_logout = Callback::new(move |_: ()| auth.logout());

    view! {
        <div class="min-h-screen auth-backdrop p-4 sm:p-8">
            {move || auth.user().map(|user| view! {
                <Dashboard user=user on_logout=on_logout/>
            })}
        </div>
    }
}
