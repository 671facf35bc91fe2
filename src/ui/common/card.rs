use leptos::prelude::*;

/// Frosted-glass panel used for every card in the app
#[component]
pub fn GlassCard(
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!(
            "glass-card rounded-2xl border border-white/20 bg-white/40 backdrop-blur-xl shadow-xl p-6 {}",
            class,
        )>
            {children()}
        </div>
    }
}
