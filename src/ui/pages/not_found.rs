//! Not found page component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::common::GlassCard;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen auth-backdrop flex items-center justify-center p-4">
            <div class="w-full max-w-md">
                <GlassCard class="text-center">
                    <div class="flex items-center justify-center mb-4">
                        <Icon name=icons::WAVES class="w-12 h-12 text-blue-600"/>
                    </div>
                    <h1 class="text-6xl font-bold text-gray-800 mb-4">"404"</h1>
                    <p class="text-gray-600 mb-8">
                        "The page you're looking for doesn't exist or has been moved."
                    </p>
                    <A href="/" attr:class="btn-base btn-primary">"Back to sign in"</A>
                </GlassCard>
            </div>
        </div>
    }
}
