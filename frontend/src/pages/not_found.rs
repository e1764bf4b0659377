//! 404 页

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::icons::Home;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="max-w-xl mx-auto px-4 py-24 text-center space-y-6">
            <h1 class="text-6xl font-extrabold text-primary">"404"</h1>
            <h2 class="text-2xl font-bold">"Page Not Found"</h2>
            <p class="text-base-content/60">
                "The page you are looking for doesn't exist or has been moved."
            </p>
            <A href="/" attr:class="btn btn-primary gap-2">
                <Home class="h-4 w-4" />
                "Back to Home"
            </A>
        </div>
    }
}
