//! 结算页（占位）
//!
//! 购物车尚未落地，这里只验证受保护路由和结算接口的贯通：
//! 下单按钮调用占位接口并回显服务端消息。

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::icons::{ShoppingCart, Wrench};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let (message, set_message) = signal(Option::<String>::None);
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let greeting = move || {
        auth.state
            .get()
            .user
            .map(|user| format!("Signed in as {}", user.name))
            .unwrap_or_default()
    };

    let on_place_order = move |_| {
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        set_message.set(None);
        set_error.set(None);
        let api = api.clone();
        spawn_local(async move {
            match api.checkout().await {
                Ok(text) => set_message.set(Some(text)),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto px-4 py-16 text-center space-y-6">
            <div class="flex justify-center">
                <div class="bg-warning/10 text-warning rounded-full p-6">
                    <Wrench class="h-12 w-12" />
                </div>
            </div>

            <h1 class="text-3xl font-bold">"Checkout"</h1>
            <p class="text-base-content/60">
                "Checkout is under construction. Cart and payment are on the way; \
                 for now you can place a test order below."
            </p>
            <p class="text-sm text-base-content/40">{greeting}</p>

            <Show when=move || message.get().is_some()>
                <div class="alert alert-success">
                    <span>{move || message.get().unwrap_or_default()}</span>
                </div>
            </Show>
            <Show when=move || error.get().is_some()>
                <div class="alert alert-error">
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="flex items-center justify-center gap-3">
                <button class="btn btn-primary gap-2" disabled=submitting on:click=on_place_order>
                    <ShoppingCart class="h-4 w-4" />
                    <Show when=move || submitting.get() fallback=|| "Place Test Order">
                        "Placing order..."
                    </Show>
                </button>
                <A href="/" attr:class="btn btn-ghost">"Back to Shopping"</A>
            </div>
        </div>
    }
}
