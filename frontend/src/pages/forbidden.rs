//! 403 页
//!
//! 路由守卫拒绝访问后的落点，引导用户登录或回首页。
//! 守卫带来的 `from` 参数原样转交登录页，登录成功后回跳。

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::components::icons::{Home, Lock};

#[component]
pub fn ForbiddenPage() -> impl IntoView {
    let query = use_query_map();
    let sign_in_href = move || match query.get().get("from") {
        Some(from) => format!("{}?from={}", crate::SIGN_IN_PATH, urlencoding::encode(&from)),
        None => crate::SIGN_IN_PATH.to_string(),
    };

    view! {
        <div class="max-w-xl mx-auto px-4 py-24 text-center space-y-6">
            <div class="flex justify-center">
                <div class="bg-error/10 text-error rounded-full p-6">
                    <Lock class="h-12 w-12" />
                </div>
            </div>

            <h1 class="text-5xl font-extrabold">"403"</h1>
            <h2 class="text-2xl font-bold">"Access Denied"</h2>
            <p class="text-base-content/60">
                "You need to sign in before you can access this page."
            </p>

            <div class="flex items-center justify-center gap-3">
                <A href=sign_in_href attr:class="btn btn-primary gap-2">
                    <Lock class="h-4 w-4" />
                    "Sign In"
                </A>
                <A href="/" attr:class="btn btn-ghost gap-2">
                    <Home class="h-4 w-4" />
                    "Back to Home"
                </A>
            </div>
        </div>
    }
}
