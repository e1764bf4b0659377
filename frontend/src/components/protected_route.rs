//! 路由守卫组件
//!
//! 包裹任意受保护视图：会话初始化期间渲染加载占位，
//! 之后已认证则渲染内容，未认证则重定向到 403 页。

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::auth::use_auth;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let children = StoredValue::new(children);
    let location = use_location();
    let is_ready = move || !auth.state.get().is_loading;
    let is_authenticated = move || auth.state.get().is_authenticated;

    view! {
        <Show
            when=is_ready
            fallback=|| {
                view! {
                    <div class="flex items-center justify-center min-h-[50vh]">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            }
        >
            <Show
                when=is_authenticated
                fallback=move || {
                    web_sys::console::log_1(
                        &"[Guard] Access denied. Redirecting to /403.".into(),
                    );
                    // 带上来源路径，登录成功后可以回跳
                    let denied_path = location.pathname.get_untracked();
                    let target = format!("/403?from={}", urlencoding::encode(&denied_path));
                    view! { <Redirect path=target /> }
                }
            >
                {children.with_value(|children| children())}
            </Show>
        </Show>
    }
}
