//! 应用外壳：顶部导航与页脚
//!
//! 导航右侧按认证状态切换：已认证显示购物车入口与用户菜单，
//! 未认证显示登录/注册按钮。

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::api::use_api;
use crate::auth::{logout, use_auth};
use crate::components::footer::Footer;
use crate::components::icons::{ChevronDown, LogOut, ShoppingCart, Storefront, User as UserIcon};

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = move || auth.state.get().is_authenticated;

    // 路由切换后回到页面顶部
    let location = use_location();
    Effect::new(move |_| {
        let _ = location.pathname.get();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        <div class="min-h-screen flex flex-col bg-base-200">
            <header class="navbar bg-base-100 shadow-md sticky top-0 z-40 px-4">
                <div class="flex-1">
                    <A href="/" attr:class="btn btn-ghost text-xl gap-2 text-primary">
                        <Storefront class="h-7 w-7" />
                        "MobileShop"
                    </A>
                </div>
                <div class="flex-none gap-2">
                    <Show
                        when=is_authenticated
                        fallback=|| {
                            view! {
                                <A href="/sign-in" attr:class="btn btn-ghost btn-sm">
                                    "Sign In"
                                </A>
                                <A href="/sign-up" attr:class="btn btn-primary btn-sm">
                                    "Sign Up"
                                </A>
                            }
                        }
                    >
                        <A
                            href="/checkout"
                            attr:class="btn btn-ghost btn-circle"
                            attr:aria-label="Shopping Cart"
                        >
                            <ShoppingCart class="h-5 w-5" />
                        </A>
                        <UserMenu />
                    </Show>
                </div>
            </header>

            <main class="flex-1">{children()}</main>

            <Footer />
        </div>
    }
}

/// 已认证用户的下拉菜单
#[component]
fn UserMenu() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let navigate = use_navigate();

    let display_name = move || {
        auth.state
            .get()
            .user
            .map(|u| u.name)
            .unwrap_or_else(|| "Account".to_string())
    };
    let initial = move || {
        display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        let navigate = navigate.clone();
        let api = api.clone();
        spawn_local(async move {
            logout(&auth, &api).await;
            navigate("/", Default::default());
        });
    };

    view! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost gap-2">
                <div class="avatar placeholder">
                    <div class="bg-primary text-primary-content rounded-full w-8">
                        <span>{initial}</span>
                    </div>
                </div>
                <span class="hidden md:inline text-sm font-medium">{display_name}</span>
                <ChevronDown class="h-3 w-3" />
            </div>
            <ul
                tabindex="0"
                class="dropdown-content z-[1] menu p-2 shadow bg-base-100 rounded-box w-48"
            >
                <li>
                    <a>
                        <UserIcon class="h-4 w-4" />
                        "Profile"
                    </a>
                </li>
                <li>
                    <a on:click=on_logout>
                        <LogOut class="h-4 w-4" />
                        "Logout"
                    </a>
                </li>
            </ul>
        </div>
    }
}
