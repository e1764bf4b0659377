//! MobileShop 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `api`: API 客户端（附带 Bearer 头与 401 全局拦截）
//! - `auth`: 认证状态管理（从 LocalStorage 乐观水合）
//! - `session`: 令牌与用户记录的持久化
//! - `components` / `pages`: UI 组件层
//!
//! 所有数据操作都是对外部 API 的直接透传，这里只负责界面状态。

pub mod api;
pub mod auth;
mod debounce;
mod session;

mod components {
    pub mod footer;
    pub mod hero;
    pub mod icons;
    pub mod layout;
    pub mod pagination;
    pub mod product_card;
    pub mod product_filters;
    pub mod protected_route;
}

mod pages {
    pub mod checkout;
    pub mod forbidden;
    pub mod home;
    pub mod not_found;
    pub mod sign_in;
    pub mod sign_up;
}

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::api::ShopApi;
use crate::auth::{AuthContext, init_auth};
use crate::components::layout::AppLayout;
use crate::components::protected_route::RequireAuth;
use crate::pages::checkout::CheckoutPage;
use crate::pages::forbidden::ForbiddenPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::sign_in::SignInPage;
use crate::pages::sign_up::SignUpPage;

/// 401 与路由守卫共用的登录入口
pub const SIGN_IN_PATH: &str = "/sign-in";

#[component]
pub fn App() -> impl IntoView {
    // 1. API 客户端与认证上下文，通过 Context 在组件间共享
    provide_context(ShopApi::new());

    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 从 LocalStorage 水合会话（有令牌即视为已认证，不复验）
    init_auth(&auth_ctx);

    view! {
        <Router>
            <AppLayout>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/sign-in") view=SignInPage />
                    <Route path=path!("/sign-up") view=SignUpPage />
                    <Route
                        path=path!("/checkout")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <CheckoutPage />
                                </RequireAuth>
                            }
                        }
                    />
                    <Route path=path!("/403") view=ForbiddenPage />
                </Routes>
            </AppLayout>
        </Router>
    }
}
