//! 登录页
//!
//! 客户端先做最小校验，通过后才发起请求。
//! 登录成功跳转到 `from` 查询参数指定的来源页，缺省回首页。

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;
use mobileshop_shared::LoginRequest;

use crate::api::use_api;
use crate::auth::{self, use_auth};
use crate::components::icons::Lock;

/// 提交前的本地校验，返回首个错误
fn validate(username: &str, password: &str) -> Option<&'static str> {
    if username.trim().is_empty() {
        return Some("Username is required");
    }
    if password.len() < 6 {
        return Some("Password must be at least 6 characters");
    }
    None
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let api = use_api();
    let ctx = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    // 已认证的访问者直接送回首页
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            let state = ctx.state.get();
            if !state.is_loading && state.is_authenticated && !submitting.get_untracked() {
                navigate("/", Default::default());
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let username_value = username.get_untracked();
        let password_value = password.get_untracked();
        if let Some(message) = validate(&username_value, &password_value) {
            set_error.set(Some(message.to_string()));
            return;
        }

        set_error.set(None);
        set_submitting.set(true);

        let destination = query
            .get_untracked()
            .get("from")
            .unwrap_or_else(|| "/".to_string());
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let credentials = LoginRequest {
                username: username_value.trim().to_string(),
                password: password_value,
            };
            match auth::login(&ctx, &api, &credentials).await {
                Ok(()) => {
                    navigate(
                        &destination,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(err) => {
                    set_error.set(Some(err.to_string()));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="flex items-center justify-center py-16 px-4">
            <div class="card bg-base-100 shadow-xl w-full max-w-md">
                <div class="card-body space-y-2">
                    <div class="flex flex-col items-center gap-2">
                        <div class="bg-primary/10 text-primary rounded-full p-3">
                            <Lock class="h-6 w-6" />
                        </div>
                        <h1 class="text-2xl font-bold">"Welcome Back"</h1>
                        <p class="text-sm text-base-content/60">
                            "Sign in to your MobileShop account"
                        </p>
                    </div>

                    <Show when=move || error.get().is_some()>
                        <div class="alert alert-error text-sm">
                            <span>{move || error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <form class="space-y-4" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Username"</span></label>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                placeholder="Enter your username"
                                prop:value=username
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"Password"</span></label>
                            <input
                                type="password"
                                class="input input-bordered w-full"
                                placeholder="Enter your password"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>

                        <button type="submit" class="btn btn-primary w-full" disabled=submitting>
                            <Show when=move || submitting.get() fallback=|| "Sign In">
                                <span class="loading loading-spinner loading-sm"></span>
                                "Signing in..."
                            </Show>
                        </button>
                    </form>

                    <p class="text-sm text-center text-base-content/60">
                        "Don't have an account? "
                        <A href="/sign-up" attr:class="link link-primary">"Sign up"</A>
                    </p>
                </div>
            </div>
        </div>
    }
}
