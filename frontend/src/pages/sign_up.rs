//! 注册页
//!
//! 校验规则与服务端一致的最小子集：字段长度、邮箱形状、
//! 两次密码一致。提交的字段在认证层做规范化。

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use mobileshop_shared::RegisterRequest;

use crate::api::use_api;
use crate::auth::{self, use_auth};
use crate::components::icons::User;

/// 邮箱形状检查：非空的本地部分和域名部分，域名带点
fn valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

struct SignUpForm {
    name: String,
    username: String,
    email: String,
    password: String,
    confirm: String,
}

impl SignUpForm {
    /// 返回首个校验错误
    fn validate(&self) -> Option<&'static str> {
        if self.name.trim().len() < 2 {
            return Some("Name must be at least 2 characters");
        }
        if self.username.trim().len() < 3 {
            return Some("Username must be at least 3 characters");
        }
        if !valid_email(self.email.trim()) {
            return Some("Please enter a valid email address");
        }
        if self.password.len() < 6 {
            return Some("Password must be at least 6 characters");
        }
        if self.password != self.confirm {
            return Some("Passwords do not match");
        }
        None
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let api = use_api();
    let ctx = use_auth();
    let navigate = use_navigate();

    // 已认证的访问者直接送回首页
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            let state = ctx.state.get();
            if !state.is_loading && state.is_authenticated {
                navigate("/", Default::default());
            }
        }
    });

    let (name, set_name) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let form = SignUpForm {
            name: name.get_untracked(),
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm: confirm.get_untracked(),
        };
        if let Some(message) = form.validate() {
            set_error.set(Some(message.to_string()));
            return;
        }

        set_error.set(None);
        set_submitting.set(true);

        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let details = RegisterRequest {
                name: form.name,
                username: form.username,
                email: form.email,
                password: form.password,
            };
            match auth::register(&ctx, &api, &details).await {
                Ok(()) => {
                    navigate(
                        "/",
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
                            <User class="h-6 w-6" />
                        </div>
                        <h1 class="text-2xl font-bold">"Create Account"</h1>
                        <p class="text-sm text-base-content/60">
                            "Join MobileShop and start shopping"
                        </p>
                    </div>

                    <Show when=move || error.get().is_some()>
                        <div class="alert alert-error text-sm">
                            <span>{move || error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <form class="space-y-4" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Full Name"</span></label>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                placeholder="Enter your full name"
                                prop:value=name
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"Username"</span></label>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                placeholder="Choose a username"
                                prop:value=username
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"Email"</span></label>
                            <input
                                type="email"
                                class="input input-bordered w-full"
                                placeholder="you@example.com"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"Password"</span></label>
                            <input
                                type="password"
                                class="input input-bordered w-full"
                                placeholder="At least 6 characters"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Confirm Password"</span>
                            </label>
                            <input
                                type="password"
                                class="input input-bordered w-full"
                                placeholder="Repeat your password"
                                prop:value=confirm
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                            />
                        </div>

                        <button type="submit" class="btn btn-primary w-full" disabled=submitting>
                            <Show when=move || submitting.get() fallback=|| "Create Account">
                                <span class="loading loading-spinner loading-sm"></span>
                                "Creating account..."
                            </Show>
                        </button>
                    </form>

                    <p class="text-sm text-center text-base-content/60">
                        "Already have an account? "
                        <A href="/sign-in" attr:class="link link-primary">"Sign in"</A>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_is_checked() {
        assert!(valid_email("user@example.com"));
        assert!(valid_email("a.b+c@sub.domain.io"));
        assert!(!valid_email("plainaddress"));
        assert!(!valid_email("@missing-local.com"));
        assert!(!valid_email("user@nodot"));
        assert!(!valid_email("user@.leading.dot"));
        assert!(!valid_email("user name@example.com"));
    }

    #[test]
    fn first_validation_error_wins() {
        let form = SignUpForm {
            name: "a".into(),
            username: "x".into(),
            email: "bad".into(),
            password: "123".into(),
            confirm: "456".into(),
        };
        assert_eq!(form.validate(), Some("Name must be at least 2 characters"));

        let form = SignUpForm {
            name: "Ada Lovelace".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            password: "secret1".into(),
            confirm: "secret2".into(),
        };
        assert_eq!(form.validate(), Some("Passwords do not match"));

        let form = SignUpForm {
            confirm: "secret1".into(),
            ..form
        };
        assert_eq!(form.validate(), None);
    }
}
