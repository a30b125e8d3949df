use flux_panel::auth::{Credentials, LoginOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::web::router::use_router;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (captcha_id, set_captcha_id) = signal(String::new());
    let (captcha_required, set_captcha_required) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let mut creds = Credentials::new(username.get(), password.get());
        let captcha = captcha_id.get();
        if !captcha.trim().is_empty() {
            creds = creds.with_captcha(captcha.trim());
        }
        if let Err(msg) = creds.validate() {
            set_error_msg.set(Some(msg));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            match auth.login(creds).await {
                LoginOutcome::Success { destination, .. } => router.navigate(destination),
                LoginOutcome::CaptchaRequired => {
                    set_captcha_required.set(true);
                    set_error_msg.set(Some("请先完成验证码验证".to_string()));
                }
                LoginOutcome::Rejected(msg) => set_error_msg.set(Some(msg)),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Flux Panel"</h1>
                    <p class="text-base-content/70">"请输入账号密码登录"</p>
                </div>

                <Show when=move || !auth.address_ready.get()>
                    <div role="alert" class="alert alert-info text-sm py-2">
                        <span class="loading loading-spinner loading-sm"></span>
                        <span>"正在获取面板地址..."</span>
                    </div>
                </Show>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"用户名"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                autocomplete="username"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete="current-password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>
                        // 验证码组件由外部提供，完成后把 id 填入此处
                        <Show when=move || captcha_required.get()>
                            <div class="form-control">
                                <label class="label" for="captcha">
                                    <span class="label-text">"验证码 ID"</span>
                                </label>
                                <input
                                    id="captcha"
                                    type="text"
                                    on:input=move |ev| set_captcha_id.set(event_target_value(&ev))
                                    prop:value=captcha_id
                                    class="input input-bordered"
                                />
                            </div>
                        </Show>
                        <div class="form-control mt-6">
                            <button
                                class="btn btn-primary"
                                disabled=move || is_submitting.get() || !auth.address_ready.get()
                            >
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "登录中..." }.into_any()
                                } else {
                                    "登录".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
