use flux_panel::route::AppRoute;
use flux_panel_shared::protocol::UpdatePasswordRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::web::router::use_router;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let name = move || {
        auth.session
            .with(|s| s.as_ref().map(|s| s.name.clone()).unwrap_or_default())
    };
    let role = move || if auth.is_admin() { "管理员" } else { "普通用户" };

    let on_logout = move |_| {
        let target = auth.logout();
        router.redirect(target);
    };

    view! {
        <div class="card bg-base-100 shadow max-w-lg">
            <div class="card-body">
                <h2 class="card-title">{name}</h2>
                <p class="text-sm opacity-70">{role}</p>
                <ul class="menu bg-base-200 rounded-box mt-4">
                    <Show when=move || auth.is_admin()>
                        {AppRoute::menu(true)
                            .into_iter()
                            .filter(|r| r.admin_only())
                            .map(|r| view! { <li><a on:click=move |_| router.navigate(r)>{r.title()}</a></li> })
                            .collect_view()}
                    </Show>
                    <li>
                        <a on:click=move |_| router.navigate(AppRoute::ChangePassword)>
                            {AppRoute::ChangePassword.title()}
                        </a>
                    </li>
                </ul>
                <div class="card-actions justify-end mt-4">
                    <button class="btn btn-outline btn-error" on:click=on_logout>"退出登录"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (new_username, set_new_username) = signal(String::new());
    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = UpdatePasswordRequest {
            new_username: new_username.get(),
            current_password: current_password.get(),
            new_password: new_password.get(),
            confirm_password: confirm_password.get(),
        };
        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            match auth.change_password(req).await {
                Ok(target) => router.redirect(target),
                Err(msg) => set_error_msg.set(Some(msg)),
            }
            set_is_submitting.set(false);
        });
    };

    let field = move |id: &'static str,
                      label: &'static str,
                      kind: &'static str,
                      value: ReadSignal<String>,
                      set: WriteSignal<String>| {
        view! {
            <div class="form-control">
                <label class="label" for=id>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id=id
                    type=kind
                    class="input input-bordered"
                    prop:value=value
                    on:input=move |ev| set.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-2xl font-bold">{AppRoute::ChangePassword.title()}</h1>
                <p class="text-base-content/70 text-sm">"修改成功后需要重新登录"</p>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        {field("new-username", "新用户名", "text", new_username, set_new_username)}
                        {field("current-password", "当前密码", "password", current_password, set_current_password)}
                        {field("new-password", "新密码", "password", new_password, set_new_password)}
                        {field("confirm-password", "确认新密码", "password", confirm_password, set_confirm_password)}
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                "提交"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
