//! 布局外壳
//!
//! - Admin：桌面端侧边菜单
//! - H5：移动端底部标签栏
//! - H5Simple：移动端顶部返回栏

use flux_panel::access::LayoutShell;
use flux_panel::route::AppRoute;
use leptos::prelude::*;

use crate::auth::use_auth;
use crate::web::router::use_router;

const DEFAULT_APP_NAME: &str = "Flux Panel";

fn app_name() -> String {
    use_auth()
        .prefs()
        .cached_site_config()
        .and_then(|config| config.get("app_name").cloned())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
}

#[component]
pub fn Shell(shell: LayoutShell, route: AppRoute, children: Children) -> impl IntoView {
    match shell {
        LayoutShell::Admin => view! { <AdminLayout route=route>{children()}</AdminLayout> }.into_any(),
        LayoutShell::H5 => view! { <H5Layout route=route>{children()}</H5Layout> }.into_any(),
        LayoutShell::H5Simple => {
            view! { <H5SimpleLayout route=route>{children()}</H5SimpleLayout> }.into_any()
        }
        LayoutShell::Bare => children().into_any(),
    }
}

#[component]
fn AdminLayout(route: AppRoute, children: Children) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let menu = AppRoute::menu(auth.is_admin());
    let display_name = move || {
        auth.session
            .with(|s| s.as_ref().map(|s| s.name.clone()).unwrap_or_default())
    };
    let on_logout = move |_| {
        let target = auth.logout();
        router.redirect(target);
    };

    view! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-200">
            <input id="panel-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col">
                <div class="navbar bg-base-100 shadow">
                    <div class="flex-1 gap-2">
                        <label for="panel-drawer" class="btn btn-ghost btn-square lg:hidden">"☰"</label>
                        <span class="text-xl font-bold">{route.title()}</span>
                    </div>
                    <div class="flex-none gap-2">
                        <span class="badge badge-neutral">{display_name}</span>
                        <button on:click=on_logout class="btn btn-outline btn-error btn-sm">"退出登录"</button>
                    </div>
                </div>
                <main class="p-4 md:p-8">{children()}</main>
            </div>
            <div class="drawer-side">
                <label for="panel-drawer" class="drawer-overlay"></label>
                <ul class="menu p-4 w-60 min-h-full bg-base-100">
                    <li class="menu-title">{app_name()}</li>
                    {menu
                        .into_iter()
                        .map(|item| {
                            let class = if item == route { "active" } else { "" };
                            view! {
                                <li>
                                    <a class=class on:click=move |_| router.navigate(item)>
                                        {item.title()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn H5Layout(route: AppRoute, children: Children) -> impl IntoView {
    let router = use_router();

    view! {
        <div class="min-h-screen bg-base-200 pb-16">
            <div class="navbar bg-base-100 shadow justify-center">
                <span class="text-lg font-bold">{route.title()}</span>
            </div>
            <main class="p-3">{children()}</main>
            <div class="btm-nav">
                {AppRoute::tab_bar()
                    .into_iter()
                    .map(|item| {
                        let class = if item == route { "active text-primary" } else { "" };
                        view! {
                            <button class=class on:click=move |_| router.navigate(item)>
                                <span class="btm-nav-label">{item.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn H5SimpleLayout(route: AppRoute, children: Children) -> impl IntoView {
    let router = use_router();

    let on_back = move |_| {
        let went_back = web_sys::window()
            .and_then(|w| w.history().ok())
            .map(|h| h.back().is_ok())
            .unwrap_or(false);
        if !went_back {
            router.navigate(AppRoute::Profile);
        }
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow">
                <div class="flex-none">
                    <button on:click=on_back class="btn btn-ghost btn-sm">"‹ 返回"</button>
                </div>
                <div class="flex-1 justify-center">
                    <span class="text-lg font-bold">{route.title()}</span>
                </div>
                <div class="flex-none w-16"></div>
            </div>
            <main class="p-3">{children()}</main>
        </div>
    }
}
