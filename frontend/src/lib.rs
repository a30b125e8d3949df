//! Flux Panel 前端应用
//!
//! Leptos CSR 适配层，核心逻辑全部来自 `flux-panel`：
//! - `web`: 浏览器实现（fetch、localStorage、定时器、WebView 桥接、路由服务）
//! - `auth`: 应用上下文
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod config;
    pub mod dashboard;
    pub mod layout;
    pub mod login;
    pub mod profile;
    pub mod remote;
    pub mod resources;
}
mod serde_helper;

use std::rc::Rc;

use flux_panel::prefs::Preferences;
use flux_panel::resolver::{AddressResolver, BaseUrl};
use flux_panel::route::AppRoute;
use flux_panel::timer::Timer;
use flux_panel::{ApiClient, PanelConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::AuthContext;
use crate::components::config::ConfigPage;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::profile::{ChangePasswordPage, ProfilePage};
use crate::components::resources::{ForwardPage, LimitPage, NodePage, TunnelPage, UserPage};

// 浏览器 API 封装模块
pub(crate) mod web {
    pub mod bridge;
    pub mod http;
    pub mod router;
    pub mod storage;
    pub mod timer;
    pub mod viewport;

    pub use bridge::AndroidBridge;
    pub use http::FetchClient;
    pub use router::BrowserNavigator;
    pub use storage::WebStorage;
    pub use timer::BrowserTimer;
}

use web::router::{Router, RouterOutlet};
use web::{AndroidBridge, BrowserNavigator, BrowserTimer, FetchClient, WebStorage};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的页面组件，外壳由 RouterOutlet 负责。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Forward => view! { <ForwardPage /> }.into_any(),
        AppRoute::Tunnel => view! { <TunnelPage /> }.into_any(),
        AppRoute::Node => view! { <NodePage /> }.into_any(),
        AppRoute::Limit => view! { <LimitPage /> }.into_any(),
        AppRoute::User => view! { <UserPage /> }.into_any(),
        AppRoute::Config => view! { <ConfigPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::ChangePassword => view! { <ChangePasswordPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">{AppRoute::NotFound.title()}</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 组装核心组件，整个应用只构造一次
    let config = PanelConfig::from_build_env();
    let base_url = BaseUrl::default();
    let timer: Rc<dyn Timer> = Rc::new(BrowserTimer);
    let store = Rc::new(WebStorage);

    let client = ApiClient::new(
        Rc::new(FetchClient),
        store.clone(),
        Rc::new(BrowserNavigator),
        timer.clone(),
        base_url.clone(),
        &config,
    );
    let prefs = Preferences::new(store);
    let viewport = web::viewport::use_viewport();

    let auth_ctx = AuthContext::new(client, prefs, viewport, &config);
    provide_context(auth_ctx);

    // 2. 解析面板地址，之后持续接收宿主推送
    let resolver = AddressResolver::new(base_url, config, timer);
    spawn_local(async move {
        let outcome = resolver.resolve(&AndroidBridge).await;
        flux_panel::log_info!("[App] Address resolution: {:?}", outcome);
        auth_ctx.address_ready.set(true);
        resolver.follow_updates().await;
    });

    view! {
        <Router>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
