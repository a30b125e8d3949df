//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 访问判定交给核心库的 [`decide`]，这里只负责执行导航与渲染外壳。

use flux_panel::access::{LayoutShell, RedirectLatch, Render, decide};
use flux_panel::guard::Navigator;
use flux_panel::route::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;

use crate::auth::use_auth;
use crate::components::layout::Shell;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 整页跳转的浏览器导航，供会话守卫使用
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        current_path()
    }

    fn hard_redirect(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
}

/// 路由器服务
///
/// 只维护当前路由信号；是否放行在渲染时由 [`decide`] 判定。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: RwSignal<AppRoute>,
}

impl RouterService {
    fn new() -> Self {
        Self {
            current_route: RwSignal::new(AppRoute::from_path(&current_path())),
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route.read_only()
    }

    /// 用户主动导航，写入历史记录
    pub fn navigate(&self, route: AppRoute) {
        push_history_state(route.to_path());
        self.current_route.set(route);
    }

    /// 守卫重定向，替换当前历史记录
    pub fn redirect(&self, route: AppRoute) {
        flux_panel::log_info!(
            "[Router] Redirecting {} -> {}",
            self.current_route.get_untracked(),
            route
        );
        replace_history_state(route.to_path());
        self.current_route.set(route);
    }

    /// 浏览器后退/前进
    fn init_popstate_listener(&self) {
        let current_route = self.current_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            current_route.set(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(children: Children) -> impl IntoView {
    provide_router();
    children()
}

/// 路由出口组件
///
/// 会话、路由或视口变化时重新判定；重定向时渲染占位，并在下一个任务中导航一次。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回页面视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();
    let auth = use_auth();
    let latch = StoredValue::new_local(RedirectLatch::new());

    move || {
        let route = router.current_route().get();
        let viewport = auth.viewport.get();
        // 登录/注销后重新判定
        auth.session.track();

        let token = auth.token();
        let decision = decide(
            token.as_deref(),
            route,
            &viewport,
            auth.mobile_breakpoint,
        );

        let rendered = latch.with_value(|latch| {
            latch.render(decision, |target| {
                spawn_local(async move { router.redirect(target) });
            })
        });

        match rendered {
            Render::Page(LayoutShell::Bare) => matcher(route),
            Render::Page(shell) => view! { <Shell shell=shell route=route>{matcher(route)}</Shell> }
                .into_any(),
            Render::Placeholder => view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
            .into_any(),
        }
    }
}
