//! 页面数据加载的公共状态

use flux_panel::UntilResolved;
use flux_panel_shared::protocol::ApiRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::AuthContext;

/// 一次远程加载的状态：数据、加载中、错误消息
pub struct Remote<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for Remote<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Remote<T> {}

impl<T: Send + Sync + 'static> Remote<T> {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// 面板地址解析完成前不发请求，就绪后只发送一次
    pub fn load<R>(self, auth: AuthContext, req: R)
    where
        R: ApiRequest<Response = T> + 'static,
    {
        self.loading.set(true);
        if auth.address_ready.get_untracked() {
            self.fetch(auth, req);
            return;
        }
        let mut pending = UntilResolved::new(req);
        Effect::new(move |_| {
            if let Some(req) = pending.take_when(auth.address_ready.get()) {
                self.fetch(auth, req);
            }
        });
    }

    fn fetch<R>(self, auth: AuthContext, req: R)
    where
        R: ApiRequest<Response = T> + 'static,
    {
        let client = auth.client();
        spawn_local(async move {
            match client.call(&req).await.into_result() {
                Ok(data) => {
                    self.data.set(data);
                    self.error.set(None);
                }
                Err(failure) => self.error.set(Some(failure.msg)),
            }
            // 会话守卫可能已清除会话
            auth.refresh_session();
            self.loading.set(false);
        });
    }
}

/// 执行一次写操作，完成后回调结果
pub fn run_action<R, F>(auth: AuthContext, req: R, done: F)
where
    R: ApiRequest + 'static,
    F: FnOnce(Result<(), String>) + 'static,
{
    let client = auth.client();
    spawn_local(async move {
        let result = client
            .call(&req)
            .await
            .into_result()
            .map(|_| ())
            .map_err(|failure| failure.msg);
        auth.refresh_session();
        done(result);
    });
}

/// 字节数转为可读字符串
pub fn format_bytes(bytes: i64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes.max(0) as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes.max(0))
    } else {
        format!("{:.2} {}", value, UNITS[unit])
    }
}

/// 列表区域的加载/错误提示
#[component]
pub fn RemoteStatus(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div class="text-center py-6 text-base-content/50">
                <span class="loading loading-spinner loading-md"></span> " 加载中..."
            </div>
        </Show>
        <Show when=move || error.get().is_some()>
            <div role="alert" class="alert alert-error text-sm py-2 my-2">
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
