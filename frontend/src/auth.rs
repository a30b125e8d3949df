//! 应用上下文
//!
//! 在 App 根部构造一次 `ApiClient` 并通过 Context 共享。
//! 会话本身存放在 localStorage，这里的信号只用于在登录/注销后触发重新渲染。

use flux_panel::auth::{self as flows, Credentials, LoginOutcome};
use flux_panel::device::Viewport;
use flux_panel::prefs::Preferences;
use flux_panel::route::AppRoute;
use flux_panel::session::Session;
use flux_panel::{ApiClient, PanelConfig};
use flux_panel_shared::protocol::UpdatePasswordRequest;
use leptos::prelude::*;

use crate::web::FetchClient;

pub type Client = ApiClient<FetchClient>;

#[derive(Clone, Copy)]
pub struct AuthContext {
    client: StoredValue<Client, LocalStorage>,
    prefs: StoredValue<Preferences, LocalStorage>,
    /// 当前会话快照
    pub session: RwSignal<Option<Session>>,
    pub viewport: RwSignal<Viewport>,
    /// 面板地址解析是否已结束（无论成功与否）
    pub address_ready: RwSignal<bool>,
    pub mobile_breakpoint: u32,
}

impl AuthContext {
    pub fn new(
        client: Client,
        prefs: Preferences,
        viewport: RwSignal<Viewport>,
        config: &PanelConfig,
    ) -> Self {
        let session = RwSignal::new(client.session().load());
        Self {
            client: StoredValue::new_local(client),
            prefs: StoredValue::new_local(prefs),
            session,
            viewport,
            address_ready: RwSignal::new(false),
            mobile_breakpoint: config.mobile_breakpoint,
        }
    }

    pub fn client(&self) -> Client {
        self.client.get_value()
    }

    pub fn prefs(&self) -> Preferences {
        self.prefs.get_value()
    }

    /// 直接读取持久化的令牌，不经过信号
    pub fn token(&self) -> Option<String> {
        self.client.with_value(|c| c.session().token())
    }

    pub fn is_admin(&self) -> bool {
        self.session
            .with(|s| s.as_ref().is_some_and(Session::is_admin))
    }

    /// 重新从存储加载会话，会话守卫清除后由页面调用
    pub fn refresh_session(&self) {
        let loaded = self.client.with_value(|c| c.session().load());
        self.session.set(loaded);
    }

    pub async fn login(&self, creds: Credentials) -> LoginOutcome {
        let client = self.client();
        let outcome = flows::login(&client, creds).await;
        if let LoginOutcome::Success { session, .. } = &outcome {
            self.session.set(Some(session.clone()));
        }
        outcome
    }

    pub fn logout(&self) -> AppRoute {
        let target = flows::logout(&self.client());
        self.session.set(None);
        target
    }

    pub async fn change_password(&self, req: UpdatePasswordRequest) -> Result<AppRoute, String> {
        let result = flows::change_password(&self.client(), req).await;
        if result.is_ok() {
            self.session.set(None);
        }
        result
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
