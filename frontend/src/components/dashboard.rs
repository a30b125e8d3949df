use flux_panel_shared::protocol::{ListConfigsRequest, UserPackageRequest};
use flux_panel_shared::{ConfigItem, UserPackage};
use leptos::prelude::*;

use crate::auth::use_auth;
use crate::components::remote::{Remote, RemoteStatus, format_bytes};

const GB: i64 = 1024 * 1024 * 1024;
const NOTICE_KEY: &str = "notice";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let package = Remote::<UserPackage>::new();
    let configs = Remote::<Vec<ConfigItem>>::new();
    let (notice, set_notice) = signal(Option::<String>::None);

    package.load(auth, UserPackageRequest::default());
    configs.load(auth, ListConfigsRequest::default());

    // 网站配置返回后写入缓存，公告只在内容变化后提示一次
    Effect::new(move |_| {
        let Some(items) = configs.data.get() else {
            return;
        };
        let prefs = auth.prefs();
        prefs.cache_site_config(&items);
        let text = items
            .iter()
            .find(|item| item.name == NOTICE_KEY)
            .map(|item| item.value.trim().to_string())
            .filter(|text| !text.is_empty());
        if let Some(text) = text {
            if prefs.mark_notice_seen(&text) {
                set_notice.set(Some(text));
            }
        }
    });

    let user = move || package.data.get().map(|p| p.user_info).unwrap_or_default();
    let used = move || {
        let u = user();
        format_bytes(u.in_flow + u.out_flow)
    };
    let quota = move || format!("{} GB", user().flow);
    let usage_percent = move || {
        let u = user();
        if u.flow <= 0 {
            0
        } else {
            (((u.in_flow + u.out_flow) * 100) / (u.flow * GB)).clamp(0, 100)
        }
    };
    let expires = move || {
        user()
            .exp_time
            .map(|t| t.format_local())
            .unwrap_or_else(|| "永久".to_string())
    };
    let forward_count = move || {
        package
            .data
            .with(|p| p.as_ref().map(|p| p.forwards.len()).unwrap_or(0))
    };
    let permissions = move || {
        package
            .data
            .get()
            .map(|p| p.tunnel_permissions)
            .unwrap_or_default()
    };

    view! {
        <div class="space-y-6">
            <Show when=move || notice.get().is_some()>
                <div role="alert" class="alert alert-info">
                    <span>{move || notice.get().unwrap_or_default()}</span>
                    <button class="btn btn-sm btn-ghost" on:click=move |_| set_notice.set(None)>"知道了"</button>
                </div>
            </Show>

            <RemoteStatus loading=package.loading error=package.error />

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"已用流量"</div>
                    <div class="stat-value text-primary text-2xl">{used}</div>
                    <div class="stat-desc">"配额 " {quota}</div>
                    <progress class="progress progress-primary w-full mt-2" value=usage_percent max="100"></progress>
                </div>
                <div class="stat">
                    <div class="stat-title">"转发数量"</div>
                    <div class="stat-value text-secondary">{forward_count}</div>
                    <div class="stat-desc">"上限 " {move || user().num}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"到期时间"</div>
                    <div class="stat-value text-2xl">{expires}</div>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <h3 class="card-title p-6 pb-2">"隧道权限"</h3>
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"隧道"</th>
                                    <th>"已用流量"</th>
                                    <th class="hidden md:table-cell">"配额"</th>
                                    <th class="hidden md:table-cell">"到期"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=permissions
                                    key=|p| p.id
                                    children=move |p| {
                                        view! {
                                            <tr>
                                                <td>{p.tunnel_name.clone()}</td>
                                                <td>{format_bytes(p.in_flow + p.out_flow)}</td>
                                                <td class="hidden md:table-cell">{format!("{} GB", p.flow)}</td>
                                                <td class="hidden md:table-cell">
                                                    {p.exp_time.map(|t| t.format_local()).unwrap_or_else(|| "永久".to_string())}
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}
