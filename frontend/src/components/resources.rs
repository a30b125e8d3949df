//! 资源列表页：转发、隧道、节点、限速、用户
//!
//! 只提供列表与基础操作，表单编辑由外部页面组件负责。

use flux_panel::prefs::ForwardViewMode;
use flux_panel_shared::protocol::{
    DeleteForwardRequest, DeleteNodeRequest, DeleteSpeedLimitRequest, DeleteTunnelRequest,
    DeleteUserRequest, IdTarget, ListForwardsRequest, ListNodesRequest, ListSpeedLimitsRequest,
    ListTunnelsRequest, ListUsersRequest, PauseForwardRequest, ResumeForwardRequest,
};
use flux_panel_shared::{Forward, Node, SpeedLimit, Tunnel, User};
use leptos::prelude::*;

use crate::auth::{AuthContext, use_auth};
use crate::components::remote::{Remote, RemoteStatus, format_bytes, run_action};

/// 写操作完成后刷新列表并提示
fn after_action<T, F>(
    auth: AuthContext,
    list: Remote<T>,
    set_toast: WriteSignal<Option<String>>,
    reload: F,
) -> impl FnOnce(Result<(), String>) + 'static
where
    T: Send + Sync + 'static,
    F: FnOnce(AuthContext, Remote<T>) + 'static,
{
    move |result| match result {
        Ok(()) => {
            set_toast.set(Some("操作成功".to_string()));
            reload(auth, list);
        }
        Err(msg) => set_toast.set(Some(msg)),
    }
}

#[component]
fn Toast(toast: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || toast.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class="alert shadow-lg">
                    <span>{move || toast.get().unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}

fn status_badge(status: i32, on: &'static str, off: &'static str) -> impl IntoView {
    let (class, text) = if status == 1 {
        ("badge badge-success", on)
    } else {
        ("badge badge-ghost", off)
    };
    view! { <span class=class>{text}</span> }
}

// =========================================================
// 转发
// =========================================================

fn load_forwards(auth: AuthContext, list: Remote<Vec<Forward>>) {
    list.load(auth, ListForwardsRequest::default());
}

#[component]
pub fn ForwardPage() -> impl IntoView {
    let auth = use_auth();
    let list = Remote::<Vec<Forward>>::new();
    let (toast, set_toast) = signal(Option::<String>::None);
    let (mode, set_mode) = signal(auth.prefs().forward_view_mode());

    load_forwards(auth, list);

    let toggle_mode = move |_| {
        let next = match mode.get_untracked() {
            ForwardViewMode::List => ForwardViewMode::Card,
            ForwardViewMode::Card => ForwardViewMode::List,
        };
        auth.prefs().set_forward_view_mode(next);
        set_mode.set(next);
    };

    let toggle_pause = move |forward: Forward| {
        let target = IdTarget { id: forward.id };
        let done = after_action(auth, list, set_toast, load_forwards);
        if forward.status == 1 {
            run_action(auth, PauseForwardRequest(target), done);
        } else {
            run_action(auth, ResumeForwardRequest(target), done);
        }
    };
    let delete = move |id: i64| {
        let done = after_action(auth, list, set_toast, load_forwards);
        run_action(auth, DeleteForwardRequest(IdTarget { id }), done);
    };

    let forwards = move || list.data.get().unwrap_or_default();

    view! {
        <Toast toast=toast />
        <div class="flex justify-end mb-2">
            <button class="btn btn-sm" on:click=toggle_mode>
                {move || match mode.get() {
                    ForwardViewMode::List => "卡片视图",
                    ForwardViewMode::Card => "列表视图",
                }}
            </button>
        </div>
        <RemoteStatus loading=list.loading error=list.error />
        <Show
            when=move || mode.get() == ForwardViewMode::Card
            fallback=move || view! {
                <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"名称"</th>
                                <th>"隧道"</th>
                                <th class="hidden md:table-cell">"入口端口"</th>
                                <th class="hidden md:table-cell">"目标地址"</th>
                                <th>"流量"</th>
                                <th>"状态"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=forwards
                                key=|f| f.id
                                children=move |f| {
                                    let id = f.id;
                                    let row = f.clone();
                                    view! {
                                        <tr>
                                            <td>{f.name.clone()}</td>
                                            <td>{f.tunnel_name.clone().unwrap_or_default()}</td>
                                            <td class="hidden md:table-cell">{f.in_port.map(|p| p.to_string()).unwrap_or_default()}</td>
                                            <td class="hidden md:table-cell font-mono text-xs">{f.remote_addr.clone()}</td>
                                            <td>{format_bytes(f.in_flow + f.out_flow)}</td>
                                            <td>{status_badge(f.status, "运行中", "已暂停")}</td>
                                            <td class="flex gap-1">
                                                <button class="btn btn-xs" on:click=move |_| toggle_pause(row.clone())>
                                                    {if f.status == 1 { "暂停" } else { "恢复" }}
                                                </button>
                                                <button class="btn btn-xs btn-error" on:click=move |_| delete(id)>"删除"</button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            }
        >
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-3">
                <For
                    each=forwards
                    key=|f| f.id
                    children=move |f| {
                        let id = f.id;
                        let row = f.clone();
                        view! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body p-4">
                                    <h3 class="card-title text-base">{f.name.clone()} {status_badge(f.status, "运行中", "已暂停")}</h3>
                                    <p class="text-sm opacity-70">{f.tunnel_name.clone().unwrap_or_default()}</p>
                                    <p class="font-mono text-xs break-all">{f.remote_addr.clone()}</p>
                                    <p class="text-sm">{format_bytes(f.in_flow + f.out_flow)}</p>
                                    <div class="card-actions justify-end">
                                        <button class="btn btn-xs" on:click=move |_| toggle_pause(row.clone())>
                                            {if f.status == 1 { "暂停" } else { "恢复" }}
                                        </button>
                                        <button class="btn btn-xs btn-error" on:click=move |_| delete(id)>"删除"</button>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}

// =========================================================
// 隧道
// =========================================================

fn load_tunnels(auth: AuthContext, list: Remote<Vec<Tunnel>>) {
    list.load(auth, ListTunnelsRequest::default());
}

#[component]
pub fn TunnelPage() -> impl IntoView {
    let auth = use_auth();
    let list = Remote::<Vec<Tunnel>>::new();
    let (toast, set_toast) = signal(Option::<String>::None);

    load_tunnels(auth, list);

    let delete = move |id: i64| {
        let done = after_action(auth, list, set_toast, load_tunnels);
        run_action(auth, DeleteTunnelRequest(IdTarget { id }), done);
    };

    view! {
        <Toast toast=toast />
        <RemoteStatus loading=list.loading error=list.error />
        <div class="overflow-x-auto bg-base-100 rounded-box shadow">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"名称"</th>
                        <th>"类型"</th>
                        <th class="hidden md:table-cell">"协议"</th>
                        <th class="hidden md:table-cell">"倍率"</th>
                        <th>"状态"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.data.get().unwrap_or_default()
                        key=|t| t.id
                        children=move |t| {
                            let id = t.id;
                            view! {
                                <tr>
                                    <td>{t.name.clone()}</td>
                                    <td>{if t.tunnel_type == 1 { "端口转发" } else { "隧道转发" }}</td>
                                    <td class="hidden md:table-cell">{t.protocol.clone().unwrap_or_default()}</td>
                                    <td class="hidden md:table-cell">{format!("{:.1}x", t.traffic_ratio)}</td>
                                    <td>{status_badge(t.status, "启用", "停用")}</td>
                                    <td>
                                        <button class="btn btn-xs btn-error" on:click=move |_| delete(id)>"删除"</button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

// =========================================================
// 节点
// =========================================================

fn load_nodes(auth: AuthContext, list: Remote<Vec<Node>>) {
    list.load(auth, ListNodesRequest::default());
}

#[component]
pub fn NodePage() -> impl IntoView {
    let auth = use_auth();
    let list = Remote::<Vec<Node>>::new();
    let (toast, set_toast) = signal(Option::<String>::None);

    load_nodes(auth, list);

    let delete = move |id: i64| {
        let done = after_action(auth, list, set_toast, load_nodes);
        run_action(auth, DeleteNodeRequest(IdTarget { id }), done);
    };

    view! {
        <Toast toast=toast />
        <RemoteStatus loading=list.loading error=list.error />
        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-3">
            <For
                each=move || list.data.get().unwrap_or_default()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body p-4">
                                <h3 class="card-title text-base">{n.name.clone()} {status_badge(n.status, "在线", "离线")}</h3>
                                <p class="font-mono text-xs">{n.ip.clone()}</p>
                                <p class="text-sm opacity-70">{format!("端口 {}-{}", n.port_sta, n.port_end)}</p>
                                <p class="text-xs opacity-50">{n.version.clone().unwrap_or_default()}</p>
                                <div class="card-actions justify-end">
                                    <button class="btn btn-xs btn-error" on:click=move |_| delete(id)>"删除"</button>
                                </div>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

// =========================================================
// 限速
// =========================================================

fn load_limits(auth: AuthContext, list: Remote<Vec<SpeedLimit>>) {
    list.load(auth, ListSpeedLimitsRequest::default());
}

#[component]
pub fn LimitPage() -> impl IntoView {
    let auth = use_auth();
    let list = Remote::<Vec<SpeedLimit>>::new();
    let (toast, set_toast) = signal(Option::<String>::None);

    load_limits(auth, list);

    let delete = move |id: i64| {
        let done = after_action(auth, list, set_toast, load_limits);
        run_action(auth, DeleteSpeedLimitRequest(IdTarget { id }), done);
    };

    view! {
        <Toast toast=toast />
        <RemoteStatus loading=list.loading error=list.error />
        <div class="overflow-x-auto bg-base-100 rounded-box shadow">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"名称"</th>
                        <th>"速率"</th>
                        <th>"隧道"</th>
                        <th>"状态"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.data.get().unwrap_or_default()
                        key=|l| l.id
                        children=move |l| {
                            let id = l.id;
                            view! {
                                <tr>
                                    <td>{l.name.clone()}</td>
                                    <td>{format!("{} Mbps", l.speed)}</td>
                                    <td>{l.tunnel_name.clone().unwrap_or_default()}</td>
                                    <td>{status_badge(l.status, "启用", "停用")}</td>
                                    <td>
                                        <button class="btn btn-xs btn-error" on:click=move |_| delete(id)>"删除"</button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

// =========================================================
// 用户
// =========================================================

fn load_users(auth: AuthContext, list: Remote<Vec<User>>) {
    list.load(auth, ListUsersRequest::default());
}

#[component]
pub fn UserPage() -> impl IntoView {
    let auth = use_auth();
    let list = Remote::<Vec<User>>::new();
    let (toast, set_toast) = signal(Option::<String>::None);

    load_users(auth, list);

    let delete = move |id: i64| {
        let done = after_action(auth, list, set_toast, load_users);
        run_action(auth, DeleteUserRequest(IdTarget { id }), done);
    };

    view! {
        <Toast toast=toast />
        <RemoteStatus loading=list.loading error=list.error />
        <div class="overflow-x-auto bg-base-100 rounded-box shadow">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"账号"</th>
                        <th class="hidden md:table-cell">"已用 / 配额"</th>
                        <th class="hidden md:table-cell">"到期"</th>
                        <th>"状态"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.data.get().unwrap_or_default()
                        key=|u| u.id
                        children=move |u| {
                            let id = u.id;
                            view! {
                                <tr>
                                    <td>{u.user.clone()}</td>
                                    <td class="hidden md:table-cell">
                                        {format!("{} / {} GB", format_bytes(u.in_flow + u.out_flow), u.flow)}
                                    </td>
                                    <td class="hidden md:table-cell">
                                        {u.exp_time.map(|t| t.format_local()).unwrap_or_else(|| "永久".to_string())}
                                    </td>
                                    <td>{status_badge(u.status, "正常", "禁用")}</td>
                                    <td>
                                        <button class="btn btn-xs btn-error" on:click=move |_| delete(id)>"删除"</button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
