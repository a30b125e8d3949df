use flux_panel_shared::ConfigItem;
use flux_panel_shared::protocol::{ListConfigsRequest, UpdateConfigsRequest};
use leptos::prelude::*;

use crate::auth::use_auth;
use crate::components::remote::{Remote, RemoteStatus, run_action};

/// 网站配置：逐项编辑后整体提交
#[component]
pub fn ConfigPage() -> impl IntoView {
    let auth = use_auth();
    let remote = Remote::<Vec<ConfigItem>>::new();
    let items = RwSignal::new(Vec::<ConfigItem>::new());
    let (saving, set_saving) = signal(false);
    let (message, set_message) = signal(Option::<String>::None);

    remote.load(auth, ListConfigsRequest::default());

    Effect::new(move |_| {
        if let Some(loaded) = remote.data.get() {
            items.set(loaded);
        }
    });

    let on_save = move |_| {
        let configs = items.get_untracked();
        set_saving.set(true);
        let cached = configs.clone();
        run_action(auth, UpdateConfigsRequest { configs }, move |result| {
            match result {
                Ok(()) => {
                    auth.prefs().cache_site_config(&cached);
                    set_message.set(Some("保存成功".to_string()));
                }
                Err(msg) => set_message.set(Some(msg)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <RemoteStatus loading=remote.loading error=remote.error />
        <Show when=move || message.get().is_some()>
            <div role="alert" class="alert text-sm py-2 mb-2">
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <For
                    each=move || items.get().into_iter().enumerate().collect::<Vec<_>>()
                    key=|(i, item)| (*i, item.name.clone())
                    children=move |(index, item)| {
                        view! {
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text font-mono">{item.name.clone()}</span>
                                </label>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    prop:value=item.value.clone()
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        items.update(|list| {
                                            if let Some(entry) = list.get_mut(index) {
                                                entry.value = value;
                                            }
                                        });
                                    }
                                />
                            </div>
                        }
                    }
                />
                <div class="card-actions justify-end mt-4">
                    <button class="btn btn-primary" on:click=on_save disabled=move || saving.get()>
                        "保存"
                    </button>
                </div>
            </div>
        </div>
    }
}
