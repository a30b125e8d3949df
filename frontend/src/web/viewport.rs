//! 视口信号
//!
//! 读取窗口宽度、User-Agent 与查询串，窗口尺寸变化时更新。

use flux_panel::device::Viewport;
use leptos::ev;
use leptos::prelude::*;

/// 当前视口快照
pub fn read_viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::default();
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0) as u32;
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let query = window.location().search().unwrap_or_default();
    Viewport::new(width, user_agent, query)
}

/// 创建随 resize 更新的视口信号，监听器随当前 owner 一起释放
pub fn use_viewport() -> RwSignal<Viewport> {
    let viewport = RwSignal::new(read_viewport());

    let handle = window_event_listener(ev::resize, move |_| {
        let next = read_viewport();
        if viewport.with_untracked(|current| *current != next) {
            viewport.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    viewport
}
