//! 定时器封装模块
//!
//! 使用 `gloo-timers` 的 future 实现核心库的 [`Timer`]。

use flux_panel::timer::Timer;
use futures::future::LocalBoxFuture;
use std::time::Duration;

pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::sleep(duration))
    }
}
