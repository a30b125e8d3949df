//! WebView 宿主桥接
//!
//! 宿主通过 `window.AndroidInterface.getPanelAddresses(callbackName)` 暴露接口，
//! 之后以 `window[callbackName](addresses)` 推送地址列表，可推送多次。

use flux_panel::error::{PanelError, PanelResult};
use flux_panel::resolver::{AddressSink, HostBridge};
use flux_panel_shared::PanelAddress;
use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::serde_helper::from_js_or_json;
use crate::web::http::js_error_message;

const INTERFACE: &str = "AndroidInterface";
const METHOD: &str = "getPanelAddresses";

fn interface() -> Option<JsValue> {
    let window = web_sys::window()?;
    let iface = Reflect::get(&window, &JsValue::from_str(INTERFACE)).ok()?;
    if iface.is_undefined() || iface.is_null() {
        None
    } else {
        Some(iface)
    }
}

fn method(iface: &JsValue) -> Option<Function> {
    Reflect::get(iface, &JsValue::from_str(METHOD))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

pub struct AndroidBridge;

impl HostBridge for AndroidBridge {
    fn is_available(&self) -> bool {
        interface().as_ref().and_then(method).is_some()
    }

    fn request_addresses(&self, callback_name: &str, sink: AddressSink) -> PanelResult<()> {
        let window = web_sys::window().ok_or_else(|| PanelError::bridge("无法获取 window 对象"))?;
        let iface = interface().ok_or_else(|| PanelError::bridge("宿主接口不存在"))?;
        let get_addresses = method(&iface)
            .ok_or_else(|| PanelError::bridge(format!("宿主接口缺少 {}", METHOD)))?;

        let callback = Closure::<dyn Fn(JsValue)>::new(move |payload: JsValue| {
            match from_js_or_json::<Vec<PanelAddress>>(payload) {
                Ok(addresses) => {
                    if sink.unbounded_send(addresses).is_err() {
                        flux_panel::log_warn!("[Bridge] Address push after resolver dropped");
                    }
                }
                Err(e) => flux_panel::log_warn!("[Bridge] Ignoring malformed address push: {}", e),
            }
        });

        Reflect::set(
            &window,
            &JsValue::from_str(callback_name),
            callback.as_ref().unchecked_ref(),
        )
        .map_err(|e| PanelError::bridge(js_error_message(&e)))?;
        // 宿主可能在任意时刻回调，闭包需常驻
        callback.forget();

        get_addresses
            .call1(&iface, &JsValue::from_str(callback_name))
            .map_err(|e| PanelError::bridge(js_error_message(&e)))?;
        Ok(())
    }
}
