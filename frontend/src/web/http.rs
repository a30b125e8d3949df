//! HTTP 传输实现
//!
//! 使用 `web_sys::fetch` 实现核心库的 [`HttpClient`]，超时与信封处理由 `ApiClient` 负责。

use flux_panel::error::{PanelError, PanelResult};
use flux_panel::request::{HttpClient, HttpRequest, HttpResponse};
use flux_panel_shared::DEFAULT_NETWORK_ERROR;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// 尽量从 JS 异常中取出可读的消息
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| DEFAULT_NETWORK_ERROR.to_string())
}

/// 浏览器 fetch 传输
pub struct FetchClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> PanelResult<HttpResponse> {
        let headers = Headers::new().map_err(|e| {
            PanelError::network(format!("创建 Headers 失败: {}", js_error_message(&e)))
        })?;

        for (key, value) in &req.headers {
            headers.set(key, value).map_err(|e| {
                PanelError::network(format!("设置 Header 失败: {}", js_error_message(&e)))
            })?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| PanelError::network(js_error_message(&e)))?;

        let window =
            web_sys::window().ok_or_else(|| PanelError::network("无法获取 window 对象"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| PanelError::network(js_error_message(&e)).in_op_with("fetch", &req.url))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|_| PanelError::network("Response 类型转换失败"))?;

        let status = response.status();
        let promise = response
            .text()
            .map_err(|e| PanelError::network(format!("读取响应体失败: {}", js_error_message(&e))))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| PanelError::network(format!("读取响应体失败: {}", js_error_message(&e))))?;

        Ok(HttpResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}
