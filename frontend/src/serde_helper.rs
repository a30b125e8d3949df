use js_sys::wasm_bindgen::JsValue;
use serde::de::DeserializeOwned;

/// Error type for deserialization of values handed over by JS
#[derive(Debug)]
pub enum Error {
    SerdeWasmBindgen(serde_wasm_bindgen::Error),
    JsSys(JsValue),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::SerdeWasmBindgen(e) => write!(f, "Serde WASM Bindgen Error: {}", e),
            Error::JsSys(v) => write!(f, "JS Sys Error: {:?}", v),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_wasm_bindgen::Error> for Error {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Error::SerdeWasmBindgen(e)
    }
}

/// Deserialize a JsValue into a Rust data structure
pub fn from_value<T: DeserializeOwned>(value: JsValue) -> Result<T, Error> {
    serde_wasm_bindgen::from_value(value).map_err(Error::from)
}

/// Parse a JSON string into a Rust data structure (via JSON.parse and JsValue)
pub fn from_json_string<T: DeserializeOwned>(s: &str) -> Result<T, Error> {
    let js_val = js_sys::JSON::parse(s).map_err(Error::JsSys)?;
    from_value(js_val)
}

/// 宿主既可能传入对象数组，也可能传入 JSON 字符串
pub fn from_js_or_json<T: DeserializeOwned>(value: JsValue) -> Result<T, Error> {
    match value.as_string() {
        Some(text) => from_json_string(&text),
        None => from_value(value),
    }
}
