// Console logging helpers. Only call these from DOM glue; they need a JS host.
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}
