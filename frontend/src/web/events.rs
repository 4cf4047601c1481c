//! 跨标签页的 `storage` 事件监听

use std::rc::Rc;

use studyta::AppRuntime;
use wasm_bindgen::prelude::*;

/// 监听其他标签页对 localStorage 的修改
///
/// The browser only fires `storage` in tabs other than the writer, so the
/// runtime never sees its own writes echoed back here.
pub fn listen_storage_events(runtime: Rc<AppRuntime>) {
    let closure = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
        let key = ev.key();
        runtime.handle_storage_event(key.as_deref());
    });

    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
    }

    // 应用根的生命周期等于页面，泄漏闭包以保持监听器存活
    closure.forget();
}

/// 弹出浏览器原生提示框
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
