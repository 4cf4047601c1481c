//! 原生 Web API 封装模块
//!
//! 直接使用 `web_sys`，把浏览器能力接到核心层的 trait 上。

mod events;
pub mod router;
mod storage;
mod theme;

pub use events::{alert, listen_storage_events};
pub use storage::BrowserStorage;
pub use theme::DocumentThemeApplier;
