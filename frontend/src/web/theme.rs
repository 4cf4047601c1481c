//! 文档根样式
//!
//! 在 `<html>` 上切换 `dark` class，并把调色板写到 `<body>` 的内联样式。

use studyta::{ThemeApplier, ThemePalette, ThemePreference};

const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentThemeApplier;

impl ThemeApplier for DocumentThemeApplier {
    fn apply(&self, theme: ThemePreference) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(root) = document.document_element() {
            let classes = root.class_list();
            let result = if theme.is_dark() {
                classes.add_1(DARK_CLASS)
            } else {
                classes.remove_1(DARK_CLASS)
            };
            if let Err(e) = result {
                web_sys::console::warn_1(&format!("[Theme] class update failed: {:?}", e).into());
            }
        }

        if let Some(body) = document.body() {
            let palette = ThemePalette::for_theme(theme);
            let style = body.style();
            let _ = style.set_property("background-color", palette.background);
            let _ = style.set_property("color", palette.text);
        }
    }
}
