//! 应用上下文
//!
//! 在应用根创建唯一的 [`AppRuntime`]，并把核心层的通知桥接成 Leptos 信号。
//! 路由服务只拿到派生出来的认证信号，与会话系统解耦。

use std::rc::Rc;

use leptos::prelude::*;
use studyta::config::{VAR_API_URL, VAR_SESSION_KEY, VAR_THEME_KEY};
use studyta::shell::ViewShell;
use studyta::{
    AppConfig, AppRuntime, MemoryStorage, SessionContext, StorageBackend, ViewBinding,
    ViewSnapshot,
};

use crate::api::StudyTaApi;
use crate::web::{BrowserStorage, DocumentThemeApplier, listen_storage_events};

/// 构建时通过环境变量覆盖的配置
fn build_config() -> AppConfig {
    AppConfig::from_lookup(|name| {
        let value = match name {
            VAR_THEME_KEY => option_env!("STUDYTA_THEME_KEY"),
            VAR_SESSION_KEY => option_env!("STUDYTA_SESSION_KEY"),
            VAR_API_URL => option_env!("STUDYTA_API_URL"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

fn open_storage() -> Rc<dyn StorageBackend> {
    if BrowserStorage::is_available() {
        Rc::new(BrowserStorage)
    } else {
        web_sys::console::warn_1(
            &"[App] localStorage unavailable, preferences will not persist".into(),
        );
        Rc::new(MemoryStorage::new())
    }
}

/// 应用上下文
///
/// `shell` 是根外壳：它是唯一应用主题的视图，其快照同步到 `shell_state`。
#[derive(Clone, Copy)]
pub struct AppContext {
    runtime: StoredValue<Rc<AppRuntime>, LocalStorage>,
    shell: StoredValue<ViewShell, LocalStorage>,
    /// 根外壳看到的主题与会话
    pub shell_state: RwSignal<ViewSnapshot>,
    pub sidebar_open: RwSignal<bool>,
    /// 会话层是否有后端调用进行中，表单据此禁用提交按钮
    pub pending: RwSignal<bool>,
}

impl AppContext {
    pub fn new() -> Self {
        let config = build_config();
        let api = Rc::new(StudyTaApi::new(config.clone()));
        let runtime = Rc::new(AppRuntime::new(
            config,
            open_storage(),
            api,
            Rc::new(DocumentThemeApplier),
        ));

        let shell_state = RwSignal::new(ViewSnapshot::default());
        let shell = ViewShell::mount_with(&runtime, move |_, snapshot| {
            let _ = shell_state.try_set(snapshot.clone());
        });
        shell_state.set(shell.binding().snapshot());

        let pending = RwSignal::new(false);
        runtime.session().on_pending_change(move |in_flight| {
            let _ = pending.try_set(in_flight);
        });

        listen_storage_events(runtime.clone());

        Self {
            runtime: StoredValue::new_local(runtime),
            shell: StoredValue::new_local(shell),
            shell_state,
            sidebar_open: RwSignal::new(false),
            pending,
        }
    }

    pub fn runtime(&self) -> Rc<AppRuntime> {
        self.runtime.get_value()
    }

    pub fn session(&self) -> Rc<SessionContext> {
        self.runtime.with_value(|rt| rt.session())
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.shell_state;
        Signal::derive(move || state.with(|s| s.is_authenticated()))
    }

    pub fn toggle_theme(&self) {
        self.shell.with_value(|shell| {
            shell.toggle_theme();
        });
    }

    pub fn toggle_sidebar(&self) {
        let open = self.shell.with_value(|shell| shell.toggle_sidebar());
        self.sidebar_open.set(open);
    }

    /// 在根外壳上执行只读查询
    pub fn with_shell<T>(&self, f: impl FnOnce(&ViewShell) -> T) -> T {
        self.shell.with_value(f)
    }
}

/// 从 Context 获取应用上下文
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// 为当前组件挂载一个视图绑定
///
/// 绑定存放在组件 owner 下，组件卸载时随 owner 一起释放，订阅也就解除了。
pub fn use_view() -> RwSignal<ViewSnapshot> {
    let runtime = use_app().runtime();
    let state = RwSignal::new(ViewSnapshot::default());

    let binding = ViewBinding::mount_with(&runtime, move |_, snapshot| {
        let _ = state.try_set(snapshot.clone());
    });
    state.set(binding.snapshot());
    StoredValue::new_local(binding);

    state
}
