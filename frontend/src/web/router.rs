//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 守卫判定由核心层的 [`RouteGuard`] 完成，这里只负责把结果写进 History 和信号。

use leptos::prelude::*;
use studyta::{AppRoute, GuardDecision, RouteGuard};
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn write_history(path: &str, use_push: bool) {
    if use_push {
        push_history_state(path);
    } else {
        replace_history_state(path);
    }
}

/// 路由器服务
///
/// 通过注入的认证信号与会话系统解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
    guard: RouteGuard,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>, guard: RouteGuard) -> Self {
        let (current_route, set_route) = signal(AppRoute::fallback());
        let router = Self {
            current_route,
            set_route,
            is_authenticated,
            guard,
        };

        // 初始 URL 同样要经过守卫
        let initial = AppRoute::from_path(&current_path());
        router.navigate_to_route(initial, false);
        router
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    pub fn navigate_route(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    /// 导航到指定路由
    ///
    /// `use_push` 为 false 时使用 replaceState。
    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();

        match self.guard.decide_for(target_route, is_auth) {
            GuardDecision::Render(route) => {
                write_history(route.to_path(), use_push);
                self.set_route.set(route);
            }
            GuardDecision::Redirect(redirect) => {
                web_sys::console::log_1(
                    &format!("[Router] {} -> redirect to {}", target_route, redirect).into(),
                );
                // 重定向总是替换当前条目，后退不会回到被拒绝的地址
                replace_history_state(redirect.to_path());
                self.set_route.set(redirect);
            }
        }
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            router.navigate_to_route(target_route, false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证状态变化时对当前路由重新执行守卫
    ///
    /// Covers login, logout and another tab signing in or out.
    fn setup_auth_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = router.current_route.get_untracked();
            let decision = router.guard.decide_for(route, is_auth);

            if let GuardDecision::Redirect(redirect) = decision {
                web_sys::console::log_1(
                    &format!(
                        "[Router] Auth state changed (authenticated = {}), redirecting to {}.",
                        is_auth, redirect
                    )
                    .into(),
                );
                push_history_state(redirect.to_path());
                router.set_route.set(redirect);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>, guard: RouteGuard) -> RouterService {
    let router = RouterService::new(is_authenticated, guard);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 路由守卫
    guard: RouteGuard,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated, guard);

    children()
}

/// 路由出口组件
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接，点击时走路由服务而不是整页跳转
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate_route(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
