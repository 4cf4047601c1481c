//! StudyTa 前端应用
//!
//! Leptos CSR 绑定层，状态全部来自核心 crate：
//! - `context`: 应用上下文，持有运行时并把通知桥接成信号
//! - `web::router`: 路由服务，守卫判定委托给核心层
//! - `api`: 认证服务的 HTTP 客户端
//! - `components`: UI 组件层

mod api;
mod context;
mod components {
    pub mod dashboard;
    pub mod landing;
    pub mod login;
    pub mod nav;
    pub mod password;
    pub mod register;
}
pub(crate) mod web;

use crate::components::dashboard::{DashboardPage, FeaturePage, ProfilePage};
use crate::components::landing::LandingPage;
use crate::components::login::LoginPage;
use crate::components::password::{ChangePasswordPage, ForgotPasswordPage};
use crate::components::register::RegisterPage;
use crate::context::AppContext;

use leptos::prelude::*;
use studyta::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::ChangePassword => view! { <ChangePasswordPage /> }.into_any(),
        AppRoute::Summarize
        | AppRoute::Calendar
        | AppRoute::Library
        | AppRoute::Music
        | AppRoute::Study
        | AppRoute::Analytics => view! { <FeaturePage route=route /> }.into_any(),
        // 守卫已把未知路径重定向到首页
        AppRoute::NotFound => view! { <LandingPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建应用上下文（运行时、根外壳、跨标签页监听）
    let app_ctx = AppContext::new();
    provide_context(app_ctx);

    // 2. 认证信号注入路由服务
    let is_authenticated = app_ctx.is_authenticated_signal();
    let guard = app_ctx.runtime().route_guard();

    view! {
        <Router is_authenticated=is_authenticated guard=guard>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
