//! 顶部导航栏与侧边栏

use leptos::prelude::*;
use leptos::task::spawn_local;
use studyta::{AppRoute, ThemePalette, ToggleIcon};

use crate::context::use_app;
use crate::web::alert;
use crate::web::router::{Link, use_router};

/// 主题切换按钮
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app();
    let icon = move || ToggleIcon::for_theme(ctx.shell_state.with(|s| s.theme));

    view! {
        <button
            class="btn btn-ghost btn-circle text-xl"
            title=move || format!("Switch to {} mode", icon().next_theme())
            on:click=move |_| ctx.toggle_theme()
        >
            {move || icon().label()}
        </button>
    }
}

/// 落地页顶部导航
#[component]
pub fn TopNav() -> impl IntoView {
    let ctx = use_app();
    let links = ctx.with_shell(|shell| shell.nav_links());
    let palette = move || ThemePalette::for_theme(ctx.shell_state.with(|s| s.theme));
    let show_auth_actions = move || !ctx.shell_state.with(|s| s.is_authenticated());
    let display_name = move || {
        ctx.shell_state
            .with(|s| s.session.as_ref().map(|u| u.display_name.clone()))
            .unwrap_or_default()
    };

    view! {
        <nav
            class="navbar sticky top-0 z-40 px-4 md:px-8 shadow"
            style=move || format!("background-color: {}; color: #fff;", palette().nav)
        >
            <div class="flex-1">
                <Link to=AppRoute::Landing class="text-2xl font-bold">"StudyTa"</Link>
            </div>
            <ul class="menu menu-horizontal hidden md:flex gap-2">
                {links
                    .into_iter()
                    .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                    .collect_view()}
            </ul>
            <div class="flex-none flex items-center gap-2">
                <ThemeToggle />
                <Show
                    when=show_auth_actions
                    fallback=move || view! {
                        <Link to=AppRoute::Dashboard class="btn btn-ghost">{display_name}</Link>
                    }
                >
                    <Link to=AppRoute::Register class="btn btn-ghost">"Sign up"</Link>
                    <Link to=AppRoute::Login class="btn btn-primary">"Sign in"</Link>
                </Show>
            </div>
        </nav>
    }
}

/// 受保护页面的侧边栏
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app();
    let router = use_router();

    let entries = move || {
        let current = router.current_route().get();
        ctx.with_shell(|shell| shell.sidebar_entries(current))
    };
    let width = move || if ctx.sidebar_open.get() { "w-64" } else { "w-20" };
    let palette = move || ThemePalette::for_theme(ctx.shell_state.with(|s| s.theme));

    let on_logout = move |_| {
        let session = ctx.session();
        spawn_local(async move {
            // 后端失败时本地会话已经清除，照常回到首页，只额外提示
            let result = session.logout().await;
            router.navigate_route(AppRoute::after_logout());
            if let Err(e) = result {
                web_sys::console::error_1(&format!("[Sidebar] logout: {}", e).into());
                alert(e.message());
            }
        });
    };

    view! {
        <aside
            class=move || format!("min-h-screen flex flex-col transition-all text-white {}", width())
            style=move || format!("background-color: {};", palette().nav)
        >
            <button class="btn btn-ghost m-2" on:click=move |_| ctx.toggle_sidebar()>
                "\u{2630}"
            </button>
            <ul class="menu flex-1 gap-1">
                <For
                    each=entries
                    key=|entry| (entry.item.route, entry.active)
                    children=move |entry| {
                        let class = if entry.active { "active font-semibold" } else { "" };
                        view! {
                            <li>
                                <Link to=entry.item.route class=class>
                                    <img src=entry.item.icon alt="" class="w-6 h-6" />
                                    <Show when=move || ctx.sidebar_open.get()>
                                        <span>{entry.item.label}</span>
                                    </Show>
                                </Link>
                            </li>
                        }
                    }
                />
            </ul>
            <div class="p-2 flex flex-col gap-2">
                <Link to=AppRoute::Profile class="btn btn-ghost">"Profile"</Link>
                <button class="btn btn-outline" disabled=move || ctx.pending.get() on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </aside>
    }
}

/// 侧边栏 + 内容区布局
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let router = use_router();
    let title = move || router.current_route().get().title();

    view! {
        <div class="flex min-h-screen">
            <Sidebar />
            <main class="flex-1 p-6 md:p-10">
                <div class="flex items-center justify-between mb-8">
                    <h1 class="text-3xl font-bold">{title}</h1>
                    <ThemeToggle />
                </div>
                {children()}
            </main>
        </div>
    }
}
