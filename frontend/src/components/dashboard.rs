use leptos::prelude::*;
use studyta::AppRoute;
use studyta::shell::SIDEBAR_MENU;

use crate::components::nav::AppLayout;
use crate::context::use_view;
use crate::web::router::Link;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let view_state = use_view();
    let greeting = move || {
        view_state.with(|s| match &s.session {
            Some(user) => format!("Welcome back, {}!", user.display_name),
            None => "Welcome!".to_string(),
        })
    };

    view! {
        <AppLayout>
            <p class="text-xl mb-8">{greeting}</p>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {SIDEBAR_MENU
                    .into_iter()
                    .filter(|item| item.route != AppRoute::Dashboard)
                    .map(|item| view! {
                        <Link to=item.route class="card bg-base-100 shadow hover:shadow-lg transition">
                            <div class="card-body items-center">
                                <img src=item.icon alt="" class="w-12 h-12" />
                                <h2 class="card-title">{item.label}</h2>
                            </div>
                        </Link>
                    })
                    .collect_view()}
            </div>
        </AppLayout>
    }
}

/// 各功能页共用的占位页面
#[component]
pub fn FeaturePage(route: AppRoute) -> impl IntoView {
    view! {
        <AppLayout>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{route.title()}</h2>
                    <p class="opacity-70">"Coming soon."</p>
                </div>
            </div>
        </AppLayout>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let view_state = use_view();
    let user = move || view_state.with(|s| s.session.clone());

    view! {
        <AppLayout>
            {move || user().map(|user| {
                let initial = user.initial().to_string();
                view! {
                    <div class="card bg-base-100 shadow max-w-lg">
                        <div class="card-body items-center text-center gap-3">
                            {match user.avatar_url.clone() {
                                Some(url) => view! {
                                    <img src=url alt="avatar" class="w-24 h-24 rounded-full" />
                                }.into_any(),
                                None => view! {
                                    <div class="avatar placeholder">
                                        <div class="bg-primary text-primary-content w-24 rounded-full text-3xl">
                                            <span>{initial}</span>
                                        </div>
                                    </div>
                                }.into_any(),
                            }}
                            <h2 class="text-2xl font-semibold">{user.display_name.clone()}</h2>
                            <p class="opacity-70">{user.email.clone()}</p>
                            <p>{user.bio.clone().unwrap_or_default()}</p>
                            <Link to=AppRoute::ChangePassword class="btn btn-outline mt-4">
                                "Change password"
                            </Link>
                        </div>
                    </div>
                }
            })}
        </AppLayout>
    }
}
