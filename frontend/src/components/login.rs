use leptos::prelude::*;
use leptos::task::spawn_local;
use studyta::AppRoute;
use studyta::forms::LoginForm;

use crate::components::nav::ThemeToggle;
use crate::context::{use_app, use_view};
use crate::web::alert;
use crate::web::router::Link;

/// 表单页面的公共外框，颜色跟随该页面自己的视图绑定
#[component]
pub fn AuthCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let view_state = use_view();
    let card_class = move || {
        if view_state.with(|s| s.is_dark()) {
            "card shrink-0 w-full shadow-2xl bg-neutral text-neutral-content"
        } else {
            "card shrink-0 w-full shadow-2xl bg-base-100"
        }
    };

    view! {
        <div class="hero min-h-screen">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="self-end"><ThemeToggle /></div>
                <div class="text-center mb-4">
                    <Link to=AppRoute::Landing class="text-4xl font-bold">"StudyTa"</Link>
                    <h1 class="text-2xl font-semibold mt-2">{title}</h1>
                </div>
                <div class=card_class>{children()}</div>
            </div>
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm::new(email.get_untracked(), password.get_untracked());

        let session = ctx.session();
        spawn_local(async move {
            // 成功后由路由服务的认证监听跳转到面板
            if let Err(e) = session.login(&form).await {
                web_sys::console::warn_1(&format!("[Login] {}", e).into());
                alert(e.message());
            }
        });
    };

    view! {
        <AuthCard title=AppRoute::Login.title()>
            <form class="card-body" on:submit=on_submit>
                <div class="form-control">
                    <label class="label" for="email">
                        <span class="label-text">"Email"</span>
                    </label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        prop:value=email
                        class="input input-bordered"
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="password">
                        <span class="label-text">"Password"</span>
                    </label>
                    <input
                        id="password"
                        type="password"
                        placeholder="••••••••"
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        prop:value=password
                        class="input input-bordered"
                    />
                    <label class="label">
                        <Link to=AppRoute::ForgotPassword class="label-text-alt link link-hover">
                            "Forgot password?"
                        </Link>
                    </label>
                </div>
                <div class="form-control mt-6">
                    <button class="btn btn-primary" disabled=move || ctx.pending.get()>
                        {move || if ctx.pending.get() {
                            view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                        } else {
                            "Sign in".into_any()
                        }}
                    </button>
                </div>
                <p class="text-center text-sm mt-2">
                    "No account yet? "
                    <Link to=AppRoute::Register class="link link-primary">"Sign up"</Link>
                </p>
            </form>
        </AuthCard>
    }
}
