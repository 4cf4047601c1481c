//! 找回密码与修改密码

use leptos::prelude::*;
use leptos::task::spawn_local;
use studyta::AppRoute;
use studyta::forms::{ChangePasswordForm, ForgotPasswordForm};

use crate::components::login::AuthCard;
use crate::components::nav::AppLayout;
use crate::components::register::Field;
use crate::context::use_app;
use crate::web::alert;
use crate::web::router::{Link, use_router};

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let ctx = use_app();

    let (email, set_email) = signal(String::new());
    let (sent, set_sent) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ForgotPasswordForm {
            email: email.get_untracked(),
        };

        let session = ctx.session();
        spawn_local(async move {
            match session.request_password_reset(&form).await {
                Ok(()) => set_sent.set(true),
                Err(e) => alert(e.message()),
            }
        });
    };

    view! {
        <AuthCard title=AppRoute::ForgotPassword.title()>
            <Show
                when=move || !sent.get()
                fallback=|| view! {
                    <div class="card-body text-center">
                        <p>"If that address has an account, a reset link is on its way."</p>
                        <Link to=AppRoute::Login class="link link-primary">"Back to sign in"</Link>
                    </div>
                }
            >
                <form class="card-body" on:submit=on_submit>
                    <Field id="email" label="Email" kind="email" value=email set_value=set_email />
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" disabled=move || ctx.pending.get()>
                            "Send reset link"
                        </button>
                    </div>
                </form>
            </Show>
        </AuthCard>
    }
}

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let ctx = use_app();
    let router = use_router();

    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ChangePasswordForm {
            password: password.get_untracked(),
            confirm: confirm.get_untracked(),
        };

        let session = ctx.session();
        spawn_local(async move {
            match session.change_password(&form).await {
                Ok(()) => {
                    alert("Password updated.");
                    router.navigate_route(AppRoute::after_password_change());
                }
                Err(e) => alert(e.message()),
            }
        });
    };

    view! {
        <AppLayout>
            <form class="card bg-base-100 shadow max-w-md" on:submit=on_submit>
                <div class="card-body">
                    <Field
                        id="password"
                        label="New Password"
                        kind="password"
                        value=password
                        set_value=set_password
                    />
                    <Field
                        id="confirm"
                        label="Confirm Password"
                        kind="password"
                        value=confirm
                        set_value=set_confirm
                    />
                    <button class="btn btn-primary mt-6" disabled=move || ctx.pending.get()>
                        "Update password"
                    </button>
                </div>
            </form>
        </AppLayout>
    }
}
