use leptos::prelude::*;
use leptos::task::spawn_local;
use studyta::AppRoute;
use studyta::forms::SignupForm;

use crate::components::login::AuthCard;
use crate::context::use_app;
use crate::web::alert;
use crate::web::router::{Link, use_router};

/// 带标签的单行输入框
#[component]
pub(crate) fn Field(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=kind
                on:input=move |ev| set_value.set(event_target_value(&ev))
                prop:value=value
                class="input input-bordered"
            />
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app();
    let router = use_router();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };

        let session = ctx.session();
        spawn_local(async move {
            match session.signup(&form).await {
                Ok(()) => {
                    alert("Account created! Check your email to verify it, then sign in.");
                    router.navigate_route(AppRoute::Login);
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("[Register] {}", e).into());
                    alert(e.message());
                }
            }
        });
    };

    view! {
        <AuthCard title=AppRoute::Register.title()>
            <form class="card-body" on:submit=on_submit>
                <Field id="name" label="Name" kind="text" value=name set_value=set_name />
                <Field id="email" label="Email" kind="email" value=email set_value=set_email />
                <Field
                    id="password"
                    label="Password"
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
                <div class="form-control mt-6">
                    <button class="btn btn-primary" disabled=move || ctx.pending.get()>
                        {move || if ctx.pending.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </div>
                <p class="text-center text-sm mt-2">
                    "Already have an account? "
                    <Link to=AppRoute::Login class="link link-primary">"Sign in"</Link>
                </p>
            </form>
        </AuthCard>
    }
}
