use leptos::prelude::*;
use studyta::AppRoute;
use studyta::shell::LANDING_SECTIONS;

use crate::components::nav::TopNav;
use crate::context::use_view;
use crate::web::router::Link;

fn section_id(label: &str) -> String {
    label.to_lowercase().replace(' ', "-")
}

fn section_blurb(label: &str) -> &'static str {
    match label {
        "Home" => "Your study assistant: summaries, schedules and focus sessions in one place.",
        "How it Works" => "Upload your notes, pick a study mode, and track what you learn.",
        "Features" => "Summarize, Calendar, Library, Study Mode, Analytics and Music.",
        _ => "Built by students who wanted calmer, more organized study time.",
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let view_state = use_view();
    let signed_in = move || view_state.with(|s| s.is_authenticated());

    view! {
        <div>
            <TopNav />
            {LANDING_SECTIONS
                .into_iter()
                .map(|label| view! {
                    <section
                        id=section_id(label)
                        class="min-h-[60vh] flex flex-col items-center justify-center gap-4 px-6 text-center"
                    >
                        <h2 class="text-4xl font-bold">{label}</h2>
                        <p class="max-w-xl opacity-80">{section_blurb(label)}</p>
                    </section>
                })
                .collect_view()}
            <div class="flex justify-center pb-16">
                <Show
                    when=signed_in
                    fallback=|| view! {
                        <Link to=AppRoute::Register class="btn btn-primary btn-lg">"Get started"</Link>
                    }
                >
                    <Link to=AppRoute::Dashboard class="btn btn-primary btn-lg">"Go to dashboard"</Link>
                </Show>
            </div>
        </div>
    }
}
