use leptos::prelude::*;

/// Numbered section title, e.g. `02. Skills`.
#[component]
pub fn SectionHeading(number: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <h2 class="flex items-center gap-4 text-3xl font-bold text-slate-900 dark:text-slate-100 mb-12">
            <span class="font-mono text-xl text-teal-600 dark:text-teal-400">{number}"."</span>
            {title}
            <span class="flex-1 h-px bg-slate-200 dark:bg-slate-700"></span>
        </h2>
    }
}
