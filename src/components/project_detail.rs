use leptos::prelude::*;

use super::icons::{CloseIcon, ExternalLinkIcon, GithubIcon};
use crate::portfolio::Project;

/// Overlay with the full record of one project. The close button and a
/// click on the backdrop both dismiss it.
#[component]
pub fn ProjectDetail(project: &'static Project, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-slate-950/70 backdrop-blur-sm"
            role="dialog"
            aria-modal="true"
            aria-labelledby="project-detail-title"
            on:click=move |_| on_close.run(())
        >
            <div
                class="relative w-full max-w-2xl max-h-[90vh] overflow-y-auto rounded-xl bg-white dark:bg-slate-900 p-8 shadow-2xl"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    class="absolute top-4 right-4 text-slate-500 hover:text-slate-900 dark:hover:text-slate-100"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    <CloseIcon />
                </button>
                <h3 id="project-detail-title" class="text-2xl font-bold text-slate-900 dark:text-slate-100 mb-2">
                    {project.name.as_str()}
                </h3>
                <p class="text-sm font-mono text-teal-600 dark:text-teal-400 mb-6">
                    {project.category.join(" · ")}
                </p>
                <p class="text-slate-600 dark:text-slate-300 mb-6">{project.description.as_str()}</p>
                {(!project.highlights.is_empty()).then(|| view! {
                    <h4 class="font-semibold text-slate-900 dark:text-slate-100 mb-2">"Highlights"</h4>
                    <ul class="list-disc pl-5 space-y-1 text-slate-600 dark:text-slate-300 mb-6">
                        {project
                            .highlights
                            .iter()
                            .map(|h| view! { <li>{h.as_str()}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                })}
                <h4 class="font-semibold text-slate-900 dark:text-slate-100 mb-2">"Technologies"</h4>
                <ul class="flex flex-wrap gap-2 font-mono text-xs mb-8">
                    {project
                        .technologies
                        .iter()
                        .map(|t| view! {
                            <li class="px-2 py-1 rounded bg-slate-100 dark:bg-slate-800 text-slate-700 dark:text-slate-300">
                                {t.as_str()}
                            </li>
                        })
                        .collect::<Vec<_>>()}
                </ul>
                <div class="flex gap-4">
                    {project.github_url().map(|url| view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-2 px-4 py-2 rounded-lg border border-slate-300 dark:border-slate-600 text-slate-700 dark:text-slate-200"
                        >
                            <GithubIcon size=18 />
                            "Source"
                        </a>
                    })}
                    {project.demo_url().map(|url| view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-2 px-4 py-2 rounded-lg bg-teal-600 text-white"
                        >
                            <ExternalLinkIcon size=18 />
                            "Live Demo"
                        </a>
                    })}
                </div>
            </div>
        </div>
    }
}
