use leptos::prelude::*;

use super::icons::{ExternalLinkIcon, GithubIcon};
use crate::portfolio::Project;

const SHOWN_HIGHLIGHTS: usize = 2;
const SHOWN_TECHNOLOGIES: usize = 3;

/// Splits a technology list into the chips shown on a card and the count
/// folded into the trailing `+N` chip.
fn tech_preview(technologies: &[String]) -> (&[String], Option<usize>) {
    let shown = technologies.len().min(SHOWN_TECHNOLOGIES);
    let hidden = technologies.len() - shown;
    (&technologies[..shown], (hidden > 0).then_some(hidden))
}

#[component]
pub fn ProjectCard(
    project: &'static Project,
    index: usize,
    #[prop(into)] on_select: Callback<u32>,
) -> impl IntoView {
    let (techs, overflow) = tech_preview(&project.technologies);
    let delay = format!("animation-delay: {}ms", index * 100);
    let id = project.id;

    view! {
        <li
            class="glass-card rounded-xl p-6 flex flex-col cursor-pointer hover:-translate-y-1 transition-transform animate-fade-in"
            style=delay
            on:click=move |_| on_select.run(id)
        >
            <div class="flex items-start justify-between mb-4">
                <h3 class="text-xl font-semibold text-slate-900 dark:text-slate-100">
                    {project.name.as_str()}
                </h3>
                <div class="flex gap-3 text-slate-500">
                    {project.github_url().map(|url| view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Source code"
                            class="hover:text-teal-600"
                            on:click=|ev| ev.stop_propagation()
                        >
                            <GithubIcon size=18 />
                        </a>
                    })}
                    {project.demo_url().map(|url| view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Live demo"
                            class="hover:text-teal-600"
                            on:click=|ev| ev.stop_propagation()
                        >
                            <ExternalLinkIcon size=18 />
                        </a>
                    })}
                </div>
            </div>
            <p class="text-sm text-slate-600 dark:text-slate-300 mb-4">
                {project.description.as_str()}
            </p>
            <ul class="text-sm text-slate-600 dark:text-slate-400 space-y-1 mb-4 flex-1">
                {project
                    .highlights
                    .iter()
                    .take(SHOWN_HIGHLIGHTS)
                    .map(|h| view! { <li>"▹ " {h.as_str()}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            <ul class="flex flex-wrap gap-2 font-mono text-xs">
                {techs
                    .iter()
                    .map(|t| view! {
                        <li class="px-2 py-1 rounded bg-slate-100 dark:bg-slate-800 text-slate-700 dark:text-slate-300">
                            {t.as_str()}
                        </li>
                    })
                    .collect::<Vec<_>>()}
                {overflow.map(|n| view! {
                    <li class="px-2 py-1 rounded bg-teal-600/10 text-teal-700 dark:text-teal-300">
                        {format!("+{n}")}
                    </li>
                })}
            </ul>
        </li>
    }
}
