use leptos::prelude::*;

use super::icons::CalendarIcon;
use super::{Reveal, SectionHeading};
use crate::portfolio::Experience as Entry;

#[component]
pub fn Experience(entries: &'static [Entry]) -> impl IntoView {
    view! {
        <Reveal id="experience" class="py-24 max-w-6xl mx-auto px-6">
            <SectionHeading number="03" title="Experience" />
            <ol class="relative border-l border-slate-200 dark:border-slate-700 ml-3 space-y-12">
                {entries
                    .iter()
                    .map(|entry| view! {
                        <li class="pl-8 relative">
                            <span class="absolute -left-[7px] top-2 w-3 h-3 rounded-full bg-teal-600 dark:bg-teal-400"></span>
                            <div class="glass-card rounded-xl p-6">
                                <h3 class="text-xl font-semibold text-slate-900 dark:text-slate-100">
                                    {entry.position.as_str()}
                                    <span class="text-teal-600 dark:text-teal-400">
                                        " @ " {entry.company.as_str()}
                                    </span>
                                </h3>
                                <p class="flex items-center gap-2 text-sm text-slate-500 mt-1 mb-4">
                                    <CalendarIcon />
                                    {entry.duration.as_str()} " · " {entry.location.as_str()}
                                </p>
                                <p class="text-slate-600 dark:text-slate-300 mb-4">
                                    {entry.description.as_str()}
                                </p>
                                <ul class="list-disc pl-5 space-y-1 text-sm text-slate-600 dark:text-slate-300 mb-4">
                                    {entry
                                        .responsibilities
                                        .iter()
                                        .map(|r| view! { <li>{r.as_str()}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <ul class="flex flex-wrap gap-2">
                                    {entry
                                        .technologies
                                        .iter()
                                        .map(|t| view! {
                                            <li class="px-2 py-1 rounded text-xs font-mono bg-slate-100 dark:bg-slate-800 text-slate-700 dark:text-slate-300">
                                                {t.as_str()}
                                            </li>
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        </li>
                    })
                    .collect::<Vec<_>>()}
            </ol>
        </Reveal>
    }
}
