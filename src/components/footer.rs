use chrono::Datelike;
use leptos::prelude::*;

use super::icons::{GithubIcon, LinkedinIcon};
use crate::portfolio::Personal;

#[component]
pub fn Footer(personal: &'static Personal) -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="py-10 border-t border-slate-200 dark:border-slate-800">
            <div class="max-w-6xl mx-auto px-6 flex flex-col sm:flex-row items-center justify-between gap-4 text-sm text-slate-500">
                <p>{format!("© {year} {}. All rights reserved.", personal.name)}</p>
                <div class="flex gap-4">
                    {personal.social.github.clone().map(|url| view! {
                        <a href=url target="_blank" rel="noopener noreferrer" aria-label="GitHub" class="hover:text-teal-600">
                            <GithubIcon size=18 />
                        </a>
                    })}
                    {personal.social.linkedin.clone().map(|url| view! {
                        <a href=url target="_blank" rel="noopener noreferrer" aria-label="LinkedIn" class="hover:text-teal-600">
                            <LinkedinIcon size=18 />
                        </a>
                    })}
                </div>
            </div>
        </footer>
    }
}
