use leptos::prelude::*;

use super::icons::{MoonIcon, SunIcon};
use crate::theme::{self, ThemeContext};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    let toggle = move |_| {
        let next = theme.mode.get_untracked().toggled();
        theme::persist(next);
        theme.set_mode.set(next);
    };

    let is_dark = move || theme.mode.get().is_dark();

    let label = move || {
        if is_dark() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    };

    view! {
        <button
            class="p-3 rounded-full hover:bg-slate-100 dark:hover:bg-slate-800 text-slate-700 dark:text-slate-300 transition-all"
            on:click=toggle
            aria-label=label
            title=label
        >
            {move || {
                if is_dark() {
                    view! { <SunIcon /> }.into_any()
                } else {
                    view! { <MoonIcon /> }.into_any()
                }
            }}
        </button>
    }
}
