use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::icons::{CloseIcon, MenuIcon};
use super::{MobileNav, ThemeToggle};
use crate::nav::{self, HEADER_ITEMS};

/// Upper-case first letters of up to two words, used for the logo mark.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn Header(name: &'static str) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| nav::is_scrolled(scroll_y.get()));
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class=move || {
            if scrolled.get() {
                "fixed top-0 inset-x-0 z-40 py-3 bg-white/80 dark:bg-slate-950/80 backdrop-blur-md shadow-sm transition-all"
            } else {
                "fixed top-0 inset-x-0 z-40 py-6 bg-transparent transition-all"
            }
        }>
            <nav class="max-w-6xl mx-auto px-6 flex items-center justify-between">
                <a href="#" class="text-xl font-bold text-teal-600 dark:text-teal-400" title=name>
                    {initials(name)}
                </a>
                <ul class="hidden md:flex items-center gap-6 text-sm">
                    {HEADER_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <a
                                        href=item.href()
                                        class="text-slate-600 dark:text-slate-300 hover:text-teal-600 dark:hover:text-teal-400 transition-colors"
                                    >
                                        {item.name}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    <button
                        class="md:hidden p-2 text-slate-700 dark:text-slate-300"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            if menu_open.get() {
                                view! { <CloseIcon /> }.into_any()
                            } else {
                                view! { <MenuIcon /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </nav>
        </header>
        <MobileNav open=menu_open set_open=set_menu_open />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_full_name() {
        assert_eq!(initials("Alex Morgan"), "AM");
    }

    #[test]
    fn initials_use_first_two_words() {
        assert_eq!(initials("mary jane watson"), "MJ");
    }

    #[test]
    fn initials_of_empty_name() {
        assert_eq!(initials("   "), "");
    }
}
