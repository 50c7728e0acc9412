use leptos::{prelude::*, wasm_bindgen::JsCast};
use leptos_use::use_window_scroll;
use web_sys::HtmlElement;

use super::icons::{GithubIcon, LinkedinIcon, MailIcon};
use crate::nav::{self, SectionBounds, RAIL_ITEMS};
use crate::portfolio::Personal;

fn measure_sections() -> Vec<SectionBounds> {
    let document = document();
    RAIL_ITEMS
        .iter()
        .filter_map(|item| {
            let el = document
                .get_element_by_id(item.id)?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionBounds {
                id: item.id,
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
        })
        .collect()
}

/// Fixed rails on wide screens: section indicators on the left, social
/// and email links on the right.
#[component]
pub fn Sidebar(personal: &'static Personal) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let (active, set_active) = signal(None::<&'static str>);

    // Layout is only known in the browser, so measure from an effect.
    Effect::new(move |_| {
        let y = scroll_y.get();
        let current = active.get_untracked();
        let next = nav::track_active(current, y, &measure_sections());
        if next != current {
            set_active.set(next);
        }
    });

    let mailto = format!("mailto:{}", personal.email);

    view! {
        <aside class="hidden lg:flex fixed left-8 bottom-0 z-20 flex-col items-start gap-6">
            <ul class="flex flex-col gap-4">
                {RAIL_ITEMS
                    .iter()
                    .map(|item| {
                        let is_active = move || active.get() == Some(item.id);
                        view! {
                            <li>
                                <a
                                    href=item.href()
                                    class=move || {
                                        if is_active() {
                                            "group flex items-center gap-3 text-xs font-mono text-teal-600 dark:text-teal-400"
                                        } else {
                                            "group flex items-center gap-3 text-xs font-mono text-slate-500"
                                        }
                                    }
                                    aria-current=move || is_active().then_some("true")
                                >
                                    <span>{item.number}</span>
                                    <span class=move || {
                                        if is_active() {
                                            "h-px w-16 bg-current transition-all"
                                        } else {
                                            "h-px w-8 bg-current transition-all group-hover:w-16"
                                        }
                                    }></span>
                                    <span class="uppercase tracking-widest">{item.name}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <div class="w-px h-24 bg-slate-300 dark:bg-slate-700 ml-2"></div>
        </aside>
        <aside class="hidden lg:flex fixed right-8 bottom-0 z-20 flex-col items-center gap-6 text-slate-500 dark:text-slate-400">
            {personal.social.github.clone().map(|url| view! {
                <a href=url target="_blank" rel="noopener noreferrer" aria-label="GitHub" class="hover:text-teal-600 dark:hover:text-teal-400">
                    <GithubIcon />
                </a>
            })}
            {personal.social.linkedin.clone().map(|url| view! {
                <a href=url target="_blank" rel="noopener noreferrer" aria-label="LinkedIn" class="hover:text-teal-600 dark:hover:text-teal-400">
                    <LinkedinIcon />
                </a>
            })}
            <a href=mailto aria-label="Email" class="hover:text-teal-600 dark:hover:text-teal-400">
                <MailIcon />
            </a>
            <div class="w-px h-24 bg-slate-300 dark:bg-slate-700"></div>
        </aside>
    }
}
