use leptos::prelude::*;

use super::icons::DownloadIcon;
use crate::nav::HEADER_ITEMS;

/// Full-screen menu for narrow viewports. Picking a link or tapping the
/// backdrop closes it.
#[component]
pub fn MobileNav(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let close = move |_| set_open.set(false);

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-30 md:hidden">
                <div
                    class="absolute inset-0 bg-slate-950/60 backdrop-blur-sm"
                    on:click=close
                ></div>
                <nav class="relative ml-auto h-full w-3/4 max-w-sm bg-white dark:bg-slate-900 shadow-xl flex flex-col justify-center px-10 gap-8">
                    <ol class="flex flex-col gap-6">
                        {HEADER_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <li>
                                        <a
                                            href=item.href()
                                            class="flex flex-col text-lg text-slate-800 dark:text-slate-100 hover:text-teal-600 dark:hover:text-teal-400"
                                            on:click=close
                                        >
                                            <span class="font-mono text-xs text-teal-600 dark:text-teal-400">
                                                {item.number}"."
                                            </span>
                                            {item.name}
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ol>
                    <a
                        href="/data/cv.pdf"
                        download
                        class="inline-flex items-center justify-center gap-2 px-6 py-3 rounded-lg border border-teal-600 text-teal-600 dark:border-teal-400 dark:text-teal-400"
                        on:click=close
                    >
                        <DownloadIcon size=18 />
                        "Download CV"
                    </a>
                </nav>
            </div>
        </Show>
    }
}
