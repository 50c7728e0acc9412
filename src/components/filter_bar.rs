use leptos::prelude::*;

use crate::portfolio::ProjectFilter;

#[component]
pub fn FilterBar(
    categories: Vec<String>,
    #[prop(into)] selected: Signal<ProjectFilter>,
    #[prop(into)] on_filter_change: Callback<ProjectFilter>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap justify-center gap-3 mb-12" role="group" aria-label="Filter projects">
            {categories
                .into_iter()
                .map(|category| {
                    let filter = ProjectFilter::from(category.as_str());
                    let active = {
                        let filter = filter.clone();
                        Memo::new(move |_| selected.with(|s| *s == filter))
                    };
                    view! {
                        <button
                            class=move || {
                                if active.get() {
                                    "px-4 py-2 rounded-full text-sm bg-teal-600 text-white shadow"
                                } else {
                                    "px-4 py-2 rounded-full text-sm glass-card text-slate-700 dark:text-slate-300 hover:text-teal-600"
                                }
                            }
                            aria-pressed=move || active.get().to_string()
                            on:click=move |_| on_filter_change.run(filter.clone())
                        >
                            {category}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
