use leptos::prelude::*;

use super::ProjectCard;
use crate::portfolio::Project;

#[component]
pub fn ProjectGrid(
    projects: Vec<&'static Project>,
    #[prop(into)] on_select: Callback<u32>,
) -> impl IntoView {
    view! {
        <ul class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
            {projects
                .into_iter()
                .enumerate()
                .map(|(index, project)| view! {
                    <ProjectCard project=project index=index on_select=on_select />
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
pub fn ProjectGridEmpty() -> impl IntoView {
    view! {
        <div class="text-center py-16">
            <svg viewBox="0 0 200 200" class="mx-auto w-32 h-32 text-slate-300 dark:text-slate-700" aria-hidden="true">
                <rect x="30" y="40" width="140" height="120" rx="8" fill="none" stroke="currentColor" stroke-width="2"/>
                <line x1="30" y1="70" x2="170" y2="70" stroke="currentColor" stroke-width="2"/>
                <circle cx="48" cy="55" r="4" fill="currentColor"/>
                <circle cx="62" cy="55" r="4" fill="currentColor"/>
            </svg>
            <p class="text-slate-500 mt-4">"No projects found for this category."</p>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn empty_state_message() {
        let html = Owner::new().with(|| view! { <ProjectGridEmpty /> }.to_html());
        assert!(html.contains("No projects found for this category."));
    }

    #[test]
    fn empty_grid_has_no_cards() {
        let html = Owner::new()
            .with(|| view! { <ProjectGrid projects=Vec::new() on_select=|_: u32| {} /> }.to_html());
        assert!(!html.contains("<li"));
    }
}
