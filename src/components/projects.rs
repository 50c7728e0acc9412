use leptos::prelude::*;

use super::{FilterBar, ProjectDetail, ProjectGrid, ProjectGridEmpty, Reveal, SectionHeading};
use crate::portfolio::{Portfolio, Project, ProjectFilter};

/// The project whose detail overlay is open, if the id still resolves.
fn selected_project(portfolio: &Portfolio, selected: Option<u32>) -> Option<&Project> {
    selected.and_then(|id| portfolio.project(id))
}

#[component]
pub fn Projects(portfolio: &'static Portfolio) -> impl IntoView {
    let filter = RwSignal::new(ProjectFilter::All);
    let selected = RwSignal::new(None::<u32>);

    let on_select = Callback::new(move |id: u32| selected.set(Some(id)));

    view! {
        <Reveal id="projects" class="py-24 max-w-6xl mx-auto px-6">
            <SectionHeading number="04" title="Featured Projects" />
            <FilterBar
                categories=portfolio.project_categories()
                selected=filter
                on_filter_change=move |f: ProjectFilter| filter.set(f)
            />
            {move || {
                let current = filter.get();
                let visible: Vec<_> = portfolio.filter_projects(&current).collect();
                if visible.is_empty() {
                    view! { <ProjectGridEmpty /> }.into_any()
                } else {
                    view! { <ProjectGrid projects=visible on_select=on_select /> }.into_any()
                }
            }}
            {move || {
                selected_project(portfolio, selected.get())
                    .map(|project| view! {
                        <ProjectDetail project=project on_close=move |()| selected.set(None) />
                    })
            }}
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio() -> Portfolio {
        Portfolio::from_json(include_str!("../../data/portfolio.json")).unwrap()
    }

    #[test]
    fn overlay_closed_without_selection() {
        assert!(selected_project(&portfolio(), None).is_none());
    }

    #[test]
    fn overlay_opens_for_known_id() {
        let portfolio = portfolio();
        let id = portfolio.projects[1].id;
        let project = selected_project(&portfolio, Some(id)).unwrap();
        assert_eq!(project.id, id);
    }

    #[test]
    fn unknown_id_keeps_overlay_closed() {
        assert!(selected_project(&portfolio(), Some(u32::MAX)).is_none());
    }
}

#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;

    #[test]
    fn initial_render_shows_every_project_and_no_overlay() {
        let portfolio: &'static Portfolio = Box::leak(Box::new(
            Portfolio::from_json(include_str!("../../data/portfolio.json")).unwrap(),
        ));
        let html = Owner::new().with(|| view! { <Projects portfolio=portfolio /> }.to_html());
        for project in &portfolio.projects {
            assert!(html.contains(project.name.as_str()));
        }
        assert!(!html.contains("role=\"dialog\""));
    }
}
