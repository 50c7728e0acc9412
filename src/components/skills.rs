use leptos::prelude::*;

use super::{Reveal, SectionHeading};
use crate::portfolio::Skills as SkillSet;

#[component]
pub fn Skills(skills: &'static SkillSet) -> impl IntoView {
    view! {
        <Reveal id="skills" class="py-24 max-w-6xl mx-auto px-6">
            <SectionHeading number="02" title="Skills" />
            <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                {skills
                    .categories()
                    .into_iter()
                    .map(|category| view! {
                        <div class="glass-card rounded-xl p-6">
                            <h3 class="text-lg font-semibold text-slate-900 dark:text-slate-100 mb-4">
                                {category.title}
                            </h3>
                            <ul class="flex flex-wrap gap-2">
                                {category
                                    .skills
                                    .iter()
                                    .map(|skill| view! {
                                        <li class="px-3 py-1 rounded-full text-xs font-mono bg-teal-600/10 text-teal-700 dark:text-teal-300">
                                            {skill.as_str()}
                                        </li>
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Reveal>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(skills: &'static SkillSet) -> String {
        Owner::new().with(|| view! { <Skills skills=skills /> }.to_html())
    }

    #[test]
    fn empty_categories_still_render_cards() {
        let skills: &'static SkillSet = Box::leak(Box::default());
        let html = render(skills);
        for category in skills.categories() {
            let title = category.title.replace('&', "&amp;");
            assert!(html.contains(&title), "missing {title}");
        }
        assert!(!html.contains("<li"));
    }

    #[test]
    fn chips_for_listed_skills() {
        let skills: &'static SkillSet = Box::leak(Box::new(SkillSet {
            backend: vec!["Rust".into(), "Go".into()],
            ..SkillSet::default()
        }));
        let html = render(skills);
        assert_eq!(html.matches("<li").count(), 2);
    }
}
