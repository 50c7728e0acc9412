use leptos::prelude::*;

use super::icons::DownloadIcon;
use super::ParticleBackground;
use crate::portfolio::{Personal, Skills};

/// Lines of the decorative code window: a small struct literal describing
/// the developer.
fn code_lines(personal: &Personal, skills: &Skills) -> Vec<String> {
    let stack = skills
        .backend
        .iter()
        .chain(&skills.frontend)
        .take(4)
        .map(|s| format!("\"{s}\""))
        .collect::<Vec<_>>()
        .join(", ");
    vec![
        "let developer = Developer {".to_string(),
        format!("    name: \"{}\",", personal.name),
        format!("    location: \"{}\",", personal.location),
        format!("    stack: [{stack}],"),
        "    available: true,".to_string(),
        "};".to_string(),
    ]
}

#[component]
pub fn Hero(personal: &'static Personal, skills: &'static Skills) -> impl IntoView {
    let lines = code_lines(personal, skills);

    view! {
        <section id="home" class="relative min-h-screen flex items-center overflow-hidden">
            <ParticleBackground />
            <div class="relative z-10 max-w-6xl mx-auto px-6 grid lg:grid-cols-2 gap-12 items-center">
                <div>
                    <p class="font-mono text-teal-600 dark:text-teal-400 mb-4">"Hi, my name is"</p>
                    <h1 class="text-5xl md:text-7xl font-bold text-slate-900 dark:text-slate-100 mb-4">
                        {personal.name.as_str()}
                    </h1>
                    <h2 class="text-2xl md:text-4xl font-semibold text-slate-500 dark:text-slate-400 mb-6">
                        "I build things for the web."
                    </h2>
                    <p class="max-w-xl text-slate-600 dark:text-slate-300 leading-relaxed mb-10">
                        {personal.summary.as_str()}
                    </p>
                    <div class="flex flex-wrap gap-4">
                        <a
                            href="/data/cv.pdf"
                            download
                            class="inline-flex items-center gap-2 px-6 py-3 rounded-lg bg-teal-600 text-white hover:bg-teal-700 transition-colors"
                        >
                            <DownloadIcon size=18 />
                            "Download CV"
                        </a>
                        <a
                            href="#projects"
                            class="px-6 py-3 rounded-lg border border-teal-600 text-teal-600 dark:border-teal-400 dark:text-teal-400 hover:bg-teal-600/10 transition-colors"
                        >
                            "View Projects"
                        </a>
                        <a
                            href="#contact"
                            class="px-6 py-3 rounded-lg text-slate-700 dark:text-slate-200 hover:text-teal-600 dark:hover:text-teal-400 transition-colors"
                        >
                            "Get in Touch"
                        </a>
                    </div>
                </div>
                <div class="hidden lg:block glass-card rounded-xl overflow-hidden font-mono text-sm">
                    <div class="flex gap-2 px-4 py-3 border-b border-slate-200 dark:border-slate-700">
                        <span class="w-3 h-3 rounded-full bg-red-400"></span>
                        <span class="w-3 h-3 rounded-full bg-yellow-400"></span>
                        <span class="w-3 h-3 rounded-full bg-green-400"></span>
                    </div>
                    <pre class="p-6 text-slate-700 dark:text-slate-300 whitespace-pre-wrap">
                        {lines
                            .into_iter()
                            .map(|line| view! { <code class="block">{line}</code> })
                            .collect::<Vec<_>>()}
                    </pre>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::Social;

    fn personal() -> Personal {
        Personal {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "+1 555 0100".into(),
            location: "Lisbon".into(),
            summary: "Engineer.".into(),
            social: Social::default(),
        }
    }

    #[test]
    fn code_window_names_the_developer() {
        let lines = code_lines(&personal(), &Skills::default());
        assert_eq!(lines[1], "    name: \"Jane Doe\",");
        assert_eq!(lines[3], "    stack: [],");
    }

    #[test]
    fn code_window_lists_at_most_four_skills() {
        let skills = Skills {
            backend: vec!["Rust".into(), "Go".into(), "Java".into()],
            frontend: vec!["React".into(), "Leptos".into()],
            ..Skills::default()
        };
        let lines = code_lines(&personal(), &skills);
        assert_eq!(
            lines[3],
            "    stack: [\"Rust\", \"Go\", \"Java\", \"React\"],"
        );
    }
}
