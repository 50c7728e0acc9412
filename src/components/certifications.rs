use leptos::prelude::*;

use super::icons::{AwardIcon, CalendarIcon, ExternalLinkIcon};
use super::{Reveal, SectionHeading};
use crate::portfolio::Certification;

pub const NO_CERTIFICATIONS: &str = "No certifications listed yet.";

#[component]
fn CertificationCard(certification: &'static Certification) -> impl IntoView {
    view! {
        <li class="certification-card glass-card rounded-xl p-6 flex flex-col gap-3">
            <div class="flex items-start gap-3">
                <span class="text-teal-600 dark:text-teal-400"><AwardIcon /></span>
                <div>
                    <h3 class="font-semibold text-slate-900 dark:text-slate-100">
                        {certification.name.as_str()}
                    </h3>
                    <p class="text-sm text-slate-600 dark:text-slate-300">
                        {certification.issuer.as_str()}
                    </p>
                </div>
            </div>
            <p class="flex items-center gap-2 text-sm text-slate-500">
                <CalendarIcon />
                {certification.date.as_str()}
            </p>
            {certification.credential_id.as_deref().map(|id| view! {
                <span class="self-start px-2 py-1 rounded text-xs font-mono bg-slate-100 dark:bg-slate-800 text-slate-700 dark:text-slate-300">
                    "ID: " {id}
                </span>
            })}
            {certification.url.as_deref().map(|url| view! {
                <a
                    href=url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center gap-1 text-sm text-teal-600 dark:text-teal-400 hover:underline"
                >
                    "View credential"
                    <ExternalLinkIcon size=14 />
                </a>
            })}
        </li>
    }
}

#[component]
pub fn Certifications(certifications: &'static [Certification]) -> impl IntoView {
    view! {
        <Reveal id="certifications" class="py-24 max-w-6xl mx-auto px-6">
            <SectionHeading number="05" title="Certifications" />
            {if certifications.is_empty() {
                view! { <p class="text-center text-slate-500">{NO_CERTIFICATIONS}</p> }.into_any()
            } else {
                view! {
                    <ul class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {certifications
                            .iter()
                            .map(|certification| view! { <CertificationCard certification=certification /> })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                .into_any()
            }}
        </Reveal>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(certifications: &'static [Certification]) -> String {
        Owner::new().with(|| view! { <Certifications certifications=certifications /> }.to_html())
    }

    #[test]
    fn empty_list_renders_empty_state() {
        let html = render(&[]);
        assert!(html.contains(NO_CERTIFICATIONS));
        assert!(!html.contains("certification-card"));
    }

    #[test]
    fn optional_fields_are_omitted() {
        let certs: &'static [Certification] = Box::leak(Box::new([Certification {
            id: 1,
            name: "Cloud Practitioner".into(),
            issuer: "Example Cloud".into(),
            date: "2024".into(),
            credential_id: None,
            url: None,
        }]));
        let html = render(certs);
        assert!(html.contains("Cloud Practitioner"));
        assert!(!html.contains("ID: "));
        assert!(!html.contains("View credential"));
    }

    #[test]
    fn credential_badge_and_link_when_present() {
        let certs: &'static [Certification] = Box::leak(Box::new([Certification {
            id: 2,
            name: "Kubernetes Administrator".into(),
            issuer: "Example Foundation".into(),
            date: "2023".into(),
            credential_id: Some("ABC-123".into()),
            url: Some("https://example.com/cert".into()),
        }]));
        let html = render(certs);
        assert!(html.contains("ABC-123"));
        assert!(html.contains("https://example.com/cert"));
    }
}
