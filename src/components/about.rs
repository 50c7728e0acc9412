use leptos::prelude::*;

use super::icons::{MailIcon, MapPinIcon, PhoneIcon};
use super::{Reveal, SectionHeading};
use crate::portfolio::{Education, Personal};

#[component]
fn InfoCard(label: &'static str, value: String, children: Children) -> impl IntoView {
    view! {
        <div class="glass-card rounded-lg p-4 flex items-center gap-3">
            <span class="text-teal-600 dark:text-teal-400">{children()}</span>
            <div>
                <p class="text-xs uppercase tracking-wide text-slate-500">{label}</p>
                <p class="text-sm text-slate-800 dark:text-slate-200">{value}</p>
            </div>
        </div>
    }
}

#[component]
pub fn About(personal: &'static Personal, education: &'static [Education]) -> impl IntoView {
    view! {
        <Reveal id="about" class="py-24 max-w-6xl mx-auto px-6">
            <SectionHeading number="01" title="About Me" />
            <div class="grid md:grid-cols-3 gap-12">
                <div class="md:col-span-2 space-y-8">
                    <p class="text-slate-600 dark:text-slate-300 leading-relaxed">
                        {personal.summary.as_str()}
                    </p>
                    <div class="grid sm:grid-cols-3 gap-4">
                        <InfoCard label="Location" value=personal.location.clone()>
                            <MapPinIcon />
                        </InfoCard>
                        <InfoCard label="Email" value=personal.email.clone()>
                            <MailIcon />
                        </InfoCard>
                        <InfoCard label="Phone" value=personal.phone.clone()>
                            <PhoneIcon />
                        </InfoCard>
                    </div>
                    {(!education.is_empty()).then(|| view! {
                        <div>
                            <h3 class="text-xl font-semibold text-slate-900 dark:text-slate-100 mb-4">
                                "Education"
                            </h3>
                            <ul class="space-y-4">
                                {education
                                    .iter()
                                    .map(|edu| view! {
                                        <li class="glass-card rounded-lg p-5">
                                            <p class="font-semibold text-slate-900 dark:text-slate-100">
                                                {edu.degree.as_str()}
                                            </p>
                                            <p class="text-teal-600 dark:text-teal-400">
                                                {edu.institution.as_str()}
                                            </p>
                                            <p class="text-sm text-slate-500">
                                                {edu.duration.as_str()} " · " {edu.location.as_str()}
                                            </p>
                                            {edu.grade.as_deref().map(|grade| view! {
                                                <p class="text-sm text-slate-600 dark:text-slate-300 mt-1">
                                                    "Grade: " {grade}
                                                </p>
                                            })}
                                        </li>
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </div>
                    })}
                </div>
                <div class="relative mx-auto w-64 h-64">
                    <div class="absolute inset-0 translate-x-4 translate-y-4 rounded-lg border-2 border-teal-600 dark:border-teal-400"></div>
                    <img
                        src="/profile.jpg"
                        alt=personal.name.as_str()
                        class="relative w-64 h-64 object-cover rounded-lg grayscale hover:grayscale-0 transition"
                    />
                </div>
            </div>
        </Reveal>
    }
}
