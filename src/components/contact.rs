use std::time::Duration;

use leptos::{ev, prelude::*};

use super::icons::{GithubIcon, LinkedinIcon, MailIcon, SendIcon};
use super::{Reveal, SectionHeading};
use crate::contact::ContactForm;
use crate::portfolio::Personal;

const RESET_AFTER: Duration = Duration::from_secs(2);
const OPENING: &str = "Opening your email client...";

#[component]
fn Field(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let class = "w-full rounded-lg px-4 py-3 bg-white/70 dark:bg-slate-800/70 border border-slate-200 dark:border-slate-700 text-slate-900 dark:text-slate-100 focus:outline-none focus:ring-2 focus:ring-teal-500";
    let input = if multiline {
        view! {
            <textarea
                id=name
                name=name
                rows="5"
                required
                class=class
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=name
                name=name
                type={if name == "email" { "email" } else { "text" }}
                required
                class=class
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <div>
            <label for=name class="block text-sm font-medium text-slate-700 dark:text-slate-300 mb-2">
                {label}
            </label>
            {input}
        </div>
    }
}

#[component]
pub fn Contact(personal: &'static Personal) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(err) = form.validate() {
            status.set(Some(err.to_string()));
            return;
        }
        if let Err(err) = window().location().set_href(&form.mailto_uri(&personal.email)) {
            leptos::logging::warn!("could not open mail client: {err:?}");
            return;
        }
        status.set(Some(OPENING.to_string()));
        set_timeout(
            move || {
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                status.set(None);
            },
            RESET_AFTER,
        );
    };

    view! {
        <Reveal id="contact" class="py-24 max-w-6xl mx-auto px-6">
            <SectionHeading number="06" title="Get In Touch" />
            <div class="grid md:grid-cols-2 gap-12">
                <div class="space-y-6">
                    <p class="text-slate-600 dark:text-slate-300 leading-relaxed">
                        "My inbox is always open. Whether you have a question or just want to say hi, I'll get back to you."
                    </p>
                    <a
                        href=format!("mailto:{}", personal.email)
                        class="glass-card rounded-lg p-4 flex items-center gap-3 text-slate-800 dark:text-slate-200 hover:text-teal-600"
                    >
                        <span class="text-teal-600 dark:text-teal-400"><MailIcon /></span>
                        {personal.email.as_str()}
                    </a>
                    <div class="flex gap-4 text-slate-500">
                        {personal.social.github.clone().map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer" aria-label="GitHub" class="hover:text-teal-600">
                                <GithubIcon size=24 />
                            </a>
                        })}
                        {personal.social.linkedin.clone().map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer" aria-label="LinkedIn" class="hover:text-teal-600">
                                <LinkedinIcon size=24 />
                            </a>
                        })}
                    </div>
                </div>
                <form class="glass-card rounded-xl p-6 space-y-4" on:submit=on_submit>
                    <Field label="Name" name="name" value=name />
                    <Field label="Email" name="email" value=email />
                    <Field label="Message" name="message" value=message multiline=true />
                    <button
                        type="submit"
                        class="w-full inline-flex items-center justify-center gap-2 px-6 py-3 rounded-lg bg-teal-600 text-white hover:bg-teal-700 transition-colors"
                    >
                        <SendIcon size=18 />
                        "Send Message"
                    </button>
                    {move || status.get().map(|text| view! {
                        <p class="text-sm text-center text-teal-700 dark:text-teal-300" role="status">{text}</p>
                    })}
                </form>
            </div>
        </Reveal>
    }
}
