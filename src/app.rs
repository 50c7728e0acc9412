use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::{
    About, Certifications, Contact, Experience, Footer, Header, Hero, Projects, Sidebar, Skills,
};
use crate::portfolio;
use crate::theme::provide_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let theme = provide_theme();

    view! {
        // id=leptos lets cargo-leptos hot-reload the stylesheet
        <Stylesheet id="leptos" href="/pkg/portfolio-site.css"/>

        <div class:dark=move || theme.mode.get().is_dark()>
            <div class="min-h-screen bg-slate-50 dark:bg-slate-950 text-slate-900 dark:text-slate-100 transition-colors duration-500">
                <Router>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                    </Routes>
                </Router>
            </div>
        </div>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let portfolio = match portfolio::embedded() {
        Ok(portfolio) => portfolio,
        Err(err) => {
            return view! {
                <Title text="Portfolio unavailable"/>
                <main class="min-h-screen flex items-center justify-center px-6">
                    <p class="text-center text-slate-500">
                        "The portfolio could not be loaded: " {err.to_string()}
                    </p>
                </main>
            }
            .into_any();
        }
    };
    let personal = &portfolio.personal;

    view! {
        <Title text=format!("{} | Portfolio", personal.name)/>
        <Meta name="description" content=personal.summary.clone()/>
        <Header name=personal.name.as_str()/>
        <Sidebar personal=personal/>
        <main>
            <Hero personal=personal skills={&portfolio.skills}/>
            <About personal=personal education={&portfolio.education}/>
            <Skills skills={&portfolio.skills}/>
            <Experience entries={&portfolio.experience}/>
            <Projects portfolio=portfolio/>
            <Certifications certifications={&portfolio.certifications}/>
            <Contact personal=personal/>
        </main>
        <Footer personal=personal/>
    }
    .into_any()
}
