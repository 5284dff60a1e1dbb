mod about;
mod career;
mod header;
mod hero;
mod reveal;
mod scroll_controller;
mod skills;
mod strengths;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    content::{self, or_empty},
    nav::Section,
    scroll::ScrollConfig,
};

use about::About;
use career::Career;
use header::{Header, ScrollTopButton};
use hero::Hero;
use scroll_controller::use_scroll_controller;
use skills::Skills;
use strengths::Strengths;

pub use scroll_controller::{use_scroll, ScrollController};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ja">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/okuyama-portfolio.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-950">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(use_scroll_controller(ScrollConfig::default()));

    let profile = content::profile().ok();
    let name = profile.map(|p| p.name.as_str()).unwrap_or_default();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=profile.map(|p| p.tagline.as_str()).unwrap_or_default() />

        <Router>
            <Header name />
            <main class="flex flex-col">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <ScrollTopButton />
            <Footer name />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let profile = match content::profile() {
        Ok(profile) => profile,
        Err(e) => {
            log::error!("{e}");
            return view! { <p class="p-8 text-center text-white">"Content unavailable."</p> }
                .into_any();
        }
    };
    let scroll = use_scroll();

    view! {
        <Title text="Portfolio" />
        <Hero profile />
        <About profile anchor=scroll.anchor(Section::About) />
        <Skills
            heading=profile.skills_heading.as_str()
            categories=or_empty(content::skills(), &[])
            anchor=scroll.anchor(Section::Skills)
        />
        <Career
            heading=profile.career_heading.as_str()
            entries=or_empty(content::career(), &[])
            anchor=scroll.anchor(Section::Career)
        />
        <Strengths
            profile
            strengths=or_empty(content::strengths(), &[])
            anchor=scroll.anchor(Section::Strengths)
        />
    }
    .into_any()
}

#[component]
fn Footer(name: &'static str) -> impl IntoView {
    view! {
        <footer class="bg-gray-900 py-6 text-center text-sm text-gray-400">
            {format!("© {BUILD_YEAR} {name}")}
        </footer>
    }
}
