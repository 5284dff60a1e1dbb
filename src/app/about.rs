use leptos::{html, prelude::*};

use crate::{content::Profile, motion::SECTION_ITEM, nav::Section};

use super::reveal::use_reveal_on_scroll;

#[component]
pub fn About(profile: &'static Profile, anchor: NodeRef<html::Section>) -> impl IntoView {
    let visible = use_reveal_on_scroll(anchor);
    let item = move |delay| move || SECTION_ITEM.delayed(delay).style(visible.get());

    view! {
        <section
            node_ref=anchor
            id=Section::About.anchor_id()
            class="about relative z-[1] overflow-hidden py-32 text-gray-800"
        >
            <div class="blob blob-green blob-float-slow" aria-hidden="true"></div>
            <div class="blob blob-indigo blob-float-slower" aria-hidden="true"></div>

            <div class="relative z-[2] mx-auto max-w-3xl px-4">
                <div
                    class="flex flex-col items-center justify-center rounded-2xl bg-white/70 p-12 shadow-xl backdrop-blur-md"
                    style=item(200)
                >
                    <h2 class="mb-6 bg-gradient-to-r from-[#4facfe] to-[#00f2fe] bg-clip-text text-4xl md:text-5xl font-bold text-transparent">
                        {profile.about_heading.as_str()}
                    </h2>
                    <p class="max-w-2xl text-center text-lg md:text-xl leading-relaxed">
                        {profile.about.as_str()}
                    </p>
                </div>
            </div>
        </section>
    }
}
