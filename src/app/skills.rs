use leptos::{html, prelude::*};

use crate::{
    content::SkillCategory,
    motion::{SECTION_HEADING, SKILL_CATEGORY, SKILL_ICON},
    nav::Section,
};

use super::reveal::use_reveal_on_scroll;

const CATEGORY_STAGGER_MS: u32 = 200;
const ICON_STAGGER_MS: u32 = 100;

#[component]
pub fn Skills(
    heading: &'static str,
    categories: &'static [SkillCategory],
    anchor: NodeRef<html::Section>,
) -> impl IntoView {
    let visible = use_reveal_on_scroll(anchor);

    view! {
        <section
            node_ref=anchor
            id=Section::Skills.anchor_id()
            class="skills relative overflow-hidden py-24 text-white"
        >
            <div class="mx-auto flex max-w-7xl flex-col items-center gap-12 px-4">
                <h2
                    class="mb-8 bg-gradient-to-r from-[#4facfe] to-[#00f2fe] bg-clip-text text-center text-4xl md:text-5xl font-bold text-transparent"
                    style=move || SECTION_HEADING.style(visible.get())
                >
                    {heading}
                </h2>
                <div class="grid w-full grid-cols-1 gap-8 lg:grid-cols-2">
                    {categories
                        .iter()
                        .enumerate()
                        .map(|(index, category)| view! { <SkillCard category index visible /> })
                        .collect_view()}
                </div>
            </div>
            <div class="blob blob-green blob-pulse-slow" aria-hidden="true"></div>
            <div class="blob blob-indigo blob-pulse-slower" aria-hidden="true"></div>
        </section>
    }
}

#[component]
fn SkillCard(category: &'static SkillCategory, index: usize, visible: Signal<bool>) -> impl IntoView {
    let reveal = SKILL_CATEGORY.staggered(index, CATEGORY_STAGGER_MS);

    view! {
        <div
            class="overflow-hidden rounded-3xl border border-white/10 bg-white/5 p-6 shadow-lg"
            style=move || reveal.style(visible.get())
        >
            <div class="flex flex-col gap-6">
                <p class="flex items-center text-xl font-bold text-white">
                    <span class="mr-2 text-[1.2em]">{category.emoji.as_str()}</span>
                    {category.title.as_str()}
                </p>
                <div class="flex flex-wrap justify-center">
                    {category
                        .icons
                        .iter()
                        .enumerate()
                        .map(|(i, icon)| {
                            let reveal = SKILL_ICON.staggered(i, ICON_STAGGER_MS);
                            view! {
                                <div
                                    class="skill-icon m-2 flex h-[70px] w-[70px] items-center justify-center overflow-hidden rounded-2xl bg-white/10 shadow-md backdrop-blur-md"
                                    style=move || reveal.style(visible.get())
                                >
                                    <img
                                        src=SkillCategory::icon_url(icon)
                                        alt=icon.as_str()
                                        class="h-[60%] w-[60%] object-contain"
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
