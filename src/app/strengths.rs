use leptos::{html, prelude::*};

use crate::{
    content::{Profile, Strength, StrengthIcon},
    motion::{SECTION_HEADING, STRENGTH_CARD},
    nav::Section,
};

use super::reveal::use_reveal_on_scroll;

const CARD_STAGGER_MS: u32 = 200;

#[component]
pub fn Strengths(
    profile: &'static Profile,
    strengths: &'static [Strength],
    anchor: NodeRef<html::Section>,
) -> impl IntoView {
    let visible = use_reveal_on_scroll(anchor);

    view! {
        <section
            node_ref=anchor
            id=Section::Strengths.anchor_id()
            class="strengths relative overflow-hidden py-20 md:py-32"
        >
            <div class="strengths-pattern" aria-hidden="true"></div>
            <div class="relative mx-auto max-w-7xl px-4">
                <div
                    class="mb-16 flex flex-col items-center"
                    style=move || SECTION_HEADING.style(visible.get())
                >
                    <h2 class="mb-4 text-center text-4xl md:text-5xl font-bold text-gray-800">
                        {profile.strengths_heading.as_str()}
                    </h2>
                    <p class="max-w-3xl text-center text-xl">{profile.strengths_intro.as_str()}</p>
                </div>
                <div class="flex flex-col gap-8">
                    {strengths
                        .iter()
                        .enumerate()
                        .map(|(index, strength)| view! { <StrengthCard strength index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Each card watches itself, so long lists animate as they are reached.
#[component]
fn StrengthCard(strength: &'static Strength, index: usize) -> impl IntoView {
    let card_ref = NodeRef::<html::Article>::new();
    let visible = use_reveal_on_scroll(card_ref);
    let reveal = STRENGTH_CARD.staggered(index, CARD_STAGGER_MS);

    view! {
        <article
            node_ref=card_ref
            class="strength-card mx-auto w-full max-w-[1000px] rounded-2xl bg-white/80 p-8 shadow-xl backdrop-blur-md"
            style=move || reveal.style(visible.get())
        >
            <div class="mb-4 flex items-center">
                <span class="mr-4 text-3xl text-blue-500" aria-hidden="true">
                    {strength_icon(strength.icon)}
                </span>
                <h3 class="text-2xl font-bold">{strength.title.as_str()}</h3>
            </div>
            <p class="text-md leading-relaxed">{strength.description.as_str()}</p>
        </article>
    }
}

fn strength_icon(icon: StrengthIcon) -> &'static str {
    match icon {
        StrengthIcon::Code => "💻",
        StrengthIcon::Learning => "🎓",
        StrengthIcon::Puzzle => "🧩",
    }
}
