use leptos::{either::Either, prelude::*};

use crate::{
    content::Profile,
    motion::{CODE_SHAPE, CODE_SHAPE_STEP_MS, HERO_CODE, HERO_TEXT},
};

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    // the hero is above the fold, so it animates as soon as it hydrates
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));

    view! {
        <section class="hero relative min-h-screen overflow-hidden text-white">
            <div class="relative z-10 mx-auto flex h-full min-h-screen max-w-7xl flex-row items-center justify-between px-4 py-20">
                <div class="w-[45%]" style=move || HERO_TEXT.delayed(200).style(mounted.get())>
                    <h1
                        class="mb-4 bg-gradient-to-r from-[#7928CA] to-[#FF0080] bg-clip-text text-4xl md:text-7xl font-bold text-transparent"
                        style=move || HERO_TEXT.delayed(400).style(mounted.get())
                    >
                        {profile.name.as_str()}
                    </h1>
                    <p class="text-2xl" style=move || HERO_TEXT.delayed(600).style(mounted.get())>
                        {profile.tagline.as_str()}
                    </p>
                </div>
                <div class="w-1/2" style=move || HERO_CODE.style(mounted.get())>
                    <div class="overflow-hidden rounded-xl bg-white/5 p-4 shadow-[0_0_20px_rgba(0,0,0,0.2)] backdrop-blur-md">
                        <CodeAnimation mounted />
                    </div>
                </div>
            </div>
            <div class="hero-glow hero-glow-purple" aria-hidden="true"></div>
            <div class="hero-glow hero-glow-pink" aria-hidden="true"></div>
        </section>
    }
}

mod palette {
    pub const BACKGROUND: &str = "#1e1e1e";
    pub const TEXT: &str = "#d4d4d4";
    pub const KEYWORD: &str = "#569cd6";
    pub const STRING: &str = "#ce9178";
    pub const COMMENT: &str = "#6a9955";
    pub const FUNCTION: &str = "#dcdcaa";
    pub const OPERATOR: &str = "#d4d4d4";
}

#[derive(Debug, Clone, Copy)]
enum Shape {
    Bar {
        x: u16,
        y: u16,
        width: u16,
        color: &'static str,
        outlined: bool,
    },
    Dot {
        cx: u16,
        cy: u16,
        color: &'static str,
    },
}

const fn bar(x: u16, y: u16, width: u16, color: &'static str) -> Shape {
    Shape::Bar {
        x,
        y,
        width,
        color,
        outlined: false,
    }
}

const fn dot(cx: u16, cy: u16) -> Shape {
    Shape::Dot {
        cx,
        cy,
        color: palette::OPERATOR,
    }
}

const BAR_HEIGHT: u16 = 15;
const DOT_RADIUS: u16 = 5;

// Abstract "source code": each line is a run of token bars and operator dots.
const SHAPES: [Shape; 23] = {
    use palette::*;
    [
        bar(20, 50, 120, KEYWORD),
        dot(150, 57),
        bar(165, 50, 180, STRING),
        bar(355, 50, 140, FUNCTION),
        dot(505, 57),
        bar(20, 80, 240, KEYWORD),
        bar(270, 80, 15, OPERATOR),
        dot(295, 87),
        dot(20, 117),
        bar(35, 110, 160, TEXT),
        bar(20, 140, 120, KEYWORD),
        bar(150, 140, 15, OPERATOR),
        Shape::Bar {
            x: 175,
            y: 140,
            width: 180,
            color: FUNCTION,
            outlined: true,
        },
        bar(20, 170, 200, KEYWORD),
        dot(230, 177),
        bar(245, 170, 280, STRING),
        bar(20, 200, 140, TEXT),
        bar(170, 200, 160, TEXT),
        bar(340, 200, 120, TEXT),
        bar(20, 230, 15, OPERATOR),
        bar(45, 230, 200, COMMENT),
        bar(255, 230, 220, COMMENT),
        bar(485, 230, 15, OPERATOR),
    ]
};

#[component]
fn CodeAnimation(mounted: ReadSignal<bool>) -> impl IntoView {
    let shapes = SHAPES
        .into_iter()
        .enumerate()
        .map(|(i, shape)| {
            let style = move || CODE_SHAPE.staggered(i, CODE_SHAPE_STEP_MS).style(mounted.get());
            match shape {
                Shape::Bar {
                    x,
                    y,
                    width,
                    color,
                    outlined,
                } => Either::Left(view! {
                    <rect
                        class="code-shape"
                        x=x.to_string()
                        y=y.to_string()
                        width=width.to_string()
                        height=BAR_HEIGHT.to_string()
                        fill=if outlined { "none" } else { color }
                        stroke=outlined.then_some(color)
                        stroke-width=outlined.then_some("2")
                        style=style
                    />
                }),
                Shape::Dot { cx, cy, color } => Either::Right(view! {
                    <circle
                        class="code-shape"
                        cx=cx.to_string()
                        cy=cy.to_string()
                        r=DOT_RADIUS.to_string()
                        fill=color
                        style=style
                    />
                }),
            }
        })
        .collect_view();

    view! {
        <div
            class="relative min-h-[300px] w-full overflow-hidden rounded-md"
            style=format!("background: {};", palette::BACKGROUND)
        >
            <svg width="100%" height="100%" viewBox="0 0 520 270" preserveAspectRatio="xMidYMid meet">
                <circle cx="20" cy="20" r="6" fill="#ff5f56" />
                <circle cx="40" cy="20" r="6" fill="#ffbd2e" />
                <circle cx="60" cy="20" r="6" fill="#27c93f" />
                {shapes}
            </svg>
        </div>
    }
}
