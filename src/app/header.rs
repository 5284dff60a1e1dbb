use leptos::{html, prelude::*};
use leptos_use::on_click_outside;

use crate::nav::Section;

use super::scroll_controller::use_scroll;

#[component]
pub fn Header(name: &'static str) -> impl IntoView {
    let scroll = use_scroll();
    let (menu_open, set_menu_open) = signal(false);
    let menu_ref = NodeRef::<html::Div>::new();

    let _ = on_click_outside(menu_ref, move |_| {
        if menu_open.get_untracked() {
            set_menu_open.set(false);
        }
    });

    let header_class = move || {
        if scroll.header_visible.get() {
            "site-header translate-y-0"
        } else {
            "site-header -translate-y-full"
        }
    };

    view! {
        <header class=header_class>
            <div class="mx-auto max-w-7xl px-4 md:px-8 py-4">
                <div class="flex items-center justify-between">
                    <span class="text-lg md:text-xl font-bold text-white">{name}</span>
                    <div node_ref=menu_ref class="relative">
                        <button
                            type="button"
                            aria-label="Options"
                            aria-haspopup="menu"
                            aria-expanded=move || menu_open.get().to_string()
                            class="rounded-md border border-white/40 px-3 py-2 text-white hover:bg-white/20"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <MenuIcon />
                        </button>
                        <Show when=move || menu_open.get()>
                            <ul
                                role="menu"
                                class="absolute right-0 mt-2 w-44 rounded-md border border-gray-700 bg-gray-900 py-1 shadow-lg"
                            >
                                {Section::ALL
                                    .into_iter()
                                    .map(|section| {
                                        view! {
                                            <li role="none">
                                                <button
                                                    type="button"
                                                    role="menuitem"
                                                    class="w-full px-4 py-2 text-left text-white hover:bg-gray-800"
                                                    on:click=move |_| {
                                                        set_menu_open.set(false);
                                                        scroll.scroll_to_section(section.label());
                                                    }
                                                >
                                                    {section.label()}
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </Show>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let scroll = use_scroll();

    view! {
        <Show when=move || scroll.scroll_top_visible.get()>
            <button
                type="button"
                aria-label="Scroll to top"
                class="fixed bottom-4 right-4 z-[2000] flex h-12 w-12 items-center justify-center rounded-full bg-gray-800 text-white shadow-lg hover:bg-gray-700"
                on:click=move |_| scroll.scroll_to_top()
            >
                <svg class="h-5 w-5" fill="none" stroke="currentColor" stroke-width="3" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" d="M5 15l7-7 7 7" />
                </svg>
            </button>
        </Show>
    }
}

#[component]
fn MenuIcon() -> impl IntoView {
    view! {
        <svg class="h-5 w-5" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
            <path stroke-linecap="round" d="M4 6h16M4 12h16M4 18h16" />
        </svg>
    }
}
