use leptos::{ev, html, prelude::*};
use leptos_use::{use_document, use_event_listener};

use crate::{
    content::{CareerEntry, CareerKind},
    motion::{CAREER_HEADING, CAREER_ITEM},
    nav::Section,
};

use super::reveal::use_reveal_on_scroll;

const ITEM_STAGGER_MS: u32 = 200;
const LINK_LABEL: &str = "公式サイトを確認";

/// `selected` holds the index of the entry whose detail dialog is open.
#[component]
pub fn Career(
    heading: &'static str,
    entries: &'static [CareerEntry],
    anchor: NodeRef<html::Section>,
    #[prop(default = RwSignal::new(None))] selected: RwSignal<Option<usize>>,
) -> impl IntoView {
    let visible = use_reveal_on_scroll(anchor);
    let close = close_detail(selected);

    view! {
        <section
            node_ref=anchor
            id=Section::Career.anchor_id()
            class="career relative overflow-hidden py-16 md:py-24"
        >
            <div class="relative z-[1] mx-auto max-w-3xl px-4">
                <div class="mb-10 md:mb-14" style=move || CAREER_HEADING.style(visible.get())>
                    <h2 class="text-center text-4xl md:text-5xl font-bold text-purple-900 drop-shadow">
                        {heading}
                    </h2>
                </div>
                <ol class="flex flex-col">
                    {entries
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            let is_last = index + 1 == entries.len();
                            view! {
                                <CareerItem
                                    entry
                                    index
                                    is_last
                                    visible
                                    on_open=Callback::new(move |_: ()| selected.set(Some(index)))
                                />
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
            {move || {
                selected
                    .get()
                    .and_then(|i| entries.get(i))
                    .map(|entry| view! { <CareerDetail entry on_close=close /> })
            }}
        </section>
    }
}

#[component]
fn CareerItem(
    entry: &'static CareerEntry,
    index: usize,
    is_last: bool,
    visible: Signal<bool>,
    on_open: Callback<()>,
) -> impl IntoView {
    let reveal = CAREER_ITEM.staggered(index, ITEM_STAGGER_MS);

    view! {
        <li style=move || reveal.style(visible.get())>
            <button
                type="button"
                aria-haspopup="dialog"
                class="career-item group flex w-full items-center rounded-xl bg-purple-50 p-6 text-left shadow-sm transition-all duration-300 hover:bg-gray-50 active:scale-[0.98]"
                on:click=move |_| on_open.run(())
            >
                <span class="mr-4 text-3xl text-purple-500" aria-hidden="true">
                    {kind_icon(entry.kind)}
                </span>
                <span class="flex flex-1 flex-col items-start gap-1">
                    <span class="text-lg font-semibold text-purple-700">{entry.title.as_str()}</span>
                    <span class="text-sm text-purple-600">{entry.subtitle.as_str()}</span>
                    <span class="text-xs text-gray-500">{entry.period.as_str()}</span>
                </span>
                <span class="-translate-x-2.5 text-gray-400 opacity-60 transition-all duration-200 group-hover:translate-x-0 group-hover:opacity-100">
                    "›"
                </span>
            </button>
            {(!is_last)
                .then(|| {
                    view! {
                        <div class="my-4 text-center text-2xl text-gray-400 animate-bounce" aria-hidden="true">
                            "⌄"
                        </div>
                    }
                })}
        </li>
    }
}

fn close_detail(selected: RwSignal<Option<usize>>) -> Callback<()> {
    Callback::new(move |_: ()| selected.set(None))
}

fn is_close_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

fn kind_icon(kind: CareerKind) -> &'static str {
    match kind {
        CareerKind::School => "🎓",
        CareerKind::Company => "🏢",
    }
}

/// Modal with the full description of one career entry.
#[component]
pub fn CareerDetail(entry: &'static CareerEntry, on_close: Callback<()>) -> impl IntoView {
    let _ = use_event_listener(use_document(), ev::keydown, move |e| {
        if is_close_key(&e.key()) {
            on_close.run(());
        }
    });

    view! {
        <div
            class="fixed inset-0 z-[3000] flex items-center justify-center bg-black/40 backdrop-blur-[5px]"
            on:click=move |_| on_close.run(())
        >
            <div
                role="dialog"
                aria-modal="true"
                aria-labelledby="career-detail-title"
                class="relative m-4 w-full max-w-xl overflow-hidden rounded-xl bg-white text-gray-900"
                on:click=|e| e.stop_propagation()
            >
                <div class="border-b border-gray-200 p-6">
                    <h3 id="career-detail-title" class="mb-2 text-2xl font-bold">
                        {entry.title.as_str()}
                    </h3>
                    <p class="text-md font-medium">{entry.subtitle.as_str()}</p>
                    <p class="mt-1 text-sm text-gray-500">{entry.period.as_str()}</p>
                </div>
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute right-3 top-3 rounded-md px-2 text-xl text-gray-500 hover:bg-gray-100"
                    on:click=move |_| on_close.run(())
                >
                    "×"
                </button>
                <div class="p-6">
                    <p class="mb-6 leading-relaxed">{entry.description.as_str()}</p>
                    {entry
                        .link
                        .as_deref()
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex w-full items-center justify-center gap-2 rounded-md bg-blue-500 px-4 py-2 font-medium text-white hover:bg-blue-600"
                                >
                                    {LINK_LABEL}
                                    <span aria-hidden="true">"↗"</span>
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use std::sync::LazyLock;

    static WITH_LINK: LazyLock<CareerEntry> = LazyLock::new(|| CareerEntry {
        kind: CareerKind::Company,
        title: "Acme".to_string(),
        subtitle: "Intern".to_string(),
        period: "2021".to_string(),
        description: "Built things".to_string(),
        link: Some("https://acme.example".to_string()),
    });

    static WITHOUT_LINK: LazyLock<CareerEntry> = LazyLock::new(|| CareerEntry {
        link: None,
        title: "Quiet School".to_string(),
        ..WITH_LINK.clone()
    });

    fn render_detail(entry: &'static CareerEntry) -> String {
        let owner = Owner::new();
        owner.with(|| {
            view! { <CareerDetail entry on_close=Callback::new(|_: ()| {}) /> }.to_html()
        })
    }

    #[test]
    fn test_detail_shows_entry() {
        let html = render_detail(&WITH_LINK);
        assert!(html.contains("Acme"));
        assert!(html.contains("Intern"));
        assert!(html.contains("2021"));
        assert!(html.contains("Built things"));
        assert!(html.contains("role=\"dialog\""));
    }

    #[test]
    fn test_detail_link_opens_new_context() {
        let html = render_detail(&WITH_LINK);
        assert!(html.contains("href=\"https://acme.example\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
    }

    #[test]
    fn test_detail_without_link_omits_action() {
        let html = render_detail(&WITHOUT_LINK);
        assert!(html.contains("Quiet School"));
        assert!(!html.contains("<a"));
        assert!(!html.contains(LINK_LABEL));
    }

    static ENTRIES: LazyLock<Vec<CareerEntry>> =
        LazyLock::new(|| vec![WITH_LINK.clone(), WITHOUT_LINK.clone()]);

    fn render_timeline(selected: RwSignal<Option<usize>>) -> String {
        view! {
            <Career
                heading="Career Journey"
                entries=ENTRIES.as_slice()
                anchor=NodeRef::new()
                selected
            />
        }
        .to_html()
    }

    #[test]
    fn test_closed_timeline_has_no_dialog() {
        let owner = Owner::new();
        let html = owner.with(|| {
            view! { <Career heading="Career Journey" entries=ENTRIES.as_slice() anchor=NodeRef::new() /> }
                .to_html()
        });
        assert!(html.contains("Acme"));
        assert!(html.contains("Quiet School"));
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn test_open_then_close_entry() {
        let owner = Owner::new();
        owner.with(|| {
            let selected = RwSignal::new(None);

            selected.set(Some(1));
            let html = render_timeline(selected);
            let (_, dialog) = html.split_once("role=\"dialog\"").unwrap();
            assert!(dialog.contains("Quiet School"));
            assert!(!dialog.contains("Acme"));
            assert!(!dialog.contains("role=\"dialog\""));
            // entry 1 has no link, so the dialog carries no action
            assert!(!html.contains(LINK_LABEL));

            // Escape, the overlay and the close button all run this callback
            close_detail(selected).run(());
            assert_eq!(selected.get_untracked(), None);
            let html = render_timeline(selected);
            assert!(!html.contains("role=\"dialog\""));
            assert!(html.contains("Quiet School"));
        });
    }

    #[test]
    fn test_switching_entries_shows_one_dialog() {
        let owner = Owner::new();
        owner.with(|| {
            let selected = RwSignal::new(Some(1));
            selected.set(Some(0));
            let html = render_timeline(selected);
            assert_eq!(html.matches("role=\"dialog\"").count(), 1);
            assert!(html.contains(LINK_LABEL));
            assert!(html.contains("href=\"https://acme.example\""));
        });
    }

    #[test]
    fn test_out_of_range_selection_renders_nothing() {
        let owner = Owner::new();
        let html = owner.with(|| render_timeline(RwSignal::new(Some(7))));
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn test_close_keys() {
        assert!(is_close_key("Escape"));
        assert!(is_close_key("Esc"));
        assert!(!is_close_key("Enter"));
        assert!(!is_close_key("e"));
    }
}
