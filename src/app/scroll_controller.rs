use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_window};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::{
    nav::Section,
    scroll::{ScrollConfig, ScrollTracker},
};

/// Anchors for every [`Section`], filled in by the sections' `node_ref`s.
#[derive(Clone, Copy)]
pub struct SectionAnchors {
    about: NodeRef<html::Section>,
    skills: NodeRef<html::Section>,
    career: NodeRef<html::Section>,
    strengths: NodeRef<html::Section>,
}

impl SectionAnchors {
    fn new() -> Self {
        Self {
            about: NodeRef::new(),
            skills: NodeRef::new(),
            career: NodeRef::new(),
            strengths: NodeRef::new(),
        }
    }

    pub fn get(&self, section: Section) -> NodeRef<html::Section> {
        match section {
            Section::About => self.about,
            Section::Skills => self.skills,
            Section::Career => self.career,
            Section::Strengths => self.strengths,
        }
    }
}

/// Page-wide scroll state, provided as context by the page shell.
#[derive(Clone, Copy)]
pub struct ScrollController {
    pub header_visible: ReadSignal<bool>,
    pub scroll_top_visible: ReadSignal<bool>,
    anchors: SectionAnchors,
}

impl ScrollController {
    pub fn anchor(&self, section: Section) -> NodeRef<html::Section> {
        self.anchors.get(section)
    }

    pub fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }

    /// Scrolls the section labelled `name` into view. Unknown names do nothing.
    pub fn scroll_to_section(&self, name: &str) {
        match name.parse::<Section>() {
            Ok(section) => self.scroll_into_view(section),
            Err(e) => log::debug!("ignoring navigation: {e}"),
        }
    }

    pub fn scroll_into_view(&self, section: Section) {
        let Some(el) = self.anchors.get(section).get_untracked() else {
            log::debug!("section {section} is not mounted");
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Tracks the window's scroll position for as long as the calling owner lives.
pub fn use_scroll_controller(config: ScrollConfig) -> ScrollController {
    let tracker = StoredValue::new(ScrollTracker::new(config));
    let (header_visible, set_header_visible) = signal(true);
    let (scroll_top_visible, set_scroll_top_visible) = signal(false);

    // removed by leptos-use when the owner is disposed
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let win = window();
        let offset = win.scroll_y().unwrap_or_default();
        let viewport_height = win
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();

        let Some(update) = tracker.try_update_value(|t| t.sample(offset, viewport_height)) else {
            return;
        };
        // only notify subscribers on change
        if header_visible.get_untracked() != update.header_visible {
            set_header_visible.set(update.header_visible);
        }
        if scroll_top_visible.get_untracked() != update.scroll_top_visible {
            set_scroll_top_visible.set(update.scroll_top_visible);
        }
    });

    ScrollController {
        header_visible,
        scroll_top_visible,
        anchors: SectionAnchors::new(),
    }
}

pub fn use_scroll() -> ScrollController {
    expect_context::<ScrollController>()
}
