use leptos::prelude::*;
use leptos_use::{
    core::IntoElementsMaybeSignal, js, use_intersection_observer_with_options, use_supported,
    UseIntersectionObserverOptions,
};

use crate::visibility::{VisibilityLatch, DEFAULT_THRESHOLD};

/// Latches to `true` the first time `target` is at least 10% on screen.
pub fn use_reveal_on_scroll<El, M>(target: El) -> Signal<bool>
where
    El: IntoElementsMaybeSignal<web_sys::Element, M>,
{
    use_reveal_on_scroll_with_threshold(target, DEFAULT_THRESHOLD)
}

pub fn use_reveal_on_scroll_with_threshold<El, M>(target: El, threshold: f64) -> Signal<bool>
where
    El: IntoElementsMaybeSignal<web_sys::Element, M>,
{
    let mut initial = VisibilityLatch::new(threshold);
    // always false on the server, where the latch opens but no effect runs
    let is_supported = use_supported(|| js!("IntersectionObserver" in &window()));
    let observe = initial.start(is_supported.get_untracked());

    let latch = StoredValue::new(initial);
    let (visible, set_visible) = signal(false);

    if observe {
        use_intersection_observer_with_options(
            target,
            move |entries, observer| {
                let latched = entries.iter().any(|entry| {
                    latch
                        .try_update_value(|l| {
                            l.observe(entry.is_intersecting(), entry.intersection_ratio())
                        })
                        .unwrap_or(false)
                });
                if latched {
                    set_visible.set(true);
                    // nothing left to watch for
                    observer.disconnect();
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
        );
    } else {
        // effects only run in the browser, so SSR output keeps the hidden pose
        Effect::new(move |_| {
            if latch.try_with_value(|l| l.is_visible()).unwrap_or(false) {
                log::debug!("IntersectionObserver unavailable, showing content");
                set_visible.set(true);
            }
        });
    }

    visible.into()
}
