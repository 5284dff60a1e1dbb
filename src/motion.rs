//! Entrance animations as plain data.
//!
//! A [`Reveal`] describes where an element starts (its hidden [`Pose`]) and
//! how it transitions to its resting pose. Components turn it into an inline
//! style with [`Reveal::style`] and flip the `visible` flag; the browser's CSS
//! transitions do the rest.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => format!("cubic-bezier({x1}, {y1}, {x2}, {y2})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    fn transform(&self) -> String {
        match (self.translate_y == 0.0, self.scale == 1.0) {
            (true, true) => "none".to_string(),
            (false, true) => format!("translateY({}px)", self.translate_y),
            (true, false) => format!("scale({})", self.scale),
            (false, false) => format!("translateY({}px) scale({})", self.translate_y, self.scale),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub hidden: Pose,
    pub transition: Transition,
}

impl Reveal {
    /// Fade in while rising `distance` px. Negative distances drop in from above.
    pub const fn fade_up(distance: f64, duration_ms: u32, easing: Easing) -> Self {
        Self {
            hidden: Pose {
                opacity: 0.0,
                translate_y: distance,
                scale: 1.0,
            },
            transition: Transition {
                duration_ms,
                delay_ms: 0,
                easing,
            },
        }
    }

    /// Fade in while growing from `scale`.
    pub const fn pop(scale: f64, duration_ms: u32, easing: Easing) -> Self {
        Self {
            hidden: Pose {
                opacity: 0.0,
                translate_y: 0.0,
                scale,
            },
            transition: Transition {
                duration_ms,
                delay_ms: 0,
                easing,
            },
        }
    }

    pub const fn delayed(mut self, delay_ms: u32) -> Self {
        self.transition.delay_ms = delay_ms;
        self
    }

    /// Adds `index * step_ms` on top of the current delay.
    pub const fn staggered(mut self, index: usize, step_ms: u32) -> Self {
        self.transition.delay_ms += index as u32 * step_ms;
        self
    }

    pub fn style(&self, visible: bool) -> String {
        let pose = if visible { Pose::REST } else { self.hidden };
        let Transition {
            duration_ms,
            delay_ms,
            easing,
        } = self.transition;
        let easing = easing.css();

        format!(
            "opacity: {}; transform: {}; transition: opacity {duration_ms}ms {easing} {delay_ms}ms, transform {duration_ms}ms {easing} {delay_ms}ms;",
            pose.opacity,
            pose.transform(),
        )
    }
}

/// Section content rising into place.
pub const SECTION_ITEM: Reveal = Reveal::fade_up(20.0, 800, Easing::CubicBezier(0.6, -0.05, 0.01, 0.99));
pub const SECTION_HEADING: Reveal = Reveal::fade_up(-20.0, 500, Easing::EaseOut);

pub const HERO_TEXT: Reveal = Reveal::fade_up(20.0, 800, Easing::EaseOut);
pub const HERO_CODE: Reveal = Reveal::pop(0.9, 800, Easing::EaseOut).delayed(800);

pub const SKILL_CATEGORY: Reveal = Reveal::fade_up(50.0, 800, Easing::EaseOut);
pub const SKILL_ICON: Reveal = Reveal::pop(0.5, 500, Easing::EaseOut);

pub const CAREER_HEADING: Reveal = Reveal::fade_up(-50.0, 700, Easing::EaseOut);
pub const CAREER_ITEM: Reveal = Reveal::fade_up(50.0, 500, Easing::EaseOut);

pub const STRENGTH_CARD: Reveal = Reveal::fade_up(50.0, 600, Easing::CubicBezier(0.25, 0.1, 0.25, 1.0));

/// Shapes in the hero's code window, drawn one after another.
pub const CODE_SHAPE: Reveal = Reveal::pop(0.0, 500, Easing::EaseOut);
pub const CODE_SHAPE_STEP_MS: u32 = 50;
