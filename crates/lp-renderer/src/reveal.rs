//! One-shot enter animations.
//!
//! Each revealed element is a two-state machine: [`RevealState::Pending`]
//! until it first crosses [`REVEAL_THRESHOLD`] visibility, then
//! [`RevealState::Shown`] forever. The interactive preview drives the
//! machine through its controller; the static page re-implements it with
//! [`REVEAL_SCRIPT`].

use std::fmt::Write;

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Transition duration in milliseconds.
pub const REVEAL_DURATION_MS: u32 = 1000;

/// Direction the element travels while entering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum RevealDirection {
    #[default]
    Up,
    Left,
    Right,
}

impl RevealDirection {
    /// Offset class applied while pending.
    #[must_use]
    pub fn hidden_class(self) -> &'static str {
        match self {
            Self::Up => "translate-y-8",
            Self::Left => "-translate-x-8",
            Self::Right => "translate-x-8",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Reveal parameters for one element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct Reveal {
    pub delay_ms: u32,
    pub direction: RevealDirection,
}

impl Reveal {
    #[must_use]
    pub const fn up(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            direction: RevealDirection::Up,
        }
    }

    #[must_use]
    pub const fn left(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            direction: RevealDirection::Left,
        }
    }

    #[must_use]
    pub const fn right(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            direction: RevealDirection::Right,
        }
    }

    /// Stagger siblings: `step * index` milliseconds, saturating.
    #[must_use]
    pub fn staggered(index: usize, step: u32) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Self::up(step.saturating_mul(index))
    }

    /// Tailwind classes for the given state.
    #[must_use]
    pub fn classes(self, state: RevealState) -> String {
        match state {
            RevealState::Pending => format!(
                "transition-all duration-1000 ease-out opacity-0 {}",
                self.direction.hidden_class()
            ),
            RevealState::Shown => {
                "transition-all duration-1000 ease-out opacity-100 translate-x-0 translate-y-0".to_owned()
            }
        }
    }
}

/// Reveal state of one element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum RevealState {
    #[default]
    Pending,
    Shown,
}

impl RevealState {
    /// Feed a visibility ratio (0.0 to 1.0) into the machine.
    ///
    /// Returns `true` only for the pending → shown transition. A shown
    /// element never goes back, so callers detach their observer as soon as
    /// this returns `true`.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if *self == Self::Pending && visible_ratio >= REVEAL_THRESHOLD {
            *self = Self::Shown;
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }
}

/// Stylesheet for `.reveal` elements in the static page.
#[must_use]
pub fn reveal_css() -> String {
    let mut css = String::with_capacity(640);
    let _ = write!(
        css,
        ".reveal {{ opacity: 0; transition: opacity {REVEAL_DURATION_MS}ms ease-out, transform {REVEAL_DURATION_MS}ms ease-out; }}\n"
    );
    css.push_str(".reveal-up { transform: translateY(2rem); }\n");
    css.push_str(".reveal-left { transform: translateX(-2rem); }\n");
    css.push_str(".reveal-right { transform: translateX(2rem); }\n");
    css.push_str(".reveal.is-visible { opacity: 1; transform: none; }\n");
    css
}

/// Bootstrap script for the static page.
///
/// One document-level observer watches every `.reveal` element and stops
/// watching each one after it is revealed.
#[must_use]
pub fn reveal_script() -> String {
    format!(
        r"(function () {{
  var items = document.querySelectorAll('.reveal');
  if (!('IntersectionObserver' in window)) {{
    items.forEach(function (el) {{ el.classList.add('is-visible'); }});
    return;
  }}
  var observer = new IntersectionObserver(function (entries) {{
    entries.forEach(function (entry) {{
      if (entry.isIntersecting) {{
        entry.target.classList.add('is-visible');
        observer.unobserve(entry.target);
      }}
    }});
  }}, {{ threshold: {REVEAL_THRESHOLD} }});
  items.forEach(function (el) {{ observer.observe(el); }});
}})();"
    )
}

/// Shown-state stylesheet for visitors without scripting.
pub const REVEAL_NOSCRIPT: &str = "<noscript><style>.reveal { opacity: 1; transform: none; }</style></noscript>";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_below_threshold() {
        let mut state = RevealState::Pending;
        assert!(!state.observe(0.0));
        assert!(!state.observe(0.09));
        assert_eq!(state, RevealState::Pending);
    }

    #[test]
    fn test_transition_fires_once() {
        let mut state = RevealState::Pending;
        assert!(state.observe(0.1));
        assert!(state.is_shown());
        assert!(!state.observe(1.0));
        assert!(!state.observe(0.0));
        assert_eq!(state, RevealState::Shown);
    }

    #[test]
    fn test_staggered_delay() {
        assert_eq!(Reveal::staggered(0, 100).delay_ms, 0);
        assert_eq!(Reveal::staggered(3, 150).delay_ms, 450);
        assert_eq!(Reveal::staggered(usize::MAX, 100).delay_ms, u32::MAX);
    }

    #[test]
    fn test_classes_by_state() {
        let reveal = Reveal::right(400);
        assert!(reveal.classes(RevealState::Pending).contains("opacity-0 translate-x-8"));
        assert!(reveal.classes(RevealState::Shown).contains("opacity-100"));
    }

    #[test]
    fn test_script_uses_threshold_and_unobserves() {
        let script = reveal_script();
        assert!(script.contains("threshold: 0.1"));
        assert!(script.contains("observer.unobserve(entry.target)"));
    }

    #[test]
    fn test_css_covers_directions() {
        let css = reveal_css();
        for class in [".reveal-up", ".reveal-left", ".reveal-right", ".reveal.is-visible"] {
            assert!(css.contains(class), "{class}");
        }
    }
}
