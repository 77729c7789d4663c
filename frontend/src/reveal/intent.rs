use std::collections::BTreeMap;
use std::time::Duration;

use super::easing::Easing;

/// Visual properties a reveal can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VisualProperty {
    Opacity,
    /// Horizontal offset in px
    OffsetX,
    /// Vertical offset in px
    OffsetY,
    Scale,
    /// Percentage of the box clipped away from the right edge
    ClipRight,
}

impl VisualProperty {
    /// Value the property has when nothing overrides it.
    pub fn neutral(self) -> f64 {
        match self {
            VisualProperty::Opacity | VisualProperty::Scale => 1.0,
            VisualProperty::OffsetX | VisualProperty::OffsetY | VisualProperty::ClipRight => 0.0,
        }
    }
}

/// A set of property values, e.g. `opacity: 0, offsetY: 16`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualState {
    values: BTreeMap<VisualProperty, f64>,
}

impl VisualState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: VisualProperty, value: f64) -> Self {
        self.values.insert(property, value);
        self
    }

    pub fn opacity(self, value: f64) -> Self {
        self.with(VisualProperty::Opacity, value)
    }

    pub fn offset_x(self, px: f64) -> Self {
        self.with(VisualProperty::OffsetX, px)
    }

    pub fn offset_y(self, px: f64) -> Self {
        self.with(VisualProperty::OffsetY, px)
    }

    pub fn scale(self, value: f64) -> Self {
        self.with(VisualProperty::Scale, value)
    }

    pub fn clip_right(self, percent: f64) -> Self {
        self.with(VisualProperty::ClipRight, percent)
    }

    pub fn get(&self, property: VisualProperty) -> Option<f64> {
        self.values.get(&property).copied()
    }

    /// Value of `property`, falling back to its neutral value.
    pub fn resolve(&self, property: VisualProperty) -> f64 {
        self.get(property).unwrap_or_else(|| property.neutral())
    }

    /// Blend towards `target` by `factor` (0 = self, 1 = target).
    ///
    /// Covers every property mentioned on either side; a property missing
    /// on one side is taken at its neutral value.
    pub fn interpolate(&self, target: &VisualState, factor: f64) -> VisualState {
        let mut values = BTreeMap::new();
        for property in self.values.keys().chain(target.values.keys()) {
            let from = self.resolve(*property);
            let to = target.resolve(*property);
            values.insert(*property, from + (to - from) * factor);
        }
        VisualState { values }
    }

    /// CSS declarations for this state, as (property, value) pairs.
    ///
    /// Offsets and scale are folded into a single `transform`.
    pub fn css_declarations(&self) -> Vec<(&'static str, String)> {
        let mut declarations = Vec::new();
        if let Some(opacity) = self.get(VisualProperty::Opacity) {
            declarations.push(("opacity", format_number(opacity.clamp(0.0, 1.0))));
        }

        let moves = self.get(VisualProperty::OffsetX).is_some()
            || self.get(VisualProperty::OffsetY).is_some();
        let scales = self.get(VisualProperty::Scale).is_some();
        if moves || scales {
            let mut transform = Vec::new();
            if moves {
                transform.push(format!(
                    "translate({}px, {}px)",
                    format_number(self.resolve(VisualProperty::OffsetX)),
                    format_number(self.resolve(VisualProperty::OffsetY)),
                ));
            }
            if scales {
                transform.push(format!(
                    "scale({})",
                    format_number(self.resolve(VisualProperty::Scale))
                ));
            }
            declarations.push(("transform", transform.join(" ")));
        }

        if let Some(clip) = self.get(VisualProperty::ClipRight) {
            declarations.push((
                "clip-path",
                format!("inset(0 {}% 0 0)", format_number(clip.clamp(0.0, 100.0))),
            ));
        }
        declarations
    }

    /// Inline `style` attribute text.
    pub fn to_css(&self) -> String {
        self.css_declarations()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // avoid "-0"
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// When an intent starts its transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
    /// Once `threshold` of the element's box is inside the viewport.
    InView { threshold: f64 },
    /// As soon as the element is registered.
    Mount,
}

impl Default for Trigger {
    fn default() -> Self {
        Trigger::InView { threshold: 0.0 }
    }
}

/// Declares how one element goes from hidden to shown.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationIntent {
    pub hidden: VisualState,
    pub shown: VisualState,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
    pub trigger: Trigger,
    /// Stay shown after the first reveal. Every section of the page keeps this on.
    pub trigger_once: bool,
}

impl AnimationIntent {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

    pub fn new(hidden: VisualState, shown: VisualState) -> Self {
        Self {
            hidden,
            shown,
            duration: Self::DEFAULT_DURATION,
            delay: Duration::ZERO,
            easing: Easing::default(),
            trigger: Trigger::default(),
            trigger_once: true,
        }
    }

    /// Opacity 0 → 1.
    pub fn fade_in() -> Self {
        Self::new(VisualState::new().opacity(0.0), VisualState::new().opacity(1.0))
    }

    /// Fade in while rising `distance` px into place.
    pub fn rise(distance: f64) -> Self {
        Self::new(
            VisualState::new().opacity(0.0).offset_y(distance),
            VisualState::new().opacity(1.0).offset_y(0.0),
        )
    }

    /// The page's standard text entrance: 16 px rise over 0.6 s.
    pub fn fade_up() -> Self {
        Self::rise(16.0)
            .duration(Duration::from_millis(600))
            .easing(Easing::EXPO_OUT)
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Fraction of the element that must be visible, clamped to [0, 1].
    pub fn threshold(mut self, fraction: f64) -> Self {
        let threshold = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
        self.trigger = Trigger::InView { threshold };
        self
    }

    pub fn on_mount(mut self) -> Self {
        self.trigger = Trigger::Mount;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_fills_missing_with_neutral() {
        let hidden = VisualState::new().opacity(0.0).offset_y(20.0);
        let shown = VisualState::new().opacity(1.0);
        let halfway = hidden.interpolate(&shown, 0.5);
        assert_eq!(halfway.get(VisualProperty::Opacity), Some(0.5));
        assert_eq!(halfway.get(VisualProperty::OffsetY), Some(10.0));

        let done = hidden.interpolate(&shown, 1.0);
        assert_eq!(done.get(VisualProperty::OffsetY), Some(0.0));
    }

    #[test]
    fn test_css_folds_transform() {
        let state = VisualState::new().opacity(0.0).offset_y(16.0).scale(0.98);
        assert_eq!(
            state.to_css(),
            "opacity: 0; transform: translate(0px, 16px) scale(0.98);"
        );
    }

    #[test]
    fn test_css_clip_and_clamping() {
        let state = VisualState::new().clip_right(140.0).opacity(1.5);
        let declarations = state.css_declarations();
        assert_eq!(declarations[0], ("opacity", "1".to_string()));
        assert_eq!(declarations[1], ("clip-path", "inset(0 100% 0 0)".to_string()));
    }

    #[test]
    fn test_css_never_prints_negative_zero() {
        let state = VisualState::new().offset_x(-0.0001);
        assert_eq!(state.to_css(), "transform: translate(0px, 0px);");
    }

    #[test]
    fn test_builders() {
        let intent = AnimationIntent::fade_up().threshold(1.7).delay(Duration::from_millis(100));
        assert_eq!(intent.trigger, Trigger::InView { threshold: 1.0 });
        assert_eq!(intent.duration, Duration::from_millis(600));
        assert_eq!(intent.delay, Duration::from_millis(100));
        assert!(intent.trigger_once);
        assert_eq!(AnimationIntent::fade_in().on_mount().trigger, Trigger::Mount);
    }
}
