use std::time::Duration;

use super::intent::AnimationIntent;

/// Start-time spacing for the children of a group.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stagger {
    pub base_delay: Duration,
    pub interval: Duration,
}

impl Stagger {
    pub fn new(interval: Duration) -> Self {
        Self { base_delay: Duration::ZERO, interval }
    }

    /// Delay of the child at `index`: `base_delay + index * interval`.
    pub fn delay_for(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_delay + self.interval.saturating_mul(index)
    }
}

/// A parent intent whose children reveal together, offset in start time.
///
/// Only the parent's visibility is observed; children inherit its trigger.
#[derive(Clone, Debug, PartialEq)]
pub struct StaggerGroup<K> {
    pub parent: AnimationIntent,
    pub stagger: Stagger,
    pub children: Vec<(K, AnimationIntent)>,
}

impl<K> StaggerGroup<K> {
    pub fn new(parent: AnimationIntent, stagger: Stagger) -> Self {
        Self {
            parent,
            stagger,
            children: Vec::new(),
        }
    }

    pub fn child(mut self, key: K, intent: AnimationIntent) -> Self {
        self.children.push((key, intent));
        self
    }

    pub fn child_delays(&self) -> Vec<Duration> {
        (0..self.children.len())
            .map(|index| self.stagger.delay_for(index))
            .collect()
    }

    /// Re-key the children, dropping those `f` cannot resolve.
    /// Later children move up, so their delays are computed on the kept order.
    pub fn filter_map_keys<U>(self, mut f: impl FnMut(K) -> Option<U>) -> StaggerGroup<U> {
        StaggerGroup {
            parent: self.parent,
            stagger: self.stagger,
            children: self
                .children
                .into_iter()
                .filter_map(|(key, intent)| f(key).map(|key| (key, intent)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_children_fifty_ms_apart() {
        let group = (0..4).fold(
            StaggerGroup::new(AnimationIntent::fade_in(), Stagger::new(Duration::from_millis(50))),
            |group, key| group.child(key, AnimationIntent::fade_up()),
        );
        assert_eq!(
            group.child_delays(),
            vec![
                Duration::ZERO,
                Duration::from_millis(50),
                Duration::from_millis(100),
                Duration::from_millis(150),
            ]
        );
    }

    #[test]
    fn test_base_delay_is_added() {
        let stagger = Stagger {
            base_delay: Duration::from_millis(300),
            interval: Duration::from_millis(120),
        };
        assert_eq!(stagger.delay_for(0), Duration::from_millis(300));
        assert_eq!(stagger.delay_for(2), Duration::from_millis(540));
    }

    #[test]
    fn test_filter_map_keys_drops_unresolved() {
        let group = StaggerGroup::new(AnimationIntent::fade_in(), Stagger::new(Duration::from_millis(10)))
            .child(Some("title"), AnimationIntent::fade_up())
            .child(None, AnimationIntent::fade_up())
            .child(Some("link"), AnimationIntent::fade_up());
        let mapped = group.filter_map_keys(|key| key);
        let keys: Vec<_> = mapped.children.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec!["title", "link"]);
        assert_eq!(mapped.child_delays()[1], Duration::from_millis(10));
    }
}
