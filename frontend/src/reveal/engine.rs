//! Scroll-triggered reveal state machine.
//!
//! The engine never touches the DOM. It is told how much of each registered
//! element is visible (`on_intersection_change`) and asked, once per frame,
//! which elements need new styles (`tick`). Timestamps are milliseconds on
//! the same clock as `requestAnimationFrame`.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::time::Duration;

use log::debug;

use super::easing::Easing;
use super::intent::{AnimationIntent, Trigger, VisualState};
use super::stagger::StaggerGroup;

/// Float rounding slack on reported visibility ratios.
pub const THRESHOLD_EPSILON: f64 = 1e-6;

/// New style for one element, produced by [`ScrollRevealEngine::tick`].
#[derive(Clone, Debug, PartialEq)]
pub struct FrameUpdate<K> {
    pub key: K,
    pub state: VisualState,
    /// Last update for this transition.
    pub finished: bool,
}

struct Target<K> {
    key: K,
    intent: AnimationIntent,
    delay: Duration,
}

struct Watch<K> {
    threshold: f64,
    once: bool,
    armed: bool,
    targets: Vec<Target<K>>,
}

struct Running<K> {
    key: K,
    from: VisualState,
    to: VisualState,
    start_at: f64,
    duration_ms: f64,
    easing: Easing,
}

pub struct ScrollRevealEngine<K> {
    watched: HashMap<K, Watch<K>>,
    running: Vec<Running<K>>,
    snaps: Vec<FrameUpdate<K>>,
    fired: HashSet<K>,
    /// Child keys of each registered group, by parent key.
    groups: HashMap<K, Vec<K>>,
}

impl<K> Default for ScrollRevealEngine<K> {
    fn default() -> Self {
        Self {
            watched: HashMap::new(),
            running: Vec::new(),
            snaps: Vec::new(),
            fired: HashSet::new(),
            groups: HashMap::new(),
        }
    }
}

fn meets_threshold(fraction: f64, threshold: f64) -> bool {
    fraction > 0.0 && fraction + THRESHOLD_EPSILON >= threshold
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

impl<K: Copy + Eq + Hash + std::fmt::Debug> ScrollRevealEngine<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `key`. Mount-triggered intents start right away at `now`.
    pub fn register(&mut self, key: K, intent: AnimationIntent, now: f64) {
        let delay = intent.delay;
        let trigger = intent.trigger;
        let once = intent.trigger_once;
        self.watch(key, trigger, once, vec![Target { key, intent, delay }], now);
    }

    /// Watch `key` for a group; its children fire with it, staggered.
    pub fn register_group(&mut self, key: K, group: StaggerGroup<K>, now: f64) {
        let trigger = group.parent.trigger;
        let once = group.parent.trigger_once;
        let delays = group.child_delays();
        let mut targets = Vec::with_capacity(group.children.len() + 1);
        targets.push(Target {
            key,
            delay: group.parent.delay,
            intent: group.parent,
        });
        let mut children = Vec::with_capacity(group.children.len());
        for ((child, intent), delay) in group.children.into_iter().zip(delays) {
            children.push(child);
            targets.push(Target { key: child, delay, intent });
        }
        self.watch(key, trigger, once, targets, now);
        self.groups.insert(key, children);
    }

    fn watch(&mut self, key: K, trigger: Trigger, once: bool, targets: Vec<Target<K>>, now: f64) {
        self.unregister(key);
        match trigger {
            Trigger::Mount => {
                debug!("reveal {:?} fires on mount", key);
                self.start(&targets, now);
                self.fired.insert(key);
            }
            Trigger::InView { threshold } => {
                self.watched.insert(
                    key,
                    Watch {
                        threshold,
                        once,
                        armed: true,
                        targets,
                    },
                );
            }
        }
    }

    /// Feed the visible fraction of `key`. Returns true if this fired it.
    ///
    /// Unknown keys and keys that already fired once are ignored.
    pub fn on_intersection_change(&mut self, key: K, fraction: f64, now: f64) -> bool {
        let Some(watch) = self.watched.get_mut(&key) else {
            return false;
        };

        if watch.armed && meets_threshold(fraction, watch.threshold) {
            debug!("reveal {:?} fires at {:.2} visible", key, fraction);
            let Some(watch) = self.watched.remove(&key) else {
                return false;
            };
            self.start(&watch.targets, now);
            self.fired.insert(key);
            if !watch.once {
                self.watched.insert(key, Watch { armed: false, ..watch });
            }
            return true;
        }

        if !watch.armed && !(fraction > 0.0) {
            watch.armed = true;
            let resets: Vec<(K, VisualState)> = watch
                .targets
                .iter()
                .map(|target| (target.key, target.intent.hidden.clone()))
                .collect();
            self.fired.remove(&key);
            for (target, hidden) in resets {
                self.running.retain(|running| running.key != target);
                self.snaps.push(FrameUpdate {
                    key: target,
                    state: hidden,
                    finished: true,
                });
            }
        }
        false
    }

    fn start(&mut self, targets: &[Target<K>], now: f64) {
        for target in targets {
            self.running.retain(|running| running.key != target.key);
            self.running.push(Running {
                key: target.key,
                from: target.intent.hidden.clone(),
                to: target.intent.shown.clone(),
                start_at: now + millis(target.delay),
                duration_ms: millis(target.intent.duration),
                easing: target.intent.easing,
            });
        }
    }

    /// Stop watching `key` and drop any transition or pending update for it.
    /// Unregistering a group parent drops its children's work as well.
    pub fn unregister(&mut self, key: K) {
        self.watched.remove(&key);
        self.fired.remove(&key);
        let mut dropped = self.groups.remove(&key).unwrap_or_default();
        dropped.push(key);
        self.running.retain(|running| !dropped.contains(&running.key));
        self.snaps.retain(|update| !dropped.contains(&update.key));
    }

    /// Advance every started transition to `now`.
    ///
    /// Updates come out in registration order, so staggered children that
    /// start in the same frame keep their declared order. Transitions that
    /// have not reached their start time yet produce nothing.
    pub fn tick(&mut self, now: f64) -> Vec<FrameUpdate<K>> {
        let mut updates = std::mem::take(&mut self.snaps);
        self.running.retain(|running| {
            if now < running.start_at {
                return true;
            }
            let progress = if running.duration_ms > 0.0 {
                ((now - running.start_at) / running.duration_ms).clamp(0.0, 1.0)
            } else {
                1.0
            };
            let finished = progress >= 1.0;
            updates.push(FrameUpdate {
                key: running.key,
                state: running.from.interpolate(&running.to, running.easing.evaluate(progress)),
                finished,
            });
            !finished
        });
        updates
    }

    pub fn is_watching(&self, key: K) -> bool {
        self.watched.contains_key(&key)
    }

    /// Elements still waiting on visibility reports.
    pub fn watch_count(&self) -> usize {
        self.watched.len()
    }

    /// Transitions started or scheduled, plus queued snap-backs.
    pub fn in_flight(&self) -> usize {
        self.running.len() + self.snaps.len()
    }

    pub fn has_pending_frames(&self) -> bool {
        self.in_flight() > 0
    }

    #[cfg(test)]
    pub fn has_fired(&self, key: K) -> bool {
        self.fired.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::intent::VisualProperty;
    use crate::reveal::stagger::Stagger;

    fn fade_up(threshold: f64) -> AnimationIntent {
        AnimationIntent::rise(16.0)
            .duration(Duration::from_millis(600))
            .easing(Easing::Linear)
            .threshold(threshold)
    }

    fn opacity(update: &FrameUpdate<u32>) -> f64 {
        update.state.resolve(VisualProperty::Opacity)
    }

    #[test]
    fn test_inert_until_threshold() {
        let mut engine = ScrollRevealEngine::new();
        engine.register(1, fade_up(0.6), 0.0);
        assert!(engine.is_watching(1));
        assert!(!engine.on_intersection_change(1, 0.3, 10.0));
        assert!(engine.tick(20.0).is_empty());
        assert!(engine.on_intersection_change(1, 0.6, 30.0));
        assert!(engine.has_fired(1));
        assert!(!engine.is_watching(1));
    }

    #[test]
    fn test_threshold_only_absorbs_rounding() {
        let mut engine = ScrollRevealEngine::new();
        engine.register(1, fade_up(0.6), 0.0);
        assert!(!engine.on_intersection_change(1, 0.5991, 0.0));
        assert!(engine.on_intersection_change(1, 0.6 - 1e-9, 0.0));
    }

    #[test]
    fn test_zero_threshold_needs_some_visibility() {
        let mut engine = ScrollRevealEngine::new();
        engine.register(1, fade_up(0.0), 0.0);
        assert!(!engine.on_intersection_change(1, 0.0, 0.0));
        assert!(engine.on_intersection_change(1, 0.01, 0.0));
    }

    #[test]
    fn test_fires_only_once() {
        let mut engine = ScrollRevealEngine::new();
        engine.register(1, fade_up(0.5), 0.0);
        assert!(engine.on_intersection_change(1, 1.0, 0.0));
        let last = engine.tick(600.0);
        assert_eq!(last.len(), 1);
        assert!(last[0].finished);
        assert_eq!(opacity(&last[0]), 1.0);

        for (i, fraction) in [0.0, 1.0, 0.2, 0.9].into_iter().enumerate() {
            assert!(!engine.on_intersection_change(1, fraction, 1000.0 + i as f64));
        }
        assert!(engine.tick(5000.0).is_empty());
        assert!(engine.has_fired(1));
        assert_eq!(engine.in_flight(), 0);
    }

    #[test]
    fn test_visible_at_registration_fires_without_scroll() {
        let mut engine = ScrollRevealEngine::new();
        engine.register(7, fade_up(0.4), 0.0);
        // measurement taken at registration time
        assert!(engine.on_intersection_change(7, 1.0, 0.0));
        let updates = engine.tick(300.0);
        assert_eq!(updates.len(), 1);
        assert_eq!(opacity(&updates[0]), 0.5);
    }

    #[test]
    fn test_mount_trigger_starts_immediately() {
        let mut engine = ScrollRevealEngine::new();
        let intent = AnimationIntent::fade_in()
            .on_mount()
            .easing(Easing::Linear)
            .delay(Duration::from_millis(150))
            .duration(Duration::from_millis(100));
        engine.register(1, intent, 1000.0);
        assert!(engine.has_fired(1));
        assert!(!engine.is_watching(1));
        assert!(engine.tick(1100.0).is_empty(), "still inside the delay");
        let updates = engine.tick(1200.0);
        assert_eq!(opacity(&updates[0]), 0.5);
        assert!(engine.tick(1250.0)[0].finished);
        assert!(!engine.has_pending_frames());
    }

    #[test]
    fn test_transition_interpolates_and_completes() {
        let mut engine = ScrollRevealEngine::new();
        engine.register(1, fade_up(0.0), 0.0);
        engine.on_intersection_change(1, 1.0, 100.0);

        let updates = engine.tick(400.0);
        assert_eq!(updates[0].state.get(VisualProperty::OffsetY), Some(8.0));
        assert!(!updates[0].finished);

        let updates = engine.tick(800.0);
        assert_eq!(updates[0].state.get(VisualProperty::OffsetY), Some(0.0));
        assert!(updates[0].finished);
        assert!(engine.tick(900.0).is_empty());
    }

    #[test]
    fn test_stagger_group_fires_children_in_order() {
        let mut engine = ScrollRevealEngine::new();
        let child = AnimationIntent::fade_in().duration(Duration::from_millis(100));
        let group = StaggerGroup::new(
            AnimationIntent::fade_in().duration(Duration::ZERO).threshold(0.6),
            Stagger::new(Duration::from_millis(50)),
        )
        .child(10, child.clone())
        .child(11, child.clone())
        .child(12, child.clone())
        .child(13, child);
        engine.register_group(1, group, 0.0);

        assert_eq!(engine.watch_count(), 1);
        assert!(!engine.is_watching(10), "children are not observed on their own");
        assert!(!engine.on_intersection_change(10, 1.0, 0.0));

        assert!(engine.on_intersection_change(1, 0.8, 1000.0));
        let started: Vec<u32> = engine.tick(1060.0).into_iter().map(|u| u.key).collect();
        assert_eq!(started, vec![1, 10, 11]);
        let started: Vec<u32> = engine.tick(1150.0).into_iter().map(|u| u.key).collect();
        assert_eq!(started, vec![10, 11, 12, 13]);
    }

    #[test]
    fn test_unregister_before_fire_leaves_nothing() {
        let mut engine = ScrollRevealEngine::new();
        engine.register(1, fade_up(0.6), 0.0);
        engine.register(2, AnimationIntent::fade_in().on_mount().delay(Duration::from_secs(1)), 0.0);
        assert_eq!(engine.watch_count(), 1);
        assert_eq!(engine.in_flight(), 1);

        engine.unregister(1);
        engine.unregister(2);
        assert_eq!(engine.watch_count(), 0);
        assert_eq!(engine.in_flight(), 0);
        assert!(!engine.has_pending_frames());
        assert!(!engine.on_intersection_change(1, 1.0, 10.0));
        assert!(engine.tick(2000.0).is_empty());
    }

    #[test]
    fn test_repeat_intent_resets_after_leaving() {
        let mut engine = ScrollRevealEngine::new();
        let intent = AnimationIntent {
            trigger_once: false,
            ..fade_up(0.5)
        };
        engine.register(1, intent, 0.0);
        assert!(engine.on_intersection_change(1, 1.0, 0.0));
        assert!(engine.is_watching(1));
        assert!(!engine.on_intersection_change(1, 0.2, 10.0), "partly visible keeps it shown");

        assert!(!engine.on_intersection_change(1, 0.0, 20.0));
        let updates = engine.tick(20.0);
        assert_eq!(updates.len(), 1);
        assert_eq!(opacity(&updates[0]), 0.0);
        assert!(!engine.has_fired(1));

        assert!(engine.on_intersection_change(1, 0.9, 30.0));
    }

    #[test]
    fn test_unregister_group_parent_cancels_children() {
        let mut engine = ScrollRevealEngine::new();
        let child = AnimationIntent::fade_in().duration(Duration::from_millis(100));
        let group = StaggerGroup::new(
            AnimationIntent::fade_in().duration(Duration::from_millis(100)),
            Stagger::new(Duration::from_millis(50)),
        )
        .child(10, child.clone())
        .child(11, child);
        engine.register_group(1, group, 0.0);
        assert!(engine.on_intersection_change(1, 1.0, 0.0));
        assert_eq!(engine.tick(20.0).len(), 2);

        engine.unregister(1);
        assert_eq!(engine.in_flight(), 0);
        assert!(!engine.has_pending_frames());
        assert!(engine.tick(60.0).is_empty());
    }

    #[test]
    fn test_reregistering_parent_replaces_children() {
        let mut engine = ScrollRevealEngine::new();
        let child = AnimationIntent::fade_in().on_mount();
        let group = StaggerGroup::new(AnimationIntent::fade_in().on_mount(), Stagger::default())
            .child(10, child.clone());
        engine.register_group(1, group, 0.0);
        assert_eq!(engine.in_flight(), 2);

        engine.register(1, AnimationIntent::fade_in().threshold(0.5), 0.0);
        assert_eq!(engine.in_flight(), 0, "the old child transition is gone");
        assert!(engine.is_watching(1));
    }
}
