//! Ripple lifecycle state for the button surface.
//!
//! Every click spawns one [`Ripple`]: a circle centered on the cursor whose
//! resting diameter is the larger of the surface's two dimensions, so its
//! expanded form covers the surface from any click position. Ripples live in
//! an insertion-ordered collection owned by a single button instance and are
//! removed when their one-shot animation has run out; removal is keyed by id,
//! so completions may arrive in any order.

use std::time::{Duration, Instant};

use smallvec::SmallVec;
use tessera_ui::{Px, PxPosition, PxSize};
use tracing::debug;
use uuid::Uuid;

use crate::animation::easing;

/// Time a ripple takes from spawn to fully expanded and faded.
pub const RIPPLE_DURATION: Duration = Duration::from_secs(1);

/// Expansion factor reached at the end of the animation, relative to the
/// resting diameter.
pub const RIPPLE_MAX_SCALE: f32 = 4.0;

/// How long a hover flip takes to blend between resting and hovered style.
pub(crate) const HOVER_TRANSITION: Duration = Duration::from_millis(200);

/// Opaque identifier of one in-flight ripple, unique within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RippleId(Uuid);

impl RippleId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Square circumscribing a ripple circle, in the surface's local space.
///
/// `size` is the resting diameter; `top` and `left` go negative when the
/// click lands closer to an edge than `size / 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RippleRect {
    /// Offset of the square's top edge from the surface's top edge.
    pub top: Px,
    /// Offset of the square's left edge from the surface's left edge.
    pub left: Px,
    /// Edge length, `max(width, height)` of the surface at spawn time.
    pub size: Px,
}

impl RippleRect {
    /// Centers a square big enough to cover `surface` on the click offset.
    pub fn from_click(offset: PxPosition, surface: PxSize) -> Self {
        let size = surface.width.max(surface.height);
        Self {
            top: offset.y - size / 2,
            left: offset.x - size / 2,
            size,
        }
    }

    /// Center of the circle, i.e. the click position the ripple grew from.
    pub fn center(&self) -> PxPosition {
        PxPosition::new(self.left + self.size / 2, self.top + self.size / 2)
    }
}

/// One in-flight ripple animation instance.
///
/// Ripples are independent of each other; any number may overlap visually and
/// temporally.
#[derive(Clone, Copy, Debug)]
pub struct Ripple {
    id: RippleId,
    rect: RippleRect,
    spawned: Instant,
}

impl Ripple {
    /// The ripple's unique id.
    pub fn id(&self) -> RippleId {
        self.id
    }

    /// The resting geometry computed at spawn time.
    pub fn rect(&self) -> RippleRect {
        self.rect
    }

    /// Linear animation progress in `[0, 1]` as of `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.spawned);
        (elapsed.as_secs_f32() / RIPPLE_DURATION.as_secs_f32()).min(1.0)
    }

    /// Whether the one-shot animation has run out as of `now`.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Overlay geometry and opacity for the current frame: the circle scales
    /// from nothing to [`RIPPLE_MAX_SCALE`] times its resting diameter while
    /// the tint fades to zero.
    pub fn frame(&self, now: Instant) -> RippleFrame {
        let progress = self.progress(now);
        let diameter = self.rect.size.to_f32() * RIPPLE_MAX_SCALE * easing(progress);
        let center = self.rect.center();
        let half = diameter / 2.0;
        RippleFrame {
            position: PxPosition::new(
                Px::from_f32(center.x.to_f32() - half),
                Px::from_f32(center.y.to_f32() - half),
            ),
            diameter: Px::from_f32(diameter),
            opacity: 1.0 - progress,
        }
    }
}

/// Per-frame render data for one ripple overlay.
#[derive(Clone, Copy, Debug)]
pub struct RippleFrame {
    /// Top-left of the circle's bounding square, surface-local.
    pub position: PxPosition,
    /// Current circle diameter.
    pub diameter: Px,
    /// Remaining opacity factor in `[0, 1]`, applied to the ripple tint.
    pub opacity: f32,
}

/// Ripple collection and hover bookkeeping for one button instance.
///
/// The state is owned by its button through the runtime's state slot and only
/// mutated inside that button's measure and input closures, so no locking is
/// involved.
pub struct RippleState {
    ripples: SmallVec<[Ripple; 4]>,
    hovered: bool,
    hover_changed: Option<Instant>,
}

impl Default for RippleState {
    fn default() -> Self {
        Self::new()
    }
}

impl RippleState {
    /// Creates an empty state: no ripples, not hovered.
    pub fn new() -> Self {
        Self {
            ripples: SmallVec::new(),
            hovered: false,
            hover_changed: None,
        }
    }

    /// Spawns a ripple covering `surface`, centered on the click `offset`.
    ///
    /// Every call appends a fresh entry; concurrent ripples never overwrite
    /// each other. Returns the new ripple's id.
    pub fn spawn(&mut self, offset: PxPosition, surface: PxSize) -> RippleId {
        self.spawn_at(offset, surface, Instant::now())
    }

    fn spawn_at(&mut self, offset: PxPosition, surface: PxSize, now: Instant) -> RippleId {
        let ripple = Ripple {
            id: RippleId::generate(),
            rect: RippleRect::from_click(offset, surface),
            spawned: now,
        };
        debug!(id = ?ripple.id.0, rect = ?ripple.rect, "ripple spawned");
        self.ripples.push(ripple);
        ripple.id
    }

    /// Removes the ripple whose completion signal fired.
    ///
    /// An unknown id (for example a duplicated signal) leaves the collection
    /// untouched.
    pub fn finish(&mut self, id: RippleId) {
        self.ripples.retain(|ripple| ripple.id != id);
    }

    /// Ids of ripples whose animation has run out as of `now`.
    pub fn finished_ids(&self, now: Instant) -> SmallVec<[RippleId; 4]> {
        self.ripples
            .iter()
            .filter(|ripple| ripple.is_finished(now))
            .map(|ripple| ripple.id)
            .collect()
    }

    /// Live ripples in spawn order, which is also the z-order of their
    /// overlays.
    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    /// Records the hover flag, time-stamping flips for the style transition.
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.hover_changed = Some(Instant::now());
        }
    }

    /// Whether the cursor is currently over the surface.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Blend factor toward the hover style in `[0, 1]` as of `now`.
    pub fn hover_progress(&self, now: Instant) -> f32 {
        let transition = match self.hover_changed {
            Some(changed) => (now.saturating_duration_since(changed).as_secs_f32()
                / HOVER_TRANSITION.as_secs_f32())
            .min(1.0),
            None => 1.0,
        };
        if self.hovered { transition } else { 1.0 - transition }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn click() -> PxPosition {
        PxPosition::new(Px(10), Px(5))
    }

    fn surface() -> PxSize {
        PxSize::new(Px(20), Px(10))
    }

    #[test]
    fn rect_is_a_square_centered_on_the_click() {
        let rect = RippleRect::from_click(click(), surface());
        assert_eq!(
            rect,
            RippleRect {
                top: Px(-5),
                left: Px(0),
                size: Px(20),
            }
        );
        assert_eq!(rect.center(), click());
    }

    #[test]
    fn expanded_circle_covers_the_surface_from_any_click_position() {
        let surface = PxSize::new(Px(200), Px(80));
        let corners = [(0, 0), (200, 0), (0, 80), (200, 80)];
        for (x, y) in [(0, 0), (200, 0), (0, 80), (200, 80), (37, 55), (100, 40)] {
            let rect = RippleRect::from_click(PxPosition::new(Px(x), Px(y)), surface);
            let radius = rect.size.to_f32() * RIPPLE_MAX_SCALE / 2.0;
            let center = rect.center();
            for (cx, cy) in corners {
                let distance = center.distance_to(PxPosition::new(Px(cx), Px(cy)));
                assert!(
                    distance <= radius,
                    "corner ({cx}, {cy}) not covered from click ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn every_click_appends_with_a_fresh_id() {
        let mut state = RippleState::new();
        for _ in 0..32 {
            state.spawn(click(), surface());
        }
        assert_eq!(state.ripples().len(), 32);
        let ids: HashSet<_> = state.ripples().iter().map(|ripple| ripple.id()).collect();
        assert_eq!(ids.len(), 32);
    }

    #[test]
    fn finish_removes_only_the_matching_ripple() {
        let mut state = RippleState::new();
        let first = state.spawn(click(), surface());
        let second = state.spawn(click(), surface());
        let third = state.spawn(click(), surface());

        state.finish(second);
        let remaining: Vec<_> = state.ripples().iter().map(|ripple| ripple.id()).collect();
        assert_eq!(remaining, vec![first, third]);

        // a duplicated completion signal is a no-op
        state.finish(second);
        assert_eq!(state.ripples().len(), 2);
    }

    #[test]
    fn finished_ids_reports_only_elapsed_ripples() {
        let mut state = RippleState::new();
        let now = Instant::now();
        let earlier = now.checked_sub(RIPPLE_DURATION).unwrap();
        let done = state.spawn_at(click(), surface(), earlier);
        let live = state.spawn_at(click(), surface(), now);

        let finished = state.finished_ids(now);
        assert_eq!(finished.as_slice(), &[done]);
        assert!(!state.ripples().iter().any(|r| r.id() == live && r.is_finished(now)));
    }

    #[test]
    fn frame_scales_up_and_fades_out() {
        let mut state = RippleState::new();
        let now = Instant::now();
        let earlier = now.checked_sub(RIPPLE_DURATION).unwrap();
        state.spawn_at(click(), surface(), now);
        state.spawn_at(click(), surface(), earlier);

        let fresh = state.ripples()[0].frame(now);
        assert_eq!(fresh.diameter, Px(0));
        assert_eq!(fresh.opacity, 1.0);

        let spent = state.ripples()[1].frame(now);
        assert_eq!(spent.diameter, Px::from_f32(20.0 * RIPPLE_MAX_SCALE));
        assert_eq!(spent.opacity, 0.0);
        // fully expanded, still centered on the click
        assert_eq!(spent.position.x, Px::from_f32(10.0 - 40.0));
    }

    #[test]
    fn ids_do_not_collide_across_many_spawns() {
        let ids: HashSet<RippleId> = (0..10_000).map(|_| RippleId::generate()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn hover_progress_tracks_flips() {
        let mut state = RippleState::new();
        let now = Instant::now();
        assert_eq!(state.hover_progress(now), 0.0);

        state.set_hovered(true);
        let settled = Instant::now() + HOVER_TRANSITION;
        assert_eq!(state.hover_progress(settled), 1.0);

        state.set_hovered(false);
        let settled = Instant::now() + HOVER_TRANSITION;
        assert_eq!(state.hover_progress(settled), 0.0);
    }
}
