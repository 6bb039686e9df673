//! Animation coordinator
//!
//! Owns the clap timeline and the bindings from its tracks to node visual
//! properties. The build is lazy: `sync` does nothing while any of the
//! three target nodes is missing, then arms exactly once per distinct node
//! triple. Replays reuse the armed timeline; they never rebuild it.

use ovation_animation::{
    Burst, BurstConfig, BurstFrame, BurstId, Easing, ParticleShape, Timeline, Track, TrackId,
};
use ovation_core::{NodeHandle, NodeProperty, NodeTriple, Registrar};
use smallvec::SmallVec;

use crate::style;

/// Base duration every sub-animation is phrased in
pub const TL_DURATION: f32 = 300.0;

/// Where the coordinator is in its arming lifecycle
#[derive(Clone, Debug)]
pub enum AnimatorPhase {
    /// Waiting for all three target nodes to register
    AwaitingNodes,
    /// Timeline built and bound to this node triple
    Armed { nodes: NodeTriple },
}

/// One track driving one property of one node
struct TrackBinding {
    track: TrackId,
    node: NodeHandle,
    property: NodeProperty,
}

/// Builds and drives the five clap sub-animations
pub struct ClapAnimator {
    phase: AnimatorPhase,
    timeline: Timeline,
    bindings: SmallVec<[TrackBinding; 8]>,
    polygon_burst: Option<BurstId>,
    circle_burst: Option<BurstId>,
    builds: u32,
}

impl ClapAnimator {
    pub fn new() -> Self {
        Self {
            phase: AnimatorPhase::AwaitingNodes,
            timeline: Timeline::new(),
            bindings: SmallVec::new(),
            polygon_burst: None,
            circle_burst: None,
            builds: 0,
        }
    }

    /// Reconcile with the registry after a render
    ///
    /// While any of the three keys is missing this is a silent no-op, which
    /// is the expected state during early mount frames. Once the triple is
    /// complete it arms; syncing again with the same three nodes does
    /// nothing, and a different triple rebuilds from scratch.
    pub fn sync(&mut self, registrar: &Registrar) {
        let Some(triple) = registrar.triple() else {
            return;
        };
        if let AnimatorPhase::Armed { nodes } = &self.phase {
            if nodes.same_nodes(&triple) {
                return;
            }
        }
        self.arm(triple);
    }

    fn arm(&mut self, nodes: NodeTriple) {
        self.timeline = Timeline::new();
        self.bindings.clear();

        // The surface may carry a stale transform from a previous triple
        nodes.surface.reset_transform();

        // Surface pop: overshoot scale settling back to rest
        let scale = self.timeline.add_track(Track::with_easing(
            0.0,
            TL_DURATION,
            1.3,
            1.0,
            Easing::EaseOut,
        ));
        self.bind(scale, nodes.surface.clone(), NodeProperty::Scale);

        // Count bubble: fade in rising, hold, then fade out rising further
        let count_opacity = self.timeline.add_track(
            Track::new(TL_DURATION, TL_DURATION, 0.0, 1.0).then(
                TL_DURATION / 2.0,
                TL_DURATION,
                0.0,
            ),
        );
        self.bind(count_opacity, nodes.count.clone(), NodeProperty::Opacity);
        let count_y = self.timeline.add_track(
            Track::new(TL_DURATION, TL_DURATION, 0.0, -30.0).then(
                TL_DURATION / 2.0,
                TL_DURATION,
                -80.0,
            ),
        );
        self.bind(count_y, nodes.count.clone(), NodeProperty::TranslateY);

        // Total label: fade in and settle slightly above its rest position
        let total_offset = TL_DURATION * 1.5;
        let total_opacity = self
            .timeline
            .add(total_offset, TL_DURATION, 0.0, 1.0);
        self.bind(total_opacity, nodes.total.clone(), NodeProperty::Opacity);
        let total_y = self.timeline.add(total_offset, TL_DURATION, 0.0, -3.0);
        self.bind(total_y, nodes.total.clone(), NodeProperty::TranslateY);

        // Two particle rings firing from the surface
        self.polygon_burst = Some(self.timeline.add_burst(Burst::new(BurstConfig {
            count: 5,
            angle_deg: 30.0,
            radius_from: 50.0,
            radius_to: 95.0,
            shape: ParticleShape::Polygon {
                stroke: style::BURST_STROKE,
                stroke_width: 2.0,
            },
            particle_radius_from: 6.0,
            particle_radius_to: 0.0,
            particle_angle_deg: 210.0,
            delay_ms: 30.0,
            duration_ms: TL_DURATION,
            speed: 0.2,
            easing: Easing::CubicBezier(0.1, 1.0, 0.3, 1.0),
        })));
        self.circle_burst = Some(self.timeline.add_burst(Burst::new(BurstConfig {
            count: 5,
            angle_deg: 25.0,
            radius_from: 50.0,
            radius_to: 75.0,
            shape: ParticleShape::Circle {
                fill: style::BURST_FILL,
            },
            particle_radius_from: 3.0,
            particle_radius_to: 0.0,
            particle_angle_deg: 0.0,
            delay_ms: 30.0,
            duration_ms: TL_DURATION,
            speed: 0.2,
            easing: Easing::Linear,
        })));

        self.builds += 1;
        tracing::debug!(
            "ClapAnimator: armed ({} tracks, 2 bursts, {:.0}ms, build #{})",
            self.bindings.len(),
            self.timeline.duration_ms(),
            self.builds
        );
        self.phase = AnimatorPhase::Armed { nodes };
    }

    fn bind(&mut self, track: TrackId, node: NodeHandle, property: NodeProperty) {
        self.bindings.push(TrackBinding {
            track,
            node,
            property,
        });
    }

    /// Rewind and play; a no-op while still waiting for nodes
    pub fn replay(&mut self) {
        if matches!(self.phase, AnimatorPhase::AwaitingNodes) {
            return;
        }
        self.timeline.replay();
    }

    /// Advance the clock one frame and write every bound value to its node
    ///
    /// Idle timelines are left alone, so nodes keep their rest visuals
    /// until the first replay and their final frame after finishing.
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.timeline.is_playing() {
            return;
        }
        self.timeline.tick(dt_ms);
        for binding in &self.bindings {
            if let Some(value) = self.timeline.value(binding.track) {
                binding.node.set(binding.property, value);
            }
        }
    }

    /// Current triangle-ring frame, once armed
    pub fn polygon_frame(&self) -> Option<BurstFrame> {
        self.timeline.burst_frame(self.polygon_burst?)
    }

    /// Current dot-ring frame, once armed
    pub fn circle_frame(&self) -> Option<BurstFrame> {
        self.timeline.burst_frame(self.circle_burst?)
    }

    pub fn phase(&self) -> &AnimatorPhase {
        &self.phase
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.phase, AnimatorPhase::Armed { .. })
    }

    pub fn is_playing(&self) -> bool {
        self.timeline.is_playing()
    }

    /// How many times the timeline has been built
    pub fn builds(&self) -> u32 {
        self.builds
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}

impl Default for ClapAnimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovation_core::RefKey;

    fn full_registrar() -> Registrar {
        let registrar = Registrar::new();
        registrar.register(NodeHandle::new(RefKey::Surface));
        registrar.register(NodeHandle::new(RefKey::Count));
        registrar.register(NodeHandle::new(RefKey::Total));
        registrar
    }

    #[test]
    fn test_sync_skips_incomplete_registry() {
        let registrar = Registrar::new();
        registrar.register(NodeHandle::new(RefKey::Surface));
        let mut animator = ClapAnimator::new();
        animator.sync(&registrar);
        assert!(!animator.is_armed());
        assert_eq!(animator.builds(), 0);
        assert!(animator.timeline().is_empty());
    }

    #[test]
    fn test_arms_once_triple_is_complete() {
        let registrar = full_registrar();
        let mut animator = ClapAnimator::new();
        animator.sync(&registrar);
        assert!(animator.is_armed());
        assert_eq!(animator.builds(), 1);
        // Five tracks plus two bursts
        assert_eq!(animator.timeline().entry_count(), 7);
        assert!((animator.timeline().duration_ms() - 1530.0).abs() < 1e-3);
    }

    #[test]
    fn test_repeated_sync_is_single_build() {
        let registrar = full_registrar();
        let mut animator = ClapAnimator::new();
        animator.sync(&registrar);
        let ids_before = animator.timeline().track_ids();
        for _ in 0..10 {
            animator.sync(&registrar);
        }
        assert_eq!(animator.builds(), 1);
        assert_eq!(animator.timeline().track_ids(), ids_before);
    }

    #[test]
    fn test_reregistered_nodes_do_not_rebuild() {
        let registrar = full_registrar();
        let mut animator = ClapAnimator::new();
        animator.sync(&registrar);
        // A re-render registers fresh handles; the registry keeps the
        // canonical nodes, so the triple is unchanged
        registrar.register(NodeHandle::new(RefKey::Count));
        registrar.register(NodeHandle::new(RefKey::Total));
        animator.sync(&registrar);
        assert_eq!(animator.builds(), 1);
    }

    #[test]
    fn test_distinct_triple_rebuilds() {
        let mut animator = ClapAnimator::new();
        animator.sync(&full_registrar());
        animator.sync(&full_registrar());
        assert_eq!(animator.builds(), 2);
    }

    #[test]
    fn test_arming_resets_surface_transform() {
        let registrar = full_registrar();
        let surface = registrar.get(RefKey::Surface).unwrap();
        surface.set_scale(0.5);
        surface.set_opacity(0.1);
        let mut animator = ClapAnimator::new();
        animator.sync(&registrar);
        let visual = surface.visual();
        assert!((visual.scale - 1.0).abs() < 1e-6);
        assert!((visual.opacity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_nodes_untouched_until_replay() {
        let registrar = full_registrar();
        let mut animator = ClapAnimator::new();
        animator.sync(&registrar);
        animator.tick(16.0);
        animator.tick(16.0);
        let surface = registrar.get(RefKey::Surface).unwrap();
        assert!((surface.visual().scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_replay_drives_surface_pop() {
        let registrar = full_registrar();
        let mut animator = ClapAnimator::new();
        animator.sync(&registrar);
        animator.replay();
        animator.tick(100.0);
        let surface = registrar.get(RefKey::Surface).unwrap();
        let mid = surface.visual().scale;
        assert!(mid > 1.0 && mid < 1.3, "expected mid-pop scale, got {mid}");
        animator.tick(250.0);
        assert!((surface.visual().scale - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_count_bubble_fades_in_then_out() {
        let registrar = full_registrar();
        let count = registrar.get(RefKey::Count).unwrap();
        let mut animator = ClapAnimator::new();
        animator.sync(&registrar);
        animator.replay();

        animator.tick(450.0);
        let visual = count.visual();
        assert!((visual.opacity - 0.5).abs() < 1e-4);
        assert!((visual.translate_y - -15.0).abs() < 1e-3);

        // Hold between fade-in and fade-out
        animator.tick(250.0);
        assert!((count.visual().opacity - 1.0).abs() < 1e-4);
        assert!((count.visual().translate_y - -30.0).abs() < 1e-3);

        // Fully faded out and risen away by the end
        animator.tick(400.0);
        assert!((count.visual().opacity - 0.0).abs() < 1e-4);
        assert!((count.visual().translate_y - -80.0).abs() < 1e-3);
    }

    #[test]
    fn test_total_label_settles_high_and_visible() {
        let registrar = full_registrar();
        let total = registrar.get(RefKey::Total).unwrap();
        let mut animator = ClapAnimator::new();
        animator.sync(&registrar);
        animator.replay();
        animator.tick(2000.0);
        assert!((total.visual().opacity - 1.0).abs() < 1e-4);
        assert!((total.visual().translate_y - -3.0).abs() < 1e-3);
    }

    #[test]
    fn test_burst_frames_once_armed() {
        let registrar = full_registrar();
        let mut animator = ClapAnimator::new();
        assert!(animator.polygon_frame().is_none());
        animator.sync(&registrar);
        animator.replay();
        animator.tick(780.0);
        let triangles = animator.polygon_frame().unwrap();
        let dots = animator.circle_frame().unwrap();
        assert_eq!(triangles.particles.len(), 5);
        assert_eq!(dots.particles.len(), 5);
        // Dot ring tweens 50 -> 75 linearly, so halfway sits at 62.5
        let p = &dots.particles[0];
        let dist = (p.x * p.x + p.y * p.y).sqrt();
        assert!((dist - 62.5).abs() < 0.1, "got {dist}");
    }

    #[test]
    fn test_replay_before_arming_is_silent() {
        let mut animator = ClapAnimator::new();
        animator.replay();
        animator.tick(16.0);
        assert!(!animator.is_playing());
    }
}
