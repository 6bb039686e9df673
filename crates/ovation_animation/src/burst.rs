//! Radial particle bursts
//!
//! A burst scatters a ring of identical particles outward from a center
//! point. It is pure geometry over time: the timeline samples it at an
//! absolute time and gets back per-particle positions and sizes, ready to
//! hand to whatever draws them.

use ovation_core::Color;
use smallvec::SmallVec;

use crate::easing::Easing;
use crate::values::Interpolate;

/// How each particle in a burst is drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleShape {
    /// Outlined triangle
    Polygon { stroke: Color, stroke_width: f32 },
    /// Filled dot
    Circle { fill: Color },
}

/// Static description of a burst
///
/// `speed` is a playback multiplier: the burst runs for
/// `duration_ms / speed` wall-clock milliseconds, so `0.2` stretches a
/// 300 ms tween to 1.5 s.
#[derive(Clone, Copy, Debug)]
pub struct BurstConfig {
    /// Number of particles spread evenly around the ring
    pub count: u32,
    /// Rotation of the whole ring, degrees clockwise from 12 o'clock
    pub angle_deg: f32,
    /// Ring radius at the start of the burst
    pub radius_from: f32,
    /// Ring radius at the end of the burst
    pub radius_to: f32,
    pub shape: ParticleShape,
    /// Particle size at the start of the burst
    pub particle_radius_from: f32,
    /// Particle size at the end of the burst
    pub particle_radius_to: f32,
    /// Extra spin applied to every particle on top of its travel direction
    pub particle_angle_deg: f32,
    /// Time before the burst begins
    pub delay_ms: f32,
    /// Nominal tween length, before `speed` is applied
    pub duration_ms: f32,
    pub speed: f32,
    pub easing: Easing,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count: 5,
            angle_deg: 0.0,
            radius_from: 0.0,
            radius_to: 50.0,
            shape: ParticleShape::Circle { fill: Color::WHITE },
            particle_radius_from: 3.0,
            particle_radius_to: 0.0,
            particle_angle_deg: 0.0,
            delay_ms: 0.0,
            duration_ms: 300.0,
            speed: 1.0,
            easing: Easing::Linear,
        }
    }
}

/// One particle of a sampled burst frame
///
/// `x`/`y` are offsets from the burst center, `y` negative upward.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Travel direction plus the configured particle spin
    pub angle_deg: f32,
}

/// State of every particle at one instant
#[derive(Clone, Debug)]
pub struct BurstFrame {
    /// Unit progress through the burst, clamped
    pub progress: f32,
    pub shape: ParticleShape,
    pub particles: SmallVec<[Particle; 8]>,
}

/// Sampled radial burst
#[derive(Clone, Debug)]
pub struct Burst {
    config: BurstConfig,
}

impl Burst {
    pub fn new(config: BurstConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BurstConfig {
        &self.config
    }

    /// Time the burst begins
    pub fn start_ms(&self) -> f32 {
        self.config.delay_ms
    }

    /// Wall-clock length of the burst with `speed` folded in
    pub fn effective_duration_ms(&self) -> f32 {
        self.config.duration_ms / self.config.speed.max(1e-6)
    }

    /// Time the burst finishes
    pub fn end_ms(&self) -> f32 {
        self.start_ms() + self.effective_duration_ms()
    }

    /// Sample the burst at an absolute timeline time
    ///
    /// Before the delay every particle sits at the starting ring; after the
    /// end the final frame holds.
    pub fn frame_at(&self, time_ms: f32) -> BurstFrame {
        let cfg = &self.config;
        let local = time_ms - cfg.delay_ms;
        let span = self.effective_duration_ms();
        let progress = if span <= 0.0 {
            1.0
        } else {
            (local / span).clamp(0.0, 1.0)
        };
        let eased = cfg.easing.apply(progress);

        let ring_radius = cfg.radius_from.lerp(&cfg.radius_to, eased);
        let particle_radius = cfg.particle_radius_from.lerp(&cfg.particle_radius_to, eased);

        let step = 360.0 / cfg.count.max(1) as f32;
        let particles = (0..cfg.count)
            .map(|i| {
                let direction = cfg.angle_deg + step * i as f32;
                let rad = direction.to_radians();
                Particle {
                    x: ring_radius * rad.sin(),
                    y: -ring_radius * rad.cos(),
                    radius: particle_radius,
                    angle_deg: direction + cfg.particle_angle_deg,
                }
            })
            .collect();

        BurstFrame {
            progress,
            shape: cfg.shape,
            particles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_config() -> BurstConfig {
        BurstConfig {
            count: 5,
            angle_deg: 30.0,
            radius_from: 50.0,
            radius_to: 95.0,
            delay_ms: 30.0,
            duration_ms: 300.0,
            speed: 0.2,
            ..Default::default()
        }
    }

    #[test]
    fn test_speed_stretches_duration() {
        let burst = Burst::new(ring_config());
        assert!((burst.effective_duration_ms() - 1500.0).abs() < 1e-3);
        assert!((burst.end_ms() - 1530.0).abs() < 1e-3);
    }

    #[test]
    fn test_particle_count_and_spread() {
        let burst = Burst::new(ring_config());
        let frame = burst.frame_at(30.0);
        assert_eq!(frame.particles.len(), 5);
        // Even spread: neighbours are 72 degrees apart
        let spin = frame.particles[1].angle_deg - frame.particles[0].angle_deg;
        assert!((spin - 72.0).abs() < 1e-4);
    }

    #[test]
    fn test_holds_start_ring_before_delay() {
        let burst = Burst::new(ring_config());
        let frame = burst.frame_at(0.0);
        assert!((frame.progress - 0.0).abs() < 1e-6);
        let p = &frame.particles[0];
        let dist = (p.x * p.x + p.y * p.y).sqrt();
        assert!((dist - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_linear_midpoint_radius() {
        let burst = Burst::new(ring_config());
        // Halfway through the stretched run: 30 + 750
        let frame = burst.frame_at(780.0);
        assert!((frame.progress - 0.5).abs() < 1e-4);
        let p = &frame.particles[0];
        let dist = (p.x * p.x + p.y * p.y).sqrt();
        assert!((dist - 72.5).abs() < 1e-2);
    }

    #[test]
    fn test_final_frame_holds() {
        let burst = Burst::new(ring_config());
        let frame = burst.frame_at(9999.0);
        assert!((frame.progress - 1.0).abs() < 1e-6);
        let p = &frame.particles[0];
        let dist = (p.x * p.x + p.y * p.y).sqrt();
        assert!((dist - 95.0).abs() < 1e-3);
        assert!((p.radius - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_direction_geometry() {
        // Particle 0 fires 30 degrees clockwise from straight up
        let burst = Burst::new(BurstConfig {
            angle_deg: 30.0,
            radius_from: 100.0,
            radius_to: 100.0,
            ..Default::default()
        });
        let frame = burst.frame_at(0.0);
        let p = &frame.particles[0];
        assert!((p.x - 50.0).abs() < 1e-3);
        assert!((p.y - -86.602).abs() < 1e-2);
    }

    #[test]
    fn test_particle_spin_offset() {
        let burst = Burst::new(BurstConfig {
            angle_deg: 30.0,
            particle_angle_deg: 210.0,
            ..Default::default()
        });
        let frame = burst.frame_at(0.0);
        assert!((frame.particles[0].angle_deg - 240.0).abs() < 1e-4);
    }

    #[test]
    fn test_shape_carried_into_frame() {
        let stroke = Color::rgb8(211, 54, 0).with_alpha(0.5);
        let burst = Burst::new(BurstConfig {
            shape: ParticleShape::Polygon {
                stroke,
                stroke_width: 2.0,
            },
            ..Default::default()
        });
        let frame = burst.frame_at(0.0);
        match frame.shape {
            ParticleShape::Polygon { stroke_width, .. } => {
                assert!((stroke_width - 2.0).abs() < 1e-6)
            }
            _ => panic!("expected polygon particles"),
        }
    }

    #[test]
    fn test_eased_burst_front_loads_travel() {
        let burst = Burst::new(BurstConfig {
            radius_from: 50.0,
            radius_to: 95.0,
            easing: Easing::CubicBezier(0.1, 1.0, 0.3, 1.0),
            ..Default::default()
        });
        let frame = burst.frame_at(150.0);
        let p = &frame.particles[0];
        let dist = (p.x * p.x + p.y * p.y).sqrt();
        // Heavy deceleration: half the time covers nearly all the travel
        assert!(dist > 90.0, "expected near-final radius, got {dist}");
    }
}
