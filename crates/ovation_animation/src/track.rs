//! Scalar tween tracks
//!
//! A track owns every value a single property takes over a timeline: an
//! offset, a tween, and optionally chained follow-up segments (fade in,
//! hold, fade out). Keeping the chain inside one track means one writer
//! per property; a separate track per segment would fight over the value
//! during the gaps.

use smallvec::SmallVec;

use crate::easing::Easing;
use crate::values::Interpolate;

#[derive(Clone, Copy, Debug)]
struct Segment {
    /// Dead time before this segment begins
    gap_ms: f32,
    duration_ms: f32,
    start: f32,
    end: f32,
    easing: Easing,
}

impl Segment {
    fn sample(&self, local_ms: f32) -> f32 {
        if self.duration_ms <= 0.0 {
            return self.end;
        }
        let progress = (local_ms / self.duration_ms).clamp(0.0, 1.0);
        self.start.lerp(&self.end, self.easing.apply(progress))
    }
}

/// Piecewise tween of one scalar property
///
/// Segments play back to back, each after its own gap. Outside every
/// segment the track holds: the first start value before it begins, the
/// previous segment's end value inside a gap, and the final end value
/// forever after.
#[derive(Clone, Debug)]
pub struct Track {
    segments: SmallVec<[Segment; 2]>,
}

impl Track {
    /// Linear tween from `start` to `end`, beginning at `offset_ms`
    pub fn new(offset_ms: f32, duration_ms: f32, start: f32, end: f32) -> Self {
        Self::with_easing(offset_ms, duration_ms, start, end, Easing::Linear)
    }

    /// Tween with an explicit easing curve
    pub fn with_easing(
        offset_ms: f32,
        duration_ms: f32,
        start: f32,
        end: f32,
        easing: Easing,
    ) -> Self {
        let mut segments = SmallVec::new();
        segments.push(Segment {
            gap_ms: offset_ms.max(0.0),
            duration_ms: duration_ms.max(0.0),
            start,
            end,
            easing,
        });
        Self { segments }
    }

    /// Chain a linear follow-up segment
    ///
    /// Starts `gap_ms` after the previous segment ends and tweens from the
    /// previous end value to `to`.
    pub fn then(self, gap_ms: f32, duration_ms: f32, to: f32) -> Self {
        self.then_with_easing(gap_ms, duration_ms, to, Easing::Linear)
    }

    /// Chain a follow-up segment with an explicit easing curve
    pub fn then_with_easing(
        mut self,
        gap_ms: f32,
        duration_ms: f32,
        to: f32,
        easing: Easing,
    ) -> Self {
        let from = self.end_value();
        self.segments.push(Segment {
            gap_ms: gap_ms.max(0.0),
            duration_ms: duration_ms.max(0.0),
            start: from,
            end: to,
            easing,
        });
        self
    }

    /// Sample the track at an absolute timeline time
    pub fn value_at(&self, time_ms: f32) -> f32 {
        let mut cursor = 0.0;
        let mut held = self.start_value();
        for segment in &self.segments {
            let begin = cursor + segment.gap_ms;
            let finish = begin + segment.duration_ms;
            if time_ms < begin {
                return held;
            }
            if time_ms < finish {
                return segment.sample(time_ms - begin);
            }
            held = segment.end;
            cursor = finish;
        }
        held
    }

    /// Time the first segment begins
    pub fn start_ms(&self) -> f32 {
        self.segments[0].gap_ms
    }

    /// Time the last segment finishes
    pub fn end_ms(&self) -> f32 {
        self.segments
            .iter()
            .map(|s| s.gap_ms + s.duration_ms)
            .sum()
    }

    /// Value before the track begins
    pub fn start_value(&self) -> f32 {
        self.segments[0].start
    }

    /// Value after the track finishes
    pub fn end_value(&self) -> f32 {
        self.segments[self.segments.len() - 1].end
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}
