//! Replayable animation timeline
//!
//! A timeline owns a set of tracks and bursts and advances them under one
//! clock. It is built once, when the target nodes first exist, and then
//! replayed from zero on every trigger. Finishing pauses the clock but
//! keeps every entry, so the next replay costs nothing.

use slotmap::{new_key_type, SlotMap};

use crate::burst::{Burst, BurstFrame};
use crate::easing::Easing;
use crate::track::Track;

new_key_type! {
    /// Stable handle to a track within one timeline
    pub struct TrackId;

    /// Stable handle to a burst within one timeline
    pub struct BurstId;
}

/// Tracks and bursts under a shared clock
pub struct Timeline {
    tracks: SlotMap<TrackId, Track>,
    bursts: SlotMap<BurstId, Burst>,
    time_ms: f32,
    playing: bool,
    playback_rate: f32,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            tracks: SlotMap::with_key(),
            bursts: SlotMap::with_key(),
            time_ms: 0.0,
            playing: false,
            playback_rate: 1.0,
        }
    }

    // ========================================================================
    // Building
    // ========================================================================

    /// Add a linear tween from `start` to `end`, beginning at `offset_ms`
    pub fn add(&mut self, offset_ms: f32, duration_ms: f32, start: f32, end: f32) -> TrackId {
        self.add_track(Track::new(offset_ms, duration_ms, start, end))
    }

    /// Add a tween with an explicit easing curve
    pub fn add_with_easing(
        &mut self,
        offset_ms: f32,
        duration_ms: f32,
        start: f32,
        end: f32,
        easing: Easing,
    ) -> TrackId {
        self.add_track(Track::with_easing(offset_ms, duration_ms, start, end, easing))
    }

    /// Add a prebuilt track (chained segments, custom easing)
    pub fn add_track(&mut self, track: Track) -> TrackId {
        self.tracks.insert(track)
    }

    pub fn add_burst(&mut self, burst: Burst) -> BurstId {
        self.bursts.insert(burst)
    }

    // ========================================================================
    // Playback
    // ========================================================================

    /// Rewind to zero and start playing
    ///
    /// Also restarts a timeline that is mid-flight, which is what makes
    /// rapid re-triggering snap the animation back to its first frame.
    pub fn replay(&mut self) {
        self.time_ms = 0.0;
        self.playing = true;
        tracing::debug!(
            "Timeline: replay ({} tracks, {} bursts, {:.0}ms)",
            self.tracks.len(),
            self.bursts.len(),
            self.duration_ms()
        );
    }

    /// Pause without rewinding
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Jump the clock to an absolute time, clamped to the timeline span
    ///
    /// Seeking does not change whether the timeline is playing.
    pub fn seek(&mut self, time_ms: f32) {
        self.time_ms = time_ms.clamp(0.0, self.duration_ms());
    }

    /// Advance the clock by a frame delta
    ///
    /// When the clock reaches the end it clamps there and playback stops;
    /// every track keeps reporting its final value until the next replay.
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }
        self.time_ms += dt_ms * self.playback_rate;
        let duration = self.duration_ms();
        if self.time_ms >= duration {
            self.time_ms = duration;
            self.playing = false;
        }
    }

    /// Slow down or speed up the clock (1.0 is real time)
    pub fn set_playback_rate(&mut self, rate: f32) {
        self.playback_rate = rate.max(0.0);
    }

    pub fn playback_rate(&self) -> f32 {
        self.playback_rate
    }

    // ========================================================================
    // Sampling
    // ========================================================================

    /// Current value of a track, or `None` for a stale id
    pub fn value(&self, id: TrackId) -> Option<f32> {
        self.tracks.get(id).map(|t| t.value_at(self.time_ms))
    }

    /// Current frame of a burst, or `None` for a stale id
    pub fn burst_frame(&self, id: BurstId) -> Option<BurstFrame> {
        self.bursts.get(id).map(|b| b.frame_at(self.time_ms))
    }

    /// Unit progress through the whole timeline
    pub fn progress(&self) -> f32 {
        let duration = self.duration_ms();
        if duration <= 0.0 {
            return 0.0;
        }
        (self.time_ms / duration).clamp(0.0, 1.0)
    }

    /// Total span: the latest end time over every track and burst
    pub fn duration_ms(&self) -> f32 {
        let track_end = self
            .tracks
            .values()
            .map(|t| t.end_ms())
            .fold(0.0f32, f32::max);
        let burst_end = self
            .bursts
            .values()
            .map(|b| b.end_ms())
            .fold(0.0f32, f32::max);
        track_end.max(burst_end)
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.time_ms
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty() && self.bursts.is_empty()
    }

    /// Number of tracks plus bursts
    pub fn entry_count(&self) -> usize {
        self.tracks.len() + self.bursts.len()
    }

    pub fn track_ids(&self) -> Vec<TrackId> {
        self.tracks.keys().collect()
    }

    pub fn burst_ids(&self) -> Vec<BurstId> {
        self.bursts.keys().collect()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
