use crate::config::{OVERLAY_CLIP_FRAMES, OVERLAY_FRAME_MS, OVERLAY_MAX_LOOPS};

/// Playback collaborator that owns the actual cutscene frames.
///
/// The overlay only asks whether a frame is ready, steps it, and restarts the
/// clip for every new pass. Decoding, frame pacing and audio sync live behind
/// this seam.
pub trait MediaPlayback {
    /// Rewinds to the first frame and starts playing.
    fn start(&mut self);

    fn is_frame_available(&self) -> bool;

    fn advance_frame(&mut self);

    /// True once the current pass has shown its last frame.
    fn is_finished(&self) -> bool;
}

/// Clip that is nothing but a frame counter.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FramedClip {
    frames: usize,
    frame_ms: u64,
    position: usize,
    started: bool,
}

impl Default for FramedClip {
    fn default() -> Self {
        Self::new(OVERLAY_CLIP_FRAMES, OVERLAY_FRAME_MS)
    }
}

impl FramedClip {
    #[must_use]
    pub fn new(frames: usize, frame_ms: u64) -> Self {
        Self {
            frames,
            frame_ms,
            position: 0,
            started: false,
        }
    }

    /// Index of the frame currently on screen.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn frame_ms(&self) -> u64 {
        self.frame_ms
    }
}

impl MediaPlayback for FramedClip {
    fn start(&mut self) {
        self.position = 0;
        self.started = true;
    }

    fn is_frame_available(&self) -> bool {
        self.started && self.position < self.frames
    }

    fn advance_frame(&mut self) {
        if self.position < self.frames {
            self.position += 1;
        }
    }

    fn is_finished(&self) -> bool {
        self.started && self.position >= self.frames
    }
}

/// Result of one overlay update.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OverlayProgress {
    Playing,
    /// A pass ended and the clip was restarted.
    Looped,
    /// The final allowed pass ended.
    Exhausted,
}

/// Loop bookkeeping for the victory cutscene.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct OverlayPlayer {
    loop_count: u32,
    max_loops: u32,
    active: bool,
    is_first_time_trigger: bool,
}

impl OverlayPlayer {
    /// Starts the cutscene from its first frame.
    pub fn start<M: MediaPlayback + ?Sized>(media: &mut M, is_first_time_trigger: bool) -> Self {
        media.start();
        Self {
            loop_count: 0,
            max_loops: OVERLAY_MAX_LOOPS,
            active: true,
            is_first_time_trigger,
        }
    }

    #[must_use]
    pub fn loop_count(&self) -> u32 {
        self.loop_count
    }

    #[must_use]
    pub fn max_loops(&self) -> u32 {
        self.max_loops
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_first_time_trigger(&self) -> bool {
        self.is_first_time_trigger
    }

    /// Shows the next frame, or closes the pass when the clip has ended.
    pub fn update<M: MediaPlayback + ?Sized>(&mut self, media: &mut M) -> OverlayProgress {
        if !self.active {
            return OverlayProgress::Exhausted;
        }

        if !media.is_finished() {
            if media.is_frame_available() {
                media.advance_frame();
            }
            return OverlayProgress::Playing;
        }

        self.loop_count = (self.loop_count + 1).min(self.max_loops);
        if self.loop_count >= self.max_loops {
            self.active = false;
            return OverlayProgress::Exhausted;
        }

        media.start();
        OverlayProgress::Looped
    }

    /// Stops playback early.
    pub fn skip(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{FramedClip, MediaPlayback, OverlayPlayer, OverlayProgress};

    #[test]
    fn clip_plays_its_frames_then_finishes() {
        let mut clip = FramedClip::new(3, 40);
        assert!(!clip.is_frame_available());
        assert!(!clip.is_finished());

        clip.start();
        for _ in 0..3 {
            assert!(clip.is_frame_available());
            clip.advance_frame();
        }

        assert!(clip.is_finished());
        assert!(!clip.is_frame_available());

        clip.start();
        assert_eq!(clip.position(), 0);
        assert!(!clip.is_finished());
    }

    #[test]
    fn each_finished_pass_counts_one_loop() {
        let mut clip = FramedClip::new(2, 40);
        let mut overlay = OverlayPlayer::start(&mut clip, true);

        assert_eq!(overlay.update(&mut clip), OverlayProgress::Playing);
        assert_eq!(overlay.update(&mut clip), OverlayProgress::Playing);
        assert_eq!(overlay.update(&mut clip), OverlayProgress::Looped);
        assert_eq!(overlay.loop_count(), 1);
        assert_eq!(clip.position(), 0);
        assert!(overlay.is_first_time_trigger());
    }

    #[test]
    fn overlay_exhausts_after_max_loops() {
        let mut clip = FramedClip::new(0, 40);
        let mut overlay = OverlayPlayer::start(&mut clip, true);

        for _ in 0..31 {
            assert_eq!(overlay.update(&mut clip), OverlayProgress::Looped);
        }
        assert!(overlay.is_active());

        assert_eq!(overlay.update(&mut clip), OverlayProgress::Exhausted);
        assert_eq!(overlay.loop_count(), 32);
        assert!(!overlay.is_active());

        assert_eq!(overlay.update(&mut clip), OverlayProgress::Exhausted);
        assert_eq!(overlay.loop_count(), 32);
    }

    #[test]
    fn skip_deactivates() {
        let mut clip = FramedClip::default();
        let mut overlay = OverlayPlayer::start(&mut clip, false);

        overlay.skip();

        assert!(!overlay.is_active());
        assert_eq!(overlay.update(&mut clip), OverlayProgress::Exhausted);
    }
}
