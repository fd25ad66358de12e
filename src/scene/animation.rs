//! Frame-sequence playback
//!
//! An [`AnimatedSprite`] holds a fixed list of pre-scaled frames and picks
//! the one to show each time it is drawn. Advancing is time-gated and moves
//! at most one frame per call, so the effective rate can never exceed the
//! host tick rate.

use std::time::Instant;

use anyhow::{bail, Context, Result};
use log::{debug, warn};

use super::canvas::Graphics;
use super::types::{ImageHandle, Millis, Size};
use super::HOST_TICK_RATE;

/// Where the frames of an animation live on disk
///
/// Frame `i` is `{folder}/{leading_name}{extra zeroes}{i padded}{extension}`,
/// where `i` is zero-padded to the digit count of `total_frames`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSource {
    pub folder: String,
    pub leading_name: String,
    /// Includes the dot, e.g. ".png"
    pub extension: String,
    pub total_frames: usize,
    /// Zeroes in front of the padded index beyond what `total_frames` needs
    pub extra_leading_zeroes: usize,
    pub frame_rate: u32,
}

impl AnimationSource {
    pub fn frame_path(&self, index: usize) -> String {
        let width = self.total_frames.to_string().len();
        format!(
            "{}/{}{}{:0width$}{}",
            self.folder,
            self.leading_name,
            "0".repeat(self.extra_leading_zeroes),
            index,
            self.extension,
            width = width
        )
    }

    pub fn frame_paths(&self) -> Vec<String> {
        (0..self.total_frames).map(|i| self.frame_path(i)).collect()
    }
}

fn clamp_frame_rate(frame_rate: u32) -> u32 {
    let clamped = frame_rate.clamp(1, HOST_TICK_RATE);
    if clamped != frame_rate {
        warn!("frame rate {frame_rate} out of range, using {clamped}");
    }
    clamped
}

/// Callback run while a bounded animation has no plays left
pub type FinishedAction = Box<dyn FnMut()>;

pub struct AnimatedSprite {
    /// Frames as loaded, kept so rescaling never compounds
    source_frames: Vec<ImageHandle>,
    frames: Vec<ImageHandle>,
    size: Size,
    frame_rate: u32,
    looping: bool,
    remaining_plays: u32,
    /// Frame shown once a bounded animation has run out of plays
    inactive_frame: usize,
    frame_index: usize,
    last_advance: Millis,
    finished_action: Option<FinishedAction>,
}

impl AnimatedSprite {
    /// Build from already-loaded frames, scaling each to `size`
    pub fn from_frames(
        source_frames: Vec<ImageHandle>,
        frame_rate: u32,
        size: Size,
        gfx: &mut dyn Graphics,
        now: Millis,
    ) -> Result<Self> {
        if source_frames.is_empty() {
            bail!("an animation needs at least one frame");
        }
        let frames = source_frames
            .iter()
            .map(|frame| gfx.scale_image(*frame, size))
            .collect();
        Ok(Self {
            source_frames,
            frames,
            size,
            frame_rate: clamp_frame_rate(frame_rate),
            looping: true,
            remaining_plays: 0,
            inactive_frame: 0,
            frame_index: 0,
            last_advance: now,
            finished_action: None,
        })
    }

    /// Load every frame described by `source`
    pub fn load(
        source: &AnimationSource,
        size: Size,
        gfx: &mut dyn Graphics,
        now: Millis,
    ) -> Result<Self> {
        let started = Instant::now();
        debug!(
            "Loading animation {}/{} ...",
            source.folder, source.leading_name
        );

        let frames = source
            .frame_paths()
            .iter()
            .map(|path| {
                gfx.load_image(path)
                    .with_context(|| format!("failed to load animation frame {path}"))
            })
            .collect::<Result<Vec<_>>>()?;
        let sprite = Self::from_frames(frames, source.frame_rate, size, gfx, now)?;

        debug!(
            "... finished loading animation {}/{} in {} ms",
            source.folder,
            source.leading_name,
            started.elapsed().as_millis()
        );
        Ok(sprite)
    }

    pub fn total_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn remaining_plays(&self) -> u32 {
        self.remaining_plays
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Play `times` more passes before falling back to the inactive frame
    pub fn play(&mut self, times: u32) {
        self.remaining_plays = times;
    }

    pub fn set_frame_rate(&mut self, frame_rate: u32) {
        self.frame_rate = clamp_frame_rate(frame_rate);
    }

    pub fn set_inactive_frame(&mut self, index: usize) {
        self.inactive_frame = index.min(self.frames.len() - 1);
    }

    pub fn set_finished_action(&mut self, action: FinishedAction) {
        self.finished_action = Some(action);
    }

    /// Rescale every frame now
    pub fn set_scale(&mut self, size: Size, gfx: &mut dyn Graphics) {
        self.size = size;
        self.frames = self
            .source_frames
            .iter()
            .map(|frame| gfx.scale_image(*frame, size))
            .collect();
    }

    fn advance_if_due(&mut self, now: Millis) {
        let frame_delay_ms = 1000.0 / self.frame_rate as f64;
        if now.since(self.last_advance) as f64 >= frame_delay_ms {
            self.frame_index = (self.frame_index + 1) % self.frames.len();
            self.last_advance = now;
        }
    }

    /// The frame to draw at `now`
    ///
    /// With no plays left on a non-looping sprite the finished action runs on
    /// every call, not just the first.
    pub fn current_frame(&mut self, now: Millis) -> ImageHandle {
        if self.looping {
            self.advance_if_due(now);
            return self.frames[self.frame_index];
        }

        if self.remaining_plays > 0 {
            if self.frame_index >= self.frames.len() - 1 {
                self.remaining_plays -= 1;
            }
            self.advance_if_due(now);
            return self.frames[self.frame_index];
        }

        if let Some(action) = self.finished_action.as_mut() {
            action();
        }
        self.frames[self.inactive_frame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_paths_pad_to_total_digits() {
        let source = AnimationSource {
            folder: "Assets/UI Elements/Title Screen".to_string(),
            leading_name: "Title Screen".to_string(),
            extension: ".jpg".to_string(),
            total_frames: 71,
            extra_leading_zeroes: 0,
            frame_rate: 24,
        };
        assert_eq!(
            source.frame_path(3),
            "Assets/UI Elements/Title Screen/Title Screen03.jpg"
        );
        assert_eq!(source.frame_paths().len(), 71);
        assert!(source.frame_paths()[70].ends_with("Title Screen70.jpg"));
    }

    #[test]
    fn extra_zeroes_go_before_padding() {
        let source = AnimationSource {
            folder: "anim".to_string(),
            leading_name: "seq".to_string(),
            extension: ".png".to_string(),
            total_frames: 10,
            extra_leading_zeroes: 2,
            frame_rate: 12,
        };
        assert_eq!(source.frame_path(7), "anim/seq0007.png");
        assert_eq!(source.frame_path(9), "anim/seq0009.png");
    }
}
