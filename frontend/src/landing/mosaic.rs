use super::command::{Command, TimerFamily, VideoTarget};
use super::error::LandingError;

pub const SLOTS: usize = 3;
pub const CENTER: usize = 1;

/// Three-video mosaic where only the center slot plays.
///
/// `order[slot]` is the source index shown in `slot`; `order` is always a
/// permutation of `0..SLOTS`.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoMosaic {
    sources: [String; SLOTS],
    order: [usize; SLOTS],
}

impl VideoMosaic {
    pub fn new(sources: [String; SLOTS]) -> Self {
        Self {
            sources,
            order: [0, 1, 2],
        }
    }

    pub fn order(&self) -> [usize; SLOTS] {
        self.order
    }

    pub fn source_at(&self, slot: usize) -> Option<&str> {
        self.order
            .get(slot)
            .map(|&source| self.sources[source].as_str())
    }

    /// Plays the center video and stops the rest at their start.
    pub fn enforce_center_only(&self) -> Vec<Command> {
        (0..SLOTS)
            .map(|slot| {
                if slot == CENTER {
                    Command::Play(VideoTarget::Mosaic(slot))
                } else {
                    Command::PauseAndRewind(VideoTarget::Mosaic(slot))
                }
            })
            .collect()
    }

    /// Moves the clicked video into the center. Playback is re-applied on
    /// the next tick, once the view has re-rendered the new order.
    pub fn swap_with_center(&mut self, clicked: usize) -> Result<Vec<Command>, LandingError> {
        if clicked >= SLOTS {
            return Err(LandingError::VideoSlotOutOfRange(clicked));
        }
        if clicked == CENTER {
            return Ok(Vec::new());
        }
        self.order.swap(CENTER, clicked);
        Ok(vec![Command::once(TimerFamily::MosaicSettle, 0)])
    }
}

/// Play/pause state of the hero background video.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroVideo {
    playing: bool,
}

impl Default for HeroVideo {
    fn default() -> Self {
        Self { playing: true }
    }
}

impl HeroVideo {
    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn toggle(&mut self) -> Vec<Command> {
        let command = if self.playing {
            Command::Pause(VideoTarget::Hero)
        } else {
            Command::Play(VideoTarget::Hero)
        };
        self.playing = !self.playing;
        vec![command]
    }
}
