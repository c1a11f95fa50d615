use super::command::{Command, TimerFamily};
use super::error::LandingError;

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub background_image: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    fn step(self, index: usize, len: usize) -> usize {
        match self {
            Direction::Next => (index + 1) % len,
            Direction::Prev => (index + len - 1) % len,
        }
    }
}

/// Auto-advancing slide deck.
///
/// `current` is always a valid index into `slides`, which is never empty.
/// Every navigation restarts the entry animation and, unless paused,
/// re-arms the autoplay countdown.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    slides: Vec<Slide>,
    current: usize,
    paused: bool,
    show_animation: bool,
    slide_duration_ms: u32,
}

impl Carousel {
    pub fn new(slides: Vec<Slide>, slide_duration_ms: u32) -> Result<Self, LandingError> {
        if slides.is_empty() {
            return Err(LandingError::EmptySlides);
        }
        Ok(Self {
            slides,
            current: 0,
            paused: false,
            show_animation: true,
            slide_duration_ms,
        })
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn show_animation(&self) -> bool {
        self.show_animation
    }

    /// Clears the autoplay timer and arms a fresh one unless paused.
    pub fn start_timer(&self) -> Vec<Command> {
        if self.paused {
            vec![Command::Cancel(TimerFamily::Carousel)]
        } else {
            vec![Command::every(TimerFamily::Carousel, self.slide_duration_ms)]
        }
    }

    pub fn advance(&mut self, direction: Direction) -> Vec<Command> {
        self.current = direction.step(self.current, self.slides.len());
        let mut commands = self.reset_animation();
        if !self.paused {
            commands.extend(self.start_timer());
        }
        commands
    }

    /// Jumps to `index` and always resumes autoplay.
    pub fn select(&mut self, index: usize) -> Result<Vec<Command>, LandingError> {
        if index >= self.slides.len() {
            return Err(LandingError::SlideOutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.current = index;
        self.paused = false;
        let mut commands = self.reset_animation();
        commands.extend(self.start_timer());
        Ok(commands)
    }

    pub fn toggle_pause(&mut self) -> Vec<Command> {
        self.paused = !self.paused;
        if self.paused {
            vec![Command::Cancel(TimerFamily::Carousel)]
        } else {
            let mut commands = self.reset_animation();
            commands.extend(self.start_timer());
            commands
        }
    }

    /// Autoplay tick. A tick that slips in after pausing does nothing.
    pub fn tick(&mut self) -> Vec<Command> {
        if self.paused {
            return Vec::new();
        }
        self.advance(Direction::Next)
    }

    /// Drops the animation flag now and raises it again on the next tick,
    /// so the enter animation keyed on it replays.
    pub fn reset_animation(&mut self) -> Vec<Command> {
        self.show_animation = false;
        vec![Command::once(TimerFamily::SlideAnimation, 0)]
    }

    pub fn restore_animation(&mut self) {
        self.show_animation = true;
    }
}

/// Horizontal touch tracking for one gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeGesture {
    start_x: Option<f64>,
}

impl SwipeGesture {
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Ends the gesture. A touch end without a start is ignored.
    pub fn end(&mut self, x: f64, threshold: f64) -> Option<Direction> {
        let start_x = self.start_x.take()?;
        classify_swipe(start_x - x, threshold)
    }
}

/// Positive distance means the finger moved left, which shows the next slide.
pub fn classify_swipe(distance: f64, threshold: f64) -> Option<Direction> {
    if distance > threshold {
        Some(Direction::Next)
    } else if distance < -threshold {
        Some(Direction::Prev)
    } else {
        None
    }
}
