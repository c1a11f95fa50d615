/// Which of the two typed headlines a typewriter drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypewriterSlot {
    Introduction,
    Footer,
}

/// One family of scheduled callbacks. At most one timer per family is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerFamily {
    Carousel,
    SlideAnimation,
    OverlayClose,
    Typewriter(TypewriterSlot),
    CopyFeedback,
    MosaicSettle,
}

impl TimerFamily {
    pub const ALL: [TimerFamily; 7] = [
        TimerFamily::Carousel,
        TimerFamily::SlideAnimation,
        TimerFamily::OverlayClose,
        TimerFamily::Typewriter(TypewriterSlot::Introduction),
        TimerFamily::Typewriter(TypewriterSlot::Footer),
        TimerFamily::CopyFeedback,
        TimerFamily::MosaicSettle,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoTarget {
    Hero,
    /// Logical position in the mosaic; slot 1 is the center.
    Mosaic(usize),
}

/// Side effects requested by the core. The runtime carries them out.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Arm `timer`, replacing whatever was armed for that family.
    Arm {
        timer: TimerFamily,
        delay_ms: u32,
        repeat: bool,
    },
    Cancel(TimerFamily),
    Play(VideoTarget),
    Pause(VideoTarget),
    PauseAndRewind(VideoTarget),
    WriteClipboard(String),
}

impl Command {
    pub fn once(timer: TimerFamily, delay_ms: u32) -> Self {
        Command::Arm {
            timer,
            delay_ms,
            repeat: false,
        }
    }

    pub fn every(timer: TimerFamily, delay_ms: u32) -> Self {
        Command::Arm {
            timer,
            delay_ms,
            repeat: true,
        }
    }
}

/// Everything that can happen to the landing page.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Mounted,
    ViewAttached,
    Unmounted,
    ToggleOverlay,
    NextSlide,
    PrevSlide,
    SelectSlide(usize),
    TogglePause,
    TouchStart(f64),
    TouchEnd(f64),
    VideoClicked(usize),
    ToggleHeroVideo,
    ToggleFaq(usize),
    CopyContact,
    ClipboardResult(Result<(), String>),
    TimerFired(TimerFamily),
}
