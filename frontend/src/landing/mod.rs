//! Landing page choreography, free of any DOM or timer access.
//!
//! [`LandingController`] owns one state struct per behavior and turns every
//! [`Event`] into a list of [`Command`]s for the runtime to carry out. The
//! `revision` counter moves whenever rendered state changes so the view knows when to
//! redraw.

pub mod carousel;
pub mod command;
pub mod contact;
pub mod error;
pub mod faq;
pub mod mosaic;
pub mod overlay;
pub mod typewriter;

use log::{debug, info, warn};

use crate::config::LandingConfig;
use crate::content;
use carousel::{Carousel, Direction, Slide, SwipeGesture};
use command::{Command, Event, TimerFamily, TypewriterSlot};
use contact::ContactCopy;
use error::LandingError;
use faq::{Faq, FaqList};
use mosaic::{HeroVideo, VideoMosaic, SLOTS};
use overlay::Overlay;
use typewriter::{Typewriter, TypewriterTiming};

/// Everything the page renders; `revision` moves only when this changes.
#[derive(Debug, PartialEq)]
struct ViewState {
    overlay: (bool, bool),
    slide: (usize, bool, bool),
    video_order: [usize; SLOTS],
    hero_playing: bool,
    introduction: String,
    footer: String,
    faqs_open: Vec<bool>,
    copied: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Active,
    TornDown,
}

/// Seed data for one page instance.
#[derive(Debug, Clone)]
pub struct LandingContent {
    pub slides: Vec<Slide>,
    pub faqs: Vec<Faq>,
    pub video_sources: [String; SLOTS],
    pub introduction: String,
    pub footer: String,
}

impl Default for LandingContent {
    fn default() -> Self {
        Self {
            slides: content::slides(),
            faqs: content::faqs(),
            video_sources: content::video_sources(),
            introduction: content::INTRODUCTION_TEXT.to_string(),
            footer: content::FOOTER_TEXT.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LandingController {
    config: LandingConfig,
    overlay: Overlay,
    carousel: Carousel,
    swipe: SwipeGesture,
    mosaic: VideoMosaic,
    hero: HeroVideo,
    introduction: Typewriter,
    footer: Typewriter,
    faqs: FaqList,
    contact: ContactCopy,
    lifecycle: Lifecycle,
    revision: u64,
}

impl LandingController {
    pub fn new(config: LandingConfig, content: LandingContent) -> Result<Self, LandingError> {
        let timing = TypewriterTiming {
            typing_ms: config.typing_speed_ms,
            deleting_ms: config.deleting_speed_ms,
            pause_ms: config.pause_between_cycles_ms,
        };
        Ok(Self {
            overlay: Overlay::new(config.overlay_close_ms),
            carousel: Carousel::new(content.slides, config.slide_duration_ms)?,
            swipe: SwipeGesture::default(),
            mosaic: VideoMosaic::new(content.video_sources),
            hero: HeroVideo::default(),
            introduction: Typewriter::new(
                TypewriterSlot::Introduction,
                content.introduction,
                timing.clone(),
            ),
            footer: Typewriter::new(TypewriterSlot::Footer, content.footer, timing),
            faqs: FaqList::new(content.faqs),
            contact: ContactCopy::new(config.contact.clone(), config.copy_feedback_ms),
            config,
            lifecycle: Lifecycle::Created,
            revision: 0,
        })
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn mosaic(&self) -> &VideoMosaic {
        &self.mosaic
    }

    pub fn hero(&self) -> &HeroVideo {
        &self.hero
    }

    pub fn faqs(&self) -> &[Faq] {
        self.faqs.entries()
    }

    pub fn contact(&self) -> &ContactCopy {
        &self.contact
    }

    pub fn typed(&self, slot: TypewriterSlot) -> &str {
        match slot {
            TypewriterSlot::Introduction => self.introduction.displayed(),
            TypewriterSlot::Footer => self.footer.displayed(),
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[cfg(test)]
    pub fn is_torn_down(&self) -> bool {
        self.lifecycle == Lifecycle::TornDown
    }

    pub fn dispatch(&mut self, event: Event) -> Vec<Command> {
        if self.lifecycle == Lifecycle::TornDown {
            debug!("Ignoring {:?} after teardown", event);
            return Vec::new();
        }
        let before = self.view();
        match self.apply(event) {
            Ok(commands) => {
                if self.view() != before {
                    self.revision += 1;
                }
                commands
            }
            Err(e) => {
                warn!("Rejected landing event: {}", e);
                Vec::new()
            }
        }
    }

    fn view(&self) -> ViewState {
        ViewState {
            overlay: (self.overlay.visible(), self.overlay.closing()),
            slide: (
                self.carousel.current(),
                self.carousel.is_paused(),
                self.carousel.show_animation(),
            ),
            video_order: self.mosaic.order(),
            hero_playing: self.hero.playing(),
            introduction: self.introduction.displayed().to_string(),
            footer: self.footer.displayed().to_string(),
            faqs_open: self.faqs.entries().iter().map(|faq| faq.is_open).collect(),
            copied: self.contact.copied(),
        }
    }

    fn apply(&mut self, event: Event) -> Result<Vec<Command>, LandingError> {
        let commands = match event {
            Event::Mounted => self.mount(),
            Event::ViewAttached => self.mosaic.enforce_center_only(),
            Event::Unmounted => self.tear_down(),
            Event::ToggleOverlay => self.overlay.toggle(),
            Event::NextSlide => self.carousel.advance(Direction::Next),
            Event::PrevSlide => self.carousel.advance(Direction::Prev),
            Event::SelectSlide(index) => self.carousel.select(index)?,
            Event::TogglePause => self.carousel.toggle_pause(),
            Event::TouchStart(x) => {
                self.swipe.start(x);
                Vec::new()
            }
            Event::TouchEnd(x) => match self.swipe.end(x, self.config.swipe_threshold) {
                Some(direction) => self.carousel.advance(direction),
                None => Vec::new(),
            },
            Event::VideoClicked(slot) => self.mosaic.swap_with_center(slot)?,
            Event::ToggleHeroVideo => self.hero.toggle(),
            Event::ToggleFaq(index) => {
                self.faqs.toggle(index)?;
                Vec::new()
            }
            Event::CopyContact => self.contact.copy(),
            Event::ClipboardResult(result) => self.contact.on_result(result),
            Event::TimerFired(timer) => self.on_timer(timer),
        };
        Ok(commands)
    }

    fn mount(&mut self) -> Vec<Command> {
        if self.lifecycle == Lifecycle::Active {
            debug!("Landing page already mounted");
            return Vec::new();
        }
        self.lifecycle = Lifecycle::Active;
        info!(
            "Landing page mounted with {} slides and {} faqs",
            self.carousel.slides().len(),
            self.faqs.entries().len()
        );
        let mut commands = vec![self.introduction.step(), self.footer.step()];
        commands.extend(self.carousel.start_timer());
        commands
    }

    fn tear_down(&mut self) -> Vec<Command> {
        self.lifecycle = Lifecycle::TornDown;
        info!("Landing page unmounted, cancelling timers");
        TimerFamily::ALL.iter().copied().map(Command::Cancel).collect()
    }

    fn on_timer(&mut self, timer: TimerFamily) -> Vec<Command> {
        match timer {
            TimerFamily::Carousel => self.carousel.tick(),
            TimerFamily::SlideAnimation => {
                self.carousel.restore_animation();
                Vec::new()
            }
            TimerFamily::OverlayClose => {
                self.overlay.finish_close();
                Vec::new()
            }
            TimerFamily::Typewriter(TypewriterSlot::Introduction) => {
                vec![self.introduction.step()]
            }
            TimerFamily::Typewriter(TypewriterSlot::Footer) => vec![self.footer.step()],
            TimerFamily::CopyFeedback => {
                self.contact.clear_feedback();
                Vec::new()
            }
            TimerFamily::MosaicSettle => self.mosaic.enforce_center_only(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::command::VideoTarget;
    use super::*;

    #[derive(Debug, Clone, Copy)]
    struct PendingTimer {
        due: u64,
        period: Option<u64>,
    }

    /// Drives the controller against a virtual clock, applying timer
    /// commands the way the browser runtime does.
    struct Harness {
        controller: LandingController,
        now: u64,
        timers: HashMap<TimerFamily, PendingTimer>,
        effects: Vec<Command>,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_slides(content::slides())
        }

        fn with_slides(slides: Vec<Slide>) -> Self {
            let config = LandingConfig {
                contact: "vardproject@gmail.com".to_string(),
                ..LandingConfig::default()
            };
            let content = LandingContent {
                slides,
                ..LandingContent::default()
            };
            Self {
                controller: LandingController::new(config, content).unwrap(),
                now: 0,
                timers: HashMap::new(),
                effects: Vec::new(),
            }
        }

        fn mounted() -> Self {
            let mut harness = Self::new();
            harness.send(Event::Mounted);
            harness
        }

        fn send(&mut self, event: Event) {
            let commands = self.controller.dispatch(event);
            for command in commands {
                match command {
                    Command::Arm {
                        timer,
                        delay_ms,
                        repeat,
                    } => {
                        let delay = u64::from(delay_ms);
                        self.timers.insert(
                            timer,
                            PendingTimer {
                                due: self.now + delay,
                                period: repeat.then_some(delay),
                            },
                        );
                    }
                    Command::Cancel(timer) => {
                        self.timers.remove(&timer);
                    }
                    other => self.effects.push(other),
                }
            }
        }

        fn advance(&mut self, ms: u64) {
            let target = self.now + ms;
            loop {
                let next = TimerFamily::ALL
                    .iter()
                    .filter_map(|family| self.timers.get(family).map(|t| (*family, *t)))
                    .filter(|(_, timer)| timer.due <= target)
                    .min_by_key(|(_, timer)| timer.due);
                let Some((family, timer)) = next else { break };
                self.now = timer.due;
                match timer.period {
                    Some(period) => {
                        self.timers.insert(
                            family,
                            PendingTimer {
                                due: timer.due + period,
                                period: Some(period),
                            },
                        );
                    }
                    None => {
                        self.timers.remove(&family);
                    }
                }
                self.send(Event::TimerFired(family));
            }
            self.now = target;
        }

        fn current_slide(&self) -> usize {
            self.controller.carousel().current()
        }
    }

    #[test]
    fn empty_slides_refuse_to_build() {
        let content = LandingContent {
            slides: Vec::new(),
            ..LandingContent::default()
        };
        assert!(matches!(
            LandingController::new(LandingConfig::default(), content),
            Err(LandingError::EmptySlides)
        ));
    }

    #[test]
    fn mount_seeds_content_and_starts_timers() {
        let harness = Harness::mounted();
        assert_eq!(harness.controller.carousel().slides().len(), 2);
        assert_eq!(harness.controller.faqs().len(), 4);
        assert!(harness.controller.faqs().iter().all(|faq| !faq.is_open));
        assert!(harness.timers.contains_key(&TimerFamily::Carousel));
        assert!(harness
            .timers
            .contains_key(&TimerFamily::Typewriter(TypewriterSlot::Introduction)));
        assert!(harness
            .timers
            .contains_key(&TimerFamily::Typewriter(TypewriterSlot::Footer)));
    }

    #[test]
    fn second_mount_does_not_restart_typewriters() {
        let mut harness = Harness::mounted();
        harness.advance(300);
        let typed = harness
            .controller
            .typed(TypewriterSlot::Introduction)
            .to_string();
        harness.send(Event::Mounted);
        assert_eq!(harness.controller.typed(TypewriterSlot::Introduction), typed);
    }

    #[test]
    fn autoplay_cycles_every_slide_duration() {
        let mut harness = Harness::mounted();
        harness.advance(4999);
        assert_eq!(harness.current_slide(), 0);
        harness.advance(1);
        assert_eq!(harness.current_slide(), 1);
        harness.advance(5000);
        assert_eq!(harness.current_slide(), 0);
    }

    #[test]
    fn manual_navigation_restarts_countdown() {
        let mut harness = Harness::mounted();
        harness.advance(3000);
        harness.send(Event::NextSlide);
        assert_eq!(harness.current_slide(), 1);
        harness.advance(4999);
        assert_eq!(harness.current_slide(), 1);
        harness.advance(1);
        assert_eq!(harness.current_slide(), 0);
    }

    #[test]
    fn paused_deck_stays_put_until_selected() {
        let mut harness = Harness::mounted();
        harness.send(Event::TogglePause);
        harness.advance(20_000);
        assert_eq!(harness.current_slide(), 0);
        assert!(!harness.timers.contains_key(&TimerFamily::Carousel));

        harness.send(Event::SelectSlide(1));
        assert!(!harness.controller.carousel().is_paused());
        harness.advance(5000);
        assert_eq!(harness.current_slide(), 0);
    }

    #[test]
    fn entry_animation_replays_on_next_tick() {
        let mut harness = Harness::mounted();
        harness.send(Event::NextSlide);
        assert!(!harness.controller.carousel().show_animation());
        harness.advance(0);
        assert!(harness.controller.carousel().show_animation());
    }

    #[test]
    fn swipe_past_threshold_navigates() {
        let mut harness = Harness::mounted();
        harness.send(Event::TouchStart(300.0));
        harness.send(Event::TouchEnd(249.0));
        assert_eq!(harness.current_slide(), 1);

        harness.send(Event::TouchStart(300.0));
        harness.send(Event::TouchEnd(250.0));
        assert_eq!(harness.current_slide(), 1);

        harness.send(Event::TouchStart(249.0));
        harness.send(Event::TouchEnd(300.0));
        assert_eq!(harness.current_slide(), 0);

        harness.send(Event::TouchStart(250.0));
        harness.send(Event::TouchEnd(300.0));
        assert_eq!(harness.current_slide(), 0);
    }

    #[test]
    fn single_slide_deck_wraps_onto_itself() {
        let mut harness = Harness::with_slides(content::slides().into_iter().take(1).collect());
        harness.send(Event::Mounted);
        harness.send(Event::NextSlide);
        harness.send(Event::PrevSlide);
        harness.advance(10_000);
        assert_eq!(harness.current_slide(), 0);
    }

    #[test]
    fn overlay_closes_after_transition() {
        let mut harness = Harness::mounted();
        harness.send(Event::ToggleOverlay);
        assert!(harness.controller.overlay().visible());

        harness.send(Event::ToggleOverlay);
        harness.advance(699);
        assert!(harness.controller.overlay().visible());
        assert!(harness.controller.overlay().closing());

        harness.send(Event::ToggleOverlay);
        harness.advance(1);
        assert!(!harness.controller.overlay().visible());
        assert!(!harness.controller.overlay().closing());
    }

    #[test]
    fn copy_feedback_clears_after_delay() {
        let mut harness = Harness::mounted();
        harness.send(Event::CopyContact);
        assert_eq!(
            harness.effects.last(),
            Some(&Command::WriteClipboard("vardproject@gmail.com".to_string()))
        );
        harness.send(Event::ClipboardResult(Ok(())));
        assert!(harness.controller.contact().copied());
        harness.advance(1999);
        assert!(harness.controller.contact().copied());
        harness.advance(1);
        assert!(!harness.controller.contact().copied());
    }

    #[test]
    fn copy_failure_never_shows_feedback() {
        let mut harness = Harness::mounted();
        harness.send(Event::CopyContact);
        harness.send(Event::ClipboardResult(Err("NotAllowedError".to_string())));
        assert!(!harness.controller.contact().copied());
        harness.advance(5000);
        assert!(!harness.controller.contact().copied());
    }

    #[test]
    fn headlines_type_independently() {
        let mut harness = Harness::mounted();
        assert_eq!(harness.controller.typed(TypewriterSlot::Introduction), "");
        harness.advance(400);
        assert_eq!(harness.controller.typed(TypewriterSlot::Introduction), "Boas");
        assert_eq!(harness.controller.typed(TypewriterSlot::Footer), "Envi");

        let intro_len = content::INTRODUCTION_TEXT.chars().count() as u64;
        harness.advance(100 * (intro_len - 4));
        assert_eq!(
            harness.controller.typed(TypewriterSlot::Introduction),
            content::INTRODUCTION_TEXT
        );
    }

    #[test]
    fn typewriter_deletes_after_pause() {
        let mut harness = Harness::mounted();
        let len = content::INTRODUCTION_TEXT.chars().count() as u64;
        // typed in full at len * 100, deletion starts after the 100 + 2000 hold
        harness.advance(len * 100 + 100 + 2000);
        assert_eq!(
            harness.controller.typed(TypewriterSlot::Introduction),
            content::INTRODUCTION_TEXT
        );
        harness.advance(50);
        let expected: String = content::INTRODUCTION_TEXT
            .chars()
            .take(len as usize - 1)
            .collect();
        assert_eq!(harness.controller.typed(TypewriterSlot::Introduction), expected);
    }

    #[test]
    fn mosaic_swap_replays_center_on_next_tick() {
        let mut harness = Harness::mounted();
        harness.send(Event::ViewAttached);
        assert!(harness
            .effects
            .contains(&Command::Play(VideoTarget::Mosaic(1))));
        harness.effects.clear();

        harness.send(Event::VideoClicked(2));
        assert_eq!(harness.controller.mosaic().order(), [0, 2, 1]);
        assert!(harness.effects.is_empty());
        harness.advance(0);
        assert_eq!(
            harness.effects,
            vec![
                Command::PauseAndRewind(VideoTarget::Mosaic(0)),
                Command::Play(VideoTarget::Mosaic(1)),
                Command::PauseAndRewind(VideoTarget::Mosaic(2)),
            ]
        );

        harness.effects.clear();
        harness.send(Event::VideoClicked(1));
        harness.advance(0);
        assert!(harness.effects.is_empty());
        assert_eq!(harness.controller.mosaic().order(), [0, 2, 1]);
    }

    #[test]
    fn faq_toggle_through_controller() {
        let mut harness = Harness::mounted();
        harness.send(Event::ToggleFaq(2));
        let open: Vec<bool> = harness
            .controller
            .faqs()
            .iter()
            .map(|faq| faq.is_open)
            .collect();
        assert_eq!(open, vec![false, false, true, false]);
    }

    #[test]
    fn rejected_events_leave_state_and_revision() {
        let mut harness = Harness::mounted();
        let revision = harness.controller.revision();
        harness.send(Event::SelectSlide(7));
        harness.send(Event::ToggleFaq(9));
        harness.send(Event::VideoClicked(3));
        assert_eq!(harness.controller.revision(), revision);
        assert_eq!(harness.current_slide(), 0);
    }

    #[test]
    fn revision_moves_only_on_visible_change() {
        let mut harness = Harness::new();
        harness.send(Event::Mounted);
        harness.advance(100);
        let revision = harness.controller.revision();
        assert!(revision > 0);

        harness.send(Event::TouchStart(120.0));
        harness.send(Event::VideoClicked(1));
        harness.send(Event::Mounted);
        assert_eq!(harness.controller.revision(), revision);

        harness.send(Event::ToggleOverlay);
        assert_eq!(harness.controller.revision(), revision + 1);
        harness.send(Event::ToggleOverlay);
        assert_eq!(harness.controller.revision(), revision + 2);
        harness.send(Event::ToggleOverlay);
        assert_eq!(harness.controller.revision(), revision + 2);
    }

    #[test]
    fn teardown_cancels_every_timer_family() {
        let mut harness = Harness::mounted();
        harness.send(Event::ToggleOverlay);
        harness.send(Event::ToggleOverlay);
        harness.send(Event::CopyContact);
        harness.send(Event::ClipboardResult(Ok(())));
        harness.send(Event::NextSlide);
        assert!(harness.timers.len() >= 5);

        harness.send(Event::Unmounted);
        assert!(harness.timers.is_empty());
        assert!(harness.controller.is_torn_down());

        let revision = harness.controller.revision();
        harness.send(Event::NextSlide);
        harness.send(Event::TimerFired(TimerFamily::Carousel));
        assert_eq!(harness.controller.revision(), revision);
    }

    #[test]
    fn hero_video_toggles_playback() {
        let mut harness = Harness::mounted();
        harness.send(Event::ToggleHeroVideo);
        assert!(!harness.controller.hero().playing());
        assert_eq!(harness.effects.last(), Some(&Command::Pause(VideoTarget::Hero)));
        harness.send(Event::ToggleHeroVideo);
        assert_eq!(harness.effects.last(), Some(&Command::Play(VideoTarget::Hero)));
    }
}
