use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use yew::{Callback, NodeRef};

use crate::landing::command::{Command, Event, TimerFamily, VideoTarget};
use crate::landing::mosaic::SLOTS;
use crate::landing::LandingController;

enum TimerHandle {
    Once(Timeout),
    Repeating(Interval),
}

impl TimerHandle {
    fn cancel(self) {
        match self {
            TimerHandle::Once(timeout) => drop(timeout.cancel()),
            TimerHandle::Repeating(interval) => drop(interval.cancel()),
        }
    }
}

struct RuntimeInner {
    controller: RefCell<LandingController>,
    timers: RefCell<HashMap<TimerFamily, TimerHandle>>,
    hero: NodeRef,
    mosaic: [NodeRef; SLOTS],
    on_change: Callback<u64>,
}

/// Runs a [`LandingController`] in the browser: real timers, the page's
/// video elements and the system clipboard.
#[derive(Clone)]
pub struct LandingRuntime {
    inner: Rc<RuntimeInner>,
}

impl PartialEq for LandingRuntime {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl LandingRuntime {
    /// `on_change` receives the new revision whenever state changed.
    pub fn new(controller: LandingController, on_change: Callback<u64>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner {
                controller: RefCell::new(controller),
                timers: RefCell::new(HashMap::new()),
                hero: NodeRef::default(),
                mosaic: Default::default(),
                on_change,
            }),
        }
    }

    pub fn controller(&self) -> Ref<'_, LandingController> {
        self.inner.controller.borrow()
    }

    pub fn hero_ref(&self) -> NodeRef {
        self.inner.hero.clone()
    }

    pub fn mosaic_ref(&self, slot: usize) -> NodeRef {
        self.inner.mosaic.get(slot).cloned().unwrap_or_default()
    }

    pub fn dispatch(&self, event: Event) {
        let (commands, changed) = {
            let mut controller = self.inner.controller.borrow_mut();
            let before = controller.revision();
            let commands = controller.dispatch(event);
            let after = controller.revision();
            (commands, (after != before).then_some(after))
        };
        for command in commands {
            self.execute(command);
        }
        if let Some(revision) = changed {
            self.inner.on_change.emit(revision);
        }
    }

    /// Tears the page down and releases every live timer.
    pub fn shutdown(&self) {
        self.dispatch(Event::Unmounted);
        let timers: Vec<TimerHandle> = self
            .inner
            .timers
            .borrow_mut()
            .drain()
            .map(|(_, handle)| handle)
            .collect();
        timers.into_iter().for_each(TimerHandle::cancel);
    }

    fn execute(&self, command: Command) {
        match command {
            Command::Arm {
                timer,
                delay_ms,
                repeat,
            } => self.arm(timer, delay_ms, repeat),
            Command::Cancel(timer) => self.cancel(timer),
            Command::Play(target) => self.play(target),
            Command::Pause(target) => {
                if let Some(video) = self.video(target) {
                    let _ = video.pause();
                }
            }
            Command::PauseAndRewind(target) => {
                if let Some(video) = self.video(target) {
                    let _ = video.pause();
                    video.set_current_time(0.0);
                }
            }
            Command::WriteClipboard(text) => self.write_clipboard(text),
        }
    }

    fn arm(&self, timer: TimerFamily, delay_ms: u32, repeat: bool) {
        let weak = Rc::downgrade(&self.inner);
        // Dispatch from a spawned task so re-arming never drops the closure
        // that is currently running.
        let fire = move || {
            let weak = weak.clone();
            spawn_local(async move {
                if let Some(runtime) = upgrade(&weak) {
                    if !repeat {
                        runtime.cancel(timer);
                    }
                    runtime.dispatch(Event::TimerFired(timer));
                }
            });
        };
        let handle = if repeat {
            TimerHandle::Repeating(Interval::new(delay_ms, fire))
        } else {
            TimerHandle::Once(Timeout::new(delay_ms, fire))
        };
        let previous = self.inner.timers.borrow_mut().insert(timer, handle);
        if let Some(previous) = previous {
            debug!("Replaced pending {:?} timer", timer);
            previous.cancel();
        }
    }

    fn cancel(&self, timer: TimerFamily) {
        let handle = self.inner.timers.borrow_mut().remove(&timer);
        if let Some(handle) = handle {
            handle.cancel();
        }
    }

    fn video(&self, target: VideoTarget) -> Option<HtmlVideoElement> {
        let node = match target {
            VideoTarget::Hero => &self.inner.hero,
            VideoTarget::Mosaic(slot) => self.inner.mosaic.get(slot)?,
        };
        let video = node.cast::<HtmlVideoElement>();
        if video.is_none() {
            debug!("Video {:?} not attached yet", target);
        }
        video
    }

    fn play(&self, target: VideoTarget) {
        let Some(video) = self.video(target) else {
            return;
        };
        // The `muted` attribute alone does not count for autoplay policies.
        video.set_muted(true);
        match video.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    gloo_console::warn!("Video playback was blocked:", e);
                }
            }),
            Err(e) => gloo_console::error!("Failed to start video:", e),
        }
    }

    fn write_clipboard(&self, text: String) {
        let Some(window) = web_sys::window() else {
            self.dispatch(Event::ClipboardResult(Err("no window".to_string())));
            return;
        };
        let promise = window.navigator().clipboard().write_text(&text);
        let weak = Rc::downgrade(&self.inner);
        spawn_local(async move {
            let result = JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| format!("{:?}", e));
            if let Some(runtime) = upgrade(&weak) {
                runtime.dispatch(Event::ClipboardResult(result));
            }
        });
    }
}

fn upgrade(weak: &Weak<RuntimeInner>) -> Option<LandingRuntime> {
    weak.upgrade().map(|inner| LandingRuntime { inner })
}
