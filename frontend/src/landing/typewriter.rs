use super::command::{Command, TimerFamily, TypewriterSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedAtFull,
    Deleting,
    PausedAtEmpty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypewriterTiming {
    pub typing_ms: u32,
    pub deleting_ms: u32,
    pub pause_ms: u32,
}

/// Endless type-then-delete loop over one string.
///
/// Each `step` shows one prefix (or holds during a pause) and returns the
/// command that schedules the next step. `cursor` never exceeds the
/// character count of `full_text`.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    slot: TypewriterSlot,
    full_text: String,
    len: usize,
    displayed: String,
    cursor: usize,
    phase: Phase,
    timing: TypewriterTiming,
}

impl Typewriter {
    pub fn new(slot: TypewriterSlot, full_text: impl Into<String>, timing: TypewriterTiming) -> Self {
        let full_text = full_text.into();
        let len = full_text.chars().count();
        Self {
            slot,
            full_text,
            len,
            displayed: String::new(),
            cursor: 0,
            phase: Phase::Typing,
            timing,
        }
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn step(&mut self) -> Command {
        let delay_ms = match self.phase {
            Phase::Typing => {
                self.show_prefix();
                if self.cursor == self.len {
                    self.phase = Phase::PausedAtFull;
                } else {
                    self.cursor += 1;
                }
                self.timing.typing_ms
            }
            Phase::PausedAtFull => {
                self.phase = Phase::Deleting;
                self.cursor = self.len;
                self.timing.pause_ms
            }
            Phase::Deleting => {
                self.show_prefix();
                if self.cursor == 0 {
                    self.phase = Phase::PausedAtEmpty;
                } else {
                    self.cursor -= 1;
                }
                self.timing.deleting_ms
            }
            Phase::PausedAtEmpty => {
                self.phase = Phase::Typing;
                self.cursor = 0;
                self.timing.pause_ms
            }
        };
        Command::once(TimerFamily::Typewriter(self.slot), delay_ms)
    }

    fn show_prefix(&mut self) {
        self.displayed = self.full_text.chars().take(self.cursor).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> TypewriterTiming {
        TypewriterTiming {
            typing_ms: 100,
            deleting_ms: 50,
            pause_ms: 2000,
        }
    }

    fn delay(command: Command) -> u32 {
        match command {
            Command::Arm { delay_ms, .. } => delay_ms,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn typing_len_plus_one_steps_reaches_pause() {
        let text = "Boas Vindas";
        let mut writer = Typewriter::new(TypewriterSlot::Introduction, text, timing());
        for _ in 0..text.chars().count() {
            writer.step();
            assert_eq!(writer.phase(), Phase::Typing);
        }
        writer.step();
        assert_eq!(writer.phase(), Phase::PausedAtFull);
        assert_eq!(writer.displayed(), text);
    }

    #[test]
    fn full_cycle_emits_prefixes_and_delays() {
        let mut writer = Typewriter::new(TypewriterSlot::Footer, "abc", timing());
        let mut frames = Vec::new();
        for _ in 0..12 {
            let command = writer.step();
            frames.push((writer.displayed().to_string(), delay(command)));
        }
        let expected: Vec<(String, u32)> = [
            ("", 100),
            ("a", 100),
            ("ab", 100),
            ("abc", 100),
            ("abc", 2000),
            ("abc", 50),
            ("ab", 50),
            ("a", 50),
            ("", 50),
            ("", 2000),
            ("", 100),
            ("a", 100),
        ]
        .iter()
        .map(|(text, ms)| (text.to_string(), *ms))
        .collect();
        assert_eq!(frames, expected);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let text = "Envie à Equipe";
        let mut writer = Typewriter::new(TypewriterSlot::Footer, text, timing());
        for _ in 0..200 {
            writer.step();
            assert!(writer.cursor() <= text.chars().count());
            assert!(text.starts_with(writer.displayed()));
        }
    }

    #[test]
    fn schedules_its_own_family() {
        let mut writer = Typewriter::new(TypewriterSlot::Introduction, "x", timing());
        assert_eq!(
            writer.step(),
            Command::once(TimerFamily::Typewriter(TypewriterSlot::Introduction), 100)
        );
    }

    #[test]
    fn empty_text_still_cycles() {
        let mut writer = Typewriter::new(TypewriterSlot::Introduction, "", timing());
        writer.step();
        assert_eq!(writer.phase(), Phase::PausedAtFull);
        writer.step();
        writer.step();
        assert_eq!(writer.phase(), Phase::PausedAtEmpty);
        writer.step();
        assert_eq!(writer.phase(), Phase::Typing);
    }
}
