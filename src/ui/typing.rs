//! Hero terminal typing animation
//!
//! Deterministic: each `step` returns the text to show and how long the host
//! should wait before the next step. Runs forever; nothing cancels it.

use crate::settings::TypingSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub next_delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    commands: Vec<Vec<char>>,
    timing: TypingSettings,
    current: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(timing: TypingSettings) -> Self {
        Self {
            commands: timing.commands.iter().map(|c| c.chars().collect()).collect(),
            timing,
            current: 0,
            chars: 0,
            deleting: false,
        }
    }

    /// Advance one character (typing or deleting)
    pub fn step(&mut self) -> TypingFrame {
        let Some(command) = self.commands.get(self.current) else {
            return TypingFrame {
                text: String::new(),
                next_delay_ms: self.timing.hold_ms,
            };
        };
        let len = command.len();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(len);
        }
        let text: String = command[..self.chars].iter().collect();

        let mut delay = if self.deleting {
            self.timing.delete_ms
        } else {
            self.timing.type_ms
        };

        if !self.deleting && self.chars == len {
            delay = self.timing.hold_ms;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.current = (self.current + 1) % self.commands.len();
            delay = self.timing.next_ms;
        }

        TypingFrame {
            text,
            next_delay_ms: delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(commands: &[&str]) -> Typewriter {
        Typewriter::new(TypingSettings {
            commands: commands.iter().map(|c| c.to_string()).collect(),
            ..TypingSettings::default()
        })
    }

    #[test]
    fn test_types_holds_deletes_then_moves_on() {
        let mut w = writer(&["ls", "pwd"]);
        let frames: Vec<(String, u32)> = (0..6)
            .map(|_| {
                let f = w.step();
                (f.text, f.next_delay_ms)
            })
            .collect();
        assert_eq!(
            frames,
            vec![
                ("l".to_string(), 100),
                ("ls".to_string(), 2000),
                ("l".to_string(), 50),
                ("".to_string(), 500),
                ("p".to_string(), 100),
                ("pw".to_string(), 100),
            ]
        );
    }

    #[test]
    fn test_wraps_to_first_command() {
        let mut w = writer(&["a"]);
        let texts: Vec<String> = (0..4).map(|_| w.step().text).collect();
        assert_eq!(texts, vec!["a", "", "a", ""]);
    }

    #[test]
    fn test_no_commands_is_idle() {
        let mut w = writer(&[]);
        let frame = w.step();
        assert_eq!(frame.text, "");
        assert_eq!(frame.next_delay_ms, 2000);
    }
}
