//! Terminal colour selection, passed explicitly into every formatter.

use owo_colors::OwoColorize;

/// Colour role of a rendered fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    Success,
    Alert,
    #[default]
    Plain,
}

/// Whether formatters should emit ANSI colour codes.
///
/// The caller decides (TTY detection, `--color`, `NO_COLOR`); the core
/// only ever sees the resulting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub const fn colored() -> Self {
        Self { enabled: true }
    }

    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(self) -> bool {
        self.enabled
    }

    pub fn paint(self, text: &str, tone: Tone) -> String {
        match tone {
            Tone::Success => self.success(text),
            Tone::Alert => self.alert(text),
            Tone::Plain => text.to_owned(),
        }
    }

    pub fn success(self, text: &str) -> String {
        if self.enabled {
            text.green().to_string()
        } else {
            text.to_owned()
        }
    }

    pub fn alert(self, text: &str) -> String {
        if self.enabled {
            text.red().to_string()
        } else {
            text.to_owned()
        }
    }
}
