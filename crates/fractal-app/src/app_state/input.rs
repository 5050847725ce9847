//! Keyboard shortcuts mapped onto lifecycle events.

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{Key, NamedKey};

use fractal_core::Depth;

use super::core::FractalApp;

/// A lifecycle request decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Command {
    ToggleFractal,
    ToggleGraph,
    DeeperFractal,
    ShallowerFractal,
    Quit,
}

impl Command {
    pub(super) fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Character(c) => match c.as_str() {
                "f" | "F" => Some(Self::ToggleFractal),
                "g" | "G" => Some(Self::ToggleGraph),
                "+" | "=" => Some(Self::DeeperFractal),
                "-" | "_" => Some(Self::ShallowerFractal),
                _ => None,
            },
            Key::Named(NamedKey::Escape) => Some(Self::Quit),
            _ => None,
        }
    }
}

impl FractalApp {
    /// Returns `true` when the key asked the app to quit.
    pub(super) fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if event.state != ElementState::Pressed || event.repeat {
            return false;
        }
        let Some(command) = Command::from_key(&event.logical_key) else {
            return false;
        };
        if command == Command::Quit {
            return true;
        }
        let Some(ref mut rs) = self.render_state else {
            return false;
        };

        let result = match command {
            Command::ToggleFractal => rs.set_fractal_enabled(!rs.fractal_wanted()),
            Command::ToggleGraph => rs.set_graph_enabled(!rs.graph_wanted()),
            Command::DeeperFractal | Command::ShallowerFractal => {
                let current = rs.fractal().depth().get();
                let requested = if command == Command::DeeperFractal {
                    current.saturating_add(1)
                } else {
                    current.saturating_sub(1)
                };
                match Depth::new(requested) {
                    Some(depth) => {
                        tracing::info!("Fractal depth {current} -> {depth}");
                        rs.set_depth(depth)
                    }
                    None => Ok(()),
                }
            }
            Command::Quit => Ok(()),
        };

        if let Err(e) = result {
            tracing::error!("{command:?} failed: {e}");
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::SmolStr;

    fn char_key(c: &str) -> Key {
        Key::Character(SmolStr::new(c))
    }

    #[test]
    fn toggles_are_case_insensitive() {
        assert_eq!(Command::from_key(&char_key("f")), Some(Command::ToggleFractal));
        assert_eq!(Command::from_key(&char_key("F")), Some(Command::ToggleFractal));
        assert_eq!(Command::from_key(&char_key("g")), Some(Command::ToggleGraph));
    }

    #[test]
    fn depth_keys() {
        assert_eq!(Command::from_key(&char_key("+")), Some(Command::DeeperFractal));
        assert_eq!(Command::from_key(&char_key("=")), Some(Command::DeeperFractal));
        assert_eq!(Command::from_key(&char_key("-")), Some(Command::ShallowerFractal));
    }

    #[test]
    fn escape_quits() {
        assert_eq!(
            Command::from_key(&Key::Named(NamedKey::Escape)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(Command::from_key(&char_key("x")), None);
        assert_eq!(Command::from_key(&Key::Named(NamedKey::Enter)), None);
    }
}
