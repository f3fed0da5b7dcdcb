//! Console input acquisition.
//!
//! The console stands in for the button matrix: a reader thread turns
//! stdin lines into single-character key events and hands them to the main
//! loop over a channel. It knows nothing about the engine beyond the
//! characters it forwards.

use std::io::BufRead;
use std::thread;

use tracing::debug;

/// An event from the console reader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A single key character for the engine.
    Key(char),
    /// The user asked to leave.
    Quit,
}

/// Words that end the session.
const QUIT_WORDS: &[&str] = &["q", "quit", "exit"];

/// Decode one console line into input events.
///
/// A quit word produces a single [`InputEvent::Quit`]; any other line is
/// forwarded character by character, exactly as the buttons would deliver
/// them.
fn line_events(line: &str) -> Vec<InputEvent> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if QUIT_WORDS.contains(&trimmed.to_lowercase().as_str()) {
        return vec![InputEvent::Quit];
    }
    trimmed.chars().map(InputEvent::Key).collect()
}

/// Spawn the stdin reader thread and return its event channel.
///
/// The channel closes when stdin reaches end of file or the receiving side
/// is dropped.
pub fn spawn_stdin_reader() -> flume::Receiver<InputEvent> {
    let (tx, rx) = flume::unbounded();

    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            for event in line_events(&line) {
                if tx.send(event).is_err() {
                    return;
                }
                if event == InputEvent::Quit {
                    return;
                }
            }
        }
        debug!("stdin reader finished");
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_becomes_key_events() {
        assert_eq!(
            line_events("5+3="),
            vec![
                InputEvent::Key('5'),
                InputEvent::Key('+'),
                InputEvent::Key('3'),
                InputEvent::Key('='),
            ]
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(line_events("  7  "), vec![InputEvent::Key('7')]);
    }

    #[test]
    fn test_empty_line_is_silent() {
        assert_eq!(line_events(""), Vec::new());
        assert_eq!(line_events("   "), Vec::new());
    }

    #[test]
    fn test_quit_words() {
        assert_eq!(line_events("q"), vec![InputEvent::Quit]);
        assert_eq!(line_events("quit"), vec![InputEvent::Quit]);
        assert_eq!(line_events("exit"), vec![InputEvent::Quit]);
        assert_eq!(line_events("QUIT"), vec![InputEvent::Quit]);
    }

    #[test]
    fn test_quit_inside_longer_input_is_not_special() {
        // A line of keys that merely contains a quit word stays keys.
        assert_eq!(line_events("quitter").len(), 7);
    }
}
