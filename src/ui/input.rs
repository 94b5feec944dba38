//! Raw keystroke decoding.
//!
//! Bytes arrive one at a time from a terminal in raw mode. The decoder
//! consumes complete escape sequences before emitting anything and drops
//! bytes that do not map to an event.

use crate::error::Result;
use crate::services::KeySource;

const ESC: u8 = 0x1b;
const TAB: u8 = b'\t';
const ENTER: u8 = b'\r';
const DEL: u8 = 0x7f;

/// Logical events produced by one complete keypress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Up or Left arrow
    MoveBack,
    /// Down or Right arrow
    MoveForward,
    /// Carriage return
    Confirm,
    /// Always advances, whatever the local direction semantics
    Tab,
    Backspace,
    /// Printable ASCII character
    Printable(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DecodeState {
    #[default]
    Ground,
    /// Saw ESC
    Escape,
    /// Saw ESC [ and any parameter bytes
    Csi,
    /// Saw ESC O; one final byte follows
    Ss3,
}

/// Byte-at-a-time keystroke decoder
#[derive(Debug, Default)]
pub struct Decoder {
    state: DecodeState,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an escape sequence is partially consumed
    pub fn is_pending(&self) -> bool {
        self.state != DecodeState::Ground
    }

    /// Feed one byte, returning an event when a keypress completes
    pub fn feed(&mut self, byte: u8) -> Option<InputEvent> {
        match self.state {
            DecodeState::Ground => match byte {
                ESC => {
                    self.state = DecodeState::Escape;
                    None
                }
                TAB => Some(InputEvent::Tab),
                ENTER => Some(InputEvent::Confirm),
                DEL => Some(InputEvent::Backspace),
                0x20..=0x7e => Some(InputEvent::Printable(byte as char)),
                _ => None,
            },
            DecodeState::Escape => {
                self.state = match byte {
                    // A repeated ESC starts the sequence over
                    ESC => DecodeState::Escape,
                    b'[' => DecodeState::Csi,
                    b'O' => DecodeState::Ss3,
                    _ => DecodeState::Ground,
                };
                None
            }
            DecodeState::Ss3 => {
                self.state = DecodeState::Ground;
                arrow(byte)
            }
            DecodeState::Csi => match byte {
                ESC => {
                    self.state = DecodeState::Escape;
                    None
                }
                // Parameter and intermediate bytes keep the sequence open
                0x20..=0x3f => None,
                _ => {
                    self.state = DecodeState::Ground;
                    arrow(byte)
                }
            },
        }
    }
}

/// Final byte of an arrow-key sequence
fn arrow(byte: u8) -> Option<InputEvent> {
    match byte {
        b'A' | b'D' => Some(InputEvent::MoveBack),
        b'B' | b'C' => Some(InputEvent::MoveForward),
        _ => None,
    }
}

/// Pulls bytes from a source until one event is decoded
pub struct InputReader<S> {
    source: S,
    decoder: Decoder,
}

impl<S: KeySource> InputReader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            decoder: Decoder::new(),
        }
    }

    /// Block until the next complete keypress
    pub fn next_event(&mut self) -> Result<InputEvent> {
        loop {
            let byte = self.source.read_byte()?;
            if let Some(event) = self.decoder.feed(byte) {
                tracing::trace!(?event, "decoded input event");
                return Ok(event);
            }
        }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn decode(bytes: &[u8]) -> Vec<InputEvent> {
        let mut decoder = Decoder::new();
        bytes.iter().filter_map(|&b| decoder.feed(b)).collect()
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            decode(b"\x1b[A\x1b[B\x1b[C\x1b[D"),
            vec![
                InputEvent::MoveBack,
                InputEvent::MoveForward,
                InputEvent::MoveForward,
                InputEvent::MoveBack,
            ]
        );
    }

    #[test]
    fn test_sequence_fully_consumed_before_emitting() {
        let mut decoder = Decoder::new();
        assert_eq!(decoder.feed(0x1b), None);
        assert!(decoder.is_pending());
        assert_eq!(decoder.feed(b'['), None);
        assert!(decoder.is_pending());
        assert_eq!(decoder.feed(b'A'), Some(InputEvent::MoveBack));
        assert!(!decoder.is_pending());
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            decode(b"\t\r\x7f"),
            vec![InputEvent::Tab, InputEvent::Confirm, InputEvent::Backspace]
        );
    }

    #[test]
    fn test_printable_ascii() {
        assert_eq!(
            decode(b"a Z~"),
            vec![
                InputEvent::Printable('a'),
                InputEvent::Printable(' '),
                InputEvent::Printable('Z'),
                InputEvent::Printable('~'),
            ]
        );
    }

    #[test]
    fn test_unrecognized_bytes_discarded() {
        // Ctrl+C, line feed, and non-ASCII bytes produce nothing
        assert_eq!(decode(&[0x03, b'\n', 0xc3, 0xa9]), Vec::<InputEvent>::new());
    }

    #[test]
    fn test_other_escape_sequences_do_not_leak() {
        // Delete (ESC [ 3 ~), Home (ESC O H), Alt+a, then a real key
        assert_eq!(
            decode(b"\x1b[3~\x1bOH\x1bax"),
            vec![InputEvent::Printable('x')]
        );
    }

    #[test]
    fn test_repeated_escape_restarts_sequence() {
        // Lone Esc press followed by an arrow key
        assert_eq!(decode(b"\x1b\x1b[A"), vec![InputEvent::MoveBack]);
        // Sequence interrupted mid-CSI by a new one
        assert_eq!(decode(b"\x1b[\x1b[B"), vec![InputEvent::MoveForward]);
        assert_eq!(decode(b"\x1b[1;\x1bOD"), vec![InputEvent::MoveBack]);
    }

    #[test]
    fn test_application_mode_arrows() {
        assert_eq!(
            decode(b"\x1bOA\x1bOC"),
            vec![InputEvent::MoveBack, InputEvent::MoveForward]
        );
    }

    #[test]
    fn test_reader_blocks_until_event() {
        let mut reader = InputReader::new(VecDeque::from(b"\x01\x1b[B".to_vec()));
        assert_eq!(reader.next_event().unwrap(), InputEvent::MoveForward);
        assert!(reader.next_event().is_err());
    }
}
