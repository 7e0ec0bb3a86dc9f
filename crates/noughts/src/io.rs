//! Capabilities the game loop uses to talk to players.
//!
//! The engine never touches stdin or stdout directly. A [`MoveSource`]
//! supplies one raw token per turn and a [`MessageSink`] receives every
//! line of text the game wants shown.

use super::error::InputError;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::{instrument, trace, warn};

/// Supplies raw move tokens, blocking until one is available.
pub trait MoveSource {
    /// Returns the next token as typed, or why none is available.
    fn next_move(&mut self) -> Result<String, InputError>;
}

/// Receives text for the players. Delivery is not acknowledged.
pub trait MessageSink {
    /// Shows `text`, which may span several lines.
    fn emit(&mut self, text: &str);
}

impl<T: MoveSource + ?Sized> MoveSource for &mut T {
    fn next_move(&mut self) -> Result<String, InputError> {
        (**self).next_move()
    }
}

impl<T: MessageSink + ?Sized> MessageSink for &mut T {
    fn emit(&mut self, text: &str) {
        (**self).emit(text)
    }
}

/// Reads one move per line from any buffered reader.
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    /// Wraps a reader such as a locked stdin.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> MoveSource for LineSource<R> {
    #[instrument(skip(self))]
    fn next_move(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(InputError::Closed);
        }
        let token = line.trim().to_string();
        trace!(%token, "Read move");
        Ok(token)
    }
}

/// Writes each message followed by a newline.
#[derive(Debug)]
pub struct LineSink<W> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    /// Wraps a writer such as stdout.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MessageSink for LineSink<W> {
    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{}", text).and_then(|()| self.writer.flush()) {
            warn!(error = %e, "Dropped output line");
        }
    }
}

/// Moves queued up front. Reports `Closed` once drained.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    moves: VecDeque<String>,
}

impl ScriptedMoves {
    /// Queues tokens in play order.
    pub fn new<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            moves: moves.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self) -> Result<String, InputError> {
        self.moves.pop_front().ok_or(InputError::Closed)
    }
}

/// Keeps every emitted message in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<String>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in emission order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// True if any message equals `text` exactly.
    pub fn contains(&self, text: &str) -> bool {
        self.messages.iter().any(|m| m == text)
    }

    /// Everything joined with newlines, as a console would show it.
    pub fn text(&self) -> String {
        self.messages.join("\n")
    }
}

impl MessageSink for Transcript {
    fn emit(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_line_source_trims_and_closes() {
        let mut source = LineSource::new(Cursor::new("5\n  9 \n"));
        assert_eq!(source.next_move(), Ok("5".to_string()));
        assert_eq!(source.next_move(), Ok("9".to_string()));
        assert_eq!(source.next_move(), Err(InputError::Closed));
    }

    #[test]
    fn test_line_source_blank_line_is_a_token() {
        let mut source = LineSource::new(Cursor::new("\n"));
        assert_eq!(source.next_move(), Ok(String::new()));
    }

    #[test]
    fn test_line_sink_appends_newlines() {
        let mut sink = LineSink::new(Vec::new());
        sink.emit("hello");
        sink.emit("a\nb");
        assert_eq!(sink.into_inner(), b"hello\na\nb\n");
    }

    #[test]
    fn test_scripted_moves_drain() {
        let mut moves = ScriptedMoves::new(["1", "2"]);
        assert_eq!(moves.remaining(), 2);
        assert_eq!(moves.next_move(), Ok("1".to_string()));
        assert_eq!(moves.next_move(), Ok("2".to_string()));
        assert_eq!(moves.next_move(), Err(InputError::Closed));
    }

    #[test]
    fn test_transcript_records_in_order() {
        let mut transcript = Transcript::new();
        transcript.emit("one");
        transcript.emit("two");
        assert!(transcript.contains("two"));
        assert_eq!(transcript.text(), "one\ntwo");
    }
}
