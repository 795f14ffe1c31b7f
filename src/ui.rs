use std::io::{self, Write};

const BORDER: &str = "------------------------------------------------------------";

/// Message sink for everything the user sees. Messages are framed between
/// horizontal rules so multi-line output reads as one block.
pub struct Ui<W: Write> {
    out: W,
}

impl Ui<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Ui<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn print_message(&mut self, text: &str) {
        // Output failures are not actionable mid-session; drop them.
        let _ = writeln!(self.out, "{BORDER}");
        let _ = writeln!(self.out, "{text}");
        let _ = writeln!(self.out, "{BORDER}");
        let _ = self.out.flush();
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
