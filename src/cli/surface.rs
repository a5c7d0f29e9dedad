use std::cell::Cell;
use std::io::{self, BufRead, Write};

use crate::pages::{Region, Surface};

/// The production rendering surface: region fragments go to stdout, framed by
/// HTML comments so output piped to a file stays valid markup. Notifications
/// and prompts go to stderr.
pub struct StdoutSurface {
    assume_yes: bool,
    transcript_entries: Cell<usize>,
}

impl StdoutSurface {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes, transcript_entries: Cell::new(0) }
    }
}

impl Surface for StdoutSurface {
    fn set_html(&self, region: Region, html: String) {
        println!("<!-- {} -->", region);
        println!("{}", html);
    }

    fn set_text(&self, region: Region, text: String) {
        println!("<!-- {} --> {}", region, text);
    }

    fn append_html(&self, region: Region, html: String) -> usize {
        println!("<!-- {} -->", region);
        println!("{}", html);
        let entry = self.transcript_entries.get();
        self.transcript_entries.set(entry + 1);
        entry
    }

    fn remove_entry(&self, _region: Region, _entry: usize) {
        // Printed output cannot be unprinted; transient entries simply stay
        // visible as progress.
    }

    fn notify(&self, message: &str) {
        eprintln!("[notice] {}", message);
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{} [y/N] ", message);
        let _ = io::stderr().flush();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes" | "YES")
    }

    fn navigate(&self, location: &str) {
        println!("<!-- navigate: {} -->", location);
    }
}
