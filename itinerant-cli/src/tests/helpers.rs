//! Test helpers for writing ticket files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Tickets of the canonical round trip out of JFK.
pub(super) const ROUND_TRIP: &[(&str, &str)] = &[
    ("JFK", "SFO"),
    ("JFK", "ATL"),
    ("SFO", "ATL"),
    ("ATL", "JFK"),
];

/// Itinerary expected for [`ROUND_TRIP`].
pub(super) const ROUND_TRIP_STOPS: &[&str] = &["JFK", "ATL", "JFK", "SFO", "ATL"];

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Render `(origin, destination)` pairs in the ticket file format.
pub(super) fn ticket_text(pairs: &[(&str, &str)]) -> String {
    let mut text = format!("{}\n", pairs.len());
    for (origin, destination) in pairs {
        text.push_str(&format!("{origin} {destination}\n"));
    }
    text
}

/// A temporary directory holding a `tickets.txt` path.
#[derive(Debug)]
pub(super) struct TicketWorkspace {
    _dir: TempDir,
    root: Utf8PathBuf,
    tickets: Utf8PathBuf,
}

impl TicketWorkspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let tickets = root.join("tickets.txt");
        Self {
            _dir: dir,
            root,
            tickets,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn tickets(&self) -> &Utf8Path {
        &self.tickets
    }

    pub(super) fn write_tickets(&self, pairs: &[(&str, &str)]) {
        write_utf8(&self.tickets, ticket_text(pairs).as_bytes());
    }

    pub(super) fn write_raw(&self, contents: &str) {
        write_utf8(&self.tickets, contents.as_bytes());
    }
}
