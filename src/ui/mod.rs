//! Seam between the directory view and whatever renders it.

pub mod controller;
pub mod terminal;

use crate::pages::browser::{Column, Row, SortKey};
use std::io;

pub use controller::{Browser, LISTING_FAILED_MESSAGE};

/// Rendering collaborator. Implementations only draw; all state lives in the view.
pub trait DisplaySurface {
    /// Root options in platform order; `selected` is the pre-selected entry.
    fn show_roots(&mut self, roots: &[String], selected: Option<usize>) -> io::Result<()>;
    fn show_path(&mut self, path: &str) -> io::Result<()>;
    fn show_rows(&mut self, columns: &[Column], rows: &[Row]) -> io::Result<()>;
    /// Acknowledge-only warning. Whether it blocks until acknowledged is up to the
    /// surface; the view is already in its final state when this is called.
    fn warn(&mut self, message: &str) -> io::Result<()>;
}

/// User gestures delivered by the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Activate { name: String, click_count: u32 },
    Up,
    SelectRoot(String),
    Sort(SortKey),
    Refresh,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The host should shut down.
    Exit,
}
