//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms.

mod observer;
mod photos;

pub use observer::TerminalObserver;
pub use photos::{print_detail, print_photo_table, truncate_string};

/// Print a separator line of the given width.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}
