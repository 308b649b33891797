//! Photo list and detail formatting.

use nearshot_core::{Photo, PhotoDetail};

use super::print_separator;

/// Truncate a string to `max_len` characters, ending in `...` when cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Print photos as a table, one row per photo in base order.
pub fn print_photo_table(photos: &[Photo]) {
    println!("{:<4} {:<12} {:<16} {:<32} URL", "#", "ID", "Owner", "Title");
    print_separator(110);
    for (index, photo) in photos.iter().enumerate() {
        let title = if photo.title.is_empty() {
            "(untitled)"
        } else {
            photo.title.as_str()
        };
        println!(
            "{:<4} {:<12} {:<16} {:<32} {}",
            index,
            truncate_string(&photo.id, 12),
            truncate_string(&photo.owner, 16),
            truncate_string(title, 32),
            photo.source_url_default()
        );
    }
}

/// Print the full-screen detail view of a photo.
pub fn print_detail(detail: &PhotoDetail) {
    let photo = detail.photo();
    println!("Title:    {}", detail.title());
    println!("Photo:    {} by {}", photo.id, photo.owner);
    println!("Standard: {}", detail.standard_quality_url());
    println!("High:     {}", detail.high_quality_url());
}
