//! # Presentation Decisions
//!
//! Pure functions from a record (and its position) to what should be shown.
//! No rendering happens here; the TUI asks these questions and draws the
//! answers.

use crate::core::catalog::Record;

/// Quote shown above the list of dogs.
pub const LIST_QUOTE: &str = "“Dogs do speak, but only to those who know how to listen.”";

/// Which side of a list row the image tile sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLayout {
    /// Image on the left, card on the right.
    ImageFirst,
    /// Card on the left, image on the right.
    CardFirst,
}

impl RowLayout {
    /// Rows alternate, starting with the image on the left at position 0.
    pub fn for_position(position: usize) -> Self {
        if position % 2 == 0 {
            RowLayout::ImageFirst
        } else {
            RowLayout::CardFirst
        }
    }
}

/// Long-form description shown on the detail screen.
pub fn describe(record: &Record) -> String {
    let p = record.sex.pronoun();
    format!(
        "{} arrived to the shelter today. {p} is a puppy and... in true puppy fashion, \
         will need your time and dedication. {p} is friendly to all people and has done \
         well with other dogs. {p} is described as very active and playful.",
        record.name
    )
}

/// Whether the detail screen shows a thumbnail strip for this record.
pub fn has_gallery(record: &Record) -> bool {
    record.images.len() > 1
}

/// Split `"Ankara, Türkiye"` into the emphasised place and the rest
/// (`"Ankara"`, `", Türkiye"`). Text without a comma is all place.
pub fn split_place(location: &str) -> (&str, &str) {
    match location.find(',') {
        Some(idx) => location.split_at(idx),
        None => (location, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;

    #[test]
    fn test_row_layout_alternates() {
        assert_eq!(RowLayout::for_position(0), RowLayout::ImageFirst);
        assert_eq!(RowLayout::for_position(1), RowLayout::CardFirst);
        assert_eq!(RowLayout::for_position(2), RowLayout::ImageFirst);
    }

    #[test]
    fn test_describe_uses_she_for_lulu() {
        let catalog = Catalog::builtin();
        let text = describe(catalog.record(1));
        assert!(text.starts_with("Lulu arrived to the shelter today."));
        assert_eq!(text.matches("She ").count(), 3);
        assert!(!text.contains("He "));
    }

    #[test]
    fn test_describe_uses_he_for_niko() {
        let catalog = Catalog::builtin();
        let text = describe(catalog.record(0));
        assert!(text.starts_with("Niko arrived"));
        assert_eq!(text.matches("He is").count(), 3);
        assert!(text.contains("He is described as very active and playful."));
    }

    #[test]
    fn test_split_place() {
        assert_eq!(split_place("Ankara, Türkiye"), ("Ankara", ", Türkiye"));
        assert_eq!(split_place("Çankaya, Ankara"), ("Çankaya", ", Ankara"));
        assert_eq!(split_place("Ankara"), ("Ankara", ""));
    }

    #[test]
    fn test_gallery_only_for_multiple_images() {
        let catalog = Catalog::builtin();
        assert!(has_gallery(catalog.record(0)));
        assert!(has_gallery(catalog.record(1)));
        assert!(!has_gallery(catalog.record(2)));
    }
}
