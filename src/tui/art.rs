//! Bundled ASCII art for image references, generated by `build.rs` from
//! `assets/art/*.txt`.

use unicode_width::UnicodeWidthStr;

use crate::core::catalog::ImageRef;

include!(concat!(env!("OUT_DIR"), "/image_art.rs"));

/// Resolve an image to its art: exact stem first, then the stem without
/// trailing digits (`golden2` → `golden`).
pub fn lookup(image: &ImageRef) -> Option<&'static str> {
    let name = image.name();
    find(name).or_else(|| find(name.trim_end_matches(|c: char| c.is_ascii_digit())))
}

fn find(stem: &str) -> Option<&'static str> {
    IMAGE_ART
        .iter()
        .find(|(s, _)| *s == stem)
        .map(|(_, art)| *art)
}

/// Width and height of a piece of art in terminal cells.
pub fn dimensions(art: &str) -> (u16, u16) {
    let width = art
        .lines()
        .map(|line| line.width())
        .max()
        .unwrap_or(0);
    (width as u16, art.lines().count() as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;

    #[test]
    fn test_every_builtin_image_has_art() {
        for record in &Catalog::builtin() {
            for image in &record.images {
                assert!(lookup(image).is_some(), "no art for {image}");
            }
            assert!(lookup(&record.owner_image).is_some());
        }
    }

    #[test]
    fn test_exact_stem_wins() {
        assert_eq!(lookup(&ImageRef::new("pug")), find("pug"));
        assert_eq!(lookup(&ImageRef::new("pug3")), find("pug"));
    }

    #[test]
    fn test_unknown_image_has_no_art() {
        assert!(lookup(&ImageRef::new("kangal1")).is_none());
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(dimensions("ab\nabcd\n"), (4, 2));
        assert_eq!(dimensions(""), (0, 0));
    }
}
