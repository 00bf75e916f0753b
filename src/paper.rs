use serde::Serialize;

/// Physical page size in PostScript points (1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaperSize {
    pub width: f64,
    pub height: f64,
}

impl PaperSize {
    pub const ZERO: PaperSize = PaperSize { width: 0.0, height: 0.0 };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    pub fn rotated(&self) -> Self {
        Self::new(self.height, self.width)
    }
}

/// Maps a paper-format name to its physical size.
///
/// Names are matched case-sensitively. Unknown names resolve to
/// [`PaperSize::ZERO`] rather than an error.
pub trait PaperCatalog {
    fn size_for_paper_name(&self, name: &str) -> PaperSize;
}

pub struct StandardPaperCatalog;

impl StandardPaperCatalog {
    const PAPERS: &'static [(&'static str, PaperSize)] = &[
        ("A0", PaperSize::new(2384.0, 3370.0)),
        ("A1", PaperSize::new(1684.0, 2384.0)),
        ("A2", PaperSize::new(1191.0, 1684.0)),
        ("A3", PaperSize::new(842.0, 1191.0)),
        ("A4", PaperSize::new(595.0, 842.0)),
        ("A5", PaperSize::new(420.0, 595.0)),
        ("A6", PaperSize::new(298.0, 420.0)),
        ("B4", PaperSize::new(709.0, 1001.0)),
        ("B5", PaperSize::new(499.0, 709.0)),
        ("Letter", PaperSize::new(612.0, 792.0)),
        ("Legal", PaperSize::new(612.0, 1008.0)),
        ("Executive", PaperSize::new(522.0, 756.0)),
        ("Tabloid", PaperSize::new(792.0, 1224.0)),
    ];

    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::PAPERS.iter().map(|(name, _)| *name)
    }
}

impl PaperCatalog for StandardPaperCatalog {
    fn size_for_paper_name(&self, name: &str) -> PaperSize {
        Self::PAPERS
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, size)| *size)
            .unwrap_or(PaperSize::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_paper_has_an_area() {
        for name in StandardPaperCatalog::names() {
            let size = StandardPaperCatalog.size_for_paper_name(name);
            assert!(size.width > 0.0 && size.height > 0.0, "{name} has no area");
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(
            StandardPaperCatalog.size_for_paper_name("A4"),
            PaperSize::new(595.0, 842.0)
        );
        assert!(StandardPaperCatalog.size_for_paper_name("a4").is_empty());
        assert!(StandardPaperCatalog.size_for_paper_name("letter").is_empty());
    }

    #[test]
    fn unknown_name_is_zero() {
        assert_eq!(
            StandardPaperCatalog.size_for_paper_name("Napkin"),
            PaperSize::ZERO
        );
    }
}
