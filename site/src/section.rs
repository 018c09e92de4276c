use std::fmt;

// page sections
//
// the set is closed and declared once; the order here is the order of the page and the order
// in which the tracker scans for a containing extent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Projects,
    Resume,
    Contact,
}

pub const SECTIONS: [SectionId; 4] = [
    SectionId::About,
    SectionId::Projects,
    SectionId::Resume,
    SectionId::Contact,
];

impl SectionId {
    pub fn all() -> &'static [SectionId] {
        &SECTIONS
    }

    // element id of the section's root node
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Resume => "resume",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Resume => "Resume",
            Self::Contact => "Contact",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        SECTIONS.iter().copied().find(|s| s.dom_id() == id)
    }
}

impl Default for SectionId {
    fn default() -> Self {
        SECTIONS[0]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dom_id())
    }
}

// vertical extent of a section in page coordinates, half-open: [top, top + height)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(top: f64, height: f64) -> Self {
        Extent { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

// live layout geometry
//
// implementations must read the current layout on every call rather than caching, since
// section sizes change with the viewport.  None means the section is not mounted
pub trait SectionLayout {
    fn extent(&self, section: SectionId) -> Option<Extent>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_parse_back() {
        for section in SectionId::all() {
            assert_eq!(SectionId::from_dom_id(section.dom_id()), Some(*section));
        }
        assert_eq!(SectionId::from_dom_id("hero"), None);
        assert_eq!(SectionId::from_dom_id("About"), None);
    }

    #[test]
    fn default_is_first_declared() {
        assert_eq!(SectionId::default(), SectionId::About);
    }

    #[test]
    fn extent_is_half_open() {
        let extent = Extent::new(800.0, 800.0);

        assert!(!extent.contains(799.9));
        assert!(extent.contains(800.0));
        assert!(extent.contains(1599.9));
        assert!(!extent.contains(1600.0));
    }

    #[test]
    fn zero_height_contains_nothing() {
        let extent = Extent::new(100.0, 0.0);
        assert!(!extent.contains(100.0));
    }
}
