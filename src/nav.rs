//! Section ids, nav entries and the scroll math behind the navigation shell.

/// Offset added to the scroll position before matching a section, so a
/// section becomes active slightly before its top reaches the viewport edge.
pub const ACTIVE_OFFSET: f64 = 100.0;
/// Scroll distance after which the header switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub id: &'static str,
    pub number: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

const fn item(name: &'static str, id: &'static str, number: &'static str) -> NavItem {
    NavItem { name, id, number }
}

/// Header links, one per content section.
pub const HEADER_ITEMS: &[NavItem] = &[
    item("About", "about", "01"),
    item("Skills", "skills", "02"),
    item("Experience", "experience", "03"),
    item("Projects", "projects", "04"),
    item("Certifications", "certifications", "05"),
    item("Contact", "contact", "06"),
];

/// Sections tracked by the desktop rail.
pub const RAIL_ITEMS: &[NavItem] = &[
    item("About", "about", "01"),
    item("Experience", "experience", "02"),
    item("Work", "projects", "03"),
    item("Contact", "contact", "04"),
];

/// Vertical extent of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The first section containing `scroll_y + ACTIVE_OFFSET`.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&'static str> {
    let probe = scroll_y + ACTIVE_OFFSET;
    sections.iter().find(|s| s.contains(probe)).map(|s| s.id)
}

/// Like [`active_section`], but keeps `previous` while the probe sits in a
/// gap between tracked sections.
pub fn track_active(
    previous: Option<&'static str>,
    scroll_y: f64,
    sections: &[SectionBounds],
) -> Option<&'static str> {
    active_section(scroll_y, sections).or(previous)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds {
                id: "about",
                top: 800.0,
                height: 600.0,
            },
            SectionBounds {
                id: "experience",
                top: 1400.0,
                height: 900.0,
            },
            SectionBounds {
                id: "contact",
                top: 2300.0,
                height: 500.0,
            },
        ]
    }

    #[test]
    fn nothing_active_above_first_section() {
        assert_eq!(active_section(0.0, &sections()), None);
        assert_eq!(active_section(699.0, &sections()), None);
    }

    #[test]
    fn offset_activates_section_early() {
        assert_eq!(active_section(700.0, &sections()), Some("about"));
    }

    #[test]
    fn boundary_belongs_to_next_section() {
        assert_eq!(active_section(1299.0, &sections()), Some("about"));
        assert_eq!(active_section(1300.0, &sections()), Some("experience"));
    }

    #[test]
    fn nothing_active_past_last_section() {
        assert_eq!(active_section(2700.0, &sections()), None);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let only_contact = [SectionBounds {
            id: "contact",
            top: 0.0,
            height: 400.0,
        }];
        assert_eq!(active_section(10.0, &only_contact), Some("contact"));
        assert_eq!(active_section(10.0, &[]), None);
    }

    #[test]
    fn gap_between_sections_keeps_previous() {
        let rail = [
            SectionBounds {
                id: "about",
                top: 800.0,
                height: 600.0,
            },
            SectionBounds {
                id: "experience",
                top: 2000.0,
                height: 900.0,
            },
        ];
        let active = track_active(None, 1000.0, &rail);
        assert_eq!(active, Some("about"));
        let active = track_active(active, 1500.0, &rail);
        assert_eq!(active, Some("about"));
        let active = track_active(active, 1950.0, &rail);
        assert_eq!(active, Some("experience"));
    }

    #[test]
    fn nothing_tracked_before_first_match() {
        assert_eq!(track_active(None, 0.0, &sections()), None);
    }

    #[test]
    fn scrolled_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn hrefs_are_fragments() {
        assert_eq!(HEADER_ITEMS[0].href(), "#about");
        assert!(RAIL_ITEMS.iter().all(|i| HEADER_ITEMS.iter().any(|h| h.id == i.id)));
    }
}
