//! Navigation chrome: mobile menu, header shadow, active section link

/// Page geometry of one `.section`, measured by the host
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
    pub active_section: Option<String>,
}

pub fn header_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Section containing `scroll_y + offset`; later sections win on overlap
pub fn active_section(scroll_y: f64, offset: f64, sections: &[SectionBounds]) -> Option<&str> {
    let pos = scroll_y + offset;
    sections
        .iter()
        .filter(|s| pos >= s.top && pos < s.top + s.height)
        .last()
        .map(|s| s.id.as_str())
}
