use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥100 cols: main view + side panel
    Narrow, // <100 cols: main view only
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 100 {
            LayoutTier::Wide
        } else {
            LayoutTier::Narrow
        }
    }

    pub fn show_side_panel(&self) -> bool {
        *self == LayoutTier::Wide
    }
}

/// Header, optional tab bar, body and key-hint footer.
pub struct AppLayout {
    pub header: Rect,
    pub tabs: Option<Rect>,
    pub main: Rect,
    pub side: Option<Rect>,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl AppLayout {
    pub fn new(area: Rect, with_tabs: bool, footer_lines: u16) -> Self {
        let tier = LayoutTier::from_area(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(if with_tabs { 3 } else { 0 }),
                Constraint::Min(6),
                Constraint::Length(footer_lines.max(1)),
            ])
            .split(area);

        let (main, side) = if tier.show_side_panel() {
            let horizontal = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
                .split(vertical[2]);
            (horizontal[0], Some(horizontal[1]))
        } else {
            (vertical[2], None)
        };

        Self {
            header: vertical[0],
            tabs: with_tabs.then_some(vertical[1]),
            main,
            side,
            footer: vertical[3],
            tier,
        }
    }
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = "  ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
            has_hint = true;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
            has_hint = true;
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 48;
    const MIN_POPUP_HEIGHT: u16 = 14;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_breakpoint() {
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 99, 30)), LayoutTier::Narrow);
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 100, 30)), LayoutTier::Wide);
    }

    #[test]
    fn test_layout_without_tabs() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 30), false, 1);
        assert!(layout.tabs.is_none());
        assert!(layout.side.is_none());
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.main.height, 26);
    }

    #[test]
    fn test_wide_layout_has_side_panel() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40), true, 2);
        assert!(layout.tabs.is_some());
        assert!(layout.side.is_some());
    }

    #[test]
    fn test_pack_hint_lines_wraps() {
        let lines = pack_hint_lines(&["[Tab] Next", "[Enter] Send", "[Esc] Back"], 26);
        assert_eq!(lines, vec!["  [Tab] Next  [Enter] Send", "  [Esc] Back"]);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let r = centered_rect(50, 50, area);
        assert_eq!(r, area);
    }
}
