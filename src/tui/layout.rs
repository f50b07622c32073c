/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 100 cols: one card per row
    Narrow,
    /// 100-139 cols: two cards per row
    Wide,
    /// 140+ cols: three cards per row
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=99 => Breakpoint::Narrow,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Cards per grid row
    pub fn columns(&self) -> usize {
        match self {
            Breakpoint::Narrow => 1,
            Breakpoint::Wide => 2,
            Breakpoint::UltraWide => 3,
        }
    }
}

/// Number of card columns for a terminal `width` cells wide
pub fn grid_columns(width: u16) -> usize {
    Breakpoint::from_width(width).columns()
}
