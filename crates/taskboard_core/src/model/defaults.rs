//! Read-time default table.
//!
//! Values here are consulted when a stored field is absent or invalid. They
//! are never written back into stored data.

use crate::model::status::{Priority, Status};

/// Column used for items whose stored status is unknown or missing.
pub const DEFAULT_STATUS: Status = Status::Todo;

/// Priority assumed when a stored task carries none.
pub const DEFAULT_PRIORITY: Priority = Priority::Medium;

/// Calendar color for standalone tasks.
pub const SOLO_COLOR: &str = "#009688";

/// Calendar color for subtasks of a project without a color.
pub const PROJECT_FALLBACK_COLOR: &str = "#FFD36E";

/// Palette assigned round-robin to new projects.
pub const PROJECT_PALETTE: [&str; 8] = [
    "#5C9DFF", "#FF96CF", "#FFD36E", "#73FAC5", "#AFB3FF", "#FFC78E", "#00E5FF", "#8AFFC1",
];

/// Palette color for the project created after `existing` others.
pub fn palette_color(existing: usize) -> &'static str {
    PROJECT_PALETTE[existing % PROJECT_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::{palette_color, PROJECT_PALETTE};

    #[test]
    fn palette_wraps_around() {
        assert_eq!(palette_color(0), PROJECT_PALETTE[0]);
        assert_eq!(palette_color(7), PROJECT_PALETTE[7]);
        assert_eq!(palette_color(8), PROJECT_PALETTE[0]);
        assert_eq!(palette_color(10), PROJECT_PALETTE[2]);
    }
}
