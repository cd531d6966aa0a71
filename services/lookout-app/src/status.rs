//! Monitor status mapping and display formatting

use std::fmt;

/// Derived health state of a monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Up,
    Down,
    Pending,
}

impl Status {
    /// Map a wire status string onto the closed state set.
    /// Anything unrecognized counts as not-yet-determined.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "up" => Status::Up,
            "down" => Status::Down,
            _ => Status::Pending,
        }
    }

    /// Visual treatment for a status badge
    pub fn glyph(self) -> StatusGlyph {
        match self {
            Status::Up => StatusGlyph {
                icon: "✓",
                label: "up",
                color: "#155724",
                background: "#d4edda",
            },
            Status::Down => StatusGlyph {
                icon: "✕",
                label: "down",
                color: "#721c24",
                background: "#f8d7da",
            },
            Status::Pending => StatusGlyph {
                icon: "?",
                label: "pending",
                color: "#383d41",
                background: "#e2e3e5",
            },
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph().label)
    }
}

/// Icon, label, and color pair backing a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusGlyph {
    pub icon: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub background: &'static str,
}

/// Uptime percentage clamped to [0, 100], two decimals
pub fn format_uptime(uptime: Option<f64>) -> String {
    let value = uptime
        .filter(|u| u.is_finite())
        .unwrap_or(0.0)
        .clamp(0.0, 100.0);
    format!("{:.2}%", value)
}

/// Response time in whole-ish milliseconds, e.g. "120ms"
pub fn format_response_time(ms: f64) -> String {
    format!("{}ms", ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_maps_known_statuses() {
        assert_eq!(Status::parse("up"), Status::Up);
        assert_eq!(Status::parse("down"), Status::Down);
        assert_eq!(Status::parse("pending"), Status::Pending);
    }

    #[test]
    fn parse_falls_back_to_pending() {
        assert_eq!(Status::parse(""), Status::Pending);
        assert_eq!(Status::parse("UP"), Status::Pending);
        assert_eq!(Status::parse("degraded"), Status::Pending);
    }

    #[test]
    fn glyph_colors_match_state() {
        assert_eq!(Status::Up.glyph().icon, "✓");
        assert_eq!(Status::Up.glyph().background, "#d4edda");
        assert_eq!(Status::Down.glyph().icon, "✕");
        assert_eq!(Status::Down.glyph().background, "#f8d7da");
        assert_eq!(Status::Pending.glyph().icon, "?");
        assert_eq!(Status::Pending.glyph().background, "#e2e3e5");
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Status::Up.to_string(), "up");
        assert_eq!(Status::Down.to_string(), "down");
        assert_eq!(Status::Pending.to_string(), "pending");
    }

    #[test]
    fn uptime_clamps_to_hundred() {
        assert_eq!(format_uptime(Some(100.0)), "100.00%");
        assert_eq!(format_uptime(Some(250.0)), "100.00%");
        assert_eq!(format_uptime(Some(99.995)), "100.00%");
    }

    #[test]
    fn uptime_negative_or_missing_is_zero() {
        assert_eq!(format_uptime(Some(-3.0)), "0.00%");
        assert_eq!(format_uptime(None), "0.00%");
        assert_eq!(format_uptime(Some(f64::NAN)), "0.00%");
    }

    #[test]
    fn uptime_formats_two_decimals() {
        assert_eq!(format_uptime(Some(99.9)), "99.90%");
        assert_eq!(format_uptime(Some(0.0)), "0.00%");
    }

    #[test]
    fn response_time_has_ms_suffix() {
        assert_eq!(format_response_time(120.0), "120ms");
        assert_eq!(format_response_time(0.0), "0ms");
    }
}
