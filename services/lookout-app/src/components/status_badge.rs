//! Status badge component

use crate::status::Status;
use leptos::prelude::*;

/// A colored badge showing up (green), down (red), or pending (gray)
#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
    let glyph = status.glyph();
    let style = format!(
        "display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; \
         font-size: 0.85em; font-weight: 600; color: {}; background-color: {};",
        glyph.color, glyph.background
    );

    view! {
        <span style=style>{glyph.icon} " " {glyph.label}</span>
    }
}
