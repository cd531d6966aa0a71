//! Monitor summary card

use crate::api::Monitor;
use crate::components::status_badge::StatusBadge;
use crate::status::{format_response_time, format_uptime, Status};
use leptos::prelude::*;

/// Card summary of one monitor, optionally showing its URL
#[component]
pub fn MonitorCard(monitor: Monitor, #[prop(default = true)] show_url: bool) -> impl IntoView {
    let status = Status::parse(&monitor.status);

    view! {
        <div style="border: 1px solid #dee2e6; border-radius: 0.5rem; padding: 1rem;">
            <div style="display: flex; justify-content: space-between; align-items: center;">
                <strong>{monitor.name}</strong>
                <StatusBadge status=status />
            </div>
            {show_url
                .then(|| {
                    view! {
                        <p style="color: #6c757d; margin: 0.5rem 0 0; overflow-wrap: anywhere;">
                            {monitor.url}
                        </p>
                    }
                })}
            <p style="margin: 0.5rem 0 0;">
                "Response: " {format_response_time(monitor.response_time)}
            </p>
            <p style="margin: 0.25rem 0 0;">"Uptime: " {format_uptime(monitor.uptime)}</p>
        </div>
    }
}
