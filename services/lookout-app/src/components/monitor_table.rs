//! Tabular monitor layout

use crate::api::Monitor;
use crate::components::status_badge::StatusBadge;
use crate::status::{format_response_time, format_uptime, Status};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Table presentation of the monitor collection with per-row actions
#[component]
pub fn MonitorTable(monitors: Vec<Monitor>, on_delete: Callback<u64>) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <table style="width: 100%; border-collapse: collapse;">
            <thead>
                <tr style="border-bottom: 2px solid #dee2e6;">
                    <th style="padding: 0.5rem; text-align: left;">"Name"</th>
                    <th style="padding: 0.5rem; text-align: left;">"Status"</th>
                    <th style="padding: 0.5rem; text-align: left;">"URL"</th>
                    <th style="padding: 0.5rem; text-align: left;">"Response"</th>
                    <th style="padding: 0.5rem; text-align: left;">"Uptime"</th>
                    <th style="padding: 0.5rem; text-align: left;">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {monitors
                    .into_iter()
                    .map(|m| {
                        let status = Status::parse(&m.status);
                        let id = m.id;
                        let nav_view = navigate.clone();
                        let nav_edit = navigate.clone();
                        view! {
                            <tr style="border-bottom: 1px solid #dee2e6;">
                                <td style="padding: 0.5rem;">{m.name}</td>
                                <td style="padding: 0.5rem;">
                                    <StatusBadge status=status />
                                </td>
                                <td style="padding: 0.5rem; overflow-wrap: anywhere;">{m.url}</td>
                                <td style="padding: 0.5rem;">
                                    {format_response_time(m.response_time)}
                                </td>
                                <td style="padding: 0.5rem;">{format_uptime(m.uptime)}</td>
                                <td style="padding: 0.5rem;">
                                    <button on:click=move |_| {
                                        nav_view(&format!("/monitors/{}", id), Default::default())
                                    }>"View"</button>
                                    " "
                                    <button on:click=move |_| {
                                        nav_edit(
                                            &format!("/monitors/{}/edit", id),
                                            Default::default(),
                                        )
                                    }>"Edit"</button>
                                    " "
                                    <button on:click=move |_| on_delete.run(id)>"Delete"</button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
