//! Monitor list page
//!
//! Fetches the collection on mount and every 60s, renders it as a card
//! grid or a table, and dispatches create/view/edit/delete actions.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::monitor_card::MonitorCard;
use crate::components::monitor_table::MonitorTable;
use crate::dialog;
use crate::state::{ListState, RenderBranch, ViewMode};

/// How often the collection is re-polled
const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Full-page monitor list with periodic refresh
#[component]
pub fn MonitorList() -> impl IntoView {
    let state = RwSignal::new(ListState::new());
    let view_mode = RwSignal::new(ViewMode::default());
    let navigate = use_navigate();

    // A manual refresh during an in-flight poll is not suppressed;
    // whichever response settles last wins. try_update makes a response
    // landing after unmount a no-op.
    let refresh = move || {
        if state.try_update(|s| s.begin_fetch()).is_none() {
            return;
        }
        spawn_local(async move {
            let outcome = api::fetch_monitors().await;
            state.try_update(|s| s.settle_fetch(outcome));
        });
    };

    // Initial load plus the poll timer, scoped to this view's lifetime.
    let interval = StoredValue::new_local(None::<IntervalHandle>);
    Effect::new(move |_| {
        refresh();
        match set_interval_with_handle(refresh, REFRESH_INTERVAL) {
            Ok(handle) => interval.set_value(Some(handle)),
            Err(e) => leptos::logging::error!("failed to start refresh timer: {:?}", e),
        }
    });
    on_cleanup(move || {
        interval.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.clear();
            }
        });
    });

    // Confirm, delete on the server, then shrink the collection in place
    // without a re-fetch. Failures stay action-local: an alert, never the
    // page-level error card.
    let delete = Callback::new(move |id: u64| {
        let name = state.with_untracked(|s| {
            s.monitors
                .iter()
                .find(|m| m.id == id)
                .map(|m| m.name.clone())
        });
        let Some(name) = name else {
            return;
        };
        if !dialog::confirm(&format!("Delete monitor \"{}\"?", name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_monitor(id).await {
                Ok(()) => {
                    state.try_update(|s| s.remove_monitor(id));
                }
                Err(message) => dialog::alert(&message),
            }
        });
    });

    let nav_new = navigate.clone();

    view! {
        <section>
            <div style="display: flex; justify-content: space-between; align-items: center; gap: 0.5rem;">
                <h2>"Monitors"</h2>
                <div style="display: flex; gap: 0.5rem;">
                    <button
                        disabled=move || view_mode.get() == ViewMode::Grid
                        on:click=move |_| view_mode.set(ViewMode::Grid)
                    >
                        "Grid"
                    </button>
                    <button
                        disabled=move || view_mode.get() == ViewMode::List
                        on:click=move |_| view_mode.set(ViewMode::List)
                    >
                        "List"
                    </button>
                    <button on:click=move |_| refresh()>"Refresh"</button>
                    <button on:click=move |_| nav_new(
                        "/monitors/new",
                        Default::default(),
                    )>"New monitor"</button>
                </div>
            </div>
            {move || match state.with(|s| s.branch()) {
                RenderBranch::Loading => view! { <p>"Loading monitors..."</p> }.into_any(),
                RenderBranch::Error => {
                    let message = state.with(|s| s.error.clone().unwrap_or_default());
                    view! {
                        <div style="border: 1px solid #f5c6cb; background: #f8d7da; color: #721c24; border-radius: 0.5rem; padding: 1rem;">
                            <p>{message}</p>
                            <button on:click=move |_| refresh()>"Reload"</button>
                        </div>
                    }
                        .into_any()
                }
                RenderBranch::Content => {
                    let monitors = state.with(|s| s.monitors.clone());
                    if monitors.is_empty() {
                        let nav_first = navigate.clone();
                        view! {
                            <div style="text-align: center; padding: 2rem; color: #6c757d;">
                                <p>"No monitors configured."</p>
                                <button on:click=move |_| nav_first(
                                    "/monitors/new",
                                    Default::default(),
                                )>"Add your first monitor"</button>
                            </div>
                        }
                            .into_any()
                    } else {
                        match view_mode.get() {
                            ViewMode::Grid => {
                                view! {
                                    <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1rem; margin-top: 1rem;">
                                        {monitors
                                            .into_iter()
                                            .map(|m| {
                                                let id = m.id;
                                                let nav_view = navigate.clone();
                                                let nav_edit = navigate.clone();
                                                view! {
                                                    <div>
                                                        <MonitorCard monitor=m />
                                                        <div style="display: flex; gap: 0.5rem; margin-top: 0.25rem;">
                                                            <button on:click=move |_| nav_view(
                                                                &format!("/monitors/{}", id),
                                                                Default::default(),
                                                            )>"View"</button>
                                                            <button on:click=move |_| nav_edit(
                                                                &format!("/monitors/{}/edit", id),
                                                                Default::default(),
                                                            )>"Edit"</button>
                                                            <button on:click=move |_| delete.run(id)>"Delete"</button>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            ViewMode::List => {
                                view! { <MonitorTable monitors=monitors on_delete=delete /> }
                                    .into_any()
                            }
                        }
                    }
                }
            }}
        </section>
    }
}
