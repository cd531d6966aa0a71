//! Monitor detail page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::components::monitor_card::MonitorCard;
use crate::dialog;
use crate::state::{ListState, RenderBranch};

/// Detail view for a single monitor. The consumed API has no
/// single-monitor read, so this reuses the collection fetch and picks
/// the entry out by id.
#[component]
pub fn MonitorDetail() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|v| v.parse::<u64>().ok()))
    });

    let state = RwSignal::new(ListState::new());
    let navigate = use_navigate();

    let load = move || {
        if state.try_update(|s| s.begin_fetch()).is_none() {
            return;
        }
        spawn_local(async move {
            let outcome = api::fetch_monitors().await;
            state.try_update(|s| s.settle_fetch(outcome));
        });
    };

    Effect::new(move |_| load());

    let nav_back = navigate.clone();

    view! {
        <section>
            <button on:click=move |_| nav_back("/", Default::default())>"Back"</button>
            {move || match state.with(|s| s.branch()) {
                RenderBranch::Loading => view! { <p>"Loading monitor..."</p> }.into_any(),
                RenderBranch::Error => {
                    let message = state.with(|s| s.error.clone().unwrap_or_default());
                    view! {
                        <div style="border: 1px solid #f5c6cb; background: #f8d7da; color: #721c24; border-radius: 0.5rem; padding: 1rem; margin-top: 1rem;">
                            <p>{message}</p>
                            <button on:click=move |_| load()>"Reload"</button>
                        </div>
                    }
                        .into_any()
                }
                RenderBranch::Content => {
                    let found = id
                        .get()
                        .and_then(|id| {
                            state.with(|s| s.monitors.iter().find(|m| m.id == id).cloned())
                        });
                    match found {
                        Some(monitor) => {
                            let mid = monitor.id;
                            let name = monitor.name.clone();
                            let nav_edit = navigate.clone();
                            let nav_after_delete = navigate.clone();
                            view! {
                                <div style="max-width: 24rem; margin-top: 1rem;">
                                    <MonitorCard monitor=monitor show_url=true />
                                    <div style="display: flex; gap: 0.5rem; margin-top: 0.5rem;">
                                        <button on:click=move |_| nav_edit(
                                            &format!("/monitors/{}/edit", mid),
                                            Default::default(),
                                        )>"Edit"</button>
                                        <button on:click=move |_| {
                                            if !dialog::confirm(
                                                &format!("Delete monitor \"{}\"?", name),
                                            ) {
                                                return;
                                            }
                                            let nav = nav_after_delete.clone();
                                            spawn_local(async move {
                                                match api::delete_monitor(mid).await {
                                                    Ok(()) => nav("/", Default::default()),
                                                    Err(message) => dialog::alert(&message),
                                                }
                                            });
                                        }>"Delete"</button>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                        None => {
                            view! { <p style="margin-top: 1rem;">"Monitor not found."</p> }
                                .into_any()
                        }
                    }
                }
            }}
        </section>
    }
}
