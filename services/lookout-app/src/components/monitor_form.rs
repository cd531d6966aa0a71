//! Monitor create/edit form

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api::{self, FetchOutcome, MonitorDraft};

/// Create/edit form. With an `:id` route param it edits an existing
/// monitor, otherwise it creates a new one. Save failures surface inline
/// above the form; the page stays interactive.
#[component]
pub fn MonitorForm() -> impl IntoView {
    let params = use_params_map();
    let editing = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|v| v.parse::<u64>().ok()))
    });

    let name = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let navigate = use_navigate();

    // Prefill from the collection when editing.
    Effect::new(move |_| {
        let Some(id) = editing.get() else {
            return;
        };
        spawn_local(async move {
            if let FetchOutcome::Success(monitors) = api::fetch_monitors().await {
                if let Some(monitor) = monitors.into_iter().find(|m| m.id == id) {
                    name.try_set(monitor.name);
                    url.try_set(monitor.url);
                }
            }
        });
    });

    let nav_save = navigate.clone();
    let save = move |_| {
        let draft = MonitorDraft {
            name: name.get_untracked().trim().to_string(),
            url: url.get_untracked().trim().to_string(),
        };
        if draft.name.is_empty() || draft.url.is_empty() {
            error.set(Some("Name and URL are required".to_string()));
            return;
        }
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let id = editing.get_untracked();
        let nav = nav_save.clone();
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_monitor(id, &draft).await,
                None => api::create_monitor(&draft).await,
            };
            saving.try_set(false);
            match result {
                Ok(()) => nav("/", Default::default()),
                Err(message) => {
                    error.try_set(Some(message));
                }
            }
        });
    };

    let nav_cancel = navigate.clone();

    view! {
        <section style="max-width: 24rem;">
            <h2>
                {move || if editing.get().is_some() { "Edit monitor" } else { "New monitor" }}
            </h2>
            {move || {
                error.get().map(|message| view! { <p style="color: #721c24;">{message}</p> })
            }}
            <label style="display: block; margin-bottom: 0.5rem;">
                "Name"
                <input
                    style="display: block; width: 100%;"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label style="display: block; margin-bottom: 0.5rem;">
                "URL"
                <input
                    style="display: block; width: 100%;"
                    placeholder="https://example.com"
                    prop:value=move || url.get()
                    on:input=move |ev| url.set(event_target_value(&ev))
                />
            </label>
            <div style="display: flex; gap: 0.5rem;">
                <button disabled=move || saving.get() on:click=save>
                    "Save"
                </button>
                <button on:click=move |_| nav_cancel("/", Default::default())>"Cancel"</button>
            </div>
        </section>
    }
}
