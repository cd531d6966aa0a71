//! Main App component

use crate::components::monitor_detail::MonitorDetail;
use crate::components::monitor_form::MonitorForm;
use crate::components::monitor_list::MonitorList;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Lookout Dashboard" />
        <Router>
            <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
                <h1>"Lookout Dashboard"</h1>
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=MonitorList />
                    <Route path=path!("/monitors/new") view=MonitorForm />
                    <Route path=path!("/monitors/:id") view=MonitorDetail />
                    <Route path=path!("/monitors/:id/edit") view=MonitorForm />
                </Routes>
            </main>
        </Router>
    }
}
