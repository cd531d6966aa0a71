//! UI components for the dashboard

pub mod monitor_card;
pub mod monitor_detail;
pub mod monitor_form;
pub mod monitor_list;
pub mod monitor_table;
pub mod status_badge;
