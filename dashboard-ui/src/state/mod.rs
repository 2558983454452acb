//! State Management
//!
//! App-wide reactive state: toasts and the dashboard requests.

pub mod dashboard;
pub mod global;

pub use dashboard::{provide_dashboard_state, DashboardState};
pub use global::{provide_global_state, GlobalState};
