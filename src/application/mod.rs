pub mod dashboard;

pub use dashboard::{DashboardCore, DashboardSnapshot};
