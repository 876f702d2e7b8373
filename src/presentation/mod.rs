pub mod components;
pub mod dashboard;
pub mod details;

pub use dashboard::{DashboardContext, DashboardPage};
pub use details::{DetailsContext, DetailsPage};
