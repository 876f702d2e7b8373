//! Page assemblers: one snapshot in, one display model out.

pub mod chart_series;
pub mod dashboard;
pub mod stock_details;

pub use chart_series::{ChartSeries, ChartSource, DetailsChartState};
pub use dashboard::{DashboardModel, Headline, assemble_dashboard, load_dashboard};
pub use stock_details::{DetailsModel, assemble_details, load_details};
