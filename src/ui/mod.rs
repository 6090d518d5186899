/// Presentation layer: filter panel, top bar, and the tabbed dashboard.
/// Consumes aggregation results; owns no state of its own.
pub mod dashboard;
pub mod panels;
