mod month_day_cell;
pub mod month_view;

pub use month_view::MonthView;
