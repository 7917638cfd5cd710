// Plain-text views used by the command line front end

pub mod month_view;
pub mod theme_view;

pub use month_view::MonthView;
pub use theme_view::ThemeView;
