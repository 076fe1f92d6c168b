mod agenda;
mod grid;
mod state;
mod widget;
pub(crate) use self::agenda::DayAgenda;
pub(crate) use self::grid::WeekStart;
pub(crate) use self::state::{ViewState, YearMonth};
pub(crate) use self::widget::{Legend, MonthView};
