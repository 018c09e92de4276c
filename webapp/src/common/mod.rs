pub mod dom;
pub mod style;

use chrono::{Datelike, Local};

pub fn current_year() -> i32 {
    Local::now().year()
}
