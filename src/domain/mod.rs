//! Domain modules, one vertical slice per concern.

pub mod dates;
pub mod day_stats;
pub mod key_price;
pub mod table;
