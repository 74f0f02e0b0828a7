pub mod training;
mod utils;

pub use training::{score_chart, win_rate_chart};
