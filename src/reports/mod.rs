mod tables;

pub use self::tables::{
    averages_table, baseline_table, hole_table, shot_table, summary_table, trend_table,
};
