pub mod format_utils;
pub mod maths_utils;

pub use format_utils::{
    format_bucket_label, format_number, format_tick_list, format_tick_range, quote_text,
};
pub use maths_utils::{Bucketing, RangeF64, bucketize, get_min_max};
