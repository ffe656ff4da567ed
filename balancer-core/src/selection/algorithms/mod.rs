mod round_robin;
mod smooth_weighted;

pub use round_robin::*;
pub use smooth_weighted::*;
