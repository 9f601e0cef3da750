pub mod charset;
pub mod classifier;
pub mod funnel;
pub mod host;
pub mod lookup;
