pub mod chart;
pub mod price;
pub mod summary;

pub use chart::*;
pub use price::*;
pub use summary::*;
