pub mod load_index;
pub mod search;
pub mod select;

pub use load_index::*;
pub use search::*;
pub use select::*;
