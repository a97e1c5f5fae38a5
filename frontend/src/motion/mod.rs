pub mod carousel;
pub mod counter;
pub mod reveal;
pub mod scheduler;
pub mod scroll;
pub mod surface;
pub mod visibility;
