mod address;
mod parameters_16;
mod parameters_8;

pub use address::Address;
pub use parameters_16::{Source16, Target16};
pub use parameters_8::{Source8, Target8};
