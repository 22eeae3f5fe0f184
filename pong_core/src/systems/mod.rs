pub mod ai;
pub mod collision;
pub mod input;
pub mod movement;
pub mod ramp;
pub mod serve;

pub use ai::*;
pub use collision::*;
pub use input::*;
pub use movement::*;
pub use ramp::*;
pub use serve::*;
