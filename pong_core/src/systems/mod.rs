pub mod collision;
pub mod movement;
pub mod reward;
pub mod scoring;

pub use collision::*;
pub use movement::*;
pub use reward::*;
pub use scoring::*;
