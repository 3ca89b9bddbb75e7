pub mod constants;
pub mod parallax;
pub mod particle;
pub mod player;
pub mod starfield;
pub mod surface;
pub mod time;
pub mod viewport;

pub use parallax::*;
pub use particle::*;
pub use player::*;
pub use starfield::*;
pub use surface::*;
pub use time::*;
pub use viewport::*;
