pub mod cell;
pub mod constants;
pub mod controls;
pub mod engine;
pub mod error;
pub mod field;
pub mod grid;
pub mod ripple;
pub mod snapshot;
pub mod voice;

pub use cell::*;
pub use controls::*;
pub use engine::*;
pub use error::*;
pub use field::*;
pub use grid::*;
pub use ripple::*;
pub use snapshot::*;
pub use voice::*;
