mod navigation;
mod sort;
mod state;

pub use state::*;
