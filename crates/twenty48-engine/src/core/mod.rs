pub use self::{grid::*, line::*, moves::*};

pub(crate) mod grid;
pub(crate) mod line;
pub(crate) mod moves;
pub(crate) mod transform;
