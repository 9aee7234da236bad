// Application layer: user-facing drivers on top of the client core.

pub mod interactive;
pub mod render;
