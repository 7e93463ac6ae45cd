//! Test fixtures inserting fleet records directly through the entity layer.

pub mod fleet;
