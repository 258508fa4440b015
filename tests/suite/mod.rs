//! Integration test modules.

mod auto_flip;
mod gate;
mod paginator;
