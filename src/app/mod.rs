pub mod events;
pub mod pipeline;
pub mod state;
