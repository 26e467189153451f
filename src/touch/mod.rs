/// Bounded FIFO of live touch ripples.
pub mod tracker;
