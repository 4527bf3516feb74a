//! The four search phases (§4.3-§4.6), each a free function operating on
//! the arena [`crate::tree::Tree`] rather than a trait-object hierarchy —
//! there is exactly one selection rule (UCB1), one expansion rule, one
//! simulation rule and one backpropagation rule in this design, so there is
//! nothing left to abstract behind a trait.

pub mod backpropagation;
pub mod expansion;
pub mod selection;
pub mod simulation;

pub use backpropagation::backpropagate;
pub use expansion::pick_unexpanded_random;
pub use selection::best_child;
pub use simulation::simulate;
