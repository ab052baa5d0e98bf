//! Password audit checks
//!
//! Each check analyzes one independent signal: structural strength,
//! breach exposure, dictionary membership, policy compliance.

mod breach;
mod dictionary;
mod policy;
mod strength;

pub use breach::BreachClient;
pub use dictionary::check_dictionary;
pub use policy::check_policy;
pub use strength::evaluate_strength;
