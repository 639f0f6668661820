pub mod budget;
pub mod forwarding;
pub mod iterative;
pub mod outcome;

pub use budget::{ReferralTrail, ResolutionBudget};
pub use forwarding::ForwardingResolver;
pub use iterative::IterativeResolver;
pub use outcome::{classify, ResponseOutcome};
