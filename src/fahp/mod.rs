pub mod aggregate;
pub mod comparator;
pub mod consistency;
pub mod error;
pub mod matrix;
pub mod problem;
pub mod tfn;
pub mod weights;

pub use aggregate::{aggregate, FahpResult, RankedRow};
pub use comparator::{compare, ScoredItem};
pub use consistency::{check_consistency, check_consistency_lenient, ConsistencyReport, CR_THRESHOLD};
pub use error::{DomainError, FahpError, NumericalError};
pub use matrix::PairwiseMatrix;
pub use problem::Problem;
pub use tfn::{DiffRounding, Tfn};
pub use weights::{extract_weights, fuzzy_weights, FuzzyWeights};
