mod cont_frac;
pub mod search;
pub mod traits;

pub use cont_frac::{
    evaluate_approx, evaluate_exact, GeneralizedFraction, Pairs, Truncations,
};
pub use search::{
    approx_distance, distance, rediscover, ConfigError, Distance, Neighborhood, Rediscoverer,
    Rediscovery, SearchConfig, SearchError, SearchStatus,
};
pub use traits::{Coefficient, Constant, Exact, Undefined};
