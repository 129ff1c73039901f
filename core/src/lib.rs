pub mod error;
pub mod filmography;
pub mod lookup;
pub mod parsing;
pub mod pathfinding;
pub mod search_config;

// Re-export commonly used items
pub use error::{DataError, FrontierError};
pub use filmography::{Filmography, GraphIndex, Person, PersonId, Work, WorkId};
pub use lookup::{PersonMatch, candidate_summary, normalize_name, resolve_person};
pub use parsing::load_filmography;
pub use pathfinding::{PathResult, PathStep, SearchOutcome, find_path, shortest_path};
pub use search_config::{Algorithm, SearchConfig};
