mod error;
mod mapping;
mod rank;
mod sorted;
mod votes;

pub use error::RankError;
pub use mapping::{InsertionMap, Mapping};
pub use rank::{get_winner, populate_ranks};
pub use sorted::SortedMap;
pub use votes::votes_from_json;
