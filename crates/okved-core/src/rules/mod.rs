pub mod matching;

pub use matching::{find_match, MatchResult};
