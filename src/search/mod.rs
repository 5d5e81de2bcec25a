//! Query resolution: normalizer, alias table, trigram similarity and ranking.

pub mod alias;
pub mod normalize;
pub mod ranker;
pub mod resolver;
pub mod similarity;
