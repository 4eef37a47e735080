use crate::{Mapping, RankError};
use log::debug;
use std::cmp::Reverse;

/// Entries already in `ranks` that are not in `votes` are left alone.
pub fn populate_ranks<V, R>(votes: &V, ranks: &mut R) -> Result<(), RankError>
where
    V: Mapping<u32> + ?Sized,
    R: Mapping<usize> + ?Sized,
{
    let mut names: Vec<(&str, u32)> = Vec::with_capacity(votes.len());
    for name in votes.keys() {
        names.push((name, votes.get(name)?));
    }

    names.sort_by_key(|&(_, count)| Reverse(count));

    for (i, (name, _)) in names.iter().enumerate() {
        ranks.set(name, i + 1);
    }

    debug!("ranked {} names", names.len());
    Ok(())
}

/// First name in `ranks` iteration order. This is only the top-ranked name
/// when `ranks` iterates in rank order, as an `InsertionMap` filled by
/// `populate_ranks` does. A `SortedMap` gives back the alphabetically first
/// name instead.
pub fn get_winner<R>(ranks: &R) -> Result<String, RankError>
where
    R: Mapping<usize> + ?Sized,
{
    ranks
        .keys()
        .next()
        .map(str::to_string)
        .ok_or(RankError::EmptyMapping)
}
