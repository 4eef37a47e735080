use crate::RankError;
use serde_json::Value;
use std::collections::HashMap;
use std::convert::TryFrom;

pub fn votes_from_json(input: &str) -> Result<HashMap<String, u32>, RankError> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| RankError::InvalidVotes(e.to_string()))?;

    let object = value.as_object().ok_or_else(|| {
        RankError::InvalidVotes(format!("expected an object of name to count, got {}", value))
    })?;

    let mut votes = HashMap::with_capacity(object.len());
    for (name, count) in object {
        let count = count
            .as_u64()
            .and_then(|c| u32::try_from(c).ok())
            .ok_or_else(|| {
                RankError::InvalidVotes(format!("{} is not a vote count for {}", count, name))
            })?;
        votes.insert(name.to_string(), count);
    }

    Ok(votes)
}
