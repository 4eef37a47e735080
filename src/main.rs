use log::{error, info};
use rank::{get_winner, populate_ranks, votes_from_json, SortedMap};
use std::collections::HashMap;
use std::error::Error;
use std::{env, fs, process};

fn sample_votes() -> HashMap<String, u32> {
    [("otter", 1281), ("polar bear", 587), ("fox", 863)]
        .iter()
        .map(|(name, count)| (name.to_string(), *count))
        .collect()
}

fn load_votes(path: Option<String>) -> Result<HashMap<String, u32>, Box<dyn Error>> {
    match path {
        Some(path) => {
            info!("reading votes from {}", &path);
            let input = fs::read_to_string(&path)?;
            Ok(votes_from_json(&input)?)
        }
        None => Ok(sample_votes()),
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let votes = load_votes(env::args().nth(1))?;

    let mut ranks: SortedMap<usize> = SortedMap::new();
    populate_ranks(&votes, &mut ranks)?;
    println!("{}", serde_json::to_string(&ranks)?);

    let winner = get_winner(&ranks)?;
    info!("first name in iteration order: {}", &winner);
    println!("{}", winner);

    Ok(())
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "rank=info");
    }
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}
