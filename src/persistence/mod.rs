//! Best score persistence
//!
//! One integer under one key, stored as a decimal string. Anything that
//! doesn't parse is treated as "no best yet".

use crate::platform::KeyValueStore;

/// Storage key (shared with earlier builds of the game)
pub const BEST_SCORE_KEY: &str = "superPenguinBest";

/// Read the persisted best score, defaulting to 0
pub fn load_best(store: &dyn KeyValueStore) -> u64 {
    match store.get(BEST_SCORE_KEY) {
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(best) => {
                log::info!("Loaded best score {}", best);
                best
            }
            Err(_) => {
                log::warn!("Ignoring malformed best score {:?}", raw);
                0
            }
        },
        None => {
            log::info!("No best score found, starting fresh");
            0
        }
    }
}

/// Write the best score
pub fn save_best(store: &mut dyn KeyValueStore, best: u64) {
    store.set(BEST_SCORE_KEY, &best.to_string());
    log::info!("Best score saved ({})", best);
}
