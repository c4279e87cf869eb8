use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet}
};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::{
    model::structures::{
        match_result::{MatchResult, SetTally},
        standing_entry::{HeadToHead, StandingEntry},
        tournament_match::Match
    },
    utils::hash_utils::fnv1a_32
};

/// Builds a ranked standings table from scratch.
///
/// Only completed matches with a result are folded in. Structured set scores
/// feed the set and game columns; a bare score string only counts as a win/loss.
///
/// Ranking, first difference wins:
/// 1. wins
/// 2. head-to-head between the two, unless their results sit in a cycle
///    among competitors on the same win total
/// 3. set difference
/// 4. game difference
/// 5. FNV-1a hash of `pair key + salt + own id`, lower first
pub fn compute_standings(
    competitor_ids: &[String],
    matches: &[Match],
    tiebreak_salt: Option<&str>
) -> Vec<StandingEntry> {
    let mut table: IndexMap<String, StandingEntry> = competitor_ids
        .iter()
        .map(|id| (id.clone(), StandingEntry::new(id, competitor_ids)))
        .collect();

    let mut folded = 0;
    for m in matches.iter().filter(|m| m.is_completed()) {
        if let Some(result) = &m.result {
            if fold_match(&mut table, m, result) {
                folded += 1;
            }
        }
    }

    for entry in table.values_mut() {
        entry.set_diff = entry.sets_won as i32 - entry.sets_lost as i32;
        entry.game_diff = entry.games_won as i32 - entry.games_lost as i32;
    }

    debug!(
        competitors = table.len(),
        matches = folded,
        "Folded completed matches into standings"
    );

    // Canonical starting order so the ranking never depends on input order
    table.sort_keys();

    let ranker = Ranker::new(table.values(), tiebreak_salt.unwrap_or_default());
    ranker.rank(table.into_values())
}

fn fold_match(table: &mut IndexMap<String, StandingEntry>, m: &Match, result: &MatchResult) -> bool {
    let winner_id = result.winner_id.as_str();
    let Some(loser_id) = m.opponent_of(winner_id) else {
        warn!(match_id = %m.id, winner = %winner_id, "Result winner is not a participant, skipping");
        return false;
    };

    if !table.contains_key(winner_id) || !table.contains_key(loser_id) {
        debug!(match_id = %m.id, "Match involves a competitor outside the field, skipping");
        return false;
    }

    let tally = result.structured_sets().map(SetTally::from_sets);

    for (id, won) in [(winner_id, true), (loser_id, false)] {
        let other = if won { loser_id } else { winner_id };
        let Some(entry) = table.get_mut(id) else {
            continue;
        };

        entry.played += 1;
        if won {
            entry.wins += 1;
            entry.head_to_head.insert(other.to_string(), HeadToHead::Win);
        } else {
            entry.losses += 1;
            entry.head_to_head.insert(other.to_string(), HeadToHead::Loss);
        }

        if let Some(tally) = &tally {
            // Set scores are recorded challenger first
            if id == m.challenger_id {
                entry.sets_won += tally.sets_a;
                entry.sets_lost += tally.sets_b;
                entry.games_won += tally.games_a;
                entry.games_lost += tally.games_b;
            } else {
                entry.sets_won += tally.sets_b;
                entry.sets_lost += tally.sets_a;
                entry.games_won += tally.games_b;
                entry.games_lost += tally.games_a;
            }
        }
    }

    true
}

struct Ranker<'a> {
    salt: &'a str,
    // Pair keys of same-wins competitors whose head-to-head results form a cycle
    cyclic_pairs: HashSet<String>
}

impl<'a> Ranker<'a> {
    fn new<'e>(entries: impl Iterator<Item = &'e StandingEntry>, salt: &'a str) -> Ranker<'a> {
        let entries: Vec<&StandingEntry> = entries.collect();
        let wins: HashMap<&str, u32> = entries.iter().map(|e| (e.competitor_id.as_str(), e.wins)).collect();

        // Head-to-head wins over competitors on the same win total
        let beats: HashMap<&str, Vec<&str>> = entries
            .iter()
            .map(|e| {
                let beaten = e
                    .head_to_head
                    .iter()
                    .filter(|(other, result)| **result == HeadToHead::Win && wins.get(other.as_str()) == Some(&e.wins))
                    .map(|(other, _)| other.as_str())
                    .collect();
                (e.competitor_id.as_str(), beaten)
            })
            .collect();

        let mut cyclic_pairs = HashSet::new();
        for (winner, beaten) in &beats {
            for loser in beaten {
                if reaches(&beats, loser, winner) {
                    cyclic_pairs.insert(pair_key(winner, loser));
                }
            }
        }

        Ranker { salt, cyclic_pairs }
    }

    /// Insertion sort. The hash tiebreak is pairwise and is not guaranteed to be
    /// transitive, which `slice::sort_by` does not allow.
    fn rank(&self, entries: impl Iterator<Item = StandingEntry>) -> Vec<StandingEntry> {
        let mut ranked: Vec<StandingEntry> = Vec::new();

        for entry in entries {
            let mut position = ranked.len();
            while position > 0 && self.compare(&entry, &ranked[position - 1]) == Ordering::Less {
                position -= 1;
            }
            ranked.insert(position, entry);
        }

        ranked
    }

    fn compare(&self, a: &StandingEntry, b: &StandingEntry) -> Ordering {
        b.wins
            .cmp(&a.wins)
            .then_with(|| self.head_to_head(a, b))
            .then_with(|| b.set_diff.cmp(&a.set_diff))
            .then_with(|| b.game_diff.cmp(&a.game_diff))
            .then_with(|| self.hash_tiebreak(a, b))
    }

    fn head_to_head(&self, a: &StandingEntry, b: &StandingEntry) -> Ordering {
        if a.wins != b.wins || self.cyclic_pairs.contains(&pair_key(&a.competitor_id, &b.competitor_id)) {
            return Ordering::Equal;
        }

        match a.head_to_head_against(&b.competitor_id) {
            HeadToHead::Win => Ordering::Less,
            HeadToHead::Loss => Ordering::Greater,
            HeadToHead::Pending => Ordering::Equal
        }
    }

    fn hash_tiebreak(&self, a: &StandingEntry, b: &StandingEntry) -> Ordering {
        let key = pair_key(&a.competitor_id, &b.competitor_id);
        let hash_a = fnv1a_32(&format!("{key}{}{}", self.salt, a.competitor_id));
        let hash_b = fnv1a_32(&format!("{key}{}{}", self.salt, b.competitor_id));

        hash_a
            .cmp(&hash_b)
            .then_with(|| a.competitor_id.cmp(&b.competitor_id))
    }
}

/// Whether `to` can be reached from `from` by following head-to-head wins.
fn reaches(beats: &HashMap<&str, Vec<&str>>, from: &str, to: &str) -> bool {
    let mut stack = vec![from];
    let mut visited = HashSet::new();

    while let Some(current) = stack.pop() {
        if current == to {
            return true;
        }
        if visited.insert(current) {
            if let Some(beaten) = beats.get(current) {
                stack.extend(beaten.iter().copied());
            }
        }
    }

    false
}

fn pair_key(a: &str, b: &str) -> String {
    if a <= b {
        format!("{a}:{b}")
    } else {
        format!("{b}:{a}")
    }
}
