use tracing::debug;

use crate::{
    constants::{MAX_COMPETITORS, MIN_COMPETITORS, TARGET_WEEKS},
    error::{ProcessorError, Result},
    model::structures::{
        round_robin::{RoundRobinPairing, TournamentRound, BYE_SLOT},
        tournament_match::Match
    }
};

/// # Circle method
///
/// With an odd field a virtual bye slot is appended. Slot 0 stays fixed while
/// the remaining slots rotate one position per round, giving `n - 1` rounds of
/// `n / 2` pairings over the padded slot count `n`. Pairings against the bye
/// slot are kept and emitted with [`BYE_SLOT`] as the second slot.
///
/// Rounds are spread over four target weeks with `floor(index * 4 / total) + 1`.
pub fn generate_round_robin(competitor_count: usize) -> Result<Vec<TournamentRound>> {
    if !(MIN_COMPETITORS..=MAX_COMPETITORS).contains(&competitor_count) {
        return Err(ProcessorError::InvalidCompetitorCount(competitor_count));
    }

    let bye = (competitor_count % 2 == 1).then_some(competitor_count);
    let slots = competitor_count + bye.map_or(0, |_| 1);
    let total_rounds = slots - 1;

    let mut rotation: Vec<usize> = (0..slots).collect();
    let mut rounds = Vec::with_capacity(total_rounds);

    for round_index in 0..total_rounds {
        let pairings = (0..slots / 2)
            .map(|i| pairing(rotation[i], rotation[slots - 1 - i], bye))
            .collect();

        rounds.push(TournamentRound {
            round_number: round_index as u32 + 1,
            target_week: target_week(round_index, total_rounds),
            pairings
        });

        rotation[1..].rotate_right(1);
    }

    debug!(competitor_count, rounds = rounds.len(), "Generated round-robin schedule");

    Ok(rounds)
}

fn pairing(a: usize, b: usize, bye: Option<usize>) -> RoundRobinPairing {
    let (slot_a, slot_b) = match bye {
        Some(bye) if a == bye => (b as i32, BYE_SLOT),
        Some(bye) if b == bye => (a as i32, BYE_SLOT),
        _ => (a as i32, b as i32)
    };

    RoundRobinPairing {
        slot_a,
        slot_b,
        match_id: None
    }
}

pub fn target_week(round_index: usize, total_rounds: usize) -> u8 {
    (round_index * TARGET_WEEKS / total_rounds) as u8 + 1
}

/// Creates a pending match for every non-bye pairing and records its id on the pairing.
///
/// Slot `i` is played by `competitor_ids[i]`; match ids are `{tournament}-r{round}-m{pairing}`.
pub fn build_round_matches(
    tournament_id: &str,
    competitor_ids: &[String],
    rounds: &mut [TournamentRound]
) -> Result<Vec<Match>> {
    let mut matches = Vec::new();

    for round in rounds.iter_mut() {
        for (index, pairing) in round.pairings.iter_mut().enumerate() {
            if pairing.is_bye() {
                continue;
            }

            let challenger = slot_competitor(competitor_ids, pairing.slot_a)?;
            let opponent = slot_competitor(competitor_ids, pairing.slot_b)?;
            let match_id = format!("{}-r{}-m{}", tournament_id, round.round_number, index + 1);

            matches.push(Match::new(&match_id, Some(tournament_id), challenger, opponent));
            pairing.match_id = Some(match_id);
        }
    }

    Ok(matches)
}

fn slot_competitor(competitor_ids: &[String], slot: i32) -> Result<&str> {
    usize::try_from(slot)
        .ok()
        .and_then(|index| competitor_ids.get(index))
        .map(String::as_str)
        .ok_or(ProcessorError::InvalidCompetitorCount(competitor_ids.len()))
}
