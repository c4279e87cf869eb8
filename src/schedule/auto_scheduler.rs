use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    config::ProcessorConfig,
    model::structures::{
        availability::AvailabilitySlot,
        match_status::MatchStatus,
        near_miss::NearMiss,
        scheduling_tier::SchedulingTier,
        tournament_match::{Match, TimeProposal}
    },
    schedule::{
        labels::{describe_near_miss, format_proposal_label},
        overlap::{find_overlaps, search_availability, AvailabilitySearch, Overlap}
    }
};

/// Counts and ids per scheduling tier. Every match that was pending or
/// scheduling on input lands in exactly one of the three lists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub scheduled: usize,
    pub near_miss: usize,
    pub failed: usize,
    pub scheduled_ids: Vec<String>,
    pub near_miss_ids: Vec<String>,
    pub failed_ids: Vec<String>
}

impl ScheduleSummary {
    fn record(&mut self, tier: SchedulingTier, match_id: &str) {
        let (count, ids) = match tier {
            SchedulingTier::AutoFit => (&mut self.scheduled, &mut self.scheduled_ids),
            SchedulingTier::FlexFit => (&mut self.near_miss, &mut self.near_miss_ids),
            SchedulingTier::Manual => (&mut self.failed, &mut self.failed_ids)
        };

        *count += 1;
        ids.push(match_id.to_string());
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AutoScheduleOutcome {
    pub summary: ScheduleSummary,
    pub matches: Vec<Match>
}

/// Calendar dates already taken by each competitor. Lives for a single
/// [`auto_schedule_tournament`] call and is never shared between calls.
#[derive(Debug, Default)]
pub struct BookedDates {
    dates: HashMap<String, HashSet<NaiveDate>>
}

impl BookedDates {
    pub fn is_free(&self, competitor_id: &str, date: NaiveDate) -> bool {
        self.dates
            .get(competitor_id)
            .map_or(true, |booked| !booked.contains(&date))
    }

    pub fn book(&mut self, competitor_id: &str, date: NaiveDate) {
        self.dates.entry(competitor_id.to_string()).or_default().insert(date);
    }

    fn book_match(&mut self, m: &Match, date: NaiveDate) {
        self.book(&m.challenger_id, date);
        self.book(&m.opponent_id, date);
    }
}

/// # Auto-scheduling
///
/// 1. Dates of matches in the batch that are already scheduled are booked up front.
/// 2. Pending and scheduling matches are visited once, in input order. Each takes the
///    earliest overlap on a date neither competitor has booked yet, and gets a single
///    system proposal accepted by both sides.
/// 3. Each visited match is tiered: auto-fit when booked, flex-fit when the availability
///    search only reports near misses and one of them falls on a date both competitors
///    still have free (the best such one is attached with its description), manual
///    otherwise. A match whose exact overlaps were all taken by earlier bookings is manual.
///
/// Other matches pass through unchanged. Missing availability is treated as no availability.
pub fn auto_schedule_tournament(
    matches: &[Match],
    availability: &HashMap<String, Vec<AvailabilitySlot>>,
    from: NaiveDate,
    config: &ProcessorConfig
) -> AutoScheduleOutcome {
    let mut updated = matches.to_vec();
    let mut booked = BookedDates::default();

    for m in updated.iter().filter(|m| m.status == MatchStatus::Scheduled) {
        if let Some(at) = m.scheduled_at {
            booked.book_match(m, at.date());
        }
    }

    let slots_for = |competitor_id: &str| availability.get(competitor_id).map_or(&[][..], Vec::as_slice);

    let mut candidates = Vec::new();
    let mut auto_fit = HashSet::new();

    for (index, m) in updated.iter_mut().enumerate() {
        if !m.status.is_schedulable() {
            continue;
        }
        candidates.push(index);

        let overlaps = find_overlaps(slots_for(&m.challenger_id), slots_for(&m.opponent_id), from, config);
        let free = overlaps
            .into_iter()
            .find(|o| booked.is_free(&m.challenger_id, o.date) && booked.is_free(&m.opponent_id, o.date));

        let Some(overlap) = free else {
            debug!(match_id = %m.id, "No unbooked overlap");
            continue;
        };

        if let Err(e) = book_overlap(m, &overlap) {
            warn!(match_id = %m.id, "Could not schedule match: {}", e);
            continue;
        }

        booked.book_match(m, overlap.date);
        auto_fit.insert(index);
        debug!(match_id = %m.id, date = %overlap.date, "Scheduled match");
    }

    let mut summary = ScheduleSummary::default();
    for index in candidates {
        let m = &mut updated[index];

        let (tier, near_miss) = if auto_fit.contains(&index) {
            (SchedulingTier::AutoFit, None)
        } else {
            let search = search_availability(slots_for(&m.challenger_id), slots_for(&m.opponent_id), from, config);
            fallback_tier(search, &booked, m)
        };

        m.flex_suggestion = near_miss.as_ref().map(describe_near_miss);
        m.near_miss = near_miss;
        m.scheduling_tier = Some(tier);
        summary.record(tier, &m.id);
    }

    info!(
        scheduled = summary.scheduled,
        near_miss = summary.near_miss,
        failed = summary.failed,
        "Auto-scheduling pass complete"
    );

    AutoScheduleOutcome {
        summary,
        matches: updated
    }
}

/// Tier for a match the booking pass left open. Near misses on a date either
/// competitor already plays are not offered.
fn fallback_tier(search: AvailabilitySearch, booked: &BookedDates, m: &Match) -> (SchedulingTier, Option<NearMiss>) {
    match search {
        AvailabilitySearch::NearMiss { candidates, .. } => {
            let free = candidates
                .into_iter()
                .find(|miss| booked.is_free(&m.challenger_id, miss.date) && booked.is_free(&m.opponent_id, miss.date));

            match free {
                Some(best) => (SchedulingTier::FlexFit, Some(best)),
                None => (SchedulingTier::Manual, None)
            }
        }
        // Exact overlaps that are all booked already
        AvailabilitySearch::Exact(_) => (SchedulingTier::Manual, None),
        AvailabilitySearch::NoFit => (SchedulingTier::Manual, None)
    }
}

fn book_overlap(m: &mut Match, overlap: &Overlap) -> crate::error::Result<()> {
    m.transition_to(MatchStatus::Scheduled)?;

    let starts_at = overlap.starts_at();
    m.proposals.push(TimeProposal {
        id: format!("{}-auto", m.id),
        starts_at,
        label: format_proposal_label(overlap.date, overlap.start_time),
        proposed_by: None,
        accepted_by: vec![m.challenger_id.clone(), m.opponent_id.clone()]
    });
    m.scheduled_at = Some(starts_at);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use chrono::{Duration, NaiveDate};

    use crate::{
        config::ProcessorConfig,
        model::structures::{match_status::MatchStatus, scheduling_tier::SchedulingTier},
        schedule::{
            auto_scheduler::{auto_schedule_tournament, ScheduleSummary},
            round_robin::{build_round_matches, generate_round_robin}
        },
        utils::test_utils::{
            generate_availability, generate_completed_match, generate_ids, generate_pending_match, generate_slot,
            init_test_env, monday
        }
    };

    const SAT: u8 = 6;

    #[test]
    fn test_schedules_earliest_overlap() {
        let availability = generate_availability(&[
            ("A", vec![generate_slot(SAT, "09:00", "12:00")]),
            ("B", vec![generate_slot(SAT, "10:00", "13:00")]),
        ]);
        let matches = vec![generate_pending_match("m1", "A", "B")];

        let outcome = auto_schedule_tournament(&matches, &availability, monday(), &ProcessorConfig::default());
        let m = &outcome.matches[0];

        assert_eq!(m.status, MatchStatus::Scheduled);
        assert_eq!(m.scheduling_tier, Some(SchedulingTier::AutoFit));
        assert_eq!(m.scheduled_at.unwrap().to_string(), "2024-06-08 10:00:00");
        assert_eq!(m.proposals.len(), 1);
        assert_eq!(m.proposals[0].label, "Sat, Jun 8 at 10:00 AM");
        assert_eq!(m.proposals[0].accepted_by, vec!["A".to_string(), "B".to_string()]);
        assert!(m.proposals[0].proposed_by.is_none());
        assert_eq!(outcome.summary.scheduled, 1);
        assert_eq!(outcome.summary.scheduled_ids, vec!["m1".to_string()]);
    }

    #[test]
    fn test_disjoint_availability_is_manual() {
        let availability = generate_availability(&[
            ("A", vec![generate_slot(1, "18:00", "21:00")]),
            ("B", vec![generate_slot(3, "18:00", "21:00")]),
        ]);
        let matches = vec![generate_pending_match("m1", "A", "B")];

        let outcome = auto_schedule_tournament(&matches, &availability, monday(), &ProcessorConfig::default());
        let m = &outcome.matches[0];

        assert_eq!(m.status, MatchStatus::Pending);
        assert_eq!(m.scheduling_tier, Some(SchedulingTier::Manual));
        assert!(m.near_miss.is_none());
        assert_eq!(outcome.summary.failed, 1);
        assert_eq!(outcome.summary.failed_ids, vec!["m1".to_string()]);
    }

    #[test]
    fn test_missing_availability_is_manual() {
        let matches = vec![generate_pending_match("m1", "A", "B")];

        let outcome = auto_schedule_tournament(&matches, &HashMap::new(), monday(), &ProcessorConfig::default());

        assert_eq!(outcome.matches[0].scheduling_tier, Some(SchedulingTier::Manual));
    }

    #[test]
    fn test_near_miss_is_flex_fit() {
        let availability = generate_availability(&[
            ("A", vec![generate_slot(SAT, "09:00", "11:00")]),
            ("B", vec![generate_slot(SAT, "10:00", "13:00")]),
        ]);
        let matches = vec![generate_pending_match("m1", "A", "B")];

        let outcome = auto_schedule_tournament(&matches, &availability, monday(), &ProcessorConfig::default());
        let m = &outcome.matches[0];

        assert_eq!(m.status, MatchStatus::Pending);
        assert_eq!(m.scheduling_tier, Some(SchedulingTier::FlexFit));
        let near_miss = m.near_miss.as_ref().unwrap();
        assert_eq!(near_miss.flex_needed, 60);
        assert_eq!(near_miss.date, monday() + Duration::days(5));
        assert_eq!(
            m.flex_suggestion.as_deref(),
            Some("Sat, Jun 8 10:00 AM-12:00 PM (needs 60 more minutes of flexibility)")
        );
        assert_eq!(outcome.summary.near_miss_ids, vec!["m1".to_string()]);
    }

    #[test]
    fn test_booked_out_exact_overlaps_are_manual() {
        let availability = generate_availability(&[
            ("A", vec![generate_slot(SAT, "09:00", "12:00")]),
            ("B", vec![generate_slot(SAT, "09:00", "12:00"), generate_slot(SAT, "18:00", "19:00")]),
            ("C", vec![generate_slot(SAT, "09:00", "12:00"), generate_slot(SAT, "18:30", "21:00")]),
        ]);
        let matches = vec![
            generate_pending_match("ab", "A", "B"),
            generate_pending_match("ac", "A", "C"),
            generate_pending_match("bc", "B", "C"),
        ];

        let outcome = auto_schedule_tournament(&matches, &availability, monday(), &ProcessorConfig::default());
        let bc = &outcome.matches[2];

        // Both Saturdays are taken, the evening near miss is not offered instead
        assert_eq!(bc.status, MatchStatus::Pending);
        assert_eq!(bc.scheduling_tier, Some(SchedulingTier::Manual));
        assert!(bc.near_miss.is_none());
        assert!(bc.flex_suggestion.is_none());
        assert_eq!(outcome.summary.failed_ids, vec!["bc".to_string()]);
    }

    #[test]
    fn test_near_miss_skips_booked_dates() {
        let availability = generate_availability(&[
            ("A", vec![generate_slot(SAT, "09:00", "12:00")]),
            ("B", vec![generate_slot(SAT, "09:00", "12:00")]),
            ("C", vec![generate_slot(SAT, "11:00", "13:00")]),
        ]);
        let matches = vec![generate_pending_match("ab", "A", "B"), generate_pending_match("bc", "B", "C")];

        let one_week = ProcessorConfig {
            lookahead_days: 7,
            ..ProcessorConfig::default()
        };
        let outcome = auto_schedule_tournament(&matches, &availability, monday(), &one_week);
        assert_eq!(outcome.matches[1].scheduling_tier, Some(SchedulingTier::Manual));
        assert!(outcome.matches[1].near_miss.is_none());

        let outcome = auto_schedule_tournament(&matches, &availability, monday(), &ProcessorConfig::default());
        let bc = &outcome.matches[1];
        assert_eq!(bc.scheduling_tier, Some(SchedulingTier::FlexFit));
        assert_eq!(bc.near_miss.as_ref().unwrap().date, monday() + Duration::days(12));
        assert_eq!(
            bc.flex_suggestion.as_deref(),
            Some("Sat, Jun 15 11:00 AM-1:00 PM (needs 60 more minutes of flexibility)")
        );
    }

    #[test]
    fn test_scheduling_status_is_booked() {
        let saturday = vec![generate_slot(SAT, "09:00", "12:00")];
        let availability = generate_availability(&[("A", saturday.clone()), ("B", saturday)]);
        let mut m = generate_pending_match("m1", "A", "B");
        m.status = MatchStatus::Scheduling;

        let outcome = auto_schedule_tournament(&[m], &availability, monday(), &ProcessorConfig::default());

        assert_eq!(outcome.matches[0].status, MatchStatus::Scheduled);
        assert_eq!(outcome.matches[0].scheduling_tier, Some(SchedulingTier::AutoFit));
        assert_eq!(outcome.summary.scheduled_ids, vec!["m1".to_string()]);
    }

    #[test]
    fn test_cancelled_match_passes_through() {
        let saturday = vec![generate_slot(SAT, "09:00", "12:00")];
        let availability = generate_availability(&[("A", saturday.clone()), ("B", saturday)]);
        let mut cancelled = generate_pending_match("m1", "A", "B");
        cancelled.status = MatchStatus::Cancelled;

        let outcome = auto_schedule_tournament(&[cancelled.clone()], &availability, monday(), &ProcessorConfig::default());

        assert_eq!(outcome.matches[0], cancelled);
        assert!(outcome.matches[0].scheduling_tier.is_none());
        assert_eq!(outcome.summary, ScheduleSummary::default());
    }

    #[test]
    fn test_one_match_per_day() {
        let saturday = vec![generate_slot(SAT, "09:00", "12:00")];
        let availability = generate_availability(&[
            ("A", saturday.clone()),
            ("B", saturday.clone()),
            ("C", saturday.clone()),
        ]);
        let matches = vec![
            generate_pending_match("ab", "A", "B"),
            generate_pending_match("ac", "A", "C"),
            generate_pending_match("bc", "B", "C"),
        ];

        let outcome = auto_schedule_tournament(&matches, &availability, monday(), &ProcessorConfig::default());
        let [ab, ac, bc] = &outcome.matches[..] else {
            panic!("Expected three matches");
        };

        assert_eq!(ab.scheduled_at.unwrap().date(), monday() + Duration::days(5));
        assert_eq!(ac.scheduled_at.unwrap().date(), monday() + Duration::days(12));
        // B is booked on the first Saturday and C on the second
        assert_eq!(bc.status, MatchStatus::Pending);
        assert_eq!(bc.scheduling_tier, Some(SchedulingTier::Manual));
        assert_eq!(outcome.summary.scheduled_ids, vec!["ab".to_string(), "ac".to_string()]);
    }

    #[test]
    fn test_input_order_decides_priority() {
        let saturday = vec![generate_slot(SAT, "09:00", "12:00")];
        let availability = generate_availability(&[
            ("A", saturday.clone()),
            ("B", saturday.clone()),
            ("C", saturday.clone()),
        ]);
        let matches = vec![generate_pending_match("bc", "B", "C"), generate_pending_match("ab", "A", "B")];

        let outcome = auto_schedule_tournament(&matches, &availability, monday(), &ProcessorConfig::default());

        assert_eq!(
            outcome.matches[0].scheduled_at.unwrap().date(),
            monday() + Duration::days(5)
        );
        assert_eq!(
            outcome.matches[1].scheduled_at.unwrap().date(),
            monday() + Duration::days(12)
        );
    }

    #[test]
    fn test_existing_bookings_are_respected() {
        let saturday = vec![generate_slot(SAT, "09:00", "12:00")];
        let availability = generate_availability(&[("A", saturday.clone()), ("B", saturday.clone()), ("C", saturday)]);

        let mut already = generate_pending_match("ac", "A", "C");
        already.status = MatchStatus::Scheduled;
        already.scheduled_at = Some((monday() + Duration::days(5)).and_hms_opt(9, 0, 0).unwrap());
        let done = generate_completed_match("old", "B", "C", "B", None);
        let matches = vec![already.clone(), done.clone(), generate_pending_match("ab", "A", "B")];

        let outcome = auto_schedule_tournament(&matches, &availability, monday(), &ProcessorConfig::default());

        assert_eq!(outcome.matches[0], already);
        assert_eq!(outcome.matches[1], done);
        assert_eq!(
            outcome.matches[2].scheduled_at.unwrap().date(),
            monday() + Duration::days(12)
        );
        assert_eq!(outcome.summary.scheduled + outcome.summary.near_miss + outcome.summary.failed, 1);
    }

    #[test]
    fn test_round_robin_batch_invariants() {
        init_test_env();
        let ids = generate_ids(&["ana", "ben", "cho", "dev", "eli", "fay"]);
        let mut rounds = generate_round_robin(ids.len()).unwrap();
        let matches = build_round_matches("summer", &ids, &mut rounds).unwrap();

        let availability = generate_availability(&[
            ("ana", vec![generate_slot(SAT, "08:00", "12:00"), generate_slot(2, "18:00", "21:00")]),
            ("ben", vec![generate_slot(SAT, "09:00", "13:00"), generate_slot(0, "10:00", "12:00")]),
            ("cho", vec![generate_slot(2, "17:00", "20:00"), generate_slot(0, "09:00", "11:00")]),
            ("dev", vec![generate_slot(SAT, "10:00", "11:30")]),
            ("eli", vec![generate_slot(4, "19:00", "22:00")]),
        ]);
        let from = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();

        let outcome = auto_schedule_tournament(&matches, &availability, from, &ProcessorConfig::default());

        assert_eq!(outcome.matches.len(), matches.len());
        assert!(outcome.matches.iter().all(|m| m.scheduling_tier.is_some()));
        let summary = &outcome.summary;
        assert_eq!(summary.scheduled + summary.near_miss + summary.failed, matches.len());

        let mut seen = HashSet::new();
        for m in outcome.matches.iter().filter(|m| m.status == MatchStatus::Scheduled) {
            let date = m.scheduled_at.unwrap().date();
            assert!(seen.insert((m.challenger_id.clone(), date)), "double booking for {}", m.challenger_id);
            assert!(seen.insert((m.opponent_id.clone(), date)), "double booking for {}", m.opponent_id);
        }

        // Deterministic on identical input
        let again = auto_schedule_tournament(&matches, &availability, from, &ProcessorConfig::default());
        assert_eq!(again, outcome);
    }
}
