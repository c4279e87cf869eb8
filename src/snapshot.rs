use std::{collections::HashMap, fs, io::Write, path::Path};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    config::ProcessorConfig,
    error::Result,
    model::{
        ntrp::{rating_to_ntrp, skill_band_from_rating},
        standings::compute_standings,
        structures::{
            availability::AvailabilitySlot, competitor::Competitor, round_robin::TournamentRound,
            skill_band::SkillBand, standing_entry::StandingEntry, tournament_match::Match
        }
    },
    schedule::{
        auto_scheduler::{auto_schedule_tournament, ScheduleSummary},
        round_robin::{build_round_matches, generate_round_robin}
    },
    utils::progress_utils::progress_bar
};

/// Input document for the batch binary
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub tournaments: Vec<TournamentSnapshot>
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSnapshot {
    pub id: String,
    pub competitors: Vec<Competitor>,
    /// Keyed by competitor id
    #[serde(default)]
    pub availability: HashMap<String, Vec<AvailabilitySlot>>,
    /// Left empty to have the round-robin generated
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub tiebreak_salt: Option<String>
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub tournaments: Vec<TournamentReport>
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentReport {
    pub id: String,
    /// Only present when the round-robin was generated in this run
    pub rounds: Vec<TournamentRound>,
    pub summary: ScheduleSummary,
    pub matches: Vec<Match>,
    pub standings: Vec<StandingEntry>,
    pub ratings: Vec<CompetitorRating>
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorRating {
    pub competitor_id: String,
    pub rating: i32,
    pub ntrp: f64,
    pub skill_band: SkillBand,
    pub provisional: bool
}

impl From<&Competitor> for CompetitorRating {
    fn from(competitor: &Competitor) -> Self {
        CompetitorRating {
            competitor_id: competitor.id.clone(),
            rating: competitor.rating,
            ntrp: rating_to_ntrp(competitor.rating),
            skill_band: skill_band_from_rating(competitor.rating),
            provisional: competitor.provisional_remaining > 0
        }
    }
}

impl Snapshot {
    pub fn from_path(path: &Path) -> Result<Snapshot> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl Report {
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

/// Processes every tournament in the snapshot in order.
pub fn process_snapshot(snapshot: Snapshot, from: NaiveDate, config: &ProcessorConfig) -> Result<Report> {
    let bar = progress_bar(snapshot.tournaments.len() as u64);

    let mut tournaments = Vec::with_capacity(snapshot.tournaments.len());
    for tournament in snapshot.tournaments {
        bar.set_message(tournament.id.clone());
        tournaments.push(process_tournament(tournament, from, config)?);
        bar.inc(1);
    }

    bar.finish_and_clear();
    Ok(Report { tournaments })
}

/// Generates the round-robin when the tournament has no matches yet, then
/// auto-schedules and ranks it.
pub fn process_tournament(
    tournament: TournamentSnapshot,
    from: NaiveDate,
    config: &ProcessorConfig
) -> Result<TournamentReport> {
    let competitor_ids: Vec<String> = tournament.competitors.iter().map(|c| c.id.clone()).collect();

    let (rounds, matches) = if tournament.matches.is_empty() {
        let mut rounds = generate_round_robin(competitor_ids.len())?;
        let matches = build_round_matches(&tournament.id, &competitor_ids, &mut rounds)?;
        info!(tournament = %tournament.id, matches = matches.len(), "Generated round-robin");
        (rounds, matches)
    } else {
        (Vec::new(), tournament.matches)
    };

    let outcome = auto_schedule_tournament(&matches, &tournament.availability, from, config);

    let salt = tournament.tiebreak_salt.as_deref().or(config.tiebreak_salt.as_deref());
    let standings = compute_standings(&competitor_ids, &outcome.matches, salt);

    Ok(TournamentReport {
        id: tournament.id,
        rounds,
        summary: outcome.summary,
        matches: outcome.matches,
        standings,
        ratings: tournament.competitors.iter().map(CompetitorRating::from).collect()
    })
}
