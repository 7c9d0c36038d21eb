//! Camp orchestration: rosters, the larder, sustenance, duels and the
//! day cycle.
//!
//! The [`Controller`] owns its players and supplies (both kept in
//! insertion order) and applies every rule of the camp:
//! - sustenance consumes the most recently stocked supply of a kind,
//! - duels run a two-step stamina exchange in which the lower-starting
//!   player is the designated winner,
//! - the day cycle decays everyone by `age * 2` and then feeds the
//!   roster from the larder, food before drink.
//!
//! Operations either complete fully or change nothing; outcomes that
//! are not errors come back as [`SustainOutcome`] / [`DuelOutcome`]
//! values whose `Display` impls carry the camp's report lines.

use std::fmt;

use serde::Serialize;

use crate::error::CampError;
use crate::player::Player;
use crate::supply::{Supply, SupplyKind};

/// Outcome of a sustenance attempt. `Display` renders the report line.
#[derive(Debug, Clone, PartialEq)]
pub enum SustainOutcome {
    /// The larder holds nothing of the requested kind; nothing changed.
    NoSupplies(SupplyKind),
    /// Player already at full stamina; the supply was not consumed.
    EnoughStamina { player: String },
    /// Player consumed the named supply.
    Sustained { player: String, supply: String },
}

impl fmt::Display for SustainOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SustainOutcome::NoSupplies(kind) => {
                let noun = match kind {
                    SupplyKind::Food => "food",
                    SupplyKind::Drink => "drink",
                };
                write!(f, "There are no {noun} supplies left!")
            }
            SustainOutcome::EnoughStamina { player } => {
                write!(f, "{player} have enough stamina.")
            }
            SustainOutcome::Sustained { player, supply } => {
                write!(f, "{player} sustained successfully with {supply}.")
            }
        }
    }
}

/// Outcome of a resolved duel. `Display` renders the report line(s).
#[derive(Debug, Clone, PartialEq)]
pub enum DuelOutcome {
    /// Completed exchange; the named player won.
    Winner(String),
    /// Equal nonzero staminas; no exchange took place.
    Stalemate { first: String, second: String },
    /// The listed players stood at zero stamina; no exchange took place.
    OutOfStamina(Vec<String>),
}

impl DuelOutcome {
    /// Winner's name, when the duel produced one.
    pub fn winner(&self) -> Option<&str> {
        match self {
            DuelOutcome::Winner(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for DuelOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuelOutcome::Winner(name) => write!(f, "Winner: {name}"),
            DuelOutcome::Stalemate { first, second } => {
                write!(f, "Stalemate: {first} and {second} are evenly matched.")
            }
            DuelOutcome::OutOfStamina(names) => {
                let lines: Vec<String> = names
                    .iter()
                    .map(|n| format!("Player {n} does not have enough stamina."))
                    .collect();
                f.write_str(&lines.join("\n"))
            }
        }
    }
}

/// The camp itself: enrolled players, the larder and the day counter.
#[derive(Debug, Serialize)]
pub struct Controller {
    players: Vec<Player>,
    supplies: Vec<Supply>,
    day: u32,
}

impl Controller {
    /// Empty camp at day zero.
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            supplies: Vec::new(),
            day: 0,
        }
    }

    /// Enroll players, skipping any whose name is already on the
    /// roster. Returns the names actually added, in enrollment order.
    pub fn add_players(&mut self, players: impl IntoIterator<Item = Player>) -> Vec<String> {
        let mut added = Vec::new();
        for player in players {
            if self.players.iter().any(|p| p.name() == player.name()) {
                log::debug!("{} already enrolled, skipping", player.name());
                continue;
            }
            added.push(player.name().to_string());
            self.players.push(player);
        }
        if !added.is_empty() {
            log::info!("enrolled: {}", added.join(", "));
        }
        added
    }

    /// Stock supplies into the larder. Duplicates are welcome; order is
    /// kept, and consumption later picks from the back.
    pub fn add_supplies(&mut self, supplies: impl IntoIterator<Item = Supply>) {
        let before = self.supplies.len();
        self.supplies.extend(supplies);
        log::debug!("stocked {} supplies", self.supplies.len() - before);
    }

    /// Feed one player from the larder.
    ///
    /// The most recently stocked supply of `kind` is consumed, raising
    /// the player's stamina by its energy (saturating at the maximum).
    /// A player already at full stamina consumes nothing, and an empty
    /// larder reports the shortage before the player is even looked up,
    /// so an unknown name only errors when a supply was available.
    pub fn sustain(
        &mut self,
        player_name: &str,
        kind: SupplyKind,
    ) -> Result<SustainOutcome, CampError> {
        let supply_idx = match self.supplies.iter().rposition(|s| s.kind() == kind) {
            Some(idx) => idx,
            None => return Ok(SustainOutcome::NoSupplies(kind)),
        };
        let player = self
            .players
            .iter_mut()
            .find(|p| p.name() == player_name)
            .ok_or_else(|| CampError::UnknownPlayer(player_name.to_string()))?;
        if player.stamina() >= Player::MAX_STAMINA {
            return Ok(SustainOutcome::EnoughStamina {
                player: player_name.to_string(),
            });
        }
        let refreshed =
            (player.stamina() + self.supplies[supply_idx].energy()).min(Player::MAX_STAMINA);
        player.set_stamina(refreshed)?;
        let supply = self.supplies.remove(supply_idx);
        log::debug!(
            "{} consumed {} (stamina now {})",
            player_name,
            supply.name(),
            refreshed
        );
        Ok(SustainOutcome::Sustained {
            player: player_name.to_string(),
            supply: supply.name().to_string(),
        })
    }

    /// Resolve a duel between two enrolled players.
    ///
    /// Both staminas positive and unequal: the higher-starting player
    /// loses half the lower's stamina, then the lower loses half of
    /// what remains on the higher side, and the lower-starting player
    /// is the winner. Equal staminas stand off with no exchange; a
    /// player at zero cannot duel at all.
    ///
    /// The exchange commits only when both resulting staminas are
    /// valid; an overdraw on the lower side errors and leaves both
    /// players untouched.
    pub fn duel(&mut self, first_name: &str, second_name: &str) -> Result<DuelOutcome, CampError> {
        let first_idx = self.player_index(first_name)?;
        let second_idx = self.player_index(second_name)?;
        let first_stamina = self.players[first_idx].stamina();
        let second_stamina = self.players[second_idx].stamina();

        if first_stamina <= 0.0 || second_stamina <= 0.0 {
            let mut drained = Vec::new();
            if first_stamina <= 0.0 {
                drained.push(first_name.to_string());
            }
            if second_stamina <= 0.0 {
                drained.push(second_name.to_string());
            }
            return Ok(DuelOutcome::OutOfStamina(drained));
        }
        if first_stamina == second_stamina {
            log::debug!("duel {first_name} vs {second_name}: stalemate");
            return Ok(DuelOutcome::Stalemate {
                first: first_name.to_string(),
                second: second_name.to_string(),
            });
        }

        let (lower_idx, higher_idx) = if first_stamina < second_stamina {
            (first_idx, second_idx)
        } else {
            (second_idx, first_idx)
        };
        let lower_start = self.players[lower_idx].stamina();
        let higher_start = self.players[higher_idx].stamina();
        let winner = self.players[lower_idx].name().to_string();

        let higher_after = higher_start - lower_start / 2.0;
        if higher_after < 0.0 {
            // Unreachable with higher > lower > 0, but the clamp branch
            // is part of the defined contract: the lower player wins.
            self.players[higher_idx].set_stamina(0.0)?;
            return Ok(DuelOutcome::Winner(winner));
        }
        let lower_after = lower_start - higher_after / 2.0;
        if lower_after < 0.0 {
            // The counter-blow would overdraw the lower player. Commit
            // nothing: both staminas keep their pre-duel values.
            return Err(CampError::StaminaOutOfRange(lower_after));
        }
        self.players[higher_idx].set_stamina(higher_after)?;
        self.players[lower_idx].set_stamina(lower_after)?;
        log::info!(
            "duel {first_name} vs {second_name}: {winner} wins ({lower_start} -> {lower_after}, {higher_start} -> {higher_after})"
        );
        Ok(DuelOutcome::Winner(winner))
    }

    /// Advance the camp one day: every player decays by `age * 2`
    /// stamina (floored at zero), then the whole roster is fed from the
    /// larder in enrollment order, food before drink. Feeding outcomes
    /// are best effort and only logged.
    pub fn next_day(&mut self) {
        self.day += 1;
        log::info!("advancing to day {}", self.day);

        for player in &mut self.players {
            let decayed = (player.stamina() - f64::from(player.age()) * 2.0).max(0.0);
            if let Err(err) = player.set_stamina(decayed) {
                log::warn!("decay skipped for {}: {err}", player.name());
            }
        }

        let names: Vec<String> = self.players.iter().map(|p| p.name().to_string()).collect();
        for name in names {
            for kind in [SupplyKind::Food, SupplyKind::Drink] {
                match self.sustain(&name, kind) {
                    Ok(outcome) => log::debug!("day {} upkeep: {outcome}", self.day),
                    Err(err) => log::warn!("day {} upkeep for {name} failed: {err}", self.day),
                }
            }
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn supplies(&self) -> &[Supply] {
        &self.supplies
    }

    /// First enrolled player with this name.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Mutable access to an enrolled player.
    pub fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name() == name)
    }

    /// Supplies of one kind still in the larder.
    pub fn supply_count(&self, kind: SupplyKind) -> usize {
        self.supplies.iter().filter(|s| s.kind() == kind).count()
    }

    /// Completed day cycles.
    pub fn day(&self) -> u32 {
        self.day
    }

    fn player_index(&self, name: &str) -> Result<usize, CampError> {
        self.players
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| CampError::UnknownPlayer(name.to_string()))
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Controller {
    /// Full camp report: one line per player, then one per supply.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for player in &self.players {
            writeln!(f, "{player}")?;
        }
        for supply in &self.supplies {
            writeln!(f, "{supply}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::NameRegistry;

    fn player(reg: &mut NameRegistry, name: &str, stamina: f64) -> Player {
        Player::new(reg, name, 20, Some(stamina)).unwrap()
    }

    fn two_player_camp(first: f64, second: f64) -> Controller {
        let mut reg = NameRegistry::new();
        let mut camp = Controller::new();
        camp.add_players([player(&mut reg, "A", first), player(&mut reg, "B", second)]);
        camp
    }

    #[test]
    fn test_add_players_skips_enrolled_names() {
        let mut reg = NameRegistry::new();
        let mut camp = Controller::new();
        let added = camp.add_players([player(&mut reg, "Peter", 100.0)]);
        assert_eq!(added, vec!["Peter".to_string()]);

        // A second enrollment under the same name adds nothing.
        let mut other_reg = NameRegistry::new();
        let added = camp.add_players([player(&mut other_reg, "Peter", 50.0)]);
        assert!(added.is_empty());
        assert_eq!(camp.players().len(), 1);
        assert_eq!(camp.player("Peter").map(|p| p.stamina()), Some(100.0));
    }

    #[test]
    fn test_add_supplies_keeps_order_and_duplicates() {
        let mut camp = Controller::new();
        let apple = Supply::food("apple", Some(22.0)).unwrap();
        camp.add_supplies([apple.clone(), apple.clone(), Supply::drink("water").unwrap()]);
        assert_eq!(camp.supplies().len(), 3);
        assert_eq!(camp.supply_count(SupplyKind::Food), 2);
        assert_eq!(camp.supply_count(SupplyKind::Drink), 1);
    }

    #[test]
    fn test_sustain_empty_larder_reports_before_lookup() {
        let mut camp = two_player_camp(50.0, 60.0);
        // No supplies at all: even an unknown name gets the shortage.
        let outcome = camp.sustain("Nobody", SupplyKind::Food).unwrap();
        assert_eq!(outcome, SustainOutcome::NoSupplies(SupplyKind::Food));
        assert_eq!(outcome.to_string(), "There are no food supplies left!");
        let outcome = camp.sustain("Nobody", SupplyKind::Drink).unwrap();
        assert_eq!(outcome.to_string(), "There are no drink supplies left!");
    }

    #[test]
    fn test_sustain_unknown_player_with_stock() {
        let mut camp = two_player_camp(50.0, 60.0);
        camp.add_supplies([Supply::food("bread", None).unwrap()]);
        assert_eq!(
            camp.sustain("Nobody", SupplyKind::Food),
            Err(CampError::UnknownPlayer("Nobody".to_string()))
        );
        assert_eq!(camp.supplies().len(), 1, "failed lookup must not consume");
    }

    #[test]
    fn test_sustain_full_player_consumes_nothing() {
        let mut camp = two_player_camp(100.0, 60.0);
        camp.add_supplies([Supply::food("bread", None).unwrap()]);
        let outcome = camp.sustain("A", SupplyKind::Food).unwrap();
        assert_eq!(
            outcome,
            SustainOutcome::EnoughStamina {
                player: "A".to_string()
            }
        );
        assert_eq!(outcome.to_string(), "A have enough stamina.");
        assert_eq!(camp.supplies().len(), 1);
    }

    #[test]
    fn test_sustain_adds_energy_exactly() {
        let mut camp = two_player_camp(50.0, 60.0);
        camp.add_supplies([Supply::food("apple", Some(22.0)).unwrap()]);
        let outcome = camp.sustain("A", SupplyKind::Food).unwrap();
        assert_eq!(
            outcome.to_string(),
            "A sustained successfully with apple."
        );
        assert_eq!(camp.player("A").unwrap().stamina(), 72.0);
        assert!(camp.supplies().is_empty());
    }

    #[test]
    fn test_sustain_clamps_overflow_to_max() {
        let mut camp = two_player_camp(90.0, 60.0);
        camp.add_supplies([Supply::food("feast", Some(30.0)).unwrap()]);
        camp.sustain("A", SupplyKind::Food).unwrap();
        assert_eq!(camp.player("A").unwrap().stamina(), 100.0);
        assert!(camp.supplies().is_empty(), "clamped consumption still eats");
    }

    #[test]
    fn test_sustain_takes_most_recent_of_kind() {
        let mut camp = two_player_camp(10.0, 60.0);
        camp.add_supplies([
            Supply::food("first", Some(5.0)).unwrap(),
            Supply::drink("water").unwrap(),
            Supply::food("second", Some(7.0)).unwrap(),
        ]);
        let outcome = camp.sustain("A", SupplyKind::Food).unwrap();
        assert_eq!(
            outcome,
            SustainOutcome::Sustained {
                player: "A".to_string(),
                supply: "second".to_string()
            }
        );
        assert_eq!(camp.player("A").unwrap().stamina(), 17.0);
        assert_eq!(camp.supply_count(SupplyKind::Food), 1);
    }

    #[test]
    fn test_duel_lower_starter_wins() {
        let mut camp = two_player_camp(50.0, 80.0);
        let outcome = camp.duel("A", "B").unwrap();
        assert_eq!(outcome, DuelOutcome::Winner("A".to_string()));
        assert_eq!(outcome.to_string(), "Winner: A");
        // B loses half of A's 50, then A loses half of B's remaining 55.
        assert_eq!(camp.player("B").unwrap().stamina(), 55.0);
        assert_eq!(camp.player("A").unwrap().stamina(), 22.5);
    }

    #[test]
    fn test_duel_argument_order_is_irrelevant() {
        let mut camp = two_player_camp(50.0, 80.0);
        let outcome = camp.duel("B", "A").unwrap();
        assert_eq!(outcome.winner(), Some("A"));
        assert_eq!(camp.player("B").unwrap().stamina(), 55.0);
        assert_eq!(camp.player("A").unwrap().stamina(), 22.5);
    }

    #[test]
    fn test_duel_zero_stamina_messages() {
        let mut camp = two_player_camp(0.0, 80.0);
        let outcome = camp.duel("A", "B").unwrap();
        assert_eq!(
            outcome.to_string(),
            "Player A does not have enough stamina."
        );

        let mut camp = two_player_camp(80.0, 0.0);
        let outcome = camp.duel("A", "B").unwrap();
        assert_eq!(
            outcome.to_string(),
            "Player B does not have enough stamina."
        );

        let mut camp = two_player_camp(0.0, 0.0);
        let outcome = camp.duel("A", "B").unwrap();
        assert_eq!(
            outcome.to_string(),
            "Player A does not have enough stamina.\nPlayer B does not have enough stamina."
        );
    }

    #[test]
    fn test_duel_zero_stamina_changes_nothing() {
        let mut camp = two_player_camp(0.0, 80.0);
        camp.duel("A", "B").unwrap();
        assert_eq!(camp.player("A").unwrap().stamina(), 0.0);
        assert_eq!(camp.player("B").unwrap().stamina(), 80.0);
    }

    #[test]
    fn test_duel_stalemate_on_equal_stamina() {
        let mut camp = two_player_camp(40.0, 40.0);
        let outcome = camp.duel("A", "B").unwrap();
        assert_eq!(
            outcome,
            DuelOutcome::Stalemate {
                first: "A".to_string(),
                second: "B".to_string()
            }
        );
        assert_eq!(camp.player("A").unwrap().stamina(), 40.0);
        assert_eq!(camp.player("B").unwrap().stamina(), 40.0);
    }

    #[test]
    fn test_duel_overdraw_commits_nothing() {
        // 30 - 10/2 = 25 on the higher side, then 10 - 12.5 overdraws.
        let mut camp = two_player_camp(10.0, 30.0);
        let result = camp.duel("A", "B");
        assert!(matches!(result, Err(CampError::StaminaOutOfRange(_))));
        assert_eq!(camp.player("A").unwrap().stamina(), 10.0);
        assert_eq!(camp.player("B").unwrap().stamina(), 30.0);
    }

    #[test]
    fn test_duel_unknown_player_order() {
        let mut camp = two_player_camp(50.0, 80.0);
        assert_eq!(
            camp.duel("Ghost", "B"),
            Err(CampError::UnknownPlayer("Ghost".to_string()))
        );
        assert_eq!(
            camp.duel("A", "Ghost"),
            Err(CampError::UnknownPlayer("Ghost".to_string()))
        );
        // Both missing: the first lookup fails first.
        assert_eq!(
            camp.duel("Ghost", "Wraith"),
            Err(CampError::UnknownPlayer("Ghost".to_string()))
        );
    }

    #[test]
    fn test_next_day_decays_by_twice_age() {
        let mut reg = NameRegistry::new();
        let mut camp = Controller::new();
        camp.add_players([Player::new(&mut reg, "A", 20, Some(50.0)).unwrap()]);
        camp.next_day();
        assert_eq!(camp.player("A").unwrap().stamina(), 10.0);
        assert_eq!(camp.day(), 1);
    }

    #[test]
    fn test_next_day_decay_floors_at_zero() {
        let mut reg = NameRegistry::new();
        let mut camp = Controller::new();
        camp.add_players([Player::new(&mut reg, "A", 60, Some(50.0)).unwrap()]);
        camp.next_day();
        assert_eq!(camp.player("A").unwrap().stamina(), 0.0);
    }

    #[test]
    fn test_next_day_feeds_food_then_drink() {
        let mut reg = NameRegistry::new();
        let mut camp = Controller::new();
        camp.add_players([Player::new(&mut reg, "A", 12, Some(50.0)).unwrap()]);
        camp.add_supplies([
            Supply::food("bread", Some(10.0)).unwrap(),
            Supply::drink("water").unwrap(),
        ]);
        camp.next_day();
        // 50 - 24 decay, + 10 food + 15 drink.
        assert_eq!(camp.player("A").unwrap().stamina(), 51.0);
        assert!(camp.supplies().is_empty());
    }

    #[test]
    fn test_next_day_decays_everyone_before_feeding() {
        let mut reg = NameRegistry::new();
        let mut camp = Controller::new();
        camp.add_players([
            Player::new(&mut reg, "A", 12, Some(100.0)).unwrap(),
            Player::new(&mut reg, "B", 12, Some(50.0)).unwrap(),
        ]);
        // One food unit only: A decays to 76 before feeding, so A (not
        // a still-full player) eats it first.
        camp.add_supplies([Supply::food("bread", Some(5.0)).unwrap()]);
        camp.next_day();
        assert_eq!(camp.player("A").unwrap().stamina(), 81.0);
        assert_eq!(camp.player("B").unwrap().stamina(), 26.0);
        assert!(camp.supplies().is_empty());
    }

    #[test]
    fn test_camp_report_lists_players_then_supplies() {
        let mut reg = NameRegistry::new();
        let mut camp = Controller::new();
        camp.add_players([Player::new(&mut reg, "Peter", 15, None).unwrap()]);
        camp.add_supplies([Supply::food("apple", Some(22.0)).unwrap()]);
        assert_eq!(
            camp.to_string(),
            "Player: Peter, 15, 100, false\nFood: apple, 22\n"
        );
    }
}
