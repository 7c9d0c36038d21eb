//! DuelCamp Headless Scenario Harness
//!
//! Validates the camp rule engine end to end, with no UI and no I/O
//! beyond the report. Replays the reference camp week and sweeps the
//! duel, sustenance and day-cycle rules through their edge cases.
//!
//! Usage:
//!   cargo run -p duelcamp-simtest
//!   cargo run -p duelcamp-simtest -- --verbose

use duelcamp_core::controller::{Controller, DuelOutcome, SustainOutcome};
use duelcamp_core::error::CampError;
use duelcamp_core::player::Player;
use duelcamp_core::registry::NameRegistry;
use duelcamp_core::supply::{Supply, SupplyKind};

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== DuelCamp Scenario Harness ===\n");

    let mut results = Vec::new();

    // 1. Supply catalog rules
    results.extend(validate_supply_catalog(verbose));

    // 2. Roster and name registry
    results.extend(validate_roster_rules(verbose));

    // 3. Reference camp week replay
    results.extend(validate_reference_week(verbose));

    // 4. Duel rule sweep
    results.extend(validate_duel_rules(verbose));

    // 5. Day cycle
    results.extend(validate_day_cycle(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

/// The reference camp: Peter at full stamina, Lilly at 94, larder of
/// two cheeses, two apples, a juice and two waters.
fn reference_camp() -> Controller {
    let mut names = NameRegistry::new();
    let mut camp = Controller::new();
    camp.add_supplies([
        Supply::food("cheese", None).unwrap(),
        Supply::food("apple", Some(22.0)).unwrap(),
        Supply::food("cheese", None).unwrap(),
        Supply::food("apple", Some(22.0)).unwrap(),
        Supply::drink("orange juice").unwrap(),
        Supply::drink("water").unwrap(),
        Supply::drink("water").unwrap(),
    ]);
    camp.add_players([
        Player::new(&mut names, "Peter", 15, None).unwrap(),
        Player::new(&mut names, "Lilly", 12, Some(94.0)).unwrap(),
    ]);
    camp
}

fn stamina_of(camp: &Controller, name: &str) -> f64 {
    camp.player(name).map(|p| p.stamina()).unwrap_or(f64::NAN)
}

// ── 1. Supply Catalog ───────────────────────────────────────────────────

fn validate_supply_catalog(_verbose: bool) -> Vec<TestResult> {
    println!("--- Supply Catalog ---");
    let mut results = Vec::new();

    let cheese = Supply::food("cheese", None).unwrap();
    results.push(TestResult {
        name: "supply_food_default_energy".into(),
        passed: cheese.energy() == 25.0,
        detail: format!("unspecified food energy = {}", cheese.energy()),
    });

    let apple = Supply::food("apple", Some(22.0)).unwrap();
    results.push(TestResult {
        name: "supply_food_explicit_energy".into(),
        passed: apple.energy() == 22.0,
        detail: format!("apple energy = {}", apple.energy()),
    });

    let water = Supply::drink("water").unwrap();
    results.push(TestResult {
        name: "supply_drink_fixed_energy".into(),
        passed: water.energy() == 15.0 && water.kind() == SupplyKind::Drink,
        detail: format!("drink energy = {}", water.energy()),
    });

    results.push(TestResult {
        name: "supply_detail_lines".into(),
        passed: apple.to_string() == "Food: apple, 22"
            && water.to_string() == "Drink: water, 15",
        detail: format!("{} / {}", apple, water),
    });

    let empty = Supply::food("", None);
    let negative = Supply::food("rot", Some(-3.0));
    results.push(TestResult {
        name: "supply_rejects_invalid".into(),
        passed: empty == Err(CampError::EmptyName)
            && negative == Err(CampError::NegativeEnergy(-3.0)),
        detail: "empty name and negative energy both rejected".into(),
    });

    results
}

// ── 2. Roster & Registry ────────────────────────────────────────────────

fn validate_roster_rules(_verbose: bool) -> Vec<TestResult> {
    println!("--- Roster & Registry ---");
    let mut results = Vec::new();

    let mut names = NameRegistry::new();
    let mut camp = Controller::new();
    let added = camp.add_players([
        Player::new(&mut names, "Peter", 15, None).unwrap(),
        Player::new(&mut names, "Lilly", 12, Some(94.0)).unwrap(),
    ]);
    let line = format!("Successfully added: {}", added.join(", "));
    results.push(TestResult {
        name: "roster_enrollment_line".into(),
        passed: line == "Successfully added: Peter, Lilly",
        detail: line.clone(),
    });

    // Same registry refuses a second Peter outright.
    let dup = Player::new(&mut names, "Peter", 40, None);
    results.push(TestResult {
        name: "registry_blocks_duplicate".into(),
        passed: dup == Err(CampError::DuplicateName("Peter".into())),
        detail: "second Peter under one registry is rejected".into(),
    });

    // A scoped fresh registry starts clean, but the roster still
    // refuses the name, so the added list comes back empty.
    let mut fresh = NameRegistry::new();
    let retry = Player::new(&mut fresh, "Peter", 15, None).unwrap();
    let added = camp.add_players([retry]);
    let line = format!("Successfully added: {}", added.join(", "));
    results.push(TestResult {
        name: "roster_skips_enrolled_name".into(),
        passed: added.is_empty() && line == "Successfully added: ",
        detail: format!("re-enrollment line: {:?}", line),
    });

    let underage = Player::new(&mut fresh, "Kid", 11, None);
    let overdrawn = Player::new(&mut fresh, "Tired", 20, Some(101.0));
    results.push(TestResult {
        name: "roster_rejects_invalid_players".into(),
        passed: underage == Err(CampError::UnderAge(11))
            && overdrawn == Err(CampError::StaminaOutOfRange(101.0)),
        detail: "age < 12 and stamina > 100 both rejected".into(),
    });

    results
}

// ── 3. Reference Week ───────────────────────────────────────────────────

fn validate_reference_week(verbose: bool) -> Vec<TestResult> {
    println!("--- Reference Week ---");
    let mut results = Vec::new();
    let mut camp = reference_camp();

    let line = camp.duel("Peter", "Lilly").map(|o| o.to_string());
    results.push(TestResult {
        name: "week_opening_duel".into(),
        passed: line == Ok("Winner: Lilly".into())
            && stamina_of(&camp, "Peter") == 53.0
            && stamina_of(&camp, "Lilly") == 67.5,
        detail: format!(
            "Peter {} / Lilly {} after the duel",
            stamina_of(&camp, "Peter"),
            stamina_of(&camp, "Lilly")
        ),
    });

    let line = camp.sustain("Lilly", SupplyKind::Drink).map(|o| o.to_string());
    results.push(TestResult {
        name: "week_lilly_drinks_last_water".into(),
        passed: line == Ok("Lilly sustained successfully with water.".into())
            && stamina_of(&camp, "Lilly") == 82.5
            && camp.supply_count(SupplyKind::Drink) == 2,
        detail: format!(
            "Lilly at {} with {} drinks left",
            stamina_of(&camp, "Lilly"),
            camp.supply_count(SupplyKind::Drink)
        ),
    });

    if let Some(peter) = camp.player_mut("Peter") {
        let _ = peter.set_stamina(0.0);
    }
    let line = camp.duel("Peter", "Lilly").map(|o| o.to_string());
    results.push(TestResult {
        name: "week_drained_peter_cannot_duel".into(),
        passed: line == Ok("Player Peter does not have enough stamina.".into()),
        detail: "a zero-stamina challenger forfeits".into(),
    });

    let peter_line = camp.player("Peter").map(|p| p.to_string());
    let lilly_line = camp.player("Lilly").map(|p| p.to_string());
    results.push(TestResult {
        name: "week_roster_lines".into(),
        passed: peter_line.as_deref() == Some("Player: Peter, 15, 0, true")
            && lilly_line.as_deref() == Some("Player: Lilly, 12, 82.5, true"),
        detail: format!("{:?} / {:?}", peter_line, lilly_line),
    });

    camp.next_day();
    let expected_report = "Player: Peter, 15, 37, true\n\
                           Player: Lilly, 12, 98.5, true\n\
                           Food: cheese, 25\n\
                           Food: apple, 22\n";
    results.push(TestResult {
        name: "week_next_day_report".into(),
        passed: camp.day() == 1 && camp.to_string() == expected_report,
        detail: format!(
            "day {}: Peter {} / Lilly {}, {} supplies left",
            camp.day(),
            stamina_of(&camp, "Peter"),
            stamina_of(&camp, "Lilly"),
            camp.supplies().len()
        ),
    });

    if verbose {
        match serde_json::to_string_pretty(&camp) {
            Ok(snapshot) => println!("  Final camp snapshot:\n{}", snapshot),
            Err(e) => println!("  snapshot failed: {}", e),
        }
    }

    results
}

// ── 4. Duel Rules ───────────────────────────────────────────────────────

fn validate_duel_rules(_verbose: bool) -> Vec<TestResult> {
    println!("--- Duel Rules ---");
    let mut results = Vec::new();

    let camp_with = |s_a: f64, s_b: f64| {
        let mut names = NameRegistry::new();
        let mut camp = Controller::new();
        camp.add_players([
            Player::new(&mut names, "A", 20, Some(s_a)).unwrap(),
            Player::new(&mut names, "B", 20, Some(s_b)).unwrap(),
        ]);
        camp
    };

    let mut camp = camp_with(50.0, 80.0);
    let outcome = camp.duel("A", "B");
    results.push(TestResult {
        name: "duel_lower_start_wins".into(),
        passed: outcome == Ok(DuelOutcome::Winner("A".into()))
            && stamina_of(&camp, "B") == 55.0
            && stamina_of(&camp, "A") == 22.5,
        detail: format!(
            "50 vs 80 -> A {} / B {}",
            stamina_of(&camp, "A"),
            stamina_of(&camp, "B")
        ),
    });

    let mut flipped = camp_with(50.0, 80.0);
    let outcome = flipped.duel("B", "A");
    results.push(TestResult {
        name: "duel_argument_order_irrelevant".into(),
        passed: outcome.as_ref().ok().and_then(|o| o.winner()) == Some("A")
            && stamina_of(&flipped, "B") == 55.0
            && stamina_of(&flipped, "A") == 22.5,
        detail: "same exchange regardless of challenger order".into(),
    });

    let mut tied = camp_with(40.0, 40.0);
    let outcome = tied.duel("A", "B");
    results.push(TestResult {
        name: "duel_equal_staminas_stalemate".into(),
        passed: matches!(outcome, Ok(DuelOutcome::Stalemate { .. }))
            && stamina_of(&tied, "A") == 40.0
            && stamina_of(&tied, "B") == 40.0,
        detail: "equal staminas stand off with no exchange".into(),
    });

    let mut drained = camp_with(0.0, 0.0);
    let line = drained.duel("A", "B").map(|o| o.to_string());
    let expected =
        "Player A does not have enough stamina.\nPlayer B does not have enough stamina.";
    results.push(TestResult {
        name: "duel_both_drained_two_lines".into(),
        passed: line == Ok(expected.into()),
        detail: "both zero-stamina players are called out".into(),
    });

    // 30 - 10/2 = 25 on the higher side, then 10 - 12.5 overdraws: the
    // duel errors and neither stamina moves.
    let mut lopsided = camp_with(10.0, 30.0);
    let outcome = lopsided.duel("A", "B");
    results.push(TestResult {
        name: "duel_overdraw_is_atomic".into(),
        passed: matches!(outcome, Err(CampError::StaminaOutOfRange(_)))
            && stamina_of(&lopsided, "A") == 10.0
            && stamina_of(&lopsided, "B") == 30.0,
        detail: format!(
            "10 vs 30 errors, staminas stay {} / {}",
            stamina_of(&lopsided, "A"),
            stamina_of(&lopsided, "B")
        ),
    });

    let mut camp = camp_with(50.0, 80.0);
    let unknown = camp.duel("Ghost", "B");
    results.push(TestResult {
        name: "duel_unknown_player_errors".into(),
        passed: unknown == Err(CampError::UnknownPlayer("Ghost".into())),
        detail: "unenrolled challenger is a lookup error".into(),
    });

    results
}

// ── 5. Day Cycle ────────────────────────────────────────────────────────

fn validate_day_cycle(_verbose: bool) -> Vec<TestResult> {
    println!("--- Day Cycle ---");
    let mut results = Vec::new();

    let mut names = NameRegistry::new();
    let mut camp = Controller::new();
    camp.add_players([Player::new(&mut names, "A", 20, Some(50.0)).unwrap()]);
    camp.next_day();
    results.push(TestResult {
        name: "day_decay_is_twice_age".into(),
        passed: stamina_of(&camp, "A") == 10.0,
        detail: format!("age 20 at 50 stamina -> {}", stamina_of(&camp, "A")),
    });

    let mut names = NameRegistry::new();
    let mut camp = Controller::new();
    camp.add_players([Player::new(&mut names, "Old", 60, Some(50.0)).unwrap()]);
    camp.next_day();
    results.push(TestResult {
        name: "day_decay_floors_at_zero".into(),
        passed: stamina_of(&camp, "Old") == 0.0,
        detail: format!("age 60 at 50 stamina -> {}", stamina_of(&camp, "Old")),
    });

    let mut names = NameRegistry::new();
    let mut camp = Controller::new();
    camp.add_players([Player::new(&mut names, "A", 12, Some(50.0)).unwrap()]);
    camp.add_supplies([
        Supply::food("bread", Some(10.0)).unwrap(),
        Supply::drink("water").unwrap(),
    ]);
    camp.next_day();
    results.push(TestResult {
        name: "day_feeds_food_then_drink".into(),
        passed: stamina_of(&camp, "A") == 51.0 && camp.supplies().is_empty(),
        detail: format!("50 - 24 + 10 + 15 = {}", stamina_of(&camp, "A")),
    });

    let mut camp = reference_camp();
    camp.next_day();
    camp.next_day();
    let empty_food = camp.sustain("Peter", SupplyKind::Food)
        == Ok(SustainOutcome::NoSupplies(SupplyKind::Food));
    results.push(TestResult {
        name: "day_larder_drains_in_two_days".into(),
        passed: camp.day() == 2 && camp.supplies().is_empty() && empty_food,
        detail: format!(
            "day {} with {} supplies left",
            camp.day(),
            camp.supplies().len()
        ),
    });

    results
}
