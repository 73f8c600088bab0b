//! Deepwake Headless Gameplay Harness
//!
//! Validates the survival/traversal logic without an engine.
//! Runs entirely in-process — no rendering, no audio, no physics.
//!
//! Usage:
//!   cargo run -p deepwake-simtest
//!   cargo run -p deepwake-simtest -- --verbose

use deepwake_logic::camera::{CameraRig, PointOfView};
use deepwake_logic::config::SurvivalTuning;
use deepwake_logic::events::SurvivalEvent;
use deepwake_logic::movement::{self, SwimVertical};
use deepwake_logic::objective::{completed_label, ObjectiveEndTrigger, ObjectiveTrigger};
use deepwake_logic::survival::SurvivalStateMachine;
use deepwake_logic::timers::TimerId;

// ── Tuning (same JSON a host application would ship) ────────────────────
const TUNING_JSON: &str = include_str!("../../../data/survival_tuning.json");

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Deepwake Gameplay Harness ===\n");

    let mut results = Vec::new();

    // 1. Tuning file validation
    let tuning = load_tuning(&mut results);

    // 2. Oxygen drain/regen loop
    results.extend(validate_oxygen_loop(&tuning, verbose));

    // 3. Water transition sweep (timer exclusivity)
    results.extend(validate_water_transitions(&tuning));

    // 4. Death sequencing
    results.extend(validate_death_sequencing(&tuning));

    // 5. Objective chains
    results.extend(validate_objectives(&tuning));

    // 6. POV & camera rig stability
    results.extend(validate_camera(&tuning));

    // 7. Movement guards
    results.extend(validate_movement_guards());

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

// ── 1. Tuning ───────────────────────────────────────────────────────────

fn load_tuning(results: &mut Vec<TestResult>) -> SurvivalTuning {
    println!("--- Survival Tuning ---");

    let tuning: SurvivalTuning = match serde_json::from_str(TUNING_JSON) {
        Ok(t) => t,
        Err(e) => {
            results.push(TestResult {
                name: "tuning_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return SurvivalTuning::default();
        }
    };

    let problems = tuning.validate();
    results.push(TestResult {
        name: "tuning_valid".into(),
        passed: problems.is_empty(),
        detail: if problems.is_empty() {
            "all tuning values usable".into()
        } else {
            problems.join("; ")
        },
    });

    results.push(TestResult {
        name: "tuning_matches_defaults".into(),
        passed: tuning == SurvivalTuning::default(),
        detail: format!(
            "max={} drain={} regen={} interval={}",
            tuning.oxygen_max, tuning.drain_per_tick, tuning.regen_per_tick, tuning.tick_interval
        ),
    });

    tuning
}

// ── 2. Oxygen loop ──────────────────────────────────────────────────────

fn validate_oxygen_loop(tuning: &SurvivalTuning, verbose: bool) -> Vec<TestResult> {
    println!("--- Oxygen Loop ---");
    let mut results = Vec::new();

    // Drain to death takes ceil(max/drain) ticks
    let expected_ticks = tuning.ticks_to_drown();
    let mut m = SurvivalStateMachine::new(tuning.clone());
    m.enter_water();
    let mut ticks = 0u32;
    while !m.state().is_dead() && ticks < expected_ticks * 2 {
        m.tick(tuning.tick_interval);
        ticks += 1;
    }
    results.push(TestResult {
        name: "oxygen_drain_to_death_ticks".into(),
        passed: ticks == expected_ticks && m.state().oxygen == 0.0,
        detail: format!(
            "death after {} ticks (expected {}), oxygen={}",
            ticks,
            expected_ticks,
            m.state().oxygen
        ),
    });

    // Oxygen never leaves [0, max] across a long submerged/surfaced run
    let mut m = SurvivalStateMachine::new(tuning.clone());
    let mut in_range = true;
    m.enter_water();
    for step in 0..500 {
        if step == 20 {
            m.exit_water();
        }
        m.tick(tuning.tick_interval);
        let o = m.state().oxygen;
        if !(0.0..=tuning.oxygen_max).contains(&o) {
            in_range = false;
        }
    }
    results.push(TestResult {
        name: "oxygen_clamped".into(),
        passed: in_range,
        detail: "oxygen stayed in [0, max] over 500 ticks".into(),
    });

    // Regen restores a partial reserve to max
    let mut m = SurvivalStateMachine::new(tuning.clone());
    m.enter_water();
    m.tick(tuning.tick_interval * 5.0);
    let drained = m.state().oxygen;
    m.exit_water();
    let regen_ticks = ((tuning.oxygen_max - drained) / tuning.regen_per_tick).ceil();
    m.tick(tuning.tick_interval * regen_ticks);
    results.push(TestResult {
        name: "oxygen_regen_to_full".into(),
        passed: m.state().oxygen == tuning.oxygen_max,
        detail: format!(
            "{} → {} after {} regen ticks",
            drained,
            m.state().oxygen,
            regen_ticks
        ),
    });

    if verbose {
        println!("  Drain curve (first 10 ticks):");
        let mut m = SurvivalStateMachine::new(tuning.clone());
        m.enter_water();
        for t in 1..=10 {
            m.tick(tuning.tick_interval);
            println!("    tick {:2}: oxygen {:.1}", t, m.state().oxygen);
        }
    }

    results
}

// ── 3. Water transitions ────────────────────────────────────────────────

fn validate_water_transitions(tuning: &SurvivalTuning) -> Vec<TestResult> {
    println!("--- Water Transitions ---");
    let mut results = Vec::new();

    // Exhaustive 8-step enter/exit sequences: the two oxygen timers must
    // never be active together
    let mut exclusive = true;
    for bits in 0u32..256 {
        let mut m = SurvivalStateMachine::new(tuning.clone());
        for step in 0..8 {
            if bits & (1 << step) != 0 {
                m.enter_water();
            } else {
                m.exit_water();
            }
            if m.timers().is_active(TimerId::OxygenDrain)
                && m.timers().is_active(TimerId::OxygenRegen)
            {
                exclusive = false;
            }
            m.tick(tuning.tick_interval / 2.0);
        }
    }
    results.push(TestResult {
        name: "water_timer_exclusivity".into(),
        passed: exclusive,
        detail: "256 enter/exit sequences, never both oxygen timers active".into(),
    });

    // Repeated enter calls are no-ops
    let mut m = SurvivalStateMachine::new(tuning.clone());
    m.enter_water();
    m.drain_events();
    m.enter_water();
    m.enter_water();
    let dup = m.drain_events();
    results.push(TestResult {
        name: "water_enter_idempotent".into(),
        passed: dup.is_empty(),
        detail: format!("{} extra events from repeated enter", dup.len()),
    });

    // Exit at full oxygen self-cancels the regen timer
    let mut m = SurvivalStateMachine::new(tuning.clone());
    m.enter_water();
    m.exit_water();
    let regen_active = m.timers().is_active(TimerId::OxygenRegen);
    m.drain_events();
    m.tick(tuning.tick_interval * 10.0);
    let fired: Vec<_> = m.drain_events();
    results.push(TestResult {
        name: "water_regen_self_cancel".into(),
        passed: !regen_active && fired.is_empty(),
        detail: "regen timer at full oxygen cancels before its first tick".into(),
    });

    results
}

// ── 4. Death sequencing ─────────────────────────────────────────────────

fn validate_death_sequencing(tuning: &SurvivalTuning) -> Vec<TestResult> {
    println!("--- Death Sequencing ---");
    let mut results = Vec::new();

    // N death requests, one sequence
    let mut m = SurvivalStateMachine::new(tuning.clone());
    for _ in 0..5 {
        m.request_death();
    }
    m.tick(tuning.ragdoll_snapshot_delay);
    let events = m.drain_events();
    let died = events
        .iter()
        .filter(|e| matches!(e, SurvivalEvent::Died))
        .count();
    let snaps = events
        .iter()
        .filter(|e| matches!(e, SurvivalEvent::RagdollSnapshotTaken))
        .count();
    results.push(TestResult {
        name: "death_idempotent".into(),
        passed: died == 1 && snaps == 1 && m.state().is_dead(),
        detail: format!("5 requests → {} Died, {} snapshots", died, snaps),
    });

    // Snapshot waits the configured delay
    let mut m = SurvivalStateMachine::new(tuning.clone());
    m.request_death();
    m.drain_events();
    m.tick(tuning.ragdoll_snapshot_delay * 0.9);
    let early = m
        .drain_events()
        .iter()
        .any(|e| matches!(e, SurvivalEvent::RagdollSnapshotTaken));
    m.tick(tuning.ragdoll_snapshot_delay * 0.1);
    let on_time = m
        .drain_events()
        .iter()
        .any(|e| matches!(e, SurvivalEvent::RagdollSnapshotTaken));
    results.push(TestResult {
        name: "death_snapshot_delay".into(),
        passed: !early && on_time,
        detail: format!(
            "snapshot fires at +{}s, not before",
            tuning.ragdoll_snapshot_delay
        ),
    });

    results
}

// ── 5. Objectives ───────────────────────────────────────────────────────

fn validate_objectives(tuning: &SurvivalTuning) -> Vec<TestResult> {
    println!("--- Objectives ---");
    let mut results = Vec::new();

    let mut m = SurvivalStateMachine::new(tuning.clone());
    let start = ObjectiveTrigger::new("FindKey");
    let end = ObjectiveEndTrigger::new("FindKey");

    start.on_player_enter(&mut m);
    let after_start = m.state().current_objective.clone();
    end.on_player_enter(&mut m);
    let after_end = m.state().current_objective.clone();
    end.on_player_enter(&mut m);
    let after_reentry = m.state().current_objective.clone();

    results.push(TestResult {
        name: "objective_chain".into(),
        passed: after_start == "FindKey"
            && after_end == completed_label("FindKey")
            && after_reentry == after_end,
        detail: format!("\"{}\" → \"{}\" (re-entry no-op)", after_start, after_end),
    });

    // End trigger with a different active objective does nothing
    let mut m = SurvivalStateMachine::new(tuning.clone());
    ObjectiveTrigger::new("OpenGate").on_player_enter(&mut m);
    ObjectiveEndTrigger::new("FindKey").on_player_enter(&mut m);
    results.push(TestResult {
        name: "objective_end_requires_match".into(),
        passed: m.state().current_objective == "OpenGate",
        detail: "mismatched end trigger leaves objective untouched".into(),
    });

    results
}

// ── 6. POV & camera ─────────────────────────────────────────────────────

fn validate_camera(tuning: &SurvivalTuning) -> Vec<TestResult> {
    println!("--- POV & Camera ---");
    let mut results = Vec::new();

    let mut m = SurvivalStateMachine::new(tuning.clone());
    let tp = *m.camera_rig();
    let mut stable = true;
    for _ in 0..4 {
        m.switch_pov();
        if *m.camera_rig() != CameraRig::for_pov(PointOfView::FirstPerson) {
            stable = false;
        }
        m.switch_pov();
        if *m.camera_rig() != tp {
            stable = false;
        }
    }
    results.push(TestResult {
        name: "camera_pov_round_trip".into(),
        passed: stable && m.state().pov == PointOfView::ThirdPerson,
        detail: "4 round trips return identical parameter sets".into(),
    });

    let fp = CameraRig::for_pov(PointOfView::FirstPerson);
    results.push(TestResult {
        name: "camera_fp_close_trace".into(),
        passed: fp.trace_length < tp.trace_length && fp.use_controller_yaw,
        detail: format!(
            "fp trace {} < tp trace {}, yaw follows controller",
            fp.trace_length, tp.trace_length
        ),
    });

    results
}

// ── 7. Movement guards ──────────────────────────────────────────────────

fn validate_movement_guards() -> Vec<TestResult> {
    println!("--- Movement Guards ---");
    let mut results = Vec::new();

    let mut ok = true;
    for in_water in [false, true] {
        for hanging in [false, true] {
            let jump = movement::can_jump(in_water, hanging);
            if jump != (!in_water && !hanging) {
                ok = false;
            }
        }
        if movement::can_crouch(in_water) != !in_water {
            ok = false;
        }
    }
    results.push(TestResult {
        name: "movement_jump_crouch_guards".into(),
        passed: ok,
        detail: "jump blocked in water/hanging, crouch blocked in water".into(),
    });

    let up = movement::swim_direction(true, 1.0, [0.6, 0.8, 0.0], SwimVertical::FloatUp);
    let down = movement::swim_direction(true, 1.0, [0.6, 0.8, 0.0], SwimVertical::Dive);
    let dry = movement::swim_direction(false, 1.0, [0.6, 0.8, 0.0], SwimVertical::Dive);
    results.push(TestResult {
        name: "movement_swim_vectors".into(),
        passed: up == Some([0.6, 0.8, 1.0]) && down == Some([0.6, 0.8, -1.0]) && dry.is_none(),
        detail: "float-up z=+1, dive z=-1, none on land".into(),
    });

    results
}
