//! Weir quickstart — plan, step, and trace a leveling run.
//!
//! Demonstrates:
//!   1. Checking feasibility and planning the minimum schedule
//!   2. Stepping a Leveler one unit operation at a time
//!   3. Materializing the full trace with simulate()
//!
//! Run with:
//!   cargo run --example leveling

use weir_core::is_equalizable;
use weir_engine::{simulate, LevelPlan, Leveler};

// ─── Input ──────────────────────────────────────────────────────

const VOLUMES: [i64; 5] = [1, 1, 5, 5, 5];

fn main() {
    println!("reservoirs: {VOLUMES:?}");
    println!("equalizable: {}", is_equalizable(&VOLUMES));

    // ─── Plan ───────────────────────────────────────────────────

    let plan = LevelPlan::for_volumes(&VOLUMES).unwrap();
    println!(
        "plan: {} unit ops to level at {:?}",
        plan.total_ops(),
        plan.target()
    );
    for firing in plan.firings() {
        println!("  {} x{}", firing.op, firing.count);
    }

    // ─── Step ───────────────────────────────────────────────────

    let mut leveler = Leveler::new(&VOLUMES).unwrap();
    while let Some(op) = leveler.step() {
        println!("{} -> {:?}", op, leveler.state());
    }

    // ─── Trace ──────────────────────────────────────────────────

    let (count, trace) = simulate(&VOLUMES);
    println!("simulated {count} ops, {} snapshots", trace.len());
    println!("final state: {:?}", trace.last().unwrap());
}
