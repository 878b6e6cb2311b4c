//! boilerplant — smallest example for the rust_pv channel engine.
//!
//! Simulates the channel table of a small boiler: a jittered fuel-flow
//! setpoint, a slowly breathing drum-pressure sinewave, and panel channels
//! mirroring both.  One panel deliberately mirrors a channel that is only
//! registered mid-run, to show that an unresolved mirror keeps retrying
//! (and the sweep keeps going) until its target appears.

use std::io::Cursor;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use pv_behavior::params;
use pv_channel::{load_channels_reader, ChannelSetBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64 = 42;
const SWEEPS:          u32 = 6;
const SWEEP_PERIOD_MS: u64 = 250;
/// Sweep after which the late turbine channel gets registered.
const TURBINE_ONLINE_AFTER: u32 = 3;

// ── Channel table ─────────────────────────────────────────────────────────────

// `turbine_rpm_panel` mirrors a channel that does not exist yet — its
// updates fail (and are retried) until `turbine_rpm` is registered below.
const CHANNEL_TABLE: &str = "\
name,behavior,params\n\
fuel_flow,setpoint,3.2;0.1\n\
fuel_flow_panel,copy,fuel_flow\n\
drum_pressure,sinewave,9.5;0.4;0.2;0\n\
turbine_rpm_panel,copy,turbine_rpm\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== boilerplant — rust_pv channel engine ===");
    println!("Seed: {SEED}  |  Sweeps: {SWEEPS} every {SWEEP_PERIOD_MS} ms");
    println!();

    // 1. Load the channel table and build the set (system clock, fixed seed).
    let specs = load_channels_reader(Cursor::new(CHANNEL_TABLE))?;
    let mut set = ChannelSetBuilder::new().seed(SEED).specs(specs).build()?;
    println!("Registered {} channels", set.len());

    // 2. Sweep on a fixed period; the host owns the schedule.
    for sweep in 1..=SWEEPS {
        let report = set.update_all();
        println!(
            "sweep {sweep}: {} updated, {} failed",
            report.updated,
            report.failures.len()
        );
        for (id, err) in &report.failures {
            println!("  `{}`: {err}", set.name(*id));
        }

        // 3. Mid-run changes: the turbine comes online and the operator
        //    retargets the fuel flow.  The panel mirror recovers on its own.
        if sweep == TURBINE_ONLINE_AFTER {
            set.add_channel("turbine_rpm", "setpoint", &params![3000.0, 25.0])?;
            let fuel = set.id_by_name("fuel_flow").expect("fuel_flow is in the table");
            set.set_value(fuel, 2.8);
            println!("  turbine online; fuel flow retargeted to 2.8");
        }

        thread::sleep(Duration::from_millis(SWEEP_PERIOD_MS));
    }

    // 4. Final readings.
    println!();
    println!("{:<20} {:<10} {:<12}", "Channel", "Kind", "Value");
    println!("{}", "-".repeat(44));
    for id in set.channel_ids() {
        println!(
            "{:<20} {:<10} {:<12.3}",
            set.name(id),
            set.kind(id),
            set.value(id).as_f64(),
        );
    }

    Ok(())
}
