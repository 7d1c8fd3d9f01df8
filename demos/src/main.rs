// Copyright 2026 the Pinwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a scripted touch sequence through a `SimultaneousView` and logs
//! the display transform as it evolves.
//!
//! ```text
//! cargo run -p pinwheel_demos -- --scenario interference --separate-slots
//! RUST_LOG=pinwheel_view=debug cargo run -p pinwheel_demos
//! ```

mod scenario;

use clap::Parser;
use pinwheel_gesture::touch::TouchPhase;
use pinwheel_view::{SimultaneousView, SlotPolicy, ViewConfig};

use crate::scenario::Scenario;

#[derive(Parser, Debug)]
#[command(about = "Replay scripted touches through a rotate/pinch/drag view")]
struct Args {
    /// Sequence to replay.
    #[arg(long, value_enum, default_value_t = Scenario::All)]
    scenario: Scenario,
    /// Samples per motion.
    #[arg(long, default_value_t = 8)]
    steps: u32,
    /// Give the drag its own transient slot instead of sharing one with rotate/pinch.
    #[arg(long)]
    separate_slots: bool,
    /// Log filter, overriding `RUST_LOG`.
    #[arg(long)]
    log: Option<String>,
}

/// Installs `env_logger`, showing `info` and above unless `RUST_LOG` or
/// `--log` says otherwise. `--log` wins over `RUST_LOG`.
fn init_logging(filter: Option<&str>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    builder.format_timestamp(None).init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.log.as_deref());

    let policy = if args.separate_slots {
        SlotPolicy::Separate
    } else {
        SlotPolicy::Shared
    };
    let mut view = SimultaneousView::new(ViewConfig::default().with_slot_policy(policy));
    log::info!(
        "replaying {:?} with {} steps ({policy:?} slots)",
        args.scenario,
        args.steps
    );

    for event in args.scenario.events(args.steps) {
        view.handle(&event);
        let display = view.display_transform();
        log::info!(
            "{:>9} #{:<2} angle {:>8.2}°  scale {:>6.3}  offset ({:>7.1}, {:>7.1})  {:?}",
            format!("{:?}", event.phase),
            event.id.0,
            display.angle.degrees(),
            display.scale,
            display.offset.x,
            display.offset.y,
            view.transient(),
        );
        if event.phase == TouchPhase::Ended && view.touches().is_empty() {
            log::info!("touch sequence finished; bounds {:?}", view.display_bounds());
        }
    }

    let committed = view.committed();
    log::info!(
        "committed: angle {:.2}°, scale {:.3}, translation ({:.1}, {:.1})",
        committed.angle().degrees(),
        committed.scale(),
        committed.translation().x,
        committed.translation().y
    );
}
