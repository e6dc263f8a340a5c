//! Headless frame dump.
//!
//! Renders one frame for a pose and prints the column heights followed by
//! an ASCII picture of the wall area. Useful for golden output and for
//! checking the pipeline without a terminal.
//!
//! ```text
//! frame-dump [X Y HEADING] [--moves forward,turnRight,...] [--linear]
//! ```
//!
//! `X` and `Y` are in map units and may be fractional (`4.5` is the middle
//! of cell 4). `HEADING` is an angle in 256ths of a turn.

use anyhow::{bail, Context, Result};

use raymaze::core::{apply_motion, assets, Engine, RowAddressTable, ScreenMemory};
use raymaze::types::{Angle, Fixed8, MotionAction, Pose, PIX_BUFFER_HEIGHT, SCREEN_COLUMNS};

struct Args {
    pose: Pose,
    moves: Vec<MotionAction>,
    linear: bool,
}

fn parse_coord(raw: &str) -> Result<Fixed8> {
    let v: f64 = raw
        .parse()
        .with_context(|| format!("invalid coordinate {raw:?}"))?;
    if !(0.0..256.0).contains(&v) {
        bail!("coordinate {raw} outside 0..256");
    }
    Ok(Fixed8::from_raw((v * 256.0).round() as i32))
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Args> {
    let mut positional = Vec::new();
    let mut moves = Vec::new();
    let mut linear = false;

    let mut args = args;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--linear" => linear = true,
            "--moves" => {
                let list = args.next().context("--moves needs a comma separated list")?;
                for name in list.split(',').filter(|s| !s.is_empty()) {
                    let action = MotionAction::from_str(name.trim())
                        .with_context(|| format!("unknown move {name:?}"))?;
                    moves.push(action);
                }
            }
            _ if arg.starts_with("--") => bail!("unknown flag {arg}"),
            _ => positional.push(arg),
        }
    }

    let pose = match positional.as_slice() {
        [] => assets::START_POSE,
        [x, y, heading] => {
            let heading: i32 = heading
                .parse()
                .with_context(|| format!("invalid heading {heading:?}"))?;
            Pose::new(parse_coord(x)?, parse_coord(y)?, Angle::wrapped(heading))
        }
        _ => bail!("expected X Y HEADING or no position"),
    };

    Ok(Args {
        pose,
        moves,
        linear,
    })
}

fn main() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;

    let world = assets::standard_world()?;
    let mut pose = args.pose;
    if world.grid().is_solid_at(pose.x, pose.y) {
        bail!(
            "pose {:.2},{:.2} is inside a wall",
            pose.x.raw() as f64 / 256.0,
            pose.y.raw() as f64 / 256.0
        );
    }
    for &action in &args.moves {
        apply_motion(&mut pose, action, &world);
    }

    let rows = if args.linear {
        RowAddressTable::linear()
    } else {
        RowAddressTable::interleaved()
    };
    let mut screen = ScreenMemory::new(rows);
    let mut engine = Engine::new();
    let stats = engine.render_frame(&world, &pose, &mut screen);

    println!(
        "pose x={:#06x} y={:#06x} heading={}",
        pose.x.raw(),
        pose.y.raw(),
        pose.heading.value()
    );
    println!(
        "frame={} visible={} dirty={}",
        stats.frame, stats.visible_columns, stats.dirty_columns
    );
    let heights: Vec<String> = engine.heights().iter().map(|h| h.to_string()).collect();
    println!("heights {}", heights.join(" "));
    println!();

    // Two pixel rows and four pixel columns per character.
    for y in (0..PIX_BUFFER_HEIGHT).step_by(2) {
        let line: String = (0..SCREEN_COLUMNS * 2)
            .map(|cx| {
                let inked = (0..4).any(|dx| {
                    let x = cx * 4 + dx;
                    screen.pixel(x, y) || screen.pixel(x, y + 1)
                });
                if inked {
                    '#'
                } else {
                    ' '
                }
            })
            .collect();
        println!("{}", line.trim_end());
    }
    Ok(())
}
