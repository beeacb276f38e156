//! Scripted drag scenarios
//!
//! Drives the gesture recognizers with synthetic pointer input and prints
//! what each recognizer reported. Pass `--realtime` to stamp events with the
//! wall clock instead of a virtual one.
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run --package drag-demo -- --realtime
//! ```

use anyhow::{ensure, Result};
use dragkit_foundation::{
    DragConfig, HorizontalDragGestureRecognizer, PanGestureRecognizer,
    VerticalDragGestureRecognizer,
};
use dragkit_geometry::{Offset, Point};
use dragkit_testing::{DragRecorder, GestureRobot, RecordedDragEvent};

fn robot(realtime: bool) -> GestureRobot {
    if realtime {
        GestureRobot::realtime()
    } else {
        GestureRobot::new()
    }
}

fn print_events(label: &str, recorder: &DragRecorder) {
    for event in recorder.events() {
        match event {
            RecordedDragEvent::Down(details) => {
                println!("  {label}: down at {:?}", details.global_position)
            }
            RecordedDragEvent::Start(details) => {
                println!("  {label}: start at {:?}", details.global_position)
            }
            RecordedDragEvent::Update(details) => println!(
                "  {label}: update {:?} (primary {:?})",
                details.delta, details.primary_delta
            ),
            RecordedDragEvent::End(details) => println!(
                "  {label}: end {:?} px/s (primary {:?})",
                details.velocity.pixels_per_second, details.primary_velocity
            ),
            RecordedDragEvent::Cancel => println!("  {label}: cancel"),
        }
    }
}

/// A mostly vertical swipe with vertical and horizontal recognizers competing.
fn axis_competition(realtime: bool) -> Result<()> {
    let vertical = DragRecorder::new();
    let horizontal = DragRecorder::new();
    let mut robot = robot(realtime);
    robot.add_recognizer(Box::new(
        VerticalDragGestureRecognizer::default().with_callbacks(vertical.callbacks()),
    ));
    robot.add_recognizer(Box::new(
        HorizontalDragGestureRecognizer::default().with_callbacks(horizontal.callbacks()),
    ));

    robot.swipe(Point::new(200.0, 300.0), Offset::new(12.0, -160.0), 8)?;
    print_events("vertical", &vertical);
    print_events("horizontal", &horizontal);

    ensure!(vertical.count_starts() == 1, "vertical recognizer did not win");
    ensure!(
        horizontal.count_cancels() == 1,
        "horizontal recognizer was not cancelled"
    );
    Ok(())
}

/// Fast release followed by a release after a pause.
fn fling_and_rest(realtime: bool) -> Result<()> {
    let recorder = DragRecorder::new();
    let mut robot = robot(realtime);
    robot.add_recognizer(Box::new(
        VerticalDragGestureRecognizer::new(DragConfig::default().with_max_fling_velocity(4000.0))
            .with_callbacks(recorder.callbacks()),
    ));

    robot.swipe(Point::new(100.0, 600.0), Offset::new(0.0, -400.0), 6)?;
    let fling = recorder.last_end();
    print_events("fling", &recorder);
    recorder.clear();

    let finger = robot.touch_down(Point::new(100.0, 100.0))?;
    robot.drag(finger, Offset::new(0.0, 120.0), 6)?;
    robot.advance_time(120);
    robot.release(finger)?;
    let rest = recorder.last_end();
    print_events("rest", &recorder);

    ensure!(
        fling.is_some_and(|end| !end.velocity.is_zero()),
        "quick swipe did not fling"
    );
    ensure!(
        rest.is_some_and(|end| end.velocity.is_zero()),
        "paused release should end at rest"
    );
    Ok(())
}

/// Two fingers moving a single pan.
fn two_finger_pan(realtime: bool) -> Result<()> {
    let recorder = DragRecorder::new();
    let mut robot = robot(realtime);
    robot.add_recognizer(Box::new(
        PanGestureRecognizer::default().with_callbacks(recorder.callbacks()),
    ));

    let first = robot.touch_down(Point::new(100.0, 100.0))?;
    let second = robot.touch_down(Point::new(180.0, 120.0))?;
    robot.drag(first, Offset::new(40.0, 30.0), 4)?;
    robot.drag(second, Offset::new(40.0, 30.0), 4)?;
    robot.release(first)?;
    robot.release(second)?;
    print_events("pan", &recorder);

    ensure!(recorder.count_downs() == 1, "pan reported more than one down");
    ensure!(recorder.last_end().is_some(), "pan did not end");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let realtime = std::env::args().any(|arg| arg == "--realtime");
    println!("=== dragkit drag scenarios ===");
    println!(
        "clock: {}\n",
        if realtime { "realtime" } else { "virtual" }
    );

    let scenarios: [(&str, fn(bool) -> Result<()>); 3] = [
        ("axis competition", axis_competition),
        ("fling and rest", fling_and_rest),
        ("two finger pan", two_finger_pan),
    ];

    let mut all_passed = true;
    for (name, scenario) in scenarios {
        println!("--- {name} ---");
        match scenario(realtime) {
            Ok(()) => println!("✓ {name}\n"),
            Err(error) => {
                log::error!("{name} failed: {error:#}");
                println!("✗ {name}\n");
                all_passed = false;
            }
        }
    }

    if !all_passed {
        std::process::exit(1);
    }
}
