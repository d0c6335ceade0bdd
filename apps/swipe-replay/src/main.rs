use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use swipecard_foundation::prelude::*;
use swipecard_foundation::{ExitTarget, Point, Rect, TransformUpdate};

const CONTAINER: Rect = Rect::new(0.0, 0.0, 400.0, 800.0);
const CARD: Rect = Rect::new(50.0, 150.0, 300.0, 450.0);

/// Card frame that only records where it was told to go.
struct ConsoleFrame {
    bounds: Rect,
}

impl CardFrame for ConsoleFrame {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn container(&self) -> Rect {
        CONTAINER
    }

    fn apply_transform(&mut self, update: &TransformUpdate) {
        self.bounds.x = update.x;
        self.bounds.y = update.y;
        log::info!(
            "  frame at ({:.1}, {:.1}) rotated {:.2}° progress {:.3}",
            update.x,
            update.y,
            update.rotation_deg,
            update.progress
        );
    }

    fn animate_to(&mut self, target: &ExitTarget) {
        log::info!(
            "  animating to ({:.1}, {:.1}) rotated {:.2}°",
            target.final_x,
            target.final_y,
            target.final_rotation_deg
        );
        self.bounds.x = target.final_x;
        self.bounds.y = target.final_y;
    }
}

/// A press at `start` (frame-local), pointer offsets from it, and whether
/// the stream ends in a cancel instead of a release.
struct Gesture {
    name: String,
    start: Point,
    path: Vec<Point>,
    cancelled: bool,
}

impl Gesture {
    fn new(name: &str, start: Point, path: &[(f64, f64)]) -> Self {
        Self {
            name: name.to_string(),
            start,
            path: path.iter().map(|&(dx, dy)| Point::new(dx, dy)).collect(),
            cancelled: false,
        }
    }

    fn cancelled(mut self) -> Self {
        self.cancelled = true;
        self
    }
}

fn builtin_gestures() -> Vec<Gesture> {
    let top = Point::new(150.0, 100.0);
    let bottom = Point::new(150.0, 400.0);
    vec![
        Gesture::new("tap", top, &[(2.0, 1.0)]),
        Gesture::new("half drag right", top, &[(40.0, 5.0), (75.0, 10.0)]),
        Gesture::new("full drag right", top, &[(80.0, 0.0), (160.0, 20.0)]),
        Gesture::new("full drag left from bottom", bottom, &[(-90.0, 0.0), (-200.0, -30.0)]),
        Gesture::new("cancelled drag", top, &[(120.0, 0.0), (200.0, 0.0)]).cancelled(),
    ]
}

/// Parses `DX,DY` offsets from the command line into a single gesture.
fn parse_gesture(args: &[String]) -> Result<Gesture> {
    let mut path = Vec::with_capacity(args.len());
    for arg in args {
        let (dx, dy) = arg
            .split_once(',')
            .with_context(|| format!("expected DX,DY but got `{arg}`"))?;
        let dx: f64 = dx.trim().parse().with_context(|| format!("invalid DX in `{arg}`"))?;
        let dy: f64 = dy.trim().parse().with_context(|| format!("invalid DY in `{arg}`"))?;
        path.push((dx, dy));
    }
    if path.is_empty() {
        bail!("a gesture needs at least one DX,DY offset");
    }
    Ok(Gesture::new("command line", Point::new(150.0, 100.0), &path))
}

fn replay(config: SwipeConfig, gesture: &Gesture) -> Result<()> {
    log::info!("{}", gesture.name);

    let results = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&results);
    let mut controller =
        SwipeController::new(config, move |result: FrameResult| sink.borrow_mut().push(result));
    let mut frame = ConsoleFrame { bounds: CARD };

    let origin = CARD.origin();
    let global = |local: Point| Point::new(origin.x + local.x, origin.y + local.y);
    let press = gesture.start;
    controller.handle_pointer_event(
        &mut frame,
        &PointerEvent::new(PointerEventKind::Down, press, global(press)),
    )?;

    let (last, moves) = gesture
        .path
        .split_last()
        .context("gesture has no pointer positions")?;
    for offset in moves {
        let local = Point::new(press.x + offset.x, press.y + offset.y);
        controller.handle_pointer_event(
            &mut frame,
            &PointerEvent::new(PointerEventKind::Move, local, global(local)),
        )?;
    }

    let end = Point::new(press.x + last.x, press.y + last.y);
    let kind = if gesture.cancelled {
        PointerEventKind::Cancel
    } else {
        PointerEventKind::Up
    };
    let progress = controller.handle_pointer_event(
        &mut frame,
        &PointerEvent::new(kind, end, global(end)),
    )?;
    if controller.is_exiting() {
        controller.animation_finished();
    }

    match results.borrow().first() {
        Some(result) => log::info!(
            "  => {:?} {:?} (progress {:.3})",
            result.end_event(),
            result.direction(),
            progress.unwrap_or_default()
        ),
        None => log::info!("  => no result"),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let gestures = if args.is_empty() {
        builtin_gestures()
    } else {
        vec![parse_gesture(&args)?]
    };

    let config = SwipeConfig::touch_defaults();
    log::info!(
        "card {}x{} in {}x{} container, max tilt {}°, tap threshold {}px",
        CARD.width,
        CARD.height,
        CONTAINER.width,
        CONTAINER.height,
        config.max_rotation_deg(),
        config.minor_movement_threshold()
    );
    for gesture in &gestures {
        replay(config, gesture)?;
    }
    Ok(())
}
