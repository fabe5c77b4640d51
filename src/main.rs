use tunnel_runner::cli::DemoArgs;
use tunnel_runner::config::DemoConfig;
use tunnel_runner::input::{PadButtons, PadSticks};
use tunnel_runner::time::Time;
use tunnel_runner::{Actor, StubRenderer};

const DEFAULT_CATALOG: &str = "fixtures/clips.json";
const DEFAULT_TICKS: u32 = 240;

/// Scripted pad input for one tick of the headless demo: stand, walk, run,
/// jump mid-run, then stop.
fn scripted_input(tick: u32, ticks: u32) -> (PadButtons, PadSticks) {
    let phase = tick * 5 / ticks.max(1);
    let mut buttons = PadButtons::default();
    let mut sticks = PadSticks::default();
    match phase {
        0 => {}
        1 => sticks.stick_y = 90,
        2 => {
            sticks.stick_y = 110;
            buttons.z = true;
        }
        3 => {
            sticks.stick_y = 110;
            buttons.z = true;
            buttons.a = true;
        }
        _ => {}
    }
    (buttons, sticks)
}

fn run(args: DemoArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    let catalog_path = args.catalog.as_deref().unwrap_or(DEFAULT_CATALOG);
    let ticks = args.ticks.unwrap_or(DEFAULT_TICKS);

    let mut renderer = StubRenderer::from_catalog_file(catalog_path)?;
    let mut actor = Actor::spawn(config, &mut renderer)?;
    let mut time = Time::new();

    for tick in 0..ticks {
        let (buttons, sticks) = scripted_input(tick, ticks);
        time.tick();
        actor.tick(buttons, sticks, false, time.delta_seconds(), &mut renderer);
        for event in actor.drain_events() {
            log::info!("tick {tick}: {event}");
        }
    }

    let position = actor.locomotion.position;
    let state = actor.selector.state();
    log::info!(
        "demo finished after {ticks} ticks: position=({:.1}, {:.1}, {:.1}) anim={state:?}",
        position.x,
        position.y,
        position.z
    );
    log::info!("camera eye={:?} target={:?}", actor.camera_position(), actor.camera_target());

    actor.despawn(&mut renderer);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = match DemoArgs::parse_from_env() {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("[cli] {err}");
            std::process::exit(2);
        }
    };
    if let Err(err) = run(args) {
        eprintln!("Demo error: {err:?}");
        std::process::exit(1);
    }
}
