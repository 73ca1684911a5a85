use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hecs::World;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use stance::components::{Character, Position, PHYSICS_DT};
use stance::controllers::{Controller, ControllerKind};
use stance::engine::input::InputState;
use stance::engine::script::InputScript;
use stance::scene::test_scene::load_test_scene;
use stance::systems::fixed_update;
use stance::ui::DebugHud;

/// Visits every stance: run, stop, jump and steer, dive into a crouch, stand
/// back up, then duck out of a run.
const DEMO_SCRIPT: &str = "\
# frames  held actions
10
30 right
10
1  jump
50 left
40
1  jump
10
60 duck
10
20 left
10 left duck
10
";

#[derive(Parser)]
#[command(name = "stance", about = "Headless platformer state-machine demo")]
struct Args {
    /// Input script to replay (default: built-in tour of every state)
    #[arg(long)]
    script: Option<PathBuf>,

    /// Which controller drives the player
    #[arg(long, value_enum, default_value_t = ControllerKind::Machine)]
    controller: ControllerKind,

    /// Print the status line every physics step
    #[arg(long)]
    hud: bool,

    /// Log every transition, not just state changes per frame
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "stance=debug" } else { "stance=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let script = match &args.script {
        Some(path) => InputScript::load(path)
            .with_context(|| format!("loading input script {}", path.display()))?,
        None => InputScript::parse(DEMO_SCRIPT)?,
    };

    let mut world = World::new();
    let player = load_test_scene(&mut world, args.controller)?;

    let mut input = InputState::new();
    let mut hud = DebugHud::new(args.hud);

    info!(
        controller = ?args.controller,
        frames = script.total_frames(),
        "replaying input script"
    );

    for (frame, held) in script.frames().enumerate() {
        input.update(held.iter().copied());
        fixed_update(&mut world, &input.snapshot(), PHYSICS_DT);

        let label = world.get::<&Controller>(player)?.label();
        if hud.update(label) {
            info!(frame, state = label, "state");
        }

        if hud.is_visible() {
            let position = world.get::<&Position>(player)?.0;
            let character = world.get::<&Character>(player)?;
            println!("{}", hud.line(frame as u64, position, &character));
        }
    }

    info!(changes = hud.changes(), "done");
    Ok(())
}
