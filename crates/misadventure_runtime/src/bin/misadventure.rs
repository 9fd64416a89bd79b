//! A small demo adventure.

use std::env;
use std::process::ExitCode;

use misadventure_debug::ObservabilityConfig;
use misadventure_foundation::{Arguments, Error, Result};
use misadventure_parser::{Dispatcher, Handler, Invocation};
use misadventure_runtime::{Repl, ReplConfig, say_with_width, terminal_width};
use misadventure_world::{Bag, Item, Room, RoomId, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const NO_PARAMS: [&str; 0] = [];

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    show_help: bool,
    show_version: bool,
    no_help: bool,
    no_banner: bool,
    trace: bool,
    trace_json: bool,
    width: Option<usize>,
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> std::result::Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--no-help" => config.no_help = true,
            "--no-banner" => config.no_banner = true,
            "--trace" => config.trace = true,
            "--trace-json" => {
                config.trace = true;
                config.trace_json = true;
            }
            "--width" => {
                i += 1;
                let value = args.get(i).ok_or("--width requires a value")?;
                config.width = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --width value: {value}"))?,
                );
            }
            "--seed" => {
                i += 1;
                let value = args.get(i).ok_or("--seed requires a value")?;
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {value}"))?,
                );
            }
            arg => return Err(format!("unknown option: {arg}").into()),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("misadventure {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let width = cli.width.unwrap_or_else(terminal_width);
    let rng = cli
        .seed
        .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
    let game = Game::new(width, rng)?;
    let mut dispatcher = commands()?;
    dispatcher.set_context(Some(game.context()))?;

    let mut config = ReplConfig::new().with_width(width).with_help(!cli.no_help);
    if !cli.no_banner {
        config = config.with_banner(BANNER);
    }

    let tracer = ObservabilityConfig::development()
        .with_enabled(cli.trace)
        .with_json_output(cli.trace_json)
        .to_tracer();

    game.look()?;
    println!();

    let mut repl = Repl::new(dispatcher, game)?
        .with_config(config)
        .with_tracer(tracer);
    repl.run()?;
    Ok(())
}

const BANNER: &str = "
    MISADVENTURE

    A very small house. Type 'help' (or '?') for the commands you can
    give, and 'quit' when you have had enough.
";

// =============================================================================
// Game State
// =============================================================================

struct Game {
    world: World,
    here: RoomId,
    contexts: Vec<&'static str>,
    inventory: Bag,
    lights_on: bool,
    width: usize,
    rng: ChaCha8Rng,
}

impl Game {
    fn new(width: usize, rng: ChaCha8Rng) -> Result<Self> {
        let mut world = World::new();
        world.directions_mut().add("down", "up")?;

        let mut livingroom = Room::new("You are in your livingroom.");
        livingroom.add_state("lights_on", "You are in your livingroom. The lights are on.");
        livingroom.add_state(
            "lights_off",
            "
            You are in your livingroom. It is pitch black.

            You can't see a thing!
            ",
        );
        livingroom.set_state("lights_on")?;

        let kitchen = Room::new(
            "
            You are in the kitchen. Something has been left to go bad in
            here, and the smell follows you around.
            ",
        )
        .with_items(
            [
                Item::new("knife").with_aliases(["bread knife"]),
                Item::new("apple").with_aliases(["green apple"]),
            ]
            .into_iter()
            .collect(),
        );

        let cellar = Room::new(
            "
            You are in a damp cellar. Boxes of junk are piled up against
            every wall; you could rummage through them.
            ",
        );

        let livingroom = world.add_room(livingroom);
        let kitchen = world.add_room(kitchen);
        let cellar = world.add_room(cellar);
        world.connect(livingroom, "north", kitchen)?;
        world.connect(kitchen, "down", cellar)?;

        Ok(Self {
            world,
            here: livingroom,
            contexts: vec!["house.livingroom", "house.kitchen", "house.cellar"],
            inventory: Bag::new(),
            lights_on: true,
            width,
            rng,
        })
    }

    fn context(&self) -> &'static str {
        self.contexts
            .get(self.here.index())
            .copied()
            .unwrap_or("house")
    }

    fn say(&self, text: &str) {
        say_with_width(text, self.width);
    }

    fn look(&self) -> Result<()> {
        let room = self.world.room(self.here)?;
        self.say(room.description());
        if room.state() == Some("lights_off") {
            return Ok(());
        }
        if !room.items.is_empty() {
            let items: Vec<_> = room.items.iter().map(Item::name).collect();
            self.say(&format!("You can see: {}.", items.join(", ")));
        }
        let exits = self.world.exits(self.here)?;
        if !exits.is_empty() {
            self.say(&format!("Exits: {}.", exits.join(", ")));
        }
        Ok(())
    }
}

// =============================================================================
// Commands
// =============================================================================

fn commands() -> Result<Dispatcher<Game>> {
    let mut d: Dispatcher<Game> = Dispatcher::new();

    d.when("say SOMETHING", Handler::new("say", ["something"], say))?;
    d.when(
        "look",
        Handler::new("look", NO_PARAMS, |inv: &mut Invocation<'_, Game>| {
            inv.state.look()
        }),
    )?;
    d.when("go DIRECTION", Handler::new("go", ["direction"], go))?;
    for direction in ["north", "south", "east", "west", "up", "down"] {
        d.register(
            direction,
            None,
            Arguments::new().with("direction", direction),
            Handler::new("go", ["direction"], go),
        )?;
    }
    d.when("take ITEM", Handler::new("take", ["item"], take))?;
    d.when("drop ITEM", Handler::new("drop", ["item"], drop_item))?;
    d.when("inventory", Handler::new("inventory", NO_PARAMS, inventory))?;
    d.when_in(
        "turn THING STATE",
        "house.livingroom",
        Handler::new("turn", ["thing", "state"], turn),
    )?;
    d.when_in(
        "rummage",
        "house.cellar",
        Handler::new("rummage", NO_PARAMS, rummage),
    )?;

    Ok(d)
}

fn say(inv: &mut Invocation<'_, Game>) -> Result<()> {
    let something = inv.text("something")?;
    inv.state.say(&format!("You say, \"{something}\"."));
    Ok(())
}

fn go(inv: &mut Invocation<'_, Game>) -> Result<()> {
    let direction = inv.text("direction")?.to_string();
    let game = &mut *inv.state;
    if !game.world.directions().contains(&direction) {
        game.say(&format!("{direction} is not a direction I know."));
        return Ok(());
    }
    let Some(next) = game.world.exit(game.here, &direction)? else {
        game.say("You can't go that way.");
        return Ok(());
    };
    game.here = next;
    game.look()?;
    let context = game.context();
    inv.set_context(Some(context))
}

fn take(inv: &mut Invocation<'_, Game>) -> Result<()> {
    let name = inv.text("item")?.to_string();
    let game = &mut *inv.state;
    let here = game.here;
    match game.world.room_mut(here)?.items.take(&name) {
        Some(item) => {
            game.say(&format!("You take the {item}."));
            game.inventory.insert(item);
        }
        None => game.say(&format!("There is no {name} here.")),
    }
    Ok(())
}

fn drop_item(inv: &mut Invocation<'_, Game>) -> Result<()> {
    let name = inv.text("item")?.to_string();
    let game = &mut *inv.state;
    let Some(item) = game.inventory.take(&name) else {
        game.say(&format!("You don't have a {name}."));
        return Ok(());
    };
    game.say(&format!("You drop the {item}."));
    let here = game.here;
    game.world.room_mut(here)?.items.insert(item);
    Ok(())
}

fn inventory(inv: &mut Invocation<'_, Game>) -> Result<()> {
    let game = &*inv.state;
    if game.inventory.is_empty() {
        game.say("You have nothing.");
    } else {
        let items: Vec<_> = game.inventory.iter().map(Item::name).collect();
        game.say(&format!("You have: {}.", items.join(", ")));
    }
    Ok(())
}

fn turn(inv: &mut Invocation<'_, Game>) -> Result<()> {
    let thing = inv.text("thing")?.to_string();
    let state = inv.text("state")?.to_string();
    let game = &mut *inv.state;
    let here = game.here;

    if thing != "light" && thing != "lights" {
        game.say(&format!("I don't know what {thing} is!"));
        return game.look();
    }
    match (game.lights_on, state.as_str()) {
        (true, "on") => game.say("The lights are already on!"),
        (false, "off") => game.say("The lights are already off!"),
        (true, "off") => {
            game.world.room_mut(here)?.set_state("lights_off")?;
            game.lights_on = false;
            game.say("You turned off the lights.");
        }
        (false, "on") => {
            game.world.room_mut(here)?.set_state("lights_on")?;
            game.lights_on = true;
            game.say("You turn the lights back on, much better!");
        }
        _ => game.say("What?"),
    }
    game.look()
}

fn rummage(inv: &mut Invocation<'_, Game>) -> Result<()> {
    let game = &mut *inv.state;
    if game.inventory.len() >= 6 {
        return Err(Error::handler("your arms are too full to rummage"));
    }
    let mut junk: Bag = [
        Item::new("rusty key").with_aliases(["key"]),
        Item::new("old boot").with_aliases(["boot"]),
        Item::new("tin can").with_aliases(["can"]),
        Item::new("candle"),
    ]
    .into_iter()
    .filter(|item| !game.inventory.contains(item))
    .collect();

    match junk.take_random(&mut game.rng) {
        Some(item) => {
            game.say(&format!("After some digging you find a {item}."));
            game.inventory.insert(item);
        }
        None => game.say("There is nothing else worth having down here."),
    }
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mmisadventure\x1b[0m - A very small text adventure

\x1b[1mUSAGE:\x1b[0m
    misadventure [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --no-help          Disable the built-in 'help' command
    --no-banner        Skip the welcome banner
    --width N          Wrap text to N columns instead of the terminal width
    --seed N           Seed the random number generator

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace            Trace how each command is dispatched
    --trace-json       Trace as JSON lines

\x1b[1mIN THE GAME:\x1b[0m
    help, ?            List the commands you can give here
    quit               Leave the game
    Ctrl+D             Leave the game"
    );
}
