//! Entry point.

use structopt::StructOpt;

use ec_sensors::logging::Log;
use ec_sensors::opts::Opts;
use ec_sensors::prelude::*;
use ec_sensors::{logging, sensors, settings};

/// Collects the entities the way a host platform would.
#[derive(Default)]
struct Registry {
    entities: Vec<Box<dyn Entity>>,
}

impl AddEntities for Registry {
    fn add_entities(&mut self, entities: Vec<Box<dyn Entity>>) {
        debug!("Adding {} entities…", entities.len());
        self.entities.extend(entities);
    }
}

fn main() -> Result {
    let opts: Opts = Opts::from_args();
    logging::init(&opts)?;

    info!("Reading settings…");
    let settings = settings::read(&opts.settings).log_load("settings", &opts.settings)?;
    debug!("Settings: {:?}", &settings);

    info!("Reading the snapshot…");
    let coordinator = Arc::new(Coordinator::new(
        Snapshot::read(&opts.snapshot).log_load("snapshot", &opts.snapshot)?,
    ));

    let unit_system = if opts.imperial {
        UnitSystem::Imperial
    } else {
        settings.unit_system
    };
    let mut registry = Registry::default();
    sensors::setup(&coordinator, &Arc::new(settings), unit_system, &mut registry);
    info!("{} sensors are set up.", registry.entities.len());

    let states: Vec<EntityState> = registry
        .entities
        .iter()
        .map(|entity| EntityState::of(entity.as_ref()))
        .collect();
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&states)?);
    } else {
        for state in &states {
            println!("{}: {}", state.name, state.display_state());
            for (key, value) in state.attributes.iter().flatten() {
                println!("    {}: {}", key, value);
            }
        }
    }

    Ok(())
}
