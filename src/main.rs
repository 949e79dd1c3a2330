use std::{error::Error, thread};

use life::Generation;
use log::info;

use crate::config::Config;

mod config;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let config = Config::from_env();
    info!("running {config:?}");

    let mut generation = Generation::with_rng(config.size, &mut rand::thread_rng())?;
    println!("{}", generation.render(config.format));
    for _ in 0..config.iterations {
        thread::sleep(config.delay);
        generation.next();
        println!("\n{}", generation.render(config.format));
    }
    info!(
        "stopped after {} generations, population {}",
        generation.age(),
        generation.board().population()
    );
    Ok(())
}
