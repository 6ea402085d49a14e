// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{crate_version, value_t, App, Arg, ArgMatches};
use failure::{format_err, Error};
use log::{info, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use seamnarrow::picture::{from_rgb_image, to_rgb_image};
use seamnarrow::{calculate_energy, energy_to_image, reduce_width_with, CarveOptions};
use std::process;

fn init_logging(verbosity: u64) -> Result<(), Error> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l:<5} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| format_err!("logging configuration: {}", e))?;
    log4rs::init_config(config).map_err(|e| format_err!("logging: {}", e))?;
    Ok(())
}

fn options(matches: &ArgMatches) -> Result<CarveOptions, Error> {
    let mut options = CarveOptions::default();
    if let Some(update) = matches.value_of("update") {
        options.energy_update = update.parse().map_err(|e: String| format_err!("{}", e))?;
    }
    if let Some(edge) = matches.value_of("right-edge") {
        options.right_edge = edge.parse().map_err(|e: String| format_err!("{}", e))?;
    }
    Ok(options)
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let target = value_t!(matches, "width", u32)?;
    let options = options(matches)?;
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let picture = from_rgb_image(&image::open(input)?.to_rgb())?;
    info!("read {} ({}x{})", input, picture.width(), picture.height());

    if let Some(energy_path) = matches.value_of("energy") {
        energy_to_image(&calculate_energy(&picture)).save(energy_path)?;
        info!("wrote energy map to {}", energy_path);
    }

    let mut report = |done: u32, total: u32| {
        let step = (total / 10).max(1);
        if done % step == 0 || done == total {
            info!("{}/{} seams removed", done, total);
        }
    };
    let narrowed = reduce_width_with(&picture, target, options, &mut report)?;
    to_rgb_image(&narrowed).save(output)?;
    info!("wrote {} ({}x{})", output, narrowed.width(), narrowed.height());
    Ok(())
}

fn main() {
    let matches = App::new("seamnarrow")
        .version(crate_version!())
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware narrowing of images by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to narrow")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the narrowed image; the format follows the extension")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .help("Target width in pixels")
                .short("w")
                .long("width")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("energy")
                .help("Also write the initial energy map, as greyscale, to this file")
                .long("energy")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("update")
                .help("How energies next to a removed seam are refreshed")
                .long("update")
                .takes_value(true)
                .possible_values(&["overwrite", "accumulate"]),
        )
        .arg(
            Arg::with_name("right-edge")
                .help("Whether seams may step diagonally into the last column")
                .long("right-edge")
                .takes_value(true)
                .possible_values(&["excluded", "included"]),
        )
        .arg(
            Arg::with_name("verbose")
                .help("Log more; repeat for more detail")
                .short("v")
                .multiple(true),
        )
        .get_matches();

    if let Err(e) = init_logging(matches.occurrences_of("verbose")) {
        eprintln!("seamnarrow: {}", e);
    }
    if let Err(e) = run(&matches) {
        eprintln!("seamnarrow: {}", e);
        process::exit(1);
    }
}
