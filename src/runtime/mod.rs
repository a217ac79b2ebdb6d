use std::env;
use std::path::PathBuf;

use log::error;

use playsim::scenario;

mod logging;
mod settings;

/// Run every scenario found under the paths given on the command line
/// (default: the current directory) and print their transcripts.
///
/// Returns an error when any scenario could not be loaded or did not meet
/// its expectations.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    logging::init(&settings.log);

    let mut roots: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();
    if roots.is_empty() {
        roots.push(env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    }

    let mut total = 0usize;
    let mut failed = 0usize;
    for root in &roots {
        let files = match scenario::discover(root, &settings.scenarios) {
            Ok(files) => files,
            Err(e) => {
                error!("{e}");
                failed += 1;
                continue;
            }
        };

        for file in files {
            total += 1;
            match scenario::run_file(&file, &settings) {
                Ok(transcript) => println!("{transcript}"),
                Err(e) => {
                    error!("{}: {e}", file.display());
                    failed += 1;
                }
            }
        }
    }

    if failed > 0 {
        return Err(format!("{failed} of {total} scenarios failed").into());
    }
    println!("{total} scenarios passed");
    Ok(())
}
