use std::{
    fs::File,
    io::{stdout, BufWriter, Read, Write},
    path::Path,
};

use tracing::{info, warn};

use crate::{
    common::{error::AppError, intent::Intent},
    config::{self, Config},
    domain::ledger::{Ledger, SeedAccount},
    io::{reader, writer},
    session::controller::Session,
};

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let config = Config::from_args(args)?;

    let seeds = match &config.seeds_path {
        Some(path) => load_seeds_from(path)?,
        None => config::default_seeds(),
    };
    let mut ledger = Ledger::with_seeds(seeds).map_err(AppError::Seed)?;
    info!(accounts = ledger.len(), "ledger seeded");

    let mut script = csv_reader(File::open(&config.script_path)?);
    let mut session = Session::new();

    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_session(
        &mut ledger,
        &mut session,
        reader::read_script(&mut script),
        &mut out,
    )?;

    // After the script, dump the ledger and the history of whoever is still logged in
    writeln!(out)?;
    writer::write_accounts(&mut out, ledger.accounts())?;
    if let Some(view) = session.view(&ledger) {
        writeln!(out)?;
        writer::write_history(&mut out, &view.history)?;
    }
    out.flush()?;

    Ok(())
}

/// Feeds parsed intents through the session and writes one message line per
/// intent. Rejected intents are reported and the run continues; a malformed
/// script row stops it.
pub fn run_session<I, W>(
    ledger: &mut Ledger,
    session: &mut Session,
    intents: I,
    mut out: W,
) -> Result<(), AppError>
where
    I: IntoIterator<Item = Result<Intent, String>>,
    W: Write,
{
    for (row, intent) in intents.into_iter().enumerate() {
        let intent = intent.map_err(|e| AppError::Parse(format!("script row {}: {e}", row + 1)))?;
        match session.process(ledger, intent) {
            Ok(outcome) => writeln!(out, "{}", outcome.message())?,
            Err(err) => {
                warn!(%err, "intent rejected");
                writeln!(out, "{}", err.user_message())?;
            }
        }
    }
    Ok(())
}

pub fn load_seeds<R: Read>(input: R) -> Result<Vec<SeedAccount>, AppError> {
    let mut rdr = csv_reader(input);
    reader::read_seeds(&mut rdr)
        .map(|seed| seed.map_err(AppError::Parse))
        .collect()
}

pub fn load_seeds_from(path: &Path) -> Result<Vec<SeedAccount>, AppError> {
    load_seeds(File::open(path)?)
}

pub fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input)
}
