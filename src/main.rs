use std::{
    fs,
    io::{self, BufRead, Write},
};

use calx::{
    config::Config,
    interpreter::{
        session::{ControlSignal, Outcome, Session},
        value::core::Value,
    },
};
use clap::Parser;
use log::{Level, LevelFilter, Log, Metadata, Record};

const PROMPT: &str = "\x1b[1;33m>>\x1b[0m ";
const SEPARATOR: &str = "\x1b[2m────────────\x1b[0m";
const NO_NEWLINE_MARKER: &str = "\x1b[7m%\x1b[0m";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// calx evaluates math expressions with complex numbers, vectors and
/// implicit multiplication.
///
/// Without CONTENTS an interactive prompt is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as the path of a script instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Significant digits used when printing reals. Without it reals print
    /// with as many digits as it takes to read them back unchanged.
    #[arg(short, long)]
    precision: Option<usize>,

    /// Print reals in fixed notation, with PRECISION decimals if given.
    #[arg(long)]
    full_precision: bool,

    /// Print booleans as 1 and 0.
    #[arg(long)]
    bools_as_numbers: bool,

    /// Log how long parsing and evaluation take.
    #[arg(short, long)]
    timing: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,

    contents: Option<String>,
}

/// Writes log records to stderr, errors in red and warnings in yellow.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let color = match record.level() {
            Level::Error => "\x1b[1;31m",
            Level::Warn => "\x1b[1;33m",
            Level::Info | Level::Debug | Level::Trace => "\x1b[2m",
        };
        eprintln!("{color}[{}]\x1b[0m {}", record.level(), record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

fn main() {
    let args = Args::parse();

    // Only fails if a logger was already installed.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(if args.verbose || args.timing { LevelFilter::Debug } else { LevelFilter::Warn });

    let config = Config { precision:        args.precision,
                          full_precision:   args.full_precision,
                          bools_as_numbers: args.bools_as_numbers,
                          timing:           args.timing, };
    let mut session = Session::new(config);

    let Some(contents) = args.contents else {
        if let Err(e) = run_prompt(&mut session) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
                                         eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                                         std::process::exit(1);
                                     })
    } else {
        contents
    };

    if !run_script(&mut session, &script) {
        std::process::exit(1);
    }
}

/// Runs every non-blank line of a script and prints the last value.
///
/// Returns `false` if any statement failed.
fn run_script(session: &mut Session<io::Stdout>, script: &str) -> bool {
    let mut last = None;
    let mut succeeded = true;

    'lines: for line in script.lines().filter(|line| !line.trim().is_empty()) {
        for outcome in session.run(line) {
            match outcome {
                Outcome::Value(Value::Nothing) => {},
                Outcome::Value(value) => last = Some(value),
                Outcome::Control(ControlSignal::ClearScreen) => print!("{CLEAR_SCREEN}"),
                Outcome::Control(ControlSignal::Quit) => break 'lines,
                Outcome::Error(_) => succeeded = false,
            }
        }
    }

    if !session.ended_with_newline() {
        println!();
    }
    if let Some(value) = last
       && let Err(e) = session.print_value(&value)
    {
        log::error!("{e}");
        succeeded = false;
    }

    succeeded
}

fn run_prompt(session: &mut Session<io::Stdout>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("-- calx interactive prompt v{} --", env!("CARGO_PKG_VERSION"));
    println!("Type \x1b[1mexit()\x1b[0m or press \x1b[1mCtrl+D\x1b[0m to quit.\n");

    let mut lines = stdin.lock().lines();
    loop {
        print!("{PROMPT}");
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            return Ok(());
        };
        if line.trim().is_empty() {
            continue;
        }

        if !run_line(session, &line, &mut stdout)? {
            return Ok(());
        }
    }
}

/// Runs one prompt line and reports its result on `terminal`.
///
/// The screen is cleared as soon as a statement asks for it. The last value
/// of the line is shown even when a later statement failed. Afterwards the
/// arena is released if no binding needs it.
///
/// Returns `false` once a statement asked to quit.
fn run_line<W: Write>(session: &mut Session<W>, line: &str, terminal: &mut impl Write) -> io::Result<bool> {
    let mut write_error = None;
    let outcomes = session.run_with(line, |outcome| {
                              if matches!(outcome, Outcome::Control(ControlSignal::ClearScreen))
                                 && let Err(e) = write!(terminal, "{CLEAR_SCREEN}").and_then(|()| terminal.flush())
                              {
                                  write_error.get_or_insert(e);
                              }
                          });
    if let Some(e) = write_error {
        return Err(e);
    }

    if !session.ended_with_newline() {
        writeln!(terminal, "{NO_NEWLINE_MARKER}")?;
        session.reset_newline();
    }

    if let Some(value) = Outcome::last_value(&outcomes) {
        match session.render(value) {
            Ok(text) => writeln!(terminal, "{SEPARATOR}\n{text}\n{SEPARATOR}")?,
            Err(e) => log::error!("{e}"),
        }
    }
    terminal.flush()?;

    if session.release_if_unreferenced() {
        log::debug!("released expressions of '{line}'");
    }

    Ok(!outcomes.iter().any(|outcome| matches!(outcome, Outcome::Control(ControlSignal::Quit))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session<Vec<u8>> {
        Session::with_output(Config::default(), Vec::new())
    }

    fn prompt(session: &mut Session<Vec<u8>>, line: &str) -> (String, bool) {
        let mut terminal = Vec::new();
        let keep_going = run_line(session, line, &mut terminal).unwrap();
        (String::from_utf8(terminal).unwrap(), keep_going)
    }

    fn shown(value: &str) -> String {
        format!("{SEPARATOR}\n{value}\n{SEPARATOR}\n")
    }

    #[test]
    fn value_before_a_failure_is_shown() {
        let mut session = session();
        assert_eq!(prompt(&mut session, "1 + 1; zz"), (shown("2"), true));
        assert_eq!(prompt(&mut session, "zz"), (String::new(), true));
    }

    #[test]
    fn clear_screen_is_not_lost() {
        let mut session = session();
        assert_eq!(prompt(&mut session, "clear(); 2"), (format!("{CLEAR_SCREEN}{}", shown("2")), true));
        assert_eq!(prompt(&mut session, "clear()"), (CLEAR_SCREEN.to_string(), true));
    }

    #[test]
    fn quit_shows_earlier_values_then_stops() {
        let mut session = session();
        assert_eq!(prompt(&mut session, "3; quit(); 4"), (shown("3"), false));
    }

    #[test]
    fn missing_newline_is_marked() {
        let mut session = session();
        assert_eq!(prompt(&mut session, "print(5)"), (format!("{NO_NEWLINE_MARKER}\n"), true));
        assert!(session.ended_with_newline());
        assert_eq!(session.output(), b"5");
    }

    #[test]
    fn arena_is_released_while_nothing_refers_to_it() {
        let mut session = session();
        prompt(&mut session, "1 + 2 * 3");
        assert!(session.arena().is_empty());

        prompt(&mut session, "let(v, [1, 2])");
        assert!(!session.arena().is_empty());
        assert_eq!(prompt(&mut session, "v"), (shown("[1, 2]"), true));
    }
}
