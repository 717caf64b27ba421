use clap::{Args, Parser, Subcommand};
use descent::{analyze_source, run_selftest, EvalReport};
use descent_parser::ParserConfig;
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "descent",
    version,
    about = "Evaluate integer arithmetic expressions",
    long_about = "descent parses and evaluates integer expressions over + - * / ^ and parentheses.\n\n\
        Every expression is parsed twice: once folding straight to a value and once\n\
        building a tree, which is rendered fully parenthesized.\n\n\
        EXAMPLES:\n\
        \n  descent eval '2^2^3'                 Evaluate one expression\n\
        \n  descent eval --json '1+2' '3*4'      Print a JSON report per expression\n\
        \n  descent test                         Run the built-in self test\n\
        \n  descent repl                         Start interactive REPL"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Maximum nesting depth of groups and exponent chains
    #[arg(long, global = true, value_name = "N", default_value_t = ParserConfig::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate expressions given on the command line
    #[command(about = "Evaluate expressions and print their value and tree")]
    Eval(EvalArgs),

    /// Run the built-in self test (the default)
    #[command(about = "Run the built-in self test suite")]
    Test,

    /// Start an interactive Read-Eval-Print Loop
    #[command(
        about = "Start an interactive REPL session",
        long_about = "Start an interactive Read-Eval-Print Loop.\n\n\
            Each line is evaluated as one expression.\n\n\
            Commands:\n\
            \n  :help   Show available REPL commands\n\
            \n  :quit   Exit the REPL (also :q, :exit)"
    )]
    Repl,
}

#[derive(Debug, Args, Clone)]
struct EvalArgs {
    /// Expressions to evaluate
    #[arg(value_name = "EXPR", required = true, allow_hyphen_values = true)]
    expressions: Vec<String>,

    /// Print one JSON object per expression
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    // RUST_LOG wins over -v when set
    builder.parse_default_env();
    let _ = builder.try_init();
}

struct ReplSession {
    config: ParserConfig,
}

impl ReplSession {
    fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    fn prompt(&self) -> &'static str {
        "descent> "
    }

    fn handle_command(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        if trimmed == ":help" {
            return (
                vec![
                    "commands: :help, :quit".to_string(),
                    "note: enter an expression such as 3^(9-7)-8".to_string(),
                ],
                false,
            );
        }

        if trimmed == ":q" || trimmed == ":quit" || trimmed == ":exit" {
            return (Vec::new(), true);
        }

        (vec![format!("error: unknown command '{trimmed}'")], false)
    }

    /// Returns the lines to print and whether to leave the loop.
    fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        if trimmed.starts_with(':') {
            return self.handle_command(trimmed);
        }

        if trimmed.is_empty() {
            return (Vec::new(), false);
        }

        (analyze_source(trimmed, self.config).lines(), false)
    }
}

fn run_repl(config: ParserConfig) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;
    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    let mut session = ReplSession::new(config);
    loop {
        let prompt = session.prompt();
        match rl.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}

fn print_report(report: &EvalReport, json: bool) {
    if json {
        match serde_json::to_string(report) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("error: failed to serialize report: {e}"),
        }
        return;
    }
    if report.is_ok() {
        for line in report.lines() {
            println!("{line}");
        }
    } else {
        for line in report.lines() {
            eprintln!("{line}");
        }
    }
}

fn run_eval(args: &EvalArgs, config: ParserConfig) -> i32 {
    let mut failed = 0;
    for source in &args.expressions {
        let report = analyze_source(source, config);
        if !report.is_ok() {
            failed += 1;
        }
        print_report(&report, args.json);
    }
    log::info!(
        "evaluated {} expression(s), {failed} failed",
        args.expressions.len()
    );
    if failed > 0 {
        1
    } else {
        0
    }
}

fn run_test(config: ParserConfig) -> i32 {
    let reports = run_selftest(config);
    let passed = reports.iter().filter(|r| r.passed()).count();
    for report in &reports {
        println!("{report}\n");
    }
    println!("{passed}/{} cases passed", reports.len());
    if passed == reports.len() {
        println!("all tests passed");
        0
    } else {
        println!("some tests failed");
        1
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ParserConfig {
        max_depth: cli.max_depth,
    };
    log::debug!("parser config: {config:?}");

    match cli.command.unwrap_or(Command::Test) {
        Command::Eval(args) => run_eval(&args, config),
        Command::Test => run_test(config),
        Command::Repl => run_repl(config),
    }
}

fn main() {
    std::process::exit(run_cli());
}
