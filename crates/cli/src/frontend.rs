use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand, error::ErrorKind};
use engine::{BuildOptions, build};
use filters::{CommandPolicy, FileCommand, FilterRule, FilterSet};
use tracing_subscriber::EnvFilter;
use walk::Folder;

/// Successful run.
const EXIT_OK: i32 = 0;
/// Argument or pattern errors.
const EXIT_USAGE: i32 = 1;
/// The build itself failed.
const EXIT_BUILD: i32 = 2;

/// Parses `arguments`, runs the requested build, and reports on the provided
/// streams. Returns the process exit code.
///
/// The first argument is the program name, as in [`std::env::args_os`].
pub fn run<I, S, O, E>(arguments: I, stdout: &mut O, stderr: &mut E) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let matches = match clap_command().try_get_matches_from(arguments) {
        Ok(matches) => matches,
        Err(error) => return report_parse_outcome(&error, stdout, stderr),
    };

    let args = match ParsedArgs::from_matches(&matches) {
        Ok(args) => args,
        Err(message) => {
            let _ = writeln!(stderr, "mirrorgen: {message}");
            return EXIT_USAGE;
        }
    };

    init_tracing(args.verbose);

    let mut policy = CommandPolicy::new(args.filters, args.command)
        .skip_name(args.script_name.as_str());
    if let Some(base) = args.output.file_name() {
        policy = policy.skip_name(base);
    }

    let options = BuildOptions::new()
        .write(args.write)
        .verbose(args.verbose > 0);
    match build(&args.source, &args.output, &args.script_name, &policy, options) {
        Ok(folders) => {
            report(&folders, args.write, stdout);
            EXIT_OK
        }
        Err(error) => {
            let _ = writeln!(stderr, "mirrorgen: {error}");
            EXIT_BUILD
        }
    }
}

struct ParsedArgs {
    source: PathBuf,
    output: PathBuf,
    script_name: String,
    filters: FilterSet,
    command: FileCommand,
    write: bool,
    verbose: u8,
}

impl ParsedArgs {
    fn from_matches(matches: &ArgMatches) -> Result<Self, String> {
        let filters = FilterSet::from_rules(ordered_rules(matches))
            .map_err(|error| error.to_string())?;
        let command = if matches.get_flag("move") {
            FileCommand::Move
        } else {
            FileCommand::Copy
        };

        Ok(Self {
            source: matches
                .get_one::<PathBuf>("source")
                .expect("SOURCE is required")
                .clone(),
            output: matches
                .get_one::<PathBuf>("output")
                .expect("--output has a default")
                .clone(),
            script_name: matches
                .get_one::<String>("script-name")
                .expect("--script-name has a default")
                .clone(),
            filters,
            command,
            write: matches.get_flag("write"),
            verbose: matches.get_count("verbose"),
        })
    }
}

/// Re-interleaves `--include` and `--exclude` occurrences by their position
/// on the command line, so the policy sees them in the order the user wrote
/// them.
fn ordered_rules(matches: &ArgMatches) -> Vec<FilterRule> {
    let mut rules: Vec<(usize, FilterRule)> = Vec::new();
    if let (Some(indices), Some(values)) = (
        matches.indices_of("include"),
        matches.get_many::<String>("include"),
    ) {
        rules.extend(
            indices
                .zip(values)
                .map(|(index, pattern)| (index, FilterRule::include(pattern))),
        );
    }
    if let (Some(indices), Some(values)) = (
        matches.indices_of("exclude"),
        matches.get_many::<String>("exclude"),
    ) {
        rules.extend(
            indices
                .zip(values)
                .map(|(index, pattern)| (index, FilterRule::exclude(pattern))),
        );
    }
    rules.sort_by_key(|(index, _)| *index);
    rules.into_iter().map(|(_, rule)| rule).collect()
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> ClapCommand {
    ClapCommand::new("mirrorgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates per-folder command scripts that mirror a filtered directory tree.")
        .arg(
            Arg::new("source")
                .value_name("SOURCE")
                .help("Directory tree to scan.")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("DIR")
                .help("Output root for the mirrored tree; relative paths resolve against SOURCE.")
                .default_value("gen")
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("script-name")
                .long("script-name")
                .value_name("NAME")
                .help("File name used for every generated script.")
                .default_value("run")
                .num_args(1),
        )
        .arg(
            Arg::new("include")
                .long("include")
                .short('i')
                .value_name("GLOB")
                .help("Keep entries whose name matches GLOB; ordered with --exclude, first match wins.")
                .action(ArgAction::Append)
                .num_args(1),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .short('x')
                .value_name("GLOB")
                .help("Drop entries whose name matches GLOB; excluded folders are pruned whole.")
                .action(ArgAction::Append)
                .num_args(1),
        )
        .arg(
            Arg::new("move")
                .long("move")
                .help("Emit mv commands instead of cp.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("write")
                .long("write")
                .short('w')
                .help("Write the scripts and create the mirrored folder tree.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase progress output; repeat for more detail.")
                .action(ArgAction::Count),
        )
}

fn report_parse_outcome<O, E>(error: &clap::Error, stdout: &mut O, stderr: &mut E) -> i32
where
    O: Write,
    E: Write,
{
    if matches!(
        error.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    ) {
        let _ = write!(stdout, "{error}");
        EXIT_OK
    } else {
        let _ = write!(stderr, "{error}");
        EXIT_USAGE
    }
}

fn report<O: Write>(folders: &[Folder], wrote: bool, stdout: &mut O) {
    if wrote {
        let _ = writeln!(
            stdout,
            "wrote {} scripts and mirrored {} folders",
            folders.len(),
            folders.len()
        );
        return;
    }
    for folder in folders {
        let _ = writeln!(
            stdout,
            "{}: {} files, {} subfolders",
            folder.source.display(),
            folder.files.len(),
            folder.children.len()
        );
    }
    let _ = writeln!(
        stdout,
        "scanned {} folders (dry run; pass --write to persist)",
        folders.len()
    );
}

/// Installs the process-wide subscriber on first use; later calls keep the
/// existing one.
fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
