//! Shared Config CLI
//!
//! Entry point for the `shared-config` command-line tool.

use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value};
use shared_config::config::DEFAULT_TASK_FILE;
use shared_config::logging::{default_directive, init_tracing};
use shared_config::{
    apply_mask, merge_all, process, resolve_mask, write_output, DestinationSpec, Diagnostics,
    FsReader, MaskSource, Options, Output, SourceReader, Task, TaskError,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "shared-config")]
#[command(about = "Share one config tree between style sheets and scripts", version)]
struct Cli {
    /// Log debug output
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run targets from a task file
    Run {
        /// Task file (default: shared-config.toml)
        #[arg(long, short = 't')]
        task: Option<PathBuf>,

        /// Targets to run (default: all)
        targets: Vec<String>,

        #[command(flatten)]
        options: OptionFlags,

        /// Exit non-zero when any error-level diagnostic is reported
        #[arg(long)]
        strict: bool,

        /// Print destinations instead of writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Convert source files into destinations directly
    Convert {
        /// Source files, merged in order
        #[arg(long, required = true, num_args = 1..)]
        src: Vec<PathBuf>,

        /// Destination files; the extension picks the output format
        #[arg(long, required = true, num_args = 1..)]
        dest: Vec<PathBuf>,

        #[command(flatten)]
        options: OptionFlags,

        /// Exit non-zero when any error-level diagnostic is reported
        #[arg(long)]
        strict: bool,

        /// Print destinations instead of writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the merged and masked tree as JSON
    Mask {
        /// Source files, merged in order
        #[arg(long, required = true, num_args = 1..)]
        src: Vec<PathBuf>,

        /// Mask file
        #[arg(long)]
        mask: PathBuf,

        /// Keep unknown keys down to this many levels
        #[arg(long, default_value_t = 0)]
        allow_unknown_levels: u32,
    },
}

/// Option overrides; only flags actually given become a layer
#[derive(Args, Debug, Default)]
struct OptionFlags {
    /// Key convention for scripts (underscore, uppercase, dash, camelcase)
    #[arg(long)]
    js_format: Option<String>,

    /// Key convention for style variables (underscore, uppercase, dash, camelcase)
    #[arg(long)]
    css_format: Option<String>,

    /// Variable, constant or sass map name
    #[arg(long)]
    name: Option<String>,

    /// Angular module name
    #[arg(long)]
    module: Option<String>,

    /// Declare the Angular module
    #[arg(long)]
    new_module: bool,

    /// Wrap scripts in an AMD define
    #[arg(long)]
    amd: bool,

    /// Wrap scripts in an Angular constant
    #[arg(long)]
    ngconstant: bool,

    /// Single quotes in scripts
    #[arg(long)]
    singlequote: bool,

    /// Render .scss as one nested map
    #[arg(long)]
    sass_maps: bool,

    /// Indentation string
    #[arg(long)]
    indent: Option<String>,

    /// Prefix for style variable names
    #[arg(long)]
    namespace: Option<String>,

    /// Mask file
    #[arg(long)]
    mask: Option<PathBuf>,

    /// Keep unknown keys down to this many levels
    #[arg(long)]
    mask_allow_unknown_levels: Option<u32>,
}

impl OptionFlags {
    /// The flags as an options layer, keyed the way task files are
    fn to_value(&self) -> Value {
        let mut layer = Map::new();
        let mut set = |key: &str, value: Value| {
            layer.insert(key.to_string(), value);
        };

        if let Some(v) = &self.js_format {
            set("jsFormat", Value::from(v.as_str()));
        }
        if let Some(v) = &self.css_format {
            set("cssFormat", Value::from(v.as_str()));
        }
        if let Some(v) = &self.name {
            set("name", Value::from(v.as_str()));
        }
        if let Some(v) = &self.module {
            set("module", Value::from(v.as_str()));
        }
        if let Some(v) = &self.indent {
            set("indention", Value::from(v.as_str()));
        }
        if let Some(v) = &self.namespace {
            set("namespace", Value::from(v.as_str()));
        }
        if let Some(v) = &self.mask {
            // Relative to the working directory, not the task file
            let path = std::env::current_dir()
                .map(|dir| dir.join(v))
                .unwrap_or_else(|_| v.clone());
            set("mask", Value::from(path.to_string_lossy().into_owned()));
        }
        if let Some(v) = self.mask_allow_unknown_levels {
            set("maskAllowUnknownLevels", Value::from(v));
        }
        for (key, flag) in [
            ("newModule", self.new_module),
            ("amd", self.amd),
            ("ngconstant", self.ngconstant),
            ("singlequote", self.singlequote),
            ("useSassMaps", self.sass_maps),
        ] {
            if flag {
                set(key, Value::Bool(true));
            }
        }

        Value::Object(layer)
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(default_directive(cli.verbose, cli.quiet));

    match cli.command {
        Commands::Run {
            task,
            targets,
            options,
            strict,
            dry_run,
        } => {
            run_task(task, &targets, &options, strict, dry_run);
        }
        Commands::Convert {
            src,
            dest,
            options,
            strict,
            dry_run,
        } => {
            run_convert(src, dest, &options, strict, dry_run);
        }
        Commands::Mask {
            src,
            mask,
            allow_unknown_levels,
        } => {
            run_mask(&src, mask, allow_unknown_levels);
        }
    }
}

fn run_task(
    task_path: Option<PathBuf>,
    targets: &[String],
    flags: &OptionFlags,
    strict: bool,
    dry_run: bool,
) {
    let path = task_path.unwrap_or_else(|| PathBuf::from(DEFAULT_TASK_FILE));

    let task = match Task::load(&path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error loading task file: {}", e);
            process::exit(1);
        }
    };

    tracing::debug!(task = %task.path().display(), targets = ?task.target_names(), "loaded task");

    let cli_options = flags.to_value();
    let resolved = match task.targets(targets, Some(&cli_options)) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut has_errors = false;
    for target in resolved {
        tracing::info!(target_name = %target.name, "running target");
        let output = process(&target.destinations, &target.options, &FsReader);
        has_errors |= output.diagnostics.has_errors();

        if let Err(e) = emit(&output, dry_run) {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    if strict && has_errors {
        process::exit(1);
    }
}

fn run_convert(
    src: Vec<PathBuf>,
    dest: Vec<PathBuf>,
    flags: &OptionFlags,
    strict: bool,
    dry_run: bool,
) {
    let options = match Options::from_value(flags.to_value()) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Invalid options: {}", e);
            process::exit(1);
        }
    };

    let specs = [DestinationSpec::new(src, dest)];
    let output = process(&specs, &options, &FsReader);

    if let Err(e) = emit(&output, dry_run) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if strict && output.diagnostics.has_errors() {
        process::exit(1);
    }
}

fn run_mask(src: &[PathBuf], mask: PathBuf, allow_unknown_levels: u32) {
    let mut diagnostics = Diagnostics::new();

    let trees: Vec<Value> = src
        .iter()
        .filter_map(|path| match FsReader.read(path) {
            Ok(tree) => Some(tree),
            Err(e) => {
                eprintln!("Skipping {}: {}", path.display(), e);
                None
            }
        })
        .collect();
    let merged = merge_all(trees);

    let masked = match resolve_mask(&[MaskSource::Path(mask)], &FsReader, &mut diagnostics) {
        Some(mask) => apply_mask(&merged, &mask, allow_unknown_levels, &mut diagnostics),
        None => merged,
    };

    match serde_json::to_string_pretty(&masked) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

/// Write every rendered file, or list them on a dry run
fn emit(output: &Output, dry_run: bool) -> Result<(), TaskError> {
    for (path, text) in &output.files {
        if dry_run {
            println!("{} ({} bytes)", path.display(), text.len());
            continue;
        }
        write_output(path, text)?;
        tracing::info!(destination = %path.display(), "written");
    }
    Ok(())
}
