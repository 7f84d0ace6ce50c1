use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "molscene - compile a molecular viewer's scene state into a renderer-agnostic scene description.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress bars
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to compile scene layers.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile an atom dump (and optionally a camera view) into scene JSON.
    Transpile(TranspileArgs),
    /// Convert a camera view dump into the renderer orientation matrix.
    View(ViewArgs),
    /// Convert a Wavefront OBJ mesh into flat triangle lists.
    Mesh(MeshArgs),
}

/// Layout of the atom input file.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomFormat {
    /// Text output of the graphics engine's `iterate` command.
    Iterate,
    /// A JSON array of atom records.
    Json,
}

impl AtomFormat {
    /// Guesses the format from the file extension: `.json` is JSON, anything else an iterate dump.
    pub fn infer(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => AtomFormat::Json,
            _ => AtomFormat::Iterate,
        }
    }
}

/// Arguments for the `transpile` subcommand.
#[derive(Args, Debug)]
pub struct TranspileArgs {
    // --- Inputs ---
    /// Path to the per-atom dump.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub atoms: PathBuf,

    /// Layout of the atom dump. Inferred from the file extension when omitted.
    #[arg(short, long, value_enum)]
    pub format: Option<AtomFormat>,

    /// Path to a camera view dump (`get_view` output).
    #[arg(long, value_name = "PATH")]
    pub view: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Where to write the scene JSON. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    // --- Overrides ---
    /// Color every non-carbon element uniformly, dropping per-atom exceptions.
    #[arg(long)]
    pub uniform_non_carbon: bool,

    /// Representation used for sticks (sym-licorice, licorice, hyperball, ball+stick).
    #[arg(long, value_name = "STYLE")]
    pub stick_style: Option<String>,

    /// Keep the camera validation script in the output.
    #[arg(long)]
    pub validation: bool,

    /// TOML palette file extending or overriding the built-in colors.
    #[arg(long, value_name = "PATH")]
    pub palette: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S render.field-of-view=30
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `view` subcommand.
#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Path to a camera view dump.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Also print the validation script.
    #[arg(long)]
    pub validation: bool,
}

/// Arguments for the `mesh` subcommand.
#[derive(Args, Debug)]
pub struct MeshArgs {
    /// Path to the OBJ file.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Rescale so the largest extent is this many Ångström. 0 keeps the original size.
    #[arg(long, value_name = "FLOAT")]
    pub scale: Option<f64>,

    /// Centering mode: unaltered, origin or custom. Applied only together with --scale.
    #[arg(long, value_name = "MODE", default_value = "unaltered")]
    pub centroid: String,

    /// Target point for the custom centroid mode, in scaled units.
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_point)]
    pub origin: Option<[f64; 3]>,

    /// Where to write the mesh JSON. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

fn parse_point(s: &str) -> Result<[f64; 3], String> {
    let values = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| format!("'{}' is not a number", part.trim()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    <[f64; 3]>::try_from(values)
        .map_err(|v| format!("expected three comma-separated values, found {}", v.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpile_arguments_parse() {
        let cli = Cli::parse_from([
            "molscene",
            "-vv",
            "transpile",
            "-a",
            "atoms.txt",
            "--view",
            "view.txt",
            "--uniform-non-carbon",
            "-S",
            "render.fog-start=40",
            "-S",
            "validation=true",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Transpile(args) = cli.command else {
            panic!("Expected 'transpile' subcommand");
        };
        assert_eq!(args.atoms, PathBuf::from("atoms.txt"));
        assert_eq!(args.view, Some(PathBuf::from("view.txt")));
        assert!(args.uniform_non_carbon);
        assert_eq!(args.set_values.len(), 2);
        assert!(args.format.is_none());
    }

    #[test]
    fn mesh_origin_needs_three_numbers() {
        let cli = Cli::parse_from(["molscene", "mesh", "m.obj", "--origin", "1, 2.5,-3"]);
        let Commands::Mesh(args) = cli.command else {
            panic!("Expected 'mesh' subcommand");
        };
        assert_eq!(args.origin, Some([1.0, 2.5, -3.0]));
        assert_eq!(args.centroid, "unaltered");

        assert!(Cli::try_parse_from(["molscene", "mesh", "m.obj", "--origin", "1,2"]).is_err());
        assert!(Cli::try_parse_from(["molscene", "mesh", "m.obj", "--origin", "1,a,2"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["molscene", "-q", "-v", "view", "v.txt"]).is_err());
    }

    #[test]
    fn atom_format_is_inferred_from_extension() {
        assert_eq!(AtomFormat::infer(Path::new("scene.JSON")), AtomFormat::Json);
        assert_eq!(AtomFormat::infer(Path::new("dump.txt")), AtomFormat::Iterate);
        assert_eq!(AtomFormat::infer(Path::new("dump")), AtomFormat::Iterate);
    }
}
