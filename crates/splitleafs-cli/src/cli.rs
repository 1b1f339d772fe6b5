use clap::{Parser, ValueEnum};
use splitleafs::core::io::format::InputFormat;
use splitleafs::core::models::atom::Axis;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Jonathan Barnoud",
    version,
    about = "Write a GROMACS index file with one group per membrane leaflet.",
    override_usage = "splitleafs [OPTIONS] < input.gro > output.ndx",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Axis normal to the bilayer [default: z]
    #[arg(short = 'd', long, value_enum, ignore_case = true, value_name = "AXIS")]
    pub axis: Option<AxisArg>,

    /// Reference atom name [default: P1]
    #[arg(short = 'a', long, value_name = "NAME")]
    pub atom: Option<String>,

    /// Input file format [default: gro, or guessed from the --input extension]
    #[arg(short = 'f', long, value_enum, ignore_case = true, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Keep the whole residues
    #[arg(
        short = 'r',
        long = "keep_residue",
        visible_alias = "keep-residue",
        overrides_with = "keep_atom"
    )]
    pub keep_residue: bool,

    /// Keep only the atom of reference (default behavior)
    #[arg(
        short = 'k',
        long = "keep_atom",
        visible_alias = "keep-atom",
        overrides_with = "keep_residue"
    )]
    pub keep_atom: bool,

    /// Read the structure from a file instead of the standard input
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Write the index to a file instead of the standard output
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a TOML file providing default values for the options above
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Turn off log output; fatal errors are still printed to stderr
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisArg {
    X,
    Y,
    Z,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::X => Axis::X,
            AxisArg::Y => Axis::Y,
            AxisArg::Z => Axis::Z,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// GROMACS coordinate file
    #[value(alias = "a")]
    Gro,
    /// Protein Data Bank file
    #[value(alias = "b")]
    Pdb,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Gro => InputFormat::Gro,
            FormatArg::Pdb => InputFormat::Pdb,
        }
    }
}
