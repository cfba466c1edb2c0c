use std::path::PathBuf;

use clap::Args;

use crate::{parsers, spec_file};

#[derive(Args)]
pub struct InterpolateArgs {
    /// Path specification file (JSON). Falls back to $WAYPATH_SPEC.
    #[arg(short, long)]
    spec: Option<PathBuf>,

    /// Query instants, as decimal hours ("17.5") or wall-clock ("17:30")
    #[arg(short, long = "at", required = true, value_parser = parsers::parse_decimal_hours)]
    at: Vec<f64>,
}

pub fn run(args: InterpolateArgs) -> Result<(), anyhow::Error> {
    let path = spec_file::resolve_spec_path(args.spec)?;
    let interpolator = spec_file::load_interpolator(&path)?;

    for decimal_hours in args.at {
        println!("{}", interpolator.interpolate(decimal_hours));
    }

    Ok(())
}
