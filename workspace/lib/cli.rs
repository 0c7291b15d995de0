//! Command-line options shared by the binaries in this package.
//!
//! Each binary defines its own top-level parser and flattens in whichever of
//! these groups it needs.

use std::path::PathBuf;
use clap::Args;
use ndarray as nd;
use qvib::{
    QResult,
    PhysicalParams,
    error::QError,
    morse::MorsePotential,
};
use crate::table::TableFormat;

/// Oscillator constants. Unset values fall back to per-binary defaults.
#[derive(Args, Debug, Clone)]
pub struct OscillatorArgs {
    /// Reduced mass μ
    #[arg(long, value_name = "FLOAT")]
    pub mass: Option<f64>,

    /// Angular frequency ω
    #[arg(long, value_name = "FLOAT")]
    pub omega: Option<f64>,

    /// Value of ħ
    #[arg(long, value_name = "FLOAT")]
    pub hbar: Option<f64>,
}

impl OscillatorArgs {
    /// Build validated parameters, filling in unset values from `default`
    /// as `(mass, omega, hbar)`.
    pub fn params(&self, default: (f64, f64, f64)) -> QResult<PhysicalParams> {
        PhysicalParams::new(
            self.mass.unwrap_or(default.0),
            self.omega.unwrap_or(default.1),
            self.hbar.unwrap_or(default.2),
        )
    }
}

/// Morse potential constants. Defaults describe a stiff diatomic well in
/// arbitrary units.
#[derive(Args, Debug, Clone)]
pub struct MorseArgs {
    /// Dissociation energy Dₑ
    #[arg(long, default_value_t = 1072.0, value_name = "FLOAT")]
    pub de: f64,

    /// Equilibrium distance rₑ
    #[arg(long, default_value_t = 1.5, value_name = "FLOAT")]
    pub re: f64,

    /// Stiffness a
    #[arg(long, default_value_t = 0.8582089552, value_name = "FLOAT")]
    pub a: f64,
}

impl MorseArgs {
    pub fn potential(&self) -> QResult<MorsePotential> {
        MorsePotential::new(self.de, self.re, self.a)
    }
}

/// Evenly spaced sampling domain. Unset values fall back to per-binary
/// defaults.
#[derive(Args, Debug, Clone)]
pub struct DomainArgs {
    /// First point of the domain
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub start: Option<f64>,

    /// Last point of the domain
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub end: Option<f64>,

    /// Number of points in the domain
    #[arg(long, value_name = "NUM")]
    pub points: Option<usize>,
}

impl DomainArgs {
    /// Build the domain, filling in unset values from `default`.
    pub fn grid(&self, default: (f64, f64, usize)) -> QResult<nd::Array1<f64>> {
        let start = self.start.unwrap_or(default.0);
        let end = self.end.unwrap_or(default.1);
        let points = self.points.unwrap_or(default.2);
        if !start.is_finite() {
            return Err(QError::NonFinite("domain start", start));
        }
        if !end.is_finite() {
            return Err(QError::NonFinite("domain end", end));
        }
        if points == 0 { return Err(QError::EmptyDomain); }
        Ok(nd::Array1::linspace(start, end, points))
    }
}

/// Table and file output.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Digits printed after the decimal point
    #[arg(long, default_value_t = 6, value_name = "NUM")]
    pub precision: usize,

    /// Column width
    #[arg(long, default_value_t = 14, value_name = "NUM")]
    pub width: usize,

    /// Omit the header line
    #[arg(long)]
    pub no_header: bool,

    /// Do not print the table to stdout
    #[arg(long)]
    pub no_table: bool,

    /// Directory for .npz output
    #[arg(short, long, default_value = "output", value_name = "PATH")]
    pub outdir: PathBuf,
}

impl OutputArgs {
    pub fn table_format(&self, serial: bool) -> TableFormat {
        TableFormat::default()
            .with_precision(self.precision)
            .with_width(self.width)
            .with_serial(serial)
            .with_header(!self.no_header)
    }
}

/// Log verbosity.
#[derive(Args, Debug, Clone)]
pub struct Verbosity {
    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}
