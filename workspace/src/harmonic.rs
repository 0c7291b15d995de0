use clap::Parser;
use ndarray as nd;
use tracing::info;
use whooie::{ mkdir, write_npz };
use lib::{
    cli::{ DomainArgs, OutputArgs, Verbosity },
    logging::setup_logging,
    table,
};
use qvib::{
    PhysicalParams,
    potential::{ HarmonicPotential, Potential },
    sample::{ SampledFunction, Sampler },
    units,
};

// parabolic potential of a diatomic spring in SI units, with the spacing of
// its quantized levels

#[derive(Parser, Debug)]
#[command(about = "Harmonic spring potential E = k r² / 2 in SI units")]
struct Cli {
    /// Spring constant k (N/m)
    #[arg(short, long, default_value_t = 1902.0, value_name = "FLOAT")]
    k: f64,

    /// Reduced mass μ (kg)
    #[arg(long, default_value_t = 1.0e-30, value_name = "FLOAT")]
    mass: f64,

    /// Number of levels to compute
    #[arg(long, default_value_t = 6, value_name = "NUM")]
    count: usize,

    #[command(flatten)]
    domain: DomainArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    verbosity: Verbosity,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.verbosity)?;

    let spring = HarmonicPotential::new(cli.k, 0.0)?;
    let params = PhysicalParams::from_force_constant(cli.k, cli.mass, units::hbar)?;
    let ladder = params.levels(cli.count)?;
    info!(
        omega = params.omega(),
        quantum_cm = units::joules_to_wavenumber(params.quantum()),
        "spring constants"
    );

    // SI energies are far below any fixed-point precision; tabulate in cm⁻¹
    let n: nd::Array1<f64> = ladder.iter().map(|lev| lev.n as f64).collect();
    let e: nd::Array1<f64> = ladder.energies().into();
    let e_cm: nd::Array1<f64> = e.mapv(units::joules_to_wavenumber);
    let levels_cm
        = SampledFunction::from_columns(&n, vec![("E (cm^-1)", e_cm.clone())])?;

    let r: nd::Array1<f64> = cli.domain.grid((-10.0, 10.0, 500))?;
    let curve
        = Sampler::new(&r)?
        .column("E", |rk| spring.eval(rk))
        .build_par();

    if !cli.output.no_table {
        let fmt = cli.output.table_format(false);
        println!("{}", table::render_sampled(&curve, "r", &fmt));
        println!("{}", table::render_sampled(&levels_cm, "n", &fmt));
    }

    let tps: nd::Array1<f64>
        = e.mapv(|en| spring.turning_points(en).map_or(f64::NAN, |(_, hi)| hi));
    let outdir = cli.output.outdir;
    mkdir!(outdir);
    write_npz!(
        outdir.join("harmonic.npz"),
        arrays: {
            "r" => &r,
            "v" => &spring.eval_arr(&r),
            "e" => &e,
            "e_cm" => &e_cm,
            "tps" => &tps,
        }
    );
    Ok(())
}
