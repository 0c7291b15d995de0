use clap::Parser;
use ndarray as nd;
use tracing::info;
use whooie::{ mkdir, write_npz };
use lib::{
    cli::{ DomainArgs, MorseArgs, OscillatorArgs, OutputArgs, Verbosity },
    logging::setup_logging,
    table,
};
use qvib::{ potential::Potential, sample::Sampler };

// Morse potential energy curve and its bound vibrational levels

#[derive(Parser, Debug)]
#[command(about = "Morse potential curve and vibrational levels")]
struct Cli {
    #[command(flatten)]
    morse: MorseArgs,

    // ω is fixed by the Morse constants
    #[command(flatten)]
    osc: OscillatorArgs,

    /// Maximum number of vibrational levels to compute
    #[arg(long, default_value_t = 10, value_name = "NUM")]
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

    anyhow::ensure!(
        cli.osc.omega.is_none(),
        "--omega is determined by --de, --a and --mass",
    );
    let morse = cli.morse.potential()?;
    let base = cli.osc.params((1.0, 1.0, 1.0))?;
    let omega0 = morse.harmonic_frequency(base.mass())?;
    let params
        = qvib::PhysicalParams::new(base.mass(), omega0, base.hbar())?
        .with_morse(morse);
    let ladder = params.morse_levels(cli.count)?;
    info!(
        levels = ladder.len(),
        k = morse.force_constant(),
        omega0,
        "computed Morse ladder"
    );

    let r: nd::Array1<f64> = cli.domain.grid((0.5, 10.0, 50))?;
    let curve
        = Sampler::new(&r)?
        .column("E(r)", |rk| morse.potential(rk))
        .column("harmonic", |rk| {
            0.5 * morse.force_constant() * (rk - morse.equilibrium()).powi(2)
        })
        .build();

    if !cli.output.no_table {
        let fmt = cli.output.table_format(false);
        println!("{}", table::render_sampled(&curve, "r", &fmt));
        println!("{}", table::render_ladder(&ladder, &fmt));
    }

    let e: nd::Array1<f64> = ladder.energies().into();
    let tps: nd::Array2<f64>
        = nd::Array2::from_shape_fn((ladder.len(), 2), |(v, side)| {
            morse.turning_points(e[v])
                .map(|(inner, outer)| if side == 0 { inner } else { outer })
                .unwrap_or(f64::NAN)
        });
    let table_arr: nd::Array2<f64> = curve.to_array2();
    let outdir = cli.output.outdir;
    mkdir!(outdir);
    write_npz!(
        outdir.join("morse.npz"),
        arrays: {
            "r" => &r,
            "v" => &table_arr.column(1).to_owned(),
            "v_harm" => &table_arr.column(2).to_owned(),
            "e" => &e,
            "tps" => &tps,
            "consts" => &nd::array![
                morse.dissociation_energy(),
                morse.equilibrium_distance(),
                morse.stiffness(),
            ],
        }
    );
    Ok(())
}
