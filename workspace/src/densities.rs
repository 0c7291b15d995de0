use clap::Parser;
use ndarray as nd;
use tracing::info;
use whooie::{ mkdir, write_npz };
use lib::{
    cli::{ DomainArgs, OscillatorArgs, OutputArgs, Verbosity },
    logging::setup_logging,
    table,
};
use qvib::{
    potential::{ HarmonicPotential, Potential },
    sample::Sampler,
};

// probability densities |ψ[n](y)|² of the lowest few states, plus the data
// needed to overlay them on the potential well at their energies

#[derive(Parser, Debug)]
#[command(about = "Harmonic-oscillator probability densities")]
struct Cli {
    #[command(flatten)]
    osc: OscillatorArgs,

    /// Number of states to compute, starting from the ground state
    #[arg(long, default_value_t = 4, value_name = "NUM")]
    count: usize,

    /// Vertical scale applied to the densities in the overlay data only
    #[arg(long, default_value_t = 1.5, value_name = "FLOAT")]
    scale: f64,

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
    anyhow::ensure!(cli.count > 0, "must compute at least one state");
    anyhow::ensure!(cli.scale.is_finite(), "scale must be finite");

    let params = cli.osc.params((1.0, 1.0, 1.0))?;
    let y: nd::Array1<f64> = cli.domain.grid((-4.0, 4.0, 200))?;
    let densities
        = (0..cli.count)
        .fold(Sampler::new(&y)?, |sampler, n| {
            sampler.column(
                format!("psi_{n}^2(y)"),
                move |yk| params.evaluate_y(n, yk).density(),
            )
        })
        .build_par();
    info!(
        states = densities.num_columns(),
        non_finite = densities.non_finite(),
        "evaluated densities"
    );

    if !cli.output.no_table {
        let fmt = cli.output.table_format(true);
        println!("{}", table::render_sampled(&densities, "y", &fmt));
    }

    // energies in units of ħω so that they share an axis with V(y) = y²/2
    let well = HarmonicPotential::natural();
    let v: nd::Array1<f64> = well.eval_arr(&y);
    let e: nd::Array1<f64> = (0..cli.count).map(|n| n as f64 + 0.5).collect();
    let rho: nd::Array2<f64>
        = densities.to_array2().slice(nd::s![.., 1..]).t().to_owned();
    let overlay: nd::Array2<f64>
        = &rho * cli.scale + &e.view().insert_axis(nd::Axis(1));
    let outdir = cli.output.outdir;
    mkdir!(outdir);
    write_npz!(
        outdir.join("densities.npz"),
        arrays: {
            "y" => &y,
            "v" => &v,
            "e" => &e,
            "rho" => &rho,
            "overlay" => &overlay,
            "scale" => &nd::array![cli.scale],
        }
    );
    Ok(())
}
