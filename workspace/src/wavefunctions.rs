use clap::Parser;
use ndarray as nd;
use tracing::{ info, warn };
use whooie::{ mkdir, write_npz };
use lib::{
    cli::{ DomainArgs, OscillatorArgs, OutputArgs, Verbosity },
    logging::setup_logging,
    table,
};
use qvib::{
    sample::SampledFunction,
    wavefunction::{ eigenstates, psi_matrix },
};

// tabulate the lowest few harmonic-oscillator eigenfunctions ψ[n](y)

#[derive(Parser, Debug)]
#[command(about = "Normalized harmonic-oscillator wavefunctions")]
struct Cli {
    #[command(flatten)]
    osc: OscillatorArgs,

    /// Number of states to compute, starting from the ground state
    #[arg(long, default_value_t = 4, value_name = "NUM")]
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
    anyhow::ensure!(cli.count > 0, "must compute at least one state");

    let params = cli.osc.params((1.0, 1.0, 1.0))?;
    let y: nd::Array1<f64> = cli.domain.grid((-4.0, 4.0, 500))?;
    let states = eigenstates(cli.count - 1, &y, params.alpha())?;
    let degenerate: usize = states.iter().map(|s| s.num_degenerate()).sum();
    if degenerate > 0 {
        warn!(points = degenerate, "some amplitudes underflowed to zero");
    }
    info!(states = states.len(), points = y.len(), "evaluated wavefunctions");

    let columns: Vec<(String, nd::Array1<f64>)>
        = states.iter()
        .map(|s| (format!("psi_{}(y)", s.n), s.psi.clone()))
        .collect();
    let wfs = SampledFunction::from_columns(&y, columns)?;

    if !cli.output.no_table {
        let fmt = cli.output.table_format(true);
        println!("{}", table::render_sampled(&wfs, "y", &fmt));
    }

    let n: nd::Array1<f64> = states.iter().map(|s| s.n as f64).collect();
    let psi: nd::Array2<f64> = psi_matrix(&states)?;
    let outdir = cli.output.outdir;
    mkdir!(outdir);
    write_npz!(
        outdir.join("wavefunctions.npz"),
        arrays: {
            "y" => &y,
            "n" => &n,
            "psi" => &psi,
            "alpha" => &nd::array![params.alpha()],
        }
    );
    Ok(())
}
