use clap::Parser;
use ndarray as nd;
use tracing::info;
use whooie::{ mkdir, write_npz };
use lib::{
    cli::{ DomainArgs, OscillatorArgs, OutputArgs, Verbosity },
    logging::setup_logging,
    table,
};
use qvib::{ potential::Potential, sample::Sampler };

// energy ladder of the harmonic oscillator together with the potential well
// it sits in

#[derive(Parser, Debug)]
#[command(about = "Harmonic-oscillator energy levels and potential well")]
struct Cli {
    #[command(flatten)]
    osc: OscillatorArgs,

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

    let params = cli.osc.params((1.0, 3.0, 1.0))?;
    let ladder = params.levels(cli.count)?;
    info!(count = ladder.len(), quantum = params.quantum(), "computed ladder");

    let well = params.harmonic();
    let x: nd::Array1<f64> = cli.domain.grid((-2.0, 2.0, 50))?;
    let curve
        = Sampler::new(&x)?
        .column("V", |xk| well.eval(xk))
        .build();

    let fmt = cli.output.table_format(false);
    if !cli.output.no_table {
        println!("{}", table::render_sampled(&curve, "r", &fmt));
        println!("{}", table::render_ladder(&ladder, &fmt));
        println!(
            "{}",
            table::render_transitions(&ladder.adjacent_transitions(), &fmt),
        );
    }

    let n: nd::Array1<f64> = ladder.iter().map(|lev| lev.n as f64).collect();
    let e: nd::Array1<f64> = ladder.energies().into();
    let de: nd::Array1<f64> = ladder.spacings().into();
    let v: nd::Array1<f64> = well.eval_arr(&x);
    let outdir = cli.output.outdir;
    mkdir!(outdir);
    write_npz!(
        outdir.join("levels.npz"),
        arrays: {
            "x" => &x,
            "v" => &v,
            "n" => &n,
            "e" => &e,
            "de" => &de,
            "hw" => &nd::array![params.quantum()],
        }
    );
    Ok(())
}
