use std::{ f64::consts::PI, path::PathBuf };
use ndarray as nd;
use whooie::write_npz;
use qvib::{
    PhysicalParams,
    units,
    utils::{ grid_spacing, identity_deviation, overlap_matrix },
    wavefunction::{ eigenstates, psi_matrix },
};

// eigenstates of a single ion in a harmonic trap

fn main() {
    const MASS: f64 = 2.8384644058191703e-25; // ¹⁷¹Yb; kg
    const TRAP_FREQ: f64 = 2.0 * PI * 30e3; // s⁻¹
    const NMAX: usize = 10;

    let params = PhysicalParams::new(MASS, TRAP_FREQ, units::hbar).unwrap();
    // natural units:
    // * lengths in units of the ground-state width √(ħ/mω)
    // * energies in units of ħω, so that E[n] = n + 1/2
    let uu = params.units().unwrap();
    println!("ground-state width: {:.3e} m", uu.a);
    println!("trap quantum: {:.3e} J", uu.e);

    let ladder = params.levels(NMAX + 1).unwrap();
    let e: nd::Array1<f64> = uu.to_nat_energy(nd::Array1::from(ladder.energies()));
    println!("E[{NMAX}] = {:.3} ħω", e[NMAX]);

    // the wavefunctions are normalized over physical length, so sample in
    // meters and rescale afterward
    let y: nd::Array1<f64> = nd::Array1::linspace(-10.0, 10.0, 3001);
    let r: nd::Array1<f64> = uu.from_nat_length(y.clone());
    let y_alpha: nd::Array1<f64> = r.mapv(|rk| params.to_y(rk));
    let states = eigenstates(NMAX, &y_alpha, params.alpha()).unwrap();
    let wfs: nd::Array2<f64> = psi_matrix(&states).unwrap() * uu.a.sqrt();

    let dy = grid_spacing(&y);
    let rows: Vec<nd::Array1<f64>> = wfs.outer_iter().map(|row| row.to_owned()).collect();
    let overlaps = overlap_matrix(&rows, dy).unwrap();
    println!("max deviation from orthonormality: {:.3e}", identity_deviation(&overlaps));

    let v: nd::Array1<f64> = y.mapv(|yk| 0.5 * yk * yk);
    write_npz!(
        PathBuf::from("qho.npz"),
        arrays: {
            "y" => &y,
            "v" => &v,
            "e" => &e,
            "wf" => &wfs,
            "overlaps" => &overlaps,
        }
    );
}
