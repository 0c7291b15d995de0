//! Tabulation of labelled functions over an ordered domain.
//!
//! A [`Sampler`] collects a domain and any number of labelled unary
//! functions, then evaluates every function at every domain point to produce a
//! read-only [`SampledFunction`] table. Columns keep the order in which they
//! were requested, and non-finite values are passed through unchanged.
//!
//! ```
//! use ndarray as nd;
//! use qvib::{ sample::Sampler, wavefunction::wavefunction };
//!
//! let y: nd::Array1<f64> = nd::Array1::linspace(-4.0, 4.0, 200);
//! let table = Sampler::new(&y).unwrap()
//!     .column("psi_0", |yk| wavefunction(0, yk, 1.0).unwrap())
//!     .column("V", |yk| 0.5 * yk * yk)
//!     .build();
//! assert_eq!(table.labels(), ["psi_0", "V"]);
//! assert_eq!(table.len(), 200);
//! ```

use ndarray as nd;
use tracing::debug;
use crate::{
    Arr1,
    error::{ LengthError, QError, QResult },
};

/// Check that a domain is non-empty and strictly monotonic (either increasing
/// or decreasing) with no NaNs.
pub fn check_domain<S>(x: &Arr1<S>) -> QResult<()>
where S: nd::Data<Elem = f64>
{
    if x.is_empty() { return Err(QError::EmptyDomain); }
    if x[0].is_nan() { return Err(QError::NonMonotonic(0)); }
    if x.len() == 1 { return Ok(()); }
    let increasing = x[1] > x[0];
    x.iter().zip(x.iter().skip(1)).enumerate()
        .try_for_each(|(k, (xk, xkp1))| {
            let ok = if increasing { xkp1 > xk } else { xkp1 < xk };
            ok.then_some(()).ok_or(QError::NonMonotonic(k + 1))
        })
}

/// A table of values sampled over a common domain.
///
/// Every column has the same length as the domain.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledFunction {
    x: nd::Array1<f64>,
    labels: Vec<String>,
    values: Vec<nd::Array1<f64>>,
}

impl SampledFunction {
    /// Assemble a table from a domain and precomputed columns.
    ///
    /// Fails if the domain is invalid or any column has the wrong length.
    pub fn from_columns<S, L>(x: &Arr1<S>, columns: Vec<(L, nd::Array1<f64>)>)
        -> QResult<Self>
    where
        S: nd::Data<Elem = f64>,
        L: Into<String>,
    {
        check_domain(x)?;
        let mut table = Self {
            x: x.to_owned(),
            labels: Vec::with_capacity(columns.len()),
            values: Vec::with_capacity(columns.len()),
        };
        columns.into_iter()
            .try_for_each(|(label, col)| table.push_column(label, col))?;
        Ok(table)
    }

    /// Append a precomputed column.
    ///
    /// Fails if the column has the wrong length.
    pub fn push_column<L>(&mut self, label: L, values: nd::Array1<f64>)
        -> QResult<()>
    where L: Into<String>
    {
        LengthError::check(&self.x, &values)?;
        self.labels.push(label.into());
        self.values.push(values);
        Ok(())
    }

    /// Get the domain.
    pub fn domain(&self) -> nd::ArrayView1<'_, f64> { self.x.view() }

    /// Get the column labels, in order.
    pub fn labels(&self) -> &[String] { &self.labels }

    /// Get the number of domain points.
    pub fn len(&self) -> usize { self.x.len() }

    /// Always `false`; domains are never empty.
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Get the number of value columns (not counting the domain).
    pub fn num_columns(&self) -> usize { self.values.len() }

    /// Get the first column with a given label.
    pub fn column(&self, label: &str) -> Option<nd::ArrayView1<'_, f64>> {
        self.labels.iter().position(|l| l == label)
            .map(|k| self.values[k].view())
    }

    /// Get the `k`-th column.
    pub fn column_at(&self, k: usize) -> Option<nd::ArrayView1<'_, f64>> {
        self.values.get(k).map(|col| col.view())
    }

    /// Get the `i`-th row as `(domain value, column values)`.
    pub fn row(&self, i: usize) -> Option<(f64, Vec<f64>)> {
        (i < self.x.len())
            .then(|| (self.x[i], self.values.iter().map(|col| col[i]).collect()))
    }

    /// Iterate over all rows in domain order.
    pub fn rows(&self) -> impl Iterator<Item = (f64, Vec<f64>)> + '_ {
        (0..self.x.len())
            .map(|i| (self.x[i], self.values.iter().map(|col| col[i]).collect()))
    }

    /// Stack the domain and all columns into a single 2D array, one row per
    /// domain point with the domain in column 0.
    pub fn to_array2(&self) -> nd::Array2<f64> {
        let mut out: nd::Array2<f64>
            = nd::Array2::zeros((self.x.len(), self.values.len() + 1));
        out.column_mut(0).assign(&self.x);
        self.values.iter().enumerate()
            .for_each(|(k, col)| out.column_mut(k + 1).assign(col));
        out
    }

    /// Count the NaN and infinite entries over all value columns.
    pub fn non_finite(&self) -> usize {
        self.values.iter()
            .map(|col| col.iter().filter(|v| !v.is_finite()).count())
            .sum()
    }
}

type Evaluator<'a> = Box<dyn Fn(f64) -> f64 + Send + Sync + 'a>;

/// Builder for a [`SampledFunction`].
pub struct Sampler<'a> {
    x: nd::Array1<f64>,
    columns: Vec<(String, Evaluator<'a>)>,
}

impl<'a> Sampler<'a> {
    /// Start a new table over a domain.
    ///
    /// Fails if the domain is empty, not strictly monotonic, or contains NaN.
    pub fn new<S>(x: &Arr1<S>) -> QResult<Self>
    where S: nd::Data<Elem = f64>
    {
        check_domain(x)?;
        Ok(Self { x: x.to_owned(), columns: Vec::new() })
    }

    /// Add a labelled function to evaluate.
    pub fn column<L, F>(mut self, label: L, f: F) -> Self
    where
        L: Into<String>,
        F: Fn(f64) -> f64 + Send + Sync + 'a,
    {
        self.columns.push((label.into(), Box::new(f)));
        self
    }

    /// Evaluate every function over the domain.
    pub fn build(self) -> SampledFunction {
        debug!(points = self.x.len(), columns = self.columns.len(), "sampling");
        let Self { x, columns } = self;
        let (labels, values): (Vec<String>, Vec<nd::Array1<f64>>)
            = columns.into_iter()
            .map(|(label, f)| {
                let col = x.mapv(|xk| f(xk));
                (label, col)
            })
            .unzip();
        SampledFunction { x, labels, values }
    }

    /// Like [`Self::build`], but evaluate columns and chunks of the domain
    /// in parallel.
    ///
    /// The output is identical to that of [`Self::build`].
    #[cfg(feature = "parallel")]
    pub fn build_par(self) -> SampledFunction {
        use rayon::prelude::*;
        const MIN_CHUNK: usize = 256;

        debug!(
            points = self.x.len(),
            columns = self.columns.len(),
            "sampling in parallel"
        );
        let Self { x, columns } = self;
        let xs: Vec<f64> = x.to_vec();
        let values: Vec<nd::Array1<f64>>
            = columns.par_iter()
            .map(|(_, f)| {
                let col: Vec<f64>
                    = xs.par_iter()
                    .with_min_len(MIN_CHUNK)
                    .map(|&xk| f(xk))
                    .collect();
                nd::Array1::from(col)
            })
            .collect();
        let labels: Vec<String>
            = columns.into_iter().map(|(label, _)| label).collect();
        SampledFunction { x, labels, values }
    }
}

/// Evaluate a list of labelled functions over a domain.
///
/// Fails if the domain is empty, not strictly monotonic, or contains NaN.
pub fn sample<S>(x: &Arr1<S>, evaluators: &[(&str, &(dyn Fn(f64) -> f64 + Sync))])
    -> QResult<SampledFunction>
where S: nd::Data<Elem = f64>
{
    let sampler
        = evaluators.iter()
        .fold(Sampler::new(x)?, |acc, &(label, f)| acc.column(label, f));
    Ok(sampler.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wavefunction::{ probability_density, wavefunction };

    #[test]
    fn domain_checks() {
        let empty: nd::Array1<f64> = nd::Array1::zeros(0);
        assert!(matches!(check_domain(&empty), Err(QError::EmptyDomain)));
        assert!(check_domain(&nd::array![1.0]).is_ok());
        assert!(check_domain(&nd::array![1.0, 2.0, 3.0]).is_ok());
        assert!(check_domain(&nd::array![3.0, 2.0, -1.0]).is_ok());
        assert!(matches!(
            check_domain(&nd::array![1.0, 2.0, 2.0]),
            Err(QError::NonMonotonic(2)),
        ));
        assert!(matches!(
            check_domain(&nd::array![1.0, 2.0, 1.5]),
            Err(QError::NonMonotonic(2)),
        ));
        assert!(check_domain(&nd::array![f64::NAN]).is_err());
        assert!(check_domain(&nd::array![0.0, f64::NAN, 1.0]).is_err());
    }

    #[test]
    fn column_order_and_shape() {
        let y: nd::Array1<f64> = nd::Array1::linspace(-4.0, 4.0, 50);
        let table = Sampler::new(&y).unwrap()
            .column("psi_2", |yk| wavefunction(2, yk, 1.0).unwrap())
            .column("rho_2", |yk| probability_density(2, yk, 1.0).unwrap())
            .column("V", |yk| 0.5 * yk * yk)
            .build();
        assert_eq!(table.labels(), ["psi_2", "rho_2", "V"]);
        assert_eq!(table.num_columns(), 3);
        assert_eq!(table.domain(), y);
        for k in 0..3 { assert_eq!(table.column_at(k).unwrap().len(), 50); }
        let (y7, vals) = table.row(7).unwrap();
        assert_eq!(y7, y[7]);
        assert_eq!(vals[2], 0.5 * y[7] * y[7]);
        assert_eq!(vals[1], vals[0] * vals[0]);
        assert!(table.row(50).is_none());
        assert_eq!(table.rows().count(), 50);
        let arr = table.to_array2();
        assert_eq!(arr.dim(), (50, 4));
        assert_eq!(arr.column(0), y);
        assert_eq!(arr.column(3), table.column("V").unwrap());
    }

    #[test]
    fn non_finite_values_propagate() {
        let x = nd::array![-1.0, 0.0, 1.0];
        let recip: &(dyn Fn(f64) -> f64 + Sync) = &|xk: f64| xk.recip();
        let sqrt: &(dyn Fn(f64) -> f64 + Sync) = &|xk: f64| xk.sqrt();
        let table = sample(&x, &[("recip", recip), ("sqrt", sqrt)]).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.column("recip").unwrap()[1], f64::INFINITY);
        assert!(table.column("sqrt").unwrap()[0].is_nan());
        assert_eq!(table.non_finite(), 2);
    }

    #[test]
    fn fails_up_front() {
        let x = nd::array![0.0, 1.0, 0.5];
        let id: &(dyn Fn(f64) -> f64 + Sync) = &|xk: f64| xk;
        assert!(sample(&x, &[("id", id)]).is_err());
    }

    #[test]
    fn idempotent() {
        let y: nd::Array1<f64> = nd::Array1::linspace(-8.0, 8.0, 777);
        let f: &(dyn Fn(f64) -> f64 + Sync)
            = &|yk: f64| wavefunction(7, yk, 1.0).unwrap();
        let a = sample(&y, &[("psi_7", f)]).unwrap();
        let b = sample(&y, &[("psi_7", f)]).unwrap();
        assert_eq!(a, b);
        assert!(
            a.column_at(0).unwrap().iter().zip(b.column_at(0).unwrap())
                .all(|(l, r)| l.to_bits() == r.to_bits())
        );
    }

    #[test]
    fn precomputed_columns() {
        let x = nd::array![0.0, 1.0, 2.0];
        let mut table
            = SampledFunction::from_columns(&x, vec![("a", x.mapv(|v| v + 1.0))])
            .unwrap();
        assert!(table.push_column("short", nd::array![1.0]).is_err());
        table.push_column("b", nd::array![3.0, 2.0, 1.0]).unwrap();
        assert_eq!(table.labels(), ["a", "b"]);
        assert!(SampledFunction::from_columns(&x, vec![("bad", nd::array![1.0])]).is_err());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_serial() {
        let y: nd::Array1<f64> = nd::Array1::linspace(-10.0, 10.0, 5001);
        let build = || {
            Sampler::new(&y).unwrap()
                .column("psi_0", |yk| wavefunction(0, yk, 1.0).unwrap())
                .column("psi_9", |yk| wavefunction(9, yk, 1.0).unwrap())
                .column("rho_9", |yk| probability_density(9, yk, 1.0).unwrap())
        };
        assert_eq!(build().build(), build().build_par());
    }
}
