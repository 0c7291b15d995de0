//! Plain-text rendering of sampled functions and energy ladders.
//!
//! All display settings are passed explicitly through a [`TableFormat`].

use qvib::{
    energy::{ EnergyLadder, Transition },
    sample::SampledFunction,
};

/// Display settings for a rendered table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TableFormat {
    /// Digits printed after the decimal point.
    pub precision: usize,
    /// Minimum width of each column.
    pub width: usize,
    /// Prepend a 1-based serial-number column.
    pub serial: bool,
    /// Print a header line of column labels.
    pub header: bool,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self { precision: 6, width: 14, serial: false, header: true }
    }
}

impl TableFormat {
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_serial(mut self, serial: bool) -> Self {
        self.serial = serial;
        self
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    fn serial_width(&self) -> usize { self.width.clamp(5, 9) }

    fn write_header<'a, I>(&self, out: &mut String, labels: I)
    where I: IntoIterator<Item = &'a str>
    {
        if !self.header { return; }
        let mut cells: Vec<String> = Vec::new();
        if self.serial {
            cells.push(format!("{:>w$}", "#", w = self.serial_width()));
        }
        cells.extend(
            labels.into_iter().map(|l| format!("{:>w$}", l, w = self.width)));
        let line = cells.join(" ");
        let rule = "-".repeat(line.chars().count());
        out.push_str(&format!("{line}\n{rule}\n"));
    }

    fn write_row<I>(&self, out: &mut String, serial: usize, values: I)
    where I: IntoIterator<Item = f64>
    {
        let mut cells: Vec<String> = Vec::new();
        if self.serial {
            cells.push(format!("{:>w$}", serial, w = self.serial_width()));
        }
        cells.extend(
            values.into_iter()
            .map(|v| format!("{:>w$.p$}", v, w = self.width, p = self.precision))
        );
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
}

/// Render a sampled function as a table, with the domain in the first value
/// column under the label `x_label` followed by every value column in request
/// order.
pub fn render_sampled(
    table: &SampledFunction,
    x_label: &str,
    fmt: &TableFormat,
) -> String
{
    let mut out = String::new();
    let labels
        = std::iter::once(x_label)
        .chain(table.labels().iter().map(String::as_str));
    fmt.write_header(&mut out, labels);
    for (i, (x, values)) in table.rows().enumerate() {
        fmt.write_row(&mut out, i + 1, std::iter::once(x).chain(values));
    }
    out
}

/// Render an energy ladder as a two-column `(n, E)` table.
pub fn render_ladder(ladder: &EnergyLadder, fmt: &TableFormat) -> String {
    let mut out = String::new();
    fmt.write_header(&mut out, ["n", "E"]);
    for (i, level) in ladder.iter().enumerate() {
        fmt.write_row(&mut out, i + 1, [level.n as f64, level.e]);
    }
    out
}

/// Render a list of transitions as a `(from, to, ΔE)` table.
pub fn render_transitions(transitions: &[Transition], fmt: &TableFormat)
    -> String
{
    let mut out = String::new();
    fmt.write_header(&mut out, ["from", "to", "dE"]);
    for (i, tr) in transitions.iter().enumerate() {
        fmt.write_row(&mut out, i + 1, [tr.from as f64, tr.to as f64, tr.de]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray as nd;
    use qvib::{ energy::levels, sample::Sampler };

    fn small_table() -> SampledFunction {
        let x: nd::Array1<f64> = nd::array![0.0, 0.5, 1.0];
        Sampler::new(&x).unwrap()
            .column("sq", |x| x * x)
            .column("neg", |x| -x)
            .build()
    }

    #[test]
    fn sampled_layout() {
        let fmt = TableFormat::default().with_precision(3).with_width(8);
        let out = render_sampled(&small_table(), "x", &fmt);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], format!("{:>8} {:>8} {:>8}", "x", "sq", "neg"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[3], format!("{:>8} {:>8} {:>8}", "0.500", "0.250", "-0.500"));
    }

    #[test]
    fn serial_and_headerless() {
        let fmt
            = TableFormat::default()
            .with_precision(1)
            .with_width(6)
            .with_serial(true)
            .with_header(false);
        let out = render_sampled(&small_table(), "x", &fmt);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].trim_start().starts_with('1'));
        assert!(lines[2].trim_start().starts_with('3'));
        assert!(lines[2].ends_with("-1.0"));
    }

    #[test]
    fn ladder_rows() {
        let ladder = levels(6, 1.0, 3.0).unwrap();
        let fmt = TableFormat::default().with_precision(1).with_header(false);
        let out = render_ladder(&ladder, &fmt);
        let last: Vec<&str> = out.lines().last().unwrap().split_whitespace().collect();
        assert_eq!(last, vec!["5.0", "16.5"]);
        let out = render_transitions(&ladder.adjacent_transitions(), &fmt);
        assert_eq!(out.lines().count(), 5);
        assert!(out.lines().all(|l| l.ends_with("3.0")));
    }
}
