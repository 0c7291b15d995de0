use tracing_subscriber::{
    filter::LevelFilter,
    fmt,
    prelude::*,
};
use crate::cli::Verbosity;

/// Map a `-v`/`-q` count to a level filter.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::OFF
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Install a global subscriber writing compact, human-readable events to
/// stderr. Fails if a global subscriber has already been set.
pub fn setup_logging(verbosity: &Verbosity) -> anyhow::Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();
    tracing_subscriber::registry()
        .with(level_filter(verbosity.verbose, verbosity.quiet))
        .with(stderr_layer)
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_from_flags() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(7, false), LevelFilter::TRACE);
        assert_eq!(level_filter(3, true), LevelFilter::OFF);
    }

    #[test]
    fn second_init_fails() {
        let v = Verbosity { verbose: 3, quiet: false };
        setup_logging(&v).unwrap();
        assert!(setup_logging(&v).is_err());
        tracing::trace!("logging initialized");
    }
}
