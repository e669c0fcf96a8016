/// Default command: walk the sequence and print each step.
use std::io::{self, Write};

use crate::cli::output::{write_counter, write_step};
use crate::errors::HailError;
use crate::sequence::Hailstone;
use crate::types::RunConfig;

/// Run the sequence walk described by `config`.
///
/// Prints the `counter:` header, then `|counter|` steps per pass. In loop mode
/// passes repeat until the process is interrupted or stdout is closed. A
/// closed pipe ends the run successfully.
///
/// # Errors
///
/// Returns `HailError::Io` on any other write failure.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<(), HailError> {
    match walk(config, out) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("stdout closed, stopping");
            Ok(())
        }
        result => result.map_err(HailError::from),
    }
}

fn walk<W: Write>(config: &RunConfig, out: &mut W) -> io::Result<()> {
    write_counter(out, config.counter)?;

    let steps = usize::try_from(config.steps_per_pass()).unwrap_or(usize::MAX);
    if steps == 0 {
        // An empty pass never prints anything, looping or not.
        return out.flush();
    }

    let mut sequence = Hailstone::new(config.start, config.direction());
    let mut pass: u64 = 0;
    loop {
        for value in sequence.by_ref().take(steps) {
            write_step(out, value, config.verbose)?;
        }
        pass += 1;
        log::trace!("pass {pass} complete");
        if !config.looping {
            break;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(config: RunConfig) -> String {
        let mut buf = Vec::new();
        run(&config, &mut buf).expect("run");
        String::from_utf8(buf).expect("utf8")
    }

    /// Accepts a fixed number of lines, then fails every write with `kind`.
    struct LineLimit {
        buf: Vec<u8>,
        lines_left: usize,
        kind: io::ErrorKind,
    }

    impl LineLimit {
        fn new(lines: usize, kind: io::ErrorKind) -> Self {
            Self {
                buf: Vec::new(),
                lines_left: lines,
                kind,
            }
        }
    }

    impl Write for LineLimit {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            if self.lines_left == 0 {
                return Err(io::Error::from(self.kind));
            }
            self.buf.extend_from_slice(data);
            self.lines_left -= data.iter().filter(|&&b| b == b'\n').count();
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_run() {
        assert_eq!(output(RunConfig::default()), "counter: 1\n04\n");
    }

    #[test]
    fn test_forward_steps() {
        let config = RunConfig {
            start: 7,
            counter: 5,
            ..RunConfig::default()
        };
        assert_eq!(output(config), "counter: 5\n22\n11\n34\n17\n52\n");
    }

    #[test]
    fn test_backward_step() {
        let config = RunConfig {
            start: 8,
            counter: -1,
            ..RunConfig::default()
        };
        assert_eq!(output(config), "counter: -1\n02\n");
    }

    #[test]
    fn test_zero_counter_prints_header_only() {
        let config = RunConfig {
            counter: 0,
            ..RunConfig::default()
        };
        assert_eq!(output(config), "counter: 0\n");
    }

    #[test]
    fn test_zero_counter_with_loop_terminates() {
        let config = RunConfig {
            counter: 0,
            looping: true,
            ..RunConfig::default()
        };
        assert_eq!(output(config), "counter: 0\n");
    }

    #[test]
    fn test_verbose_bars() {
        let config = RunConfig {
            start: 5,
            counter: 2,
            verbose: true,
            ..RunConfig::default()
        };
        assert_eq!(
            output(config),
            "counter: 2\n16\t****************\n08\t********\n"
        );
    }

    #[test]
    fn test_verbose_negative_value() {
        let config = RunConfig {
            start: -1,
            counter: 1,
            verbose: true,
            ..RunConfig::default()
        };
        assert_eq!(output(config), "counter: 1\n-2\t\n");
    }

    #[test]
    fn test_loop_carries_value_across_passes() {
        let config = RunConfig {
            counter: 2,
            looping: true,
            ..RunConfig::default()
        };
        let mut out = LineLimit::new(7, io::ErrorKind::BrokenPipe);
        assert!(run(&config, &mut out).is_ok());
        assert_eq!(
            String::from_utf8(out.buf).expect("utf8"),
            "counter: 2\n04\n02\n01\n04\n02\n01\n"
        );
    }

    #[test]
    fn test_write_failure_is_reported() {
        let config = RunConfig {
            counter: 3,
            ..RunConfig::default()
        };
        let mut out = LineLimit::new(2, io::ErrorKind::Other);
        match run(&config, &mut out) {
            Err(HailError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::Other),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
