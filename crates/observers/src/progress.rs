//! Line-per-iteration progress output.

use std::io::{self, Write};

use steepest_core::Observer;
use steepest_solvers::least_squares::gradient_descent::Event;

/// Writes one progress line per gradient descent event.
///
/// Each [`Event::Iterate`] and the final [`Event::Finished`] produce a line of
/// the form
///
/// ```text
/// [0042]: x[0.684308, 0.038941, -0.522305]; F(x) = 0.099852
/// ```
///
/// with the iteration index padded to four digits and every value printed
/// with six decimals.
///
/// Write failures do not interrupt the solver. The first failure is kept and
/// returned by [`finish`](Self::finish); later lines are skipped.
#[derive(Debug)]
pub struct ProgressPrinter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl ProgressPrinter<io::Stdout> {
    /// Creates a printer that writes to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ProgressPrinter<W> {
    /// Creates a printer that writes to `out`.
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flushes the writer and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first write error encountered while observing, or the
    /// flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_line<const N: usize>(&mut self, iter: usize, x: &[f64; N], objective: f64) {
        if self.error.is_some() {
            return;
        }
        let components = x
            .iter()
            .map(|xi| format!("{xi:.6}"))
            .collect::<Vec<_>>()
            .join(", ");
        if let Err(err) = writeln!(
            self.out,
            "[{iter:04}]: x[{components}]; F(x) = {objective:.6}"
        ) {
            self.error = Some(err);
        }
    }
}

impl<W: Write, A, const N: usize> Observer<Event<N>, A> for ProgressPrinter<W> {
    fn observe(&mut self, event: &Event<N>) -> Option<A> {
        self.write_line(event.iter(), event.x(), event.objective());
        None
    }
}

/// Allows `&mut ProgressPrinter` to be passed to solvers that take an observer
/// by value, so [`ProgressPrinter::finish`] can be called after the solve.
impl<W: Write, A, const N: usize> Observer<Event<N>, A> for &mut ProgressPrinter<W> {
    fn observe(&mut self, event: &Event<N>) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use steepest_solvers::least_squares::gradient_descent::Status;

    fn feed<W: Write>(printer: &mut ProgressPrinter<W>, event: Event<3>) {
        let _: Option<()> = printer.observe(&event);
    }

    fn output(printer: ProgressPrinter<Vec<u8>>) -> String {
        String::from_utf8(printer.finish().expect("vec writes cannot fail")).unwrap()
    }

    #[test]
    fn formats_iterate_and_finished_lines() {
        let mut printer = ProgressPrinter::new(Vec::new());

        feed(
            &mut printer,
            Event::Iterate {
                iter: 0,
                x: [0.0, 0.0, 0.0],
                objective: 58.456_136_2,
                gradient: [1.0, 2.0, 3.0],
            },
        );
        feed(
            &mut printer,
            Event::Finished {
                iter: 1861,
                x: [0.684_307_8, 0.038_940_8, -0.522_304_6],
                objective: 0.099_851_6,
                status: Status::Converged,
            },
        );

        assert_eq!(
            output(printer),
            "[0000]: x[0.000000, 0.000000, 0.000000]; F(x) = 58.456136\n\
             [1861]: x[0.684308, 0.038941, -0.522305]; F(x) = 0.099852\n"
        );
    }

    #[test]
    fn indices_wider_than_four_digits_are_not_truncated() {
        let mut printer = ProgressPrinter::new(Vec::new());
        feed(
            &mut printer,
            Event::Finished {
                iter: 100_000,
                x: [1.0, -1.0, 0.5],
                objective: 2.0,
                status: Status::MaxIters,
            },
        );

        assert_eq!(
            output(printer),
            "[100000]: x[1.000000, -1.000000, 0.500000]; F(x) = 2.000000\n"
        );
    }

    /// A writer that always fails.
    #[derive(Debug)]
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_surface_on_finish() {
        let mut printer = ProgressPrinter::new(Broken);
        feed(
            &mut printer,
            Event::Finished {
                iter: 1,
                x: [0.0; 3],
                objective: 0.0,
                status: Status::Converged,
            },
        );

        let err = printer.finish().unwrap_err();
        assert_eq!(err.to_string(), "broken pipe");
    }
}
