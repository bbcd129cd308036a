//! Timed side-by-side comparison of a scalar and a lane-packed kernel.

use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::hint::black_box;
use std::panic::{self, catch_unwind, AssertUnwindSafe};
use std::sync::Once;
use std::time::Duration;

use super::timing::Stopwatch;
use crate::error::BenchError;

thread_local! {
    /// Set while this thread is inside a comparison's `catch_unwind`.
    static CONTAINING: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Wrap the process panic hook once so panics raised inside a comparison
/// skip the default stderr report; they are reported by the runner instead.
/// Panics on other threads, or outside a comparison, still reach the
/// previous hook.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if CONTAINING.with(Cell::get) {
                log::debug!("kernel panic at {:?}", info.location());
            } else {
                previous(info);
            }
        }));
    });
}

/// A kernel reads its whole input array and overwrites its output array.
pub type Kernel<T, R> = fn(&[T], &mut [R]);

/// One code path of a comparison: input, pre-allocated output, kernel.
pub struct Side<'a, T, R> {
    pub input: &'a [T],
    pub output: &'a mut [R],
    pub kernel: Kernel<T, R>,
}

impl<'a, T, R> Side<'a, T, R> {
    pub fn new(input: &'a [T], output: &'a mut [R], kernel: Kernel<T, R>) -> Self {
        Self {
            input,
            output,
            kernel,
        }
    }

    #[inline]
    fn run(&mut self) {
        (self.kernel)(self.input, self.output);
        black_box(&mut *self.output);
    }
}

/// Accumulated time for one path.
#[derive(Debug, Clone, Copy)]
pub struct PathTiming {
    pub elapsed: Duration,
    pub input_len: usize,
}

impl PathTiming {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ComparisonReport {
    pub iterations: usize,
    pub scalar: PathTiming,
    pub simd: PathTiming,
}

impl ComparisonReport {
    /// Scalar time over lane-packed time; above 1.0 means the lanes won.
    pub fn speedup(&self) -> f64 {
        let simd = self.simd.elapsed.as_secs_f64();
        if simd > 0.0 {
            self.scalar.elapsed.as_secs_f64() / simd
        } else {
            f64::INFINITY
        }
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  scalar took {:>9.1} msec with {:>9} input elements and {} iterations",
            self.scalar.elapsed_ms(),
            self.scalar.input_len,
            self.iterations
        )?;
        writeln!(
            f,
            "  simd   took {:>9.1} msec with {:>9} input elements and {} iterations",
            self.simd.elapsed_ms(),
            self.simd.input_len,
            self.iterations
        )?;
        write!(f, "  speedup {:.2}x", self.speedup())
    }
}

/// Time `iterations` rounds of the scalar kernel then the lane-packed
/// kernel, each on its own stopwatch, and print the totals.
///
/// A panic in either kernel is caught here: it is logged and printed, and
/// the comparison returns [`BenchError::KernelPanicked`] instead of
/// unwinding into the caller.
pub fn run_comparison<T0, R0, T1, R1>(
    iterations: usize,
    mut scalar: Side<'_, T0, R0>,
    mut simd: Side<'_, T1, R1>,
) -> Result<ComparisonReport, BenchError> {
    let mut scalar_sw = Stopwatch::new();
    let mut simd_sw = Stopwatch::new();

    install_quiet_hook();
    CONTAINING.with(|c| c.set(true));
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        for _ in 0..iterations {
            scalar_sw.time(|| scalar.run());
            simd_sw.time(|| simd.run());
        }
    }));
    CONTAINING.with(|c| c.set(false));

    match outcome {
        Ok(()) => {
            let report = ComparisonReport {
                iterations,
                scalar: PathTiming {
                    elapsed: scalar_sw.elapsed(),
                    input_len: scalar.input.len(),
                },
                simd: PathTiming {
                    elapsed: simd_sw.elapsed(),
                    input_len: simd.input.len(),
                },
            };
            println!("{}", report);
            Ok(report)
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            log::error!(
                "comparison aborted after {} scalar / {} simd runs: {}",
                scalar_sw.laps(),
                simd_sw.laps(),
                message
            );
            println!("Error occurred: {}", message);
            Err(BenchError::KernelPanicked { message })
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(input: &[f32], output: &mut [f32]) {
        for (o, i) in output.iter_mut().zip(input) {
            *o = i * 2.0;
        }
    }

    fn first_to_all(input: &[f32], output: &mut [f32]) {
        let first = input[0];
        output.fill(first);
    }

    #[test]
    fn test_reports_lengths_and_iterations() {
        let a = vec![1.0f32; 64];
        let b = vec![3.0f32; 8];
        let mut out_a = vec![0.0f32; 64];
        let mut out_b = vec![0.0f32; 8];

        let report = run_comparison(
            5,
            Side::new(&a, &mut out_a, double),
            Side::new(&b, &mut out_b, double),
        )
        .unwrap();

        assert_eq!(report.iterations, 5);
        assert_eq!(report.scalar.input_len, 64);
        assert_eq!(report.simd.input_len, 8);
        assert!(out_a.iter().all(|&v| v == 2.0));
        assert!(out_b.iter().all(|&v| v == 6.0));
    }

    #[test]
    fn test_panic_is_contained() {
        let empty: Vec<f32> = Vec::new();
        let b = vec![1.0f32; 8];
        let mut out_a = vec![0.0f32; 1];
        let mut out_b = vec![0.0f32; 8];

        let result = run_comparison(
            3,
            Side::new(&empty, &mut out_a, first_to_all),
            Side::new(&b, &mut out_b, double),
        );

        match result {
            Err(BenchError::KernelPanicked { message }) => {
                assert!(message.contains("index out of bounds"), "{}", message);
            }
            other => panic!("expected KernelPanicked, got {:?}", other),
        }
        // The scalar side failed on the first round, so the lanes never ran.
        assert!(out_b.iter().all(|&v| v == 0.0));
        // Panics after the comparison go back to the normal hook.
        assert!(!CONTAINING.with(Cell::get));
    }

    #[test]
    fn test_containment_flag_only_set_during_comparison() {
        let a = vec![1.0f32; 8];
        let mut out_a = vec![0.0f32; 8];
        let mut out_b = vec![0.0f32; 8];
        assert!(!CONTAINING.with(Cell::get));
        run_comparison(
            1,
            Side::new(&a, &mut out_a, double),
            Side::new(&a, &mut out_b, double),
        )
        .unwrap();
        assert!(!CONTAINING.with(Cell::get));

        // A panic outside a comparison is still caught normally.
        let result = catch_unwind(|| panic!("outside"));
        assert!(result.is_err());
    }

    #[test]
    fn test_panic_message_payloads() {
        let s: Box<dyn Any + Send> = Box::new("static str");
        assert_eq!(panic_message(s.as_ref()), "static str");
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(owned.as_ref()), "owned");
        let other: Box<dyn Any + Send> = Box::new(17u32);
        assert_eq!(panic_message(other.as_ref()), "unknown panic payload");
    }
}
