//! Tracing support.
//!
//! With the `tracing` feature enabled this re-exports the `tracing` macros the
//! crate logs with and provides a subscriber for tests and demos.  With the
//! feature disabled the same names expand to nothing, so call sites do not
//! need their own `cfg` attributes.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing::level_filters::LevelFilter;
    use tracing_subscriber::{
        Layer, Registry, fmt, layer::Context, layer::SubscriberExt, registry::LookupSpan,
        util::SubscriberInitExt,
    };

    thread_local! {
        static SPAN_TIMINGS: RefCell<BTreeMap<&'static str, (Duration, usize)>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    /// Accumulates the wall-clock time spent inside each span name on the
    /// current thread.
    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    SPAN_TIMINGS.with(|totals| {
                        let mut totals = totals.borrow_mut();
                        let entry = totals.entry(name).or_insert((Duration::ZERO, 0));
                        entry.0 += elapsed;
                        entry.1 += 1;
                    });
                }
            }
        }
    }

    /// Installs a global subscriber that prints `DEBUG` and above through the
    /// test writer and records span timings.  Safe to call repeatedly.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default()
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_filter(LevelFilter::DEBUG),
                )
                .with(TimingLayer)
                .try_init();
        });
    }

    /// Prints the span timings collected on this thread, slowest first.
    #[doc(hidden)]
    pub fn dump_span_timings() {
        SPAN_TIMINGS.with(|totals| {
            let totals = totals.borrow();
            let mut entries: Vec<_> = totals.iter().collect();
            entries.sort_by(|a, b| b.1.0.cmp(&a.1.0));
            eprintln!("span timings (desc):");
            for (name, (duration, count)) in entries {
                eprintln!("  {name}: {:?} ({}x)", duration, count);
            }
        });
    }

    #[doc(hidden)]
    pub fn reset_span_timings() {
        init_tracing();
        SPAN_TIMINGS.with(|totals| totals.borrow_mut().clear());
    }

    pub(crate) use tracing::{debug, info_span, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    #[doc(hidden)]
    pub fn dump_span_timings() {
        // No-op when tracing is disabled
    }

    #[doc(hidden)]
    pub fn reset_span_timings() {
        // No-op when tracing is disabled
    }

    macro_rules! info_span {
        ($($args:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    macro_rules! debug {
        ($($args:tt)*) => {{}};
    }

    macro_rules! trace {
        ($($args:tt)*) => {{}};
    }

    pub(crate) use debug;
    pub(crate) use info_span;
    pub(crate) use trace;

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub(crate) use enabled::{debug, info_span, trace};
#[cfg(feature = "tracing")]
pub use enabled::{dump_span_timings, init_tracing, reset_span_timings};

#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug, info_span, trace};
#[cfg(not(feature = "tracing"))]
pub use disabled::{NoOpSpan, NoOpSpanGuard, dump_span_timings, init_tracing, reset_span_timings};
