#![cfg(test)]
crate::reexport!(container);
crate::reexport!(context);
pub use rstest::*;

pub fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

/// What the schema highlighter gives back for `schema`: every line that is
/// only whitespace is emptied, line breaks stay.
pub fn blank_whitespace_lines(schema: &str) -> String {
    schema
        .split('\n')
        .map(|line| if line.trim().is_empty() { "" } else { line })
        .collect::<Vec<_>>()
        .join("\n")
}

mod fake_container_tests {
    use super::{super::*, *};

    #[test]
    fn hands_out_distinct_subscriptions() {
        let mut container = FakeContainer::default();
        let a = container.subscribe(EventSource::Scroll);
        let b = container.subscribe(EventSource::Scroll);
        assert_ne!(a, b);
        container.unsubscribe(a);
        assert_eq!(container.live(), vec![b]);
        assert_eq!(container.released(), 1);
    }

    #[rstest]
    #[case(ScrollGeometry::new(10.0, 5.0, 1.0))]
    #[case(ScrollGeometry::default())]
    fn reads_are_counted(#[case] geometry: ScrollGeometry) {
        let container = FakeContainer::new(geometry);
        assert_eq!(container.geometry(), geometry);
        assert_eq!(container.geometry(), geometry);
        assert_eq!(container.reads(), 2);
    }
}
