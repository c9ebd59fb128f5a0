use crate::*;
use std::sync::Arc;
use test_context::TestContext;
pub use test_context::test_context;

/// An indicator mounted on a scrollable fake container (4x overflow, top).
/// Teardown unmounts and checks nothing leaked.
pub struct MountedIndicator {
    pub container: FakeContainer,
    pub indicator: ZigzagIndicator<FakeContainer>,
}

impl TestContext for MountedIndicator {
    fn setup() -> Self {
        crate::testing::common_init();
        let container = FakeContainer::new(ScrollGeometry::new(2000.0, 500.0, 0.0));
        let indicator =
            ZigzagIndicator::mount(Some(container.clone()), Arc::new(ZigzagPath::default()));
        Self {
            container,
            indicator,
        }
    }

    fn teardown(mut self) {
        self.indicator.unmount();
        assert!(
            self.container.live().is_empty(),
            "indicator leaked subscriptions"
        );
    }
}
