use crate::indicator::{
    geometry::{ScrollGeometry, ThumbStroke},
    path::ZigzagPath,
};
use crate::render::Element;
use crate::*;
use std::sync::Arc;

/// Changes that can move or resize the observed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum EventSource {
    /// The container scrolled.
    #[display("scroll")]
    Scroll,
    /// The viewport was resized.
    #[display("resize")]
    Resize,
    /// Descendants of the container were added, removed or replaced.
    #[display("mutation")]
    Mutation,
}

impl EventSource {
    pub const ALL: [Self; 3] = [EventSource::Scroll, EventSource::Resize, EventSource::Mutation];
}

/// Registration handle returned by a [`ScrollContainer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    pub source: EventSource,
    pub id: u64,
}

/// Host side of a scrollable element.
///
/// The indicator only reads geometry and manages its own listener
/// registrations; it never scrolls or lays out the container.
pub trait ScrollContainer {
    fn geometry(&self) -> ScrollGeometry;

    /// Start delivering `source` events to the indicator.
    fn subscribe(&mut self, source: EventSource) -> Subscription;

    fn unsubscribe(&mut self, subscription: Subscription);
}

/// Visibility of the indicator, derived from consecutive geometry readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum IndicatorState {
    /// Content fits its viewport, or nothing is mounted.
    #[default]
    Hidden,
    /// Scrollable, at the top or not moving.
    Idle,
    /// Scrollable and the offset changed since the previous reading.
    Tracking,
}

/// Scroll-synchronized zigzag thumb.
///
/// Mounting with a container subscribes to scroll, resize and subtree
/// mutation; each delivered event re-reads the container and re-derives the
/// thumb. Unmounting, explicitly or on drop, releases all three
/// subscriptions and ignores later events. Without a container nothing is
/// subscribed and nothing renders.
///
/// Handlers are idempotent: the same geometry always yields the same thumb.
#[derive(Debug)]
pub struct ZigzagIndicator<C: ScrollContainer> {
    container: Option<C>,
    path: Arc<ZigzagPath>,
    subscriptions: Vec<Subscription>,
    geometry: Option<ScrollGeometry>,
    thumb: Option<ThumbStroke>,
    state: IndicatorState,
}

impl<C: ScrollContainer> ZigzagIndicator<C> {
    pub fn mount(container: Option<C>, path: Arc<ZigzagPath>) -> Self {
        let mut indicator = Self {
            container,
            path,
            subscriptions: Vec::new(),
            geometry: None,
            thumb: None,
            state: IndicatorState::Hidden,
        };

        let Some(container) = indicator.container.as_mut() else {
            debug!("No scroll container; zigzag indicator stays hidden");
            return indicator;
        };
        indicator.subscriptions = EventSource::ALL
            .into_iter()
            .map(|source| container.subscribe(source))
            .collect();
        debug!(
            "Zigzag indicator mounted with {} subscriptions",
            indicator.subscriptions.len()
        );
        indicator.update();
        indicator
    }

    /// Handle one delivered event. Events from sources the indicator is not
    /// subscribed to, including everything after unmount, are ignored.
    pub fn notify(&mut self, source: EventSource) -> IndicatorState {
        if !self.subscriptions.iter().any(|s| s.source == source) {
            trace!("Ignoring {source} event for unsubscribed zigzag indicator");
            return self.state;
        }
        self.update()
    }

    /// Re-read the container without an event, e.g. after the host swapped
    /// content it cannot report as a subtree mutation.
    pub fn invalidate(&mut self) -> IndicatorState {
        if !self.is_mounted() {
            return self.state;
        }
        self.update()
    }

    /// Release every subscription. Idempotent.
    pub fn unmount(&mut self) {
        let Some(container) = self.container.as_mut() else {
            return;
        };
        if self.subscriptions.is_empty() {
            return;
        }
        for subscription in self.subscriptions.drain(..) {
            container.unsubscribe(subscription);
        }
        self.thumb = None;
        self.state = IndicatorState::Hidden;
        debug!("Zigzag indicator unmounted");
    }

    /// Unmount and hand the container back.
    pub fn into_container(mut self) -> Option<C> {
        self.unmount();
        self.container.take()
    }

    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn state(&self) -> IndicatorState {
        self.state
    }

    pub fn thumb(&self) -> Option<ThumbStroke> {
        self.thumb
    }

    pub fn geometry(&self) -> Option<ScrollGeometry> {
        self.geometry
    }

    pub fn path(&self) -> &ZigzagPath {
        &self.path
    }

    fn update(&mut self) -> IndicatorState {
        let Some(container) = self.container.as_ref() else {
            return self.state;
        };
        let geometry = container.geometry();
        let thumb = ThumbStroke::new(&geometry, self.path.total_length());

        let moved = self
            .geometry
            .is_some_and(|prev| prev.is_scrollable() && prev.scroll_offset != geometry.scroll_offset);
        self.state = match thumb {
            None => IndicatorState::Hidden,
            Some(_) if moved && geometry.scroll_offset != 0.0 => IndicatorState::Tracking,
            Some(_) => IndicatorState::Idle,
        };
        self.geometry = Some(geometry);
        self.thumb = thumb;
        self.state
    }

    /// The overlay markup, or `None` while hidden.
    ///
    /// ```text
    /// <div class="zigzag-scrollbar">
    ///   <svg viewBox="0 0 W H" preserveAspectRatio="none">
    ///     <path d="..." class="zigzag-track"></path>
    ///     <path d="..." class="zigzag-thumb" stroke-dasharray=".." stroke-dashoffset=".."></path>
    ///   </svg>
    /// </div>
    /// ```
    pub fn render(&self) -> Option<Element> {
        let thumb = self.thumb?;
        let d = self.path.d();
        let track = Element::new("path")
            .with_attr("d", d.clone())
            .with_class("zigzag-track");
        let thumb = Element::new("path")
            .with_attr("d", d)
            .with_class("zigzag-thumb")
            .with_attr("stroke-dasharray", thumb.dash_array())
            .with_attr("stroke-dashoffset", thumb.dash_offset());
        let svg = Element::new("svg")
            .with_attr("viewBox", self.path.view_box())
            .with_attr("preserveAspectRatio", "none")
            .with_child(track)
            .with_child(thumb);
        Some(
            Element::new("div")
                .with_class("zigzag-scrollbar")
                .with_child(svg),
        )
    }
}

impl<C: ScrollContainer> Drop for ZigzagIndicator<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng as _;

    fn path() -> Arc<ZigzagPath> {
        Arc::new(ZigzagPath::default())
    }

    #[test]
    fn absent_container_renders_nothing() {
        common_init();
        let mut indicator = ZigzagIndicator::<FakeContainer>::mount(None, path());
        assert!(!indicator.is_mounted());
        assert_eq!(indicator.notify(EventSource::Scroll), IndicatorState::Hidden);
        assert_eq!(indicator.invalidate(), IndicatorState::Hidden);
        assert!(indicator.render().is_none());
        assert!(indicator.into_container().is_none());
    }

    #[test]
    fn subscribes_to_all_three_sources() {
        let container = FakeContainer::new(ScrollGeometry::new(2000.0, 500.0, 0.0));
        let indicator = ZigzagIndicator::mount(Some(container.clone()), path());
        let mut sources: Vec<_> = container.live().into_iter().map(|s| s.source).collect();
        sources.sort_by_key(|s| s.to_string());
        assert_eq!(
            sources,
            [EventSource::Mutation, EventSource::Resize, EventSource::Scroll]
        );
        drop(indicator);
        assert!(container.live().is_empty());
    }

    #[test]
    fn renders_scenario_overlay() {
        let container = FakeContainer::new(ScrollGeometry::new(2000.0, 500.0, 500.0));
        let indicator = ZigzagIndicator::mount(Some(container), path());
        let overlay = indicator.render().unwrap();
        assert_eq!(overlay.class(), Some("zigzag-scrollbar"));

        let svg = overlay.elements().next().unwrap();
        assert_eq!(svg.attr("viewBox"), Some("0 0 20 1000"));
        assert_eq!(svg.attr("preserveAspectRatio"), Some("none"));

        let paths: Vec<_> = svg.elements().collect();
        assert_eq!(paths[0].class(), Some("zigzag-track"));
        assert_eq!(paths[1].class(), Some("zigzag-thumb"));
        assert_eq!(paths[0].attr("d"), paths[1].attr("d"));

        let thumb = indicator.thumb().unwrap();
        assert_eq!(
            paths[1].attr("stroke-dasharray"),
            Some(format!("{} {}", thumb.length, thumb.total).as_str())
        );
        assert!(paths[1].attr("stroke-dashoffset").unwrap().starts_with("-261.0"));
    }

    #[test]
    fn hides_when_content_fits() {
        let container = FakeContainer::new(ScrollGeometry::new(500.0, 500.0, 0.0));
        let mut indicator = ZigzagIndicator::mount(Some(container.clone()), path());
        assert_eq!(indicator.state(), IndicatorState::Hidden);
        assert!(indicator.render().is_none());
        for source in EventSource::ALL {
            assert_eq!(indicator.notify(source), IndicatorState::Hidden);
        }
        assert!(indicator.render().is_none());
    }

    #[test]
    fn late_content_reveals_indicator() {
        let container = FakeContainer::new(ScrollGeometry::new(400.0, 500.0, 0.0));
        let mut indicator = ZigzagIndicator::mount(Some(container.clone()), path());
        assert_eq!(indicator.state(), IndicatorState::Hidden);

        container.set(ScrollGeometry::new(3000.0, 500.0, 0.0));
        assert_eq!(indicator.notify(EventSource::Mutation), IndicatorState::Idle);
        assert!(indicator.render().is_some());
    }

    #[test]
    fn scrolling_tracks_then_settles() {
        let container = FakeContainer::new(ScrollGeometry::new(2000.0, 500.0, 0.0));
        let mut indicator = ZigzagIndicator::mount(Some(container.clone()), path());
        assert_eq!(indicator.state(), IndicatorState::Idle);

        container.scroll_to(300.0);
        assert_eq!(indicator.notify(EventSource::Scroll), IndicatorState::Tracking);
        assert_eq!(indicator.notify(EventSource::Scroll), IndicatorState::Idle);

        container.scroll_to(0.0);
        assert_eq!(indicator.notify(EventSource::Scroll), IndicatorState::Idle);
    }

    #[test]
    fn resize_never_flickers_through_tracking() {
        let container = FakeContainer::new(ScrollGeometry::new(2000.0, 500.0, 700.0));
        let mut indicator = ZigzagIndicator::mount(Some(container.clone()), path());

        container.set(ScrollGeometry::new(2000.0, 2500.0, 0.0));
        assert_eq!(indicator.notify(EventSource::Resize), IndicatorState::Hidden);
        container.set(ScrollGeometry::new(2000.0, 500.0, 700.0));
        assert_eq!(indicator.notify(EventSource::Resize), IndicatorState::Idle);
    }

    #[test]
    fn identical_geometry_is_idempotent() {
        let mut rng = rand::rng();
        let container = FakeContainer::new(ScrollGeometry::default());
        let mut indicator = ZigzagIndicator::mount(Some(container.clone()), path());

        for _ in 0..200 {
            let viewport: f64 = rng.random_range(1.0..2_000.0);
            let content = viewport + rng.random_range(-500.0..10_000.0);
            let offset = rng.random_range(0.0..content.max(1.0));
            container.set(ScrollGeometry::new(content, viewport, offset));

            indicator.notify(EventSource::Scroll);
            let first = (indicator.thumb(), indicator.render());
            indicator.notify(EventSource::Resize);
            indicator.invalidate();
            assert_eq!((indicator.thumb(), indicator.render()), first);
        }
    }

    #[test]
    fn no_updates_after_unmount() {
        let container = FakeContainer::new(ScrollGeometry::new(2000.0, 500.0, 0.0));
        let mut indicator = ZigzagIndicator::mount(Some(container.clone()), path());
        indicator.unmount();
        assert!(container.live().is_empty());

        let reads = container.reads();
        container.scroll_to(900.0);
        assert_eq!(indicator.notify(EventSource::Scroll), IndicatorState::Hidden);
        assert_eq!(indicator.invalidate(), IndicatorState::Hidden);
        assert_eq!(container.reads(), reads);
        assert!(indicator.render().is_none());

        indicator.unmount();
        assert_eq!(container.released(), 3);
    }

    #[test_context(MountedIndicator)]
    #[test]
    fn context_mounts_live_indicator(ctx: &mut MountedIndicator) {
        assert!(ctx.indicator.is_mounted());
        assert_eq!(ctx.container.live().len(), 3);
        ctx.container.scroll_to(ctx.container.geometry().max_scroll());
        ctx.indicator.notify(EventSource::Scroll);
        let thumb = ctx.indicator.thumb().unwrap();
        assert!((thumb.offset + thumb.length - thumb.total).abs() < 1e-9);
    }
}
