use super::*;

/// Everything the flows operate on, constructed once at startup and
/// passed explicitly — the registry and its projections never live in
/// process-wide state.
pub struct AppContext {
    pub registry: LocationRegistry,
    pub markers: MarkerProjection,
    pub store: Box<dyn LocationRepo>,
    pub map: Box<dyn MapWidgetGateway>,
    pub sidebar: Box<dyn SidebarGateway>,
}

impl AppContext {
    /// Sets the initial viewport, hydrates the registry from the store
    /// (failing open) and projects markers for every persisted entry.
    ///
    /// Hydration deliberately does not recenter onto the persisted
    /// entries: the viewport only moves for live additions.
    pub fn start(
        store: Box<dyn LocationRepo>,
        map: Box<dyn MapWidgetGateway>,
        sidebar: Box<dyn SidebarGateway>,
        viewport: Viewport,
    ) -> Self {
        map.set_viewport(viewport.center, viewport.zoom);
        let registry = usecases::load_locations(&*store);
        let mut markers = MarkerProjection::new();
        markers.sync(&*map, registry.all());
        if !registry.is_empty() {
            info!("Restored {} saved locations", registry.len());
        }
        Self {
            registry,
            markers,
            store,
            map,
            sidebar,
        }
    }

    /// Re-renders the sidebar from the current registry snapshot.
    pub fn render_sidebar(&self) {
        self.sidebar.render(&sidebar_view(self.registry.all()));
    }

    /// Persists the full registry snapshot.
    ///
    /// Storage write failures never escalate past this point; they are
    /// logged and the in-memory state stays authoritative.
    pub(crate) fn persist(&self) {
        if let Err(err) = self.store.save_locations(self.registry.all()) {
            error!("Failed to persist saved locations: {err}");
        }
    }
}
