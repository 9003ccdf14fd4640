// Application-level scenario tests: flows wired to recording in-memory
// doubles for the store and both render targets.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use gmk_core::{
    projections::{markers::FOCUS_ZOOM, sidebar::SidebarEntry},
    repositories::Error as RepoError,
    usecases::Error as ParameterError,
};

use crate::{
    error::{AppError, BError},
    prelude::*,
    *,
};

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct StoreState {
    pub locations: RefCell<Vec<Location>>,
    pub deleted: Cell<bool>,
    pub save_count: Cell<u32>,
}

#[derive(Default, Clone)]
pub struct SharedStore(pub Rc<StoreState>);

impl LocationRepo for SharedStore {
    fn load_locations(&self) -> RepoResult<Vec<Location>> {
        Ok(self.0.locations.borrow().clone())
    }

    fn save_locations(&self, locations: &[Location]) -> RepoResult<()> {
        *self.0.locations.borrow_mut() = locations.to_vec();
        self.0.save_count.set(self.0.save_count.get() + 1);
        self.0.deleted.set(false);
        Ok(())
    }

    fn delete_locations(&self) -> RepoResult<()> {
        self.0.locations.borrow_mut().clear();
        self.0.deleted.set(true);
        Ok(())
    }
}

#[derive(Default)]
pub struct MapState {
    pub created: RefCell<Vec<(MapPoint, String)>>,
    pub destroyed: RefCell<Vec<MarkerHandle>>,
    pub viewport: Cell<Option<(MapPoint, ZoomLevel)>>,
    pub popups: RefCell<Vec<(MarkerHandle, Location)>>,
    next_handle: Cell<u64>,
}

#[derive(Default, Clone)]
pub struct SharedMap(pub Rc<MapState>);

impl MapWidgetGateway for SharedMap {
    fn create_marker(&self, pos: MapPoint, label: &str) -> MarkerHandle {
        let n = self.0.next_handle.get();
        self.0.next_handle.set(n + 1);
        self.0.created.borrow_mut().push((pos, label.to_string()));
        MarkerHandle::from(format!("marker-{n}"))
    }

    fn destroy_marker(&self, handle: &MarkerHandle) {
        self.0.destroyed.borrow_mut().push(handle.clone());
    }

    fn set_viewport(&self, center: MapPoint, zoom: ZoomLevel) {
        self.0.viewport.set(Some((center, zoom)));
    }

    fn show_location_popup(&self, handle: &MarkerHandle, location: &Location) {
        self.0
            .popups
            .borrow_mut()
            .push((handle.clone(), location.clone()));
    }
}

#[derive(Default, Clone)]
pub struct SharedSidebar(pub Rc<RefCell<Vec<Vec<SidebarEntry>>>>);

impl SharedSidebar {
    fn last(&self) -> Option<Vec<SidebarEntry>> {
        self.0.borrow().last().cloned()
    }
}

impl SidebarGateway for SharedSidebar {
    fn render(&self, entries: &[SidebarEntry]) {
        self.0.borrow_mut().push(entries.to_vec());
    }
}

pub struct Decide(pub bool);

impl ConfirmationGateway for Decide {
    fn confirm(&self, _: &str) -> bool {
        self.0
    }
}

#[derive(Default, Clone)]
pub struct RecordingSearch(pub Rc<Cell<bool>>);

impl PlaceSearchGateway for RecordingSearch {
    fn clear_input_field(&self) {
        self.0.set(true);
    }
}

pub const INITIAL_CENTER: (f64, f64) = (-3.1, -60.02);
pub const INITIAL_ZOOM: u8 = 12;

pub struct Fixture {
    pub ctx: AppContext,
    pub store: SharedStore,
    pub map: SharedMap,
    pub sidebar: SharedSidebar,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_persisted(vec![])
    }

    pub fn with_persisted(locations: Vec<Location>) -> Self {
        let store = SharedStore::default();
        *store.0.locations.borrow_mut() = locations;
        let map = SharedMap::default();
        let sidebar = SharedSidebar::default();
        let viewport = Viewport {
            center: MapPoint::from_lat_lng_deg(INITIAL_CENTER.0, INITIAL_CENTER.1),
            zoom: ZoomLevel::new(INITIAL_ZOOM),
        };
        let ctx = AppContext::start(
            Box::new(store.clone()),
            Box::new(map.clone()),
            Box::new(sidebar.clone()),
            viewport,
        );
        Self {
            ctx,
            store,
            map,
            sidebar,
        }
    }

    /// Registry, marker projection and persisted snapshot must describe
    /// the same multiset of positions after every mutation.
    fn assert_in_sync(&self) {
        let mut registry: Vec<MapPoint> = self.ctx.registry.all().iter().map(|l| l.pos).collect();
        for pos in self.ctx.markers.positions() {
            let idx = registry
                .iter()
                .position(|p| *p == pos)
                .expect("marker without registry entry");
            registry.remove(idx);
        }
        assert!(registry.is_empty(), "registry entry without marker");
        assert_eq!(
            self.store.0.locations.borrow().as_slice(),
            self.ctx.registry.all()
        );
    }
}

fn loc(lat: f64, lng: f64, description: &str) -> Location {
    Location {
        pos: MapPoint::from_lat_lng_deg(lat, lng),
        description: description.into(),
    }
}

fn new_location(lat: f64, lng: f64, description: &str) -> usecases::NewLocation {
    usecases::NewLocation {
        lat,
        lng,
        description: description.into(),
    }
}

#[test]
fn add_first_location() {
    // Scenario: empty registry, one live addition.
    let mut fix = Fixture::new();
    let location = add_location(&mut fix.ctx, new_location(-3.1, -60.02, "Office")).unwrap();
    assert_eq!(location.description.as_str(), "Office");
    assert_eq!(fix.ctx.registry.len(), 1);
    assert_eq!(fix.ctx.markers.len(), 1);
    assert_eq!(
        fix.map.0.viewport.get(),
        Some((MapPoint::from_lat_lng_deg(-3.1, -60.02), FOCUS_ZOOM))
    );
    fix.assert_in_sync();
}

#[test]
fn remove_one_of_two_locations() {
    let mut fix = Fixture::with_persisted(vec![loc(1.0, 1.0, "A"), loc(2.0, 2.0, "B")]);
    assert!(remove_location(&mut fix.ctx, 1.0, 1.0).unwrap());
    assert_eq!(fix.ctx.registry.all(), &[loc(2.0, 2.0, "B")]);
    // Exactly the (1,1) marker was destroyed; the (2,2) marker survived.
    assert_eq!(fix.map.0.destroyed.borrow().len(), 1);
    assert_eq!(
        fix.ctx.markers.positions().collect::<Vec<_>>(),
        vec![MapPoint::from_lat_lng_deg(2.0, 2.0)]
    );
    fix.assert_in_sync();
}

#[test]
fn remove_without_match_changes_nothing() {
    let mut fix = Fixture::with_persisted(vec![loc(1.0, 1.0, "A")]);
    assert!(!remove_location(&mut fix.ctx, 9.0, 9.0).unwrap());
    assert_eq!(fix.store.0.save_count.get(), 0);
    assert_eq!(fix.ctx.registry.len(), 1);
    assert_eq!(fix.ctx.markers.len(), 1);
}

#[test]
fn remove_with_duplicates_takes_the_first_entry() {
    let mut fix = Fixture::with_persisted(vec![
        loc(1.0, 1.0, "first"),
        loc(1.0, 1.0, "second"),
        loc(2.0, 2.0, "other"),
    ]);
    assert!(remove_location(&mut fix.ctx, 1.0, 1.0).unwrap());
    assert_eq!(
        fix.ctx.registry.all(),
        &[loc(1.0, 1.0, "second"), loc(2.0, 2.0, "other")]
    );
    fix.assert_in_sync();
}

#[test]
fn clear_empties_registry_and_deletes_the_key() {
    let mut fix = Fixture::with_persisted(vec![loc(1.0, 1.0, "A"), loc(2.0, 2.0, "B")]);
    clear_locations(&mut fix.ctx);
    // Two distinct post-conditions: nothing in memory, and the durable
    // key is gone (not rewritten as an empty array).
    assert_eq!(fix.ctx.registry.all().len(), 0);
    assert!(fix.store.0.deleted.get());
    assert!(fix.ctx.markers.is_empty());
    assert_eq!(fix.sidebar.last().unwrap().len(), 0);
}

#[test]
fn hydration_projects_markers_without_recentering() {
    let fix = Fixture::with_persisted(vec![loc(1.0, 1.0, "A"), loc(2.0, 2.0, "B")]);
    assert_eq!(fix.ctx.registry.len(), 2);
    assert_eq!(fix.ctx.markers.len(), 2);
    // The viewport still shows the configured start region, not one of
    // the persisted entries.
    assert_eq!(
        fix.map.0.viewport.get(),
        Some((
            MapPoint::from_lat_lng_deg(INITIAL_CENTER.0, INITIAL_CENTER.1),
            ZoomLevel::new(INITIAL_ZOOM)
        ))
    );
}

#[test]
fn export_writes_the_persisted_schema() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.json");
    let mut fix = Fixture::new();
    add_location(&mut fix.ctx, new_location(-3.1, -60.02, "Office")).unwrap();
    add_location(&mut fix.ctx, new_location(2.0, 2.0, "")).unwrap();
    let path = export_locations(&fix.ctx, Some(target.as_path())).unwrap();
    let json = std::fs::read_to_string(path).unwrap();
    let records: Vec<gmk_boundary::SavedLocation> = serde_json::from_str(&json).unwrap();
    assert_eq!(records.len(), 2);
    for (record, location) in records.into_iter().zip(fix.ctx.registry.all()) {
        assert_eq!(record.lat, location.pos.lat().to_deg());
        assert_eq!(record.lng, location.pos.lng().to_deg());
        assert_eq!(record.description, location.description.as_str());
    }
}

#[test]
fn export_of_empty_registry_produces_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.json");
    let fix = Fixture::new();
    let err = export_locations(&fix.ctx, Some(target.as_path())).unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(ParameterError::EmptyRegistry))
    ));
    assert!(!target.exists());
}

#[test]
fn confirmed_place_selection_commits_and_clears_the_search() {
    let mut fix = Fixture::new();
    let search = RecordingSearch::default();
    let selection = SelectedPlace {
        lat: -3.1,
        lng: -60.02,
        formatted_address: "Av. Eduardo Ribeiro, Manaus".into(),
    };
    let added = handle_place_selection(&mut fix.ctx, selection, &Decide(true), &search)
        .unwrap()
        .unwrap();
    assert_eq!(added.description.as_str(), "Av. Eduardo Ribeiro, Manaus");
    assert!(search.0.get());
    assert_eq!(
        fix.map.0.viewport.get(),
        Some((MapPoint::from_lat_lng_deg(-3.1, -60.02), FOCUS_ZOOM))
    );
    fix.assert_in_sync();
}

#[test]
fn declined_place_selection_is_a_no_op() {
    let mut fix = Fixture::new();
    let search = RecordingSearch::default();
    let selection = SelectedPlace {
        lat: -3.1,
        lng: -60.02,
        formatted_address: "Av. Eduardo Ribeiro, Manaus".into(),
    };
    let added =
        handle_place_selection(&mut fix.ctx, selection, &Decide(false), &search).unwrap();
    assert!(added.is_none());
    assert!(fix.ctx.registry.is_empty());
    assert!(fix.ctx.markers.is_empty());
    assert_eq!(fix.store.0.save_count.get(), 0);
    assert!(!search.0.get());
}

#[test]
fn invalid_coordinates_are_rejected_before_any_side_effect() {
    let mut fix = Fixture::new();
    let err = add_location(&mut fix.ctx, new_location(f64::NAN, 0.0, "broken")).unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(ParameterError::InvalidPosition))
    ));
    assert!(fix.ctx.registry.is_empty());
    assert!(fix.ctx.markers.is_empty());
    assert_eq!(fix.store.0.save_count.get(), 0);
}

#[test]
fn sidebar_mirrors_every_registry_change() {
    let mut fix = Fixture::new();
    add_location(&mut fix.ctx, new_location(1.0, 1.0, "A")).unwrap();
    add_location(&mut fix.ctx, new_location(2.0, 2.0, "")).unwrap();
    let view = fix.sidebar.last().unwrap();
    assert_eq!(view.len(), 2);
    assert_eq!(view[0].label, "A");
    assert_eq!(view[1].label, DEFAULT_DESCRIPTION);
    remove_location(&mut fix.ctx, 1.0, 1.0).unwrap();
    let view = fix.sidebar.last().unwrap();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].label, DEFAULT_DESCRIPTION);
}

#[test]
fn show_location_details_opens_the_popup() {
    let mut fix = Fixture::new();
    add_location(&mut fix.ctx, new_location(1.0, 1.0, "A")).unwrap();
    assert!(show_location_details(&fix.ctx, 1.0, 1.0).unwrap());
    let popups = fix.map.0.popups.borrow();
    assert_eq!(popups.len(), 1);
    assert_eq!(popups[0].1, loc(1.0, 1.0, "A"));
    drop(popups);
    assert!(!show_location_details(&fix.ctx, 9.0, 9.0).unwrap());
}
