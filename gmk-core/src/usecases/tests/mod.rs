// Shared in-memory doubles for the storage and gateway traits, used by
// the usecase and projection tests across the crate.

use std::cell::{Cell, RefCell};

use anyhow::anyhow;

use crate::{
    entities::*,
    gateways::map::MapWidgetGateway,
    repositories::{Error as RepoError, LocationRepo},
};

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockRepo {
    pub locations: RefCell<Vec<Location>>,
    pub deleted: Cell<bool>,
    pub fail: Cell<bool>,
}

impl MockRepo {
    pub fn failing() -> Self {
        let repo = Self::default();
        repo.fail.set(true);
        repo
    }

    fn check(&self) -> RepoResult<()> {
        if self.fail.get() {
            Err(RepoError::Other(anyhow!("mock storage failure")))
        } else {
            Ok(())
        }
    }
}

impl LocationRepo for MockRepo {
    fn load_locations(&self) -> RepoResult<Vec<Location>> {
        self.check()?;
        Ok(self.locations.borrow().clone())
    }

    fn save_locations(&self, locations: &[Location]) -> RepoResult<()> {
        self.check()?;
        *self.locations.borrow_mut() = locations.to_vec();
        self.deleted.set(false);
        Ok(())
    }

    fn delete_locations(&self) -> RepoResult<()> {
        self.check()?;
        self.locations.borrow_mut().clear();
        self.deleted.set(true);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockMapWidget {
    pub created: RefCell<Vec<(MapPoint, String)>>,
    pub destroyed: RefCell<Vec<MarkerHandle>>,
    pub viewport: Cell<Option<(MapPoint, ZoomLevel)>>,
    pub popups: RefCell<Vec<(MarkerHandle, Location)>>,
    next_handle: Cell<u64>,
}

impl MapWidgetGateway for MockMapWidget {
    fn create_marker(&self, pos: MapPoint, label: &str) -> MarkerHandle {
        let n = self.next_handle.get();
        self.next_handle.set(n + 1);
        self.created.borrow_mut().push((pos, label.to_string()));
        MarkerHandle::from(format!("marker-{n}"))
    }

    fn destroy_marker(&self, handle: &MarkerHandle) {
        self.destroyed.borrow_mut().push(handle.clone());
    }

    fn set_viewport(&self, center: MapPoint, zoom: ZoomLevel) {
        self.viewport.set(Some((center, zoom)));
    }

    fn show_location_popup(&self, handle: &MarkerHandle, location: &Location) {
        self.popups
            .borrow_mut()
            .push((handle.clone(), location.clone()));
    }
}
