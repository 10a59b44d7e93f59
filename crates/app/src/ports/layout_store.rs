//! Layout store port — persistence for house layouts.
//!
//! The storage format is opaque to the core; the only contract is that a
//! round-tripped layout compares equal (`PartialEq`) to the original.

use std::future::Future;

use domo_domain::error::DomoError;
use domo_domain::id::LayoutId;
use domo_domain::layout::HouseLayout;

/// Repository for persisting and listing [`HouseLayout`]s.
pub trait LayoutStore {
    /// Write a layout, overwriting any previous version with the same id.
    fn save(&self, layout: HouseLayout) -> impl Future<Output = Result<(), DomoError>> + Send;

    /// Read a layout back by id.
    fn load(
        &self,
        id: LayoutId,
    ) -> impl Future<Output = Result<Option<HouseLayout>, DomoError>> + Send;

    /// All stored layouts (the "available layouts" list).
    fn list(&self) -> impl Future<Output = Result<Vec<HouseLayout>, DomoError>> + Send;

    /// Delete a layout by id. Deleting an absent id is a no-op.
    fn remove(&self, id: LayoutId) -> impl Future<Output = Result<(), DomoError>> + Send;
}
