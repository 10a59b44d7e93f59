//! Layout service — use-cases for managing the available-layouts list.

use domo_domain::error::{DomoError, NotFoundError};
use domo_domain::id::LayoutId;
use domo_domain::layout::HouseLayout;
use domo_domain::log::{LogEntry, LogImportance};

use crate::ports::{ActivityLog, LayoutStore};

/// Component tag used for activity-log entries from this service.
const COMPONENT: &str = "House Layout";

/// Application service for creating, saving, and deleting layouts.
///
/// Editing UIs mutate a [`Clone`] of a stored layout and commit it through
/// [`save_if_changed`](Self::save_if_changed), which uses structural
/// equality for change detection.
pub struct LayoutService<S, L> {
    store: S,
    log: L,
}

impl<S: LayoutStore, L: ActivityLog> LayoutService<S, L> {
    /// Create a new service backed by the given store and log.
    pub fn new(store: S, log: L) -> Self {
        Self { store, log }
    }

    /// Create and persist a fresh layout with the permanent rooms.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::Validation`] for an empty name, or a storage
    /// error from the store.
    pub async fn create_layout(&self, name: impl Into<String>) -> Result<HouseLayout, DomoError> {
        let layout = HouseLayout::new(name)?;
        self.store.save(layout.clone()).await?;
        self.append_log(
            format!("Layout created: {}", layout.name()),
            LogImportance::Important,
        )
        .await;
        Ok(layout)
    }

    /// Look up a layout by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::NotFound`] when no layout with `id` exists,
    /// or a storage error from the store.
    pub async fn get_layout(&self, id: LayoutId) -> Result<HouseLayout, DomoError> {
        self.store.load(id).await?.ok_or_else(|| {
            NotFoundError {
                kind: "layout",
                name: id.to_string(),
            }
            .into()
        })
    }

    /// List all stored layouts.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_layouts(&self) -> Result<Vec<HouseLayout>, DomoError> {
        self.store.list().await
    }

    /// Persist a layout unconditionally.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn save_layout(&self, layout: &HouseLayout) -> Result<(), DomoError> {
        self.store.save(layout.clone()).await?;
        self.append_log(
            format!("Layout saved: {}", layout.name()),
            LogImportance::Minor,
        )
        .await;
        Ok(())
    }

    /// Persist `edited` only when it structurally differs from `original`.
    ///
    /// Returns whether a save happened.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn save_if_changed(
        &self,
        original: &HouseLayout,
        edited: &HouseLayout,
    ) -> Result<bool, DomoError> {
        if original == edited {
            tracing::debug!(layout = %edited.name(), "no changes detected, skipping save");
            return Ok(false);
        }
        self.save_layout(edited).await?;
        Ok(true)
    }

    /// Remove a layout from the available-layouts list.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn delete_layout(&self, id: LayoutId) -> Result<(), DomoError> {
        self.store.remove(id).await?;
        self.append_log(format!("Layout deleted: {id}"), LogImportance::Important)
            .await;
        Ok(())
    }

    /// Fire-and-forget append; a failing log never fails the use-case.
    async fn append_log(&self, message: String, importance: LogImportance) {
        let _ = self
            .log
            .append(LogEntry::new(COMPONENT, message, importance))
            .await;
    }
}
