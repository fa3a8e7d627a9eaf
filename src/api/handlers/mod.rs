//! REST endpoint handlers organized by resource.

pub mod admin;
pub mod camera;
pub mod efficiency;
pub mod event;
pub mod packer;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(packer::routes())
        .merge(event::routes())
        .merge(efficiency::routes())
        .merge(camera::routes())
        .merge(admin::routes())
}
