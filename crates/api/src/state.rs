use fes_db::service::ListingService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the listing store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Listing query facade over the injected store.
    pub listings: ListingService,
}
