//! Mediator wiring
//!
//! Every command and query handler is registered against a shared [`Store`].
//! Callers send a request and get the handler's `Result` back.

pub use mediator::DefaultAsyncMediator;

use crate::store::Store;

pub mod middleware;

pub type AppMediator = DefaultAsyncMediator;

/// Register every handler against `store`
///
/// Must be called on tokio's multi-threaded runtime: the builder blocks in
/// place while registering handlers, which panics on a current-thread runtime.
pub fn build_mediator(store: Store) -> AppMediator {
    DefaultAsyncMediator::builder()
        // Stations
        .add_handler({
            let store = store.clone();
            move |cmd| {
                let store = store.clone();
                async move { crate::features::stations::commands::create::handle(store, cmd).await }
            }
        })
        .add_handler({
            let store = store.clone();
            move |cmd| {
                let store = store.clone();
                async move { crate::features::stations::commands::delete::handle(store, cmd).await }
            }
        })
        .add_handler({
            let store = store.clone();
            move |query| {
                let store = store.clone();
                async move { crate::features::stations::queries::get::handle(store, query).await }
            }
        })
        .add_handler({
            let store = store.clone();
            move |query| {
                let store = store.clone();
                async move { crate::features::stations::queries::list::handle(store, query).await }
            }
        })
        // Lines
        .add_handler({
            let store = store.clone();
            move |cmd| {
                let store = store.clone();
                async move { crate::features::lines::commands::create::handle(store, cmd).await }
            }
        })
        .add_handler({
            let store = store.clone();
            move |cmd| {
                let store = store.clone();
                async move { crate::features::lines::commands::update::handle(store, cmd).await }
            }
        })
        .add_handler({
            let store = store.clone();
            move |cmd| {
                let store = store.clone();
                async move { crate::features::lines::commands::delete::handle(store, cmd).await }
            }
        })
        .add_handler({
            let store = store.clone();
            move |query| {
                let store = store.clone();
                async move { crate::features::lines::queries::get::handle(store, query).await }
            }
        })
        .add_handler({
            let store = store.clone();
            move |query| {
                let store = store.clone();
                async move { crate::features::lines::queries::get_by_name::handle(store, query).await }
            }
        })
        .add_handler({
            let store = store.clone();
            move |query| {
                let store = store.clone();
                async move { crate::features::lines::queries::list::handle(store, query).await }
            }
        })
        // Sections
        .add_handler({
            let store = store.clone();
            move |cmd| {
                let store = store.clone();
                async move { crate::features::sections::commands::add::handle(store, cmd).await }
            }
        })
        .add_handler({
            let store = store.clone();
            move |cmd| {
                let store = store.clone();
                async move { crate::features::sections::commands::remove::handle(store, cmd).await }
            }
        })
        .add_handler({
            let store = store.clone();
            move |query| {
                let store = store.clone();
                async move { crate::features::sections::queries::list::handle(store, query).await }
            }
        })
        .build()
}
