//! Server-sent event stream for time-off changes

use std::{convert::Infallible, time::Duration};

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use tokio_stream::{Stream, StreamExt, wrappers::BroadcastStream};
use tracing::instrument;

use crate::state::AppState;

/// Stream time-off change events to listening views
///
/// Fire-and-forget delivery: slow consumers that miss events simply skip
/// them (lagged broadcast entries are dropped, not replayed).
#[instrument(skip(state))]
pub async fn events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(state.events.subscribe()).filter_map(|result| {
        let event = result.ok()?;
        Event::default().json_data(event).ok().map(Ok)
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}
