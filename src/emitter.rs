//! Event emitter handed out to scoreboard controls.

use flume::Sender;

/// Cloneable handle that queues events for the runtime.
///
/// Controls embedded in [`ScoreboardProps`](crate::ScoreboardProps) and effects
/// both hold an `Emitter`. Any thread may emit, but the runtime owning the
/// receiving end processes events strictly one at a time.
///
/// ```rust
/// use cricket_scoreboard::{
///     create_test_spawner, Delivery, RecordingRenderer, RunValue, ScoreboardEvent,
///     ScoreboardLogic, ScoreboardRuntime,
/// };
/// # use core::{future::Future, pin::Pin, time::Duration};
/// # struct NoDelay;
/// # impl cricket_scoreboard::AdvisoryTimer for NoDelay {
/// #     fn sleep(&self, _: Duration) -> Pin<Box<dyn Future<Output = ()> + Send>> {
/// #         Box::pin(async {})
/// #     }
/// # }
///
/// let renderer = RecordingRenderer::new();
/// let mut runtime = ScoreboardRuntime::new(
///     ScoreboardLogic::new(Default::default(), NoDelay),
///     renderer.clone(),
///     create_test_spawner(),
/// );
/// runtime.start();
///
/// let emitter = runtime.emitter();
/// std::thread::spawn(move || {
///     emitter.emit(ScoreboardEvent::Delivery(Delivery::Run(RunValue::SIX)));
/// })
/// .join()
/// .unwrap();
///
/// runtime.process_events();
/// assert_eq!(runtime.model().engine.state().team_runs, 6);
/// ```
pub struct Emitter<Event>(pub(crate) Sender<Event>);

impl<Event> Clone for Emitter<Event> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Event> Emitter<Event> {
    pub(crate) fn new(sender: Sender<Event>) -> Self {
        Self(sender)
    }

    /// Queue an event for the runtime.
    ///
    /// Returns `false` when the runtime has gone away and the event was dropped.
    pub fn emit(&self, event: Event) -> bool {
        match self.0.send(event) {
            Ok(()) => true,
            Err(_) => {
                log::debug!("event dropped, scoreboard runtime is gone");
                false
            }
        }
    }
}
