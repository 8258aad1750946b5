//! The single-owner event loop driving a scoreboard.

use core::future::Future;
use core::pin::Pin;

use flume::Receiver;

use crate::{Emitter, Renderer, ScoreboardEvent, ScoreboardLogic, ScoreboardModel};

/// Executes effect futures on the host's async runtime.
///
/// Closures and function pointers implement this through the blanket impl,
/// e.g. `|fut| { tokio::spawn(fut); }`.
pub trait Spawner {
    fn spawn(&self, future: Pin<Box<dyn Future<Output = ()> + Send>>);
}

impl<F> Spawner for F
where
    F: Fn(Pin<Box<dyn Future<Output = ()> + Send>>),
{
    fn spawn(&self, future: Pin<Box<dyn Future<Output = ()> + Send>>) {
        self(future)
    }
}

/// Owns the scoreboard model and processes its events one at a time.
///
/// Controls and effects reach the runtime through [`Emitter`] handles that
/// feed a channel; only the runtime touches the model. Each processed event
/// goes through [`ScoreboardLogic::update`], is rendered via
/// [`ScoreboardLogic::view`] and then has its effect handed to the spawner.
/// This queue is what serializes commands when several threads hold emitters.
///
/// Async hosts drive it with [`run`](Self::run). Synchronous hosts (and tests)
/// call [`start`](Self::start) once and then [`process_events`](Self::process_events)
/// whenever input has been emitted.
pub struct ScoreboardRuntime<Render, Spawn>
where
    Render: Renderer,
    Spawn: Spawner,
{
    logic: ScoreboardLogic,
    renderer: Render,
    spawner: Spawn,
    model: ScoreboardModel,
    emitter: Emitter<ScoreboardEvent>,
    events: Receiver<ScoreboardEvent>,
    started: bool,
    closed: bool,
}

impl<Render, Spawn> ScoreboardRuntime<Render, Spawn>
where
    Render: Renderer,
    Spawn: Spawner,
{
    /// Create a runtime around `logic`.
    ///
    /// Nothing is rendered until [`start`](Self::start), [`run`](Self::run)
    /// or [`process_events`](Self::process_events) is called.
    ///
    /// # Arguments
    ///
    /// * `logic` - Update and view functions, holding the config and timer
    /// * `renderer` - Receives props once at start and after every event
    /// * `spawner` - Runs effect futures, such as advisory expiry, on the host
    pub fn new(logic: ScoreboardLogic, renderer: Render, spawner: Spawn) -> Self {
        let (sender, events) = flume::unbounded();
        let model = logic.init();

        Self {
            logic,
            renderer,
            spawner,
            model,
            emitter: Emitter::new(sender),
            events,
            started: false,
            closed: false,
        }
    }

    /// A handle for queueing events from controls, effects or other threads.
    pub fn emitter(&self) -> Emitter<ScoreboardEvent> {
        self.emitter.clone()
    }

    /// The current model, including the engine's [`MatchState`](crate::MatchState).
    pub fn model(&self) -> &ScoreboardModel {
        &self.model
    }

    /// True once a [`ScoreboardEvent::Close`] has been processed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Render the initial scoreboard. Later calls do nothing.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        log::info!("scoreboard started");

        let props = self.logic.view(&self.model, &self.emitter);
        self.renderer.render(props);
    }

    /// Start, then process events until [`ScoreboardEvent::Close`] arrives.
    pub async fn run(&mut self) {
        self.start();
        while !self.closed {
            match self.events.recv_async().await {
                Ok(event) => self.step(event),
                Err(_) => break,
            }
        }
    }

    /// Process every event queued so far and return how many were handled.
    ///
    /// Events emitted by effects while draining are handled in the same call.
    /// Nothing is processed after `Close`.
    pub fn process_events(&mut self) -> usize {
        self.start();
        let mut processed = 0;
        while !self.closed {
            match self.events.try_recv() {
                Ok(event) => {
                    self.step(event);
                    processed += 1;
                }
                Err(_) => break,
            }
        }
        processed
    }

    fn step(&mut self, event: ScoreboardEvent) {
        log::trace!("processing {event:?}");
        if event == ScoreboardEvent::Close {
            log::info!("scoreboard closed at {}", self.model.engine.state());
            self.closed = true;
            return;
        }

        let effect = self.logic.update(event, &mut self.model);

        let props = self.logic.view(&self.model, &self.emitter);
        self.renderer.render(props);

        if !effect.is_none() {
            self.spawner.spawn(effect.execute(&self.emitter));
        }
    }
}

#[cfg(any(test, feature = "testing"))]
/// Runs effect futures to completion on the calling thread.
pub fn test_spawner_fn(fut: Pin<Box<dyn Future<Output = ()> + Send>>) {
    futures::executor::block_on(fut);
}

#[cfg(any(test, feature = "testing"))]
/// Spawner for tests that completes every effect before returning.
///
/// Effects only emit events, so anything they produce is picked up by the
/// same [`ScoreboardRuntime::process_events`] call that spawned them.
pub fn create_test_spawner() -> fn(Pin<Box<dyn Future<Output = ()> + Send>>) {
    test_spawner_fn
}
