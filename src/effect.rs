//! Deferred work returned from [`ScoreboardLogic::update`](crate::ScoreboardLogic::update).

use core::future::Future;
use core::pin::Pin;

use crate::Emitter;

/// Future produced by executing an [`Effect`], ready for a [`Spawner`](crate::Spawner).
pub type EffectFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Declarative description of work that may feed events back into the runtime.
///
/// Effects are inert until the runtime executes them with its [`Emitter`] and
/// hands the resulting future to the host's spawner. Scoring itself never uses
/// effects; they only carry presentation chores such as expiring an advisory.
///
/// ```rust
/// use cricket_scoreboard::{Delivery, Effect, ScoreboardEvent};
///
/// let reset = Effect::just(ScoreboardEvent::Delivery(Delivery::Reset));
/// let nothing: Effect<ScoreboardEvent> = Effect::none();
/// let both = Effect::batch(vec![reset, nothing]);
/// # let _ = both;
/// ```
#[allow(clippy::type_complexity)]
pub struct Effect<Event>(Option<Box<dyn FnOnce(Emitter<Event>) -> EffectFuture + Send>>);

impl<Event: Send + 'static> Effect<Event> {
    pub fn none() -> Self {
        Self(None)
    }

    /// Emit a single follow-up event.
    pub fn just(event: Event) -> Self {
        Self::from_async(move |emitter| async move {
            emitter.emit(event);
        })
    }

    /// Build an effect from an async task that may emit events.
    pub fn from_async<F, Fut>(task: F) -> Self
    where
        F: FnOnce(Emitter<Event>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self(Some(Box::new(move |emitter| -> EffectFuture {
            Box::pin(task(emitter))
        })))
    }

    /// Run several effects one after another inside a single future.
    pub fn batch(effects: Vec<Effect<Event>>) -> Self {
        let effects: Vec<_> = effects.into_iter().filter(|e| !e.is_none()).collect();
        if effects.is_empty() {
            return Self::none();
        }
        Self::from_async(move |emitter| async move {
            for effect in effects {
                effect.execute(&emitter).await;
            }
        })
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Turn the effect into a future bound to `emitter`.
    pub fn execute(self, emitter: &Emitter<Event>) -> EffectFuture {
        match self.0 {
            Some(task) => task(emitter.clone()),
            None => Box::pin(async {}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(receiver: &flume::Receiver<u8>) -> Vec<u8> {
        receiver.try_iter().collect()
    }

    #[test]
    fn none_emits_nothing() {
        let (sender, receiver) = flume::unbounded();
        let effect: Effect<u8> = Effect::none();

        assert!(effect.is_none());
        futures::executor::block_on(effect.execute(&Emitter::new(sender)));
        assert!(drain(&receiver).is_empty());
    }

    #[test]
    fn batch_emits_in_order() {
        let (sender, receiver) = flume::unbounded();
        let effect = Effect::batch(vec![
            Effect::just(1),
            Effect::none(),
            Effect::from_async(|emitter| async move {
                emitter.emit(2);
                emitter.emit(3);
            }),
        ]);

        assert!(!effect.is_none());
        futures::executor::block_on(effect.execute(&Emitter::new(sender)));
        assert_eq!(drain(&receiver), vec![1, 2, 3]);
    }

    #[test]
    fn batch_of_nothing_is_none() {
        let effect: Effect<u8> = Effect::batch(vec![Effect::none(), Effect::none()]);

        assert!(effect.is_none());
    }
}
