//! Update and view functions tying the scoring engine to a display.

use core::fmt;
use core::time::Duration;

use crate::effect::EffectFuture;
use crate::{
    Advisory, Delivery, Effect, Emitter, MatchState, ScoreboardConfig, ScoringEngine,
    ScoringError, Slot,
};

/// Events processed by the [`ScoreboardRuntime`](crate::ScoreboardRuntime).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreboardEvent {
    /// A control was pressed.
    Delivery(Delivery),
    /// The advisory with this id has been on screen long enough.
    AdvisoryExpired(u64),
    /// Stop the event loop.
    Close,
}

/// Source of the delay before an advisory is cleared.
///
/// Hosts back this with their async runtime's sleep, for example
/// `Box::pin(tokio::time::sleep(duration))`.
#[cfg_attr(test, mockall::automock)]
pub trait AdvisoryTimer {
    fn sleep(&self, duration: Duration) -> EffectFuture;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveAdvisory {
    pub id: u64,
    pub advisory: Advisory,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreboardModel {
    pub engine: ScoringEngine,
    pub advisory: Option<ActiveAdvisory>,
    next_advisory_id: u64,
}

/// One batter's card on the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatterCard {
    pub slot: Slot,
    pub name: String,
    pub runs: u32,
    /// `"Out"` or `"On field"`.
    pub status: &'static str,
    pub on_strike: bool,
}

/// Everything a renderer needs to draw the scoreboard once.
pub struct ScoreboardProps {
    pub state: MatchState,
    /// `"<runs>/<wickets>"`
    pub team_score: String,
    /// `"<overs>.<balls> Overs"`
    pub overs: String,
    pub batters: [BatterCard; 2],
    pub free_hit: bool,
    pub wicket_controls_enabled: bool,
    pub advisory: Option<Advisory>,
    /// Queue a control press for the runtime.
    pub dispatch: Box<dyn Fn(Delivery) + Send>,
}

impl ScoreboardProps {
    /// Dispatch the control labelled `label`, e.g. `"4"`, `"LBW"` or `"WD"`.
    pub fn press(&self, label: &str) -> Result<(), ScoringError> {
        let delivery = label.parse()?;
        (self.dispatch)(delivery);
        Ok(())
    }

    pub fn batter(&self, slot: Slot) -> &BatterCard {
        &self.batters[slot.index()]
    }
}

impl fmt::Debug for ScoreboardProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreboardProps")
            .field("team_score", &self.team_score)
            .field("overs", &self.overs)
            .field("batters", &self.batters)
            .field("free_hit", &self.free_hit)
            .field("wicket_controls_enabled", &self.wicket_controls_enabled)
            .field("advisory", &self.advisory)
            .finish_non_exhaustive()
    }
}

/// The scoreboard's update/view pair.
///
/// `update` routes every [`Delivery`] through the [`ScoringEngine`] and keeps
/// the latest advisory on display until its expiry event comes back from the
/// timer. `view` formats the model for a [`Renderer`](crate::Renderer).
pub struct ScoreboardLogic {
    config: ScoreboardConfig,
    timer: Box<dyn AdvisoryTimer + Send>,
}

impl ScoreboardLogic {
    pub fn new(config: ScoreboardConfig, timer: impl AdvisoryTimer + Send + 'static) -> Self {
        Self {
            config,
            timer: Box::new(timer),
        }
    }

    pub fn config(&self) -> &ScoreboardConfig {
        &self.config
    }

    pub fn init(&self) -> ScoreboardModel {
        ScoreboardModel::default()
    }

    pub fn update(
        &self,
        event: ScoreboardEvent,
        model: &mut ScoreboardModel,
    ) -> Effect<ScoreboardEvent> {
        match event {
            ScoreboardEvent::Delivery(delivery) => match model.engine.apply(delivery).advisory {
                Some(advisory) => self.show(advisory, model),
                None => Effect::none(),
            },
            ScoreboardEvent::AdvisoryExpired(id) => {
                // A newer advisory keeps its own expiry.
                if model.advisory.as_ref().is_some_and(|active| active.id == id) {
                    model.advisory = None;
                }
                Effect::none()
            }
            ScoreboardEvent::Close => Effect::none(),
        }
    }

    pub fn view(
        &self,
        model: &ScoreboardModel,
        emitter: &Emitter<ScoreboardEvent>,
    ) -> ScoreboardProps {
        let state = *model.engine.state();
        let card = |slot: Slot| {
            let batter = state.batter(slot);
            BatterCard {
                slot,
                name: self.config.batter_name(slot).to_string(),
                runs: batter.runs_scored,
                status: batter.status(),
                on_strike: state.striker == slot,
            }
        };
        let emitter = emitter.clone();

        ScoreboardProps {
            state,
            team_score: format!("{}/{}", state.team_runs, state.wickets),
            overs: format!("{} Overs", state.overs()),
            batters: [card(Slot::A), card(Slot::B)],
            free_hit: state.free_hit_pending,
            wicket_controls_enabled: !state.is_innings_closed(),
            advisory: model.advisory.as_ref().map(|active| active.advisory.clone()),
            dispatch: Box::new(move |delivery| {
                emitter.emit(ScoreboardEvent::Delivery(delivery));
            }),
        }
    }

    fn show(&self, advisory: Advisory, model: &mut ScoreboardModel) -> Effect<ScoreboardEvent> {
        let id = model.next_advisory_id;
        model.next_advisory_id += 1;
        model.advisory = Some(ActiveAdvisory { id, advisory });

        let sleep = self.timer.sleep(self.config.advisory_ttl());
        Effect::from_async(move |emitter| async move {
            sleep.await;
            emitter.emit(ScoreboardEvent::AdvisoryExpired(id));
        })
    }
}
