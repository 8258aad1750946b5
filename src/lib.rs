//! A single-innings cricket scoreboard.
//!
//! The crate is split into a pure scoring engine and a small Model-View-Update
//! loop that presents it:
//!
//! - [`ScoringEngine`] owns the [`MatchState`] and applies one rule per
//!   [`Delivery`]: runs, wickets, wides, no-balls, free hits, byes, leg-byes,
//!   manual strike changes and resets. Every command returns an [`Outcome`]
//!   with a state snapshot and an optional [`Advisory`].
//! - [`ScoreboardLogic`] routes events into the engine, keeps the current
//!   advisory on display until its [`AdvisoryTimer`] expires, and derives
//!   [`ScoreboardProps`] for a [`Renderer`].
//! - [`ScoreboardRuntime`] processes events one at a time, whichever thread
//!   emitted them.
//!
//! ## Example
//!
//! ```rust
//! use cricket_scoreboard::{DismissalKind, RunValue, ScoringEngine, Slot};
//!
//! let mut engine = ScoringEngine::new();
//! engine.score_run(RunValue::FOUR);
//! let outcome = engine.score_run(RunValue::ONE);
//! assert_eq!(outcome.state.team_runs, 5);
//! assert_eq!(outcome.state.striker, Slot::B);
//!
//! engine.declare_free_hit();
//! let outcome = engine.wicket(DismissalKind::Standard);
//! assert_eq!(outcome.state.wickets, 0);
//! assert_eq!(
//!     outcome.advisory.unwrap().text,
//!     "Wicket attempted on Free Hit: Not out."
//! );
//! ```
//!
//! Driving a full scoreboard:
//!
//! ```rust
//! use core::{future::Future, pin::Pin, time::Duration};
//! use cricket_scoreboard::{
//!     AdvisoryTimer, EffectFuture, ScoreboardConfig, ScoreboardLogic, ScoreboardRuntime,
//!     TextRenderer,
//! };
//!
//! struct Forever;
//!
//! impl AdvisoryTimer for Forever {
//!     fn sleep(&self, _: Duration) -> Pin<Box<dyn Future<Output = ()> + Send>> {
//!         Box::pin(core::future::pending())
//!     }
//! }
//!
//! // Effects are dropped by this spawner, so advisories never expire.
//! let spawner = |_fut: EffectFuture| {};
//!
//! let mut runtime = ScoreboardRuntime::new(
//!     ScoreboardLogic::new(ScoreboardConfig::default(), Forever),
//!     TextRenderer::new(std::io::sink()),
//!     spawner,
//! );
//! runtime.start();
//! ```

mod advisory;
mod config;
mod delivery;
mod effect;
mod emitter;
mod engine;
mod error;
mod model;
mod renderer;
mod runtime;
mod scoreboard;

pub use advisory::{Advisory, Severity};
pub use config::ScoreboardConfig;
pub use delivery::{Delivery, DismissalKind, RunValue};
pub use effect::{Effect, EffectFuture};
pub use emitter::Emitter;
pub use engine::{Outcome, ScoringEngine};
pub use error::{ConfigError, ScoringError};
pub use model::{Batter, MatchState, Overs, Slot, BALLS_PER_OVER, MAX_WICKETS};
pub use renderer::{Renderer, TextRenderer};
pub use runtime::{ScoreboardRuntime, Spawner};
pub use scoreboard::{
    ActiveAdvisory, AdvisoryTimer, BatterCard, ScoreboardEvent, ScoreboardLogic, ScoreboardModel,
    ScoreboardProps,
};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::RecordingRenderer;
#[cfg(any(test, feature = "testing"))]
pub use runtime::{create_test_spawner, test_spawner_fn};
