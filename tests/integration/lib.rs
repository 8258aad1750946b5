use core::time::Duration;

use cricket_scoreboard::{
    create_test_spawner, AdvisoryTimer, EffectFuture, RecordingRenderer, ScoreboardConfig,
    ScoreboardLogic, ScoreboardRuntime,
};

mod advisory_tests;
mod scoring_rules_tests;

pub(crate) type TestRuntime = ScoreboardRuntime<RecordingRenderer, fn(EffectFuture)>;

pub(crate) struct ScoreboardTest {
    pub(crate) runtime: TestRuntime,
    pub(crate) renders: RecordingRenderer,
}

impl ScoreboardTest {
    /// Press each control on the latest render, processing after every press.
    pub(crate) fn press_all(&mut self, labels: &[&str]) {
        for label in labels {
            self.renders
                .with_latest(|props| props.press(label))
                .unwrap_or_else(|err| panic!("{label}: {err}"));
            self.runtime.process_events();
        }
    }
}

struct ElapsedTimer;

impl AdvisoryTimer for ElapsedTimer {
    fn sleep(&self, _duration: Duration) -> EffectFuture {
        Box::pin(async {})
    }
}

fn discard_effect(_effect: EffectFuture) {}

pub(crate) struct ScoreboardTestBuilder {
    config: ScoreboardConfig,
    advisories_expire: bool,
}

pub(crate) fn build_scoreboard_test() -> ScoreboardTestBuilder {
    ScoreboardTestBuilder {
        config: ScoreboardConfig::default(),
        advisories_expire: true,
    }
}

impl ScoreboardTestBuilder {
    pub(crate) fn given_batter_names(mut self, a: &str, b: &str) -> Self {
        self.config.batter_names = [a.to_string(), b.to_string()];
        self
    }

    // Effects are never run, so an advisory stays until replaced.
    pub(crate) fn given_advisories_never_expire(mut self) -> Self {
        self.advisories_expire = false;
        self
    }

    pub(crate) fn build(self) -> ScoreboardTest {
        let renders = RecordingRenderer::new();
        let spawner: fn(EffectFuture) = if self.advisories_expire {
            create_test_spawner()
        } else {
            discard_effect
        };
        let logic = ScoreboardLogic::new(self.config, ElapsedTimer);
        let mut runtime = ScoreboardRuntime::new(logic, renders.clone(), spawner);
        runtime.start();

        ScoreboardTest { runtime, renders }
    }
}
