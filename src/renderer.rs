//! Presentation seam for the scoreboard.

use std::io::Write;

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

use crate::{ScoreboardProps, Severity};

/// Draws the scoreboard.
///
/// The runtime calls [`render`](Self::render) once at start and once after
/// every processed event, always with props derived from the current model.
/// Rendering cannot fail the innings: implementations deal with their own
/// output errors.
///
/// ```rust
/// use cricket_scoreboard::{Renderer, ScoreboardProps};
///
/// struct TitleBar;
///
/// impl Renderer for TitleBar {
///     fn render(&mut self, props: ScoreboardProps) {
///         println!("{} ({})", props.team_score, props.overs);
///     }
/// }
/// ```
pub trait Renderer {
    fn render(&mut self, props: ScoreboardProps);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, props: ScoreboardProps) {
        (**self).render(props);
    }
}

/// Writes a plain-text scoreboard to any [`Write`] sink.
///
/// ```text
/// Score: 5/0   0.2 Overs
/// * Rahul      4  On field
///   Rohit      1  On field
/// ```
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the sink, e.g. to inspect a `Vec<u8>` buffer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_props(&mut self, props: &ScoreboardProps) -> std::io::Result<()> {
        write!(self.out, "Score: {}   {}", props.team_score, props.overs)?;
        if props.free_hit {
            write!(self.out, "   [FREE HIT]")?;
        }
        writeln!(self.out)?;

        for card in &props.batters {
            let marker = if card.on_strike { '*' } else { ' ' };
            writeln!(
                self.out,
                "{marker} {:<8} {:>3}  {}",
                card.name, card.runs, card.status
            )?;
        }

        if !props.wicket_controls_enabled {
            writeln!(self.out, "Wicket controls disabled")?;
        }
        if let Some(advisory) = &props.advisory {
            let tag = match advisory.severity {
                Severity::Info => "info",
                Severity::Error => "error",
            };
            writeln!(self.out, "[{tag}] {advisory}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, props: ScoreboardProps) {
        if let Err(err) = self.write_props(&props) {
            log::error!("failed to draw scoreboard: {err}");
        }
    }
}

#[cfg(any(test, feature = "testing"))]
/// Renderer that keeps every set of props it receives.
///
/// Only available with the `testing` feature. Clones share one capture buffer,
/// so hand one clone to the runtime and inspect another from the test.
pub struct RecordingRenderer {
    renders: Arc<Mutex<Vec<ScoreboardProps>>>,
}

#[cfg(any(test, feature = "testing"))]
impl Clone for RecordingRenderer {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl Renderer for RecordingRenderer {
    fn render(&mut self, props: ScoreboardProps) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Inspect the captured props, oldest first.
    ///
    /// Callbacks such as [`ScoreboardProps::dispatch`] may be invoked from the
    /// closure; they only queue events, so the lock is never re-entered.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[ScoreboardProps]) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }

    /// Run `f` against the most recent render.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been rendered yet.
    pub fn with_latest<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ScoreboardProps) -> R,
    {
        self.with_renders(|renders| f(renders.last().expect("nothing rendered yet")))
    }
}
