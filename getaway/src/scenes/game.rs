use super::GlobalData;
use crate::session::Session;
use crate::session::TickOutcome;
use tarmac::anyhow::anyhow;
use tarmac::anyhow::Result;
use tarmac::app::ApplicationState;
use tarmac::fastrand::Rng;
use tarmac::instant::Instant;
use tarmac::log::info;
use tarmac::renderer::Canvas;
use tarmac::scene::FrameCommand;
use tarmac::scene::Scene;
use tarmac::window::InputEvent;

pub const CAUGHT_MESSAGE: &str = "You have been caught by the police!";

#[derive(Default)]
pub struct GameScene {
    pub session: Option<Session>,
    seed: Option<u64>,
}

impl GameScene {
    pub fn with_seed(seed: u64) -> Self {
        Self { session: None, seed: Some(seed) }
    }
}

impl Scene<GlobalData> for GameScene {
    fn activation(&mut self, state: ApplicationState<GlobalData>) -> Result<()> {
        let rng = match self.seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };

        self.session = Some(Session::new(&state.global.config, state.renderer.viewport(), Instant::now(), rng)?);
        info!("Chase started");

        Ok(())
    }

    fn deactivation(&mut self, _state: ApplicationState<GlobalData>) -> Result<()> {
        if let Some(session) = &self.session {
            info!("Chase finished after {} ticks", session.ticks());
        }

        Ok(())
    }

    fn input(&mut self, _state: ApplicationState<GlobalData>, event: InputEvent) -> Result<()> {
        let session = self.session.as_mut().ok_or_else(|| anyhow!("Session not started"))?;

        if let InputEvent::WindowSizeChange { size } = event {
            session.set_viewport(size.as_vec2());
        } else {
            session.handle_input(event);
        }

        Ok(())
    }

    fn frame(&mut self, state: ApplicationState<GlobalData>, now: Instant) -> Result<Option<FrameCommand>> {
        let session = self.session.as_mut().ok_or_else(|| anyhow!("Session not started"))?;

        match session.tick(state.renderer, now) {
            TickOutcome::Running => Ok(None),
            TickOutcome::Caught { .. } => {
                state.window.alert(CAUGHT_MESSAGE);
                Ok(Some(FrameCommand::Exit))
            }
            TickOutcome::Stopped => Ok(Some(FrameCommand::Exit)),
        }
    }
}
