use crate::app::ApplicationState;
use crate::window::InputEvent;
use anyhow::Result;
use instant::Instant;

#[derive(Clone, Debug, PartialEq)]
pub enum FrameCommand {
    Exit,
}

pub trait Scene<G> {
    fn activation(&mut self, state: ApplicationState<G>) -> Result<()>;
    fn deactivation(&mut self, state: ApplicationState<G>) -> Result<()>;

    fn input(&mut self, state: ApplicationState<G>, event: InputEvent) -> Result<()>;
    fn frame(&mut self, state: ApplicationState<G>, now: Instant) -> Result<Option<FrameCommand>>;
}
