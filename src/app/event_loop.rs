// Event loop - async run() over terminal input and showcase timer ticks

use crossterm::event::{Event as CrosstermEvent, EventStream};
use futures::{Stream, StreamExt};
use ratatui::backend::Backend;

use super::App;
use crate::action::Action;
use crate::error::Result;
use crate::event::Event;

impl<B: Backend> App<B> {
    /// Run until quit, reading input from the real terminal.
    pub async fn run(&mut self) -> Result<()> {
        self.run_with(EventStream::new()).await
    }

    /// Run against any input stream. The showcase is unmounted on every exit
    /// path, including input errors.
    pub async fn run_with<S>(&mut self, input: S) -> Result<()>
    where
        S: Stream<Item = std::io::Result<CrosstermEvent>> + Unpin,
    {
        let result = self.event_loop(input).await;
        self.showcase.unmount();
        result
    }

    async fn event_loop<S>(&mut self, mut input: S) -> Result<()>
    where
        S: Stream<Item = std::io::Result<CrosstermEvent>> + Unpin,
    {
        loop {
            if self.needs_redraw {
                self.draw()?;
            }

            // First paint of the auth screen happened above; mounting now
            // swaps the placeholders for live values on the next pass.
            if self.sync_mount() {
                continue;
            }

            if self.should_quit {
                break;
            }

            tokio::select! {
                maybe_input = input.next() => match maybe_input {
                    Some(Ok(event)) => self.apply(Event::Input(event)),
                    Some(Err(e)) => {
                        tracing::error!("Terminal input failed: {}", e);
                        return Err(e.into());
                    }
                    None => {
                        tracing::debug!("Input stream ended");
                        break;
                    }
                },
                Some(event) = self.event_rx.recv() => self.apply(event),
            }
        }

        Ok(())
    }

    /// Apply one event to completion.
    pub(super) fn apply(&mut self, event: Event) {
        let action = match event {
            Event::Input(input) => self.handle_input(input),
            Event::Timer(kind, generation) => Some(Action::Tick(kind, generation)),
        };
        if let Some(action) = action {
            self.dispatch(action);
        }
    }
}
