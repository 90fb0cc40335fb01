use crate::runtime::engine::Engine;
use crate::runtime::event::AppEvent;
use crate::terminal::{Terminal, TerminalEvent};
use crate::ui::render::render;
use std::io;
use std::time::{Duration, Instant};

const IDLE_POLL: Duration = Duration::from_millis(120);

pub struct Runtime {
    engine: Engine,
    terminal: Terminal,
}

impl Runtime {
    pub fn new(engine: Engine, terminal: Terminal) -> Self {
        Self { engine, terminal }
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;

        let run_result = (|| -> io::Result<()> {
            self.render()?;

            while !self.engine.state().should_exit() {
                if self.engine.advance(Instant::now()) {
                    self.render()?;
                }

                let timeout = self.engine.poll_timeout(Instant::now(), IDLE_POLL);
                let event = self.terminal.poll_event(timeout)?;
                if let TerminalEvent::Resize(size) = event {
                    self.terminal.set_size(size);
                }

                if self.engine.handle(AppEvent::Terminal(event), Instant::now()) {
                    self.render()?;
                }
            }

            Ok(())
        })();

        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = render(self.engine.state(), self.terminal.size());
        self.terminal.render_frame(&frame)
    }
}
