#![cfg(feature = "std")]

//! Line-oriented command menu: reads a line, splits it into a command name
//! and arguments, and hands them to the registered handler.

use std::collections::HashMap;
use std::io::{BufRead, ErrorKind, Write};
use std::string::{String, ToString};
use std::vec::Vec;

use rand::rngs::SmallRng;

use crate::{
    common::{GameError, Status},
    game::Game,
    player::PlayerKind,
    player_cli::Console,
};

/// Command handler. Receives the arguments after the command name; the menu
/// has already checked their count.
pub type Handler<R, W> = fn(&mut Session<R, W>, &[&str]) -> anyhow::Result<()>;

struct Command<R, W> {
    arity: usize,
    handler: Handler<R, W>,
}

/// State shared by all command handlers.
pub struct Session<R, W> {
    pub console: Console<R, W>,
    pub rng: SmallRng,
    running: bool,
    results: Vec<Status>,
}

impl<R, W> Session<R, W> {
    /// Ask the menu loop to stop after the current command.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Final status of every game played so far.
    pub fn results(&self) -> &[Status] {
        &self.results
    }
}

pub struct Menu<R, W> {
    commands: HashMap<String, Command<R, W>>,
    session: Session<R, W>,
}

impl<R: BufRead + 'static, W: Write + 'static> Menu<R, W> {
    /// Menu with the `start` and `exit` commands registered.
    pub fn new(console: Console<R, W>, rng: SmallRng) -> Self {
        let mut menu = Self {
            commands: HashMap::new(),
            session: Session {
                console,
                rng,
                running: false,
                results: Vec::new(),
            },
        };
        menu.register("exit", 0, exit);
        menu.register("start", 2, start);
        menu
    }

    /// Register `handler` under `name`, replacing any previous command.
    pub fn register(&mut self, name: &str, arity: usize, handler: Handler<R, W>) {
        self.commands
            .insert(name.to_string(), Command { arity, handler });
    }

    pub fn session(&self) -> &Session<R, W> {
        &self.session
    }

    /// Read and dispatch commands until `exit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.session.running = true;
        while self.session.running {
            self.session.console.prompt("Input command: ")?;
            let line = match self.session.console.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    log::debug!("unreadable command line: {}", e);
                    writeln!(self.session.console, "Command not found!")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            if let Err(e) = self.dispatch(&line) {
                if matches!(e.downcast_ref::<GameError>(), Some(GameError::InputClosed)) {
                    log::info!("input closed during a game");
                    break;
                }
                return Err(e);
            }
        }
        self.session.running = false;
        Ok(())
    }

    /// Run a single command line. Unknown commands and wrong argument
    /// counts are reported on the console, not returned as errors.
    pub fn dispatch(&mut self, line: &str) -> anyhow::Result<()> {
        let mut parts = line.split_whitespace();
        let name = match parts.next() {
            Some(name) => name,
            None => {
                writeln!(self.session.console, "Empty line")?;
                return Ok(());
            }
        };
        let args: Vec<&str> = parts.collect();

        let (arity, handler) = match self.commands.get(name) {
            Some(command) => (command.arity, command.handler),
            None => {
                writeln!(self.session.console, "Command '{}' not found!", name)?;
                return Ok(());
            }
        };
        if args.len() != arity {
            log::debug!("{} expects {} arguments, got {}", name, arity, args.len());
            writeln!(self.session.console, "Bad parameters!")?;
            return Ok(());
        }
        handler(&mut self.session, &args)
    }
}

fn exit<R, W>(session: &mut Session<R, W>, _args: &[&str]) -> anyhow::Result<()> {
    session.stop();
    Ok(())
}

/// `start <x-player> <o-player>`: resolve both names and play one game.
fn start<R: BufRead + 'static, W: Write + 'static>(
    session: &mut Session<R, W>,
    args: &[&str],
) -> anyhow::Result<()> {
    let kinds = args
        .iter()
        .map(|name| name.parse::<PlayerKind>())
        .collect::<Result<Vec<_>, GameError>>();
    let (x_kind, o_kind) = match kinds.as_deref() {
        Ok([x, o]) => (*x, *o),
        Ok(_) => {
            writeln!(session.console, "Bad parameters!")?;
            return Ok(());
        }
        Err(e) => {
            log::debug!("start rejected: {}", e);
            writeln!(session.console, "Bad parameters!")?;
            return Ok(());
        }
    };

    let mut game = Game::new(
        x_kind.build(session.console.clone()),
        o_kind.build(session.console.clone()),
    );
    let mut out = session.console.clone();
    let status = game.play(&mut session.rng, &mut out)?;
    session.results.push(status);
    Ok(())
}
