//! Audio cues emitted after timer and task transitions.
//!
//! Playback is best effort: a player never reports failure to the caller and
//! never blocks the event loop.

use std::io::Write;
use std::process::{Child, Command, Stdio};

/// Clip family hosted by the sound library, keyed by event name
const NOTIFICATION_CLIP_BASE: &str = "https://assets.mixkit.co/active_storage/sfx/2571";
const TICK_LOOP_CLIP: &str = "https://github.com/SaiGane5/PomoApp/raw/refs/heads/main/src/components/450509__abyeditsound__clockticksound_01.wavv";
const INTERVAL_COMPLETE_CLIP: &str =
    "https://github.com/SaiGane5/PomoApp/raw/refs/heads/main/src/components/achieve.wav";
const TASK_COMPLETE_CLIP: &str = "src/components/234564__foolboymedia__.wav";

/// A notification sound keyed to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Start,
    Pause,
    Stop,
    Skip,
    /// Begin the looping clock tick (timer started running)
    TickLoopOn,
    /// End the looping clock tick (timer left the running state)
    TickLoopOff,
    TaskCompleted,
    IntervalCompleted,
}

impl Cue {
    /// Where the clip for this cue lives; None for control-only cues
    pub fn source(&self) -> Option<String> {
        match self {
            Self::Start => Some(format!("{}/start-notification.wav", NOTIFICATION_CLIP_BASE)),
            Self::Pause => Some(format!("{}/pause-notification.wav", NOTIFICATION_CLIP_BASE)),
            Self::Stop => Some(format!("{}/stop-notification.wav", NOTIFICATION_CLIP_BASE)),
            Self::Skip => Some(format!("{}/skip-notification.wav", NOTIFICATION_CLIP_BASE)),
            Self::TickLoopOn => Some(TICK_LOOP_CLIP.to_string()),
            Self::TickLoopOff => None,
            Self::TaskCompleted => Some(TASK_COMPLETE_CLIP.to_string()),
            Self::IntervalCompleted => Some(INTERVAL_COMPLETE_CLIP.to_string()),
        }
    }

    /// Short one-shot cue (as opposed to the tick loop controls)
    pub fn is_one_shot(&self) -> bool {
        !matches!(self, Self::TickLoopOn | Self::TickLoopOff)
    }
}

/// Replaceable audio backend
pub trait CuePlayer {
    /// Fire the cue and return immediately. Failures are swallowed.
    fn play(&mut self, cue: Cue);
}

/// Plays nothing
#[derive(Debug, Default)]
pub struct Silent;

impl CuePlayer for Silent {
    fn play(&mut self, _cue: Cue) {}
}

/// Rings the terminal bell for one-shot cues
#[derive(Debug, Default)]
pub struct TerminalBell;

impl CuePlayer for TerminalBell {
    fn play(&mut self, cue: Cue) {
        if !cue.is_one_shot() {
            return;
        }
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            tracing::debug!(?cue, error = %e, "terminal bell failed");
        }
    }
}

/// Spawns an external player with the clip location as its last argument,
/// e.g. `mpv --no-video` or `ffplay -nodisp -autoexit`.
///
/// The tick loop is started with the same command and killed on `TickLoopOff`.
/// One-shot players are reaped once they exit.
#[derive(Debug)]
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
    tick_loop: Option<Child>,
    one_shots: Vec<Child>,
}

impl CommandPlayer {
    /// Split a command line on whitespace into program and leading args
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
            tick_loop: None,
            one_shots: Vec::new(),
        })
    }

    fn spawn(&self, source: &str) -> std::io::Result<Child> {
        Command::new(&self.program)
            .args(&self.args)
            .arg(source)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
    }

    /// Collect exit statuses of finished one-shot players
    fn reap_finished(&mut self) {
        self.one_shots.retain_mut(|child| matches!(child.try_wait(), Ok(None)));
    }

    fn stop_tick_loop(&mut self) {
        if let Some(mut child) = self.tick_loop.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl CuePlayer for CommandPlayer {
    fn play(&mut self, cue: Cue) {
        self.reap_finished();
        if cue == Cue::TickLoopOff {
            self.stop_tick_loop();
            return;
        }
        let Some(source) = cue.source() else {
            return;
        };

        match self.spawn(&source) {
            Ok(child) if cue == Cue::TickLoopOn => {
                self.stop_tick_loop();
                self.tick_loop = Some(child);
            }
            Ok(child) => self.one_shots.push(child),
            Err(e) => {
                tracing::debug!(?cue, program = %self.program, error = %e, "cue playback failed");
            }
        }
    }
}

impl Drop for CommandPlayer {
    fn drop(&mut self) {
        self.stop_tick_loop();
    }
}
