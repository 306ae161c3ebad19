//! Frame driver
//!
//! Turns wall-clock frames into fixed simulation steps. Each frame drains the
//! input queue, runs as many `SIM_DT` ticks as the accumulator allows, hands
//! camera shifts to the camera and renders.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::platform::{FrameClock, InputQueue};
use crate::renderer::{Camera, DrawList, Surface, render};
use crate::settings::Settings;
use crate::sim::{Autopilot, GameEvent, GameState, Intent, update};

/// What a single frame did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Fixed steps run this frame
    pub ticks: u32,
    /// Events raised this frame, in order
    pub events: Vec<GameEvent>,
}

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub settings: Settings,
    pub camera: Camera,
    pub input: InputQueue,
    pub autopilot: Autopilot,
    /// Let the autopilot lock platforms
    pub idle_mode: bool,
    accumulator: f32,
    last_time: Option<f64>,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let state = GameState::new(settings.tuning.clone());
        Self::with_state(state, settings)
    }

    /// Drive an existing state (its tuning wins over `settings.tuning`)
    pub fn with_state(state: GameState, settings: Settings) -> Self {
        Self {
            state,
            idle_mode: settings.idle_mode,
            settings,
            camera: Camera::new(),
            input: InputQueue::new(),
            autopilot: Autopilot::default(),
            accumulator: 0.0,
            last_time: None,
        }
    }

    pub fn toggle_idle_mode(&mut self) {
        self.idle_mode = !self.idle_mode;
        log::info!("Idle mode: {}", self.idle_mode);
    }

    /// Advance and draw one frame at `time` (milliseconds)
    pub fn frame(&mut self, time: f64, surface: &mut impl Surface) -> FrameReport {
        let dt = match self.last_time {
            Some(last) => ((time - last) / 1000.0) as f32,
            None => SIM_DT,
        };
        self.last_time = Some(time);

        let report = self.update(dt);
        render(&self.state, &self.camera, &self.settings, surface);
        report
    }

    /// Run simulation ticks for `dt` seconds of wall-clock time
    pub fn update(&mut self, dt: f32) -> FrameReport {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut ticks = 0;
        while self.accumulator >= SIM_DT && ticks < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            ticks += 1;
        }

        let mut intents = self.input.drain();
        if self.idle_mode && self.autopilot.wants_lock(&self.state) {
            intents.push(Intent::Lock);
        }
        update(&mut self.state, intents, ticks);

        let events = self.state.drain_events();
        self.camera.observe(&events);
        for event in &events {
            match event {
                GameEvent::Locked { level, x, width } => {
                    log::info!("Level {} locked at x={:.1} width={:.1}", level, x, width)
                }
                GameEvent::StackCollapsed { level } => {
                    log::warn!("Level {} missed the tower, width is now zero", level)
                }
                GameEvent::CameraShift { offset } => {
                    log::debug!("Camera shift {} (total {})", offset, self.camera.offset)
                }
            }
        }

        FrameReport { ticks, events }
    }
}

/// A frame produced by `Frames`
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame number since the (re)start
    pub index: u64,
    /// Clock timestamp (ms)
    pub time: f64,
    pub ticks: u32,
    pub events: Vec<GameEvent>,
    pub draws: DrawList,
}

/// Lazy, never-ending sequence of rendered frames
pub struct Frames<C: FrameClock> {
    initial: Game,
    game: Game,
    clock: C,
    index: u64,
}

/// Drive `game` from `clock`. Restarting replays from this snapshot.
pub fn run<C: FrameClock>(game: Game, clock: C) -> Frames<C> {
    Frames {
        initial: game.clone(),
        game,
        clock,
        index: 0,
    }
}

impl<C: FrameClock> Frames<C> {
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Mutable access, e.g. to queue input before the next frame
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Rewind to the snapshot passed to `run`
    pub fn restart(&mut self) {
        self.game = self.initial.clone();
        self.clock.reset();
        self.index = 0;
    }
}

impl<C: FrameClock> Iterator for Frames<C> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let time = self.clock.next_frame();
        let mut draws = DrawList::new();
        let report = self.game.frame(time, &mut draws);

        let frame = Frame {
            index: self.index,
            time,
            ticks: report.ticks,
            events: report.events,
            draws,
        };
        self.index += 1;
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FixedClock, ScriptedClock};
    use crate::renderer::DrawCommand;

    #[test]
    fn test_first_frame_runs_one_tick() {
        let mut game = Game::new(Settings::default());
        let mut draws = DrawList::new();
        let report = game.frame(1234.0, &mut draws);
        assert_eq!(report.ticks, 1);
        assert_eq!(game.state.time_ticks, 1);
        assert!(matches!(draws.commands()[0], DrawCommand::Clear { .. }));
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut game = Game::new(Settings::default());
        // A 2 second stall only advances MAX_FRAME_DT worth of ticks
        let report = game.update(2.0);
        assert!(report.ticks <= 6);
        assert!(report.ticks >= 5);
    }

    #[test]
    fn test_negative_dt_runs_nothing() {
        let mut game = Game::new(Settings::default());
        assert_eq!(game.update(-1.0).ticks, 0);
    }

    #[test]
    fn test_input_applies_on_next_frame_even_without_ticks() {
        let mut game = Game::new(Settings::default());
        game.input.key_down("Space");
        // Too short for a tick
        let report = game.update(0.001);
        assert_eq!(report.ticks, 0);
        assert_eq!(game.state.tower.len(), 1);
        assert!(matches!(report.events[0], GameEvent::Locked { level: 0, .. }));
        assert_eq!(game.camera.offset, 50.0);
    }

    #[test]
    fn test_frame_rate_independence() {
        let mut slow = run(Game::new(Settings::default()), FixedClock::at_fps(30.0));
        let mut fast = run(Game::new(Settings::default()), FixedClock::at_fps(120.0));

        // One second of wall-clock time each
        let slow_ticks: u32 = slow.by_ref().take(31).map(|f| f.ticks).sum();
        let fast_ticks: u32 = fast.by_ref().take(121).map(|f| f.ticks).sum();
        assert!((59..=62).contains(&slow_ticks));
        assert!((59..=62).contains(&fast_ticks));
    }

    #[test]
    fn test_frames_restart_replays() {
        let clock = ScriptedClock::new(vec![0.0, 16.0, 40.0, 41.0, 75.0]);
        let mut frames = run(Game::new(Settings::default()), clock);
        frames.game_mut().input.key_down("Space");

        let first: Vec<Frame> = frames.by_ref().take(8).collect();
        assert_eq!(first[0].index, 0);
        assert_eq!(first[7].index, 7);
        assert!(matches!(first[0].events[0], GameEvent::Locked { .. }));

        frames.restart();
        frames.game_mut().input.key_down("Space");
        let second: Vec<Frame> = frames.by_ref().take(8).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_idle_mode_builds_a_tower() {
        let settings = Settings {
            idle_mode: true,
            ..Default::default()
        };
        let mut frames = run(Game::new(settings), FixedClock::sim_rate());
        let locks = frames
            .by_ref()
            .take(600)
            .flat_map(|f| f.events)
            .filter(|e| matches!(e, GameEvent::Locked { .. }))
            .count();
        assert!(locks > 3);
        assert_eq!(frames.game().state.tower.len(), locks);
    }

    #[test]
    fn test_camera_follows_locks() {
        let mut game = Game::new(Settings::default());
        game.input.push(Intent::Lock);
        game.input.push(Intent::Lock);
        let mut draws = DrawList::new();
        game.frame(0.0, &mut draws);
        assert_eq!(game.camera.offset, 100.0);
        // Bottom level (world y 550) is drawn 100 units lower
        let rects: Vec<_> = draws.rects().collect();
        assert_eq!(rects[1].1, 650.0);
    }
}
