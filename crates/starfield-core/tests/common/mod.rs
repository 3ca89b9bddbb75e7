// Test doubles shared by the host-side integration tests.
#![allow(dead_code)]

use glam::Vec2;
use starfield_core::{MediaElement, MediaError, PlayerView, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle { center: Vec2, radius: f32, alpha: f32 },
    Line { from: Vec2, to: Vec2, width: f32, alpha: f32 },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn lines(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            alpha,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, alpha: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            alpha,
        });
    }
}

pub struct FakeMedia {
    pub paused: bool,
    pub current_time: f64,
    pub duration: f64,
    pub reject_play: bool,
    pub play_calls: usize,
    pub pause_calls: usize,
}

impl FakeMedia {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            paused: true,
            current_time: 0.0,
            duration,
            reject_play: false,
            play_calls: 0,
            pause_calls: 0,
        }
    }
}

impl MediaElement for FakeMedia {
    fn paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.play_calls += 1;
        if self.reject_play {
            return Err(MediaError::PlayRejected("NotAllowedError".into()));
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
        self.paused = true;
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
    }

    fn duration(&self) -> f64 {
        self.duration
    }
}

#[derive(Default)]
pub struct RecordingView {
    pub playing: Option<bool>,
    pub progress: Option<f64>,
    pub progress_writes: usize,
    pub elapsed: Option<String>,
    pub total: Option<String>,
}

impl PlayerView for RecordingView {
    fn show_playing(&mut self, playing: bool) {
        self.playing = Some(playing);
    }

    fn set_progress_percent(&mut self, percent: f64) {
        self.progress = Some(percent);
        self.progress_writes += 1;
    }

    fn set_elapsed_text(&mut self, text: &str) {
        self.elapsed = Some(text.to_string());
    }

    fn set_total_text(&mut self, text: &str) {
        self.total = Some(text.to_string());
    }
}
