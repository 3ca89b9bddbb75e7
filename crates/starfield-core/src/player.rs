//! Audio player controller.
//!
//! The controller holds no playback state of its own: the media element is
//! the source of truth and the view only mirrors it. Decoding and playback
//! belong to the host; this side issues play/pause/seek and reacts to the
//! element's time-update, metadata and ended notifications.

use crate::time::format_time;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("playback request rejected: {0}")]
    PlayRejected(String),
}

/// The subset of an HTML media element the player needs.
pub trait MediaElement {
    fn paused(&self) -> bool;
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    /// NaN until metadata has loaded.
    fn duration(&self) -> f64;
}

/// Visual side of the player: icons, progress fill and the two time labels.
pub trait PlayerView {
    /// Show exactly one of the play/pause icons.
    fn show_playing(&mut self, playing: bool);
    fn set_progress_percent(&mut self, percent: f64);
    fn set_elapsed_text(&mut self, text: &str);
    fn set_total_text(&mut self, text: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
}

pub struct PlayerController<M, V> {
    media: M,
    view: V,
}

impl<M: MediaElement, V: PlayerView> PlayerController<M, V> {
    pub fn new(media: M, view: V) -> Self {
        Self { media, view }
    }

    /// Play when paused, pause when playing. Playback is fire-and-forget: a
    /// rejected play request is logged and the view still switches.
    pub fn toggle(&mut self) -> PlaybackState {
        if self.media.paused() {
            if let Err(e) = self.media.play() {
                log::warn!("[audio] {}", e);
            }
            self.view.show_playing(true);
            log::info!("[audio] playing");
            PlaybackState::Playing
        } else {
            self.media.pause();
            self.view.show_playing(false);
            log::info!("[audio] paused");
            PlaybackState::Paused
        }
    }

    /// Refresh the progress fill and elapsed label. Returns the applied
    /// percentage, or `None` while the duration is unknown (NaN). Sources
    /// without a finite length still show elapsed time over an empty bar.
    pub fn on_time_update(&mut self) -> Option<f64> {
        let current = self.media.current_time();
        let percent = progress_percent(current, self.media.duration())?;
        self.view.set_progress_percent(percent);
        self.view.set_elapsed_text(&format_time(current));
        Some(percent)
    }

    pub fn on_metadata_loaded(&mut self) {
        let duration = self.media.duration();
        if duration.is_finite() && duration >= 0.0 {
            self.view.set_total_text(&format_time(duration));
        }
    }

    /// Natural end of track: the element is paused again.
    pub fn on_ended(&mut self) {
        self.view.show_playing(false);
        log::info!("[audio] ended");
    }

    /// Jump to the position under a click on the progress track. Returns the
    /// new position in seconds.
    pub fn seek(&mut self, click_x: f64, track_width: f64) -> Option<f64> {
        let position = seek_position(click_x, track_width, self.media.duration())?;
        self.media.set_current_time(position);
        log::debug!("[audio] seek to {:.2}s", position);
        Some(position)
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

/// `current / duration * 100`; `None` only while the duration is NaN.
/// Infinite or zero durations have no meaningful fraction and read as 0%.
#[inline]
pub fn progress_percent(current: f64, duration: f64) -> Option<f64> {
    if duration.is_nan() {
        return None;
    }
    if !duration.is_finite() || duration <= 0.0 {
        return Some(0.0);
    }
    Some(current / duration * 100.0)
}

/// Click fraction of the track, clamped to `[0, 1]`, scaled by `duration`.
#[inline]
pub fn seek_position(click_x: f64, track_width: f64, duration: f64) -> Option<f64> {
    if track_width.is_nan() || track_width <= 0.0 {
        return None;
    }
    if !duration.is_finite() || !click_x.is_finite() {
        return None;
    }
    let fraction = (click_x / track_width).clamp(0.0, 1.0);
    Some(fraction * duration)
}
