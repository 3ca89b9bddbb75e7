// DOM hooks and front-end tuning constants

// Element ids
pub const CANVAS_ID: &str = "starfield";
pub const BACKGROUND_LAYER_ID: &str = "background-layer";
pub const AUDIO_ID: &str = "audio-player";
pub const PLAY_BUTTON_ID: &str = "play-pause";
pub const PROGRESS_FILL_ID: &str = "progress-fill";
pub const PROGRESS_CONTAINER_ID: &str = "progress-container";

// Selectors
pub const ICON_PLAY_SELECTOR: &str = ".icon-play"; // inside the play button
pub const ICON_PAUSE_SELECTOR: &str = ".icon-pause";
pub const CURRENT_TIME_SELECTOR: &str = ".current-time";
pub const TOTAL_TIME_SELECTOR: &str = ".total-time";
pub const PLAYER_CARD_SELECTOR: &str = ".glass-card";

// Classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const PLAYING_CLASS: &str = "playing";

// Debug frame-rate report cadence
pub const FPS_LOG_INTERVAL_FRAMES: u32 = 600;
