/// `M:SS` for a playback position in seconds. Minutes are not padded and
/// never roll over into hours. Unknown or negative input reads as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let min = (seconds / 60.0).floor() as u64;
    let sec = (seconds % 60.0).floor() as u64;
    format!("{min}:{sec:02}")
}
