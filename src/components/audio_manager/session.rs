use crate::api::Mezmur;

/// The process-lifetime record of what is loaded and playing.
///
/// Telemetry fields are written only from the shared `<audio>` element's
/// events and the controller's commands; UI code reads snapshots and never
/// mutates them directly.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackSession {
    pub current_track: Option<Mezmur>,
    pub is_playing: bool,
    /// Seconds into the current track.
    pub position: f64,
    /// Seconds, 0.0 until the element reports metadata.
    pub duration: f64,
    /// Always within [0, 1].
    pub volume: f64,
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self {
            current_track: None,
            is_playing: false,
            position: 0.0,
            duration: 0.0,
            volume: 0.8,
        }
    }
}

impl PlaybackSession {
    /// Derived progress in [0, 100]; zero while idle or before metadata.
    pub fn progress_percent(&self) -> f64 {
        if self.duration > 0.0 {
            (self.position / self.duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    /// Make `track` current. Returns true when the media source must be
    /// rebound (a different track, or nothing loaded yet); position,
    /// duration and progress are zeroed in that case. Re-loading the track
    /// that is already current keeps its position so play() resumes.
    pub fn load_track(&mut self, track: &Mezmur) -> bool {
        let same = self
            .current_track
            .as_ref()
            .map(|current| current.id == track.id)
            .unwrap_or(false);
        self.current_track = Some(track.clone());
        if same {
            return false;
        }
        self.is_playing = false;
        self.position = 0.0;
        self.duration = 0.0;
        true
    }

    pub fn mark_playing(&mut self) {
        if self.current_track.is_some() {
            self.is_playing = true;
        }
    }

    pub fn mark_paused(&mut self) {
        self.is_playing = false;
    }

    /// The track ran out: stopped, rewound to the start, track retained so
    /// the UI can offer a replay.
    pub fn mark_ended(&mut self) {
        self.is_playing = false;
        self.position = 0.0;
    }

    /// Back to the idle state. Volume is user preference and survives.
    pub fn clear(&mut self) {
        self.current_track = None;
        self.is_playing = false;
        self.position = 0.0;
        self.duration = 0.0;
    }

    pub fn set_volume(&mut self, volume: f64) {
        if volume.is_finite() {
            self.volume = volume.clamp(0.0, 1.0);
        }
    }

    pub fn set_position(&mut self, seconds: f64) {
        if self.current_track.is_some() && seconds.is_finite() {
            self.position = seconds.max(0.0);
        }
    }

    pub fn set_duration(&mut self, seconds: f64) {
        if self.current_track.is_some() && seconds.is_finite() && seconds >= 0.0 {
            self.duration = seconds;
        }
    }

    /// Clamp a requested seek target into the playable range.
    pub fn clamped_seek(&self, seconds: f64) -> f64 {
        if !seconds.is_finite() {
            return 0.0;
        }
        seconds.clamp(0.0, self.duration.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> Mezmur {
        Mezmur {
            id: id.to_string(),
            title: format!("Hymn {id}"),
            artist: "Choir".to_string(),
            audio_url: format!("https://cdn.example.org/{id}.mp3"),
            lyrics: None,
            is_downloadable: false,
            category_id: None,
            created_at: None,
        }
    }

    #[test]
    fn switching_tracks_resets_telemetry() {
        let mut session = PlaybackSession::default();
        assert!(session.load_track(&track("a")));
        session.mark_playing();
        session.set_duration(200.0);
        session.set_position(42.0);

        assert!(session.load_track(&track("b")));
        assert_eq!(
            session.current_track.as_ref().map(|t| t.id.as_str()),
            Some("b")
        );
        assert!(!session.is_playing);
        assert_eq!(session.position, 0.0);
        assert_eq!(session.duration, 0.0);
        assert_eq!(session.progress_percent(), 0.0);
    }

    #[test]
    fn reloading_the_current_track_keeps_position() {
        let mut session = PlaybackSession::default();
        session.load_track(&track("a"));
        session.mark_playing();
        session.set_duration(200.0);
        session.set_position(42.0);

        assert!(!session.load_track(&track("a")));
        assert_eq!(session.position, 42.0);
        assert_eq!(session.duration, 200.0);
    }

    #[test]
    fn pause_keeps_track_and_position() {
        let mut session = PlaybackSession::default();
        session.load_track(&track("a"));
        session.mark_playing();
        session.set_duration(100.0);
        session.set_position(30.0);

        session.mark_paused();
        assert!(!session.is_playing);
        assert_eq!(session.position, 30.0);

        session.mark_playing();
        assert!(session.is_playing);
        assert_eq!(session.position, 30.0);
        assert_eq!(
            session.current_track.as_ref().map(|t| t.id.as_str()),
            Some("a")
        );
    }

    #[test]
    fn mark_playing_without_track_is_a_no_op() {
        let mut session = PlaybackSession::default();
        session.mark_playing();
        assert!(!session.is_playing);
        assert_eq!(session, PlaybackSession::default());
    }

    #[test]
    fn ended_rewinds_but_retains_the_track() {
        let mut session = PlaybackSession::default();
        session.load_track(&track("a"));
        session.mark_playing();
        session.set_duration(180.0);
        session.set_position(180.0);

        session.mark_ended();
        assert!(!session.is_playing);
        assert_eq!(session.position, 0.0);
        assert_eq!(session.progress_percent(), 0.0);
        assert!(session.current_track.is_some());
    }

    #[test]
    fn volume_clamps_at_both_bounds() {
        let mut session = PlaybackSession::default();
        session.set_volume(-0.5);
        assert_eq!(session.volume, 0.0);
        session.set_volume(1.7);
        assert_eq!(session.volume, 1.0);
        session.set_volume(f64::NAN);
        assert_eq!(session.volume, 1.0);
        session.set_volume(0.35);
        assert_eq!(session.volume, 0.35);
    }

    #[test]
    fn volume_survives_clear() {
        let mut session = PlaybackSession::default();
        session.load_track(&track("a"));
        session.set_volume(0.25);
        session.clear();
        assert_eq!(session.volume, 0.25);
        assert!(session.current_track.is_none());
        assert!(!session.is_playing);
    }

    #[test]
    fn seek_clamps_into_playable_range() {
        let mut session = PlaybackSession::default();
        session.load_track(&track("a"));
        session.set_duration(120.0);
        assert_eq!(session.clamped_seek(-3.0), 0.0);
        assert_eq!(session.clamped_seek(60.0), 60.0);
        assert_eq!(session.clamped_seek(500.0), 120.0);
    }

    #[test]
    fn progress_is_derived_and_bounded() {
        let mut session = PlaybackSession::default();
        session.load_track(&track("a"));
        session.set_duration(200.0);
        session.set_position(50.0);
        assert_eq!(session.progress_percent(), 25.0);
        session.set_position(400.0);
        assert_eq!(session.progress_percent(), 100.0);
    }
}
