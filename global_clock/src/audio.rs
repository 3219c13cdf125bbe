//! Ticking sound playback
//!
//! One rodio sink, at most one active stream: switching tracks clears the
//! sink before appending the next decoder. Looping is driven by the update
//! loop polling `poll_loop` each frame and re-appending when the sink drains,
//! which stays correct if observed twice in quick succession.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use shared::{AudioCommand, SOUND_FILES};

pub struct AudioManager {
    // The stream must outlive the sink or playback goes silent.
    _stream: OutputStream,
    _handle: OutputStreamHandle,
    sink: Sink,
    tracks: Vec<PathBuf>,
    current: usize,
    enabled: bool,
}

impl AudioManager {
    /// Open the default output device. Failure is logged and yields `None`;
    /// the clock runs silently.
    pub fn new(media_root: &std::path::Path, enabled: bool, start_index: usize) -> Option<Self> {
        let (stream, handle) = match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(e) => {
                eprintln!("Audio disabled, no output device: {}", e);
                return None;
            }
        };
        let sink = match Sink::try_new(&handle) {
            Ok(sink) => sink,
            Err(e) => {
                eprintln!("Audio disabled, could not create sink: {}", e);
                return None;
            }
        };

        let tracks = SOUND_FILES
            .iter()
            .map(|rel| media_root.join(rel))
            .collect();

        let mut manager = Self {
            _stream: stream,
            _handle: handle,
            sink,
            tracks,
            current: start_index % SOUND_FILES.len(),
            enabled,
        };
        if enabled {
            manager.start_current();
        } else {
            manager.sink.pause();
        }
        Some(manager)
    }

    /// Apply a state-machine audio reaction
    pub fn apply(&mut self, command: AudioCommand) {
        match command {
            AudioCommand::Resume => {
                self.enabled = true;
                if self.sink.empty() {
                    self.start_current();
                }
                self.sink.play();
            }
            AudioCommand::Pause => {
                self.enabled = false;
                self.sink.pause();
            }
            AudioCommand::StartTrack(index) => {
                self.current = index % self.tracks.len();
                self.start_current();
            }
        }
    }

    /// Re-append the current track when the previous pass finished. Called
    /// once per frame; a no-op while the sink still holds audio or while
    /// sound is off.
    pub fn poll_loop(&mut self) {
        if self.enabled && self.sink.empty() {
            self.start_current();
        }
    }

    /// Stop whatever is playing and start the current track from the top
    fn start_current(&mut self) {
        self.sink.stop();
        let path = &self.tracks[self.current];
        let source = File::open(path)
            .map_err(|e| format!("{}: {}", path.display(), e))
            .and_then(|file| {
                Decoder::new(BufReader::new(file)).map_err(|e| format!("{}: {}", path.display(), e))
            });
        match source {
            Ok(source) => {
                self.sink.append(source);
                if self.enabled {
                    self.sink.play();
                }
            }
            Err(e) => eprintln!("Error playing clock sound: {}", e),
        }
    }
}
