use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::thread;

use rodio::{Decoder, OutputStream, Sink};
use tracing::{debug, warn};
use wardrobe_application::{ApplicationError, AudioCue};

/// Plays sound effects through the default output device.
///
/// The file is opened and probed on the calling thread so a missing or
/// unsupported file is reported to the caller; playback itself runs on a
/// detached thread that owns the output stream until the effect ends.
#[derive(Debug, Default)]
pub struct RodioAudioCue;

impl AudioCue for RodioAudioCue {
    fn play_effect(&self, sound: &Path) -> Result<(), ApplicationError> {
        let file = File::open(sound)
            .map_err(|error| ApplicationError::Io(format!("{}: {error}", sound.display())))?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|error| ApplicationError::Audio(format!("{}: {error}", sound.display())))?;

        let label = sound.display().to_string();
        thread::Builder::new()
            .name("sound-effect".to_string())
            .spawn(move || {
                let (_stream, handle) = match OutputStream::try_default() {
                    Ok(output) => output,
                    Err(error) => {
                        warn!(sound = %label, %error, "no audio output available");
                        return;
                    }
                };
                let sink = match Sink::try_new(&handle) {
                    Ok(sink) => sink,
                    Err(error) => {
                        warn!(sound = %label, %error, "failed to open audio sink");
                        return;
                    }
                };
                sink.append(source);
                sink.sleep_until_end();
                debug!(sound = %label, "sound effect finished");
            })
            .map_err(|error| ApplicationError::Audio(error.to_string()))?;

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct SilentAudioCue;

impl AudioCue for SilentAudioCue {
    fn play_effect(&self, sound: &Path) -> Result<(), ApplicationError> {
        debug!(sound = %sound.display(), "sound disabled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_sound_file_is_an_io_error() {
        let dir = TempDir::new().expect("tempdir");
        let result = RodioAudioCue.play_effect(&dir.path().join("Slynk.mp3"));
        assert!(matches!(result, Err(ApplicationError::Io(_))));
    }

    #[test]
    fn unrecognised_sound_file_is_an_audio_error() {
        let dir = TempDir::new().expect("tempdir");
        let sound = dir.path().join("Slynk.mp3");
        std::fs::write(&sound, b"definitely not audio").expect("write");
        let result = RodioAudioCue.play_effect(&sound);
        assert!(matches!(result, Err(ApplicationError::Audio(_))));
    }

    #[test]
    fn silent_cue_always_succeeds() {
        assert!(SilentAudioCue
            .play_effect(Path::new("assets/missing.mp3"))
            .is_ok());
    }
}
