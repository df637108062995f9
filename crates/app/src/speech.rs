//! Terminal speech: an external synthesizer command and the fallback hook.

use std::process::{Child, Command, Stdio};
use std::sync::{Mutex, OnceLock, PoisonError};

use services::{PronunciationDisplay, SpeechBackend, SpeechError, Utterance, Voice};

/// Words per minute the synthesizer uses at rate 1.0.
const BASE_WORDS_PER_MINUTE: f32 = 175.0;
/// Pitch value (0-99) the synthesizer uses at pitch 1.0.
const BASE_PITCH: f32 = 50.0;
/// Amplitude (0-200) the synthesizer uses at volume 1.0.
const BASE_AMPLITUDE: f32 = 100.0;

/// Speaks through an espeak-compatible command such as `espeak-ng`.
pub struct CommandBackend {
    program: String,
    available: OnceLock<bool>,
    voices: OnceLock<Vec<Voice>>,
    playing: Mutex<Option<Child>>,
}

impl CommandBackend {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            available: OnceLock::new(),
            voices: OnceLock::new(),
            playing: Mutex::new(None),
        }
    }

    fn quiet(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl SpeechBackend for CommandBackend {
    fn is_available(&self) -> bool {
        *self.available.get_or_init(|| {
            let found = self
                .quiet()
                .arg("--version")
                .status()
                .is_ok_and(|status| status.success());
            if !found {
                tracing::info!(program = %self.program, "speech command not found");
            }
            found
        })
    }

    fn voices(&self) -> Vec<Voice> {
        self.voices
            .get_or_init(|| match Command::new(&self.program).arg("--voices").output() {
                Ok(output) if output.status.success() => {
                    parse_voices(&String::from_utf8_lossy(&output.stdout))
                }
                Ok(_) | Err(_) => Vec::new(),
            })
            .clone()
    }

    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        if !self.is_available() {
            return Err(SpeechError::Unavailable);
        }

        let mut playing = self.playing.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(mut previous) = playing.take() {
            // Cancel speech still in progress; it may already have exited.
            let _ = previous.kill();
            let _ = previous.wait();
        }

        let child = self.quiet().args(command_args(utterance)).spawn()?;
        *playing = Some(child);
        Ok(())
    }
}

impl Drop for CommandBackend {
    fn drop(&mut self) {
        let playing = self
            .playing
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(mut child) = playing.take() {
            let _ = child.wait();
        }
    }
}

/// Arguments for one utterance: speed, pitch, amplitude, voice, then the text.
fn command_args(utterance: &Utterance) -> Vec<String> {
    let scaled = |base: f32, factor: f32| (base * factor).round().max(0.0) as u32;
    vec![
        "-s".to_string(),
        scaled(BASE_WORDS_PER_MINUTE, utterance.rate).to_string(),
        "-p".to_string(),
        scaled(BASE_PITCH, utterance.pitch).min(99).to_string(),
        "-a".to_string(),
        scaled(BASE_AMPLITUDE, utterance.volume).min(200).to_string(),
        "-v".to_string(),
        utterance.language.to_lowercase(),
        "--".to_string(),
        utterance.text.clone(),
    ]
}

/// Parse the table printed by `espeak-ng --voices`.
///
/// Columns are `Pty Language Age/Gender VoiceName File [Other Languages]`.
fn parse_voices(table: &str) -> Vec<Voice> {
    table
        .lines()
        .skip(1)
        .filter_map(|line| {
            let columns: Vec<&str> = line.split_whitespace().collect();
            match columns.as_slice() {
                [_, language, _, name, ..] => Some(Voice::new(name.replace('_', " "), *language)),
                _ => None,
            }
        })
        .collect()
}

/// Fallback hook for the terminal. The quiz loop prints displayed
/// pronunciations to its own writer, so this only records the event.
#[derive(Debug, Default)]
pub struct TranscriptDisplay;

impl PronunciationDisplay for TranscriptDisplay {
    fn show(&self, text: &str) {
        tracing::debug!(text, "pronunciation shown as text");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::SpeechSettings;

    #[test]
    fn args_scale_settings_to_synthesizer_units() {
        let mut utterance = SpeechSettings::default().utterance("sain baina uu", &[]);
        utterance.rate = 0.8;
        assert_eq!(
            command_args(&utterance),
            vec![
                "-s", "140", "-p", "50", "-a", "100", "-v", "en-us", "--", "sain baina uu"
            ]
        );
    }

    #[test]
    fn args_use_selected_voice_language() {
        let voices = [Voice::new("Spanish (Spain)", "es")];
        let utterance = SpeechSettings::default().utterance("bayarlalaa", &voices);
        let args = command_args(&utterance);
        assert_eq!(args[7], "es");
    }

    #[test]
    fn parses_voice_table() {
        let table = "\
Pty Language       Age/Gender VoiceName          File                 Other Languages
 5  af              --/M      Afrikaans          gmw/af
 5  en-us           --/M      English_(America)  gmw/en-US            (en 3)
 5  es              --/M      Spanish_(Spain)    roa/es
";
        let voices = parse_voices(table);
        assert_eq!(voices.len(), 3);
        assert_eq!(voices[1], Voice::new("English (America)", "en-us"));
        assert_eq!(
            SpeechSettings::default().select_voice(&voices).unwrap().language,
            "es"
        );
    }

    #[test]
    fn missing_command_is_unavailable() {
        let backend = CommandBackend::new("definitely-not-a-speech-command-4821");
        assert!(!backend.is_available());
        assert!(backend.voices().is_empty());

        let utterance = SpeechSettings::default().utterance("us", &[]);
        assert!(matches!(
            backend.speak(&utterance),
            Err(SpeechError::Unavailable)
        ));
    }
}
