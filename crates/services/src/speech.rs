//! Pronunciation playback.
//!
//! Speech is best effort. A `SpeechService` hands text to a synthesis backend
//! when one is available and otherwise shows the pronunciation through a
//! `PronunciationDisplay`. Callers never see a speech failure.

use std::sync::Arc;

use crate::error::SpeechError;

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Playback tuning for learners: slower than normal, neutral pitch.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechSettings {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    /// Language tag fragment matched against voice languages.
    pub preferred_language: String,
    /// Lowercase fragments matched against voice names.
    pub preferred_name_hints: Vec<String>,
    /// Language requested when no preferred voice exists.
    pub fallback_language: String,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            rate: 0.7,
            pitch: 1.0,
            volume: 1.0,
            preferred_language: "es".to_string(),
            preferred_name_hints: vec!["spanish".to_string(), "español".to_string()],
            fallback_language: "en-US".to_string(),
        }
    }
}

impl SpeechSettings {
    /// First voice whose language contains the preferred tag or whose name
    /// contains one of the hints, case-insensitively.
    #[must_use]
    pub fn select_voice<'a>(&self, voices: &'a [Voice]) -> Option<&'a Voice> {
        let language = self.preferred_language.to_lowercase();
        voices.iter().find(|voice| {
            let name = voice.name.to_lowercase();
            voice.language.to_lowercase().contains(&language)
                || self
                    .preferred_name_hints
                    .iter()
                    .any(|hint| name.contains(hint.as_str()))
        })
    }

    /// Build the utterance for `text` given the voices a backend offers.
    #[must_use]
    pub fn utterance(&self, text: &str, voices: &[Voice]) -> Utterance {
        let (voice, language) = match self.select_voice(voices) {
            Some(voice) => (Some(voice.clone()), voice.language.clone()),
            None => (None, self.fallback_language.clone()),
        };
        Utterance {
            text: text.to_string(),
            rate: self.rate,
            pitch: self.pitch,
            volume: self.volume,
            language,
            voice,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub language: String,
}

impl Voice {
    #[must_use]
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
        }
    }
}

/// One request to a synthesis backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    pub language: String,
    pub voice: Option<Voice>,
}

//
// ─── SEAMS ─────────────────────────────────────────────────────────────────────
//

/// A speech synthesizer.
pub trait SpeechBackend {
    fn is_available(&self) -> bool;

    fn voices(&self) -> Vec<Voice> {
        Vec::new()
    }

    /// Start speaking, cancelling anything still playing.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if the utterance could not be handed off.
    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError>;
}

/// Shows pronunciation text when audio is not possible.
pub trait PronunciationDisplay {
    fn show(&self, text: &str);
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechOutcome {
    Spoken,
    Displayed,
}

#[derive(Clone)]
pub struct SpeechService {
    backend: Option<Arc<dyn SpeechBackend + Send + Sync>>,
    display: Arc<dyn PronunciationDisplay + Send + Sync>,
    settings: SpeechSettings,
}

impl SpeechService {
    #[must_use]
    pub fn new(
        backend: Arc<dyn SpeechBackend + Send + Sync>,
        display: Arc<dyn PronunciationDisplay + Send + Sync>,
    ) -> Self {
        Self {
            backend: Some(backend),
            display,
            settings: SpeechSettings::default(),
        }
    }

    /// Service that always shows the pronunciation instead of speaking.
    #[must_use]
    pub fn display_only(display: Arc<dyn PronunciationDisplay + Send + Sync>) -> Self {
        Self {
            backend: None,
            display,
            settings: SpeechSettings::default(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: SpeechSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &SpeechSettings {
        &self.settings
    }

    /// Speak `text`, or display it if speech is unavailable or fails.
    pub fn speak(&self, text: &str) -> SpeechOutcome {
        let Some(backend) = self.backend.as_ref().filter(|b| b.is_available()) else {
            tracing::debug!("speech unavailable, showing pronunciation");
            self.display.show(text);
            return SpeechOutcome::Displayed;
        };

        let utterance = self.settings.utterance(text, &backend.voices());
        match backend.speak(&utterance) {
            Ok(()) => {
                tracing::debug!(
                    text,
                    voice = utterance.voice.as_ref().map_or("default", |v| v.name.as_str()),
                    "speaking"
                );
                SpeechOutcome::Spoken
            }
            Err(err) => {
                tracing::warn!(error = %err, "speech failed, showing pronunciation");
                self.display.show(text);
                SpeechOutcome::Displayed
            }
        }
    }
}

impl std::fmt::Debug for SpeechService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechService")
            .field("has_backend", &self.backend.is_some())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingDisplay {
        shown: Mutex<Vec<String>>,
    }

    impl PronunciationDisplay for RecordingDisplay {
        fn show(&self, text: &str) {
            self.shown.lock().unwrap().push(text.to_string());
        }
    }

    struct FakeBackend {
        available: bool,
        fail: bool,
        voices: Vec<Voice>,
        spoken: Mutex<Vec<Utterance>>,
    }

    impl FakeBackend {
        fn new(available: bool, fail: bool, voices: Vec<Voice>) -> Self {
            Self {
                available,
                fail,
                voices,
                spoken: Mutex::new(Vec::new()),
            }
        }
    }

    impl SpeechBackend for FakeBackend {
        fn is_available(&self) -> bool {
            self.available
        }

        fn voices(&self) -> Vec<Voice> {
            self.voices.clone()
        }

        fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
            if self.fail {
                return Err(SpeechError::Backend("device busy".into()));
            }
            self.spoken.lock().unwrap().push(utterance.clone());
            Ok(())
        }
    }

    #[test]
    fn prefers_spanish_voice_by_language_or_name() {
        let settings = SpeechSettings::default();
        let by_lang = [Voice::new("Alex", "en-US"), Voice::new("Jorge", "es-ES")];
        assert_eq!(settings.select_voice(&by_lang).unwrap().name, "Jorge");

        let by_name = [Voice::new("Alex", "en-US"), Voice::new("Spanish Latin", "x-unknown")];
        assert_eq!(
            settings.select_voice(&by_name).unwrap().name,
            "Spanish Latin"
        );

        assert!(settings.select_voice(&[Voice::new("Alex", "en-US")]).is_none());
    }

    #[test]
    fn utterance_falls_back_to_english_without_preferred_voice() {
        let utterance = SpeechSettings::default().utterance("sain", &[Voice::new("Alex", "en-US")]);
        assert_eq!(utterance.language, "en-US");
        assert!(utterance.voice.is_none());
        assert!((utterance.rate - 0.7).abs() < f32::EPSILON);
        assert!((utterance.pitch - 1.0).abs() < f32::EPSILON);
        assert!((utterance.volume - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn speaks_through_available_backend() {
        let backend = Arc::new(FakeBackend::new(
            true,
            false,
            vec![Voice::new("Jorge", "es-ES")],
        ));
        let display = Arc::new(RecordingDisplay::default());
        let service = SpeechService::new(backend.clone(), display.clone());

        assert_eq!(service.speak("bayarlalaa"), SpeechOutcome::Spoken);
        let spoken = backend.spoken.lock().unwrap();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].text, "bayarlalaa");
        assert_eq!(spoken[0].language, "es-ES");
        assert!(display.shown.lock().unwrap().is_empty());
    }

    #[test]
    fn unavailable_backend_falls_back_to_display() {
        let backend = Arc::new(FakeBackend::new(false, false, Vec::new()));
        let display = Arc::new(RecordingDisplay::default());
        let service = SpeechService::new(backend.clone(), display.clone());

        assert_eq!(service.speak("us"), SpeechOutcome::Displayed);
        assert!(backend.spoken.lock().unwrap().is_empty());
        assert_eq!(*display.shown.lock().unwrap(), vec!["us".to_string()]);
    }

    #[test]
    fn backend_failure_falls_back_to_display() {
        let backend = Arc::new(FakeBackend::new(true, true, Vec::new()));
        let display = Arc::new(RecordingDisplay::default());
        let service = SpeechService::new(backend, display.clone());

        assert_eq!(service.speak("ger"), SpeechOutcome::Displayed);
        assert_eq!(*display.shown.lock().unwrap(), vec!["ger".to_string()]);
    }

    #[test]
    fn display_only_service_never_speaks() {
        let display = Arc::new(RecordingDisplay::default());
        let service = SpeechService::display_only(display.clone());
        assert_eq!(service.speak("neg"), SpeechOutcome::Displayed);
        assert_eq!(display.shown.lock().unwrap().len(), 1);
    }
}
