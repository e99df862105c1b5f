//! Speech recognition state machine
//!
//! The engine is push-driven: whoever owns it feeds [`SpeechEvent`]s into
//! [`VoiceRecognizer::handle`]. Transitions are a pure function
//! ([`transition`]) so the table can be tested on its own.
//!
//! | state | event | next | effect |
//! |-------|-------|------|--------|
//! | idle | start | listening | start engine |
//! | listening | interim result | transcribing | show |
//! | listening | final result | listening | emit |
//! | transcribing | interim result | transcribing | show |
//! | transcribing | final result | listening | emit |
//! | listening, transcribing | end | restarting | - |
//! | restarting | restarted | listening | start engine |
//! | any active | stop | idle | stop engine |
//! | any active | error | idle | - |
//!
//! Results below [`MIN_CONFIDENCE`] are dropped without a transition.
//! Every other pair is a no-op.

use serde::Serialize;
use thiserror::Error;

/// Results below this confidence are treated as background noise
pub const MIN_CONFIDENCE: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListenState {
    #[default]
    Idle,
    Listening,
    Transcribing,
    Restarting,
}

impl ListenState {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionResult {
    pub transcript: String,
    pub confidence: f32,
    pub is_final: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpeechEvent {
    /// User pressed the microphone
    Start,
    /// Engine produced a (partial) transcript
    Result(RecognitionResult),
    /// Engine session ended on its own
    End,
    /// Restart delay elapsed, engine may be started again
    Restarted,
    /// User pressed the microphone again
    Stop,
    /// Engine reported a failure
    Error(String),
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    StartEngine,
    StopEngine,
    /// Interim text to display
    Show(String),
    /// Final text to act on
    Emit(String),
}

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Speech engine unavailable: {0}")]
    Unavailable(String),

    #[error("Speech engine failed to start: {0}")]
    StartFailed(String),
}

/// Recognition engine contract
///
/// Implementations wrap a platform recogniser configured for
/// [`super::LANGUAGE`] with interim results enabled.
pub trait SpeechEngine: Send {
    fn start(&mut self) -> Result<(), SpeechError>;
    fn stop(&mut self);
}

/// Transition table
pub fn transition(state: ListenState, event: &SpeechEvent) -> (ListenState, Effect) {
    use ListenState::*;

    match (state, event) {
        (Idle, SpeechEvent::Start) => (Listening, Effect::StartEngine),

        (Listening | Transcribing, SpeechEvent::Result(r)) if r.confidence < MIN_CONFIDENCE => {
            (state, Effect::None)
        }
        (Listening | Transcribing, SpeechEvent::Result(r)) if r.is_final => {
            (Listening, Effect::Emit(r.transcript.clone()))
        }
        (Listening | Transcribing, SpeechEvent::Result(r)) => {
            (Transcribing, Effect::Show(r.transcript.clone()))
        }

        (Listening | Transcribing, SpeechEvent::End) => (Restarting, Effect::None),
        (Restarting, SpeechEvent::Restarted) => (Listening, Effect::StartEngine),

        (Listening | Transcribing | Restarting, SpeechEvent::Stop) => (Idle, Effect::StopEngine),
        (Listening | Transcribing | Restarting, SpeechEvent::Error(_)) => (Idle, Effect::None),

        _ => (state, Effect::None),
    }
}

/// Drives a [`SpeechEngine`] through the transition table
pub struct VoiceRecognizer<E: SpeechEngine> {
    engine: E,
    state: ListenState,
}

impl<E: SpeechEngine> VoiceRecognizer<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            state: ListenState::Idle,
        }
    }

    pub fn state(&self) -> ListenState {
        self.state
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Feed one event; returns the effect that was carried out
    ///
    /// If the engine refuses to start the machine falls back to idle.
    pub fn handle(&mut self, event: SpeechEvent) -> Result<Effect, SpeechError> {
        if let SpeechEvent::Error(reason) = &event {
            tracing::warn!(state = ?self.state, reason = %reason, "Speech engine error");
        }

        let (next, effect) = transition(self.state, &event);
        match &effect {
            Effect::StartEngine => {
                if let Err(e) = self.engine.start() {
                    self.state = ListenState::Idle;
                    return Err(e);
                }
            }
            Effect::StopEngine => self.engine.stop(),
            Effect::None | Effect::Show(_) | Effect::Emit(_) => {}
        }

        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, "Listen state changed");
        }
        self.state = next;
        Ok(effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeEngine {
        starts: usize,
        stops: usize,
        fail_start: bool,
    }

    impl SpeechEngine for FakeEngine {
        fn start(&mut self) -> Result<(), SpeechError> {
            if self.fail_start {
                return Err(SpeechError::StartFailed("no microphone".into()));
            }
            self.starts += 1;
            Ok(())
        }

        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    fn result(text: &str, confidence: f32, is_final: bool) -> SpeechEvent {
        SpeechEvent::Result(RecognitionResult {
            transcript: text.to_string(),
            confidence,
            is_final,
        })
    }

    #[test]
    fn test_table_rows() {
        use ListenState::*;

        assert_eq!(transition(Idle, &SpeechEvent::Start).0, Listening);
        assert_eq!(
            transition(Listening, &result("ani", 0.9, false)),
            (Transcribing, Effect::Show("ani".into()))
        );
        assert_eq!(
            transition(Listening, &result("anita 5", 0.9, true)),
            (Listening, Effect::Emit("anita 5".into()))
        );
        assert_eq!(
            transition(Transcribing, &result("anita", 0.9, false)).0,
            Transcribing
        );
        assert_eq!(
            transition(Transcribing, &result("anita 5", 0.9, true)).0,
            Listening
        );
        assert_eq!(transition(Listening, &SpeechEvent::End).0, Restarting);
        assert_eq!(transition(Transcribing, &SpeechEvent::End).0, Restarting);
        assert_eq!(
            transition(Restarting, &SpeechEvent::Restarted),
            (Listening, Effect::StartEngine)
        );
        for active in [Listening, Transcribing, Restarting] {
            assert_eq!(
                transition(active, &SpeechEvent::Stop),
                (Idle, Effect::StopEngine)
            );
            assert_eq!(
                transition(active, &SpeechEvent::Error("network".into())),
                (Idle, Effect::None)
            );
        }
    }

    #[test]
    fn test_low_confidence_dropped() {
        assert_eq!(
            transition(ListenState::Listening, &result("noise", 0.69, true)),
            (ListenState::Listening, Effect::None)
        );
        assert_eq!(
            transition(ListenState::Transcribing, &result("noise", 0.1, false)),
            (ListenState::Transcribing, Effect::None)
        );
    }

    #[test]
    fn test_unlisted_pairs_are_noops() {
        use ListenState::*;
        assert_eq!(transition(Idle, &SpeechEvent::Stop), (Idle, Effect::None));
        assert_eq!(transition(Idle, &result("x", 1.0, true)), (Idle, Effect::None));
        assert_eq!(
            transition(Listening, &SpeechEvent::Start),
            (Listening, Effect::None)
        );
        assert_eq!(
            transition(Restarting, &result("x", 1.0, true)),
            (Restarting, Effect::None)
        );
    }

    #[test]
    fn test_recognizer_session() {
        let mut rec = VoiceRecognizer::new(FakeEngine::default());
        rec.handle(SpeechEvent::Start).unwrap();
        assert_eq!(rec.state(), ListenState::Listening);

        rec.handle(result("ravi", 0.8, false)).unwrap();
        assert_eq!(rec.state(), ListenState::Transcribing);

        let effect = rec.handle(result("ravi 3", 0.95, true)).unwrap();
        assert_eq!(effect, Effect::Emit("ravi 3".into()));

        rec.handle(SpeechEvent::End).unwrap();
        assert_eq!(rec.state(), ListenState::Restarting);
        rec.handle(SpeechEvent::Restarted).unwrap();
        assert_eq!(rec.state(), ListenState::Listening);
        assert_eq!(rec.engine().starts, 2);

        rec.handle(SpeechEvent::Stop).unwrap();
        assert_eq!(rec.state(), ListenState::Idle);
        assert_eq!(rec.engine().stops, 1);
        assert!(!rec.state().is_active());
    }

    #[test]
    fn test_failed_start_returns_to_idle() {
        let mut rec = VoiceRecognizer::new(FakeEngine {
            fail_start: true,
            ..Default::default()
        });
        assert!(rec.handle(SpeechEvent::Start).is_err());
        assert_eq!(rec.state(), ListenState::Idle);
    }
}
