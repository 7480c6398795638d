//! Feedback notifications
//!
//! The engine reports events to a fire-and-forget sink. On the web the sink
//! is a Web Audio synth with procedurally generated tones; elsewhere events
//! are logged or dropped.

/// Feedback events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Letter picked or dropped, button press
    Click,
    /// Word spelled correctly
    Correct,
    /// Wrong word or time up
    Wrong,
    /// Level complete
    Success,
    /// Hint used
    Hint,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Click => "click",
            SoundEffect::Correct => "correct",
            SoundEffect::Wrong => "wrong",
            SoundEffect::Success => "success",
            SoundEffect::Hint => "hint",
        }
    }
}

/// Receives feedback events. Must not block and must not fail visibly.
pub trait FeedbackSink {
    fn notify(&self, effect: SoundEffect);

    /// Volume (0.0 - 1.0) for sinks that produce sound
    fn set_volume(&mut self, _volume: f32) {}
}

/// Drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FeedbackSink for NullSink {
    fn notify(&self, _effect: SoundEffect) {}
}

/// Logs every event at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl FeedbackSink for LogSink {
    fn notify(&self, effect: SoundEffect) {
        log::debug!("Playing sound: {}", effect.as_str());
    }
}

#[cfg(target_arch = "wasm32")]
pub use web_audio::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web_audio {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{FeedbackSink, SoundEffect};

    /// Web Audio synth
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx, volume: 0.5 }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Single enveloped tone starting `delay` seconds from now
        fn tone(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
            level: f32,
            delay: f64,
            length: f64,
        ) {
            let Some((osc, gain)) = self.create_osc(ctx, freq, osc_type) else {
                return;
            };
            let t = ctx.current_time() + delay;

            gain.gain().set_value_at_time(0.0001, ctx.current_time()).ok();
            gain.gain().set_value_at_time(level, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + length)
                .ok();

            osc.start_with_when(t).ok();
            osc.stop_with_when(t + length + 0.02).ok();
        }

        /// Click - short tick
        fn play_click(&self, ctx: &AudioContext, vol: f32) {
            self.tone(ctx, 800.0, OscillatorType::Triangle, vol * 0.25, 0.0, 0.04);
        }

        /// Correct - rising major arpeggio
        fn play_correct(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [523.25, 659.25, 783.99].into_iter().enumerate() {
                self.tone(ctx, freq, OscillatorType::Sine, vol * 0.4, i as f64 * 0.08, 0.15);
            }
        }

        /// Wrong - low falling buzz
        fn play_wrong(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 220.0, OscillatorType::Sawtooth) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                .ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(110.0, t + 0.3)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.32).ok();
        }

        /// Success - fanfare
        fn play_success(&self, ctx: &AudioContext, vol: f32) {
            let notes = [523.25, 659.25, 783.99, 1046.5];
            for (i, freq) in notes.into_iter().enumerate() {
                self.tone(ctx, freq, OscillatorType::Square, vol * 0.2, i as f64 * 0.12, 0.2);
            }
            self.tone(ctx, 1046.5, OscillatorType::Sine, vol * 0.35, 0.48, 0.5);
        }

        /// Hint - soft sparkle
        fn play_hint(&self, ctx: &AudioContext, vol: f32) {
            self.tone(ctx, 1318.5, OscillatorType::Sine, vol * 0.2, 0.0, 0.12);
            self.tone(ctx, 1760.0, OscillatorType::Sine, vol * 0.15, 0.06, 0.15);
        }
    }

    impl FeedbackSink for AudioManager {
        fn notify(&self, effect: SoundEffect) {
            let vol = self.volume;
            if vol <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::Click => self.play_click(ctx, vol),
                SoundEffect::Correct => self.play_correct(ctx, vol),
                SoundEffect::Wrong => self.play_wrong(ctx, vol),
                SoundEffect::Success => self.play_success(ctx, vol),
                SoundEffect::Hint => self.play_hint(ctx, vol),
            }
        }

        fn set_volume(&mut self, volume: f32) {
            self.volume = volume.clamp(0.0, 1.0);
        }
    }
}
