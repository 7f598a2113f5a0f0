use crate::constants::*;
use crate::core::{VoiceFamily, VoiceRequest};
use web_sys as web;

/// Audio context plus master bus. Absent when the host has no WebAudio, in
/// which case the engine keeps running and voice requests are dropped.
pub struct AudioOut {
    pub ctx: web::AudioContext,
    pub master: web::GainNode,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

fn create_oscillator(
    audio_ctx: &web::AudioContext,
    kind: web::OscillatorType,
    frequency_hz: f32,
) -> Option<web::OscillatorNode> {
    let osc = web::OscillatorNode::new(audio_ctx).ok()?;
    osc.set_type(kind);
    osc.frequency().set_value(frequency_hz);
    Some(osc)
}

pub fn build_audio() -> Option<AudioOut> {
    let ctx = match web::AudioContext::new() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("[audio] unavailable, running silent: {:?}", e);
            return None;
        }
    };
    let master = create_gain(&ctx, MASTER_GAIN, "Master").ok()?;
    _ = master.connect_with_audio_node(&ctx.destination());
    Some(AudioOut { ctx, master })
}

impl AudioOut {
    pub fn resume(&self) {
        _ = self.ctx.resume();
    }

    /// Build and schedule the oscillator graph for one voice. Nodes stop
    /// themselves at the end of the envelope and are collected by the browser.
    pub fn play(&self, voice: &VoiceRequest) {
        let t0 = self.ctx.current_time() + VOICE_START_DELAY_SEC;
        let dur = voice.duration_sec.max(0.01) as f64;

        let panner = match web::StereoPannerNode::new(&self.ctx) {
            Ok(p) => p,
            Err(_) => return,
        };
        panner.pan().set_value(voice.pan);
        _ = panner.connect_with_audio_node(&self.master);

        let env = match create_gain(&self.ctx, 0.0, "Voice") {
            Ok(g) => g,
            Err(_) => return,
        };
        _ = env.gain().set_value_at_time(0.0, t0);
        _ = env
            .gain()
            .linear_ramp_to_value_at_time(voice.gain.max(ENVELOPE_FLOOR), t0 + VOICE_ATTACK_SEC);
        _ = env
            .gain()
            .exponential_ramp_to_value_at_time(ENVELOPE_FLOOR, t0 + dur);
        _ = env.connect_with_audio_node(&panner);

        let f = voice.frequency_hz;
        let sources: Vec<(web::OscillatorNode, f32)> = match voice.family {
            VoiceFamily::Bell => [(1.0, 1.0), (BELL_PARTIAL_RATIO, 0.3)]
                .iter()
                .filter_map(|&(ratio, level)| {
                    create_oscillator(&self.ctx, web::OscillatorType::Sine, f * ratio)
                        .map(|o| (o, level))
                })
                .collect(),
            VoiceFamily::Tick => create_oscillator(&self.ctx, web::OscillatorType::Square, f)
                .map(|o| vec![(o, 0.5)])
                .unwrap_or_default(),
            VoiceFamily::Chord => CHORD_RATIOS
                .iter()
                .filter_map(|&ratio| {
                    create_oscillator(&self.ctx, web::OscillatorType::Triangle, f * ratio)
                        .map(|o| (o, 1.0 / CHORD_RATIOS.len() as f32))
                })
                .collect(),
            VoiceFamily::Metallic => self.fm_carrier(f, t0, dur).into_iter().collect(),
        };

        for (osc, level) in sources {
            let Ok(mix) = create_gain(&self.ctx, level, "Partial") else {
                continue;
            };
            _ = osc.connect_with_audio_node(&mix);
            _ = mix.connect_with_audio_node(&env);
            _ = osc.start_with_when(t0);
            _ = osc.stop_with_when(t0 + dur + 0.05);
        }
    }

    // Sine carrier with a non-harmonic sine modulator on its frequency.
    fn fm_carrier(&self, f: f32, t0: f64, dur: f64) -> Option<(web::OscillatorNode, f32)> {
        let carrier = create_oscillator(&self.ctx, web::OscillatorType::Sine, f)?;
        let modulator = create_oscillator(&self.ctx, web::OscillatorType::Sine, f * FM_MOD_RATIO)?;
        let depth = create_gain(&self.ctx, f * FM_INDEX, "FM depth").ok()?;
        _ = depth.gain().set_value_at_time(f * FM_INDEX, t0);
        _ = depth
            .gain()
            .exponential_ramp_to_value_at_time(f * 0.1 + ENVELOPE_FLOOR, t0 + dur);
        _ = modulator.connect_with_audio_node(&depth);
        _ = depth.connect_with_audio_param(&carrier.frequency());
        _ = modulator.start_with_when(t0);
        _ = modulator.stop_with_when(t0 + dur + 0.05);
        Some((carrier, 0.8))
    }
}
