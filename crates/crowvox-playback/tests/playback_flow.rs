//! End-to-end controller behavior against scripted synthesis and
//! manually-driven audio sessions.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use crossbeam_channel::Receiver;
use crowvox_playback::testing::{ManualOutput, ScriptedSynthesizer};
use crowvox_playback::{PlayOutcome, PlaybackController, PlaybackEvent, SynthesisProfile};
use crowvox_tts::{TtsError, VoiceSettings};

fn profile() -> SynthesisProfile {
    SynthesisProfile {
        voice_id: "voice-a".to_string(),
        settings: VoiceSettings::default(),
        api_key: "sk-test".to_string(),
    }
}

fn harness() -> (
    PlaybackController,
    Arc<ScriptedSynthesizer>,
    Arc<ManualOutput>,
    Receiver<PlaybackEvent>,
) {
    let synth = Arc::new(ScriptedSynthesizer::new());
    let output = Arc::new(ManualOutput::new());
    let controller =
        PlaybackController::new(Arc::clone(&synth) as _, Arc::clone(&output) as _, profile());
    let events = controller.subscribe();
    (controller, synth, output, events)
}

fn drain(events: &Receiver<PlaybackEvent>) -> Vec<PlaybackEvent> {
    events.try_iter().collect()
}

#[tokio::test]
async fn miss_synthesizes_caches_and_starts() {
    let (controller, synth, output, events) = harness();
    synth.push_ok(vec![1, 2, 3]);

    let outcome = controller.play(0, "cock-a-doodle-doo").await.unwrap();
    assert_eq!(outcome, PlayOutcome::Started { from_cache: false });

    assert!(controller.is_cached(0));
    assert_eq!(controller.cached_count(), 1);
    assert_eq!(controller.playing(), Some(0));
    assert!(!controller.is_loading(0));
    assert_eq!(output.session_count(), 1);

    assert_eq!(
        drain(&events),
        vec![
            PlaybackEvent::LoadStarted { crow: 0 },
            PlaybackEvent::LoadFinished { crow: 0 },
            PlaybackEvent::Started { crow: 0 },
        ]
    );

    let metrics = controller.metrics();
    assert_eq!(metrics.cache_misses.load(Ordering::Relaxed), 1);
    assert_eq!(metrics.cache_hits.load(Ordering::Relaxed), 0);
}

#[tokio::test]
async fn cache_hit_skips_synthesis_and_load_events() {
    let (controller, synth, output, events) = harness();
    synth.push_ok(vec![1]);

    controller.play(0, "kikeriki").await.unwrap();
    output.session(0).complete();
    drain(&events);

    let outcome = controller.play(0, "kikeriki").await.unwrap();
    assert_eq!(outcome, PlayOutcome::Started { from_cache: true });
    assert_eq!(synth.calls(), 1);

    // no LoadStarted/LoadFinished on a hit
    assert_eq!(drain(&events), vec![PlaybackEvent::Started { crow: 0 }]);
    assert_eq!(controller.metrics().cache_hits.load(Ordering::Relaxed), 1);
}

#[tokio::test]
async fn replay_while_sounding_is_a_toggle_off() {
    let (controller, synth, output, events) = harness();
    synth.push_ok(vec![1]);

    controller.play(0, "quiquiriqui").await.unwrap();
    drain(&events);

    let outcome = controller.play(0, "quiquiriqui").await.unwrap();
    assert_eq!(outcome, PlayOutcome::Stopped);
    assert_eq!(controller.playing(), None);
    assert!(output.session(0).is_stopped());
    assert_eq!(synth.calls(), 1);
    assert_eq!(drain(&events), vec![PlaybackEvent::Finished { crow: 0 }]);
}

#[tokio::test]
async fn switching_items_interrupts_the_first() {
    let (controller, synth, output, events) = harness();
    synth.push_ok(vec![1]);
    synth.push_ok(vec![2]);

    controller.play(0, "first").await.unwrap();
    drain(&events);

    let outcome = controller.play(1, "second").await.unwrap();
    assert_eq!(outcome, PlayOutcome::Started { from_cache: false });
    assert_eq!(controller.playing(), Some(1));
    assert!(output.session(0).is_stopped());
    assert!(!output.session(1).is_stopped());

    // both assets stay cached; interruption releases nothing
    assert_eq!(controller.cached_count(), 2);

    assert_eq!(
        drain(&events),
        vec![
            PlaybackEvent::Finished { crow: 0 },
            PlaybackEvent::LoadStarted { crow: 1 },
            PlaybackEvent::LoadFinished { crow: 1 },
            PlaybackEvent::Started { crow: 1 },
        ]
    );
    assert_eq!(
        controller
            .metrics()
            .playback_interrupts
            .load(Ordering::Relaxed),
        1
    );
}

#[tokio::test]
async fn natural_completion_clears_the_slot() {
    let (controller, synth, output, events) = harness();
    synth.push_ok(vec![1]);

    controller.play(0, "chicchirichi").await.unwrap();
    drain(&events);

    output.session(0).complete();
    assert_eq!(controller.playing(), None);
    assert_eq!(drain(&events), vec![PlaybackEvent::Finished { crow: 0 }]);
    assert_eq!(
        controller
            .metrics()
            .playback_completions
            .load(Ordering::Relaxed),
        1
    );

    // a late duplicate completion must not emit a second Finished
    output.session(0).complete();
    assert!(drain(&events).is_empty());
}

#[tokio::test]
async fn missing_credential_fails_without_synthesis() {
    let (controller, synth, _output, events) = harness();
    controller.set_api_key("");

    let err = controller.play(0, "cocorico").await.unwrap_err();
    assert_eq!(err, TtsError::CredentialMissing);
    assert_eq!(synth.calls(), 0);
    assert_eq!(drain(&events), vec![PlaybackEvent::CredentialRequired]);
}

#[tokio::test]
async fn synthesis_failure_records_error_and_caches_nothing() {
    let (controller, synth, output, events) = harness();
    synth.push_err(TtsError::QuotaExceeded);

    let err = controller.play(0, "kukeleku").await.unwrap_err();
    assert_eq!(err, TtsError::QuotaExceeded);

    assert!(!controller.is_cached(0));
    assert_eq!(controller.playing(), None);
    assert_eq!(output.session_count(), 0);
    assert_eq!(controller.error(0), Some(TtsError::QuotaExceeded.to_string()));

    assert_eq!(
        drain(&events),
        vec![
            PlaybackEvent::LoadStarted { crow: 0 },
            PlaybackEvent::LoadFinished { crow: 0 },
            PlaybackEvent::Failed {
                crow: 0,
                message: TtsError::QuotaExceeded.to_string(),
            },
        ]
    );
    assert_eq!(
        controller
            .metrics()
            .synthesis_failures
            .load(Ordering::Relaxed),
        1
    );
}

#[tokio::test]
async fn retry_after_failure_clears_the_recorded_error() {
    let (controller, synth, _output, _events) = harness();
    synth.push_err(TtsError::Provider {
        status: 500,
        detail: "boom".to_string(),
    });
    synth.push_ok(vec![1]);

    controller.play(0, "ake-e-ake-ake").await.unwrap_err();
    assert!(controller.error(0).is_some());

    controller.play(0, "ake-e-ake-ake").await.unwrap();
    assert_eq!(controller.error(0), None);
    assert!(controller.is_cached(0));
}

#[tokio::test]
async fn outbound_notice_fires_once_per_controller() {
    let (controller, synth, _output, events) = harness();
    synth.push_err(TtsError::OutboundBlocked);
    synth.push_err(TtsError::OutboundBlocked);

    controller.play(0, "a").await.unwrap_err();
    let first = drain(&events);
    assert!(first.contains(&PlaybackEvent::OutboundBlocked));

    controller.play(1, "b").await.unwrap_err();
    let second = drain(&events);
    // the per-item Failed still fires, the one-shot notice does not
    assert!(second
        .iter()
        .any(|e| matches!(e, PlaybackEvent::Failed { crow: 1, .. })));
    assert!(!second.contains(&PlaybackEvent::OutboundBlocked));
}

#[tokio::test]
async fn clear_cache_releases_assets_and_stops_playback() {
    let (controller, synth, output, events) = harness();
    synth.push_ok(vec![1]);
    synth.push_ok(vec![2]);

    controller.play(0, "a").await.unwrap();
    controller.play(1, "b").await.unwrap();
    assert_eq!(controller.cached_count(), 2);
    drain(&events);

    controller.clear_cache();
    assert_eq!(controller.cached_count(), 0);
    assert_eq!(controller.playing(), None);
    assert!(output.session(1).is_stopped());
    assert_eq!(drain(&events), vec![PlaybackEvent::Finished { crow: 1 }]);
}

#[tokio::test]
async fn voice_change_invalidates_and_resynthesizes() {
    let (controller, synth, output, _events) = harness();
    synth.push_ok(vec![1]);
    synth.push_ok(vec![2]);

    controller.play(0, "a").await.unwrap();
    assert!(controller.is_cached(0));
    output.session(0).complete();

    controller.set_voice("voice-b");
    assert!(!controller.is_cached(0));
    assert_eq!(controller.cached_count(), 0);

    let outcome = controller.play(0, "a").await.unwrap();
    assert_eq!(outcome, PlayOutcome::Started { from_cache: false });
    assert_eq!(synth.calls(), 2);
}

#[tokio::test]
async fn settings_change_invalidates_but_key_change_does_not() {
    let (controller, synth, _output, _events) = harness();
    synth.push_ok(vec![1]);

    controller.play(0, "a").await.unwrap();
    assert!(controller.is_cached(0));

    controller.set_api_key("sk-other");
    assert!(controller.is_cached(0));

    controller.set_settings(VoiceSettings {
        stability: 0.9,
        ..VoiceSettings::default()
    });
    assert!(!controller.is_cached(0));
}

#[tokio::test]
async fn superseded_synthesis_is_discarded() {
    let (controller, synth, output, events) = harness();
    let gate = synth.push_gated_ok(vec![1]);
    synth.push_ok(vec![2]);

    let controller = Arc::new(controller);
    let slow = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.play(0, "slow").await })
    };

    // wait until the first request is actually in flight
    while synth.calls() == 0 {
        tokio::task::yield_now().await;
    }
    assert!(controller.is_loading(0));

    // second call takes over while the first is parked on the gate
    controller.play(1, "fast").await.unwrap();
    gate.notify_one();

    let outcome = slow.await.unwrap().unwrap();
    assert_eq!(outcome, PlayOutcome::Superseded);

    // the loser settled its loading flag but started no audio and
    // stored nothing
    assert!(!controller.is_loading(0));
    assert!(!controller.is_cached(0));
    assert_eq!(controller.playing(), Some(1));
    assert_eq!(output.session_count(), 1);

    let all = drain(&events);
    assert!(!all.contains(&PlaybackEvent::Started { crow: 0 }));
    assert!(all.contains(&PlaybackEvent::LoadFinished { crow: 0 }));
}

#[tokio::test]
async fn stop_during_synthesis_prevents_playback() {
    let (controller, synth, output, _events) = harness();
    let gate = synth.push_gated_ok(vec![1]);

    let controller = Arc::new(controller);
    let pending = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.play(0, "slow").await })
    };
    while synth.calls() == 0 {
        tokio::task::yield_now().await;
    }

    controller.stop();
    gate.notify_one();

    assert_eq!(pending.await.unwrap().unwrap(), PlayOutcome::Superseded);
    assert_eq!(controller.playing(), None);
    assert_eq!(output.session_count(), 0);
}

#[tokio::test]
async fn output_failure_surfaces_as_playback_error() {
    let (controller, synth, output, events) = harness();
    synth.push_ok(vec![1]);
    output.fail_next();

    let err = controller.play(0, "a").await.unwrap_err();
    assert!(matches!(err, TtsError::Playback(_)));
    assert_eq!(controller.playing(), None);

    // the asset was synthesized fine, so it stays cached for retry
    assert!(controller.is_cached(0));

    let all = drain(&events);
    assert!(all
        .iter()
        .any(|e| matches!(e, PlaybackEvent::Failed { crow: 0, .. })));
    assert!(!all.contains(&PlaybackEvent::Started { crow: 0 }));
}

#[tokio::test]
async fn every_started_gets_exactly_one_finished() {
    let (controller, synth, output, events) = harness();
    synth.push_ok(vec![1]);
    synth.push_ok(vec![2]);

    controller.play(0, "a").await.unwrap(); // started
    controller.play(1, "b").await.unwrap(); // interrupts 0, starts 1
    controller.play(1, "b").await.unwrap(); // toggles 1 off
    controller.play(0, "a").await.unwrap(); // hit, starts 0 again
    output.last_session().complete(); // drains naturally

    let all = drain(&events);
    let started = all
        .iter()
        .filter(|e| matches!(e, PlaybackEvent::Started { .. }))
        .count();
    let finished = all
        .iter()
        .filter(|e| matches!(e, PlaybackEvent::Finished { .. }))
        .count();
    assert_eq!(started, 3);
    assert_eq!(finished, 3);
}
