use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use crowvox_app::{AppRuntime, PrefsStore, RuntimeOptions};
use crowvox_catalog::{crow, crows_in_region, Region, CROWS, PRESETS, VOICES};
use crowvox_playback::{PlayOutcome, PlaybackEvent};
use crowvox_tts::{TtsError, VoiceSettings};

#[derive(Parser)]
#[command(name = "crowvox")]
#[command(about = "Hear how roosters crow around the world")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// ElevenLabs API key (falls back to the saved preference)
    #[arg(long, env = "ELEVENLABS_API_KEY", global = true)]
    api_key: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the crow catalogue
    List {
        /// Only entries from one region (europe, americas, asia,
        /// middle-east, africa)
        #[arg(long)]
        region: Option<String>,
    },
    /// List the available voices
    Voices,
    /// List the voice-setting presets
    Presets,
    /// Synthesize and play one catalogue entry
    Play {
        /// Catalogue index (see `list`)
        index: usize,
        /// Voice id or name
        #[arg(long)]
        voice: Option<String>,
        /// Preset name (see `presets`)
        #[arg(long)]
        preset: Option<String>,
        /// Stability override, 0.0..=1.0
        #[arg(long)]
        stability: Option<f32>,
        /// Style override, 0.0..=1.0
        #[arg(long)]
        style: Option<f32>,
    },
    /// Save the API key to the preference file
    SetKey { key: String },
    /// Toggle an entry in the favorites list
    Favorite { index: usize },
    /// Show the favorites list
    Favorites,
}

fn init_logging() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_region(raw: &str) -> Result<Region> {
    match raw.to_ascii_lowercase().as_str() {
        "europe" => Ok(Region::Europe),
        "americas" => Ok(Region::Americas),
        "asia" => Ok(Region::Asia),
        "middle-east" | "middleeast" => Ok(Region::MiddleEast),
        "africa" => Ok(Region::Africa),
        other => bail!("unknown region '{other}'"),
    }
}

fn resolve_voice(raw: &str) -> Result<&'static str> {
    if let Some(v) = crowvox_catalog::voice(raw) {
        return Ok(v.id);
    }
    VOICES
        .iter()
        .find(|v| v.name.eq_ignore_ascii_case(raw))
        .map(|v| v.id)
        .ok_or_else(|| anyhow!("no voice with id or name '{raw}'"))
}

fn resolve_settings(
    preset: Option<&str>,
    stability: Option<f32>,
    style: Option<f32>,
) -> Result<VoiceSettings> {
    let mut settings = match preset {
        Some(name) => {
            let p = PRESETS
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(name))
                .ok_or_else(|| anyhow!("no preset named '{name}'"))?;
            VoiceSettings {
                stability: p.stability,
                similarity_boost: p.similarity_boost,
                style: p.style,
                ..VoiceSettings::default()
            }
        }
        None => VoiceSettings::default(),
    };
    if let Some(v) = stability {
        settings.stability = v;
    }
    if let Some(v) = style {
        settings.style = v;
    }
    for (name, value) in [("stability", settings.stability), ("style", settings.style)] {
        if !(0.0..=1.0).contains(&value) {
            bail!("{name} must be within 0.0..=1.0, got {value}");
        }
    }
    Ok(settings)
}

fn print_crow_line(id: usize, c: &crowvox_catalog::Crow, favorite: bool) {
    let star = if favorite { " *" } else { "" };
    println!("{id:>3}  {} {:<22} {}  [{}]{star}", c.flag, c.lang, c.text, c.ipa);
}

async fn run_play(
    cli_key: Option<String>,
    index: usize,
    voice: Option<String>,
    preset: Option<String>,
    stability: Option<f32>,
    style: Option<f32>,
) -> Result<()> {
    let prefs = PrefsStore::open_default()?;
    let api_key = cli_key.unwrap_or_else(|| prefs.api_key().to_string());

    let entry = crow(index).ok_or_else(|| anyhow!("no crow with index {index}"))?;
    let voice_id = match voice {
        Some(raw) => resolve_voice(&raw)?.to_string(),
        None => VOICES[0].id.to_string(),
    };
    let settings = resolve_settings(preset.as_deref(), stability, style)?;

    let runtime = AppRuntime::start(RuntimeOptions {
        voice_id,
        settings,
        api_key,
    })?;
    let events = runtime.subscribe();

    println!("{} {} — {}", entry.flag, entry.lang, entry.text);
    let outcome = match runtime.play_crow(index).await {
        Ok(outcome) => outcome,
        Err(e) => {
            // Distinguish "your setup is broken" from "this item failed"
            if e.downcast_ref::<TtsError>()
                .is_some_and(TtsError::is_environment)
            {
                eprintln!("check your API key and network; no synthesis can succeed until this is resolved");
            }
            return Err(e);
        }
    };
    match outcome {
        PlayOutcome::Started { from_cache } => {
            if from_cache {
                println!("(cached)");
            }
        }
        PlayOutcome::Stopped | PlayOutcome::Superseded => return Ok(()),
    }

    // Block until this session ends, draining the event stream.
    for event in events.iter() {
        match event {
            PlaybackEvent::Finished { crow } if crow == index => break,
            PlaybackEvent::Failed { crow, message } if crow == index => {
                bail!("playback failed: {message}");
            }
            PlaybackEvent::OutboundBlocked => {
                eprintln!("note: this environment blocks outbound network calls");
            }
            _ => {}
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::List { region } => {
            let prefs = PrefsStore::open_default()?;
            match region {
                Some(raw) => {
                    let region = parse_region(&raw)?;
                    println!("-- {region} --");
                    for (id, c) in crows_in_region(region) {
                        print_crow_line(id, c, prefs.is_favorite(id));
                    }
                }
                None => {
                    for (id, c) in CROWS.iter().enumerate() {
                        print_crow_line(id, c, prefs.is_favorite(id));
                    }
                }
            }
        }
        Commands::Voices => {
            for v in VOICES {
                println!("{:<22} {:<10} {:?}  {}", v.id, v.name, v.gender, v.tag);
            }
        }
        Commands::Presets => {
            for p in PRESETS {
                println!(
                    "{} {:<10} stability={:.2} similarity={:.2} style={:.2}",
                    p.icon, p.name, p.stability, p.similarity_boost, p.style
                );
            }
        }
        Commands::Play {
            index,
            voice,
            preset,
            stability,
            style,
        } => run_play(cli.api_key, index, voice, preset, stability, style).await?,
        Commands::SetKey { key } => {
            let mut prefs = PrefsStore::open_default()?;
            prefs.set_api_key(key)?;
            println!("API key saved to {}", prefs.path().display());
        }
        Commands::Favorite { index } => {
            let entry = crow(index).ok_or_else(|| anyhow!("no crow with index {index}"))?;
            let mut prefs = PrefsStore::open_default()?;
            if prefs.toggle_favorite(index)? {
                println!("added {} to favorites", entry.lang);
            } else {
                println!("removed {} from favorites", entry.lang);
            }
        }
        Commands::Favorites => {
            let prefs = PrefsStore::open_default()?;
            for &id in prefs.favorites() {
                if let Some(c) = crow(id) {
                    print_crow_line(id, c, true);
                }
            }
        }
    }
    Ok(())
}
