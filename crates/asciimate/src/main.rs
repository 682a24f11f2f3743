mod app;
mod cli;
mod output;
mod telemetry;

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use asciimate_art::ArtLibrary;
use asciimate_config::{Config, RevealConfig};
use asciimate_effects::{Entry, NOISE_CHARS, Player, Registry, RevealOptions, seed_rng};
use clap::Parser;
use color_eyre::eyre::{WrapErr, bail};
use tracing::info;

use crate::app::{App, Settings};
use crate::cli::Cli;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let _telemetry = telemetry::init_tracing("warn", cli.uses_terminal_ui());

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .wrap_err("failed to load config")?;

    if cli.write_config {
        let path = match &cli.config {
            Some(path) => config.save_to(path).map(|()| path.clone()),
            None => config.save(),
        }
        .wrap_err("failed to write config")?;
        println!("Wrote {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let library = load_library(&cli, &config)?;
    let registry = Registry::builtin(&library, &reveal_options(&config.reveal));
    info!(art = library.len(), animations = registry.len(), "ready");

    if cli.list {
        ignore_broken_pipe(output::write_list(&mut io::stdout().lock(), &registry))?;
        return Ok(ExitCode::SUCCESS);
    }
    if let Some(query) = &cli.view {
        let mut stdout = io::stdout().lock();
        let written = output::write_matches(&mut stdout, &library, query, config.display.max_width);
        ignore_broken_pipe(written.map(|_| ()))?;
        return Ok(ExitCode::SUCCESS);
    }

    let entry = match pick_entry(&cli, &registry) {
        Ok(entry) => entry,
        Err(unknown) => return Ok(report_unknown_key(&mut io::stderr().lock(), &unknown)?),
    };
    let speed = cli.speed.map_or(config.display.speed, Into::into);

    if cli.export_json || cli.plain {
        let Some(entry) = entry else {
            bail!("an animation KEY or --random is required with --plain and --export-json");
        };
        let frames = entry
            .start(seed_rng(cli.seed))
            .wrap_err_with(|| format!("failed to start '{}'", entry.name))?;
        let mut stdout = io::stdout().lock();
        if cli.export_json {
            output::write_json(&mut stdout, entry, frames, config.display.export_delay_ms)
                .wrap_err("failed to write JSON export")?;
        } else {
            let mut player = Player::new(&entry.name, frames, speed, Instant::now());
            if cli.looping {
                player = player.looping(entry.generator(), seed_rng(cli.seed));
            }
            ignore_broken_pipe(
                output::play_plain(&mut stdout, &mut player, !cli.no_delay).map(|_| ()),
            )?;
            stdout.flush().ok();
        }
        return Ok(ExitCode::SUCCESS);
    }

    let direct = entry.map(|e| (e.key, e.name.clone()));
    let mut app = App::new(
        registry,
        Settings {
            speed,
            color_theme: config.display.color_theme,
            looping: cli.looping,
            seed: cli.seed,
        },
    );
    if let Some((key, name)) = direct {
        app = app
            .play_then_exit(key)
            .wrap_err_with(|| format!("failed to start '{name}'"))?;
    }

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result.map(|()| ExitCode::SUCCESS)
}

/// Art from `--art`, then the configured file, then the bundled set.
fn load_library(cli: &Cli, config: &Config) -> color_eyre::Result<ArtLibrary> {
    match cli.art.as_ref().or(config.art.file.as_ref()) {
        Some(path) => {
            info!(path = %path.display(), "loading art file");
            asciimate_art::load(path)
                .wrap_err_with(|| format!("failed to load art from {}", path.display()))
        }
        None => Ok(ArtLibrary::bundled()),
    }
}

/// The entry chosen by KEY or `--random`. `Err` carries an unknown key.
fn pick_entry<'a>(cli: &Cli, registry: &'a Registry) -> Result<Option<&'a Entry>, String> {
    if let Some(key) = &cli.key {
        return registry
            .resolve(key)
            .map(Some)
            .ok_or_else(|| key.trim_start_matches('-').to_string());
    }
    if cli.random {
        return Ok(registry.random_entry(&mut seed_rng(cli.seed)));
    }
    Ok(None)
}

/// Tell the user a KEY matched nothing. Ends the run with status 1.
fn report_unknown_key<W: Write>(out: &mut W, key: &str) -> io::Result<ExitCode> {
    writeln!(out, "Invalid animation number: {key}")?;
    writeln!(out, "Use --list to see available options.")?;
    Ok(ExitCode::FAILURE)
}

fn reveal_options(config: &RevealConfig) -> RevealOptions {
    RevealOptions {
        noise_charset: config
            .noise_chars
            .as_deref()
            .map_or_else(|| NOISE_CHARS.to_vec(), |chars| chars.chars().collect()),
        reveal_chunk_size: config.chunk_size,
        dissolve_chunk_size: config.dissolve_chunk_size,
        reveal_delay: Duration::from_millis(config.reveal_delay_ms),
        dissolve_delay: Duration::from_millis(config.dissolve_delay_ms),
        intro_hold: Duration::from_millis(config.intro_hold_ms),
        pause_hold: Duration::from_millis(config.pause_ms),
        include_dissolve: config.dissolve,
    }
}

/// A closed stdout (e.g. piped into `head`) ends output quietly.
fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reveal_config_matches_options() {
        assert_eq!(
            reveal_options(&RevealConfig::default()),
            RevealOptions::default()
        );
    }

    #[test]
    fn test_custom_noise_chars() {
        let config = RevealConfig {
            noise_chars: Some("#@".to_string()),
            dissolve: false,
            ..RevealConfig::default()
        };
        let options = reveal_options(&config);
        assert_eq!(options.noise_charset, vec!['#', '@']);
        assert!(!options.include_dissolve);
    }

    #[test]
    fn test_pick_entry() {
        let registry = Registry::builtin(&ArtLibrary::bundled(), &RevealOptions::default());
        let cli = Cli::try_parse_from(["asciimate", "-4"]).unwrap();
        assert_eq!(pick_entry(&cli, &registry).unwrap().map(|e| e.key), Some(4));

        let cli = Cli::try_parse_from(["asciimate", "999"]).unwrap();
        assert_eq!(pick_entry(&cli, &registry).unwrap_err(), "999");

        let cli = Cli::try_parse_from(["asciimate", "--random", "--seed", "1"]).unwrap();
        assert!(pick_entry(&cli, &registry).unwrap().is_some());

        let cli = Cli::try_parse_from(["asciimate"]).unwrap();
        assert!(pick_entry(&cli, &registry).unwrap().is_none());
    }

    #[test]
    fn test_unknown_key_report() {
        let mut out = Vec::new();
        let code = report_unknown_key(&mut out, "42").unwrap();
        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Invalid animation number: 42\nUse --list to see available options.\n"
        );
    }

    #[test]
    fn test_art_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.txt");
        std::fs::write(&path, "Dot\n.\n").unwrap();
        let cli = Cli::try_parse_from(["asciimate", "--art", path.to_str().unwrap()]).unwrap();
        let mut config = Config::default();
        config.art.file = Some(dir.path().join("missing.txt"));
        let library = load_library(&cli, &config).unwrap();
        assert_eq!(library.names().collect::<Vec<_>>(), ["dot"]);
    }

    #[test]
    fn test_missing_art_file_is_error() {
        let cli = Cli::try_parse_from(["asciimate", "--art", "/nonexistent/art.txt"]).unwrap();
        assert!(load_library(&cli, &Config::default()).is_err());
    }
}
