use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use mdsplice::api::{CmdMessage, ConfigAction, MdspliceApi, MessageLevel};
use mdsplice::error::{MdspliceError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

mod args;
use args::{Cli, Commands};

/// Separator line printed between chunks on stdout.
const CHUNK_SEPARATOR: &str = "--------8<--------";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let api = init_api()?;

    match cli.command {
        Commands::Replace {
            file,
            heading,
            with_text,
            from,
            output,
            in_place,
        } => handle_replace(&api, &file, &heading, with_text, from, output, in_place),
        Commands::Split {
            file,
            chunk_bytes,
            out_dir,
        } => handle_split(&api, &file, chunk_bytes, out_dir),
        Commands::Limits { chunk_bytes } => handle_limits(&api, chunk_bytes),
        Commands::Config { key, value } => handle_config(&api, key, value),
    }
}

fn init_api() -> Result<MdspliceApi> {
    // MDSPLICE_CONFIG_DIR makes the config location overridable for tests.
    let config_dir = match std::env::var_os("MDSPLICE_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "mdsplice", "mdsplice")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| {
                MdspliceError::InvalidArgument("could not determine config dir".to_string())
            })?,
    };
    Ok(MdspliceApi::new(config_dir))
}

fn handle_replace(
    api: &MdspliceApi,
    file: &str,
    heading: &str,
    with_text: Option<String>,
    from: Option<PathBuf>,
    output: Option<PathBuf>,
    in_place: bool,
) -> Result<()> {
    let replacement = match (with_text, from) {
        (Some(text), None) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)?,
        _ => {
            return Err(MdspliceError::InvalidArgument(
                "exactly one of --with or --from is required".to_string(),
            ))
        }
    };
    if in_place && file == "-" {
        return Err(MdspliceError::InvalidArgument(
            "--in-place requires a file argument, not stdin".to_string(),
        ));
    }

    let markdown = read_input(file)?;
    let result = api.replace_section(&markdown, heading, &replacement)?;
    let updated = result.output.unwrap_or_default();

    if in_place {
        std::fs::write(file, &updated)?;
        print_messages(&result.messages);
    } else if let Some(out) = output {
        std::fs::write(&out, &updated)?;
        print_messages(&result.messages);
    } else {
        print!("{}", updated);
    }
    Ok(())
}

fn handle_split(
    api: &MdspliceApi,
    file: &str,
    chunk_bytes: Option<usize>,
    out_dir: Option<PathBuf>,
) -> Result<()> {
    let markdown = read_input(file)?;
    let result = api.split(&markdown, chunk_bytes)?;

    match out_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let stem = file_stem_for(file);
            for (i, chunk) in result.chunks.iter().enumerate() {
                let path = dir.join(format!("{}.{:04}.md", stem, i + 1));
                std::fs::write(&path, format!("{}\n", chunk))?;
            }
            print_messages(&result.messages);
        }
        None => {
            for (i, chunk) in result.chunks.iter().enumerate() {
                if i > 0 {
                    println!("{}", CHUNK_SEPARATOR);
                }
                println!("{}", chunk);
            }
        }
    }
    Ok(())
}

fn handle_limits(api: &MdspliceApi, chunk_bytes: Option<usize>) -> Result<()> {
    let result = api.limits(chunk_bytes)?;
    if let Some(info) = &result.limits {
        println!("{}", serde_json::to_string_pretty(info)?);
    }
    Ok(())
}

fn handle_config(api: &MdspliceApi, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        println!("chunk-bytes = {}", config.chunk_bytes);
    }
    print_messages(&result.messages);
    Ok(())
}

fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(file)?)
    }
}

fn file_stem_for(file: &str) -> String {
    if file == "-" {
        return "stdin".to_string();
    }
    Path::new(file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("chunk")
        .to_string()
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
