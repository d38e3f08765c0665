//! Factory kit commands.
//!
//! Lists, shows, and exports the built-in kits. Exported TOML files load
//! back through `murk render --preset PATH`.

use clap::{Args, Subcommand};
use murk_config::{KitPreset, factory_presets};
use murk_kit::DrumType;
use std::path::{Path, PathBuf};

use super::common::load_preset;

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: Option<PresetsCommand>,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List factory kits (default)
    List,

    /// Show every value in a kit
    Show {
        /// Factory kit name or preset path
        name: String,
    },

    /// Write a kit to a TOML file for editing
    Export {
        /// Factory kit name or preset path
        name: String,

        /// Destination file
        output: PathBuf,

        /// Overwrite if the file exists
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: &PresetsArgs) -> anyhow::Result<()> {
    match &args.command {
        None | Some(PresetsCommand::List) => {
            list_presets();
            Ok(())
        }
        Some(PresetsCommand::Show { name }) => show_preset(name),
        Some(PresetsCommand::Export {
            name,
            output,
            force,
        }) => export_preset(name, output, *force),
    }
}

fn list_presets() {
    println!("Factory Kits:");
    println!("=============");
    for (i, preset) in factory_presets().iter().enumerate() {
        println!(
            "  {:2}. {:16} swing {:.2}  tune {:+.1}",
            i + 1,
            preset.name,
            preset.global.swing,
            preset.global.tune
        );
    }
}

fn show_preset(name: &str) -> anyhow::Result<()> {
    let preset = load_preset(name)?;
    print_preset(&preset);
    Ok(())
}

fn print_preset(preset: &KitPreset) {
    println!("Kit: {}", preset.name);
    println!("{}", "=".repeat(5 + preset.name.len()));
    if let Some(desc) = &preset.description {
        println!("{}", desc);
    }
    println!();

    let g = &preset.global;
    println!(
        "  Global      tune {:+6.2}  decay {:.2}  tone {:.2}  drive {:.2}  hat length {:.2}  swing {:.2}",
        g.tune, g.decay, g.tone, g.drive, g.hat_length, g.swing
    );
    println!();
    println!(
        "  {:10}  {:>6}  {:>6}  {:>6}  {:>6}  {:>6}",
        "Drum", "Level", "Tune", "Decay", "Tone", "Drive"
    );
    for drum in DrumType::ALL {
        let d = preset.drums.get(drum);
        println!(
            "  {:10}  {:>6.2}  {:>+6.2}  {:>6.2}  {:>6.2}  {:>6.2}",
            drum.name(),
            d.level,
            d.tune,
            d.decay,
            d.tone,
            d.drive
        );
    }
}

fn export_preset(name: &str, output: &Path, force: bool) -> anyhow::Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            output.display()
        );
    }
    let preset = load_preset(name)?;
    preset.save(output)?;
    tracing::info!(kit = %preset.name, path = %output.display(), "exported kit");
    println!("Exported '{}' to {}", preset.name, output.display());
    Ok(())
}
