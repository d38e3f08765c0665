//! Parameter listing command.

#![allow(clippy::print_literal)]

use clap::Args;
use murk_kit::{DrumType, KitControl};

#[derive(Args)]
pub struct ParamsArgs {
    /// Only list one group: "global" or a drum (e.g., closedHat)
    #[arg(value_name = "GROUP")]
    group: Option<String>,
}

pub fn run(args: &ParamsArgs) -> anyhow::Result<()> {
    let group = match args.group.as_deref() {
        None => None,
        Some(g) if g.eq_ignore_ascii_case("global") => Some("global"),
        Some(g) => Some(
            DrumType::from_id_prefix(g)
                .ok_or_else(|| anyhow::anyhow!("Unknown parameter group: {}", g))?
                .id_prefix(),
        ),
    };

    let control = KitControl::new();

    println!(
        "  {:>3}  {:16}  {:20}  {:>8}  {:>8}  {:>8}  {}",
        "#", "Id", "Name", "Min", "Max", "Default", "Unit"
    );
    println!(
        "  {:>3}  {:16}  {:20}  {:>8}  {:>8}  {:>8}  {}",
        "-", "--", "----", "---", "---", "-------", "----"
    );

    for index in 0..control.param_count() {
        let Some(desc) = control.descriptor(index) else {
            continue;
        };
        if group.is_some_and(|g| g != desc.group) {
            continue;
        }
        println!(
            "  {:>3}  {:16}  {:20}  {:>8.2}  {:>8.2}  {:>8.2}  {}",
            index,
            desc.string_id,
            desc.name,
            desc.min,
            desc.max,
            desc.default,
            desc.unit.suffix()
        );
    }

    Ok(())
}
