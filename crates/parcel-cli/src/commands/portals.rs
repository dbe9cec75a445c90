use std::io::Write;

use anyhow::Result;
use parcel_core::config::ParcelConfig;

use super::build_registry;
use crate::cli::PortalsArgs;

/// Print each registered portal with its configured trust score.
pub fn run_portals<W: Write>(mut config: ParcelConfig, args: &PortalsArgs, out: &mut W) -> Result<()> {
    let registry = build_registry(&mut config, &args.source)?;
    let mode = if args.source.simulated() { "simulated" } else { "http" };
    for source in registry.sources() {
        writeln!(
            out,
            "{:<8} {:<10} trust={}",
            source.display_name(),
            mode,
            config.trust.score_for(source).value()
        )?;
    }
    Ok(())
}
