use anyhow::Result;
use sevenoffice_otds_core::EntityKind;

pub fn kinds_command() -> Result<()> {
    for kind in EntityKind::SUPPORTED {
        println!("{:<12} type={}", kind.to_string(), kind.aliases().join(" | type="));
    }
    Ok(())
}
