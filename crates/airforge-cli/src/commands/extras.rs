use std::path::PathBuf;

use airforge_core::ExtrasCatalog;

pub fn extras() -> anyhow::Result<()> {
    let catalog = ExtrasCatalog::load_or_builtin(&PathBuf::from("."))?;
    for name in catalog.names() {
        println!("{name}");
    }
    Ok(())
}
