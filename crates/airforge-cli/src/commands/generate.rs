use std::path::{Path, PathBuf};

use airforge_build::DockerfileGenerator;
use airforge_build::context::write_context;
use airforge_core::{ExtrasCatalog, ForgeConfig};

use super::RequestArgs;

pub fn generate(args: RequestArgs, out: Option<&Path>) -> anyhow::Result<()> {
    let cwd = PathBuf::from(".");
    let config = ForgeConfig::load(&cwd)?;
    let catalog = ExtrasCatalog::load_or_builtin(&cwd)?;
    let request = super::assemble_request(args, &config, &catalog)?;

    let dockerfile = DockerfileGenerator::new(&request).render();

    match out {
        Some(dir) => {
            write_context(dir, &dockerfile, &request)?;
            println!("Build context written to {}", dir.display());
        }
        None => print!("{dockerfile}"),
    }

    Ok(())
}
