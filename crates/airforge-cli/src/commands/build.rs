use std::path::PathBuf;

use airforge_core::{ExtrasCatalog, ForgeConfig};
use airforge_remote::BuildClient;

use super::RequestArgs;

/// Submit one build to the remote service. A failed dispatch is reported
/// and the process exits; re-running the command is the retry path.
pub async fn build(args: RequestArgs) -> anyhow::Result<()> {
    let cwd = PathBuf::from(".");
    let config = ForgeConfig::load(&cwd)?;
    let catalog = ExtrasCatalog::load_or_builtin(&cwd)?;
    let request = super::assemble_request(args, &config, &catalog)?;

    let client = BuildClient::new(&config.api)?;
    println!("Submitting build to {}...", client.endpoint());

    let result = client.dispatch(&request).await?;

    println!("{}", result.message);
    println!(
        "Image tag: {}",
        result.image_tag.as_deref().unwrap_or("N/A")
    );

    Ok(())
}
