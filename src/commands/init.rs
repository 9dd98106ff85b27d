use crate::config::DEFAULT_CONFIG_FILE;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub fn init_config(force: bool) -> Result<()> {
    init_config_at(Path::new(DEFAULT_CONFIG_FILE), force)?;
    println!("Created {DEFAULT_CONFIG_FILE} configuration file");
    Ok(())
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# throttlecalc configuration

[output]
# default_format = "terminal"   # terminal | json | markdown
plain = false

[snippet]
# URL placeholder embedded in the suggested lighthouse command
url = "<url>"
"#;

    io::write_file(config_path, default_config)?;
    Ok(())
}
