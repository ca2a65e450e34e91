use pkm_core::{config::Config, runner};

pub fn run(config: &Config) -> anyhow::Result<()> {
    println!("Gathering data...");
    runner::gather(config, |script| {
        println!("Running {}...", script.file);
    })?;
    println!("\nData gathering complete!");
    Ok(())
}
