use crate::output::print_json;
use anyhow::Context;
use pkm_core::{config::Config, report::Report};
use std::io::Write;

pub fn run(config: &Config, json: bool) -> anyhow::Result<()> {
    let report = Report::load(&config.data_dir());

    if json {
        return print_json(&report);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Generating report...")?;
    report.render(&mut out).context("failed to write report")?;
    out.flush()?;
    Ok(())
}
