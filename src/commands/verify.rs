use crate::cli::Cli;
use crate::services::attest::attest;
use crate::services::output::print_json;

pub fn handle_verify(cli: &Cli) -> anyhow::Result<()> {
    let report = attest(&cli.verify)?;
    print_json(&report)
}
